// Start/end date pickers and the fetch trigger
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::state::app_state::AppState;

#[component]
pub fn DateRangeForm(state: Signal<AppState>, on_fetch: EventHandler<()>) -> Element {
    let mut state = state;
    let (start, end, fetching) = {
        let current = state.read();
        (current.start_input.clone(), current.end_input.clone(), current.fetching)
    };

    rsx! {
        div {
            class: "date-range-form",
            label {
                "Start Date "
                input {
                    r#type: "date",
                    value: "{start}",
                    disabled: fetching,
                    oninput: move |evt: FormEvent| state.write().start_input = evt.value(),
                }
            }
            label {
                " End Date "
                input {
                    r#type: "date",
                    value: "{end}",
                    disabled: fetching,
                    oninput: move |evt: FormEvent| state.write().end_input = evt.value(),
                }
            }
            button {
                disabled: fetching,
                onclick: move |_| on_fetch.call(()),
                "Fetch Data"
            }
        }
    }
}
