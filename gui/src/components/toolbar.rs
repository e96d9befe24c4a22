// Download action for the fetched dataset
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::services::presenter::Download;
use std::path::PathBuf;

use crate::state::app_state::AppState;

// Desktop has no browser download manager: "Download CSV" writes the file
// into the configured export directory and reports where it went.
#[component]
pub fn Toolbar(download: Download, export_dir: PathBuf, state: Signal<AppState>) -> Element {
    let mut state = state;
    let label = format!("Download CSV ({})", download.file_name);
    let mime_type = download.mime_type;

    rsx! {
        div {
            class: "toolbar",
            button {
                title: "{mime_type}",
                onclick: move |_| {
                    let result = download.save_to(&export_dir);
                    state.write().record_save(result);
                },
                "{label}"
            }
        }
    }
}
