#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::data::BitstampClient;
use engine::services::presenter::ViewBody;
use engine::services::HistoryService;
use std::sync::Arc;

use crate::components::{DateRangeForm, Notices, PreviewTable, Toolbar};
use crate::config::AppConfig;
use crate::state::app_state::AppState;

pub type SharedService = Arc<HistoryService<BitstampClient>>;

// Root component: the form, the notices, and the preview/download section.
// One fetch runs at a time; the form is disabled until it finishes.
#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let service = use_context::<SharedService>();
    let mut state = use_signal(|| AppState::new(&config));
    let export_dir = config.engine.export.directory.clone();

    let on_fetch = move |_: ()| {
        let parsed = state.read().form();
        let form = match parsed {
            Ok(form) => form,
            Err(e) => {
                state.write().reject_input(e);
                return;
            }
        };
        state.write().begin_fetch(&form);

        let service = service.clone();
        spawn(async move {
            let view = service.fetch_view(&form).await;
            state.write().finish_fetch(view);
        });
    };

    let current = state.read();
    let css = current.theme.palette().stylesheet();
    let title = current.view.title;
    let notices = current.view.notices.clone();
    let save_notice = current.save_notice.clone().into_iter().collect::<Vec<_>>();

    let results = match &current.view.body {
        ViewBody::Table(table) => {
            let toolbar = match &table.download {
                Some(download) => rsx! {
                    Toolbar { download: download.clone(), export_dir: export_dir.clone(), state: state }
                },
                None => None,
            };
            rsx! {
                PreviewTable { table: table.clone() }
                {toolbar}
                Notices { notices: save_notice }
            }
        }
        ViewBody::NoData | ViewBody::Idle => None,
    };
    drop(current);

    rsx! {
        style { "{css}" }
        h1 { "{title}" }
        DateRangeForm { state: state, on_fetch: on_fetch }
        Notices { notices: notices }
        {results}
    }
}
