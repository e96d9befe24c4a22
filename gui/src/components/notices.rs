// Info and error lines above the table
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::services::presenter::{Notice, NoticeLevel};

#[component]
pub fn Notices(notices: Vec<Notice>) -> Element {
    let lines: Vec<(&'static str, String)> = notices
        .iter()
        .map(|notice| {
            let class = match notice.level {
                NoticeLevel::Info => "notice-info",
                NoticeLevel::Error => "notice-error",
            };
            (class, notice.text.clone())
        })
        .collect();

    rsx! {
        div {
            class: "notices",
            for (i, (class, text)) in lines.into_iter().enumerate() {
                p { key: "{i}", class: "{class}", "{text}" }
            }
        }
    }
}
