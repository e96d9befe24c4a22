// First rows of the fetched dataset
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::services::presenter::TableView;

#[component]
pub fn PreviewTable(table: TableView) -> Element {
    rsx! {
        table {
            class: "preview-table",
            thead {
                tr {
                    for column in table.columns {
                        th { key: "{column}", "{column}" }
                    }
                }
            }
            tbody {
                for row in table.preview.iter() {
                    tr {
                        key: "{row.timestamp}",
                        td { "{row.timestamp}" }
                        td { "{row.open}" }
                        td { "{row.high}" }
                        td { "{row.low}" }
                        td { "{row.close}" }
                        td { "{row.volume}" }
                    }
                }
            }
        }
    }
}
