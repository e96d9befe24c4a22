// Application services: the fetch workflow and its view model.
pub mod history_service;
pub mod presenter;

pub use history_service::{FetchForm, HistoryService};
pub use presenter::{render, View, ViewBody};
