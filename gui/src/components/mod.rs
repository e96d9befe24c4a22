// GUI components module
pub mod date_range_form;
pub mod notices;
pub mod preview_table;
pub mod toolbar;

pub use date_range_form::DateRangeForm;
pub use notices::Notices;
pub use preview_table::PreviewTable;
pub use toolbar::Toolbar;
