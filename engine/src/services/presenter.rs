// View model for the fetch screen.
// `render` maps the form and an optional fetch report to a plain `View`
// value. The GUI draws it with Dioxus, the CLI prints it with
// `View::to_text`; neither needs to know how the data was fetched.

use crate::config::ExportSettings;
use crate::data::csv_export::{OhlcCsv, HEADER, MIME_TYPE};
use crate::data::FetchReport;
use crate::error::EngineError;
use crate::services::history_service::FetchForm;
use shared::models::OhlcRecord;
use shared::utils::format_timestamp;
use std::path::{Path, PathBuf};

pub const TITLE: &str = "Bitcoin Historical Data Fetcher";
pub const NO_DATA_MESSAGE: &str = "No data fetched. Please check the date range.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Notice { level: NoticeLevel::Info, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Notice { level: NoticeLevel::Error, text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewRow {
    pub timestamp: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl From<&OhlcRecord> for PreviewRow {
    fn from(record: &OhlcRecord) -> Self {
        PreviewRow {
            timestamp: format_timestamp(record.timestamp),
            open: record.open,
            high: record.high,
            low: record.low,
            close: record.close,
            volume: record.volume,
        }
    }
}

// A file offered to the user: the full dataset as CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub mime_type: &'static str,
    pub contents: String,
}

impl Download {
    pub fn save_to(&self, directory: &Path) -> Result<PathBuf, EngineError> {
        std::fs::create_dir_all(directory)?;
        let path = directory.join(&self.file_name);
        std::fs::write(&path, &self.contents)?;
        tracing::info!(path = %path.display(), bytes = self.contents.len(), "Saved CSV export");
        Ok(path)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub row_count: usize,
    pub columns: [&'static str; 6],
    pub preview: Vec<PreviewRow>,
    // None when the CSV could not be built; an error notice explains why.
    pub download: Option<Download>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewBody {
    // Nothing fetched yet.
    Idle,
    NoData,
    Table(TableView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub title: &'static str,
    pub start_date: String,
    pub end_date: String,
    pub notices: Vec<Notice>,
    pub body: ViewBody,
}

impl View {
    pub fn has_errors(&self) -> bool {
        self.notices.iter().any(|n| n.level == NoticeLevel::Error)
    }

    pub fn download(&self) -> Option<&Download> {
        match &self.body {
            ViewBody::Table(table) => table.download.as_ref(),
            _ => None,
        }
    }

    // Plain-text rendering for terminals.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for notice in &self.notices {
            match notice.level {
                NoticeLevel::Info => out.push_str(&notice.text),
                NoticeLevel::Error => {
                    out.push_str("error: ");
                    out.push_str(&notice.text);
                }
            }
            out.push('\n');
        }
        if let ViewBody::Table(table) = &self.body {
            out.push_str(&format!(
                "{:<19}  {:>12}  {:>12}  {:>12}  {:>12}  {:>14}\n",
                table.columns[0], table.columns[1], table.columns[2], table.columns[3], table.columns[4], table.columns[5]
            ));
            for row in &table.preview {
                out.push_str(&format!(
                    "{:<19}  {:>12}  {:>12}  {:>12}  {:>12}  {:>14}\n",
                    row.timestamp, row.open, row.high, row.low, row.close, row.volume
                ));
            }
        }
        out
    }
}

pub fn fetching_message(form: &FetchForm) -> String {
    format!("Fetching data from {} to {}...", form.start_date, form.end_date)
}

// Builds what the screen shows for `form`, before (`report == None`) or after a fetch.
pub fn render(form: &FetchForm, report: Option<&FetchReport>, export: &ExportSettings) -> View {
    let mut view = View {
        title: TITLE,
        start_date: form.start_date.to_string(),
        end_date: form.end_date.to_string(),
        notices: Vec::new(),
        body: ViewBody::Idle,
    };
    let Some(report) = report else {
        return view;
    };

    view.notices.push(Notice::info(fetching_message(form)));
    if let Some(failure) = &report.failure {
        view.notices.push(Notice::error(format!("Error fetching data: {}", failure)));
    }

    if report.dataset.is_empty() {
        view.notices.push(Notice::error(NO_DATA_MESSAGE));
        view.body = ViewBody::NoData;
        return view;
    }

    let row_count = report.dataset.len();
    view.notices.push(Notice::info(format!("Fetched {} rows of data.", row_count)));

    let download = match OhlcCsv::to_csv_string(report.dataset.records()) {
        Ok(contents) => Some(Download {
            file_name: export.file_name.clone(),
            mime_type: MIME_TYPE,
            contents,
        }),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize dataset to CSV");
            view.notices.push(Notice::error(format!("Failed to build CSV: {}", e)));
            None
        }
    };

    view.body = ViewBody::Table(TableView {
        row_count,
        columns: HEADER,
        preview: report.dataset.head(export.preview_rows).iter().map(PreviewRow::from).collect(),
        download,
    });
    view
}
