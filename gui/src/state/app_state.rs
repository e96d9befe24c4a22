// Everything the fetch screen shows, kept outside the component tree so the
// transitions can be tested without a window. The root component owns one
// of these in a signal.

use crate::config::theme::Theme;
use crate::config::AppConfig;
use engine::services::presenter::{fetching_message, render, Notice, View};
use engine::services::FetchForm;
use engine::EngineError;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub theme: Theme,
    pub start_input: String,
    pub end_input: String,
    pub fetching: bool,
    pub view: View,
    // Result of the last "Download CSV" click.
    pub save_notice: Option<Notice>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let form = config.form.to_form().unwrap_or_default();
        Self {
            theme: Theme::from_name(&config.app.theme),
            start_input: config.form.start_date.clone(),
            end_input: config.form.end_date.clone(),
            fetching: false,
            view: render(&form, None, &config.engine.export),
            save_notice: None,
        }
    }

    pub fn form(&self) -> Result<FetchForm, EngineError> {
        FetchForm::parse(&self.start_input, &self.end_input)
    }

    // Shows the progress line and locks the button until `finish_fetch`.
    pub fn begin_fetch(&mut self, form: &FetchForm) {
        self.fetching = true;
        self.save_notice = None;
        self.view.start_date = form.start_date.to_string();
        self.view.end_date = form.end_date.to_string();
        self.view.notices = vec![Notice::info(fetching_message(form))];
    }

    pub fn finish_fetch(&mut self, view: View) {
        self.fetching = false;
        self.view = view;
    }

    pub fn reject_input(&mut self, err: EngineError) {
        tracing::warn!(error = %err, "Rejected form input");
        self.view.notices = vec![Notice::error(err.to_string())];
    }

    pub fn record_save(&mut self, result: Result<PathBuf, EngineError>) {
        self.save_notice = Some(match result {
            Ok(path) => Notice::info(format!("Saved {}", path.display())),
            Err(e) => {
                tracing::error!(error = %e, "Failed to save CSV export");
                Notice::error(format!("Failed to save CSV: {}", e))
            }
        });
    }
}
