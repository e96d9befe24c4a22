// Turns a date-range form into one paginated fetch for the configured pair.
use crate::config::{EngineSettings, ExportSettings};
use crate::data::{BitstampClient, FetchReport, OhlcSource, Paginator};
use crate::error::EngineError;
use crate::services::presenter::{render, View};
use chrono::NaiveDate;
use shared::utils::{date_to_timestamp, parse_date};
use tracing::info;

pub const DEFAULT_START_DATE: &str = "2022-01-01";
pub const DEFAULT_END_DATE: &str = "2025-01-01";

// The two date inputs of the form. Dates are calendar days in UTC; the end
// date is exclusive (its midnight is the window end).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchForm {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl FetchForm {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        FetchForm { start_date, end_date }
    }

    pub fn parse(start: &str, end: &str) -> Result<Self, EngineError> {
        let start_date = parse_date(start)
            .map_err(|e| EngineError::InvalidDateRange(format!("start date '{}': {}", start, e)))?;
        let end_date = parse_date(end)
            .map_err(|e| EngineError::InvalidDateRange(format!("end date '{}': {}", end, e)))?;
        Ok(Self::new(start_date, end_date))
    }

    pub fn timestamps(&self) -> (i64, i64) {
        (date_to_timestamp(self.start_date), date_to_timestamp(self.end_date))
    }
}

impl Default for FetchForm {
    fn default() -> Self {
        let start_date = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap_or_default();
        let end_date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default();
        Self::new(start_date, end_date)
    }
}

pub struct HistoryService<S> {
    paginator: Paginator<S>,
    export: ExportSettings,
}

impl HistoryService<BitstampClient> {
    pub fn from_settings(settings: &EngineSettings) -> Result<Self, EngineError> {
        settings.validate()?;
        let client = BitstampClient::new(&settings.api)?;
        Ok(Self::new(client, settings))
    }
}

impl<S: OhlcSource> HistoryService<S> {
    pub fn new(source: S, settings: &EngineSettings) -> Self {
        let api = &settings.api;
        HistoryService {
            paginator: Paginator::new(source, api.pair.clone(), api.step, api.limit),
            export: settings.export.clone(),
        }
    }

    pub fn paginator(&self) -> &Paginator<S> {
        &self.paginator
    }

    pub async fn fetch(&self, form: &FetchForm) -> FetchReport {
        let (start, end) = form.timestamps();
        info!(
            pair = %self.paginator.pair(),
            start_date = %form.start_date,
            end_date = %form.end_date,
            start,
            end,
            "Fetching data"
        );
        self.paginator.fetch_range(start, end).await
    }

    // Fetch and render in one go; what both the GUI and the CLI need.
    pub async fn fetch_view(&self, form: &FetchForm) -> View {
        let report = self.fetch(form).await;
        render(form, Some(&report), &self.export)
    }
}
