// Walks a date window page by page, one request at a time, until the window
// is exhausted or the source stops answering.
use crate::data::dataset::{AppendStats, Dataset};
use crate::data::source::OhlcSource;
use crate::error::EngineError;
use crate::models::QueryWindow;
use shared::models::Step;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    // start >= end, checked before every request
    WindowExhausted,
    EmptyPage,
    // fewer than `limit` records: the source has nothing past this page
    ShortPage,
    // the last record of a full page did not move the window forward
    NoProgress,
    Failed,
}

#[derive(Debug)]
pub struct FetchReport {
    pub dataset: Dataset,
    pub pages: usize,
    pub duplicates: usize,
    pub out_of_window: usize,
    pub stop_reason: StopReason,
    // Out-of-band failure channel: the fetch never aborts with an error, it
    // stops and keeps what it already has.
    pub failure: Option<EngineError>,
}

impl FetchReport {
    fn new() -> Self {
        FetchReport {
            dataset: Dataset::new(),
            pages: 0,
            duplicates: 0,
            out_of_window: 0,
            stop_reason: StopReason::WindowExhausted,
            failure: None,
        }
    }

    fn record_page(&mut self, stats: AppendStats) {
        self.pages += 1;
        self.duplicates += stats.duplicates;
        self.out_of_window += stats.out_of_window;
    }
}

pub struct Paginator<S> {
    source: S,
    pair: String,
    step: Step,
    limit: u32,
}

impl<S: OhlcSource> Paginator<S> {
    pub fn new(source: S, pair: impl Into<String>, step: Step, limit: u32) -> Self {
        Paginator { source, pair: pair.into(), step, limit }
    }

    pub fn pair(&self) -> &str {
        &self.pair
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    // Collects every record in [start, end). Never returns an error: a failed
    // request ends the loop and lands in `FetchReport::failure`.
    pub async fn fetch_range(&self, start: i64, end: i64) -> FetchReport {
        let mut window = QueryWindow::new(start, end, self.step, self.limit);
        let bounds = start..end;
        let mut report = FetchReport::new();

        loop {
            if window.is_exhausted() {
                report.stop_reason = StopReason::WindowExhausted;
                break;
            }

            debug!(pair = %self.pair, start = window.start, end = window.end, page = report.pages + 1, "Fetching page");
            let page = match self.source.fetch_page(&self.pair, &window).await {
                Ok(page) => page,
                Err(e) => {
                    if e.is_transport() {
                        error!(pair = %self.pair, start = window.start, error = %e, "Error fetching page, stopping");
                    } else {
                        error!(pair = %self.pair, start = window.start, error = ?e, "Unexpected source error, stopping");
                    }
                    report.failure = Some(e);
                    report.stop_reason = StopReason::Failed;
                    break;
                }
            };

            let Some(last_timestamp) = page.last().map(|r| r.timestamp) else {
                report.pages += 1;
                report.stop_reason = StopReason::EmptyPage;
                break;
            };

            let stats = report.dataset.append_page(&page, &bounds);
            report.record_page(stats);
            debug!(
                received = page.len(),
                appended = stats.appended,
                duplicates = stats.duplicates,
                out_of_window = stats.out_of_window,
                last_timestamp,
                "Merged page"
            );

            if page.len() < self.limit as usize {
                report.stop_reason = StopReason::ShortPage;
                break;
            }
            if !window.advance_to(last_timestamp) {
                warn!(
                    pair = %self.pair,
                    start = window.start,
                    last_timestamp,
                    "Source returned a full page that does not advance the window, stopping"
                );
                report.stop_reason = StopReason::NoProgress;
                break;
            }
        }

        info!(
            pair = %self.pair,
            pages = report.pages,
            rows = report.dataset.len(),
            duplicates = report.duplicates,
            out_of_window = report.out_of_window,
            stop_reason = ?report.stop_reason,
            "Fetch finished"
        );
        report
    }
}
