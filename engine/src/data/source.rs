// The network seam: anything that can answer one page request.
use crate::error::EngineError;
use crate::models::QueryWindow;
use shared::models::OhlcRecord;
use std::future::Future;

pub trait OhlcSource {
    // Requests up to `window.limit` records of width `window.step` for `pair`,
    // starting at `window.start` and bounded above by `window.end`.
    // An empty `Vec` means the source has nothing more for this window.
    fn fetch_page(
        &self,
        pair: &str,
        window: &QueryWindow,
    ) -> impl Future<Output = Result<Vec<OhlcRecord>, EngineError>> + Send;
}
