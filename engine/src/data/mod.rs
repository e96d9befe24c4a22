// Market data: the remote source, the paginator that walks it, and the
// dataset/CSV types the pages end up in.
pub mod bitstamp;
pub mod csv_export;
pub mod dataset;
pub mod paginator;
pub mod source;

pub use bitstamp::BitstampClient;
pub use csv_export::OhlcCsv;
pub use dataset::Dataset;
pub use paginator::{FetchReport, Paginator, StopReason};
pub use source::OhlcSource;
