// Engine library root: settings, the Bitstamp pagination core, CSV export
// and the view model consumed by the GUI and the `engine` binary.

pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod services;

pub use error::EngineError;
