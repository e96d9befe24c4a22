// Engine configuration
pub mod settings;

pub use settings::{ApiSettings, EngineSettings, ExportSettings};
