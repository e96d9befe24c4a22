// Shared data models and date helpers used by both the engine and the GUI.
pub mod models;
pub mod utils;
