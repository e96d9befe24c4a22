// Engine-internal models. Record types shared with the GUI live in `shared::models`.
pub mod window;

pub use window::QueryWindow;
