// GUI state
pub mod app_state;
