pub mod api;
pub mod config;
pub mod error;
mod main_lib;
pub mod scheduler;
pub mod session;
pub mod views;

pub use main_lib::{build_state, generate_report_token, init_tracing, AppState};
