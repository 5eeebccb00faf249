//! Headless Chromium implementation of the PatoCash browser engine contract.
//!
//! Every `launch` starts a fresh browser process with its own throwaway
//! profile directory. Sessions are never pooled.

mod engine;

pub use engine::{ChromiumConfig, ChromiumEngine, ChromiumSession};
