//! PatoCash Core - domain entities, services, and traits.
//!
//! This crate holds the budgeting and report logic of the PatoCash web front.
//! It is transport-agnostic and defines the traits that the `backend-client`
//! (HTTP) and `browser` (headless Chromium) crates implement.

pub mod backend;
pub mod budget;
pub mod errors;
pub mod export;
pub mod goals;
pub mod overview;
pub mod reports;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
