//! PatoCash Backend Client - HTTP access to the PatoCash data service.
//!
//! Implements `patocash_core::backend::BackendClientTrait` on top of `reqwest`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use patocash_backend_client::BackendClient;
//!
//! let client = BackendClient::new("http://localhost:5000", Duration::from_secs(30))?;
//! let cards = client.get_cards(&UserId::new("42")).await?;
//! ```

mod client;
mod error;

pub use client::BackendClient;
pub use error::{BackendClientError, Result};
