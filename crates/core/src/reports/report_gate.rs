//! Shared-secret gate for the internal report view.
//!
//! This is a coarse check, not a per-user capability: anyone holding the
//! current token can render any user's report.

use std::sync::{PoisonError, RwLock};

use log::info;
use sha2::{Digest, Sha256};

use crate::errors::{Error, Result};

/// Proof that the gate accepted a token. Only `ReportGate::verify` builds one.
#[derive(Debug)]
pub struct ReportAccess {
    _verified: (),
}

#[derive(Debug)]
pub struct ReportGate {
    token: RwLock<String>,
}

impl ReportGate {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(token.into()),
        }
    }

    /// Checks a request token before any backend work happens.
    pub fn verify(&self, candidate: Option<&str>) -> Result<ReportAccess> {
        let candidate = candidate.unwrap_or_default();
        let current = self.token.read().unwrap_or_else(PoisonError::into_inner);
        if candidate.is_empty() || current.is_empty() {
            return Err(Error::Forbidden);
        }
        if digests_match(candidate.as_bytes(), current.as_bytes()) {
            Ok(ReportAccess { _verified: () })
        } else {
            Err(Error::Forbidden)
        }
    }

    /// Replaces the secret; tokens handed out before this call stop working.
    pub fn rotate(&self, token: impl Into<String>) {
        let mut current = self.token.write().unwrap_or_else(PoisonError::into_inner);
        *current = token.into();
        info!("Report gate token rotated");
    }

    pub fn current_token(&self) -> String {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Compares fixed-size digests without short-circuiting on the first mismatch.
fn digests_match(a: &[u8], b: &[u8]) -> bool {
    let (da, db) = (Sha256::digest(a), Sha256::digest(b));
    da.iter().zip(db.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
