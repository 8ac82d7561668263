//! Errors raised by presentation hosts.
//!
//! Building screens cannot fail; only emitting them can.

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostError {
    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Encoding the page as JSON failed.
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The host refused a panel.
    #[error("Host rejected screen '{screen}': {reason}")]
    Rejected { screen: String, reason: String },
}
