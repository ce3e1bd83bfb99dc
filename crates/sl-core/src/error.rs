//! Workspace base error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` via `From`
//! where a core failure can surface through them.

use thiserror::Error;

/// Errors produced by `sl-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `sl-core`.
pub type CoreResult<T> = Result<T, CoreError>;
