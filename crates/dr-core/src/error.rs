//! Core error type.
//!
//! `dr-network` and `dr-routing` define their own enums; `RouteError` wraps
//! `CoreError` as one variant.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
