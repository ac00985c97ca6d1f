//! Error taxonomy for the todos request contract.
//!
//! # Design
//! Each variant corresponds to one validation outcome a caller can
//! distinguish, maps deterministically to one HTTP status, and renders one
//! wire message through `Display`. "Missing" and "invalid" are separate
//! variants rather than one malformed-input bucket because an absent key and
//! an unusable value produce different statuses (422 vs 400).

use std::fmt;

/// Errors produced by validating a todos request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A required parameter was structurally absent from the request.
    MissingParameter(&'static str),

    /// A parameter was present but failed a format or type check.
    InvalidParameter(&'static str),

    /// A well-formed identifier did not resolve to an existing record.
    NotFound(String),
}

impl ApiError {
    /// The HTTP status this error maps to.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::MissingParameter(_) => 422,
            ApiError::InvalidParameter(_) => 400,
            ApiError::NotFound(_) => 404,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MissingParameter(name) => write!(f, "Missing parameter '{name}'"),
            ApiError::InvalidParameter(name) => write!(f, "Invalid parameter '{name}'"),
            ApiError::NotFound(id) => write!(f, "Not found '{id}'"),
        }
    }
}

impl std::error::Error for ApiError {}
