//! # Error Types — Structured Error Hierarchy
//!
//! Errors raised at the boundaries of the core types. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! The workflow validator itself never raises errors — rejected transitions
//! are reported as values (see `signops-workflow`). The errors here cover
//! the parse boundaries where stored strings enter the typed catalog.

use thiserror::Error;

/// A stored status string is not registered in the catalog.
///
/// Statuses are an open string vocabulary in the persistence layer's JSON;
/// any value must be registered in the catalog before it can transition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatusParseError {
    /// Unknown job status string.
    #[error("unknown job status: {value:?}")]
    UnknownJobStatus {
        /// The unrecognized stored value.
        value: String,
    },

    /// Unknown payment status string.
    #[error("unknown payment status: {value:?}")]
    UnknownPaymentStatus {
        /// The unrecognized stored value.
        value: String,
    },

    /// Unknown payment mode string.
    #[error("unknown payment mode: {value:?}")]
    UnknownPaymentMode {
        /// The unrecognized stored value.
        value: String,
    },
}

/// A stored timestamp string could not be normalized to UTC.
#[derive(Error, Debug)]
pub enum TimestampParseError {
    /// The timestamp carries a non-Z offset.
    #[error("timestamp must use Z suffix (UTC only), got: {input:?}")]
    NonUtc {
        /// The rejected input.
        input: String,
    },

    /// The string is not valid RFC 3339.
    #[error("invalid RFC 3339 timestamp {input:?}: {source}")]
    Invalid {
        /// The rejected input.
        input: String,
        /// The underlying parse error.
        source: chrono::ParseError,
    },
}
