//! Error types for the domain layer
//!
//! Payload and timestamp failures are contract violations: a notification of a
//! known type that lacks a field, or carries one of the wrong shape, is never
//! rendered with a default in its place.

use thiserror::Error;

/// Failure to decode or read a notification payload
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PayloadError {
    /// The embedded text is not a well-formed key-value document
    #[error("Payload decode error: {0}")]
    Decode(String),

    /// A field the rule needs is absent
    #[error("Missing payload field: {field}")]
    MissingField { field: &'static str },

    /// A field is present but has the wrong shape
    #[error("Payload field {field} is not {expected}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },

    /// A list field is shorter than the element the rule reads
    #[error("Payload field {field} has no element {index} (length {len})")]
    IndexOutOfRange {
        field: &'static str,
        index: usize,
        len: usize,
    },
}

impl PayloadError {
    pub fn decode(msg: impl ToString) -> Self {
        Self::Decode(msg.to_string())
    }

    pub fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    pub fn mismatch(field: &'static str, expected: &'static str) -> Self {
        Self::TypeMismatch { field, expected }
    }

    /// Check if this error means the payload violated a rule's field contract.
    pub fn is_contract_violation(&self) -> bool {
        !matches!(self, Self::Decode(_))
    }
}

/// Failure to turn a notification timestamp into a calendar date
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimestampError {
    #[error("Malformed timestamp: {0:?}")]
    Malformed(String),

    #[error("Timestamp out of range: {0} ticks")]
    OutOfRange(i64),
}
