//! # AppError
//!
//! Centralized failure value for the food-db layers.
//! An error carries a machine-readable code, a human message and the ordered
//! list of lower-level errors that caused it.

use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Failure category of an [`AppError`].
///
/// This is a closed set: the HTTP boundary matches on it without a wildcard,
/// so a new variant does not compile until it has a translation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Generic failure with no more specific category.
    Error,
}

impl ErrorCode {
    /// Every defined code, in declaration order.
    pub const ALL: &'static [ErrorCode] = &[ErrorCode::Error];

    /// Stable identifier exposed to clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Error => "Error",
        }
    }
}

// Serialized through `as_str` so the wire name has a single source.
impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The failure value passed between repository, service and boundary.
///
/// Immutable once built. Causes can only be attached while composing the
/// value through the consuming `with_cause*` builders.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{message}")]
#[serde(rename_all = "camelCase")]
pub struct AppError {
    code: ErrorCode,
    message: String,
    caused_by: Vec<AppError>,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            caused_by: Vec::new(),
        }
    }

    /// Builds an error with the generic [`ErrorCode::Error`] code.
    pub fn from_message(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Error, message)
    }

    /// Returns this error with `cause` appended to its chain.
    pub fn with_cause(mut self, cause: AppError) -> Self {
        self.caused_by.push(cause);
        self
    }

    /// Returns this error with every item of `causes` appended, in order.
    pub fn with_causes(mut self, causes: impl IntoIterator<Item = AppError>) -> Self {
        self.caused_by.extend(causes);
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Errors that contributed to this one. Empty for a root cause.
    pub fn caused_by(&self) -> &[AppError] {
        &self.caused_by
    }

    pub fn is_root_cause(&self) -> bool {
        self.caused_by.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_error_starts_as_root_cause() {
        let err = AppError::new(ErrorCode::Error, "Not found");
        assert_eq!(err.code(), ErrorCode::Error);
        assert_eq!(err.message(), "Not found");
        assert!(err.caused_by().is_empty());
        assert!(err.is_root_cause());
    }

    #[test]
    fn from_message_uses_generic_code() {
        let err = AppError::from_message("boom");
        assert_eq!(err.code(), ErrorCode::Error);
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn with_cause_keeps_original_untouched() {
        let inner = AppError::from_message("disk full");
        let outer = AppError::from_message("write failed").with_cause(inner.clone());
        let wrapped = outer.clone().with_cause(AppError::from_message("retry failed"));

        assert_eq!(outer.caused_by(), &[inner]);
        assert_eq!(wrapped.caused_by().len(), 2);
        assert_eq!(wrapped.caused_by()[1].message(), "retry failed");
    }

    #[test]
    fn serializes_with_camel_case_chain() {
        let err = AppError::from_message("outer").with_cause(AppError::from_message("inner"));
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "Error");
        assert_eq!(json["message"], "outer");
        assert_eq!(json["causedBy"][0]["message"], "inner");
        assert_eq!(json["causedBy"][0]["causedBy"], serde_json::json!([]));
    }

    #[test]
    fn every_code_has_a_distinct_identifier() {
        let mut seen: Vec<_> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), ErrorCode::ALL.len());
    }

    #[test]
    fn wire_name_matches_identifier() {
        for code in ErrorCode::ALL {
            let json = serde_json::to_value(code).unwrap();
            assert_eq!(json, code.as_str());
            assert_eq!(code.to_string(), code.as_str());
        }
    }
}
