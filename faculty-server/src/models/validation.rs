//! Validation error types

use thiserror::Error;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Field is empty (or whitespace only) when it shouldn't be
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// Numeric field below zero
    #[error("{field} cannot be negative")]
    Negative { field: &'static str },

    /// Value doesn't have the expected shape (e.g. a non-integer id)
    #[error("{field}: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },

    /// Request body could not be decoded into the expected record
    #[error("invalid request body: {reason}")]
    InvalidBody { reason: String },
}

impl ValidationError {
    /// Name of the offending field, when the error is tied to one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Empty { field } | Self::Negative { field } | Self::InvalidFormat { field, .. } => {
                Some(*field)
            }
            Self::InvalidBody { .. } => None,
        }
    }
}

/// Trim `s` and reject it if nothing is left.
pub(crate) fn non_empty(field: &'static str, s: &str) -> Result<String, ValidationError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Negative {
            field: "student_count",
        };
        assert_eq!(err.to_string(), "student_count cannot be negative");

        let err = ValidationError::InvalidBody {
            reason: "missing field `name`".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid request body: missing field `name`"
        );
    }

    #[test]
    fn field_is_reported() {
        assert_eq!(ValidationError::Empty { field: "name" }.field(), Some("name"));
        assert_eq!(
            ValidationError::InvalidBody { reason: "x".into() }.field(),
            None
        );
    }

    #[test]
    fn non_empty_trims() {
        assert_eq!(non_empty("name", "  Ada ").unwrap(), "Ada");
        assert!(matches!(
            non_empty("name", " \t "),
            Err(ValidationError::Empty { field: "name" })
        ));
    }
}
