//! Error types for the codec helpers.
//!
//! Grammar validation itself never errors: malformed input is the
//! negative classification result. Errors arise only when decoding
//! octets back into text or resolving against an unusable base.

use std::fmt;

/// Errors from percent-decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The decoded octets are not valid UTF-8.
    InvalidUtf8 {
        /// Length of the longest valid UTF-8 prefix of the decoded octets.
        valid_up_to: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUtf8 { valid_up_to } => {
                write!(
                    f,
                    "percent-decoded octets are not valid UTF-8 past byte {valid_up_to}"
                )
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Errors from joining a reference against a base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinError {
    /// The base is itself relative: it has no scheme to resolve under.
    RelativeBase {
        /// The offending base string.
        base: String,
    },
}

impl fmt::Display for JoinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RelativeBase { base } => {
                write!(f, "cannot join against '{base}': base has no scheme")
            }
        }
    }
}

impl std::error::Error for JoinError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_message_names_the_offset() {
        let err = DecodeError::InvalidUtf8 { valid_up_to: 4 };
        assert_eq!(
            err.to_string(),
            "percent-decoded octets are not valid UTF-8 past byte 4"
        );
    }

    #[test]
    fn join_error_message_names_the_base() {
        let err = JoinError::RelativeBase {
            base: "a/b".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cannot join against 'a/b': base has no scheme"
        );
    }
}
