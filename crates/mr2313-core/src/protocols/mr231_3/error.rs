use thiserror::Error;

/// Errors returned by MR-231-3 sentence decoding.
///
/// Every variant aborts the decode of the whole sentence; no partial
/// message is ever emitted alongside one of these.
///
/// # Examples
/// ```
/// use mr2313_core::DecodeError;
///
/// let err = DecodeError::MissingChecksumDelimiter;
/// assert!(err.to_string().contains("checksum delimiter"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("sentence too short: need {needed} characters, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("missing checksum delimiter '*'")]
    MissingChecksumDelimiter,
    #[error("{tag} sentence has too few fields: need {needed}, got {actual}")]
    TooFewFields {
        tag: &'static str,
        needed: usize,
        actual: usize,
    },
    #[error("invalid number in {tag} field {index}: {value:?}")]
    InvalidNumber {
        tag: &'static str,
        index: usize,
        value: String,
    },
}

impl DecodeError {
    /// True for framing problems (missing delimiter, short line or field list).
    pub fn is_malformed_frame(&self) -> bool {
        matches!(
            self,
            DecodeError::TooShort { .. }
                | DecodeError::MissingChecksumDelimiter
                | DecodeError::TooFewFields { .. }
        )
    }
}
