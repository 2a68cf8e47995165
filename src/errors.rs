//! Error codes and the error type shared by every tag operation.
//!
//! Two conditions exist.  Both are raised at the point of detection and
//! neither yields a partial result: the caller decides whether to drop the
//! record or the connection.

use std::fmt;

// ── Error codes ──────────────────────────────────────────────

/// A payload or declared length exceeds `MAX_TAG_DATA_LENGTH`, or an
/// explicitly sized view does not fit its buffer.
pub const ERR_INVALID_ARGUMENT: &str = "ERR_INVALID_ARGUMENT";

/// A tag list is structurally broken: truncated tag, cursor overrun,
/// trailing bytes, or a zero length field.
pub const ERR_MALFORMED_TAG_LIST: &str = "ERR_MALFORMED_TAG_LIST";

/// Tag encoding or decoding error.
///
/// `code` is one of the `ERR_*` constants and is what callers and tests
/// match on.  `message` is human-readable context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagError {
    pub code: &'static str,
    pub message: String,
}

impl TagError {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ERR_INVALID_ARGUMENT, message)
    }

    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::new(ERR_MALFORMED_TAG_LIST, message)
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.code == ERR_INVALID_ARGUMENT
    }

    pub fn is_malformed(&self) -> bool {
        self.code == ERR_MALFORMED_TAG_LIST
    }
}

impl fmt::Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for TagError {}
