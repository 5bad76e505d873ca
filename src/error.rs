use std::fmt::Display;

/// Returned when peeking into an empty `Seq`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoSuchElement {
    message: String,
}

impl NoSuchElement {
    pub(crate) fn empty_sequence() -> NoSuchElement {
        NoSuchElement {
            message: "sequence is empty.".to_string(),
        }
    }

    /// Human-readable description of the failure.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for NoSuchElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.message, f)
    }
}

impl std::error::Error for NoSuchElement {}

/// Returned when a position is not within `[0, size)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    message: String,
}

impl IndexOutOfBounds {
    pub(crate) fn invalid_index(index: usize, size: usize) -> IndexOutOfBounds {
        IndexOutOfBounds {
            message: format!("invalid index {} for sequence of size {}.", index, size),
        }
    }

    pub(crate) fn index_too_large(index: usize, size: usize) -> IndexOutOfBounds {
        IndexOutOfBounds {
            message: format!("index {} too large for sequence of size {}.", index, size),
        }
    }

    /// Human-readable description of the failure.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.message, f)
    }
}

impl std::error::Error for IndexOutOfBounds {}

/// Either of the `Seq` failure kinds, for callers that mix positional access and peeks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeqError {
    NoSuchElement(NoSuchElement),
    IndexOutOfBounds(IndexOutOfBounds),
}

impl Display for SeqError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeqError::NoSuchElement(e) => write!(f, "no such element - {}", e),
            SeqError::IndexOutOfBounds(e) => write!(f, "index out of bounds - {}", e),
        }
    }
}

impl std::error::Error for SeqError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SeqError::NoSuchElement(e) => Some(e),
            SeqError::IndexOutOfBounds(e) => Some(e),
        }
    }
}

impl From<NoSuchElement> for SeqError {
    fn from(e: NoSuchElement) -> Self {
        SeqError::NoSuchElement(e)
    }
}

impl From<IndexOutOfBounds> for SeqError {
    fn from(e: IndexOutOfBounds) -> Self {
        SeqError::IndexOutOfBounds(e)
    }
}
