//! Errors raised by tree mutations.

use thiserror::Error;

/// Broad class of an [`EditError`], used by front-ends to pick a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A reference, selection or uniqueness check failed.
    Validation,
    /// Text could not be read as the expected kind of value.
    Format,
}

/// A rejected edit. The tree is never modified when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("no character with id \"{0}\"")]
    UnknownName(String),

    #[error("a character with id \"{0}\" already exists")]
    DuplicateName(String),

    #[error("character id must not be empty")]
    EmptyName,

    #[error("no death recorded for \"{0}\" on this route")]
    NoSuchDeath(String),

    #[error("a death for \"{0}\" is already recorded on this route")]
    DeathExists(String),

    #[error("no base route with id {0}")]
    NoSuchRoute(String),

    #[error("selection {index} is out of range (0..{len})")]
    OutOfRange { index: usize, len: usize },

    #[error("route has no branch")]
    NoBranch,

    #[error("a branch needs at least one choice")]
    EmptyBranch,

    #[error("no choice with direction \"{0}\"")]
    NoSuchDirection(String),

    #[error("\"{0}\" is not an integer")]
    NotAnInteger(String),
}

impl EditError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EditError::NotAnInteger(_) => ErrorKind::Format,
            _ => ErrorKind::Validation,
        }
    }

    /// Check bounds of a selection against a collection length.
    pub fn check_index(index: usize, len: usize) -> Result<(), EditError> {
        if index < len {
            Ok(())
        } else {
            Err(EditError::OutOfRange { index, len })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(EditError::NotAnInteger("x".into()).kind(), ErrorKind::Format);
        assert_eq!(EditError::UnknownName("amy".into()).kind(), ErrorKind::Validation);
        assert_eq!(
            EditError::OutOfRange { index: 3, len: 2 }.kind(),
            ErrorKind::Validation
        );
    }

    #[test]
    fn test_check_index() {
        assert!(EditError::check_index(0, 1).is_ok());
        assert_eq!(
            EditError::check_index(1, 1),
            Err(EditError::OutOfRange { index: 1, len: 1 })
        );
    }
}
