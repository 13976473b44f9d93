//! Error and outcome types for move translation.
//!
//! Translation is best effort: ambiguity in descriptive notation is routine,
//! so a failed move is returned as a marked placeholder rather than an `Err`.
//! `NotationError` names what went wrong; `TranslatedMove` carries either a
//! clean algebraic move or the placeholder together with its diagnostic.

use std::fmt;

/// Appended to the original text of a move that could not be translated.
pub const UNPARSEABLE_MARKER: &str = "[?]";

/// Appended to a capture whose destination square must be filled in by hand.
pub const NEEDS_SQUARE_MARKER: &str = "?";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// The move did not reduce to one origin and one destination.
    #[error("move does not split into origin and destination: {0}")]
    UnparseableMove(String),

    /// The destination is neither a square nor a piece name.
    #[error("destination is neither a square nor a piece name: {0}")]
    UnresolvableDestination(String),

    /// The destination names the captured piece; a board is needed to find
    /// the square.
    #[error("capture names a piece instead of a square: {piece}x{captured}")]
    AmbiguousCapture { piece: String, captured: String },

    /// The file part of a square is not a descriptive file.
    #[error("unrecognized descriptive file: {0}")]
    UnrecognizedFile(String),

    /// A parenthesised hint is neither a rank nor a file.
    #[error("unrecognized disambiguation hint: {0}")]
    UnrecognizedDisambiguationHint(String),
}

/// Result of translating one descriptive move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslatedMove {
    Clean(String),
    NeedsSquare {
        partial: String,
        error: NotationError,
    },
    Unparseable {
        original: String,
        error: NotationError,
    },
}

impl TranslatedMove {
    #[inline]
    pub fn is_clean(&self) -> bool {
        matches!(self, TranslatedMove::Clean(_))
    }

    pub fn error(&self) -> Option<&NotationError> {
        match self {
            TranslatedMove::Clean(_) => None,
            TranslatedMove::NeedsSquare { error, .. } | TranslatedMove::Unparseable { error, .. } => {
                Some(error)
            }
        }
    }
}

impl fmt::Display for TranslatedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslatedMove::Clean(algebraic) => f.write_str(algebraic),
            TranslatedMove::NeedsSquare { partial, .. } => {
                write!(f, "{partial}{NEEDS_SQUARE_MARKER}")
            }
            TranslatedMove::Unparseable { original, .. } => {
                write!(f, "{original}{UNPARSEABLE_MARKER}")
            }
        }
    }
}
