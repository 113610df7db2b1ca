//! Error types for tokenization.

use command_tokenizer_core::OptionKind;
use thiserror::Error;

/// Errors raised while building lookup tables or stepping through tokens.
///
/// Malformed or unknown arguments are never errors: they are classified
/// heuristically. Only schema defects and internal invariant violations
/// surface here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    /// The same alias maps to options of different kinds.
    ///
    /// Raised while building the registry, before any token is read.
    #[error(
        "conflicting option definition for `{alias}`: `{existing}` is {existing_kind}, `{conflicting}` is {conflicting_kind}"
    )]
    ConflictingOptionDefinition {
        /// The alias string both options claim.
        alias: String,
        /// Primary name of the option registered first.
        existing: String,
        /// Kind of the option registered first.
        existing_kind: OptionKind,
        /// Primary name of the option that collided.
        conflicting: String,
        /// Kind of the option that collided.
        conflicting_kind: OptionKind,
    },

    /// More than one putback in a classification step, or a putback with
    /// nothing consumed. Indicates a resolver bug, not bad input.
    #[error("token cursor underflow at position {position}")]
    CursorUnderflow {
        /// Cursor position when the putback was attempted.
        position: usize,
    },
}

/// Convenience alias for results with [`TokenizeError`].
pub type Result<T> = std::result::Result<T, TokenizeError>;
