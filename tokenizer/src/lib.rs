//! Schema-driven command-line tokenizer.
//!
//! Given a [`Command`] tree and raw argument tokens, this crate produces an
//! ordered stream of [`ParsedArg`] events: sub-commands entered, positional
//! values, options with their values, and flags with their polarity. Value
//! coercion, defaults, `required` and `choices` are left to the caller.
//!
//! # Pipeline
//!
//! - [`Registry`] compiles the tree into long/short lookup tables, adding
//!   `no-` forms for flags and rejecting aliases declared with two kinds.
//! - [`TokenCursor`] walks the tokens with a single-step putback.
//! - [`classify`] decides the [`TokenKind`] of each token.
//! - The option resolver expands short clusters, splits `=` values, and
//!   decides whether the next token is a value.
//! - [`Tokenizer`] drives the loop and descends into sub-commands.
//! - [`suggest`] replays a partial line to compute completion candidates.
//!
//! # Example
//!
//! ```
//! use command_tokenizer::{ParsedArg, parse};
//! use command_tokenizer_core::{Command, OptionDef, ValueKind};
//!
//! let schema = Command::new()
//!     .with_option("all", OptionDef::flag().with_alias("a"))
//!     .with_option("color", OptionDef::flag())
//!     .with_option("width", OptionDef::value(ValueKind::Number).with_alias("w"));
//!
//! let events = parse(&schema, &["-aw", "80", "--no-color", "src", "--", "-x"]).unwrap();
//! assert_eq!(
//!     events,
//!     vec![
//!         ParsedArg::flag("all"),
//!         ParsedArg::option("width", "80"),
//!         ParsedArg::Flag { name: "color".into(), value: false },
//!         ParsedArg::positional("src"),
//!         ParsedArg::positional("-x"),
//!     ]
//! );
//! ```
//!
//! [`Command`]: command_tokenizer_core::Command

mod classify;
mod complete;
mod cursor;
mod error;
mod event;
mod registry;
mod resolve;
mod tokenizer;

pub use classify::{BREAKOUT, DASH, TokenKind, classify};
pub use complete::{Completion, suggest};
pub use cursor::TokenCursor;
pub use error::{Result, TokenizeError};
pub use event::{NEGATION_PREFIX, ParsedArg};
pub use registry::{OptionEntry, Registry};
pub use tokenizer::{ParseOutcome, Tokenizer, parse};
