//! Declarative command schema types.
//!
//! This crate defines the data model a tokenizer resolves arguments
//! against:
//!
//! - [`Command`] — a node of the command tree (options, positionals,
//!   sub-commands).
//! - [`OptionDef`] — an option with its [`OptionKind`], aliases and inert
//!   caller metadata (default, choices, required, hidden, conflicts).
//! - [`PositionalDef`] — a positional argument with its [`ValueKind`].
//!
//! Schemas can be built in code or loaded from JSON/YAML with
//! [`load_command`].
//!
//! # Example
//!
//! ```
//! use command_tokenizer_core::*;
//!
//! let schema = Command::from_yaml_str(
//!     r#"
//! options:
//!   verbose: { kind: count, aliases: [v] }
//! commands:
//!   build:
//!     options:
//!       target: { kind: dir }
//! "#,
//! )
//! .unwrap();
//!
//! assert_eq!(schema.options["verbose"].kind, OptionKind::Count);
//! assert_eq!(
//!     schema.find_command("build").unwrap().options["target"].kind,
//!     OptionKind::Single(ValueKind::Dir)
//! );
//! ```

mod error;
mod load;
mod types;

pub use error::{Result, SchemaError};
pub use load::load_command;
pub use types::*;
