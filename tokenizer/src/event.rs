//! Parsed argument events.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix marking the negated form of a flag.
pub const NEGATION_PREFIX: &str = "no-";

/// One resolved argument, in input order.
///
/// # Examples
///
/// ```
/// use command_tokenizer::ParsedArg;
///
/// assert_eq!(
///     ParsedArg::flag("no-color"),
///     ParsedArg::Flag { name: "color".into(), value: false }
/// );
/// assert_eq!(ParsedArg::flag("color").to_string(), "flag color=true");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParsedArg {
    /// A sub-command was entered.
    Command {
        /// Invocation name as typed.
        name: String,
    },
    /// A positional value.
    Positional {
        /// The literal token.
        value: String,
    },
    /// An option with a value.
    Option {
        /// Canonical option name.
        name: String,
        /// Raw, uncoerced value.
        value: String,
    },
    /// A switch.
    Flag {
        /// Canonical option name without the negation prefix.
        name: String,
        /// `false` if the switch was negated.
        value: bool,
    },
}

impl ParsedArg {
    /// Creates a command event.
    pub fn command(name: impl Into<String>) -> Self {
        Self::Command { name: name.into() }
    }

    /// Creates a positional event.
    pub fn positional(value: impl Into<String>) -> Self {
        Self::Positional {
            value: value.into(),
        }
    }

    /// Creates an option event.
    pub fn option(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Option {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates a flag event from a resolved name, applying `no-` negation.
    pub fn flag(resolved: &str) -> Self {
        match resolved.strip_prefix(NEGATION_PREFIX) {
            Some(name) => Self::Flag {
                name: name.to_string(),
                value: false,
            },
            None => Self::Flag {
                name: resolved.to_string(),
                value: true,
            },
        }
    }

    /// Returns the option name for option and flag events.
    pub fn option_name(&self) -> Option<&str> {
        match self {
            Self::Option { name, .. } | Self::Flag { name, .. } => Some(name),
            Self::Command { .. } | Self::Positional { .. } => None,
        }
    }
}

impl fmt::Display for ParsedArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Command { name } => write!(f, "command {name}"),
            Self::Positional { value } => write!(f, "positional {value}"),
            Self::Option { name, value } => write!(f, "option {name}={value}"),
            Self::Flag { name, value } => write!(f, "flag {name}={value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_negation() {
        assert_eq!(
            ParsedArg::flag("verbose"),
            ParsedArg::Flag {
                name: "verbose".to_string(),
                value: true
            }
        );
        assert_eq!(
            ParsedArg::flag("no-verbose"),
            ParsedArg::Flag {
                name: "verbose".to_string(),
                value: false
            }
        );
        assert_eq!(
            ParsedArg::flag("n"),
            ParsedArg::Flag {
                name: "n".to_string(),
                value: true
            }
        );
    }

    #[test]
    fn test_serializes_with_type_tag() {
        let json = serde_json::to_string(&ParsedArg::option("output", "a.txt")).unwrap();
        assert_eq!(json, r#"{"type":"option","name":"output","value":"a.txt"}"#);

        let json = serde_json::to_string(&ParsedArg::command("build")).unwrap();
        assert_eq!(json, r#"{"type":"command","name":"build"}"#);
    }

    #[test]
    fn test_option_name() {
        assert_eq!(ParsedArg::flag("no-x").option_name(), Some("x"));
        assert_eq!(ParsedArg::option("o", "v").option_name(), Some("o"));
        assert_eq!(ParsedArg::positional("x").option_name(), None);
    }
}
