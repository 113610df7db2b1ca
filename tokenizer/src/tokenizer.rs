//! The tokenization loop and sub-command descent.

use command_tokenizer_core::Command;
use tracing::trace;

use crate::classify::{TokenKind, classify};
use crate::cursor::TokenCursor;
use crate::error::Result;
use crate::event::ParsedArg;
use crate::registry::Registry;
use crate::resolve::OptionResolver;

/// Result of a full pass over the tokens.
#[derive(Debug, Clone)]
pub struct ParseOutcome<'s> {
    /// Events in input order.
    pub events: Vec<ParsedArg>,
    /// The schema node parsing ended at.
    pub active: &'s Command,
    /// Sub-command names descended through, in order.
    pub command_path: Vec<String>,
}

/// A compiled schema ready to tokenize argument lists.
///
/// The registry is built once in [`new`](Self::new); each call to
/// [`tokenize`](Self::tokenize) or [`run`](Self::run) keeps its own cursor
/// and output, so one tokenizer can serve any number of parses.
///
/// # Examples
///
/// ```
/// use command_tokenizer::{ParsedArg, Tokenizer};
/// use command_tokenizer_core::{Command, OptionDef, ValueKind};
///
/// let schema = Command::new()
///     .with_option("verbose", OptionDef::flag().with_alias("v"))
///     .with_command(
///         "build",
///         Command::new().with_option("target", OptionDef::value(ValueKind::Dir)),
///     );
/// let tokenizer = Tokenizer::new(&schema).unwrap();
///
/// let events = tokenizer.tokenize(&["-v", "build", "--target", "out/"]).unwrap();
/// assert_eq!(
///     events,
///     vec![
///         ParsedArg::flag("verbose"),
///         ParsedArg::command("build"),
///         ParsedArg::option("target", "out/"),
///     ]
/// );
/// ```
#[derive(Debug)]
pub struct Tokenizer<'s> {
    root: &'s Command,
    registry: Registry<'s>,
}

impl<'s> Tokenizer<'s> {
    /// Builds the option registry for `root`.
    ///
    /// # Errors
    ///
    /// Returns [`ConflictingOptionDefinition`](crate::TokenizeError::ConflictingOptionDefinition)
    /// if the schema declares one name with two kinds.
    pub fn new(root: &'s Command) -> Result<Self> {
        Ok(Self {
            root,
            registry: Registry::build(root)?,
        })
    }

    /// The compiled option tables.
    pub fn registry(&self) -> &Registry<'s> {
        &self.registry
    }

    /// Tokenizes `tokens` into events.
    ///
    /// # Errors
    ///
    /// Only [`CursorUnderflow`](crate::TokenizeError::CursorUnderflow),
    /// which indicates a resolver defect.
    pub fn tokenize<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<ParsedArg>> {
        Ok(self.run(tokens)?.events)
    }

    /// Tokenizes `tokens`, also reporting where in the command tree the
    /// parse ended.
    ///
    /// # Errors
    ///
    /// Same as [`tokenize`](Self::tokenize).
    pub fn run<S: AsRef<str>>(&self, tokens: &[S]) -> Result<ParseOutcome<'s>> {
        let mut cursor = TokenCursor::new(tokens);
        let mut events = Vec::with_capacity(tokens.len());
        let mut active = self.root;
        let mut command_path = Vec::new();

        loop {
            cursor.begin_step();
            let Some(token) = cursor.next() else {
                break;
            };

            let kind = classify(token, active);
            trace!(position = cursor.position() - 1, token, ?kind, "Classified token");

            match kind {
                TokenKind::Breakout => {
                    events.extend(cursor.by_ref().map(ParsedArg::positional));
                }
                TokenKind::Dash | TokenKind::Positional(_) => {
                    events.push(ParsedArg::positional(token));
                }
                TokenKind::Long(body) => {
                    self.resolver(&mut cursor, &mut events).long(body)?;
                }
                TokenKind::Short(body) => {
                    self.resolver(&mut cursor, &mut events).short(body)?;
                }
                TokenKind::Command { name, node } => {
                    events.push(ParsedArg::command(name));
                    command_path.push(name.to_string());
                    active = node;
                }
            }
        }

        Ok(ParseOutcome {
            events,
            active,
            command_path,
        })
    }

    fn resolver<'a, 't, S>(
        &'a self,
        cursor: &'a mut TokenCursor<'t, S>,
        events: &'a mut Vec<ParsedArg>,
    ) -> OptionResolver<'a, 's, 't, S> {
        OptionResolver {
            registry: &self.registry,
            cursor,
            events,
        }
    }
}

/// Tokenizes `tokens` against `root` in one call.
///
/// # Errors
///
/// Returns [`ConflictingOptionDefinition`](crate::TokenizeError::ConflictingOptionDefinition)
/// before any token is read if the schema is inconsistent.
///
/// # Examples
///
/// ```
/// use command_tokenizer::{ParsedArg, parse};
/// use command_tokenizer_core::{Command, OptionDef};
///
/// let schema = Command::new().with_command(
///     "cmd1",
///     Command::new().with_option("b", OptionDef::flag()),
/// );
///
/// assert_eq!(
///     parse(&schema, &["cmd1", "-b"]).unwrap(),
///     vec![ParsedArg::command("cmd1"), ParsedArg::flag("b")]
/// );
/// ```
pub fn parse<S: AsRef<str>>(root: &Command, tokens: &[S]) -> Result<Vec<ParsedArg>> {
    Tokenizer::new(root)?.tokenize(tokens)
}
