//! Shell completion suggestions.
//!
//! The partial command line is replayed through the [`Tokenizer`]; the
//! result decides which option names are still worth offering, which
//! sub-commands are reachable, and whether the word being completed is the
//! value of an option.

use std::collections::BTreeSet;

use command_tokenizer_core::{Command, OptionKind, ValueKind};
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::event::ParsedArg;
use crate::tokenizer::Tokenizer;

/// Completion candidates for a partial command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Completion {
    /// Option words (`--name`, `-n`) followed by sub-command names.
    pub words: Vec<String>,
    /// Kind of value expected at the cursor, if an option is waiting for one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_hint: Option<ValueKind>,
}

impl Completion {
    /// Returns `true` if the cursor is at an option value that names a
    /// file or directory.
    pub fn expects_path(&self) -> bool {
        self.value_hint.is_some_and(ValueKind::is_path_like)
    }

    /// Words starting with `prefix`.
    pub fn matching<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.words
            .iter()
            .map(String::as_str)
            .filter(move |word| word.starts_with(prefix))
    }
}

/// Computes completion candidates for `partial`.
///
/// `partial[0]` is the program name and is skipped. When the user's cursor
/// follows a space, the caller passes an empty string as the last token.
///
/// # Errors
///
/// Returns [`ConflictingOptionDefinition`](crate::TokenizeError::ConflictingOptionDefinition)
/// if the schema is inconsistent.
///
/// # Examples
///
/// ```
/// use command_tokenizer::suggest;
/// use command_tokenizer_core::{Command, OptionDef, ValueKind};
///
/// let schema = Command::new()
///     .with_option("config", OptionDef::value(ValueKind::File))
///     .with_option("quiet", OptionDef::flag())
///     .with_command("serve", Command::new());
///
/// let completion = suggest(&schema, &["app", "--quiet", ""]).unwrap();
/// assert_eq!(completion.words, vec!["--config", "serve"]);
/// assert!(!completion.expects_path());
///
/// let completion = suggest(&schema, &["app", "--config", ""]).unwrap();
/// assert!(completion.expects_path());
/// ```
pub fn suggest<S: AsRef<str>>(root: &Command, partial: &[S]) -> Result<Completion> {
    let tokenizer = Tokenizer::new(root)?;
    let args = partial.get(1..).unwrap_or_default();
    let outcome = tokenizer.run(args)?;
    let registry = tokenizer.registry();

    let used: BTreeSet<&str> = outcome
        .events
        .iter()
        .filter_map(ParsedArg::option_name)
        .filter(|name| {
            registry
                .definition(name)
                .is_some_and(|def| !is_repeatable(def.kind))
        })
        .collect();

    let value_hint = match (args.last().map(|token| token.as_ref()), outcome.events.last()) {
        (Some(""), Some(ParsedArg::Option { name, value })) if value.is_empty() => registry
            .definition(name)
            .and_then(|def| def.kind.value_kind()),
        _ => None,
    };

    let mut words: Vec<String> = registry
        .option_names()
        .filter(|name| !used.contains(name))
        .map(option_word)
        .collect();
    words.extend(outcome.active.command_names().into_iter().map(String::from));

    debug!(
        path = ?outcome.command_path,
        candidates = words.len(),
        ?value_hint,
        "Computed completion"
    );
    Ok(Completion { words, value_hint })
}

fn is_repeatable(kind: OptionKind) -> bool {
    kind.is_plural() || kind == OptionKind::Count
}

fn option_word(name: &str) -> String {
    if name.chars().count() == 1 {
        format!("-{name}")
    } else {
        format!("--{name}")
    }
}
