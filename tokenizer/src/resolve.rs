//! Option resolution.
//!
//! Turns one long option or short option cluster into events, consuming the
//! following token as a value when the schema (or, for unknown names, a
//! heuristic) says so.

use tracing::debug;

use crate::classify::DASH;
use crate::cursor::TokenCursor;
use crate::error::Result;
use crate::event::ParsedArg;
use crate::registry::{OptionEntry, Registry};

/// Resolves options for one classification step.
pub(crate) struct OptionResolver<'a, 's, 't, S> {
    pub(crate) registry: &'a Registry<'s>,
    pub(crate) cursor: &'a mut TokenCursor<'t, S>,
    pub(crate) events: &'a mut Vec<ParsedArg>,
}

impl<S: AsRef<str>> OptionResolver<'_, '_, '_, S> {
    /// Resolves `--name` or `--name=value` (`body` excludes the dashes).
    pub(crate) fn long(&mut self, body: &str) -> Result<()> {
        let entry = match body.split_once('=') {
            Some((name, value)) => {
                let name = self
                    .registry
                    .long(name)
                    .map_or_else(|| name.to_string(), |entry| entry.resolved_name());
                self.events.push(ParsedArg::option(name, value));
                return Ok(());
            }
            None => self.registry.long(body),
        };

        let name = entry.map_or_else(|| body.to_string(), |entry| entry.resolved_name());
        self.possible_parameter(&name, entry)
    }

    /// Resolves a short cluster `-abc` or `-abc=value` (`body` excludes the
    /// dash). Every character but the last is a flag.
    pub(crate) fn short(&mut self, body: &str) -> Result<()> {
        let (names, value) = match body.split_once('=') {
            Some((names, value)) => (names, Some(value)),
            None => (body, None),
        };

        let Some(last) = names.chars().next_back() else {
            debug!(token = %format!("{DASH}{body}"), "Short option without a name");
            self.events.push(ParsedArg::positional(format!("{DASH}{body}")));
            return Ok(());
        };

        let bundled = &names[..names.len() - last.len_utf8()];
        for name in bundled.chars() {
            let resolved = short_name(name, self.registry.short(name));
            self.events.push(ParsedArg::flag(&resolved));
        }

        let entry = self.registry.short(last);
        let name = short_name(last, entry);
        match value {
            Some(value) => {
                self.events.push(ParsedArg::option(name, value));
                Ok(())
            }
            None => self.possible_parameter(&name, entry),
        }
    }

    /// Decides whether the next token is the value of `name`.
    fn possible_parameter(&mut self, name: &str, entry: Option<OptionEntry<'_>>) -> Result<()> {
        let Some(next) = self.cursor.next() else {
            self.events.push(ParsedArg::flag(name));
            return Ok(());
        };

        let takes_value = match entry {
            Some(entry) => entry.def.kind.takes_value(),
            None => {
                let takes_value = !next.starts_with(DASH);
                debug!(
                    option = name,
                    next,
                    takes_value,
                    "Guessing parameter for unknown option"
                );
                takes_value
            }
        };

        if takes_value {
            self.events.push(ParsedArg::option(name, next));
        } else {
            self.cursor.put_back()?;
            self.events.push(ParsedArg::flag(name));
        }
        Ok(())
    }
}

fn short_name(name: char, entry: Option<OptionEntry<'_>>) -> String {
    entry.map_or_else(|| name.to_string(), |entry| entry.resolved_name())
}
