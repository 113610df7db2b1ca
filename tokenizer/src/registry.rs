//! Option lookup tables compiled from a command tree.
//!
//! Every option at every level of the tree is registered under its primary
//! name, its aliases, and (for flag-like kinds) a `no-` form of each
//! multi-character name. Single-character names go into the short table,
//! everything else into the long table, which also answers unique-prefix
//! queries.
//!
//! The scope is flat: options declared on a sub-command are visible before
//! that sub-command is entered.

use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;

use command_tokenizer_core::{Command, OptionDef};
use tracing::debug;

use crate::error::{Result, TokenizeError};
use crate::event::NEGATION_PREFIX;

/// A registered option, reachable through one of its names.
#[derive(Debug, Clone, Copy)]
pub struct OptionEntry<'s> {
    /// Primary name of the option.
    pub name: &'s str,
    /// The option definition.
    pub def: &'s OptionDef,
    /// `true` when reached through a `no-` name.
    pub negated: bool,
}

impl OptionEntry<'_> {
    /// The name the resolver emits: the primary name, `no-`-prefixed when
    /// reached through a negated alias.
    pub fn resolved_name(&self) -> String {
        if self.negated {
            format!("{NEGATION_PREFIX}{}", self.name)
        } else {
            self.name.to_string()
        }
    }

    fn same_target(&self, other: &Self) -> bool {
        std::ptr::eq(self.def, other.def) && self.negated == other.negated
    }
}

/// Long and short option tables for one command tree.
///
/// # Examples
///
/// ```
/// use command_tokenizer::Registry;
/// use command_tokenizer_core::{Command, OptionDef, ValueKind};
///
/// let schema = Command::new()
///     .with_option("food", OptionDef::flag())
///     .with_option("foobar", OptionDef::value(ValueKind::String).with_alias("f"));
/// let registry = Registry::build(&schema).unwrap();
///
/// assert_eq!(registry.long("foob").unwrap().name, "foobar");
/// assert!(registry.long("no-food").unwrap().negated);
/// assert!(registry.long("foo").is_none()); // ambiguous
/// assert_eq!(registry.short('f').unwrap().name, "foobar");
/// ```
#[derive(Debug, Default)]
pub struct Registry<'s> {
    long: BTreeMap<String, OptionEntry<'s>>,
    short: HashMap<char, OptionEntry<'s>>,
    definitions: BTreeMap<&'s str, &'s OptionDef>,
}

impl<'s> Registry<'s> {
    /// Compiles the lookup tables for `root` and all of its sub-commands.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizeError::ConflictingOptionDefinition`] if one name is
    /// claimed by two options of different kinds.
    pub fn build(root: &'s Command) -> Result<Self> {
        let mut registry = Self::default();
        registry.visit(root)?;
        debug!(
            options = registry.definitions.len(),
            long = registry.long.len(),
            short = registry.short.len(),
            "Built option registry"
        );
        Ok(registry)
    }

    fn visit(&mut self, command: &'s Command) -> Result<()> {
        for (name, def) in &command.options {
            self.definitions.insert(name.as_str(), def);

            let aliases =
                std::iter::once(name.as_str()).chain(def.aliases.iter().map(String::as_str));
            for alias in aliases {
                self.insert(alias, OptionEntry { name, def, negated: false })?;
                if def.kind.is_flag_like() && alias.chars().count() > 1 {
                    self.insert(
                        &format!("{NEGATION_PREFIX}{alias}"),
                        OptionEntry { name, def, negated: true },
                    )?;
                }
            }
        }

        for sub in command.commands.values() {
            self.visit(sub)?;
        }
        Ok(())
    }

    fn insert(&mut self, alias: &str, entry: OptionEntry<'s>) -> Result<()> {
        let mut chars = alias.chars();
        let existing = match (chars.next(), chars.next()) {
            (Some(c), None) => self.short.insert(c, entry),
            _ => self.long.insert(alias.to_string(), entry),
        };

        match existing {
            Some(prev)
                if !std::ptr::eq(prev.def, entry.def) && prev.def.kind != entry.def.kind =>
            {
                Err(TokenizeError::ConflictingOptionDefinition {
                    alias: alias.to_string(),
                    existing: prev.name.to_string(),
                    existing_kind: prev.def.kind,
                    conflicting: entry.name.to_string(),
                    conflicting_kind: entry.def.kind,
                })
            }
            _ => Ok(()),
        }
    }

    /// Looks up a long option by exact name, then by unique prefix.
    ///
    /// A prefix shared by names of different options is ambiguous and
    /// yields `None`.
    pub fn long(&self, name: &str) -> Option<OptionEntry<'s>> {
        if let Some(entry) = self.long.get(name) {
            return Some(*entry);
        }
        if name.is_empty() {
            return None;
        }

        let mut candidates = self
            .long
            .range::<str, _>((Bound::Included(name), Bound::Unbounded))
            .take_while(|(key, _)| key.starts_with(name))
            .map(|(_, entry)| *entry);
        let first = candidates.next()?;
        if candidates.any(|other| !other.same_target(&first)) {
            debug!(prefix = name, "Ambiguous long option prefix");
            return None;
        }
        Some(first)
    }

    /// Looks up a short option.
    pub fn short(&self, name: char) -> Option<OptionEntry<'s>> {
        self.short.get(&name).copied()
    }

    /// Returns the definition registered under a primary name.
    pub fn definition(&self, name: &str) -> Option<&'s OptionDef> {
        self.definitions.get(name).copied()
    }

    /// Primary names of every option in the tree, sorted.
    pub fn option_names(&self) -> impl Iterator<Item = &'s str> + '_ {
        self.definitions.keys().copied()
    }
}
