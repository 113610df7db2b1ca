//! Token classification.
//!
//! Decides what a raw token is before any option lookup happens. The checks
//! run in a fixed priority order; see [`classify`].

use command_tokenizer_core::Command;

/// Marker ending option interpretation.
pub const BREAKOUT: &str = "--";

/// Conventional stdin placeholder.
pub const DASH: &str = "-";

/// Shape of a single token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind<'t, 's> {
    /// `--`: every following token is positional.
    Breakout,
    /// `-` on its own.
    Dash,
    /// `--name` or `--name=value`, without the leading dashes.
    Long(&'t str),
    /// `-abc` or `-abc=value`, without the leading dash.
    Short(&'t str),
    /// A sub-command of the active node.
    Command {
        /// Invocation name as typed.
        name: &'t str,
        /// The sub-command's schema node.
        node: &'s Command,
    },
    /// Anything else.
    Positional(&'t str),
}

/// Classifies `token` against the active schema node.
///
/// Priority: breakout, bare dash, long option, short option, sub-command of
/// `active`, positional. Option shapes win over sub-command names, so `-abc`
/// is never a positional.
///
/// # Examples
///
/// ```
/// use command_tokenizer::{TokenKind, classify};
/// use command_tokenizer_core::Command;
///
/// let schema = Command::new().with_command("run", Command::new());
///
/// assert_eq!(classify("--", &schema), TokenKind::Breakout);
/// assert_eq!(classify("--all", &schema), TokenKind::Long("all"));
/// assert_eq!(classify("-xvf", &schema), TokenKind::Short("xvf"));
/// assert!(matches!(classify("run", &schema), TokenKind::Command { name: "run", .. }));
/// assert_eq!(classify("walk", &schema), TokenKind::Positional("walk"));
/// ```
pub fn classify<'t, 's>(token: &'t str, active: &'s Command) -> TokenKind<'t, 's> {
    if token == BREAKOUT {
        return TokenKind::Breakout;
    }
    if token == DASH {
        return TokenKind::Dash;
    }
    if let Some(body) = token.strip_prefix(BREAKOUT) {
        return TokenKind::Long(body);
    }
    if let Some(body) = token.strip_prefix(DASH) {
        return TokenKind::Short(body);
    }
    match active.find_command(token) {
        Some(node) => TokenKind::Command { name: token, node },
        None => TokenKind::Positional(token),
    }
}
