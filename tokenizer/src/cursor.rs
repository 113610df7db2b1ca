//! Token cursor with single-step putback.

use crate::error::{Result, TokenizeError};

/// Linear cursor over the input tokens.
///
/// Each classification step starts with [`begin_step`](Self::begin_step).
/// Within a step the resolver may hand back at most one consumed token via
/// [`put_back`](Self::put_back), which is how a peeked token that turns out
/// not to be a value is returned for reclassification.
///
/// # Examples
///
/// ```
/// use command_tokenizer::TokenCursor;
///
/// let tokens = ["--name", "-x"];
/// let mut cursor = TokenCursor::new(&tokens);
///
/// cursor.begin_step();
/// assert_eq!(cursor.next(), Some("--name"));
/// assert_eq!(cursor.next(), Some("-x"));
/// cursor.put_back().unwrap();
/// assert!(cursor.put_back().is_err());
///
/// cursor.begin_step();
/// assert_eq!(cursor.next(), Some("-x"));
/// assert!(!cursor.has_next());
/// ```
#[derive(Debug)]
pub struct TokenCursor<'t, S> {
    tokens: &'t [S],
    position: usize,
    step_start: usize,
    rewound: bool,
}

impl<'t, S: AsRef<str>> TokenCursor<'t, S> {
    /// Creates a cursor at the first token.
    pub fn new(tokens: &'t [S]) -> Self {
        Self {
            tokens,
            position: 0,
            step_start: 0,
            rewound: false,
        }
    }

    /// Returns `true` if a token remains.
    pub fn has_next(&self) -> bool {
        self.position < self.tokens.len()
    }

    /// Index of the next token to be consumed.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Marks the start of a classification step, re-arming the putback.
    pub fn begin_step(&mut self) {
        self.step_start = self.position;
        self.rewound = false;
    }

    /// Steps back one token.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizeError::CursorUnderflow`] if a putback already
    /// happened in this step, or if nothing was consumed since
    /// [`begin_step`](Self::begin_step).
    pub fn put_back(&mut self) -> Result<()> {
        if self.rewound || self.position <= self.step_start {
            return Err(TokenizeError::CursorUnderflow {
                position: self.position,
            });
        }
        self.position -= 1;
        self.rewound = true;
        Ok(())
    }
}

impl<'t, S: AsRef<str>> Iterator for TokenCursor<'t, S> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token.as_ref())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tokens.len() - self.position;
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walks_tokens_in_order() {
        let tokens = vec!["a".to_string(), "b".to_string()];
        let mut cursor = TokenCursor::new(&tokens);
        assert!(cursor.has_next());
        assert_eq!(cursor.next(), Some("a"));
        assert_eq!(cursor.next(), Some("b"));
        assert_eq!(cursor.next(), None);
        assert!(!cursor.has_next());
    }

    #[test]
    fn test_put_back_without_consuming_is_underflow() {
        let tokens = ["a"];
        let mut cursor = TokenCursor::new(&tokens);
        cursor.begin_step();
        assert_eq!(
            cursor.put_back(),
            Err(TokenizeError::CursorUnderflow { position: 0 })
        );
    }

    #[test]
    fn test_put_back_once_per_step() {
        let tokens = ["a", "b", "c"];
        let mut cursor = TokenCursor::new(&tokens);
        cursor.begin_step();
        cursor.next();
        cursor.next();
        cursor.put_back().unwrap();
        assert_eq!(cursor.position(), 1);
        assert_eq!(
            cursor.put_back(),
            Err(TokenizeError::CursorUnderflow { position: 1 })
        );

        cursor.begin_step();
        assert_eq!(cursor.next(), Some("b"));
        cursor.put_back().unwrap();
        assert_eq!(cursor.next(), Some("b"));
    }

    #[test]
    fn test_put_back_cannot_cross_step_start() {
        let tokens = ["a", "b"];
        let mut cursor = TokenCursor::new(&tokens);
        cursor.next();
        cursor.begin_step();
        assert!(cursor.put_back().is_err());
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_size_hint_tracks_remaining() {
        let tokens = ["a", "b", "c"];
        let mut cursor = TokenCursor::new(&tokens);
        cursor.next();
        assert_eq!(cursor.size_hint(), (2, Some(2)));
        assert_eq!(cursor.by_ref().collect::<Vec<_>>(), vec!["b", "c"]);
    }
}
