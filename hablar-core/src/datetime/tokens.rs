//! Token stream with a consumed mask
//!
//! Rules never remove tokens; they mark spans as consumed. Consumed
//! positions read as the empty string, so later rules see the gap.

use smallvec::SmallVec;

/// Span claimed by a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Consumed {
    pub start: usize,
    pub len: usize,
}

impl Consumed {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// A match that claims no tokens (e.g. a remembered qualifier)
    pub fn nothing(at: usize) -> Self {
        Self { start: at, len: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Tokens of a single extraction call
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: SmallVec<[String; 16]>,
    consumed: SmallVec<[bool; 16]>,
}

impl TokenStream {
    pub fn new(tokens: Vec<String>) -> Self {
        let consumed = SmallVec::from_elem(false, tokens.len());
        Self {
            tokens: SmallVec::from_vec(tokens),
            consumed,
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at `index`; empty when consumed or out of range
    #[inline]
    pub fn get(&self, index: usize) -> &str {
        match self.tokens.get(index) {
            Some(token) if !self.consumed[index] => token,
            _ => "",
        }
    }

    /// Token `distance` positions before `index`
    #[inline]
    pub fn before(&self, index: usize, distance: usize) -> &str {
        index.checked_sub(distance).map_or("", |i| self.get(i))
    }

    pub fn is_consumed(&self, index: usize) -> bool {
        self.consumed.get(index).copied().unwrap_or(true)
    }

    pub fn consume(&mut self, start: usize, len: usize) {
        let end = start.saturating_add(len).min(self.consumed.len());
        for flag in self.consumed.iter_mut().take(end).skip(start) {
            *flag = true;
        }
    }

    /// Neighbourhood of `index` as seen by the rules
    pub fn window(&self, index: usize) -> Window<'_> {
        Window {
            index,
            prev_prev: self.before(index, 2),
            prev: self.before(index, 1),
            word: self.get(index),
            next: self.get(index + 1),
            next_next: self.get(index + 2),
            next_next_next: self.get(index + 3),
        }
    }

    /// Unconsumed tokens joined by single spaces
    pub fn remainder(&self) -> String {
        self.tokens
            .iter()
            .zip(&self.consumed)
            .filter(|(token, consumed)| !**consumed && !token.is_empty())
            .map(|(token, _)| token.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Tokens around the one a rule is looking at
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    pub index: usize,
    pub prev_prev: &'a str,
    pub prev: &'a str,
    pub word: &'a str,
    pub next: &'a str,
    pub next_next: &'a str,
    pub next_next_next: &'a str,
}

impl<'a> Window<'a> {
    /// The current token and the three after it
    pub fn from_word(&self) -> [&'a str; 4] {
        [self.word, self.next, self.next_next, self.next_next_next]
    }

    /// The three tokens after the current one
    pub fn after_word(&self) -> [&'a str; 3] {
        [self.next, self.next_next, self.next_next_next]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(text: &str) -> TokenStream {
        TokenStream::new(text.split_whitespace().map(str::to_string).collect())
    }

    #[test]
    fn test_consumed_tokens_read_empty() {
        let mut tokens = stream("mañana la 5 tarde");
        tokens.consume(0, 1);
        assert_eq!(tokens.get(0), "");
        assert_eq!(tokens.get(1), "la");
        assert_eq!(tokens.get(10), "");
        assert!(tokens.is_consumed(0));
        assert!(tokens.is_consumed(10));
    }

    #[test]
    fn test_window() {
        let tokens = stream("a b c d e f");
        let w = tokens.window(2);
        assert_eq!(w.prev_prev, "a");
        assert_eq!(w.prev, "b");
        assert_eq!(w.word, "c");
        assert_eq!(w.after_word(), ["d", "e", "f"]);

        let w = tokens.window(0);
        assert_eq!(w.prev, "");
        assert_eq!(w.prev_prev, "");
    }

    #[test]
    fn test_remainder() {
        let mut tokens = stream("recuérdame llamar mañana");
        tokens.consume(2, 5);
        assert_eq!(tokens.remainder(), "recuérdame llamar");
        tokens.consume(0, 2);
        assert_eq!(tokens.remainder(), "");
    }
}
