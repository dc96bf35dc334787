/// A left-to-right scanner over a word's code points with one-character
/// lookahead.
///
/// The mapping tables are deliberately restricted to this window: one
/// current character, one lookahead, no backtracking. That keeps every scan
/// single-pass and linear in the word length.
#[derive(Debug, Clone)]
pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
}

impl Scanner {
    pub fn new(word: &str) -> Self {
        Self {
            chars: word.chars().collect(),
            pos: 0,
        }
    }

    /// The code point at the scan position, or `None` at end of word.
    pub fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// The code point after the scan position, or `None` past the end.
    pub fn lookahead(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    /// Advance the scan position by `n` code points, clamped to the end.
    pub fn advance(&mut self, n: usize) {
        debug_assert!(n >= 1, "a lookup must consume at least one code point");
        self.pos = (self.pos + n).min(self.chars.len());
    }

    pub fn is_done(&self) -> bool {
        self.pos >= self.chars.len()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Scanner;

    #[test]
    fn exposes_current_and_lookahead() {
        let scanner = Scanner::new("õnn");
        assert_eq!(scanner.current(), Some('õ'));
        assert_eq!(scanner.lookahead(), Some('n'));
    }

    #[test]
    fn lookahead_is_none_at_the_last_character() {
        let mut scanner = Scanner::new("ab");
        scanner.advance(1);
        assert_eq!(scanner.current(), Some('b'));
        assert_eq!(scanner.lookahead(), None);
    }

    #[test]
    fn counts_code_points_not_bytes() {
        // Multi-byte letters are single scan units.
        let scanner = Scanner::new("üü");
        assert_eq!(scanner.len(), 2);
    }

    #[test]
    fn advancing_past_the_end_finishes_the_scan() {
        let mut scanner = Scanner::new("a");
        scanner.advance(2);
        assert!(scanner.is_done());
        assert_eq!(scanner.current(), None);
    }

    #[test]
    fn empty_word_is_done_immediately() {
        let scanner = Scanner::new("");
        assert!(scanner.is_done());
        assert!(scanner.is_empty());
    }
}
