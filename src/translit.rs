use std::fmt;

use crate::rules::RuleSet;
use crate::scanner::Scanner;

/// An ordered list of phoneme tokens produced from one word.
///
/// Rendered for the host as a single space-joined string via `Display`.
/// Token labels are only meaningful within the rule set that produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhonemeSequence(Vec<String>);

impl PhonemeSequence {
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_tokens(self) -> Vec<String> {
        self.0
    }
}

impl fmt::Display for PhonemeSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// Convert one lowercased word into a phoneme sequence using `rules`.
///
/// Walks the word once, appending each lookup's tokens and advancing by its
/// consumed count. Every lookup consumes at least one code point, so the
/// loop always terminates. Code points no rule claims contribute nothing.
pub fn transliterate(word: &str, rules: &RuleSet) -> PhonemeSequence {
    let mut scanner = Scanner::new(word);
    let mut tokens = Vec::new();

    while let Some(current) = scanner.current() {
        let emission = rules.lookup(current, scanner.lookahead());
        tokens.extend(emission.tokens);
        scanner.advance(emission.consumed);
    }

    PhonemeSequence(tokens)
}
