//! Built-in grapheme-to-phoneme tables, one per target phoneme inventory.
//!
//! Estonian has no widely deployed singing-synthesizer voice bank, so lyrics
//! are rendered through the phoneme inventory of a language the synthesizer
//! does support. Each table picks the closest phonetic neighbor for every
//! Estonian letter; the per-word choice between them lives in
//! [`crate::select`].
//!
//! | Language | Identifier | Notes |
//! |---|---|---|
//! | Mandarin | `mandarin` | exact `y` for ü, `7` for õ; b/d/g devoiced |
//! | Cantonese | `cantonese` | `9` for ö, `E` for ä; b/d/g devoiced |
//! | Japanese | `japanese` | cleanest plain vowels; õ/ö merge into `o` |
//! | English | `english` | ARPAbet-style tokens, widest compatibility |
//! | Korean | `korean` | flap `4` for r/l, tense geminate consonants |
//!
//! Token labels are only meaningful within their own inventory; Mandarin `y`
//! and Cantonese `y` happen to share a spelling but name different sounds.

mod cantonese;
mod english;
mod japanese;
mod korean;
mod mandarin;

use serde::{Deserialize, Serialize};

use crate::rules::RuleSet;

/// The target phoneme inventory chosen for a word.
///
/// The `as_str` identifiers are the fixed labels handed back to the host
/// (they match the host editor's language-override names).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Mandarin,
    Cantonese,
    Japanese,
    English,
    Korean,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::Mandarin,
        Language::Cantonese,
        Language::Japanese,
        Language::English,
        Language::Korean,
    ];

    /// The fixed identifier used in the host-facing contract.
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Mandarin => "mandarin",
            Language::Cantonese => "cantonese",
            Language::Japanese => "japanese",
            Language::English => "english",
            Language::Korean => "korean",
        }
    }

    /// Capitalized name for user-facing summaries.
    pub fn label(self) -> &'static str {
        match self {
            Language::Mandarin => "Mandarin",
            Language::Cantonese => "Cantonese",
            Language::Japanese => "Japanese",
            Language::English => "English",
            Language::Korean => "Korean",
        }
    }

    /// Parse a host identifier back into a language.
    pub fn from_name(name: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|l| l.as_str() == name)
    }

    /// The built-in rule set for this inventory.
    pub fn rules(self) -> RuleSet {
        match self {
            Language::Mandarin => mandarin::rules(),
            Language::Cantonese => cantonese::rules(),
            Language::Japanese => japanese::rules(),
            Language::English => english::rules(),
            Language::Korean => korean::rules(),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Language;

    #[test]
    fn every_built_in_table_is_valid() {
        for language in Language::ALL {
            let rules = language.rules();
            rules.validate().expect("built-in table should validate");
            assert_eq!(rules.name, language.as_str());
        }
    }

    #[test]
    fn identifiers_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_name(language.as_str()), Some(language));
        }
        assert_eq!(Language::from_name("klingon"), None);
    }

    #[test]
    fn serde_uses_the_wire_identifiers() {
        let json = serde_json::to_string(&Language::Mandarin).expect("serialize");
        assert_eq!(json, "\"mandarin\"");
        let back: Language = serde_json::from_str("\"korean\"").expect("parse");
        assert_eq!(back, Language::Korean);
    }
}
