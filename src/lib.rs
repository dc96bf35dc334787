//! # est-g2p
//!
//! Estonian grapheme-to-phoneme conversion for singing-synthesizer lyrics.
//!
//! ## Features
//!
//! - **Five phoneme inventories**: Mandarin, Cantonese, Japanese, English,
//!   and Korean rule sets, each hand-tuned for Estonian orthography
//! - **Adaptive selection**: a priority-ordered classifier picks the best
//!   inventory per word from its special vowels
//! - **Batch conversion**: structural markers (`-`, `+`, `sil`, `br`, `SP`,
//!   `AP`) pass through untouched, with per-language statistics
//!
//! Conversion is pure and total: unrecognized characters are skipped, empty
//! words produce empty output, and nothing can fail at lookup time. The
//! only fallible operation is loading a custom rule set from JSON.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! est-g2p = "0.3"
//! ```
//!
//! ```
//! use est_g2p::{process_words, BatchOptions, Language};
//!
//! let report = process_words(["õnn", "-", "laulan"], &BatchOptions::default());
//!
//! let onn = report.words[0].as_ref().unwrap();
//! assert_eq!(onn.language, Language::Mandarin);
//! assert_eq!(onn.phonemes.to_string(), "7 n n");
//!
//! // The continuation marker is skipped and not counted.
//! assert!(report.words[1].is_none());
//! assert_eq!(report.counts.total(), 2);
//! ```
//!
//! For a single word with a fixed inventory:
//!
//! ```
//! use est_g2p::{transliterate, Language};
//!
//! let rules = Language::English.rules();
//! assert_eq!(transliterate("tere", &rules).to_string(), "t eh r eh");
//! ```

pub mod batch;
pub mod rules;
pub mod scanner;
pub mod select;
pub mod systems;
pub mod translit;

pub use batch::{
    process_words, BatchOptions, BatchOptionsBuilder, BatchReport, ConvertedWord, LanguageCounts,
    STRUCTURAL_MARKERS,
};
pub use rules::{load_rule_set, Digraph, Emission, Gemination, Rule, RuleSet, RuleSetError};
pub use scanner::Scanner;
pub use select::select_language;
pub use systems::Language;
pub use translit::{transliterate, PhonemeSequence};
