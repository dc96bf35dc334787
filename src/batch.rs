use derive_builder::Builder;

use crate::rules::RuleSet;
use crate::select::select_language;
use crate::systems::Language;
use crate::translit::{transliterate, PhonemeSequence};

/// Lyric strings that denote structural notes rather than sung text:
/// syllable continuation, tie, silence, breath, and the two pause variants.
///
/// Compared exactly and case-sensitively, before any lowercasing.
pub const STRUCTURAL_MARKERS: [&str; 6] = ["-", "+", "sil", "br", "SP", "AP"];

/// Options for one batch run.
#[derive(Debug, Clone, Builder)]
#[builder(default)]
pub struct BatchOptions {
    /// Convert every word with this fixed inventory instead of selecting
    /// one per word.
    #[builder(setter(strip_option))]
    pub language: Option<Language>,
    /// Lyric strings skipped as structural markers.
    pub markers: Vec<String>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            language: None,
            markers: STRUCTURAL_MARKERS.iter().map(|m| (*m).to_string()).collect(),
        }
    }
}

/// One converted word: the inventory chosen for it and its phonemes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedWord {
    pub language: Language,
    pub phonemes: PhonemeSequence,
}

/// Per-language word counts accumulated over one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageCounts {
    counts: [u32; 5],
}

impl LanguageCounts {
    pub fn get(&self, language: Language) -> u32 {
        self.counts[language as usize]
    }

    fn bump(&mut self, language: Language) {
        self.counts[language as usize] += 1;
    }

    /// Total number of converted (non-marker) words.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Language, u32)> + '_ {
        Language::ALL.into_iter().map(|l| (l, self.get(l)))
    }

    /// Render one line per language, newline-joined, for user display.
    pub fn summary(&self) -> String {
        let lines: Vec<String> = self
            .iter()
            .map(|(language, count)| format!("{}: {} words", language.label(), count))
            .collect();
        lines.join("\n")
    }
}

/// The outcome of one batch run.
///
/// `words` has one entry per input in order: `None` for marker positions,
/// the conversion otherwise. Nothing here outlives the call; the next run
/// starts from fresh counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub words: Vec<Option<ConvertedWord>>,
    pub counts: LanguageCounts,
}

/// Convert a sequence of lyric words.
///
/// For each word: skip it if it equals a structural marker, otherwise
/// lowercase it, pick an inventory (or use the forced one), transliterate,
/// and count. Operates purely on the given strings; the write-back of
/// phonemes onto host notes is the caller's concern.
pub fn process_words<'a, I>(words: I, options: &BatchOptions) -> BatchReport
where
    I: IntoIterator<Item = &'a str>,
{
    // Build each table once per run.
    let tables: [RuleSet; 5] = Language::ALL.map(Language::rules);

    let mut counts = LanguageCounts::default();
    let mut converted = Vec::new();

    for word in words {
        if options.markers.iter().any(|m| m == word) {
            converted.push(None);
            continue;
        }

        let lowered = word.to_lowercase();
        let language = options
            .language
            .unwrap_or_else(|| select_language(&lowered));
        let phonemes = transliterate(&lowered, &tables[language as usize]);

        if phonemes.is_empty() {
            log::warn!("No phonemes produced for word {word:?} ({language})");
        } else {
            log::debug!("{word:?} -> [{language}] {phonemes}");
        }

        counts.bump(language);
        converted.push(Some(ConvertedWord {
            language,
            phonemes,
        }));
    }

    BatchReport {
        words: converted,
        counts,
    }
}
