use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Errors raised while loading or validating a rule set from a JSON file.
///
/// Lookups themselves cannot fail: every code point either matches a rule or
/// is skipped, so conversion has no error path.
#[derive(thiserror::Error, Debug)]
pub enum RuleSetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse rule set JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid rule set: {0}")]
    Invalid(String),
}

/// The result of one table lookup: the phoneme tokens to append and how many
/// code points of the word were consumed (always 1 or 2).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emission {
    pub tokens: Vec<String>,
    pub consumed: usize,
}

/// A complete grapheme-to-phoneme table for one target inventory.
///
/// A rule set is a flat list of [`Rule`]s, each claiming one or more trigger
/// code points. Lookup is driven purely by the current code point and a
/// one-character lookahead, so a scan over a word is single-pass and
/// linear-time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Identifier used in logs and diagnostics.
    pub name: String,
    pub rules: Vec<Rule>,
}

/// One character-class rule of a [`RuleSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Code points this rule fires on. Usually a single letter; spelling
    /// variants like `ü`/`y` share one rule.
    pub on: Vec<char>,
    /// Tokens emitted for a single occurrence (consumes 1).
    pub emit: Vec<String>,
    /// Behavior when the lookahead is also a trigger of this rule, i.e. a
    /// doubled letter (consumes 2).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geminate: Option<Gemination>,
    /// Two-character sequences starting with this rule's trigger, such as
    /// `ng` or `sh` (consumes 2). Checked before gemination.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub digraphs: Vec<Digraph>,
}

/// How a doubled letter is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gemination {
    /// Emit the single-occurrence tokens twice. Models the Estonian length
    /// contrast for both consonants (`ll`) and vowels (`aa`, `õõ`).
    Repeat,
    /// Emit a dedicated token sequence instead, e.g. a tense consonant in
    /// inventories that have one.
    Emit(Vec<String>),
}

/// A digraph sub-rule: a specific lookahead with its own emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Digraph {
    pub next: char,
    pub emit: Vec<String>,
}

impl Rule {
    /// A rule triggered by every code point of `on`, emitting `emit` once
    /// per occurrence.
    pub fn new(on: &str, emit: &[&str]) -> Self {
        Self {
            on: on.chars().collect(),
            emit: emit.iter().map(|t| (*t).to_string()).collect(),
            geminate: None,
            digraphs: Vec::new(),
        }
    }

    /// Doubled letters emit the base tokens twice.
    pub fn doubled(mut self) -> Self {
        self.geminate = Some(Gemination::Repeat);
        self
    }

    /// Doubled letters emit `tokens` instead of repeating the base emission.
    pub fn doubled_as(mut self, tokens: &[&str]) -> Self {
        self.geminate = Some(Gemination::Emit(
            tokens.iter().map(|t| (*t).to_string()).collect(),
        ));
        self
    }

    /// Adds a digraph: when the lookahead is `next`, emit `tokens` and
    /// consume both characters.
    pub fn digraph(mut self, next: char, emit: &[&str]) -> Self {
        self.digraphs.push(Digraph {
            next,
            emit: emit.iter().map(|t| (*t).to_string()).collect(),
        });
        self
    }
}

impl RuleSet {
    /// Look up the emission for `current` with a one-character lookahead.
    ///
    /// Total over all inputs: a code point no rule claims yields zero tokens
    /// and consumes 1, so a scan always advances and never errors.
    pub fn lookup(&self, current: char, lookahead: Option<char>) -> Emission {
        let Some(rule) = self.rules.iter().find(|r| r.on.contains(&current)) else {
            return Emission {
                tokens: Vec::new(),
                consumed: 1,
            };
        };

        if let Some(next) = lookahead {
            if let Some(digraph) = rule.digraphs.iter().find(|d| d.next == next) {
                return Emission {
                    tokens: digraph.emit.clone(),
                    consumed: 2,
                };
            }
            if rule.on.contains(&next) {
                match &rule.geminate {
                    Some(Gemination::Repeat) => {
                        let mut tokens = rule.emit.clone();
                        tokens.extend(rule.emit.iter().cloned());
                        return Emission {
                            tokens,
                            consumed: 2,
                        };
                    }
                    Some(Gemination::Emit(tokens)) => {
                        return Emission {
                            tokens: tokens.clone(),
                            consumed: 2,
                        };
                    }
                    None => {}
                }
            }
        }

        Emission {
            tokens: rule.emit.clone(),
            consumed: 1,
        }
    }

    /// Check structural soundness: every rule has triggers, every emission
    /// holds 1 or 2 non-empty tokens, and no code point is claimed twice.
    pub fn validate(&self) -> Result<(), RuleSetError> {
        if self.name.is_empty() {
            return Err(RuleSetError::Invalid("rule set name is empty".to_string()));
        }

        let mut claimed = HashSet::new();
        for rule in &self.rules {
            if rule.on.is_empty() {
                return Err(RuleSetError::Invalid(format!(
                    "rule emitting {:?} has no trigger characters",
                    rule.emit
                )));
            }
            check_emission(&rule.emit, &rule.on)?;
            for &c in &rule.on {
                if !claimed.insert(c) {
                    return Err(RuleSetError::Invalid(format!(
                        "character {c:?} is claimed by more than one rule"
                    )));
                }
            }
            if let Some(Gemination::Emit(tokens)) = &rule.geminate {
                check_emission(tokens, &rule.on)?;
            }
            for digraph in &rule.digraphs {
                check_emission(&digraph.emit, &rule.on)?;
                if rule.on.contains(&digraph.next) {
                    return Err(RuleSetError::Invalid(format!(
                        "digraph lookahead {:?} shadows the rule's own trigger",
                        digraph.next
                    )));
                }
            }
        }
        Ok(())
    }
}

fn check_emission(tokens: &[String], on: &[char]) -> Result<(), RuleSetError> {
    if tokens.is_empty() || tokens.len() > 2 {
        return Err(RuleSetError::Invalid(format!(
            "rule for {on:?} must emit 1 or 2 tokens, got {}",
            tokens.len()
        )));
    }
    if tokens.iter().any(|t| t.is_empty()) {
        return Err(RuleSetError::Invalid(format!(
            "rule for {on:?} emits an empty token"
        )));
    }
    Ok(())
}

/// Load a rule set from a JSON file and validate it.
///
/// The built-in inventories under [`crate::systems`] are the primary path;
/// this exists so a custom inventory can be supplied without rebuilding.
pub fn load_rule_set(path: &Path) -> Result<RuleSet, RuleSetError> {
    let content = std::fs::read_to_string(path)?;
    let set: RuleSet = serde_json::from_str(&content)?;
    set.validate()?;
    log::info!("Loaded rule set {:?} ({} rules)", set.name, set.rules.len());
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::{Rule, RuleSet, RuleSetError};

    fn sample() -> RuleSet {
        RuleSet {
            name: "sample".to_string(),
            rules: vec![
                Rule::new("n", &["n"]).doubled().digraph('g', &["N"]),
                Rule::new("t", &["t"]).doubled_as(&["tt"]).digraph('s', &["ts"]),
                Rule::new("üy", &["y"]).doubled(),
                Rule::new("a", &["a"]).doubled(),
            ],
        }
    }

    #[test]
    fn unclaimed_code_point_skips_one_character() {
        let emission = sample().lookup('x', Some('a'));
        assert!(emission.tokens.is_empty());
        assert_eq!(emission.consumed, 1);
    }

    #[test]
    fn digraph_wins_over_single_emission() {
        let emission = sample().lookup('n', Some('g'));
        assert_eq!(emission.tokens, vec!["N"]);
        assert_eq!(emission.consumed, 2);
    }

    #[test]
    fn repeat_gemination_doubles_the_base_token() {
        let emission = sample().lookup('n', Some('n'));
        assert_eq!(emission.tokens, vec!["n", "n"]);
        assert_eq!(emission.consumed, 2);
    }

    #[test]
    fn explicit_gemination_replaces_the_base_token() {
        let emission = sample().lookup('t', Some('t'));
        assert_eq!(emission.tokens, vec!["tt"]);
        assert_eq!(emission.consumed, 2);
    }

    #[test]
    fn trigger_class_members_geminate_across_spellings() {
        // `üy` forms one class, so ü followed by y doubles.
        let emission = sample().lookup('ü', Some('y'));
        assert_eq!(emission.tokens, vec!["y", "y"]);
        assert_eq!(emission.consumed, 2);
    }

    #[test]
    fn single_occurrence_consumes_one() {
        let emission = sample().lookup('a', Some('t'));
        assert_eq!(emission.tokens, vec!["a"]);
        assert_eq!(emission.consumed, 1);
    }

    #[test]
    fn end_of_word_falls_back_to_single_emission() {
        let emission = sample().lookup('n', None);
        assert_eq!(emission.tokens, vec!["n"]);
        assert_eq!(emission.consumed, 1);
    }

    #[test]
    fn validate_accepts_a_sound_table() {
        sample().validate().expect("sample table should be valid");
    }

    #[test]
    fn validate_rejects_duplicate_triggers() {
        let set = RuleSet {
            name: "bad".to_string(),
            rules: vec![Rule::new("a", &["a"]), Rule::new("a", &["aa"])],
        };
        assert!(matches!(set.validate(), Err(RuleSetError::Invalid(_))));
    }

    #[test]
    fn validate_rejects_empty_emission() {
        let set = RuleSet {
            name: "bad".to_string(),
            rules: vec![Rule::new("a", &[])],
        };
        assert!(matches!(set.validate(), Err(RuleSetError::Invalid(_))));
    }

    #[test]
    fn validate_rejects_digraph_shadowing_gemination() {
        let set = RuleSet {
            name: "bad".to_string(),
            rules: vec![Rule::new("l", &["l"]).digraph('l', &["ll"])],
        };
        assert!(matches!(set.validate(), Err(RuleSetError::Invalid(_))));
    }

    #[test]
    fn rule_sets_round_trip_through_json() {
        let set = sample();
        let json = serde_json::to_string(&set).expect("serialize");
        let back: RuleSet = serde_json::from_str(&json).expect("parse");
        back.validate().expect("parsed table should stay valid");
        assert_eq!(back, set);
    }
}
