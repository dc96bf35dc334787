use crate::rules::{Rule, RuleSet};

/// Estonian → English phoneme rules.
///
/// ARPAbet-style tokens, the widest-compatibility fallback. Every vowel gets
/// a two-letter token (`aa`, `eh`, `iy`, ...), consonants keep their voicing.
pub(crate) fn rules() -> RuleSet {
    RuleSet {
        name: "english".to_string(),
        rules: vec![
            Rule::new("h", &["hh"]),
            Rule::new("j", &["y"]),
            Rule::new("l", &["l"]).doubled(),
            Rule::new("m", &["m"]).doubled(),
            Rule::new("n", &["n"]).doubled().digraph('g', &["ng", "g"]),
            Rule::new("r", &["r"]).doubled(),
            Rule::new("s", &["s"]).doubled().digraph('h', &["sh"]),
            Rule::new("t", &["t"]).doubled().digraph('s', &["t", "s"]),
            Rule::new("p", &["p"]).doubled(),
            Rule::new("k", &["k"]).doubled(),
            Rule::new("b", &["b"]),
            Rule::new("d", &["d"]),
            Rule::new("g", &["g"]),
            Rule::new("f", &["f"]),
            Rule::new("v", &["v"]),
            Rule::new("z", &["z"]),
            Rule::new("w", &["w"]),
            Rule::new("a", &["aa"]).doubled(),
            Rule::new("e", &["eh"]).doubled(),
            Rule::new("i", &["iy"]).doubled(),
            Rule::new("o", &["ow"]).doubled(),
            Rule::new("u", &["uw"]).doubled(),
            Rule::new("õ", &["uh"]).doubled(),
            Rule::new("ä", &["ae"]).doubled(),
            Rule::new("ö", &["er"]).doubled(),
            Rule::new("üy", &["iy"]).doubled(),
        ],
    }
}
