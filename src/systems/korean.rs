use crate::rules::{Rule, RuleSet};

/// Estonian → Korean phoneme rules.
///
/// Chosen for its flap `4`, a close match for the Estonian trilled r. The
/// geminate stops map onto Korean tense consonants as single tokens (`pp`,
/// `tt`, `k_t`, `s_t`) rather than repeated ones, and a doubled l keeps the
/// lateral instead of the flap. f/v/z do not exist and fall back to p/b/s.
pub(crate) fn rules() -> RuleSet {
    RuleSet {
        name: "korean".to_string(),
        rules: vec![
            Rule::new("h", &["h"]),
            Rule::new("j", &["j"]),
            Rule::new("l", &["4"]).doubled_as(&["l", "l"]),
            Rule::new("m", &["m"]).doubled(),
            Rule::new("n", &["n"]).doubled().digraph('g', &["N"]),
            Rule::new("r", &["4"]).doubled(),
            Rule::new("s", &["s"]).doubled_as(&["s_t"]).digraph('h', &["s"]),
            Rule::new("t", &["t"]).doubled_as(&["tt"]).digraph('s', &["ts\\_h"]),
            Rule::new("p", &["p"]).doubled_as(&["pp"]),
            Rule::new("k", &["k"]).doubled_as(&["k_t"]),
            Rule::new("b", &["b"]),
            Rule::new("d", &["d"]),
            Rule::new("g", &["g"]),
            Rule::new("f", &["p"]),
            Rule::new("v", &["b"]),
            Rule::new("z", &["s"]),
            Rule::new("w", &["w"]),
            Rule::new("a", &["6"]).doubled(),
            Rule::new("e", &["e_o"]).doubled(),
            Rule::new("i", &["i"]).doubled(),
            Rule::new("o", &["o"]).doubled(),
            Rule::new("u", &["M"]).doubled(),
            Rule::new("õ", &["V"]).doubled(),
            Rule::new("ä", &["6"]).doubled(),
            Rule::new("ö", &["V"]).doubled(),
            // ü and y both land on M but stay separate letters, so a mixed
            // üy pair reads as two short vowels rather than one long one.
            Rule::new("ü", &["M"]).doubled(),
            Rule::new("y", &["M"]).doubled(),
        ],
    }
}
