use crate::rules::{Rule, RuleSet};

/// Estonian → Cantonese phoneme rules.
///
/// Chosen for ö (`9`, a rounded front vowel Cantonese actually has) and a
/// good ä approximation (`E`). No r at all, so r falls together with l;
/// b/d/g devoice as in Mandarin.
pub(crate) fn rules() -> RuleSet {
    RuleSet {
        name: "cantonese".to_string(),
        rules: vec![
            Rule::new("h", &["h"]),
            Rule::new("j", &["j"]),
            Rule::new("l", &["l"]).doubled(),
            Rule::new("m", &["m"]).doubled(),
            Rule::new("n", &["n"]).doubled().digraph('g', &["N"]),
            Rule::new("r", &["l"]).doubled(),
            Rule::new("s", &["s"]).doubled().digraph('h', &["s"]),
            Rule::new("t", &["t"]).doubled().digraph('s', &["ts"]),
            Rule::new("p", &["p"]).doubled(),
            Rule::new("k", &["k"]).doubled(),
            Rule::new("b", &["p"]),
            Rule::new("d", &["t"]),
            Rule::new("g", &["k"]),
            Rule::new("f", &["f"]),
            Rule::new("v", &["w"]),
            Rule::new("z", &["ts"]),
            Rule::new("w", &["w"]),
            Rule::new("a", &["a"]).doubled(),
            Rule::new("e", &["e"]).doubled(),
            Rule::new("i", &["i"]).doubled(),
            Rule::new("o", &["o"]).doubled(),
            Rule::new("u", &["u"]).doubled(),
            Rule::new("õ", &["8"]).doubled(),
            Rule::new("ä", &["E"]).doubled(),
            Rule::new("ö", &["9"]).doubled(),
            Rule::new("üy", &["y"]).doubled(),
        ],
    }
}
