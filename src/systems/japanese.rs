use crate::rules::{Rule, RuleSet};

/// Estonian → Japanese phoneme rules.
///
/// The cleanest fit for words built from plain a/e/i/o/u. Both l and r land
/// on the Japanese tap, j on the glide `y`, and õ/ö merge into `o` — the
/// inventory has nothing closer. Voiced stops survive unchanged.
pub(crate) fn rules() -> RuleSet {
    RuleSet {
        name: "japanese".to_string(),
        rules: vec![
            Rule::new("h", &["h"]),
            Rule::new("j", &["y"]),
            Rule::new("l", &["r"]).doubled(),
            Rule::new("m", &["m"]).doubled(),
            Rule::new("n", &["n"]).doubled().digraph('g', &["N", "g"]),
            Rule::new("r", &["r"]).doubled(),
            Rule::new("s", &["s"]).doubled().digraph('h', &["sh"]),
            Rule::new("t", &["t"]).doubled().digraph('s', &["ts"]),
            Rule::new("p", &["p"]).doubled(),
            Rule::new("k", &["k"]).doubled(),
            Rule::new("b", &["b"]),
            Rule::new("d", &["d"]),
            Rule::new("g", &["g"]),
            Rule::new("f", &["f"]),
            Rule::new("v", &["v"]),
            Rule::new("z", &["z"]),
            Rule::new("w", &["w"]),
            Rule::new("a", &["a"]).doubled(),
            Rule::new("e", &["e"]).doubled(),
            Rule::new("i", &["i"]).doubled(),
            Rule::new("o", &["o"]).doubled(),
            Rule::new("u", &["u"]).doubled(),
            // õ and ö share one class, so õö and öõ count as a long vowel too.
            Rule::new("õö", &["o"]).doubled(),
            Rule::new("ä", &["a"]).doubled(),
            Rule::new("üy", &["u"]).doubled(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use crate::translit::transliterate;

    #[test]
    fn l_lands_on_the_tap() {
        let seq = transliterate("laulan", &super::rules());
        assert_eq!(seq.tokens(), ["r", "a", "u", "r", "a", "n"]);
    }

    #[test]
    fn ng_keeps_a_released_g() {
        let seq = transliterate("singi", &super::rules());
        assert_eq!(seq.tokens(), ["s", "i", "N", "g", "i"]);
    }

    #[test]
    fn front_rounded_vowels_merge_into_o() {
        let seq = transliterate("öö", &super::rules());
        assert_eq!(seq.tokens(), ["o", "o"]);
        let seq = transliterate("võti", &super::rules());
        assert_eq!(seq.tokens(), ["v", "o", "t", "i"]);
    }
}
