use crate::rules::{Rule, RuleSet};

/// Estonian → Mandarin phoneme rules.
///
/// Mandarin is the only inventory here with an exact match for Estonian ü
/// (X-SAMPA `y`) and a close one for õ (`7`, the unrounded back vowel).
/// Mandarin has no voiced stops, so b/d/g devoice to p/t/k, and r maps to
/// the retroflex approximant.
pub(crate) fn rules() -> RuleSet {
    RuleSet {
        name: "mandarin".to_string(),
        rules: vec![
            // Consonants
            Rule::new("h", &["x"]),
            Rule::new("j", &["j"]),
            Rule::new("l", &["l"]).doubled(),
            Rule::new("m", &["m"]).doubled(),
            Rule::new("n", &["n"]).doubled().digraph('g', &["N"]),
            Rule::new("r", &["r\\`"]).doubled(),
            Rule::new("s", &["s"]).doubled().digraph('h', &["s`"]),
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
            // Vowels, doubled letter = long
            Rule::new("a", &["a"]).doubled(),
            Rule::new("e", &["e"]).doubled(),
            Rule::new("i", &["i"]).doubled(),
            Rule::new("o", &["o"]).doubled(),
            Rule::new("u", &["u"]).doubled(),
            Rule::new("õ", &["7"]).doubled(),
            Rule::new("ä", &["A"]).doubled(),
            Rule::new("ö", &["@"]).doubled(),
            Rule::new("üy", &["y"]).doubled(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use crate::translit::transliterate;

    #[test]
    fn onn_maps_schwa_and_geminate_n() {
        let seq = transliterate("õnn", &super::rules());
        assert_eq!(seq.tokens(), ["7", "n", "n"]);
    }

    #[test]
    fn ylle_uses_the_exact_close_front_rounded_vowel() {
        let seq = transliterate("ülle", &super::rules());
        assert_eq!(seq.tokens(), ["y", "l", "l", "e"]);
    }

    #[test]
    fn r_is_retroflex() {
        let seq = transliterate("rõõm", &super::rules());
        assert_eq!(seq.tokens(), ["r\\`", "7", "7", "m"]);
    }

    #[test]
    fn voiced_stops_devoice() {
        let seq = transliterate("buss", &super::rules());
        assert_eq!(seq.tokens(), ["p", "u", "s", "s"]);
        let seq = transliterate("gaid", &super::rules());
        assert_eq!(seq.tokens(), ["k", "a", "i", "t"]);
    }
}
