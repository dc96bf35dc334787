use crate::systems::Language;

/// Pick the phoneme inventory that renders `word` most faithfully.
///
/// A fixed, ordered list of predicates over the word's characters; the
/// first match wins. The order encodes phonetic priority — an exact vowel
/// match beats a merely compatible inventory — so a word containing both ü
/// and ä resolves to Mandarin, not Cantonese.
///
/// Pure function of the word's content: no position sensitivity, no state.
/// Expects the word to be lowercased already.
pub fn select_language(word: &str) -> Language {
    // ü → Mandarin, the one inventory with the exact vowel. y is the older
    // orthography for the same sound.
    if word.contains(['ü', 'y']) {
        return Language::Mandarin;
    }
    // ö → Cantonese, the best rounded-front approximation.
    if word.contains('ö') {
        return Language::Cantonese;
    }
    // õ → Mandarin's unrounded back vowel.
    if word.contains('õ') {
        return Language::Mandarin;
    }
    // ä → Cantonese's open E.
    if word.contains('ä') {
        return Language::Cantonese;
    }
    // r → Korean's flap.
    if word.contains('r') {
        return Language::Korean;
    }
    // Plain a/e/i/o/u only → Japanese, the cleanest basic vowels.
    if has_only_basic_vowels(word) {
        return Language::Japanese;
    }
    // Fallback: English, the most compatible inventory.
    Language::English
}

fn has_only_basic_vowels(word: &str) -> bool {
    !word.contains(['ä', 'ö', 'ü', 'õ'])
}

#[cfg(test)]
mod tests {
    use super::select_language;
    use crate::systems::Language;

    #[test]
    fn u_umlaut_outranks_everything() {
        // Contains both ü and r; rule order must pick Mandarin over Korean.
        assert_eq!(select_language("rüü"), Language::Mandarin);
        // Contains both ü and ä.
        assert_eq!(select_language("ülbä"), Language::Mandarin);
    }

    #[test]
    fn y_counts_as_u_umlaut() {
        assert_eq!(select_language("lyhike"), Language::Mandarin);
    }

    #[test]
    fn o_umlaut_outranks_o_tilde() {
        assert_eq!(select_language("söök"), Language::Cantonese);
        assert_eq!(select_language("võõp"), Language::Mandarin);
    }

    #[test]
    fn a_umlaut_picks_cantonese() {
        assert_eq!(select_language("päike"), Language::Cantonese);
    }

    #[test]
    fn r_without_special_vowels_picks_korean() {
        assert_eq!(select_language("tere"), Language::Korean);
        // ...but any special vowel outranks r.
        assert_eq!(select_language("äral"), Language::Cantonese);
    }

    #[test]
    fn plain_words_pick_japanese() {
        assert_eq!(select_language("laulan"), Language::Japanese);
        assert_eq!(select_language("ilus"), Language::Japanese);
    }

    #[test]
    fn selection_is_deterministic() {
        for word in ["rüü", "söök", "laulan", "tere", ""] {
            assert_eq!(select_language(word), select_language(word));
        }
    }

    #[test]
    fn empty_word_still_selects() {
        // Vacuously passes the basic-vowel check.
        assert_eq!(select_language(""), Language::Japanese);
    }
}
