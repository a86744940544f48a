// Ending normalization: collapse a recognized Russian surname/adjective
// ending into a single placeholder symbol.

use std::sync::LazyLock;

use hashbrown::HashMap;

/// One group of ending rules sharing a window length.
struct WindowRules {
    /// Window length in code points.
    len: usize,
    /// Literal window text mapped to its placeholder symbol.
    symbols: HashMap<&'static str, char>,
}

impl WindowRules {
    fn new(len: usize, rules: &[(&'static str, char)]) -> Self {
        Self {
            len,
            symbols: rules.iter().copied().collect(),
        }
    }
}

/// The ending table, ordered longest window first. Built once and read-only
/// thereafter, so concurrent encodes share it without locking.
static ENDING_TABLE: LazyLock<Vec<WindowRules>> = LazyLock::new(|| {
    vec![
        WindowRules::new(
            6,
            &[
                ("ОВСКИЙ", '@'),
                ("ЕВСКИЙ", '#'),
                ("ОВСКАЯ", '$'),
                ("ЕВСКАЯ", '%'),
            ],
        ),
        WindowRules::new(4, &[("ИЕВА", '9'), ("ЕЕВА", '9')]),
        WindowRules::new(
            3,
            &[
                ("ОВА", '9'),
                ("ЕВА", '9'),
                ("ИНА", '1'),
                ("ИЕВ", '4'),
                ("ЕЕВ", '4'),
                ("НКО", '3'),
            ],
        ),
        WindowRules::new(
            2,
            &[
                ("ОВ", '4'),
                ("ЕВ", '4'),
                ("АЯ", '6'),
                ("ИЙ", '7'),
                ("ЫЙ", '7'),
                ("ЫХ", '5'),
                ("ИХ", '5'),
                ("ИН", '8'),
                ("ИК", '2'),
                ("ЕК", '2'),
                ("УК", '0'),
                ("ЮК", '0'),
            ],
        ),
    ]
});

/// Try each window length (6, 4, 3, 2) against the *leading* code points of
/// the word; on the first literal match, drop as many trailing code points
/// as the window length and append the matched rule's placeholder symbol.
/// Words shorter than a window length skip that window; words matching no
/// literal are returned unchanged.
///
/// The window is taken from the front of the word, not its end. For words
/// whose length equals the window length the two coincide; for longer words
/// this is the established fingerprint contract, kept as-is so existing
/// keys stay stable.
pub fn replace_ending(word: Vec<char>) -> Vec<char> {
    let n = word.len();
    for group in ENDING_TABLE.iter() {
        if n < group.len {
            continue;
        }
        let window: String = word[..group.len].iter().collect();
        if let Some(&symbol) = group.symbols.get(window.as_str()) {
            let mut out = word;
            out.truncate(n - group.len);
            out.push(symbol);
            return out;
        }
    }
    word
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replaced(s: &str) -> String {
        replace_ending(s.chars().collect()).into_iter().collect()
    }

    // -- Exact-length matches (front and back windows coincide) --

    #[test]
    fn six_char_endings() {
        assert_eq!(replaced("ОВСКИЙ"), "@");
        assert_eq!(replaced("ЕВСКИЙ"), "#");
        assert_eq!(replaced("ОВСКАЯ"), "$");
        assert_eq!(replaced("ЕВСКАЯ"), "%");
    }

    #[test]
    fn four_char_endings() {
        assert_eq!(replaced("ИЕВА"), "9");
        assert_eq!(replaced("ЕЕВА"), "9");
    }

    #[test]
    fn three_char_endings() {
        assert_eq!(replaced("ОВА"), "9");
        assert_eq!(replaced("ЕВА"), "9");
        assert_eq!(replaced("ИНА"), "1");
        assert_eq!(replaced("ИЕВ"), "4");
        assert_eq!(replaced("ЕЕВ"), "4");
        assert_eq!(replaced("НКО"), "3");
    }

    #[test]
    fn two_char_endings() {
        assert_eq!(replaced("ОВ"), "4");
        assert_eq!(replaced("ЕВ"), "4");
        assert_eq!(replaced("АЯ"), "6");
        assert_eq!(replaced("ИЙ"), "7");
        assert_eq!(replaced("ЫЙ"), "7");
        assert_eq!(replaced("ЫХ"), "5");
        assert_eq!(replaced("ИХ"), "5");
        assert_eq!(replaced("ИН"), "8");
        assert_eq!(replaced("ИК"), "2");
        assert_eq!(replaced("ЕК"), "2");
        assert_eq!(replaced("УК"), "0");
        assert_eq!(replaced("ЮК"), "0");
    }

    // -- Window priority --

    #[test]
    fn longest_window_wins() {
        // "ЕЕВА" must use the 4-length rule, never fall through to "ЕЕВ".
        assert_eq!(replaced("ЕЕВА"), "9");
        // A word starting with a 6-length literal uses the 6-length rule.
        assert_eq!(replaced("ОВСКИЙОВ"), "ОВ@");
    }

    #[test]
    fn first_matching_length_stops_search() {
        // "ИНАХ" misses the 4-window but hits "ИНА" at length 3:
        // one trailing char group of 3 is dropped, symbol appended.
        assert_eq!(replaced("ИНАХ"), "И1");
    }

    // -- Front-window contract for longer words --

    #[test]
    fn window_is_taken_from_the_front() {
        // "ОВСКИЙХХ" starts with a 6-length literal even though the word
        // does not end with it.
        assert_eq!(replaced("ОВСКИЙХХ"), "ОВ@");
        // "ИВАНОВ" ends with ОВ but does not start with any literal.
        assert_eq!(replaced("ИВАНОВ"), "ИВАНОВ");
    }

    #[test]
    fn tail_is_dropped_not_the_window() {
        // "ОВОД" matches "ОВ" at the front; the two *trailing* chars go.
        assert_eq!(replaced("ОВОД"), "ОВ4");
    }

    // -- Bounds --

    #[test]
    fn short_words_skip_oversized_windows() {
        // Must not panic: only windows <= word length are attempted.
        assert_eq!(replaced("ОВ"), "4"); // skips 6, 4, 3
        assert_eq!(replaced("НКО"), "3"); // skips 6, 4
        assert_eq!(replaced("РАК"), "РАК"); // no match at any length
    }

    #[test]
    fn no_match_returns_word_unchanged() {
        assert_eq!(replaced("ПЕТРОВИЧ"), "ПЕТРОВИЧ");
        assert_eq!(replaced("МУЖЧИНА"), "МУЖЧИНА");
    }
}
