// Alphabet filtering: the entry stage of the pipeline.

use metafon_core::character::{is_allowed, simple_upper};

/// Uppercase the input and keep only working-alphabet letters, preserving
/// their original order.
///
/// Digits, Latin letters, punctuation, whitespace and Cyrillic letters
/// outside the working alphabet (Ь, Ъ) are all discarded. The result may
/// be empty. Every later stage relies on the invariant that each retained
/// character belongs to the working alphabet.
pub fn filter_word(word: &str) -> Vec<char> {
    word.chars()
        .map(simple_upper)
        .filter(|&c| is_allowed(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filtered(s: &str) -> String {
        filter_word(s).into_iter().collect()
    }

    #[test]
    fn keeps_cyrillic_in_order() {
        assert_eq!(filtered("ИВАНОВ"), "ИВАНОВ");
    }

    #[test]
    fn uppercases_before_filtering() {
        assert_eq!(filtered("иванов"), "ИВАНОВ");
        assert_eq!(filtered("ёлка"), "ЁЛКА");
    }

    #[test]
    fn drops_everything_else() {
        assert_eq!(filtered("Иванов-Петров 2-й"), "ИВАНОВПЕТРОВЙ");
        assert_eq!(filtered("Smith"), "");
        assert_eq!(filtered("12 345"), "");
    }

    #[test]
    fn drops_soft_and_hard_signs() {
        assert_eq!(filtered("ОБЪЁМ"), "ОБЁМ");
        assert_eq!(filtered("медведь"), "МЕДВЕД");
    }

    #[test]
    fn empty_input() {
        assert_eq!(filtered(""), "");
    }

    #[test]
    fn idempotent_on_filtered_output() {
        let once = filtered("Щёлоково, д. 5");
        assert_eq!(filtered(&once), once);
    }
}
