// Vowel reduction: written vowels collapse into the three classes А, У, И,
// modeling unstressed pronunciation.

use metafon_core::character::{is_reducible_vowel, reduce_vowel};

/// Rewrite every detection-set vowel to its reduced class. Consonants,
/// already-reduced vowels and ending placeholder symbols pass through
/// unchanged.
pub fn reduce_vowels(mut word: Vec<char>) -> Vec<char> {
    for c in word.iter_mut() {
        if is_reducible_vowel(*c) {
            *c = reduce_vowel(*c);
        }
    }
    word
}
