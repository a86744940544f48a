// Devoicing: voiced obstruents are replaced by their voiceless partners
// under a trailing-context rule.

use metafon_core::character::{devoice, is_devoicing_trigger, is_voiced_obstruent};

/// Replace each voiced obstruent with its voiceless partner when it sits at
/// the last position or its follower is a devoicing trigger (a vowel or one
/// of the sonorants Л, М, Н, Р). All other characters pass through.
///
/// The scan is per code point: `word` is already a decoded character buffer,
/// so multi-byte storage widths can never split a character here.
pub fn devoice_obstruents(mut word: Vec<char>) -> Vec<char> {
    let len = word.len();
    for i in 0..len {
        if !is_voiced_obstruent(word[i]) {
            continue;
        }
        if i + 1 == len || is_devoicing_trigger(word[i + 1]) {
            word[i] = devoice(word[i]);
        }
    }
    word
}
