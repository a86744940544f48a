// Top-level encoding pipeline.
//
// Five sequential, stateless stages over a buffer of code points:
//
// 1. Alphabet filtering: uppercase, keep only working-alphabet letters.
// 2. Ending normalization: collapse a recognized morphological ending
//    into a single placeholder symbol.
// 3. Affricate cluster collapse: delete СТЧ / ТЧ / СЧ clusters.
// 4. Vowel reduction: map written vowels to the classes А / У / И.
// 5. Devoicing: replace voiced obstruents with their voiceless partners
//    under a trailing-context rule.
//
// Each stage consumes the previous stage's output; no stage holds state
// across calls, so `encode` is freely concurrent.

mod devoice;
mod endings;
mod filter;
mod phonemes;
mod vowels;

pub use devoice::devoice_obstruents;
pub use endings::replace_ending;
pub use filter::filter_word;
pub use phonemes::collapse_affricates;
pub use vowels::reduce_vowels;

/// Compute the phonetic fingerprint of a single word token.
///
/// Accepts arbitrary text: anything outside the working alphabet is dropped
/// by the filtering stage, so the operation is total and never fails. Words
/// that filter down to zero code points yield the empty string; a single
/// retained code point is returned unchanged with all later stages skipped,
/// since no stage has a meaningful window to operate on.
pub fn encode(word: &str) -> String {
    let word = filter_word(word);
    if word.len() <= 1 {
        return word.into_iter().collect();
    }

    let word = replace_ending(word);
    let word = collapse_affricates(word);
    let word = reduce_vowels(word);
    let word = devoice_obstruents(word);

    word.into_iter().collect()
}
