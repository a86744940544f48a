// Character classification for the Russian phonetic working alphabet.
//
// Every stage of the encoding pipeline operates on uppercase Cyrillic
// characters drawn from WORKING_ALPHABET; the tables below define which
// characters survive filtering and how individual characters behave in
// the vowel-reduction and devoicing stages.

// ---------------------------------------------------------------------------
// Working alphabet
// ---------------------------------------------------------------------------

/// Uppercase Cyrillic letters accepted anywhere in the pipeline.
/// The soft sign (Ь) and hard sign (Ъ) carry no sound of their own and
/// are excluded, so filtering drops them along with all non-Cyrillic input.
const WORKING_ALPHABET: &[char] = &[
    'О', 'Е', 'А', 'И', 'У', 'Э', 'Ю', 'Я', 'П', 'С', 'Т', 'Р', 'К', 'Л', 'М', 'Н', 'Б', 'В',
    'Г', 'Д', 'Ж', 'З', 'Й', 'Ф', 'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ё', 'Ы',
];

/// Vowels that are rewritten by the reduction stage.
///
/// А, И and У are *targets* of reduction, not members of this set: once a
/// vowel has been reduced it already sits outside the detection set and is
/// never re-matched.
const REDUCIBLE_VOWELS: &[char] = &['О', 'Ю', 'Е', 'Э', 'Я', 'Ё', 'Ы'];

/// Voiced consonants eligible for devoicing.
const VOICED_OBSTRUENTS: &[char] = &['Б', 'З', 'Д', 'В', 'Г'];

/// Followers that trigger devoicing of a preceding voiced obstruent.
/// Vowels and the sonorants Л, М, Н, Р.
const DEVOICING_TRIGGERS: &[char] = &[
    'А', 'Я', 'О', 'Ы', 'И', 'Е', 'Ё', 'Э', 'Ю', 'Л', 'М', 'Н', 'Р',
];

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Check whether a character belongs to the working alphabet.
pub fn is_allowed(c: char) -> bool {
    WORKING_ALPHABET.contains(&c)
}

/// Check whether a character is a vowel matched by the reduction stage.
pub fn is_reducible_vowel(c: char) -> bool {
    REDUCIBLE_VOWELS.contains(&c)
}

/// Check whether a character is a voiced obstruent eligible for devoicing.
pub fn is_voiced_obstruent(c: char) -> bool {
    VOICED_OBSTRUENTS.contains(&c)
}

/// Check whether a character, when following a voiced obstruent, triggers
/// devoicing of that obstruent.
pub fn is_devoicing_trigger(c: char) -> bool {
    DEVOICING_TRIGGERS.contains(&c)
}

// ---------------------------------------------------------------------------
// Character rewrites
// ---------------------------------------------------------------------------

/// Map a vowel to its reduced class: А, У or И.
///
/// Callers gate on [`is_reducible_vowel`]; characters outside the mapping
/// are returned unchanged.
pub fn reduce_vowel(c: char) -> char {
    match c {
        'О' | 'Ы' | 'А' | 'Я' => 'А',
        'Ю' | 'У' => 'У',
        'Е' | 'Ё' | 'Э' | 'И' | 'Й' => 'И',
        other => other,
    }
}

/// Map a voiced obstruent to its voiceless partner.
///
/// Characters outside [`is_voiced_obstruent`] are returned unchanged.
pub fn devoice(c: char) -> char {
    match c {
        'Б' => 'П',
        'З' => 'С',
        'Д' => 'Т',
        'В' => 'Ф',
        'Г' => 'К',
        other => other,
    }
}

// ---------------------------------------------------------------------------
// Simple case conversion
// ---------------------------------------------------------------------------

/// Convert a character to its simple uppercase equivalent.
///
/// Uses Rust's built-in Unicode case mapping. For characters with
/// multi-character uppercase expansions, returns only the first character;
/// every Cyrillic letter of interest maps one-to-one (ё -> Ё, я -> Я).
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    iter.next().unwrap_or(c)
}
