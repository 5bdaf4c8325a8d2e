//! Heuristic syllable counting.
//!
//! Counts runs of vowels (`a e i o u y`) as one syllable each, drops one for a
//! trailing `es` or `ed`, and never returns less than one. No pronunciation
//! data is consulted, so the count is an estimate.

/// Count syllables in a single word.
///
/// The word is lower-cased first. Always returns at least 1.
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();

    let mut clusters = 0usize;
    let mut previous_was_vowel = false;
    for ch in word.chars() {
        let is_vowel = is_vowel(ch);
        if is_vowel && !previous_was_vowel {
            clusters += 1;
        }
        previous_was_vowel = is_vowel;
    }

    if word.ends_with("es") || word.ends_with("ed") {
        clusters = clusters.saturating_sub(1);
    }

    clusters.max(1)
}

/// Whether a word counts as complex (more than two syllables).
pub fn is_complex(word: &str) -> bool {
    count_syllables(word) > 2
}

const fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}
