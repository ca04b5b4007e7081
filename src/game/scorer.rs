use crate::utils::letters::{count_consonants, count_vowels, is_special_consonant};

/// Points per consonant
pub const CONSONANT_POINTS: i32 = 1;
/// Points per vowel
pub const VOWEL_POINTS: i32 = 5;
/// Word multiplier when a special consonant is present
pub const SPECIAL_MULTIPLIER: i32 = 2;

pub struct Scorer;

impl Scorer {
    /// Calculate the score for a word.
    ///
    /// Scoring rules:
    /// - Each consonant is worth 1 point
    /// - Each vowel (A, E, I, O, U) is worth 5 points
    /// - Any S, Z, P, X or Q doubles the whole word
    pub fn score_of(word: &str) -> i32 {
        let base = Self::base_score(word);
        base * Self::multiplier(word)
    }

    fn base_score(word: &str) -> i32 {
        count_consonants(word) as i32 * CONSONANT_POINTS + count_vowels(word) as i32 * VOWEL_POINTS
    }

    fn multiplier(word: &str) -> i32 {
        if word.chars().any(is_special_consonant) {
            SPECIAL_MULTIPLIER
        } else {
            1
        }
    }
}
