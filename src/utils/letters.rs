use once_cell::sync::Lazy;

/// The five vowels used for grid generation and word validation
pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Consonants that double a word's score when present
pub const SPECIAL_CONSONANTS: [char; 5] = ['S', 'Z', 'P', 'X', 'Q'];

/// The 21 consonants of the English alphabet, in alphabetical order
pub static CONSONANTS: Lazy<Vec<char>> =
    Lazy::new(|| ('A'..='Z').filter(|ch| !is_vowel(*ch)).collect());

/// Case-insensitive vowel check
pub fn is_vowel(letter: char) -> bool {
    VOWELS.contains(&letter.to_ascii_uppercase())
}

/// Case-insensitive special consonant check
pub fn is_special_consonant(letter: char) -> bool {
    SPECIAL_CONSONANTS.contains(&letter.to_ascii_uppercase())
}

/// Number of vowel characters in a word
pub fn count_vowels(word: &str) -> usize {
    word.chars().filter(|ch| is_vowel(*ch)).count()
}

/// Number of non-vowel characters in a word
pub fn count_consonants(word: &str) -> usize {
    word.chars().filter(|ch| !is_vowel(*ch)).count()
}
