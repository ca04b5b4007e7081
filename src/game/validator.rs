use crate::{
    dictionary::Dictionary,
    models::{Position, SelectionOutcome, CELL_COUNT},
    utils::letters::count_vowels,
};

/// Shortest word that can score
pub const MIN_WORD_LENGTH: usize = 4;
/// Fewest vowels a scoring word may contain
pub const MIN_VOWELS: usize = 2;

/// Cells picked so far for the word being built, in tap order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionPath {
    indices: Vec<usize>,
}

impl SelectionPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to extend the path with `index`. The path is unchanged unless the
    /// outcome is `Accepted`.
    pub fn try_select(&mut self, index: usize) -> SelectionOutcome {
        if index >= CELL_COUNT {
            return SelectionOutcome::OutOfBounds;
        }
        if self.indices.contains(&index) {
            return SelectionOutcome::AlreadySelected;
        }
        if let Some(&last) = self.indices.last() {
            if !Self::are_adjacent(last, index) {
                return SelectionOutcome::NotAdjacent;
            }
        }
        self.indices.push(index);
        SelectionOutcome::Accepted
    }

    /// Check if two cells touch, including diagonals
    pub fn are_adjacent(a: usize, b: usize) -> bool {
        let pos1 = Position::from_index(a);
        let pos2 = Position::from_index(b);
        let row_diff = (pos1.row as i32 - pos2.row as i32).abs();
        let col_diff = (pos1.col as i32 - pos2.col as i32).abs();

        row_diff <= 1 && col_diff <= 1
    }

    /// A cell can be picked while it is not already part of the path
    pub fn is_available(&self, index: usize) -> bool {
        index < CELL_COUNT && !self.indices.contains(&index)
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn last(&self) -> Option<usize> {
        self.indices.last().copied()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }
}

/// Decides whether a finished word scores
pub struct WordValidator {
    dictionary: Dictionary,
    min_word_length: usize,
    min_vowels: usize,
}

impl WordValidator {
    pub fn new(dictionary: Dictionary) -> Self {
        Self::with_rules(dictionary, MIN_WORD_LENGTH, MIN_VOWELS)
    }

    pub fn with_rules(dictionary: Dictionary, min_word_length: usize, min_vowels: usize) -> Self {
        Self {
            dictionary,
            min_word_length,
            min_vowels,
        }
    }

    /// Long enough, in the dictionary, and carrying enough vowels
    pub fn is_valid_word(&self, word: &str) -> bool {
        word.chars().count() >= self.min_word_length
            && self.dictionary.contains(word)
            && count_vowels(word) >= self.min_vowels
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_positions() {
        // 0 is (0,0), 1 is (0,1), 5 is (1,1), 10 is (2,2)
        assert!(SelectionPath::are_adjacent(0, 1));
        assert!(SelectionPath::are_adjacent(0, 5));
        assert!(SelectionPath::are_adjacent(5, 10));
        assert!(!SelectionPath::are_adjacent(0, 2));
        assert!(!SelectionPath::are_adjacent(0, 10));
        // Row wrap: 3 is (0,3), 4 is (1,0)
        assert!(!SelectionPath::are_adjacent(3, 4));
    }

    #[test]
    fn test_try_select_accepts_diagonal() {
        let mut path = SelectionPath::new();
        assert_eq!(path.try_select(0), SelectionOutcome::Accepted);
        assert!(path.try_select(5).is_accepted());
        assert_eq!(path.indices(), &[0, 5]);
        assert!(!path.is_available(0));
        assert!(!path.is_available(5));
        assert!(path.is_available(6));
    }

    #[test]
    fn test_try_select_rejects_non_adjacent() {
        let mut path = SelectionPath::new();
        path.try_select(0);
        assert_eq!(path.try_select(2), SelectionOutcome::NotAdjacent);
        assert_eq!(path.indices(), &[0]);
    }

    #[test]
    fn test_try_select_rejects_repeat() {
        let mut path = SelectionPath::new();
        path.try_select(0);
        path.try_select(1);
        assert_eq!(path.try_select(0), SelectionOutcome::AlreadySelected);
        assert_eq!(path.try_select(1), SelectionOutcome::AlreadySelected);
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn test_try_select_out_of_bounds() {
        let mut path = SelectionPath::new();
        assert_eq!(path.try_select(16), SelectionOutcome::OutOfBounds);
        assert!(path.is_empty());
        assert!(!path.is_available(16));
    }

    #[test]
    fn test_first_pick_is_unconstrained() {
        let mut path = SelectionPath::new();
        assert!(path.try_select(15).is_accepted());
        assert_eq!(path.last(), Some(15));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut path = SelectionPath::new();
        path.try_select(3);
        path.clear();
        assert!(path.is_empty());
        path.clear();
        assert!(path.is_empty());
    }

    fn validator(words: &[&str]) -> WordValidator {
        WordValidator::new(Dictionary::from_words(words.iter().copied()))
    }

    #[test]
    fn test_short_words_never_valid() {
        let v = validator(&["CAT", "AEIOU", "TAPE"]);
        assert!(!v.is_valid_word("CAT"));
    }

    #[test]
    fn test_word_must_be_in_dictionary() {
        let v = validator(&["TAPE"]);
        assert!(v.is_valid_word("TAPE"));
        assert!(v.is_valid_word("tape"));
        assert!(!v.is_valid_word("AEIOU"));
        assert!(!v.is_valid_word("ROPE"));
    }

    #[test]
    fn test_word_needs_two_vowels() {
        let v = validator(&["TSKS", "AEIOU", "BRAT"]);
        assert!(!v.is_valid_word("TSKS"));
        assert!(!v.is_valid_word("BRAT"));
        assert!(v.is_valid_word("AEIOU"));
    }

    #[test]
    fn test_empty_dictionary_rejects_everything() {
        let v = WordValidator::new(Dictionary::empty());
        assert!(!v.is_valid_word("TAPE"));
    }
}
