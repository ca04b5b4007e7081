use std::fmt;

use serde::{Deserialize, Serialize};

/// Width and height of the board
pub const GRID_SIZE: usize = 4;
/// Number of cells on the board
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Row/column of a board cell, derived from `index = row * GRID_SIZE + col`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn from_index(index: usize) -> Self {
        Self {
            row: index / GRID_SIZE,
            col: index % GRID_SIZE,
        }
    }

    pub fn index(&self) -> usize {
        self.row * GRID_SIZE + self.col
    }
}

/// The 4x4 letter board, stored row-major
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Grid {
    letters: [char; CELL_COUNT],
}

impl Grid {
    /// Build a grid from 16 letters; letters are stored uppercase
    pub fn new(letters: [char; CELL_COUNT]) -> Self {
        Self {
            letters: letters.map(|ch| ch.to_ascii_uppercase()),
        }
    }

    pub fn letter_at(&self, index: usize) -> Option<char> {
        self.letters.get(index).copied()
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Letters grouped by row, top to bottom
    pub fn rows(&self) -> Vec<Vec<char>> {
        self.letters
            .chunks(GRID_SIZE)
            .map(|row| row.to_vec())
            .collect()
    }

    /// Concatenate the letters at the given indices, skipping any that fall off the board
    pub fn word_for(&self, path: &[usize]) -> String {
        path.iter().filter_map(|&index| self.letter_at(index)).collect()
    }
}

impl TryFrom<&str> for Grid {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let letters: Vec<char> = value.chars().filter(|ch| !ch.is_whitespace()).collect();
        let letters: [char; CELL_COUNT] = letters
            .try_into()
            .map_err(|v: Vec<char>| format!("expected {} letters, got {}", CELL_COUNT, v.len()))?;
        if let Some(bad) = letters.iter().find(|ch| !ch.is_ascii_alphabetic()) {
            return Err(format!("'{}' is not a letter", bad));
        }
        Ok(Self::new(letters))
    }
}

/// Result of tapping a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionOutcome {
    Accepted,
    AlreadySelected,
    NotAdjacent,
    OutOfBounds,
}

impl SelectionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SelectionOutcome::Accepted)
    }
}

/// Result of submitting the current selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SubmitOutcome {
    Accepted { word: String, points: i32 },
    Duplicate { word: String },
    Rejected { word: String, penalty: i32 },
}

impl SubmitOutcome {
    pub fn word(&self) -> &str {
        match self {
            SubmitOutcome::Accepted { word, .. }
            | SubmitOutcome::Duplicate { word }
            | SubmitOutcome::Rejected { word, .. } => word,
        }
    }
}

/// Transient user-facing message raised by the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notice {
    NotConnected,
    AlreadyUsed { word: String },
    Correct { points: i32 },
    Incorrect { penalty: i32 },
}

impl From<&SubmitOutcome> for Notice {
    fn from(outcome: &SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Accepted { points, .. } => Notice::Correct { points: *points },
            SubmitOutcome::Duplicate { word } => Notice::AlreadyUsed { word: word.clone() },
            SubmitOutcome::Rejected { penalty, .. } => Notice::Incorrect { penalty: *penalty },
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NotConnected => write!(f, "You may only select connected letters"),
            Notice::AlreadyUsed { word } => write!(f, "You've already used {}", word),
            Notice::Correct { points } => write!(f, "That's correct, +{}", points),
            Notice::Incorrect { penalty } => write!(f, "That's incorrect, -{}", penalty),
        }
    }
}

/// Renderable view of the game for a host UI
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSnapshot {
    pub grid: Vec<Vec<char>>,
    pub current_word: String,
    pub selected: Vec<usize>,
    pub score: i32,
    pub submitted_words: Vec<String>,
}
