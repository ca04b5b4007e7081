use std::collections::HashSet;

use crate::{
    config::{Config, DuplicatePolicy, PenaltyPolicy},
    dictionary::Dictionary,
    error::GameError,
    game::{
        grid::GridGenerator,
        scorer::Scorer,
        shake::{AccelSample, ShakeDetector},
        validator::{SelectionPath, WordValidator},
    },
    models::{GameSnapshot, Grid, Notice, SelectionOutcome, SubmitOutcome},
};

/// Observer for score changes and user-facing notices
pub trait GameListener {
    fn on_score_updated(&self, score: i32);

    fn on_notice(&self, _notice: &Notice) {}
}

/// One player's game: the board, the word being built, and the score
pub struct BoggleCore {
    config: Config,
    grid: Grid,
    path: SelectionPath,
    validator: WordValidator,
    submitted_words: HashSet<String>,
    score: i32,
    shake_detector: ShakeDetector,
    listener: Option<Box<dyn GameListener>>,
}

impl BoggleCore {
    /// Start a game on a freshly generated grid.
    ///
    /// Fails with `GameError::ListenerRequired` when the config demands a
    /// listener and none is given.
    pub fn new(
        dictionary: Dictionary,
        config: Config,
        listener: Option<Box<dyn GameListener>>,
    ) -> Result<Self, GameError> {
        if config.game.require_listener && listener.is_none() {
            return Err(GameError::ListenerRequired);
        }

        let validator = WordValidator::with_rules(
            dictionary,
            config.game.min_word_length,
            config.game.min_vowels,
        );
        let shake_detector = ShakeDetector::new(config.shake.threshold, config.shake.min_interval_ms);
        let grid = GridGenerator::generate(config.game.vowel_probability);

        tracing::info!("New game started with {} dictionary words", validator.dictionary().len());

        Ok(Self {
            config,
            grid,
            path: SelectionPath::new(),
            validator,
            submitted_words: HashSet::new(),
            score: 0,
            shake_detector,
            listener,
        })
    }

    /// Load the word list named in the config and start a game with it.
    /// An unreadable word list leaves the game with an empty dictionary.
    pub async fn start(
        config: Config,
        listener: Option<Box<dyn GameListener>>,
    ) -> Result<Self, GameError> {
        let dictionary = Dictionary::load_or_empty(&config.game.dictionary_path).await;
        Self::new(dictionary, config, listener)
    }

    /// Replace the board, e.g. to restore a known layout
    pub fn with_grid(mut self, grid: Grid) -> Self {
        self.grid = grid;
        self.path.clear();
        self
    }

    /// Handle a tap on the cell at `index`
    pub fn select(&mut self, index: usize) -> SelectionOutcome {
        let outcome = self.path.try_select(index);
        match outcome {
            SelectionOutcome::Accepted => {
                tracing::debug!("Selected cell {} -> {}", index, self.current_word());
            }
            SelectionOutcome::NotAdjacent => {
                tracing::debug!("Rejected cell {}: not connected to {:?}", index, self.path.last());
                self.notify_notice(&Notice::NotConnected);
            }
            SelectionOutcome::AlreadySelected | SelectionOutcome::OutOfBounds => {
                tracing::debug!("Ignored cell {} ({:?})", index, outcome);
            }
        }
        outcome
    }

    /// Score the current selection. The selection is cleared whatever the result.
    pub fn submit(&mut self) -> SubmitOutcome {
        let word = self.current_word().to_uppercase();

        let outcome = if self.config.game.duplicate_policy == DuplicatePolicy::Reject
            && self.submitted_words.contains(&word)
        {
            SubmitOutcome::Duplicate { word }
        } else if self.validator.is_valid_word(&word) {
            let points = Scorer::score_of(&word);
            self.submitted_words.insert(word.clone());
            self.score += points;
            SubmitOutcome::Accepted { word, points }
        } else {
            // Hand-built configs skip the range check in `Config::from_lookup`
            let penalty = self.config.game.wrong_word_penalty.max(0);
            self.score = match self.config.game.penalty_policy {
                PenaltyPolicy::FloorAtZero => self.score.saturating_sub(penalty).max(0),
                PenaltyPolicy::AllowNegative => self.score.saturating_sub(penalty),
            };
            SubmitOutcome::Rejected { word, penalty }
        };

        tracing::info!("Submitted {:?}, score now {}", outcome, self.score);

        self.clear_selection();
        self.notify_score();
        self.notify_notice(&Notice::from(&outcome));

        outcome
    }

    /// Drop the current selection; calling it on an empty selection does nothing
    pub fn clear_selection(&mut self) {
        self.path.clear();
    }

    /// Start over: new grid, no words, no selection, zero score
    pub fn reset(&mut self) {
        self.score = 0;
        self.clear_selection();
        self.grid = GridGenerator::generate(self.config.game.vowel_probability);
        self.submitted_words.clear();

        tracing::info!("Game reset");

        self.notify_score();
    }

    /// Feed an accelerometer reading; a shake restarts the game.
    /// Returns true if the game was reset.
    pub fn on_accelerometer(&mut self, sample: AccelSample) -> bool {
        if self.shake_detector.on_sample(sample) {
            self.reset();
            true
        } else {
            false
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn selection(&self) -> &[usize] {
        self.path.indices()
    }

    /// Letters picked so far, in order
    pub fn current_word(&self) -> String {
        self.grid.word_for(self.path.indices())
    }

    pub fn is_available(&self, index: usize) -> bool {
        self.path.is_available(index)
    }

    pub fn submitted_words(&self) -> &HashSet<String> {
        &self.submitted_words
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut submitted_words: Vec<String> = self.submitted_words.iter().cloned().collect();
        submitted_words.sort();

        GameSnapshot {
            grid: self.grid.rows(),
            current_word: self.current_word(),
            selected: self.path.indices().to_vec(),
            score: self.score,
            submitted_words,
        }
    }

    fn notify_score(&self) {
        if let Some(listener) = &self.listener {
            listener.on_score_updated(self.score);
        }
    }

    fn notify_notice(&self, notice: &Notice) {
        if let Some(listener) = &self.listener {
            listener.on_notice(notice);
        }
    }
}
