pub mod config;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod logging;
pub mod models;
pub mod utils;

pub use config::{Config, DuplicatePolicy, PenaltyPolicy};
pub use dictionary::Dictionary;
pub use error::GameError;
pub use game::{AccelSample, BoggleCore, GameListener};
pub use models::{GameSnapshot, Grid, Notice, SelectionOutcome, SubmitOutcome};
