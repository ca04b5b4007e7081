use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::{env, str::FromStr};

use crate::game::{
    shake::{DEFAULT_MIN_INTERVAL_MS, DEFAULT_SHAKE_THRESHOLD},
    validator::{MIN_VOWELS, MIN_WORD_LENGTH},
};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    pub game: GameConfig,
    pub shake: ShakeConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub dictionary_path: String,
    pub vowel_probability: f64,
    pub min_word_length: usize,
    pub min_vowels: usize,
    pub wrong_word_penalty: i32,
    pub penalty_policy: PenaltyPolicy,
    pub duplicate_policy: DuplicatePolicy,
    pub require_listener: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShakeConfig {
    pub threshold: f64,
    pub min_interval_ms: u64,
}

/// What a wrong word does to the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PenaltyPolicy {
    /// Score never drops below zero
    FloorAtZero,
    /// Score may go negative
    AllowNegative,
}

/// What resubmitting an accepted word does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Report a duplicate, score unchanged
    Reject,
    /// Award the word again
    Rescore,
}

impl FromStr for PenaltyPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "floor" | "floor_at_zero" => Ok(PenaltyPolicy::FloorAtZero),
            "negative" | "allow_negative" => Ok(PenaltyPolicy::AllowNegative),
            other => bail!("unknown penalty policy '{}'", other),
        }
    }
}

impl FromStr for DuplicatePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(DuplicatePolicy::Reject),
            "rescore" => Ok(DuplicatePolicy::Rescore),
            other => bail!("unknown duplicate policy '{}'", other),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dictionary_path: "./dictionary.txt".to_string(),
            vowel_probability: 0.10,
            min_word_length: MIN_WORD_LENGTH,
            min_vowels: MIN_VOWELS,
            wrong_word_penalty: 10,
            penalty_policy: PenaltyPolicy::FloorAtZero,
            duplicate_policy: DuplicatePolicy::Reject,
            require_listener: false,
        }
    }
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SHAKE_THRESHOLD,
            min_interval_ms: DEFAULT_MIN_INTERVAL_MS,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys take their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = GameConfig::default();

        let vowel_probability: f64 = lookup("VOWEL_PROBABILITY")
            .unwrap_or_else(|| defaults.vowel_probability.to_string())
            .parse()
            .context("VOWEL_PROBABILITY must be a number")?;
        if !(0.0..=1.0).contains(&vowel_probability) {
            bail!("VOWEL_PROBABILITY must be between 0 and 1");
        }

        let wrong_word_penalty: i32 = lookup("WRONG_WORD_PENALTY")
            .unwrap_or_else(|| defaults.wrong_word_penalty.to_string())
            .parse()
            .context("WRONG_WORD_PENALTY must be a number")?;
        if wrong_word_penalty < 0 {
            bail!("WRONG_WORD_PENALTY must not be negative");
        }

        let game = GameConfig {
            dictionary_path: lookup("DICTIONARY_PATH")
                .unwrap_or(defaults.dictionary_path),
            vowel_probability,
            min_word_length: lookup("MIN_WORD_LENGTH")
                .unwrap_or_else(|| MIN_WORD_LENGTH.to_string())
                .parse()
                .context("MIN_WORD_LENGTH must be a number")?,
            min_vowels: lookup("MIN_VOWELS")
                .unwrap_or_else(|| MIN_VOWELS.to_string())
                .parse()
                .context("MIN_VOWELS must be a number")?,
            wrong_word_penalty,
            penalty_policy: lookup("PENALTY_POLICY")
                .unwrap_or_else(|| "floor".to_string())
                .parse()
                .context("PENALTY_POLICY must be 'floor' or 'negative'")?,
            duplicate_policy: lookup("DUPLICATE_POLICY")
                .unwrap_or_else(|| "reject".to_string())
                .parse()
                .context("DUPLICATE_POLICY must be 'reject' or 'rescore'")?,
            require_listener: lookup("REQUIRE_LISTENER")
                .unwrap_or_else(|| "false".to_string())
                .parse()
                .context("REQUIRE_LISTENER must be true or false")?,
        };

        let shake = ShakeConfig {
            threshold: lookup("SHAKE_THRESHOLD")
                .unwrap_or_else(|| DEFAULT_SHAKE_THRESHOLD.to_string())
                .parse()
                .context("SHAKE_THRESHOLD must be a number")?,
            min_interval_ms: lookup("SHAKE_MIN_INTERVAL_MS")
                .unwrap_or_else(|| DEFAULT_MIN_INTERVAL_MS.to_string())
                .parse()
                .context("SHAKE_MIN_INTERVAL_MS must be a number")?,
        };

        Ok(Config { game, shake })
    }
}
