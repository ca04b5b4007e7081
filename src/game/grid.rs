use rand::{
    seq::{IndexedRandom, SliceRandom},
    Rng,
};

use crate::{
    models::{Grid, CELL_COUNT},
    utils::letters::{CONSONANTS, VOWELS},
};

/// Vowels placed on every board before the random fill
pub const GUARANTEED_VOWELS: usize = 2;

pub struct GridGenerator;

impl GridGenerator {
    /// Generate a new 4x4 grid using the thread-local RNG
    pub fn generate(vowel_probability: f64) -> Grid {
        Self::generate_with(&mut rand::rng(), vowel_probability)
    }

    /// Generate a new 4x4 grid.
    ///
    /// Two vowels are always placed; every other slot is a vowel with
    /// `vowel_probability` and a consonant otherwise. The letters are
    /// shuffled before being laid out row-major.
    pub fn generate_with(rng: &mut impl Rng, vowel_probability: f64) -> Grid {
        let mut letters = [' '; CELL_COUNT];

        for slot in letters.iter_mut().take(GUARANTEED_VOWELS) {
            *slot = Self::random_from(&VOWELS, rng);
        }

        for slot in letters.iter_mut().skip(GUARANTEED_VOWELS) {
            *slot = if rng.random::<f64>() < vowel_probability {
                Self::random_from(&VOWELS, rng)
            } else {
                Self::random_from(&CONSONANTS, rng)
            };
        }

        letters.shuffle(rng);

        Grid::new(letters)
    }

    fn random_from(pool: &[char], rng: &mut impl Rng) -> char {
        // Both pools are non-empty constants
        *pool.choose(rng).unwrap_or(&'E')
    }
}
