use std::collections::HashSet;
use std::path::Path;
use tokio::fs;

use crate::error::GameError;

#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Load dictionary from a newline-delimited word list
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, GameError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| GameError::Dictionary {
                path: path.display().to_string(),
                source,
            })?;
        let dictionary = Self::parse(&content);

        tracing::info!("Loaded {} words into dictionary", dictionary.len());

        Ok(dictionary)
    }

    /// Load dictionary, falling back to an empty one if the file can't be read.
    /// Every word is rejected against an empty dictionary.
    pub async fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(&path).await {
            Ok(dict) => dict,
            Err(e) => {
                tracing::warn!("{}. Using empty dictionary.", e);
                Self::empty()
            }
        }
    }

    /// Build a dictionary from word-list text, one word per line
    pub fn parse(content: &str) -> Self {
        Self::from_words(content.lines())
    }

    pub fn from_words<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let words = words
            .into_iter()
            .map(|line| line.trim().to_uppercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// Create an empty dictionary
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if a word exists in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
