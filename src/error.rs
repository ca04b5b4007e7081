use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// Configuration demands a score listener but none was registered
    #[error("a game listener must be registered before the game starts")]
    ListenerRequired,

    #[error("failed to read dictionary at {path}: {source}")]
    Dictionary {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
