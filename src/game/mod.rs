// Game engine modules

pub mod grid;
pub mod scorer;
pub mod session;
pub mod shake;
pub mod validator;

pub use grid::GridGenerator;
pub use scorer::Scorer;
pub use session::{BoggleCore, GameListener};
pub use shake::{AccelSample, ShakeDetector};
pub use validator::{SelectionPath, WordValidator};
