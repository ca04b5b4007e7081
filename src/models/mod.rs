pub mod game;

pub use game::{
    // Board
    Grid, Position, CELL_COUNT, GRID_SIZE,
    // Event results
    GameSnapshot, Notice, SelectionOutcome, SubmitOutcome,
};
