use super::board::Coordinate;
use thiserror::Error;

#[derive(Clone, Error, Debug, PartialEq)]
pub enum GamePlayError {
    #[error("Coordinate is not within board dimensions ({:?}, {:?})", position.row, position.col)]
    OutOfBounds { position: Coordinate },
    #[error("Cannot place a tile on an occupied square")]
    SquareOccupied,
    #[error("No tile on the square")]
    EmptySquare,
    #[error("Existing tile '{found}' at ({:?}, {:?}) does not match requested letter '{expected}'", position.row, position.col)]
    InvalidPlacement {
        position: Coordinate,
        expected: char,
        found: char,
    },

    #[error("Rack has no '{letter}' tile")]
    TileNotFound { letter: char },
    #[error("Cannot exchange {requested} tiles when the rack holds at most {capacity}")]
    RackSizeExceeded { requested: usize, capacity: usize },

    #[error("'{word}' is not a valid word")]
    InvalidWord { word: String },
    #[error("Placement forms the invalid crossing word '{word}' at ({:?}, {:?})", position.row, position.col)]
    InvalidCrossWord { position: Coordinate, word: String },

    #[error("Placed tiles must touch the start square or an existing tile")]
    TilesNotConnected,

    #[error("The bag is empty")]
    EmptyBag,

    #[error("Subtracting {points} points would make a score of {score} negative")]
    ScoreUnderflow { score: u32, points: u32 },
    #[error("Player {index:?} does not exist")]
    NonExistentPlayer { index: usize },
    #[error("The game is already over")]
    GameOver,
}
