use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumString};

use crate::error::GamePlayError;
use crate::tile::Tile;

/// Score modifier carried by a board cell, fixed for the life of the board.
/// The strum codes double as the board-layout template format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum SquareType {
    #[strum(serialize = "DL")]
    DoubleLetter,
    #[strum(serialize = "TL")]
    TripleLetter,
    #[strum(serialize = "DW")]
    DoubleWord,
    #[strum(serialize = "TW")]
    TripleWord,
    #[strum(serialize = "ST")]
    Start,
    #[strum(serialize = "  ")]
    NoModifier,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Square {
    pub square_type: SquareType,
    tile: Option<Tile>,
}

impl Square {
    pub fn new(square_type: SquareType) -> Self {
        Self {
            square_type,
            tile: None,
        }
    }

    pub fn tile(&self) -> Option<&Tile> {
        self.tile.as_ref()
    }

    pub fn is_occupied(&self) -> bool {
        self.tile.is_some()
    }

    /// Squares are write-once: placing onto an occupied square is an error.
    pub fn place_tile(&mut self, tile: Tile) -> Result<(), GamePlayError> {
        if self.tile.is_some() {
            return Err(GamePlayError::SquareOccupied);
        }
        self.tile = Some(tile);
        Ok(())
    }

    pub fn remove_tile(&mut self) -> Result<Tile, GamePlayError> {
        self.tile.take().ok_or(GamePlayError::EmptySquare)
    }

    /// Returns `(letter_score, word_multiplier)` for the occupying tile.
    /// Modifiers only fire on the turn the tile was placed; afterwards the
    /// square contributes the bare tile value.
    pub fn score_contribution(&self) -> Result<(u32, u32), GamePlayError> {
        let tile = self.tile.as_ref().ok_or(GamePlayError::EmptySquare)?;

        if !tile.placed_this_turn() {
            return Ok((tile.value(), 1));
        }

        let contribution = match self.square_type {
            SquareType::DoubleLetter => (tile.value() * 2, 1),
            SquareType::TripleLetter => (tile.value() * 3, 1),
            SquareType::DoubleWord | SquareType::Start => (tile.value(), 2),
            SquareType::TripleWord => (tile.value(), 3),
            SquareType::NoModifier => (tile.value(), 1),
        };
        Ok(contribution)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.tile {
            Some(tile) => write!(f, "{tile}"),
            None => write!(f, "{}", self.square_type),
        }
    }
}
