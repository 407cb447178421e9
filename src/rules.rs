use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::board::Board;
use crate::tile::WILDCARD;

#[derive(Clone, Error, Debug, PartialEq)]
pub enum RulesError {
    #[error("Board layout rows must be non-empty and all the same length")]
    RaggedLayout,
    #[error("Unknown square code {code:?} at row {row}, column {col}")]
    UnknownSquareCode {
        code: String,
        row: usize,
        col: usize,
    },
    #[error("Board layout has no start square")]
    MissingStartSquare,
    #[error("Letter '{letter}' is distributed but has no score value")]
    MissingLetterScore { letter: char },
    #[error("Rack capacity must be at least 1")]
    ZeroRackCapacity,
    #[error("At least one player is required")]
    NoPlayers,
    #[error("Expected {expected} player names, got {found}")]
    PlayerNameMismatch { expected: usize, found: usize },
    #[error("The tile distribution holds {tiles} tiles but {required} are needed to deal every rack")]
    DistributionTooSmall { tiles: usize, required: usize },
}

/// Immutable game configuration, constructed once at game start and passed by
/// reference to the components that need it. Defaults match the standard
/// game: 15x15 board, 100 tiles, 7-tile racks, 50-point bingo.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    pub player_count: usize,
    pub rack_capacity: usize,
    pub bingo_bonus: u32,
    pub zero_score_turn_limit: u32,
    pub board_layout: Vec<Vec<String>>,
    pub tile_distribution: BTreeMap<char, usize>,
    pub letter_scores: BTreeMap<char, u32>,
}

impl GameRules {
    /// Surfaces configuration problems at load time, before any of the
    /// settings reach the game.
    pub fn validate(&self) -> Result<(), RulesError> {
        Board::from_layout(&self.board_layout)?;

        if self.rack_capacity == 0 {
            return Err(RulesError::ZeroRackCapacity);
        }
        if self.player_count == 0 {
            return Err(RulesError::NoPlayers);
        }
        for &letter in self.tile_distribution.keys() {
            if letter != WILDCARD && !self.letter_scores.contains_key(&letter) {
                return Err(RulesError::MissingLetterScore { letter });
            }
        }

        let tiles = self.total_tiles();
        let required = self.rack_capacity * self.player_count;
        if tiles < required {
            return Err(RulesError::DistributionTooSmall { tiles, required });
        }
        Ok(())
    }

    /// Wildcards always score zero, whatever letter they are bound to.
    pub fn letter_value(&self, letter: char) -> u32 {
        if letter == WILDCARD {
            return 0;
        }
        self.letter_scores
            .get(&letter.to_ascii_uppercase())
            .copied()
            .unwrap_or(0)
    }

    pub fn total_tiles(&self) -> usize {
        self.tile_distribution.values().sum()
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            player_count: 2,
            rack_capacity: 7,
            bingo_bonus: 50,
            zero_score_turn_limit: 6,
            board_layout: standard_layout(),
            tile_distribution: standard_distribution(),
            letter_scores: standard_letter_scores(),
        }
    }
}

#[rustfmt::skip]
fn standard_layout() -> Vec<Vec<String>> {
    let rows: [[&str; 15]; 15] = [
        ["TW", "  ", "  ", "DL", "  ", "  ", "  ", "TW", "  ", "  ", "  ", "DL", "  ", "  ", "TW"],
        ["  ", "DW", "  ", "  ", "  ", "TL", "  ", "  ", "  ", "TL", "  ", "  ", "  ", "DW", "  "],
        ["  ", "  ", "DW", "  ", "  ", "  ", "DL", "  ", "DL", "  ", "  ", "  ", "DW", "  ", "  "],
        ["DL", "  ", "  ", "DW", "  ", "  ", "  ", "DL", "  ", "  ", "  ", "DW", "  ", "  ", "DL"],
        ["  ", "  ", "  ", "  ", "DW", "  ", "  ", "  ", "  ", "  ", "DW", "  ", "  ", "  ", "  "],
        ["  ", "TL", "  ", "  ", "  ", "TL", "  ", "  ", "  ", "TL", "  ", "  ", "  ", "TL", "  "],
        ["  ", "  ", "DL", "  ", "  ", "  ", "DL", "  ", "DL", "  ", "  ", "  ", "DL", "  ", "  "],
        ["TW", "  ", "  ", "DL", "  ", "  ", "  ", "ST", "  ", "  ", "  ", "DL", "  ", "  ", "TW"],
        ["  ", "  ", "DL", "  ", "  ", "  ", "DL", "  ", "DL", "  ", "  ", "  ", "DL", "  ", "  "],
        ["  ", "TL", "  ", "  ", "  ", "TL", "  ", "  ", "  ", "TL", "  ", "  ", "  ", "TL", "  "],
        ["  ", "  ", "  ", "  ", "DW", "  ", "  ", "  ", "  ", "  ", "DW", "  ", "  ", "  ", "  "],
        ["DL", "  ", "  ", "DW", "  ", "  ", "  ", "DL", "  ", "  ", "  ", "DW", "  ", "  ", "DL"],
        ["  ", "  ", "DW", "  ", "  ", "  ", "DL", "  ", "DL", "  ", "  ", "  ", "DW", "  ", "  "],
        ["  ", "DW", "  ", "  ", "  ", "TL", "  ", "  ", "  ", "TL", "  ", "  ", "  ", "DW", "  "],
        ["TW", "  ", "  ", "DL", "  ", "  ", "  ", "TW", "  ", "  ", "  ", "DL", "  ", "  ", "TW"],
    ];
    rows.iter()
        .map(|row| row.iter().map(|code| code.to_string()).collect())
        .collect()
}

fn standard_distribution() -> BTreeMap<char, usize> {
    [
        ('A', 9), ('B', 2), ('C', 2), ('D', 4), ('E', 12), ('F', 2), ('G', 3),
        ('H', 2), ('I', 9), ('J', 1), ('K', 1), ('L', 4), ('M', 2), ('N', 6),
        ('O', 8), ('P', 2), ('Q', 1), ('R', 6), ('S', 4), ('T', 6), ('U', 4),
        ('V', 2), ('W', 2), ('X', 1), ('Y', 2), ('Z', 1), (WILDCARD, 2),
    ]
    .into_iter()
    .collect()
}

fn standard_letter_scores() -> BTreeMap<char, u32> {
    [
        ('A', 1), ('B', 3), ('C', 3), ('D', 2), ('E', 1), ('F', 4), ('G', 2),
        ('H', 4), ('I', 1), ('J', 8), ('K', 5), ('L', 1), ('M', 3), ('N', 1),
        ('O', 1), ('P', 3), ('Q', 10), ('R', 1), ('S', 1), ('T', 1), ('U', 1),
        ('V', 4), ('W', 4), ('X', 8), ('Y', 4), ('Z', 10), (WILDCARD, 0),
    ]
    .into_iter()
    .collect()
}
