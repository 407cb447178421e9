use oorandom::Rand32;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::GamePlayError;
use crate::rules::GameRules;
use crate::tile::Tile;

/// The shared pool of undrawn tiles. Draws remove a uniformly random tile;
/// exchanged tiles are deposited back in.
#[derive(Clone, Debug)]
pub struct TileBag {
    tiles: Vec<Tile>,
    rng: Rand32,
}

impl TileBag {
    pub fn new(rules: &GameRules, seed: Option<u64>) -> Self {
        let tiles = rules
            .tile_distribution
            .iter()
            .flat_map(|(&letter, &count)| {
                let tile = Tile::new(letter, rules.letter_value(letter));
                std::iter::repeat(tile).take(count)
            })
            .collect();
        Self::explicit(tiles, seed)
    }

    pub fn explicit(tiles: Vec<Tile>, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("Time went backwards")
                .as_secs()
        });
        Self {
            tiles,
            rng: Rand32::new(seed),
        }
    }

    pub fn draw_tile(&mut self) -> Result<Tile, GamePlayError> {
        if self.tiles.is_empty() {
            return Err(GamePlayError::EmptyBag);
        }
        let index = self.rng.rand_range(0..self.tiles.len() as u32);
        Ok(self.tiles.swap_remove(index as usize))
    }

    /// Exchanged tiles come back unbound and unflagged.
    pub fn deposit_tile(&mut self, mut tile: Tile) {
        tile.unbind();
        tile.clear_placed();
        self.tiles.push(tile);
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl PartialEq for TileBag {
    fn eq(&self, rhs: &Self) -> bool {
        self.tiles == rhs.tiles
    }
}

impl fmt::Display for TileBag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Letters in the bag: {}",
            self.tiles
                .iter()
                .map(|t| t.letter().to_string())
                .collect::<Vec<_>>()
                .join(" ")
        )
    }
}
