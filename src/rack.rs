use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::bag::TileBag;
use crate::error::GamePlayError;
use crate::tile::Tile;

/// A player's bounded hand of tiles, kept sorted so that rack comparisons
/// (used to seed the turn order) are deterministic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rack {
    tiles: Vec<Tile>,
    capacity: usize,
}

impl Rack {
    pub fn new(capacity: usize, bag: &mut TileBag) -> Self {
        let mut rack = Self {
            tiles: Vec::with_capacity(capacity),
            capacity,
        };
        rack.refill(bag);
        rack
    }

    pub fn from_tiles(mut tiles: Vec<Tile>, capacity: usize) -> Self {
        debug_assert!(tiles.len() <= capacity);
        tiles.sort();
        Self { tiles, capacity }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Draws from the bag until the rack is full or the bag runs dry, then
    /// re-sorts. A partial refill is not an error; the game loop treats an
    /// exhausted bag as an end-of-game signal.
    pub fn refill(&mut self, bag: &mut TileBag) {
        while self.tiles.len() < self.capacity {
            match bag.draw_tile() {
                Ok(tile) => self.tiles.push(tile),
                Err(_) => break,
            }
        }
        self.tiles.sort();
    }

    /// Removes a tile for the requested letter: an exact match if one exists,
    /// otherwise a wildcard freshly bound to that letter.
    pub fn take_tile(&mut self, letter: char) -> Result<Tile, GamePlayError> {
        take_from(&mut self.tiles, letter)
    }

    /// Swaps the named letters for fresh draws. All-or-nothing: the whole
    /// request is checked before the rack or bag is touched.
    pub fn exchange_tiles(&mut self, letters: &str, bag: &mut TileBag) -> Result<(), GamePlayError> {
        let requested = letters.chars().count();
        if requested > self.capacity {
            return Err(GamePlayError::RackSizeExceeded {
                requested,
                capacity: self.capacity,
            });
        }

        let mut scratch = self.tiles.clone();
        for letter in letters.chars() {
            take_from(&mut scratch, letter)?;
        }

        for letter in letters.chars() {
            let tile = take_from(&mut self.tiles, letter)?;
            bag.deposit_tile(tile);
        }
        self.refill(bag);
        Ok(())
    }
}

fn take_from(tiles: &mut Vec<Tile>, letter: char) -> Result<Tile, GamePlayError> {
    if let Some(index) = tiles.iter().position(|tile| tile.matches_letter(letter)) {
        return Ok(tiles.remove(index));
    }
    if let Some(index) = tiles.iter().position(|tile| tile.is_wildcard()) {
        let mut tile = tiles.remove(index);
        tile.bind_letter(letter);
        return Ok(tile);
    }
    Err(GamePlayError::TileNotFound {
        letter: letter.to_ascii_uppercase(),
    })
}

impl PartialOrd for Rack {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Ord for Rack {
    fn cmp(&self, rhs: &Self) -> Ordering {
        // Lexicographic over the sorted tiles; a strict prefix sorts first
        self.tiles
            .cmp(&rhs.tiles)
            .then(self.capacity.cmp(&rhs.capacity))
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            self.tiles
                .iter()
                .map(|tile| tile.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        )
    }
}
