use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// The letter printed on an unbound blank tile.
pub const WILDCARD: char = '#';

/// A lettered tile. The letter and value are fixed at construction, except
/// that a wildcard's letter is rebound every time it is claimed for a
/// placement or exchange, and reset when it returns to the bag.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tile {
    letter: char,
    value: u32,
    wildcard: bool,
    placed_this_turn: bool,
}

impl Tile {
    pub fn new(letter: char, value: u32) -> Self {
        Self {
            letter: letter.to_ascii_uppercase(),
            value,
            wildcard: letter == WILDCARD,
            placed_this_turn: false,
        }
    }

    /// An unbound blank tile. Wildcards always score zero.
    pub fn wildcard() -> Self {
        Self::new(WILDCARD, 0)
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    /// Case-insensitive letter comparison, replacing any tile-to-char
    /// equality tricks at call sites.
    pub fn matches_letter(&self, letter: char) -> bool {
        self.letter.eq_ignore_ascii_case(&letter)
    }

    /// Binds a wildcard to the given letter. A fresh binding happens on every
    /// placement, so rebinding an already-bound wildcard is allowed.
    pub fn bind_letter(&mut self, letter: char) {
        debug_assert!(self.wildcard, "only wildcards can be rebound");
        self.letter = letter.to_ascii_uppercase();
    }

    /// Returns a wildcard to its unbound state.
    pub fn unbind(&mut self) {
        if self.wildcard {
            self.letter = WILDCARD;
        }
    }

    pub fn placed_this_turn(&self) -> bool {
        self.placed_this_turn
    }

    pub fn mark_placed(&mut self) {
        self.placed_this_turn = true;
    }

    pub fn clear_placed(&mut self) {
        self.placed_this_turn = false;
    }
}

// The transient placement flag is excluded from equality and ordering.
impl PartialEq for Tile {
    fn eq(&self, rhs: &Self) -> bool {
        self.letter == rhs.letter && self.value == rhs.value && self.wildcard == rhs.wildcard
    }
}

impl Eq for Tile {}

impl PartialOrd for Tile {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Ord for Tile {
    fn cmp(&self, rhs: &Self) -> Ordering {
        (self.letter, self.value).cmp(&(rhs.letter, rhs.value))
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.value)
    }
}
