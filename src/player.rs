use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::bag::TileBag;
use crate::error::GamePlayError;
use crate::rack::Rack;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub rack: Rack,
    score: u32,
}

impl Player {
    pub fn new(name: String, rack_capacity: usize, bag: &mut TileBag) -> Self {
        Self {
            name,
            rack: Rack::new(rack_capacity, bag),
            score: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn add_points(&mut self, points: u32) {
        self.score += points;
    }

    /// Scores never go negative; a subtraction that would is an invariant
    /// violation, not a user error.
    pub fn subtract_points(&mut self, points: u32) -> Result<(), GamePlayError> {
        if points > self.score {
            return Err(GamePlayError::ScoreUnderflow {
                score: self.score,
                points,
            });
        }
        self.score -= points;
        Ok(())
    }

    /// End-of-game deduction of the tiles left on the rack, clamped so the
    /// score stays non-negative. Returns the amount actually deducted.
    pub fn apply_rack_penalty(&mut self) -> u32 {
        let penalty: u32 = self.rack.tiles().iter().map(|tile| tile.value()).sum();
        let deducted = penalty.min(self.score);
        self.score -= deducted;
        deducted
    }

    /// Players are seeded into turn order by comparing their opening racks.
    pub fn turn_order(&self, rhs: &Self) -> Ordering {
        self.rack.cmp(&rhs.rack)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({}) - Rack: {}", self.name, self.score, self.rack)
    }
}
