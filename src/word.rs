use crate::board::{Board, Coordinate, Direction};
use crate::error::GamePlayError;
use crate::judge::Judge;

/// A derived, read-only view of the full contiguous run of tiles passing
/// through a board position along one axis. Never stored; recomputed from the
/// board on demand.
#[derive(Clone, Debug, PartialEq)]
pub struct Word {
    pub start: Coordinate,
    pub direction: Direction,
    pub text: String,
}

impl Word {
    /// Walks backward from `position` to the run's true start, then forward
    /// through contiguous occupied squares, collecting the upper-cased word.
    pub fn through(
        board: &Board,
        position: Coordinate,
        direction: Direction,
    ) -> Result<Self, GamePlayError> {
        if !board.get(position)?.is_occupied() {
            return Err(GamePlayError::EmptySquare);
        }

        let mut start = position;
        while let Some(previous) = start.step_back(direction) {
            if !board.is_occupied(previous) {
                break;
            }
            start = previous;
        }

        let mut text = String::new();
        let mut current = start;
        while board.is_occupied(current) {
            // Occupancy was just checked, so the square and tile both exist
            if let Some(tile) = board.get(current)?.tile() {
                text.push(tile.letter().to_ascii_uppercase());
            }
            current = current.step(direction);
        }

        Ok(Self {
            start,
            direction,
            text,
        })
    }

    pub fn validate(&self, judge: &Judge) -> Result<(), GamePlayError> {
        if judge.valid(&self.text) {
            Ok(())
        } else {
            Err(GamePlayError::InvalidWord {
                word: self.text.clone(),
            })
        }
    }

    /// Sum of per-square letter scores times the product of word multipliers,
    /// walked across the whole run.
    pub fn score(&self, board: &Board) -> Result<u32, GamePlayError> {
        let mut letter_scores = 0;
        let mut word_multiplier = 1;
        let mut current = self.start;
        for _ in self.text.chars() {
            let (letter_score, multiplier) = board.get(current)?.score_contribution()?;
            letter_scores += letter_score;
            word_multiplier *= multiplier;
            current = current.step(self.direction);
        }
        Ok(letter_scores * word_multiplier)
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
