use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

use crate::board::{Board, Coordinate, Direction};
use crate::error::GamePlayError;
use crate::judge::Judge;
use crate::player::Player;
use crate::rack::Rack;
use crate::rules::GameRules;
use crate::square::SquareType;
use crate::tile::Tile;
use crate::word::Word;

/// A proposed word placement. Transient: exists only for the duration of
/// validate + commit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub player: usize,
    pub origin: Coordinate,
    pub word: String,
    pub direction: Direction,
}

/// The proven-safe effects of a validated move: the tiles to transfer from
/// rack to board and the score to credit. Committing a plan replays exactly
/// what validation already simulated, so a rejection can never leave partial
/// state behind.
#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    placements: Vec<(Coordinate, Tile)>,
    score: u32,
    primary_word: String,
    cross_words: Vec<String>,
    bingo: bool,
}

impl Plan {
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tiles_placed(&self) -> usize {
        self.placements.len()
    }
}

/// What a committed move did, for the turn loop and any presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveReport {
    pub word: String,
    pub cross_words: Vec<String>,
    pub tiles_placed: usize,
    pub bingo: bool,
    pub score: u32,
}

impl fmt::Display for MoveReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} for {} points", self.word, self.score)?;
        if !self.cross_words.is_empty() {
            write!(f, " (also formed {})", self.cross_words.join(", "))?;
        }
        if self.bingo {
            write!(f, " including the full-rack bonus")?;
        }
        Ok(())
    }
}

impl Move {
    pub fn new(player: usize, origin: Coordinate, word: &str, direction: Direction) -> Self {
        Self {
            player,
            origin,
            word: word.trim().to_ascii_uppercase(),
            direction,
        }
    }

    /// Validates the move against live state without mutating any of it.
    ///
    /// The simulation runs on clones of the board and the acting player's
    /// rack: tiles are claimed, flagged and placed there so that premium
    /// squares, crossing words and connectivity can all be checked, and the
    /// clones are discarded. On success the accumulated effects come back as
    /// a [`Plan`] for [`Move::commit`] to replay.
    pub fn validate(
        &self,
        board: &Board,
        rack: &Rack,
        judge: &Judge,
        rules: &GameRules,
    ) -> Result<Plan, GamePlayError> {
        if self.word.is_empty() || !self.word.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(GamePlayError::InvalidWord {
                word: self.word.clone(),
            });
        }
        if !judge.valid(&self.word) {
            return Err(GamePlayError::InvalidWord {
                word: self.word.clone(),
            });
        }
        board.validate_placement(self.origin, self.word.chars().count(), self.direction)?;

        let mut sim_board = board.clone();
        let mut sim_rack = rack.clone();
        let mut placements: Vec<(Coordinate, Tile)> = Vec::new();
        let mut cross_words = Vec::new();
        let mut cross_score = 0;
        let mut connected = false;

        let mut position = self.origin;
        for letter in self.word.chars() {
            let square = sim_board.get(position)?;
            match square.tile() {
                Some(tile) => {
                    // Building through an existing tile: letters must agree
                    if !tile.matches_letter(letter) {
                        return Err(GamePlayError::InvalidPlacement {
                            position,
                            expected: letter,
                            found: tile.letter(),
                        });
                    }
                    connected = true;
                }
                None => {
                    let mut tile = sim_rack.take_tile(letter)?;
                    tile.mark_placed();
                    if square.square_type == SquareType::Start {
                        connected = true;
                    }
                    sim_board.get_mut(position)?.place_tile(tile.clone())?;
                    placements.push((position, tile));

                    if let Some(cross) =
                        self.check_cross_word(&sim_board, position, judge, &mut cross_score)?
                    {
                        cross_words.push(cross);
                        connected = true;
                    }
                }
            }
            position = position.step(self.direction);
        }

        // The full primary run may extend beyond the requested letters
        // through tiles already on the board. An extended run reuses those
        // tiles, which connects the move; it must also itself be a word.
        let primary = Word::through(&sim_board, self.origin, self.direction)?;
        if primary.len() > self.word.chars().count() {
            connected = true;
        }

        if !connected {
            return Err(GamePlayError::TilesNotConnected);
        }
        primary.validate(judge)?;
        let mut score = primary.score(&sim_board)? + cross_score;

        let bingo = placements.len() == rules.rack_capacity;
        if bingo {
            score += rules.bingo_bonus;
        }

        for (_, tile) in &mut placements {
            tile.clear_placed();
        }

        debug!(
            word = %primary.text,
            score,
            tiles = placements.len(),
            "move validated"
        );
        Ok(Plan {
            placements,
            score,
            primary_word: primary.text,
            cross_words,
            bingo,
        })
    }

    /// A tile just placed at `position` may form a word across the placement
    /// axis. If either perpendicular neighbour is occupied, that word exists:
    /// it must be in the dictionary, it scores, and it connects the move.
    fn check_cross_word(
        &self,
        sim_board: &Board,
        position: Coordinate,
        judge: &Judge,
        cross_score: &mut u32,
    ) -> Result<Option<String>, GamePlayError> {
        let perpendicular = self.direction.opposite();
        let behind = position
            .step_back(perpendicular)
            .map(|p| sim_board.is_occupied(p))
            .unwrap_or(false);
        let ahead = sim_board.is_occupied(position.step(perpendicular));
        if !behind && !ahead {
            return Ok(None);
        }

        let cross = Word::through(sim_board, position, perpendicular)?;
        trace!(word = %cross.text, %position, "crossing word formed");
        if cross.validate(judge).is_err() {
            return Err(GamePlayError::InvalidCrossWord {
                position,
                word: cross.text,
            });
        }
        *cross_score += cross.score(sim_board)?;
        Ok(Some(cross.text))
    }

    /// Replays a validated plan onto the live board and player. Only entered
    /// after `validate` has fully succeeded.
    pub fn commit(
        &self,
        plan: Plan,
        board: &mut Board,
        player: &mut Player,
    ) -> Result<MoveReport, GamePlayError> {
        for (position, tile) in &plan.placements {
            // The live rack matches the simulated one, so the same
            // exact-or-wildcard lookup claims the same tile
            let drawn = player.rack.take_tile(tile.letter())?;
            board.get_mut(*position)?.place_tile(drawn)?;
        }
        player.add_points(plan.score);

        debug!(player = %player.name, score = plan.score, "move committed");
        Ok(MoveReport {
            word: plan.primary_word,
            cross_words: plan.cross_words,
            tiles_placed: plan.placements.len(),
            bingo: plan.bingo,
            score: plan.score,
        })
    }

    /// Validate and, if everything holds, commit in one call. Any rejection
    /// leaves board, rack and score untouched.
    pub fn execute(
        &self,
        board: &mut Board,
        player: &mut Player,
        judge: &Judge,
        rules: &GameRules,
    ) -> Result<MoveReport, GamePlayError> {
        let plan = self.validate(board, &player.rack, judge, rules)?;
        self.commit(plan, board, player)
    }
}
