use std::fmt;
use tracing::debug;

use crate::bag::TileBag;
use crate::board::{Board, Coordinate, Direction};
use crate::error::GamePlayError;
use crate::judge::Judge;
use crate::moves::{Move, MoveReport};
use crate::player::Player;
use crate::rules::{GameRules, RulesError};

/// The complete state of one game: board, bag, players and configuration.
/// Moves are processed strictly one at a time by an external turn loop.
#[derive(Clone, Debug)]
pub struct Game {
    pub rules: GameRules,
    pub board: Board,
    pub bag: TileBag,
    pub judge: Judge,
    pub players: Vec<Player>,
    pub next_player: usize,
    pub zero_score_streak: u32,
    pub is_over: bool,
}

impl Game {
    pub fn new(
        rules: GameRules,
        judge: Judge,
        player_names: Vec<String>,
        tile_seed: Option<u64>,
    ) -> Result<Self, RulesError> {
        rules.validate()?;
        if player_names.len() != rules.player_count {
            return Err(RulesError::PlayerNameMismatch {
                expected: rules.player_count,
                found: player_names.len(),
            });
        }

        let board = Board::from_layout(&rules.board_layout)?;
        let mut bag = TileBag::new(&rules, tile_seed);
        let mut players: Vec<Player> = player_names
            .into_iter()
            .map(|name| Player::new(name, rules.rack_capacity, &mut bag))
            .collect();
        // Opening racks seed the turn order
        players.sort_by(|a, b| a.turn_order(b));

        let mut game = Self {
            rules,
            board,
            bag,
            judge,
            players,
            next_player: 0,
            zero_score_streak: 0,
            is_over: false,
        };
        game.is_over = game.has_ended();
        Ok(game)
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.next_player]
    }

    pub fn player(&self, index: usize) -> Result<&Player, GamePlayError> {
        self.players
            .get(index)
            .ok_or(GamePlayError::NonExistentPlayer { index })
    }

    /// Validates and commits a word placement for the current player, then
    /// refills their rack and advances the turn. A rejected move changes
    /// nothing and the same player may try again.
    pub fn play_move(
        &mut self,
        origin: Coordinate,
        word: &str,
        direction: Direction,
    ) -> Result<MoveReport, GamePlayError> {
        if self.is_over {
            return Err(GamePlayError::GameOver);
        }

        let mover = self.next_player;
        let game_move = Move::new(mover, origin, word, direction);
        let report = game_move.execute(
            &mut self.board,
            &mut self.players[mover],
            &self.judge,
            &self.rules,
        )?;

        self.players[mover].rack.refill(&mut self.bag);
        if report.score == 0 {
            self.zero_score_streak += 1;
        } else {
            self.zero_score_streak = 0;
        }
        debug!(player = %self.players[mover].name, %report, "turn played");

        self.advance_turn();
        Ok(report)
    }

    /// Swaps the named letters back into the bag for the current player.
    /// Counts as a scoreless turn.
    pub fn exchange_tiles(&mut self, letters: &str) -> Result<(), GamePlayError> {
        if self.is_over {
            return Err(GamePlayError::GameOver);
        }

        let mover = self.next_player;
        self.players[mover]
            .rack
            .exchange_tiles(letters, &mut self.bag)?;
        self.zero_score_streak += 1;
        self.advance_turn();
        Ok(())
    }

    pub fn pass_turn(&mut self) -> Result<(), GamePlayError> {
        if self.is_over {
            return Err(GamePlayError::GameOver);
        }
        self.zero_score_streak += 1;
        self.advance_turn();
        Ok(())
    }

    /// Removes the current player from the rotation. The turn passes to the
    /// player who would have been next.
    pub fn resign(&mut self) -> Result<(), GamePlayError> {
        if self.is_over {
            return Err(GamePlayError::GameOver);
        }

        let resigned = self.players.remove(self.next_player);
        debug!(player = %resigned.name, "player resigned");
        if self.players.is_empty() {
            self.is_over = true;
            self.next_player = 0;
            return Ok(());
        }
        self.next_player %= self.players.len();
        self.is_over = self.has_ended();
        Ok(())
    }

    /// End-of-game conditions: an exhausted bag, too many consecutive
    /// scoreless turns, a lone remaining player, or an emptied rack.
    pub fn has_ended(&self) -> bool {
        if self.bag.is_empty() {
            return true;
        }
        if self.zero_score_streak >= self.rules.zero_score_turn_limit {
            return true;
        }
        if self.players.len() <= 1 {
            return true;
        }
        self.players.iter().any(|player| player.rack.is_empty())
    }

    /// Deducts every player's leftover tile values from their score,
    /// clamping at zero.
    pub fn apply_final_penalties(&mut self) {
        for player in &mut self.players {
            let deducted = player.apply_rack_penalty();
            debug!(player = %player.name, deducted, "final rack penalty");
        }
    }

    /// Tiles never leave the system: bag + racks + board always add up to
    /// the configured distribution total.
    pub fn tiles_in_play(&self) -> usize {
        self.bag.len()
            + self.board.tile_count()
            + self
                .players
                .iter()
                .map(|player| player.rack.len())
                .sum::<usize>()
    }

    fn advance_turn(&mut self) {
        self.next_player = (self.next_player + 1) % self.players.len();
        self.is_over = self.has_ended();
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let current = self.current_player();
        writeln!(f, "{}'s turn", current.name)?;
        writeln!(f, "Current score: {}", current.score())?;
        writeln!(f, "Current rack: {}", current.rack)?;
        write!(f, "{}", self.board)?;
        write!(f, "Tiles remaining: {}", self.bag.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bag::tests::explicit_bag;
    use crate::judge::tests::short_dict;
    use crate::rack::tests::rack_of;
    use crate::rack::Rack;
    use crate::rules::tests::tiny_rules;
    use crate::tile::Tile;

    /// A two-player game with hand-built racks, bypassing the random deal.
    fn fixed_game(racks: [&str; 2], bag_letters: &str) -> Game {
        let rules = GameRules {
            player_count: 2,
            ..tiny_rules("CATDOGCATDOG", 3)
        };
        let board = Board::from_layout(&rules.board_layout).unwrap();
        let mut players = vec![
            Player::new("Mac".into(), 3, &mut explicit_bag("", 1)),
            Player::new("Gyver".into(), 3, &mut explicit_bag("", 1)),
        ];
        for (player, letters) in players.iter_mut().zip(racks) {
            player.rack = Rack::from_tiles(
                letters
                    .chars()
                    .map(|c| Tile::new(c, GameRules::default().letter_value(c)))
                    .collect(),
                3,
            );
        }
        Game {
            board,
            bag: explicit_bag(bag_letters, 7),
            judge: short_dict(),
            players,
            next_player: 0,
            zero_score_streak: 0,
            is_over: false,
            rules,
        }
    }

    #[test]
    fn new_game_deals_and_orders_players() {
        let rules = GameRules {
            player_count: 2,
            ..tiny_rules("AABBCCDDEE", 3)
        };
        let game = Game::new(
            rules,
            short_dict(),
            vec!["Mac".into(), "Gyver".into()],
            Some(7),
        )
        .unwrap();

        assert_eq!(game.players.len(), 2);
        assert!(game.players.iter().all(|p| p.rack.len() == 3));
        assert_ne!(
            game.players[0].turn_order(&game.players[1]),
            std::cmp::Ordering::Greater
        );
        assert_eq!(game.tiles_in_play(), 10);
        assert!(!game.is_over);
    }

    #[test]
    fn player_lookups_are_bounds_checked() {
        let game = fixed_game(["CAT", "DOG"], "XYZW");
        assert_eq!(game.player(1).unwrap().name, "Gyver");
        assert_eq!(
            game.player(5).unwrap_err(),
            GamePlayError::NonExistentPlayer { index: 5 }
        );
    }

    #[test]
    fn player_name_count_must_match_rules() {
        let rules = GameRules {
            player_count: 2,
            ..tiny_rules("AABBCCDDEE", 3)
        };
        assert_eq!(
            Game::new(rules, short_dict(), vec!["Mac".into()], Some(7)).unwrap_err(),
            RulesError::PlayerNameMismatch {
                expected: 2,
                found: 1,
            }
        );
    }

    #[test]
    fn a_played_move_scores_refills_and_advances() {
        let mut game = fixed_game(["CAT", "DOG"], "XYZW");
        let total_before = game.tiles_in_play();

        let report = game
            .play_move(Coordinate::new(2, 2), "CAT", Direction::Horizontal)
            .unwrap();
        assert_eq!(report.score, 60); // 10 for CAT doubled + 50 bingo

        assert_eq!(game.players[0].score(), 60);
        assert_eq!(game.players[0].rack.len(), 3);
        assert_eq!(game.next_player, 1);
        assert_eq!(game.zero_score_streak, 0);
        assert_eq!(game.tiles_in_play(), total_before);
        assert_eq!(game.board.tile_count(), 3);
    }

    #[test]
    fn rejected_moves_do_not_advance_the_turn() {
        let mut game = fixed_game(["CAT", "DOG"], "XYZW");
        let total_before = game.tiles_in_play();

        assert_eq!(
            game.play_move(Coordinate::new(0, 0), "CAT", Direction::Horizontal),
            Err(GamePlayError::TilesNotConnected)
        );
        assert_eq!(game.next_player, 0);
        assert_eq!(game.players[0].score(), 0);
        assert_eq!(game.tiles_in_play(), total_before);
        assert_eq!(game.board.tile_count(), 0);
    }

    #[test]
    fn exchanges_count_as_scoreless_turns() {
        let mut game = fixed_game(["CAT", "DOG"], "XYZW");
        let total_before = game.tiles_in_play();

        game.exchange_tiles("CA").unwrap();
        assert_eq!(game.next_player, 1);
        assert_eq!(game.zero_score_streak, 1);
        assert_eq!(game.tiles_in_play(), total_before);

        // No Q anywhere: rejected without touching rack or bag
        let rack_before = game.players[1].rack.clone();
        let bag_before = game.bag.len();
        assert_eq!(
            game.exchange_tiles("Q"),
            Err(GamePlayError::TileNotFound { letter: 'Q' })
        );
        assert_eq!(game.players[1].rack, rack_before);
        assert_eq!(game.bag.len(), bag_before);
        assert_eq!(game.next_player, 1);
    }

    #[test]
    fn scoreless_streak_ends_the_game() {
        let mut game = fixed_game(["CAT", "DOG"], "XYZW");
        game.rules.zero_score_turn_limit = 3;

        game.pass_turn().unwrap();
        game.pass_turn().unwrap();
        assert!(!game.is_over);
        game.pass_turn().unwrap();
        assert!(game.is_over);

        assert_eq!(game.pass_turn(), Err(GamePlayError::GameOver));
        assert_eq!(
            game.play_move(Coordinate::new(2, 2), "CAT", Direction::Horizontal),
            Err(GamePlayError::GameOver)
        );
    }

    #[test]
    fn resignation_hands_the_turn_to_the_next_in_rotation() {
        let mut game = fixed_game(["CAT", "DOG"], "XYZW");
        game.players.push({
            let mut third = Player::new("Sam".into(), 3, &mut explicit_bag("", 1));
            third.rack = rack_of("DOG", 3);
            third
        });
        game.next_player = 1;

        game.resign().unwrap();
        assert_eq!(game.players.len(), 2);
        assert_eq!(game.current_player().name, "Sam");
        // Two players remain, so play continues
        assert!(!game.is_over);

        game.resign().unwrap();
        assert!(game.is_over);
    }

    #[test]
    fn final_penalties_clamp_at_zero() {
        let mut game = fixed_game(["CAT", "DOG"], "XYZW");
        game.players[0].add_points(3);

        game.apply_final_penalties();
        // CAT carries 5 points of tiles but only 3 can come off
        assert_eq!(game.players[0].score(), 0);
        assert_eq!(game.players[1].score(), 0);
    }

    #[test]
    fn rendering_is_stable() {
        let game = fixed_game(["CAT", "DOG"], "XYZW");
        let first = game.to_string();
        assert_eq!(first, game.to_string());
        assert!(first.contains("Mac's turn"));
        assert!(first.contains("Tiles remaining: 4"));
    }
}
