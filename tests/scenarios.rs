//! Whole-game scenarios exercised through the public API only.

use wordgrid::bag::TileBag;
use wordgrid::board::{Board, Coordinate, Direction};
use wordgrid::error::GamePlayError;
use wordgrid::game::Game;
use wordgrid::judge::Judge;
use wordgrid::player::Player;
use wordgrid::rack::Rack;
use wordgrid::rules::GameRules;
use wordgrid::tile::Tile;

fn dict() -> Judge {
    Judge::new(vec![
        "CAT".into(),
        "CATS".into(),
        "DOG".into(),
        "AT".into(),
        "TO".into(),
        "DO".into(),
    ])
}

fn tile(letter: char, rules: &GameRules) -> Tile {
    if letter == wordgrid::tile::WILDCARD {
        Tile::wildcard()
    } else {
        Tile::new(letter, rules.letter_value(letter))
    }
}

/// A standard-board game with hand-built racks and a known bag, sidestepping
/// the random deal.
fn fixed_game(racks: &[&str], capacity: usize, bag_letters: &str) -> Game {
    let rules = GameRules {
        player_count: racks.len(),
        rack_capacity: capacity,
        ..GameRules::default()
    };
    let board = Board::from_layout(&rules.board_layout).unwrap();
    let bag = TileBag::explicit(
        bag_letters.chars().map(|c| tile(c, &rules)).collect(),
        Some(11),
    );
    let players = racks
        .iter()
        .enumerate()
        .map(|(i, letters)| {
            let mut player = Player::new(
                format!("Player {}", i + 1),
                capacity,
                &mut TileBag::explicit(Vec::new(), Some(1)),
            );
            player.rack = Rack::from_tiles(
                letters.chars().map(|c| tile(c, &rules)).collect(),
                capacity,
            );
            player
        })
        .collect();
    Game {
        rules,
        board,
        bag,
        judge: dict(),
        players,
        next_player: 0,
        zero_score_streak: 0,
        is_over: false,
    }
}

#[test]
fn opening_play_scores_and_builds_on_the_board() {
    let mut game = fixed_game(&["CATWXYZ", "DOGWXYZ"], 7, "EEEEEEEE");

    let report = game
        .play_move(Coordinate::new(7, 7), "CAT", Direction::Horizontal)
        .unwrap();
    // (3 + 1 + 1) doubled by the start square
    assert_eq!(report.score, 10);
    assert_eq!(report.word, "CAT");
    assert!(report.cross_words.is_empty());
    assert!(!report.bingo);

    assert_eq!(game.players[0].score(), 10);
    assert_eq!(game.players[0].rack.len(), 7);
    assert_eq!(game.board.tile_count(), 3);
    assert_eq!(game.current_player().name, "Player 2");

    // The next word hooks onto the existing T
    let report = game
        .play_move(Coordinate::new(7, 9), "TO", Direction::Vertical)
        .unwrap();
    assert_eq!(report.score, 2);
    assert_eq!(report.tiles_placed, 1);
    assert_eq!(game.board.tile_count(), 4);
}

#[test]
fn rejected_moves_leave_no_trace() {
    let mut game = fixed_game(&["CATWXYZ", "DOGWXYZ"], 7, "EEEEEEEE");
    game.play_move(Coordinate::new(7, 7), "CAT", Direction::Horizontal)
        .unwrap();
    let before = game.clone();

    // Disconnected from everything
    assert_eq!(
        game.play_move(Coordinate::new(0, 0), "DOG", Direction::Horizontal),
        Err(GamePlayError::TilesNotConnected)
    );
    // Not in the dictionary
    assert_eq!(
        game.play_move(Coordinate::new(8, 7), "TAC", Direction::Vertical),
        Err(GamePlayError::InvalidWord {
            word: "TAC".to_string()
        })
    );
    // Runs off the bottom edge
    assert_eq!(
        game.play_move(Coordinate::new(14, 0), "DO", Direction::Vertical),
        Err(GamePlayError::OutOfBounds {
            position: Coordinate::new(15, 0)
        })
    );

    assert_eq!(game.board, before.board);
    assert_eq!(game.players, before.players);
    assert_eq!(game.bag, before.bag);
    assert_eq!(game.next_player, before.next_player);
}

#[test]
fn tiles_are_conserved_across_every_kind_of_turn() {
    let mut game = fixed_game(&["CATWXYZ", "DOGWXYZ"], 7, "EEEEEEEE");
    let total = game.tiles_in_play();

    game.play_move(Coordinate::new(7, 7), "CAT", Direction::Horizontal)
        .unwrap();
    assert_eq!(game.tiles_in_play(), total);

    game.exchange_tiles("DO").unwrap();
    assert_eq!(game.tiles_in_play(), total);

    game.pass_turn().unwrap();
    assert_eq!(game.tiles_in_play(), total);
}

#[test]
fn exchange_is_all_or_nothing() {
    let mut game = fixed_game(&["CATWXYZ", "DOGWXYZ"], 7, "EEEEEEEE");
    let rack_before = game.players[0].rack.clone();
    let bag_before = game.bag.len();

    // C is on the rack but Q is not, and there is no wildcard to stand in
    assert_eq!(
        game.exchange_tiles("CQ"),
        Err(GamePlayError::TileNotFound { letter: 'Q' })
    );
    assert_eq!(game.players[0].rack, rack_before);
    assert_eq!(game.bag.len(), bag_before);
    assert_eq!(game.next_player, 0);

    game.exchange_tiles("CA").unwrap();
    assert_eq!(game.players[0].rack.len(), 7);
    assert_eq!(game.bag.len(), bag_before);
    assert_eq!(game.next_player, 1);
}

#[test]
fn wildcards_bind_to_the_requested_letter_and_score_zero() {
    let mut game = fixed_game(&["C#TWXYZ", "DOGWXYZ"], 7, "EEEEEEEE");

    let report = game
        .play_move(Coordinate::new(7, 7), "CAT", Direction::Horizontal)
        .unwrap();
    // The A is the wildcard: (3 + 0 + 1) doubled
    assert_eq!(report.score, 8);

    let placed = game
        .board
        .get(Coordinate::new(7, 8))
        .unwrap()
        .tile()
        .unwrap();
    assert!(placed.is_wildcard());
    assert_eq!(placed.letter(), 'A');
    assert_eq!(placed.value(), 0);
}

#[test]
fn emptying_the_rack_earns_the_bingo_bonus() {
    let mut game = fixed_game(&["CAT", "DOG"], 3, "EEEEEEEE");

    let report = game
        .play_move(Coordinate::new(7, 7), "CAT", Direction::Horizontal)
        .unwrap();
    assert!(report.bingo);
    assert_eq!(report.score, 60);
    assert_eq!(game.players[0].score(), 60);
}

#[test]
fn rendering_the_same_state_twice_is_identical() {
    let mut game = fixed_game(&["CATWXYZ", "DOGWXYZ"], 7, "EEEEEEEE");
    assert_eq!(game.to_string(), game.to_string());

    game.play_move(Coordinate::new(7, 7), "CAT", Direction::Horizontal)
        .unwrap();
    let rendered = game.to_string();
    assert_eq!(rendered, game.to_string());
    assert!(rendered.contains("C3"));
    assert!(rendered.contains("A1"));
}

#[test]
fn final_penalties_never_push_a_score_negative() {
    let mut game = fixed_game(&["CATWXYZ", "DOGWXYZ"], 7, "EEEEEEEE");
    game.players[0].add_points(2);

    game.apply_final_penalties();
    assert_eq!(game.players[0].score(), 0);
    assert_eq!(game.players[1].score(), 0);
}

#[test]
fn opening_racks_decide_the_turn_order() {
    let rules = GameRules::default();
    let game = Game::new(
        rules,
        dict(),
        vec!["Mac".into(), "Gyver".into()],
        Some(5),
    )
    .unwrap();

    assert_ne!(
        game.players[0].turn_order(&game.players[1]),
        std::cmp::Ordering::Greater
    );
}
