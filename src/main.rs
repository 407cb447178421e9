use anyhow::{bail, Context, Result};
use std::io::{self, Write};

use wordgrid::board::{Coordinate, Direction};
use wordgrid::game::Game;
use wordgrid::judge::Judge;
use wordgrid::rules::GameRules;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let word_list_path = match args.next() {
        Some(path) => path,
        None => bail!("usage: wordgrid <word list> [rules.json]"),
    };
    let rules = match args.next() {
        Some(path) => {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read rules from {path}"))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("failed to parse rules from {path}"))?
        }
        None => GameRules::default(),
    };
    rules.validate().context("invalid rules")?;

    let words = std::fs::read_to_string(&word_list_path)
        .with_context(|| format!("failed to read word list from {word_list_path}"))?;
    let judge = Judge::from_word_list(&words);
    if judge.is_empty() {
        bail!("word list {word_list_path} contains no words");
    }

    let mut names = Vec::with_capacity(rules.player_count);
    for i in 0..rules.player_count {
        names.push(prompt(&format!("Name of player {}: ", i + 1))?);
    }

    let mut game = Game::new(rules, judge, names, None)?;
    while !game.is_over {
        clearscreen::clear()?;
        println!("{game}");
        println!();
        println!("1) Play a word");
        println!("2) Exchange tiles");
        println!("3) Pass");
        println!("4) Resign");

        let outcome = match prompt("Choose an option: ")?.as_str() {
            "1" => take_move_turn(&mut game),
            "2" => {
                let letters = prompt("Letters to exchange: ")?;
                game.exchange_tiles(&letters).map(|()| None)
            }
            "3" => game.pass_turn().map(|()| None),
            "4" => game.resign().map(|()| None),
            _ => {
                println!("Please choose 1-4.");
                pause()?;
                continue;
            }
        };
        match outcome {
            Ok(Some(report)) => {
                println!("{report}");
                pause()?;
            }
            Ok(None) => {}
            Err(error) => {
                println!("Move rejected: {error}");
                pause()?;
            }
        }
    }

    game.apply_final_penalties();
    println!();
    println!("Game over! Final scores:");
    let mut standings: Vec<_> = game.players.iter().collect();
    standings.sort_by(|a, b| b.score().cmp(&a.score()));
    for player in standings {
        println!("  {} - {}", player.name, player.score());
    }
    Ok(())
}

fn take_move_turn(
    game: &mut Game,
) -> Result<Option<wordgrid::moves::MoveReport>, wordgrid::error::GamePlayError> {
    let origin = loop {
        match read_coordinate() {
            Ok(coordinate) => break coordinate,
            Err(error) => println!("{error}"),
        }
    };
    let direction = loop {
        match prompt("Direction (h/v): ").map(|d| d.to_lowercase().parse()) {
            Ok(Ok(direction)) => break direction,
            _ => println!("Enter h or v."),
        }
    };
    let word = prompt("Word: ").unwrap_or_default();
    game.play_move(origin, &word, direction).map(Some)
}

fn read_coordinate() -> Result<Coordinate> {
    let row = prompt("Row: ")?.parse().context("rows are numbers")?;
    let col = prompt("Column: ")?.parse().context("columns are numbers")?;
    Ok(Coordinate::new(row, col))
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn pause() -> Result<()> {
    prompt("Press enter to continue...")?;
    Ok(())
}
