#![cfg(feature = "std")]

use std::boxed::Box;
use std::io::{self, BufRead, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::{
    board::{Board, Cell},
    common::{Coordinate, GameError, GuessOutcome, GuessResult},
    game::PlayerView,
    ship::ShipSet,
};

use crate::player::Player;

/// Human player reading coordinates from a line-oriented input, stdin by default.
pub struct CliPlayer {
    input: Box<dyn BufRead>,
}

impl CliPlayer {
    pub fn new() -> Self {
        Self::with_input(io::BufReader::new(io::stdin()))
    }

    /// Read answers from `input` instead of stdin.
    pub fn with_input<R: BufRead + 'static>(input: R) -> Self {
        Self {
            input: Box::new(input),
        }
    }

    /// Next trimmed line, or `None` once input is closed or unreadable.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    /// Ask whether to deal a new game. Anything but yes means no.
    pub fn ask_play_again(&mut self) -> bool {
        std::print!("Play again? [y/N]: ");
        let _ = io::stdout().flush();
        matches!(
            self.read_line().as_deref().map(str::to_ascii_lowercase).as_deref(),
            Some("y") | Some("yes")
        )
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse "row col", "row,col" or "(row, col)", zero-based.
pub fn parse_coord(input: &str) -> Option<Coordinate> {
    let cleaned = input.trim().trim_start_matches('(').trim_end_matches(')');
    let mut parts = cleaned
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|p| !p.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Coordinate::new(row, col))
}

/// Glyph used for a cell. `has_ship` marks an own intact ship on untouched water.
pub fn cell_glyph(cell: Cell, has_ship: bool) -> char {
    match cell {
        Cell::Hit => 'X',
        Cell::HurtMarker => '!',
        Cell::Miss => 'o',
        Cell::Water if has_ship => 'S',
        Cell::Water => '~',
    }
}

fn print_board(board: &Board, ships: Option<&ShipSet>) {
    std::print!("  ");
    for c in 0..board.size() {
        std::print!(" {}", c);
    }
    std::println!();
    for (r, row) in board.rows().enumerate() {
        std::print!("{:2}", r);
        for (c, &cell) in row.iter().enumerate() {
            let has_ship = ships.is_some_and(|s| s.contains(Coordinate::new(r, c)));
            std::print!(" {}", cell_glyph(cell, has_ship));
        }
        std::println!();
    }
}

/// Display the player's own board (ships revealed) and the computer's board
/// (ships hidden).
pub fn print_player_view(view: &PlayerView<'_>) {
    std::println!("\nYour board:");
    print_board(view.own_board, Some(view.own_ships));
    std::println!("\nComputer's board:");
    print_board(view.target_board, None);
}

impl Player for CliPlayer {
    fn select_target(&mut self, _rng: &mut SmallRng, view: &PlayerView<'_>) -> Option<Coordinate> {
        print_player_view(view);
        let max = view.target_board.size().saturating_sub(1);
        loop {
            std::print!("Enter row and column (0-{}), or q to quit: ", max);
            let _ = io::stdout().flush();
            let line = self.read_line()?;
            if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
                return None;
            }
            match parse_coord(&line) {
                Some(coord) => return Some(coord),
                None => std::println!("Invalid coordinate"),
            }
        }
    }

    fn handle_guess_result(&mut self, outcome: &GuessOutcome) {
        match outcome.result {
            GuessResult::Sunk => std::println!("Hit! Ship sunk at {}.", outcome.coord),
            GuessResult::Near => std::println!("Hurt! A ship is nearby."),
            GuessResult::Miss => std::println!("Miss!"),
        }
    }

    fn handle_opponent_guess(&mut self, outcome: &GuessOutcome) {
        let what = match outcome.result {
            GuessResult::Sunk => "sank one of your ships",
            GuessResult::Near => "landed next to one of your ships",
            GuessResult::Miss => "missed",
        };
        std::println!("Computer fired at {} and {}.", outcome.coord, what);
    }

    fn handle_rejected_guess(&mut self, err: &GameError) {
        match err {
            GameError::DuplicateGuess(_) => {
                std::println!("You've already fired at this location!")
            }
            other => std::println!("{}", other),
        }
    }
}
