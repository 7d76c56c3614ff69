use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use rand::rngs::SmallRng;
use thiserror::Error;

use crate::core::{
    random_placement, BoardView, CellView, Coord, GameError, GameEvent, Orientation, Ship, Shot,
    Side, Targeting, BOARD_SIZE,
};

use super::Player;

/// Why a line of terminal input could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("empty input")]
    Empty,
    #[error("invalid column '{0}' - must be a letter A-J")]
    InvalidColumn(char),
    #[error("invalid row '{0}' - must be a number 1-10")]
    InvalidRow(String),
    #[error("invalid orientation '{0}' - use H or V")]
    InvalidOrientation(String),
}

/// Parse battleship notation such as `A5` or `j10` into a coordinate.
pub fn parse_coord(input: &str) -> Result<Coord, InputError> {
    let input = input.trim();
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or(InputError::Empty)?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return Err(InputError::InvalidColumn(col_ch));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= BOARD_SIZE {
        return Err(InputError::InvalidColumn(col_ch));
    }
    let row_str = chars.as_str();
    let row: usize = row_str
        .parse()
        .map_err(|_| InputError::InvalidRow(row_str.to_string()))?;
    if row == 0 || row > BOARD_SIZE {
        return Err(InputError::InvalidRow(row_str.to_string()));
    }
    Ok(Coord::new(row - 1, col))
}

/// Parse a placement such as `A5 H` or `B3 v`. Orientation defaults to
/// horizontal.
pub fn parse_placement(input: &str) -> Result<(Coord, Orientation), InputError> {
    let mut parts = input.split_whitespace();
    let coord = parse_coord(parts.next().ok_or(InputError::Empty)?)?;
    let orientation = match parts.next() {
        None => Orientation::Horizontal,
        Some(s) if s.eq_ignore_ascii_case("h") => Orientation::Horizontal,
        Some(s) if s.eq_ignore_ascii_case("v") => Orientation::Vertical,
        Some(s) => return Err(InputError::InvalidOrientation(s.to_string())),
    };
    Ok((coord, orientation))
}

/// Render a board view as a framed text grid.
pub fn render_board(view: &BoardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "    ╔═══════════════════════╗");
    let _ = write!(out, "    ║  ");
    for c in 0..BOARD_SIZE {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
    let _ = writeln!(out, " ║");
    let _ = writeln!(out, "    ╠═══════════════════════╣");
    for (r, row) in view.rows().enumerate() {
        let _ = write!(out, "    ║ {:2}", r + 1);
        for cell in row.iter() {
            let ch = match cell {
                CellView::Unknown | CellView::Water => '.',
                CellView::Ship(_) => 'S',
                CellView::Hit => 'X',
                CellView::Sunk(_) => '#',
                CellView::Miss => 'o',
            };
            let _ = write!(out, " {}", ch);
        }
        let _ = writeln!(out, " ║");
    }
    let _ = writeln!(out, "    ╚═══════════════════════╝");
    let _ = write!(out, "    Legend: S=Ship  X=Hit  #=Sunk  o=Miss  .=Unknown");
    out
}

/// Display the opponent board (top) and the player's board (bottom).
pub fn print_player_view(target: &BoardView, own: &BoardView) {
    println!("Opponent board:");
    println!("{}", render_board(target));
    println!("\nYour board:");
    println!("{}", render_board(own));
}

/// Interactive player reading moves from a line-based input.
pub struct CliPlayer {
    input: Box<dyn BufRead>,
    advisor: Targeting,
}

impl CliPlayer {
    /// Player reading from stdin.
    pub fn new() -> Self {
        Self::with_input(io::BufReader::new(io::stdin()))
    }

    /// Player reading from any buffered source.
    pub fn with_input<R: BufRead + 'static>(input: R) -> Self {
        Self {
            input: Box::new(input),
            advisor: Targeting::new(true),
        }
    }

    /// Prompt and read one trimmed line. `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        let _ = io::stdout().flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for CliPlayer {
    fn select_placement(
        &mut self,
        rng: &mut SmallRng,
        ship: &Ship,
        own: &BoardView,
    ) -> Option<(Coord, Orientation)> {
        loop {
            println!("\n{}", render_board(own));
            println!("\nShip {}: {} (length {})", ship.id().0 + 1, ship.name(), ship.length());
            let line = self.read_line(
                "Enter placement (e.g. A5 H; ENTER for random, 'auto' for all, 'help'): ",
            )?;
            if line.is_empty() {
                return Some(random_placement(rng));
            }
            if line.eq_ignore_ascii_case("auto") {
                return None;
            }
            if line.eq_ignore_ascii_case("help") {
                print_placement_help();
                continue;
            }
            match parse_placement(&line) {
                Ok(placement) => return Some(placement),
                Err(e) => println!("✗ Error: {}", e),
            }
        }
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        target: &BoardView,
        own: &BoardView,
    ) -> Option<Coord> {
        print_player_view(target, own);
        let suggestion = self.advisor.choose(rng, target).map(|(coord, _)| coord);
        loop {
            let prompt = match suggestion {
                Some(s) => format!("\nEnter target coordinates [suggested: {}] (or 'help'): ", s),
                None => "\nEnter target coordinates (or 'help'): ".to_string(),
            };
            let line = self.read_line(&prompt)?;
            if line.is_empty() {
                if let Some(s) = suggestion {
                    println!("Using suggestion: {}", s);
                    return Some(s);
                }
                continue;
            }
            if line.eq_ignore_ascii_case("help") {
                print_targeting_help();
                continue;
            }
            match parse_coord(&line) {
                Ok(coord) if !target.is_untried(coord) => {
                    println!("✗ You already fired at {}! Choose another target.", coord);
                }
                Ok(coord) => return Some(coord),
                Err(e) => {
                    println!("✗ Invalid coordinate: {}", e);
                    println!("   Example: A5, B10, J1");
                }
            }
        }
    }

    fn handle_guess_result(&mut self, coord: Coord, shot: Shot) {
        self.advisor.record(coord, shot);
        match shot {
            Shot::Hit(_) => println!("\n🎯 HIT! Your shot at {} struck an enemy ship!", coord),
            Shot::Miss => println!("\n💧 Miss. Your shot at {} hit only water.", coord),
            Shot::Sunk(id) => println!("\n💥 SUNK! You destroyed the enemy's {}!", id),
        }
    }

    fn handle_opponent_guess(&mut self, coord: Coord, shot: Shot) {
        match shot {
            Shot::Hit(id) => println!("⚠️  ENEMY HIT! They struck your {} at {}", id, coord),
            Shot::Miss => println!("✓ Enemy missed at {}", coord),
            Shot::Sunk(id) => println!("💀 SHIP LOST! Enemy destroyed your {} at {}", id, coord),
        }
    }

    fn handle_rejection(&mut self, err: &GameError) {
        println!("✗ Error: {}", err);
    }

    fn handle_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::ShipPlaced {
                ship,
                origin,
                orientation,
                ..
            } => println!("✓ {} placed at {} ({:?})", ship, origin, orientation),
            GameEvent::CombatStarted => {
                println!("\n✓ All ships placed! Ready to begin battle.\n");
            }
            GameEvent::GameOver { winner: Side::Human } => {
                println!("\n🎉🎉🎉 VICTORY! 🎉🎉🎉");
                println!("You have sunk all enemy ships!");
            }
            GameEvent::GameOver {
                winner: Side::Opponent,
            } => {
                println!("\n💀 DEFEAT 💀");
                println!("All your ships have been destroyed.");
            }
            GameEvent::AttackResolved { .. } => {}
        }
    }
}

fn print_placement_help() {
    println!("\n╔════════════════════════════════════════════════════════╗");
    println!("║              SHIP PLACEMENT HELP                       ║");
    println!("╠════════════════════════════════════════════════════════╣");
    println!("║ Format: <COLUMN><ROW> <ORIENTATION>                    ║");
    println!("║                                                        ║");
    println!("║ Examples:                                              ║");
    println!("║   A5 H    - Place ship at A5, horizontal               ║");
    println!("║   B3 V    - Place ship at B3, vertical                 ║");
    println!("║                                                        ║");
    println!("║ Valid columns: A-J (A is leftmost)                     ║");
    println!("║ Valid rows: 1-10 (1 is topmost)                        ║");
    println!("║ Orientation: H=Horizontal, V=Vertical                  ║");
    println!("║                                                        ║");
    println!("║ Ships extend right (H) or down (V) from the start.     ║");
    println!("║ ENTER places the current ship at random; 'auto'        ║");
    println!("║ places every remaining ship at random.                 ║");
    println!("╚════════════════════════════════════════════════════════╝\n");
}

fn print_targeting_help() {
    println!("\n╔════════════════════════════════════════════════════════╗");
    println!("║                  TARGETING HELP                        ║");
    println!("╠════════════════════════════════════════════════════════╣");
    println!("║ Format: <COLUMN><ROW>, e.g. A5, B10, J1                ║");
    println!("║                                                        ║");
    println!("║ Board symbols:                                         ║");
    println!("║   X = Hit (you struck an enemy ship)                   ║");
    println!("║   # = Sunk ship                                        ║");
    println!("║   o = Miss (shot hit water)                            ║");
    println!("║   . = Unknown (not yet targeted)                       ║");
    println!("║                                                        ║");
    println!("║ The suggestion follows up on your last hit, or picks   ║");
    println!("║ an untried cell at random. Press ENTER to use it.      ║");
    println!("╚════════════════════════════════════════════════════════╝\n");
}
