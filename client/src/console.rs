use std::io::{BufRead, Write};

use tictactoe_engine::game::{CELL_COUNT, SIDE};
use tictactoe_engine::{
    Bot, GameBroadcaster, GameSnapshot, GameStatus, HumanInput, Mark, MoveError, MoveInput, Seat,
    SessionStats, TurnLoop,
};

const RULE: &str = "==================================================";
const CANCEL_WORDS: [&str; 2] = ["q", "quit"];

pub fn render_board(cells: &[Mark; CELL_COUNT]) -> String {
    let rows: Vec<String> = cells
        .chunks(SIDE)
        .map(|row| {
            let symbols: Vec<String> = row.iter().map(|mark| mark.symbol().to_string()).collect();
            format!("  {}", symbols.join(" | "))
        })
        .collect();
    rows.join("\n  ---------\n")
}

pub fn render_positions() -> String {
    let cells: Vec<String> = (1..=CELL_COUNT).map(|p| p.to_string()).collect();
    let rows: Vec<String> = cells
        .chunks(SIDE)
        .map(|row| format!("  {}", row.join(" | ")))
        .collect();
    format!("  Board Positions:\n{}", rows.join("\n  ---------\n"))
}

pub fn render_stats(stats: &SessionStats) -> String {
    let mut lines = vec![
        "Statistics:".to_string(),
        format!("   Games Played: {}", stats.games_played()),
        format!("   X Wins: {}", stats.wins_for(Mark::First)),
        format!("   O Wins: {}", stats.wins_for(Mark::Second)),
        format!("   Ties: {}", stats.ties()),
    ];
    for mark in [Mark::First, Mark::Second] {
        if let Some(rate) = stats.win_rate(mark) {
            lines.push(format!("   {} Win Rate: {:.1}%", mark.symbol(), rate));
        }
    }
    lines.join("\n")
}

pub fn render_header() -> String {
    format!("{RULE}\n   TIC TAC TOE\n{RULE}")
}

/// Line-based human input. End of input counts as cancelling the game.
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Shows `text` and waits for one line; `None` once input is exhausted.
    pub fn prompt(&mut self, text: &str) -> Option<String> {
        let _ = write!(self.writer, "{}", text);
        let _ = self.writer.flush();

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    pub fn say(&mut self, text: &str) {
        let _ = writeln!(self.writer, "{}", text);
    }

    #[cfg(test)]
    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<R: BufRead, W: Write> MoveInput for ConsoleInput<R, W> {
    fn read_move(&mut self, mark: Mark, _snapshot: &GameSnapshot) -> HumanInput {
        let text = format!("Player {} - enter position (1-9, q to quit): ", mark.symbol());
        match self.prompt(&text) {
            Some(line) if CANCEL_WORDS.contains(&line.to_ascii_lowercase().as_str()) => {
                HumanInput::Cancelled
            }
            Some(line) => HumanInput::Entered(line),
            None => HumanInput::Cancelled,
        }
    }

    fn reject(&mut self, _mark: Mark, error: &MoveError) {
        let message = match error {
            MoveError::OccupiedCell(_) => "That space is taken!".to_string(),
            MoveError::InvalidInput(_) | MoveError::OutOfRange(_) => {
                "Invalid input! Enter a number 1-9.".to_string()
            }
            other => other.to_string(),
        };
        self.say(&message);
    }
}

/// Prints the board and results for one game.
pub struct ConsoleBroadcaster<W> {
    writer: W,
    human_marks: Vec<Mark>,
}

impl<W: Write> ConsoleBroadcaster<W> {
    pub fn for_game(game: &TurnLoop, writer: W) -> Self {
        let human_marks = [Mark::First, Mark::Second]
            .into_iter()
            .filter(|&mark| game.seat(mark) == Seat::Human)
            .collect();
        Self {
            writer,
            human_marks,
        }
    }

    fn against_computer(&self) -> bool {
        self.human_marks.len() == 1
    }

    fn game_over_message(&self, status: GameStatus) -> String {
        match status {
            GameStatus::Won(mark) if self.against_computer() => {
                if self.human_marks.contains(&mark) {
                    "YOU WIN!".to_string()
                } else {
                    "COMPUTER WINS!".to_string()
                }
            }
            GameStatus::Won(mark) => format!("PLAYER {} WINS!", mark.symbol()),
            GameStatus::Tie => "IT'S A TIE!".to_string(),
            GameStatus::InProgress => "Game interrupted.".to_string(),
        }
    }

    #[cfg(test)]
    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<W: Write> GameBroadcaster for ConsoleBroadcaster<W> {
    fn broadcast_state(&mut self, snapshot: &GameSnapshot) {
        let _ = writeln!(self.writer, "\n{}\n", render_board(&snapshot.cells));
        if !snapshot.is_terminal {
            let _ = writeln!(self.writer, "{}'s turn", snapshot.current_turn.symbol());
        }
    }

    fn broadcast_bot_move(&mut self, _bot: &Bot, index: usize) {
        let _ = writeln!(self.writer, "Computer chose position {}", index + 1);
    }

    fn broadcast_game_over(&mut self, status: GameStatus, stats: &SessionStats) {
        let _ = writeln!(self.writer, "{}", self.game_over_message(status));
        let _ = writeln!(self.writer, "{}", render_stats(stats));
    }
}
