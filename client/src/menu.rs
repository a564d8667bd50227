use tictactoe_engine::{Difficulty, GameMode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Play(GameMode),
    ResetStatistics,
    Quit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim() {
            "1" => MenuChoice::Play(GameMode::HumanVsAi(Difficulty::Easy)),
            "2" => MenuChoice::Play(GameMode::HumanVsAi(Difficulty::Medium)),
            "3" => MenuChoice::Play(GameMode::HumanVsAi(Difficulty::Hard)),
            "4" => MenuChoice::Play(GameMode::HumanVsHuman),
            "5" => MenuChoice::ResetStatistics,
            "0" => MenuChoice::Quit,
            _ => return None,
        };
        Some(choice)
    }
}

pub fn render_menu() -> String {
    [
        "Game Modes:",
        "  1. Play vs Computer (Easy)",
        "  2. Play vs Computer (Medium)",
        "  3. Play vs Computer (Hard)",
        "  4. Two Player Mode",
        "  5. Reset Statistics",
        "  0. Quit",
    ]
    .join("\n")
}
