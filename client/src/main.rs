mod config;
mod console;
mod menu;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tictactoe_engine::{
    Difficulty, FirstPlayerMode, GameEnd, GameMode, HardOpening, Session, logger,
};
use tictactoe_engine::log;

use config::{ClientConfig, get_config_manager};
use console::{
    ConsoleBroadcaster, ConsoleInput, render_header, render_positions, render_stats,
};
use menu::{MenuChoice, render_menu};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FirstPlayerArg {
    Human,
    Computer,
    Random,
}

impl From<FirstPlayerArg> for FirstPlayerMode {
    fn from(arg: FirstPlayerArg) -> Self {
        match arg {
            FirstPlayerArg::Human => FirstPlayerMode::Human,
            FirstPlayerArg::Computer => FirstPlayerMode::Computer,
            FirstPlayerArg::Random => FirstPlayerMode::Random,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe against the computer or a friend")]
struct Args {
    /// Settings file, defaults to tictactoe.yaml next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    /// easy, medium or hard.
    #[arg(long)]
    difficulty: Option<String>,

    #[arg(long)]
    two_player: bool,

    #[arg(long, value_enum)]
    first_player: Option<FirstPlayerArg>,

    /// Always run full search for the computer's first move.
    #[arg(long)]
    search_opening: bool,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,

    /// Play a single game and exit instead of showing the menu.
    #[arg(long)]
    play: bool,

    /// Write the effective settings back to the config file.
    #[arg(long)]
    save_config: bool,
}

impl Args {
    fn apply_to(&self, mut config: ClientConfig) -> ClientConfig {
        if let Some(ref difficulty) = self.difficulty {
            config.difficulty = difficulty.clone();
        }
        if let Some(first_player) = self.first_player {
            config.first_player = first_player.into();
        }
        if self.search_opening {
            config.hard_opening = HardOpening::Search;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.verbose |= self.verbose;
        config
    }
}

fn play_one<R: BufRead, W: Write>(
    session: &mut Session,
    mode: GameMode,
    input: &mut ConsoleInput<R, W>,
) -> Result<GameEnd, tictactoe_engine::EngineError> {
    let mut game = session.new_game(mode);
    input.say(&render_positions());
    let mut broadcaster = ConsoleBroadcaster::for_game(&game, std::io::stdout());
    let end = session.play(&mut game, input, &mut broadcaster)?;
    if end == GameEnd::Cancelled {
        input.say("Game cancelled.");
    }
    Ok(end)
}

fn run_menu<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut ConsoleInput<R, W>,
) -> Result<(), tictactoe_engine::EngineError> {
    loop {
        input.say(&format!("\n{}", render_header()));
        if session.statistics().games_played() > 0 {
            input.say(&render_stats(session.statistics()));
        }
        input.say(&render_menu());

        let Some(line) = input.prompt("\nYour choice: ") else {
            return Ok(());
        };

        match MenuChoice::parse(&line) {
            Some(MenuChoice::Play(mode)) => {
                if mode == GameMode::HumanVsAi(Difficulty::Hard) {
                    input.say("Hard mode: Computer plays perfectly!");
                }
                play_one(session, mode, input)?;
            }
            Some(MenuChoice::ResetStatistics) => {
                let confirm = input.prompt("Reset all statistics? (yes/no): ");
                if confirm.is_some_and(|answer| answer.eq_ignore_ascii_case("yes")) {
                    session.reset_statistics();
                    input.say("Statistics reset!");
                } else {
                    input.say("Reset cancelled.");
                }
            }
            Some(MenuChoice::Quit) => return Ok(()),
            None => input.say("Invalid choice!"),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.clone());
    let config = args.apply_to(config_manager.get_config()?);
    let difficulty = config.difficulty()?;

    if config.verbose {
        let prefix = args.use_log_prefix.then(|| "TicTacToe".to_string());
        logger::init_logger(prefix);
    }

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved settings to config file");
    }

    let mut session = Session::new(config.session_settings());
    let stdin = std::io::stdin();
    let mut input = ConsoleInput::new(stdin.lock(), std::io::stdout());

    if args.play {
        let mode = if args.two_player {
            GameMode::HumanVsHuman
        } else {
            GameMode::HumanVsAi(difficulty)
        };
        play_one(&mut session, mode, &mut input)?;
    } else {
        run_menu(&mut session, &mut input)?;
    }

    log!("Session ended after {} games", session.statistics().games_played());
    Ok(())
}
