mod console_ui;
mod constants;
mod effects;
mod input;
mod runner;

use std::path::PathBuf;

use clap::Parser;
use common::config::{ConfigManager, GameConfig, Validate};
use common::defaults::CONFIG_FILE_NAME;
use common::games::tictactoe::{GameSession, TicTacToeController};
use common::{log, logger};
use tokio::io::BufReader;

use console_ui::ConsoleBoard;
use effects::ConsoleEffects;

#[derive(Parser)]
#[command(name = "heartstar", about = "Heart vs Star tic-tac-toe in the terminal")]
struct Args {
    /// YAML config file; defaults to one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// Let two humans share the keyboard
    #[arg(long)]
    no_computer: bool,

    /// Seed for the computer's random tie-breaks
    #[arg(long)]
    seed: Option<u64>,

    /// Pause before the computer answers, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long, short)]
    verbose: bool,
}

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

fn load_config(args: &Args) -> Result<GameConfig, String> {
    let path = args.config.clone().unwrap_or_else(get_config_path);
    let manager: ConfigManager<_, GameConfig> = ConfigManager::from_yaml_file(path);
    let mut config = manager.get_config()?;

    if args.no_computer {
        config.computer_opponent = false;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(delay_ms) = args.delay_ms {
        config.computer_move_delay_ms = delay_ms;
    }

    config.validate()?;
    Ok(config)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("HeartStar".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config = load_config(&args)?;
    let session = GameSession::with_seed(config.computer_opponent, config.seed);
    log!(
        "Starting game, computer opponent {}, seed {}",
        if config.computer_opponent { "on" } else { "off" },
        session.seed()
    );

    let board = ConsoleBoard::new(std::io::stdout());
    let effects = ConsoleEffects::new(
        std::io::stdout(),
        config.sound_enabled,
        config.celebration_enabled,
    );
    let mut controller = TicTacToeController::new(session, board, effects);
    controller.observer_mut().notice(input::HELP);

    let stdin = BufReader::new(tokio::io::stdin());
    runner::run_game(&mut controller, stdin, config.computer_move_delay()).await?;

    Ok(())
}
