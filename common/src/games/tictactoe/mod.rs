mod board;
mod bot_controller;
mod controller;
mod error;
mod game_state;
mod observer;
mod session;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{BotInput, BotMove, MoveReason, calculate_move};
pub use controller::TicTacToeController;
pub use error::MoveError;
pub use game_state::{GameState, evaluate};
pub use observer::{GameObserver, NullObserver};
pub use session::{COMPUTER_PLAYER, ComputerTurn, GameSession, MoveOutcome};
pub use types::{BOARD_SIZE, CENTER, CORNERS, Cell, GameStatus, Player, WinningLine};
pub use win_detector::{WIN_LINES, check_win, check_win_with_line, has_line};
