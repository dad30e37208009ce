use super::board::Board;
use super::error::MoveError;
use super::types::{GameStatus, Player, WinningLine};
use super::win_detector::check_win_with_line;

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    last_move: Option<usize>,
    winning_line: Option<WinningLine>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::A,
            status: GameStatus::InProgress,
            last_move: None,
            winning_line: None,
        }
    }

    /// Resumes from an arbitrary position with `current_player` to move.
    pub fn from_board(board: Board, current_player: Player) -> Self {
        let mut state = Self {
            board,
            current_player,
            status: GameStatus::InProgress,
            last_move: None,
            winning_line: None,
        };
        state.check_game_over();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn apply_move(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }

        self.board.set(index, self.current_player)?;
        self.last_move = Some(index);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(self.status)
    }

    pub fn restart(&mut self) {
        self.board.reset();
        self.current_player = Player::A;
        self.status = GameStatus::InProgress;
        self.last_move = None;
        self.winning_line = None;
    }

    fn switch_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    fn check_game_over(&mut self) {
        let (status, line) = evaluate(&self.board);
        self.status = status;
        self.winning_line = line;
    }
}

pub fn evaluate(board: &Board) -> (GameStatus, Option<WinningLine>) {
    if let Some(line) = check_win_with_line(board) {
        return (GameStatus::Won(line.player), Some(line));
    }

    if board.is_full() {
        return (GameStatus::Draw, None);
    }

    (GameStatus::InProgress, None)
}
