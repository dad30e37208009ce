use super::types::{GameStatus, Player, WinningLine};

/// Presentation side of a game. Every method defaults to a no-op.
pub trait GameObserver {
    fn on_status_changed(&mut self, _status: GameStatus, _current_player: Player) {}
    fn on_cell_filled(&mut self, _index: usize, _player: Player) {}
    fn on_game_won(&mut self, _winner: Player, _line: WinningLine) {}
    fn on_board_cleared(&mut self) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl GameObserver for NullObserver {}
