use super::types::BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    GameOver,
    CellOccupied(usize),
    IndexOutOfRange(usize),
    NotYourTurn,
    StaleTurn { issued: u64, current: u64 },
}

impl MoveError {
    /// Everything except an out-of-range index is an ordinary rejected move.
    pub fn is_invalid_move(&self) -> bool {
        !matches!(self, MoveError::IndexOutOfRange(_))
    }
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "Game is already over"),
            MoveError::CellOccupied(index) => write!(f, "Cell {} is already taken", index),
            MoveError::IndexOutOfRange(index) => {
                write!(f, "Cell index {} is outside 0..{}", index, BOARD_SIZE)
            }
            MoveError::NotYourTurn => write!(f, "Not your turn"),
            MoveError::StaleTurn { issued, current } => write!(
                f,
                "Computer turn from generation {} discarded, session is at generation {}",
                issued, current
            ),
        }
    }
}

impl std::error::Error for MoveError {}
