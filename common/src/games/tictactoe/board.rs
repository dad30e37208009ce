use super::error::MoveError;
use super::types::{BOARD_SIZE, Cell, Player};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Result<Cell, MoveError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(MoveError::IndexOutOfRange(index))
    }

    pub fn set(&mut self, index: usize, player: Player) -> Result<(), MoveError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(MoveError::IndexOutOfRange(index))?;

        if *cell != Cell::Empty {
            return Err(MoveError::CellOccupied(index));
        }

        *cell = Cell::Taken(player);
        Ok(())
    }

    /// Out-of-range indices are reported as not empty.
    pub fn is_empty(&self, index: usize) -> bool {
        self.cells.get(index) == Some(&Cell::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    pub fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; BOARD_SIZE];
    }

    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Taken(player))
            .count()
    }

    /// A always moves first, so it holds as many cells as B or one more.
    pub fn is_consistent(&self) -> bool {
        let a = self.count(Player::A);
        let b = self.count(Player::B);
        a == b || a == b + 1
    }

    pub(crate) fn clear(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Cell::Empty;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_indices(), (0..BOARD_SIZE).collect::<Vec<_>>());
        assert!(!board.is_full());
        assert!(board.is_consistent());
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new();
        board.set(3, Player::A).unwrap();
        assert_eq!(board.get(3), Ok(Cell::Taken(Player::A)));
        assert!(!board.is_empty(3));
        assert_eq!(board.empty_indices(), vec![0, 1, 2, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_set_occupied_cell_fails_without_change() {
        let mut board = Board::new();
        board.set(0, Player::A).unwrap();
        assert_eq!(board.set(0, Player::B), Err(MoveError::CellOccupied(0)));
        assert_eq!(board.get(0), Ok(Cell::Taken(Player::A)));
    }

    #[test]
    fn test_out_of_range() {
        let mut board = Board::new();
        assert_eq!(board.get(9), Err(MoveError::IndexOutOfRange(9)));
        assert_eq!(board.set(12, Player::A), Err(MoveError::IndexOutOfRange(12)));
        assert!(!board.is_empty(9));
    }

    #[test]
    fn test_full_and_reset() {
        let mut board = Board::new();
        for index in 0..BOARD_SIZE {
            let player = if index % 2 == 0 { Player::A } else { Player::B };
            board.set(index, player).unwrap();
        }
        assert!(board.is_full());
        assert!(board.empty_indices().is_empty());
        assert_eq!(board.count(Player::A), 5);
        assert_eq!(board.count(Player::B), 4);

        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_inconsistent_counts() {
        let board = Board::from_cells([
            Cell::Taken(Player::B),
            Cell::Taken(Player::B),
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
        ]);
        assert!(!board.is_consistent());
    }
}
