use super::board::Board;
use super::types::{Cell, Player, WinningLine};

/// Rows, columns, then diagonals. Earlier lines take precedence when more
/// than one is complete.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Player> {
    check_win_with_line(board).map(|line| line.player)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();

    for line in WIN_LINES {
        let [a, b, c] = line;
        if let Cell::Taken(player) = cells[a]
            && cells[b] == cells[a]
            && cells[c] == cells[a]
        {
            return Some(WinningLine::new(player, line));
        }
    }

    None
}

/// True if `player` owns any complete line, regardless of what else is on
/// the board.
pub fn has_line(board: &Board, player: Player) -> bool {
    let cells = board.cells();
    let mark = Cell::Taken(player);

    WIN_LINES
        .iter()
        .any(|&[a, b, c]| cells[a] == mark && cells[b] == mark && cells[c] == mark)
}
