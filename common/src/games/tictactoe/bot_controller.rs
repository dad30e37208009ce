use crate::games::ChoiceSource;
use super::board::Board;
use super::game_state::GameState;
use super::types::{CENTER, CORNERS, Player};
use super::win_detector::has_line;

pub struct BotInput {
    pub board: Board,
    pub current_player: Player,
}

impl BotInput {
    pub fn from_game_state(state: &GameState) -> Self {
        Self {
            board: state.board().clone(),
            current_player: state.current_player(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveReason {
    Win,
    Block,
    Center,
    Corner,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotMove {
    pub index: usize,
    pub reason: MoveReason,
}

impl BotMove {
    fn new(index: usize, reason: MoveReason) -> Self {
        Self { index, reason }
    }
}

/// Win, then block, then center, then a random corner, then any random
/// empty cell. Only the last two tiers consume randomness.
pub fn calculate_move<R: ChoiceSource + ?Sized>(input: BotInput, rng: &mut R) -> Option<BotMove> {
    let bot = input.current_player;
    let mut board = input.board;
    let available_moves = board.empty_indices();

    if available_moves.is_empty() {
        return None;
    }

    if let Some(index) = find_winning_move(&mut board, bot, &available_moves) {
        return Some(BotMove::new(index, MoveReason::Win));
    }

    if let Some(index) = find_winning_move(&mut board, bot.opponent(), &available_moves) {
        return Some(BotMove::new(index, MoveReason::Block));
    }

    if board.is_empty(CENTER) {
        return Some(BotMove::new(CENTER, MoveReason::Center));
    }

    let corners: Vec<usize> = CORNERS
        .into_iter()
        .filter(|&corner| board.is_empty(corner))
        .collect();
    if !corners.is_empty() {
        let pick = rng.choose_index(corners.len());
        return Some(BotMove::new(corners[pick], MoveReason::Corner));
    }

    let pick = rng.choose_index(available_moves.len());
    Some(BotMove::new(available_moves[pick], MoveReason::Random))
}

fn find_winning_move(board: &mut Board, player: Player, moves: &[usize]) -> Option<usize> {
    for &index in moves {
        if board.set(index, player).is_err() {
            continue;
        }
        let wins = has_line(board, player);
        board.clear(index);

        if wins {
            return Some(index);
        }
    }
    None
}
