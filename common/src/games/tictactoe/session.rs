use crate::games::{ChoiceSource, SessionRng};
use super::bot_controller::{BotInput, MoveReason, calculate_move};
use super::error::MoveError;
use super::game_state::GameState;
use super::types::{GameStatus, Player};

/// The computer always plays B; A is the human first mover.
pub const COMPUTER_PLAYER: Player = Player::B;

/// A computer move that was scheduled for a specific session generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerTurn {
    generation: u64,
}

impl ComputerTurn {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub index: usize,
    pub player: Player,
    pub status: GameStatus,
    /// Set for computer moves only.
    pub reason: Option<MoveReason>,
}

pub struct GameSession<R: ChoiceSource = SessionRng> {
    state: GameState,
    computer_enabled: bool,
    generation: u64,
    rng: R,
}

impl GameSession<SessionRng> {
    pub fn with_seed(computer_enabled: bool, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        };
        Self::new(computer_enabled, rng)
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl<R: ChoiceSource> GameSession<R> {
    pub fn new(computer_enabled: bool, rng: R) -> Self {
        Self {
            state: GameState::new(),
            computer_enabled,
            generation: 0,
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn computer_enabled(&self) -> bool {
        self.computer_enabled
    }

    pub fn is_computer_turn(&self) -> bool {
        self.computer_enabled
            && self.state.status() == GameStatus::InProgress
            && self.state.current_player() == COMPUTER_PLAYER
    }

    pub fn is_accepting_human_input(&self) -> bool {
        self.state.status() == GameStatus::InProgress && !self.is_computer_turn()
    }

    pub fn apply_move(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        if self.state.status().is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.is_accepting_human_input() {
            return Err(MoveError::NotYourTurn);
        }
        self.place(index, None)
    }

    /// Ticket for the computer's next move, if the computer is to move.
    pub fn pending_computer_turn(&self) -> Option<ComputerTurn> {
        self.is_computer_turn().then_some(ComputerTurn {
            generation: self.generation,
        })
    }

    pub fn play_computer_turn(&mut self, turn: ComputerTurn) -> Result<MoveOutcome, MoveError> {
        if turn.generation != self.generation {
            return Err(MoveError::StaleTurn {
                issued: turn.generation,
                current: self.generation,
            });
        }
        self.computer_move()
    }

    pub fn computer_move(&mut self) -> Result<MoveOutcome, MoveError> {
        if self.state.status().is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.is_computer_turn() {
            return Err(MoveError::NotYourTurn);
        }

        let input = BotInput::from_game_state(&self.state);
        let Some(bot_move) = calculate_move(input, &mut self.rng) else {
            return Err(MoveError::GameOver);
        };

        self.place(bot_move.index, Some(bot_move.reason))
    }

    pub fn restart(&mut self) {
        self.state.restart();
        self.generation += 1;
    }

    pub fn set_computer_enabled(&mut self, computer_enabled: bool) {
        self.computer_enabled = computer_enabled;
        self.restart();
    }

    fn place(&mut self, index: usize, reason: Option<MoveReason>) -> Result<MoveOutcome, MoveError> {
        let player = self.state.current_player();
        let status = self.state.apply_move(index)?;
        Ok(MoveOutcome {
            index,
            player,
            status,
            reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::ScriptedChoices;
    use crate::games::tictactoe::Board;

    fn session(computer_enabled: bool) -> GameSession<ScriptedChoices> {
        GameSession::new(computer_enabled, ScriptedChoices::default())
    }

    #[test]
    fn test_computer_replies_in_center() {
        let mut session = session(true);
        let outcome = session.apply_move(0).unwrap();
        assert_eq!(outcome.player, Player::A);
        assert!(!session.is_accepting_human_input());

        let turn = session.pending_computer_turn().unwrap();
        let reply = session.play_computer_turn(turn).unwrap();
        assert_eq!(reply.index, 4);
        assert_eq!(reply.player, Player::B);
        assert_eq!(reply.reason, Some(MoveReason::Center));
        assert_eq!(session.current_player(), Player::A);
        assert!(session.is_accepting_human_input());
    }

    #[test]
    fn test_human_move_rejected_while_computer_pending() {
        let mut session = session(true);
        session.apply_move(0).unwrap();
        let before = session.state().board().clone();
        assert_eq!(session.apply_move(1), Err(MoveError::NotYourTurn));
        assert_eq!(session.state().board(), &before);
        assert_eq!(session.current_player(), Player::B);
    }

    #[test]
    fn test_two_humans_alternate_without_computer() {
        let mut session = session(false);
        session.apply_move(0).unwrap();
        assert_eq!(session.pending_computer_turn(), None);
        let outcome = session.apply_move(4).unwrap();
        assert_eq!(outcome.player, Player::B);
        assert_eq!(session.computer_move(), Err(MoveError::NotYourTurn));
    }

    #[test]
    fn test_computer_move_out_of_turn_is_noop() {
        let mut session = session(true);
        assert_eq!(session.computer_move(), Err(MoveError::NotYourTurn));
        assert_eq!(session.state().board(), &Board::new());
    }

    #[test]
    fn test_stale_turn_after_restart_is_discarded() {
        let mut session = session(true);
        session.apply_move(0).unwrap();
        let turn = session.pending_computer_turn().unwrap();

        session.restart();
        assert_eq!(
            session.play_computer_turn(turn),
            Err(MoveError::StaleTurn { issued: 0, current: 1 })
        );
        assert_eq!(session.state().board(), &Board::new());
        assert_eq!(session.current_player(), Player::A);
    }

    #[test]
    fn test_stale_turn_from_old_game_cannot_play_in_new_one() {
        let mut session = session(true);
        session.apply_move(0).unwrap();
        let old_turn = session.pending_computer_turn().unwrap();

        session.restart();
        session.apply_move(8).unwrap();
        assert!(session.play_computer_turn(old_turn).is_err());

        let fresh = session.pending_computer_turn().unwrap();
        assert_eq!(fresh.generation(), 1);
        assert_eq!(session.play_computer_turn(fresh).unwrap().index, 4);
    }

    #[test]
    fn test_opponent_mode_change_restarts() {
        let mut session = session(true);
        session.apply_move(0).unwrap();
        session.set_computer_enabled(false);
        assert!(!session.computer_enabled());
        assert_eq!(session.generation(), 1);
        assert_eq!(session.state().board(), &Board::new());
        assert!(session.is_accepting_human_input());
    }

    #[test]
    fn test_computer_blocks_open_row() {
        let mut session = session(true);
        session.apply_move(0).unwrap();
        session.computer_move().unwrap(); // 4
        session.apply_move(1).unwrap();
        let block = session.computer_move().unwrap();
        assert_eq!(block.index, 2);
        assert_eq!(block.reason, Some(MoveReason::Block));
    }

    #[test]
    fn test_computer_completes_its_line() {
        let mut session = session(true);
        session.apply_move(0).unwrap();
        session.computer_move().unwrap(); // center
        session.apply_move(8).unwrap();
        let corner = session.computer_move().unwrap(); // first free corner is 2
        assert_eq!(corner.index, 2);
        assert_eq!(corner.reason, Some(MoveReason::Corner));
        session.apply_move(3).unwrap(); // leaves 2-4-6 for B
        let win = session.computer_move().unwrap();
        assert_eq!(win.index, 6);
        assert_eq!(win.status, GameStatus::Won(Player::B));
        assert!(!session.is_accepting_human_input());
        assert_eq!(session.apply_move(5), Err(MoveError::GameOver));
        assert_eq!(session.pending_computer_turn(), None);
    }

    #[test]
    fn test_seeded_sessions_agree() {
        let mut first = GameSession::with_seed(true, Some(11));
        let mut second = GameSession::with_seed(true, Some(11));
        for session in [&mut first, &mut second] {
            session.apply_move(4).unwrap();
            session.computer_move().unwrap();
        }
        assert_eq!(first.state().board(), second.state().board());
        assert_eq!(first.seed(), 11);
    }
}
