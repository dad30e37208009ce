use crate::games::effects::{EffectsBackend, VICTORY_SOUND};
use crate::games::{ChoiceSource, SessionRng};
use crate::{debug_log, log};
use super::error::MoveError;
use super::observer::GameObserver;
use super::session::{ComputerTurn, GameSession, MoveOutcome};
use super::types::{BOARD_SIZE, GameStatus};

/// Routes input events into a [`GameSession`] and reports the results to
/// the observer and effects backend. Rejected moves never change state.
pub struct TicTacToeController<O, E, R = SessionRng>
where
    O: GameObserver,
    E: EffectsBackend,
    R: ChoiceSource,
{
    session: GameSession<R>,
    observer: O,
    effects: E,
}

impl<O, E, R> TicTacToeController<O, E, R>
where
    O: GameObserver,
    E: EffectsBackend,
    R: ChoiceSource,
{
    pub fn new(session: GameSession<R>, observer: O, effects: E) -> Self {
        Self {
            session,
            observer,
            effects,
        }
    }

    pub fn session(&self) -> &GameSession<R> {
        &self.session
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn effects(&self) -> &E {
        &self.effects
    }

    /// Publishes the current status. Call once before the first input.
    pub fn start(&mut self) {
        self.observer
            .on_status_changed(self.session.status(), self.session.current_player());
    }

    /// Returns the computer turn to schedule, if the move handed the turn
    /// to the computer.
    pub fn on_cell_activated(&mut self, index: usize) -> Option<ComputerTurn> {
        debug_assert!(index < BOARD_SIZE, "cell index {} out of range", index);

        match self.session.apply_move(index) {
            Ok(outcome) => {
                self.report(outcome);
                self.session.pending_computer_turn()
            }
            Err(err) => {
                self.reject(err);
                None
            }
        }
    }

    pub fn on_computer_turn(&mut self, turn: ComputerTurn) {
        match self.session.play_computer_turn(turn) {
            Ok(outcome) => {
                debug_log!(
                    "Computer took cell {} ({:?})",
                    outcome.index,
                    outcome.reason
                );
                self.report(outcome);
            }
            Err(err @ MoveError::StaleTurn { .. }) => debug_log!("{}", err),
            Err(err) => self.reject(err),
        }
    }

    pub fn on_restart_requested(&mut self) {
        self.session.restart();
        self.after_reset();
    }

    pub fn on_opponent_mode_changed(&mut self, computer_enabled: bool) {
        log!(
            "Computer opponent {}",
            if computer_enabled { "enabled" } else { "disabled" }
        );
        self.session.set_computer_enabled(computer_enabled);
        self.after_reset();
    }

    fn after_reset(&mut self) {
        if let Err(err) = self.effects.stop_celebration() {
            log!("Failed to stop celebration: {}", err);
        }
        self.observer.on_board_cleared();
        self.observer
            .on_status_changed(self.session.status(), self.session.current_player());
    }

    fn report(&mut self, outcome: MoveOutcome) {
        self.observer.on_cell_filled(outcome.index, outcome.player);
        self.observer
            .on_status_changed(outcome.status, self.session.current_player());

        match outcome.status {
            GameStatus::Won(winner) => {
                log!("{} won", winner);
                if let Some(line) = self.session.state().winning_line() {
                    self.observer.on_game_won(winner, line);
                }
                self.celebrate();
            }
            GameStatus::Draw => log!("Game ended in a draw"),
            GameStatus::InProgress => {}
        }
    }

    fn celebrate(&mut self) {
        if let Err(err) = self.effects.celebrate() {
            log!("Celebration unavailable: {}", err);
        }
        if let Err(err) = self.effects.play_sound(VICTORY_SOUND) {
            log!("Failed to play {} sound: {}", VICTORY_SOUND, err);
        }
    }

    fn reject(&self, err: MoveError) {
        debug_log!("Move rejected: {}", err);
    }
}
