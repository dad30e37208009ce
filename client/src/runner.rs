use std::io::Write;
use std::time::Duration;

use common::games::tictactoe::{ComputerTurn, TicTacToeController};
use common::games::{ChoiceSource, EffectsBackend};
use common::log;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::Instant;

use crate::console_ui::ConsoleBoard;
use crate::input::{Command, HELP, parse_command};

/// Feeds input lines into the controller until quit or end of input.
/// Computer replies wait for `delay`; human input arriving in between is
/// rejected by the session. A reply still pending at end of input is
/// played before returning.
pub async fn run_game<W, E, R, I>(
    controller: &mut TicTacToeController<ConsoleBoard<W>, E, R>,
    input: I,
    delay: Duration,
) -> std::io::Result<()>
where
    W: Write,
    E: EffectsBackend,
    R: ChoiceSource,
    I: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut pending: Option<ComputerTurn> = None;
    let sleep = tokio::time::sleep(delay);
    tokio::pin!(sleep);

    controller.start();

    loop {
        tokio::select! {
            () = &mut sleep, if pending.is_some() => {
                if let Some(turn) = pending.take() {
                    controller.on_computer_turn(turn);
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }

                match parse_command(&line) {
                    Ok(Command::Cell(index)) => {
                        if controller.session().status().is_over() {
                            controller.observer_mut().notice("Game over, press r to play again");
                        } else if !controller.session().is_accepting_human_input() {
                            controller.observer_mut().notice("Wait for your turn");
                        }
                        if let Some(turn) = controller.on_cell_activated(index) {
                            pending = Some(turn);
                            sleep.as_mut().reset(Instant::now() + delay);
                        }
                    }
                    Ok(Command::Restart) => controller.on_restart_requested(),
                    Ok(Command::ToggleComputer) => {
                        let enabled = !controller.session().computer_enabled();
                        controller.on_opponent_mode_changed(enabled);
                    }
                    Ok(Command::Help) => controller.observer_mut().notice(HELP),
                    Ok(Command::Quit) => {
                        pending = None;
                        break;
                    }
                    Err(message) => controller.observer_mut().notice(&message),
                }
            }
        }
    }

    if let Some(turn) = pending {
        sleep.await;
        controller.on_computer_turn(turn);
    }

    log!("Leaving game at generation {}", controller.session().generation());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::{Cell, GameSession, GameStatus, Player};
    use common::games::{NoEffects, ScriptedChoices};
    use tokio::io::BufReader;

    type Controller = TicTacToeController<ConsoleBoard<Vec<u8>>, NoEffects, ScriptedChoices>;

    fn controller(computer_enabled: bool) -> Controller {
        let session = GameSession::new(computer_enabled, ScriptedChoices::default());
        TicTacToeController::new(session, ConsoleBoard::new(Vec::new()), NoEffects)
    }

    async fn run_script(controller: &mut Controller, script: &str) {
        let input = BufReader::new(script.as_bytes());
        run_game(controller, input, Duration::from_millis(500))
            .await
            .unwrap();
    }

    fn cell(controller: &Controller, index: usize) -> Cell {
        controller.session().state().board().get(index).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_input_during_computer_delay_is_rejected() {
        let mut controller = controller(true);
        run_script(&mut controller, "1\n2\n").await;

        assert_eq!(cell(&controller, 0), Cell::Taken(Player::A));
        assert_eq!(cell(&controller, 1), Cell::Empty);
        assert_eq!(cell(&controller, 4), Cell::Taken(Player::B));
        let output = String::from_utf8(controller.observer().output().clone()).unwrap();
        assert!(output.contains("Wait for your turn"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_drops_scheduled_reply() {
        let mut controller = controller(true);
        run_script(&mut controller, "5\nr\n").await;

        assert_eq!(controller.session().state().board().empty_indices().len(), 9);
        assert_eq!(controller.session().current_player(), Player::A);
        assert_eq!(controller.session().generation(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_two_player_game_to_a_win() {
        let mut controller = controller(false);
        run_script(&mut controller, "c\nc\n1\n5\n2\n8\n3\n4\n").await;

        assert_eq!(controller.session().status(), GameStatus::Won(Player::A));
        assert_eq!(controller.observer().status_line(), "Heart has won!");
        assert_eq!(cell(&controller, 3), Cell::Empty);
    }

    #[tokio::test(start_paused = true)]
    async fn test_bad_input_is_reported() {
        let mut controller = controller(false);
        run_script(&mut controller, "banana\n0\nh\n").await;

        let output = String::from_utf8(controller.observer().output().clone()).unwrap();
        assert!(output.contains("Unknown command 'banana'"));
        assert!(output.contains("There is no cell 0"));
        assert!(output.contains(HELP));
        assert_eq!(controller.session().state().board().empty_indices().len(), 9);
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_skips_pending_reply() {
        let mut controller = controller(true);
        run_script(&mut controller, "1\nq\n3\n").await;

        assert_eq!(cell(&controller, 4), Cell::Empty);
        assert_eq!(cell(&controller, 2), Cell::Empty);
    }
}
