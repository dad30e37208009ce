use std::io::Write;

use common::games::tictactoe::{BOARD_SIZE, GameObserver, GameStatus, Player, WinningLine};
use common::log;
use ringbuffer::{AllocRingBuffer, RingBuffer};

use crate::constants::EVENT_LOG_SIZE;

/// Text rendering of the board. Redraws after every status change.
pub struct ConsoleBoard<W: Write> {
    out: W,
    cells: [Option<Player>; BOARD_SIZE],
    status_line: String,
    winning_line: Option<WinningLine>,
    event_log: AllocRingBuffer<String>,
}

impl<W: Write> ConsoleBoard<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            cells: [None; BOARD_SIZE],
            status_line: String::new(),
            winning_line: None,
            event_log: AllocRingBuffer::new(EVENT_LOG_SIZE),
        }
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.out
    }

    #[cfg(test)]
    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    #[cfg(test)]
    pub fn events(&self) -> Vec<String> {
        self.event_log.iter().cloned().collect()
    }

    /// Prints a one-off line below the board without touching game state.
    pub fn notice(&mut self, message: &str) {
        if let Err(err) = writeln!(self.out, "{}", message) {
            log!("Failed to write to console: {}", err);
        }
    }

    pub fn render(&self) -> String {
        let mut rows = Vec::with_capacity(3);
        for row in 0..3 {
            let cells: Vec<String> = (0..3)
                .map(|col| self.render_cell(row * 3 + col))
                .collect();
            rows.push(cells.join("│"));
        }

        let mut text = rows.join("\n───┼───┼───\n");
        text.push_str("\n\n");
        text.push_str(&self.status_line);
        text.push('\n');

        for event in self.event_log.iter() {
            text.push_str("  · ");
            text.push_str(event);
            text.push('\n');
        }
        text
    }

    fn render_cell(&self, index: usize) -> String {
        let highlighted = self
            .winning_line
            .is_some_and(|line| line.contains(index));
        match (self.cells[index], highlighted) {
            (Some(player), true) => format!("[{}]", player.symbol()),
            (Some(player), false) => format!(" {} ", player.symbol()),
            (None, _) => format!(" {} ", index + 1),
        }
    }

    fn redraw(&mut self) {
        let frame = self.render();
        let result = writeln!(self.out, "\n{}", frame).and_then(|_| self.out.flush());
        if let Err(err) = result {
            log!("Failed to draw board: {}", err);
        }
    }
}

impl<W: Write> GameObserver for ConsoleBoard<W> {
    fn on_status_changed(&mut self, status: GameStatus, current_player: Player) {
        self.status_line = status.message(current_player);
        self.redraw();
    }

    fn on_cell_filled(&mut self, index: usize, player: Player) {
        self.cells[index] = Some(player);
        self.event_log
            .enqueue(format!("{} {} took cell {}", player.symbol(), player, index + 1));
    }

    fn on_game_won(&mut self, winner: Player, line: WinningLine) {
        self.winning_line = Some(line);
        let [a, b, c] = line.cells;
        self.event_log.enqueue(format!(
            "{} completed {}-{}-{}",
            winner,
            a + 1,
            b + 1,
            c + 1
        ));
        self.redraw();
    }

    fn on_board_cleared(&mut self) {
        self.cells = [None; BOARD_SIZE];
        self.winning_line = None;
        self.event_log.clear();
    }
}
