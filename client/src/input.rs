#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based cell index.
    Cell(usize),
    Restart,
    ToggleComputer,
    Help,
    Quit,
}

pub const HELP: &str = "1-9 place a mark (left to right, top to bottom), r restart, c toggle computer, h help, q quit";

pub fn parse_command(line: &str) -> Result<Command, String> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "r" | "restart" => return Ok(Command::Restart),
        "c" | "computer" => return Ok(Command::ToggleComputer),
        "h" | "help" | "?" => return Ok(Command::Help),
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    match trimmed.parse::<usize>() {
        Ok(number @ 1..=9) => Ok(Command::Cell(number - 1)),
        Ok(number) => Err(format!("There is no cell {}, pick 1-9", number)),
        Err(_) => Err(format!("Unknown command '{}' ({})", trimmed, HELP)),
    }
}
