//! Parsing of terminal input lines.

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the loaded sets.
    Sets,
    /// Start a session on a set.
    Select(String),
    /// Show the current card's hint.
    Hint,
    Help,
    Quit,
    /// Anything else is a guess for the current card.
    Guess(String),
}

/// Parse a line. Lines starting with `:` are commands; everything else is a
/// guess. Returns `None` for blank lines.
pub fn parse_line(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let Some(rest) = trimmed.strip_prefix(':') else {
        return Some(Command::Guess(trimmed.to_string()));
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    let command = match name {
        "sets" => Command::Sets,
        "select" | "s" => Command::Select(arg.to_string()),
        "hint" => Command::Hint,
        "quit" | "q" => Command::Quit,
        _ => Command::Help,
    };
    Some(command)
}

pub const HELP: &str = "\
commands:
  :sets           list flashcard sets
  :select <name>  start a session on a set
  :hint           show the hint for the current card
  :quit           exit
anything else is taken as a guess for the current card";
