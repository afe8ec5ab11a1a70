use thiserror::Error;

/// A user action typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Genres,
    Filter(String),
    /// 1-based position in the visible list; `None` flips the current state.
    Set { position: usize, checked: Option<bool> },
    SelectAll(bool),
    Summary,
    Export,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error("'{0}' is not a list position")]
    BadPosition(String),
}

pub const HELP: &str = "\
Commands:
  list | ls           show the visible movies
  genres              show the genre filter options
  filter <genre>      show only movies whose genre contains <genre> ('filter All' resets)
  toggle <n>          flip the n-th visible movie
  check <n>           select the n-th visible movie
  uncheck <n>         deselect the n-th visible movie
  all | none          select or deselect every visible movie
  summary             show the selected count and size
  export              write the selected movies to the export file
  help                show this help
  quit | exit         leave";

fn parse_position(raw: Option<&str>, cmd: &'static str) -> Result<usize, ParseError> {
    let raw = raw.ok_or(ParseError::MissingArgument(cmd))?;
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ParseError::BadPosition(raw.to_string())),
    }
}

pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((h, r)) => (h, Some(r.trim()).filter(|r| !r.is_empty())),
        None => (line, None),
    };

    match head.to_ascii_lowercase().as_str() {
        "" => Err(ParseError::Empty),
        "list" | "ls" => Ok(Command::List),
        "genres" => Ok(Command::Genres),
        "filter" => rest
            .map(|g| Command::Filter(g.to_string()))
            .ok_or(ParseError::MissingArgument("filter")),
        "toggle" => Ok(Command::Set { position: parse_position(rest, "toggle")?, checked: None }),
        "check" => Ok(Command::Set { position: parse_position(rest, "check")?, checked: Some(true) }),
        "uncheck" => Ok(Command::Set { position: parse_position(rest, "uncheck")?, checked: Some(false) }),
        "all" => Ok(Command::SelectAll(true)),
        "none" => Ok(Command::SelectAll(false)),
        "summary" => Ok(Command::Summary),
        "export" => Ok(Command::Export),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(ParseError::Unknown(other.to_string())),
    }
}
