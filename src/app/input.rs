use petpals_data::{InteractionKind, PetId};
use std::str::FromStr;
use thiserror::Error;

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Click a pet: select, deselect or target it.
    Select(PetId),
    /// Target a pet for the current source.
    Target(PetId),
    Interact(InteractionKind),
    Swap,
    New,
    Show,
    /// Dump the session state as JSON.
    Export,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0} (type `help`)")]
    UnknownCommand(String),
    #[error("`{0}` needs a pet id")]
    MissingId(&'static str),
    #[error("not a pet id: {0}")]
    BadId(String),
    #[error("`{0}` takes no arguments")]
    UnexpectedArgument(String),
}

fn parse_id(verb: &'static str, arg: Option<&str>) -> Result<PetId, InputError> {
    let raw = arg.ok_or(InputError::MissingId(verb))?;
    raw.trim_start_matches('#')
        .parse::<u32>()
        .map(PetId)
        .map_err(|_| InputError::BadId(raw.to_string()))
}

impl FromStr for Command {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(InputError::Empty)?.to_ascii_lowercase();
        let mut arg = words.next();

        let command = match verb.as_str() {
            "select" | "s" => {
                let id = parse_id("select", arg)?;
                arg = words.next();
                Command::Select(id)
            }
            "target" | "t" => {
                let id = parse_id("target", arg)?;
                arg = words.next();
                Command::Target(id)
            }
            "swap" => Command::Swap,
            "new" | "regenerate" => Command::New,
            "show" | "ls" => Command::Show,
            "export" | "json" => Command::Export,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => match other.parse::<InteractionKind>() {
                Ok(kind) => Command::Interact(kind),
                Err(_) => return Err(InputError::UnknownCommand(other.to_string())),
            },
        };
        match arg {
            Some(_) => Err(InputError::UnexpectedArgument(verb)),
            None => Ok(command),
        }
    }
}
