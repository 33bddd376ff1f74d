//! Parsing of terminal input lines into form events.

use enrollment_lib::error::FieldError;
use enrollment_lib::model::Field;
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  set <field> <value>   change a field (username, address, email, phone, gender, dob, courses)
  submit                validate and register
  reset                 clear the form
  show                  print the form
  help                  show this help
  quit                  exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { field: Field, value: String },
    Submit,
    Reset,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Type a command, or 'help' for a list")]
    Empty,
    #[error("Unknown command '{0}', try 'help'")]
    Unknown(String),
    #[error("Usage: set <field> <value>")]
    MissingField,
    #[error(transparent)]
    Field(#[from] FieldError),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));

        match verb {
            "" => Err(CommandError::Empty),
            "set" => {
                let rest = rest.trim_start();
                let (name, value) = rest.split_once(' ').unwrap_or((rest, ""));
                if name.is_empty() {
                    return Err(CommandError::MissingField);
                }
                Ok(Command::Set {
                    field: name.parse()?,
                    value: value.trim_start().to_string(),
                })
            }
            "submit" => Ok(Command::Submit),
            "reset" => Ok(Command::Reset),
            "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set_keeps_inner_spaces() {
        assert_eq!(
            Command::parse("set username  John  Doe"),
            Ok(Command::Set {
                field: Field::Username,
                value: "John  Doe".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_set_without_value_clears() {
        assert_eq!(
            Command::parse("set gender"),
            Ok(Command::Set {
                field: Field::Gender,
                value: String::new(),
            })
        );
    }

    #[test]
    fn test_parse_set_unknown_field() {
        assert_eq!(
            Command::parse("set nickname Bob"),
            Err(CommandError::Field(FieldError::unknown("nickname")))
        );
        assert_eq!(Command::parse("set"), Err(CommandError::MissingField));
    }

    #[test]
    fn test_parse_verbs() {
        assert_eq!(Command::parse("  submit "), Ok(Command::Submit));
        assert_eq!(Command::parse("reset"), Ok(Command::Reset));
        assert_eq!(Command::parse("exit"), Ok(Command::Quit));
        assert_eq!(Command::parse(""), Err(CommandError::Empty));
        assert_eq!(
            Command::parse("register"),
            Err(CommandError::Unknown("register".to_string()))
        );
    }
}
