use catalog::{controller::Command, services::sort::SortKey};
use models::facet::{FacetField, WILDCARD};
use std::{path::PathBuf, str::FromStr};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  load <path>               load a catalog file, replacing the current one
  filter <field> [value]    set a facet (department, level, credits, instructor); no value means All
  sort <key>                idAZ, idZA, titleAZ, titleZA, semEarliest, semLatest or none
  select <n>                show the details of course n in the list
  facets                    list the options of every facet
  show                      render the current view again
  help                      print this message
  quit | exit               leave the browser
";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    UnknownCommand(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Unknown facet '{0}'. Expected department, level, credits or instructor.")]
    UnknownFacet(String),

    #[error("'{0}' is not a list position")]
    InvalidIndex(String),
}

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Handed straight to the controller
    Catalog(Command),
    /// Read this file, then dispatch its contents
    Load(PathBuf),
    Facets,
    Show,
    Help,
    Quit,
    Empty,
}

pub fn parse_input(line: &str) -> Result<Input, CommandError> {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command.to_ascii_lowercase().as_str() {
        "" => Ok(Input::Empty),
        "load" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "load",
                    argument: "a file path",
                });
            }
            Ok(Input::Load(PathBuf::from(rest)))
        }
        "filter" => parse_filter(rest),
        "sort" => Ok(Input::Catalog(Command::SetSort(SortKey::parse_lenient(rest)))),
        "select" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "select",
                    argument: "a list position",
                });
            }
            // Positions are shown starting at 1
            match rest.parse::<usize>() {
                Ok(position) if position > 0 => {
                    Ok(Input::Catalog(Command::Select(position - 1)))
                }
                _ => Err(CommandError::InvalidIndex(rest.to_string())),
            }
        }
        "facets" => Ok(Input::Facets),
        "show" => Ok(Input::Show),
        "help" | "?" => Ok(Input::Help),
        "quit" | "exit" => Ok(Input::Quit),
        _ => Err(CommandError::UnknownCommand(command.to_string())),
    }
}

/// The value is the rest of the line so names with spaces work
fn parse_filter(rest: &str) -> Result<Input, CommandError> {
    let (field, value) = match rest.split_once(char::is_whitespace) {
        Some((field, value)) => (field, value.trim()),
        None => (rest, ""),
    };
    if field.is_empty() {
        return Err(CommandError::MissingArgument {
            command: "filter",
            argument: "a facet name",
        });
    }

    let field =
        FacetField::from_str(field).map_err(|_| CommandError::UnknownFacet(field.to_string()))?;
    let value = if value.is_empty() { WILDCARD } else { value };

    Ok(Input::Catalog(Command::SetFilter {
        field,
        value: value.to_string(),
    }))
}
