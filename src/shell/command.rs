//! Shell Command Parsing
//!
//! Parses one text line into a [`Command`]. Keywords are case-insensitive;
//! coordinates may be separated by whitespace or commas.

use thiserror::Error;

use crate::vector::Norm;

/// Reasons a line could not be parsed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("invalid number: {0}")]
    Number(String),

    #[error("{0}")]
    Norm(String),

    #[error("unknown command: {0}. Type 'help' for available commands.")]
    Unknown(String),
}

/// Parsed shell command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Insert a vector into the set
    Insert { values: Vec<f64> },

    /// Element by insertion index
    Get { index: usize },

    /// First element matching a sample
    Find { values: Vec<f64> },

    /// Remove element by index
    Erase { index: usize },

    /// Remove every element matching a sample
    Remove { values: Vec<f64> },

    Size,
    Dim,
    List,
    Clear,

    /// Keep a deep copy of the set
    Save,

    /// Replace the set with the saved copy
    Restore,

    /// Change the default norm
    SetNorm(Norm),

    /// Change the default tolerance
    SetTolerance(f64),

    /// Bind a named vector
    Let { name: String, values: Vec<f64> },

    Add { lhs: String, rhs: String },
    Sub { lhs: String, rhs: String },
    Dot { lhs: String, rhs: String },
    Scale { name: String, factor: f64 },

    /// All three norms of an inline vector
    Norms { values: Vec<f64> },

    /// Recent diagnostics
    Log,

    /// Current defaults
    Config,
}

impl Command {
    /// Parse a single input line
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let parts: Vec<&str> = input.split_whitespace().collect();

        if parts.is_empty() {
            return Err(ParseError::Empty);
        }

        let cmd = parts[0].to_uppercase();
        let args = &parts[1..];

        match cmd.as_str() {
            "INSERT" => Ok(Command::Insert {
                values: values(args, "INSERT <x1> <x2> ...")?,
            }),

            "GET" => Ok(Command::Get {
                index: index(args, "GET <index>")?,
            }),

            "FIND" => Ok(Command::Find {
                values: values(args, "FIND <x1> <x2> ...")?,
            }),

            "ERASE" => Ok(Command::Erase {
                index: index(args, "ERASE <index>")?,
            }),

            "REMOVE" => Ok(Command::Remove {
                values: values(args, "REMOVE <x1> <x2> ...")?,
            }),

            "SIZE" => Ok(Command::Size),
            "DIM" => Ok(Command::Dim),
            "LIST" => Ok(Command::List),
            "CLEAR" => Ok(Command::Clear),
            "SAVE" => Ok(Command::Save),
            "RESTORE" => Ok(Command::Restore),
            "LOG" => Ok(Command::Log),
            "CONFIG" => Ok(Command::Config),

            "NORM" => {
                let [kind] = args else {
                    return Err(ParseError::Usage("NORM <l1|l2|linf>"));
                };
                kind.parse::<Norm>()
                    .map(Command::SetNorm)
                    .map_err(ParseError::Norm)
            }

            "TOL" => {
                let [value] = args else {
                    return Err(ParseError::Usage("TOL <tolerance>"));
                };
                Ok(Command::SetTolerance(number(value)?))
            }

            "LET" => {
                const USAGE: &str = "LET <name> <x1> <x2> ...";
                let Some((name, rest)) = args.split_first() else {
                    return Err(ParseError::Usage(USAGE));
                };
                Ok(Command::Let {
                    name: name.to_string(),
                    values: values(rest, USAGE)?,
                })
            }

            "ADD" => {
                let (lhs, rhs) = pair(args, "ADD <a> <b>")?;
                Ok(Command::Add { lhs, rhs })
            }

            "SUB" => {
                let (lhs, rhs) = pair(args, "SUB <a> <b>")?;
                Ok(Command::Sub { lhs, rhs })
            }

            "DOT" => {
                let (lhs, rhs) = pair(args, "DOT <a> <b>")?;
                Ok(Command::Dot { lhs, rhs })
            }

            "SCALE" => {
                let [name, factor] = args else {
                    return Err(ParseError::Usage("SCALE <a> <factor>"));
                };
                Ok(Command::Scale {
                    name: name.to_string(),
                    factor: number(factor)?,
                })
            }

            "NORMS" => Ok(Command::Norms {
                values: values(args, "NORMS <x1> <x2> ...")?,
            }),

            _ => Err(ParseError::Unknown(cmd)),
        }
    }
}

fn number(token: &str) -> Result<f64, ParseError> {
    token
        .parse::<f64>()
        .map_err(|_| ParseError::Number(token.to_string()))
}

fn index(args: &[&str], usage: &'static str) -> Result<usize, ParseError> {
    let [token] = args else {
        return Err(ParseError::Usage(usage));
    };
    token
        .parse::<usize>()
        .map_err(|_| ParseError::Number(token.to_string()))
}

fn values(args: &[&str], usage: &'static str) -> Result<Vec<f64>, ParseError> {
    let values = args
        .iter()
        .flat_map(|arg| arg.split(','))
        .filter(|piece| !piece.is_empty())
        .map(number)
        .collect::<Result<Vec<f64>, ParseError>>()?;
    if values.is_empty() {
        return Err(ParseError::Usage(usage));
    }
    Ok(values)
}

fn pair(args: &[&str], usage: &'static str) -> Result<(String, String), ParseError> {
    match args {
        [lhs, rhs] => Ok((lhs.to_string(), rhs.to_string())),
        _ => Err(ParseError::Usage(usage)),
    }
}
