//! # CLI Subcommands
//!
//! Contains modules that run the subcommands.

pub mod translate;
pub mod completions;

use std::str::FromStr;

#[derive(thiserror::Error,Debug)]
pub enum CommandError {
    #[error("Command could not be interpreted")]
    InvalidCommand,
    #[error("No text or file was provided")]
    NoInput,
    #[error("File not found")]
    FileNotFound,
    #[error("Output file could not be written")]
    WriteFailed,
    #[error("Direction is unknown")]
    UnknownDirection
}

/// Which way the translation goes, named after the subcommand that selects it.
#[derive(PartialEq,Clone,Copy,Debug)]
pub enum Direction {
    Encode,
    Decode
}

impl FromStr for Direction {
    type Err = CommandError;
    fn from_str(s: &str) -> Result<Self,Self::Err> {
        match s {
            "encode" => Ok(Self::Encode),
            "decode" => Ok(Self::Decode),
            _ => Err(CommandError::UnknownDirection)
        }
    }
}
