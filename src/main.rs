//! # Command Line Interface
//!
//! The command tree is in `cli.rs`, subcommands are run by the `commands` module.

use std::str::FromStr;
use env_logger;
use log::error;
use morse::commands;
use morse::commands::{CommandError,Direction};

mod cli;

fn main() -> Result<(),Box<dyn std::error::Error>>
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let main_cmd = cli::build_cli();
    let args = cli::expand_clustered_mode(std::env::args_os());
    let matches = match main_cmd.clone().try_get_matches_from(args) {
        Ok(m) => m,
        Err(e) => {
            e.print()?;
            // help and version are not errors, anything else exits with 1
            if e.use_stderr() {
                return Err(Box::new(CommandError::InvalidCommand));
            }
            return Ok(());
        }
    };

    match matches.subcommand() {
        Some(("completions",cmd)) => commands::completions::generate(main_cmd,cmd),
        Some((name,cmd)) => match Direction::from_str(name) {
            Ok(dir) => commands::translate::translate(dir,cmd),
            Err(e) => {
                error!("unexpected subcommand `{}`",name);
                Err(Box::new(e))
            }
        },
        None => {
            error!("No subcommand was found, try `morse --help`");
            Err(Box::new(CommandError::InvalidCommand))
        }
    }
}
