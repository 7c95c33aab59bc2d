//! ## Encode and Decode
//!
//! Input comes from the TEXT argument, from `--file`, or from a pipe, in that order of
//! preference.  Output goes to stdout unless `--output` names a file.

use std::io::Read;
use log::{error,info};
use super::{CommandError,Direction};
use crate::codec::Codec;
use crate::{STDRESULT,DYNERR};

/// Remove one line ending, a text file's terminator is not part of the message
fn strip_line_ending(mut s: String) -> String {
    if s.ends_with('\n') {
        s.pop();
        if s.ends_with('\r') {
            s.pop();
        }
    }
    s
}

fn read_input(cmd: &clap::ArgMatches) -> Result<String,DYNERR> {
    if let Some(path) = cmd.get_one::<String>("file") {
        return match std::fs::read_to_string(path) {
            Ok(s) => {
                info!("read {} bytes from {}",s.len(),path);
                Ok(strip_line_ending(s))
            },
            Err(e) => {
                error!("error opening file {}: {}",path,e);
                Err(Box::new(CommandError::FileNotFound))
            }
        };
    }
    if let Some(text) = cmd.get_one::<String>("text") {
        return Ok(text.to_string());
    }
    if atty::is(atty::Stream::Stdin) {
        error!("no text provided, pass it as an argument, use `--file`, or pipe something in");
        return Err(Box::new(CommandError::NoInput));
    }
    let mut piped = String::new();
    match std::io::stdin().read_to_string(&mut piped) {
        Ok(0) => {
            error!("no text provided and the pipe was empty");
            Err(Box::new(CommandError::NoInput))
        },
        Ok(_) => Ok(strip_line_ending(piped)),
        Err(e) => {
            error!("the piped input could not be interpreted as a string");
            Err(Box::new(e))
        }
    }
}

fn write_output(cmd: &clap::ArgMatches,result: &str) -> STDRESULT {
    match cmd.get_one::<String>("output") {
        Some(path) => match std::fs::write(path,format!("{}\n",result)) {
            Ok(()) => {
                info!("wrote {}",path);
                Ok(())
            },
            Err(e) => {
                error!("cannot open output file {}: {}",path,e);
                Err(Box::new(CommandError::WriteFailed))
            }
        },
        None => {
            println!("{}",result);
            Ok(())
        }
    }
}

/// Run the `encode` or `decode` subcommand
pub fn translate(dir: Direction,cmd: &clap::ArgMatches) -> STDRESULT {
    let mut codec = Codec::new();
    codec.set_strict(cmd.get_flag("strict"));
    let input = read_input(cmd)?;
    let res = match dir {
        Direction::Encode => codec.encode(&input),
        Direction::Decode => codec.decode(&input)
    };
    match res {
        Ok(result) => write_output(cmd,&result),
        Err(e) => {
            error!("{}",e);
            Err(Box::new(e))
        }
    }
}

#[test]
fn line_endings() {
    assert_eq!(strip_line_ending("HI\n".to_string()),"HI");
    assert_eq!(strip_line_ending("HI\r\n".to_string()),"HI");
    assert_eq!(strip_line_ending("HI\n\n".to_string()),"HI\n");
    assert_eq!(strip_line_ending("HI".to_string()),"HI");
    assert_eq!(strip_line_ending(String::new()),"");
}
