//! # Morse codec
//!
//! Encoding turns text into space separated Morse patterns, with `/` standing for
//! the space between words.  Decoding reverses this.  Letters are case-insensitive
//! going in and always upper case coming out.
//!
//! By default the codec is lossy: characters with no pattern, and tokens that are not
//! patterns, are dropped from the output.  A `Codec` can be put in strict mode, in which
//! case the first such unit is returned as an `Error`.

pub mod symbols;

use thiserror::Error;
use log::{debug,info};
use symbols::{SymbolTable,MAX_PATTERN_LEN,WORD_SEPARATOR};

#[derive(Error,Debug,PartialEq,Eq)]
pub enum Error {
    #[error("character {ch:?} at position {pos} has no Morse pattern")]
    UnsupportedCharacter { ch: char, pos: usize },
    #[error("token {token:?} at position {pos} is not a Morse pattern")]
    UnrecognizedPattern { token: String, pos: usize },
    #[error("token {token:?} at position {pos} is longer than any Morse pattern")]
    PatternTooLong { token: String, pos: usize }
}

/// Handles encoding and decoding of Morse code
pub struct Codec {
    table: &'static SymbolTable,
    strict: bool
}

impl Codec {
    pub fn new() -> Self {
        Self {
            table: SymbolTable::global(),
            strict: false
        }
    }
    /// In strict mode an unsupported character or unrecognized token is an error
    pub fn set_strict(&mut self,strict: bool) {
        self.strict = strict;
    }
    pub fn is_strict(&self) -> bool {
        self.strict
    }
    /// Map each character to a token, `pos` counts characters
    fn encode_units<'a>(&'a self,text: &'a str) -> impl Iterator<Item = Result<&'static str,Error>> + 'a {
        text.chars().enumerate().map(move |(pos,ch)| {
            if ch==' ' {
                return Ok(WORD_SEPARATOR);
            }
            self.table.pattern(ch).ok_or(Error::UnsupportedCharacter { ch, pos })
        })
    }
    /// Map each token to a character, `pos` counts non-empty tokens
    fn decode_units<'a>(&'a self,morse: &'a str) -> impl Iterator<Item = Result<char,Error>> + 'a {
        morse.split(|c: char| c.is_ascii_whitespace())
            .filter(|tok| !tok.is_empty())
            .enumerate()
            .map(move |(pos,tok)| {
                if tok==WORD_SEPARATOR {
                    return Ok(' ');
                }
                if tok.chars().count() > MAX_PATTERN_LEN {
                    return Err(Error::PatternTooLong { token: tok.to_string(), pos });
                }
                self.table.character(tok).ok_or_else(|| Error::UnrecognizedPattern { token: tok.to_string(), pos })
            })
    }
    /// Lossy units are logged and dropped, unless we are strict
    fn keep<T>(&self,unit: Result<T,Error>) -> Result<Option<T>,Error> {
        match unit {
            Ok(x) => Ok(Some(x)),
            Err(e) if self.strict => Err(e),
            Err(e) => {
                info!("skipping: {}",e);
                Ok(None)
            }
        }
    }
    /// Encode text as Morse, tokens are separated by a single space.
    /// Returns an empty string if there is nothing to encode.
    pub fn encode(&self,text: &str) -> Result<String,Error> {
        let mut tokens: Vec<&str> = Vec::new();
        for unit in self.encode_units(text) {
            if let Some(tok) = self.keep(unit)? {
                tokens.push(tok);
            }
        }
        debug!("encoded {} characters as {} tokens",text.chars().count(),tokens.len());
        Ok(tokens.join(" "))
    }
    /// Decode Morse as text.  Tokens are delimited by any run of whitespace.
    pub fn decode(&self,morse: &str) -> Result<String,Error> {
        let mut text = String::new();
        for unit in self.decode_units(morse) {
            if let Some(c) = self.keep(unit)? {
                text.push(c);
            }
        }
        debug!("decoded {} characters",text.chars().count());
        Ok(text)
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode with the lossy policy, unsupported characters are dropped
pub fn encode(text: &str) -> String {
    // a permissive codec has no error to return
    Codec::new().encode(text).unwrap_or_default()
}

/// Decode with the lossy policy, unrecognized tokens are dropped
pub fn decode(morse: &str) -> String {
    Codec::new().decode(morse).unwrap_or_default()
}
