//! # `morse` main library
//!
//! This library translates between plain text and Morse code.
//!
//! ## Architecture
//!
//! * `codec::symbols` holds the bijection between characters and Morse patterns
//! * `codec` encodes and decodes whole strings on top of the symbol table
//! * `commands` runs the CLI subcommands, choosing the input source and output sink
//!
//! ## Notation
//!
//! Each character becomes a pattern of dots and dashes.  Patterns are separated by
//! a single space, and the space between words is written as `/`, e.g.
//! `HI MOM` becomes `.... .. / -- --- --`.
//!
//! The supported characters are the letters (either case), the digits, and
//! `. , ? ! / ( ) & : ; = + - " @ _`.  Anything else is dropped, unless a strict
//! `codec::Codec` is used.

pub mod codec;
pub mod commands;

pub use codec::{encode,decode,Codec};

type DYNERR = Box<dyn std::error::Error>;
type STDRESULT = Result<(),Box<dyn std::error::Error>>;
