//! Module containing the Morse symbol table
//!
//! The table is a bijection between the supported characters and their patterns.
//! It is built once, on first use, and shared read-only for the rest of the process.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Token that stands for the space between words
pub const WORD_SEPARATOR: &str = "/";
/// No pattern in the table is longer than this
pub const MAX_PATTERN_LEN: usize = 6;

const MORSE_MAP: [(char,&str);52] = [
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('"', ".-..-."),
    ('@', ".--.-."),
    ('_', "..--.-")
];

/// Bidirectional lookup between characters and Morse patterns
pub struct SymbolTable {
    to_morse: HashMap<char,&'static str>,
    to_char: HashMap<&'static str,char>
}

impl SymbolTable {
    fn new() -> Self {
        Self {
            to_morse: HashMap::from(MORSE_MAP),
            to_char: MORSE_MAP.iter().map(|(c,p)| (*p,*c)).collect()
        }
    }
    /// The process-wide table
    pub fn global() -> &'static SymbolTable {
        static TABLE: OnceLock<SymbolTable> = OnceLock::new();
        TABLE.get_or_init(SymbolTable::new)
    }
    /// Pattern for `c`, letters in either case, or None if `c` is not supported
    pub fn pattern(&self,c: char) -> Option<&'static str> {
        self.to_morse.get(&c.to_ascii_uppercase()).copied()
    }
    /// Character for an exact pattern, letters are always upper case
    pub fn character(&self,pattern: &str) -> Option<char> {
        self.to_char.get(pattern).copied()
    }
    pub fn len(&self) -> usize {
        MORSE_MAP.len()
    }
    pub fn is_empty(&self) -> bool {
        MORSE_MAP.is_empty()
    }
    /// Iterate over (character,pattern) in alphabet, digit, punctuation order
    pub fn iter(&self) -> impl Iterator<Item = (char,&'static str)> {
        MORSE_MAP.iter().copied()
    }
}
