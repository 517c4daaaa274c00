//! Tokenizer for parenthesized prefix expressions.
//!
//! Three-state machine over single bytes pulled from an [`Input`]: outside
//! any token, inside a digit run, or inside a word. Parens are their own
//! tokens and terminate whatever token is in progress; a digit run that
//! hits a non-digit, non-delimiter byte is demoted to a symbol (`12ab` is
//! the symbol `12ab`, not an integer followed by a symbol).

use crate::input::Input;
use std::fmt;
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    OpenParen,
    CloseParen,
    Symbol(String),
    Integer(i64),
}

#[derive(Debug)]
pub enum ScanError {
    Io(io::Error),
    /// A digit run that does not fit in an `i64`.
    IntegerTooLarge,
    /// Symbol bytes that are not valid UTF-8.
    NonUtf8Symbol,
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::Io(e) => write!(f, "input error: {e}"),
            ScanError::IntegerTooLarge => f.write_str("integer literal out of range"),
            ScanError::NonUtf8Symbol => f.write_str("symbol is not valid UTF-8"),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ScanError {
    fn from(e: io::Error) -> Self {
        ScanError::Io(e)
    }
}

enum State {
    Whitespace,
    Number,
    Midword,
}

fn is_whitespace(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

fn integer(buf: &mut Vec<u8>) -> Result<Token, ScanError> {
    let digits = std::mem::take(buf);
    // The number state only ever pushes ASCII digits.
    let s = std::str::from_utf8(&digits).map_err(|_| ScanError::NonUtf8Symbol)?;
    let n = s.parse::<i64>().map_err(|_| ScanError::IntegerTooLarge)?;
    Ok(Token::Integer(n))
}

fn symbol(buf: &mut Vec<u8>) -> Result<Token, ScanError> {
    let bytes = std::mem::take(buf);
    let s = String::from_utf8(bytes).map_err(|_| ScanError::NonUtf8Symbol)?;
    Ok(Token::Symbol(s))
}

/// Tokenize an input source to completion.
pub fn scan(input: &mut Input) -> Result<Vec<Token>, ScanError> {
    let mut tokens = Vec::new();
    let mut buf: Vec<u8> = Vec::new();
    let mut state = State::Whitespace;

    while let Some(ch) = input.next_char()? {
        match state {
            State::Whitespace => match ch {
                b'(' => tokens.push(Token::OpenParen),
                b')' => tokens.push(Token::CloseParen),
                ch if is_whitespace(ch) => {}
                b'0'..=b'9' => {
                    buf.push(ch);
                    state = State::Number;
                }
                _ => {
                    buf.push(ch);
                    state = State::Midword;
                }
            },
            State::Number => match ch {
                b'0'..=b'9' => buf.push(ch),
                b'(' => {
                    tokens.push(integer(&mut buf)?);
                    tokens.push(Token::OpenParen);
                    state = State::Whitespace;
                }
                b')' => {
                    tokens.push(integer(&mut buf)?);
                    tokens.push(Token::CloseParen);
                    state = State::Whitespace;
                }
                ch if is_whitespace(ch) => {
                    tokens.push(integer(&mut buf)?);
                    state = State::Whitespace;
                }
                _ => {
                    buf.push(ch);
                    state = State::Midword;
                }
            },
            State::Midword => match ch {
                b'(' => {
                    tokens.push(symbol(&mut buf)?);
                    tokens.push(Token::OpenParen);
                    state = State::Whitespace;
                }
                b')' => {
                    tokens.push(symbol(&mut buf)?);
                    tokens.push(Token::CloseParen);
                    state = State::Whitespace;
                }
                ch if is_whitespace(ch) => {
                    tokens.push(symbol(&mut buf)?);
                    state = State::Whitespace;
                }
                _ => buf.push(ch),
            },
        }
    }

    // End of input flushes the token in progress.
    match state {
        State::Number => tokens.push(integer(&mut buf)?),
        State::Midword => tokens.push(symbol(&mut buf)?),
        State::Whitespace => {}
    }

    Ok(tokens)
}

/// Tokenize an in-memory string.
pub fn scan_str(s: &str) -> Result<Vec<Token>, ScanError> {
    scan(&mut Input::from_str(s))
}
