//! Byte sources for the scanner: in-memory strings or arbitrary readers.

use std::io::{self, BufRead, BufReader, Read};

/// A pull source of bytes. The scanner consumes one byte at a time and
/// never looks ahead, so any reader works behind a [`BufReader`].
pub enum Input<'a> {
    Str { bytes: &'a [u8], pos: usize },
    Reader(Box<dyn BufRead + 'a>),
}

impl<'a> Input<'a> {
    /// Source backed by an in-memory string.
    pub fn from_str(s: &'a str) -> Self {
        Input::Str {
            bytes: s.as_bytes(),
            pos: 0,
        }
    }

    /// Source backed by a reader (a file, a socket, an [`io::Cursor`]).
    pub fn from_reader<R: Read + 'a>(reader: R) -> Self {
        Input::Reader(Box::new(BufReader::new(reader)))
    }

    /// Next byte of input, or `None` at end of input.
    pub fn next_char(&mut self) -> io::Result<Option<u8>> {
        match self {
            Input::Str { bytes, pos } => {
                let b = bytes.get(*pos).copied();
                if b.is_some() {
                    *pos += 1;
                }
                Ok(b)
            }
            Input::Reader(reader) => {
                let mut buf = [0u8; 1];
                loop {
                    match reader.read(&mut buf) {
                        Ok(0) => return Ok(None),
                        Ok(_) => return Ok(Some(buf[0])),
                        Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                        Err(e) => return Err(e),
                    }
                }
            }
        }
    }
}
