//! Reading test vectors from a text file of bit strings.
//!
//! Each line holds one message as ASCII `0`/`1` characters. Blank lines and
//! lines starting with `#` are skipped, whitespace inside a line is ignored,
//! and any other character ends the line's bit string. The expected CRC is
//! read MSB first from `width` bits at the CRC offset; the message is the bit
//! range `start..end`.

use std::path::Path;

use bfcrc_engine::{BitMessage, TestVector};

/// Errors that can occur when reading a message file.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The file could not be read.
    #[error("failed to read message file: {0}")]
    Io(#[from] std::io::Error),

    /// A line has fewer bits than the offsets require.
    #[error("line {line}: has {len} bits but at least {needed} are required")]
    TooShort {
        /// One-based line number.
        line: usize,
        /// Bits found on the line.
        len: usize,
        /// Bits needed by the CRC offset or message range.
        needed: usize,
    },

    /// The message range ends before it starts.
    #[error("line {line}: message range {start}..{end} is inverted")]
    InvertedRange {
        /// One-based line number.
        line: usize,
        /// First message bit.
        start: usize,
        /// One past the last message bit.
        end: usize,
    },
}

/// How each line is split into message and expected CRC.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputOptions {
    /// CRC width in bits.
    pub width: u8,
    /// Bit offset of the CRC; `None` takes the last `width` bits of the line.
    pub offs_crc: Option<usize>,
    /// First message bit.
    pub start: usize,
    /// One past the last message bit; `None` means the CRC offset.
    pub end: Option<usize>,
}

/// Extracts the bits of one line, or `None` for blank and comment lines.
pub fn parse_line(line: &str) -> Option<BitMessage> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    let mut bits = BitMessage::new();
    for c in trimmed.chars() {
        match c {
            '0' => bits.push(false),
            '1' => bits.push(true),
            c if c.is_whitespace() => {}
            _ => break,
        }
    }
    Some(bits)
}

/// Parses every data line of `text` into a test vector.
pub fn parse_vectors(text: &str, options: &InputOptions) -> Result<Vec<TestVector>, InputError> {
    let width = options.width as usize;
    let mut vectors = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let Some(bits) = parse_line(line) else {
            continue;
        };
        let line = index + 1;
        let len = bits.len();
        let too_short = |needed| InputError::TooShort { line, len, needed };

        let offs_crc = match options.offs_crc {
            Some(offs) => offs,
            None => len.checked_sub(width).ok_or(too_short(width))?,
        };
        let crc = bits
            .read_uint(offs_crc, options.width)
            .ok_or(too_short(offs_crc + width))?;

        let end = options.end.unwrap_or(offs_crc);
        if end < options.start {
            return Err(InputError::InvertedRange {
                line,
                start: options.start,
                end,
            });
        }
        let message = bits.slice(options.start..end).ok_or(too_short(end))?;
        vectors.push(TestVector::new(message, crc as u32));
    }
    Ok(vectors)
}

/// Reads and parses a message file.
pub fn read_vectors(path: &Path, options: &InputOptions) -> Result<Vec<TestVector>, InputError> {
    let text = std::fs::read_to_string(path)?;
    parse_vectors(&text, options)
}
