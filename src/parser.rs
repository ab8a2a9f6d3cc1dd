//! Command line tokenizer and integer argument parser
//!
//! A command line has the shape `<key>[ <arg>]*`. The key is skipped, then
//! exactly as many arguments as the command declares are parsed; anything
//! after them is ignored.

use heapless::{String, Vec};

use crate::error::Error;

/// Size of the input line buffer, including the terminator slot
pub const LINE_LENGTH: usize = 80;

/// Radix of all command arguments
pub const CONSOLE_READ_BASE: u32 = 10;

/// Largest arity of any command
pub const MAX_ARGS: usize = 4;

/// One line of operator input
pub type LineBuffer = String<{ LINE_LENGTH - 1 }>;

/// Parsed arguments of one command invocation
pub type Args = Vec<i32, MAX_ARGS>;

/// Separator characters between the key and arguments
pub const fn is_separator(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Cursor over the bytes of a line
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    const fn new(line: &'a str) -> Self {
        Self {
            bytes: line.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    const fn is_at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn skip_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
    }

    fn rest(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }
}

/// Parse `count` arguments of a command line in [`CONSOLE_READ_BASE`]
pub fn parse_args(line: &str, count: usize) -> Result<Args, Error> {
    parse_args_radix(line, count, CONSOLE_READ_BASE)
}

/// Parse `count` arguments of a command line in the given radix
///
/// Extra arguments are ignored. Fails with [`Error::MissingArguments`] if the
/// line ends early and [`Error::ArgumentFormat`] on a malformed numeral.
pub fn parse_args_radix(line: &str, count: usize, radix: u32) -> Result<Args, Error> {
    if count > MAX_ARGS {
        return Err(Error::TooManyArguments);
    }

    let mut cursor = Cursor::new(line);
    cursor.skip_while(|c| c.is_ascii_alphanumeric());
    cursor.skip_while(is_separator);

    let mut args = Args::new();
    for _ in 0..count {
        if cursor.is_at_end() {
            return Err(Error::MissingArguments);
        }

        let (value, consumed) = parse_int(cursor.rest(), radix)?;
        cursor.pos += consumed;
        args.push(value).map_err(|_| Error::TooManyArguments)?;

        cursor.skip_while(is_separator);
    }

    Ok(args)
}

/// Parse a line consisting of a single numeral, surrounded by optional
/// separators
pub fn parse_value(line: &str, radix: u32) -> Result<i32, Error> {
    let mut cursor = Cursor::new(line);
    cursor.skip_while(is_separator);
    if cursor.is_at_end() {
        return Err(Error::MissingArguments);
    }

    let (value, consumed) = parse_int(cursor.rest(), radix)?;
    cursor.pos += consumed;
    cursor.skip_while(is_separator);
    if !cursor.is_at_end() {
        return Err(Error::ArgumentFormat);
    }

    Ok(value)
}

/// Parse a numeral at the start of `input`
///
/// Accepts an optional sign and, in radix 16, an optional `0x` prefix. The
/// numeral must be followed by a separator or the end of input. Returns the
/// value and the number of bytes consumed.
#[allow(clippy::cast_possible_truncation)]
pub fn parse_int(input: &[u8], radix: u32) -> Result<(i32, usize), Error> {
    if !(2..=36).contains(&radix) {
        return Err(Error::ArgumentFormat);
    }

    let mut pos = 0;
    let negative = match input.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    if radix == 16 && matches!(input.get(pos..pos + 2), Some(b"0x" | b"0X")) {
        pos += 2;
    }

    let digits_start = pos;
    let mut magnitude: i64 = 0;
    while let Some(digit) = input.get(pos).and_then(|&c| char::from(c).to_digit(radix)) {
        magnitude = magnitude
            .checked_mul(i64::from(radix))
            .and_then(|m| m.checked_add(i64::from(digit)))
            .filter(|&m| m <= i64::from(i32::MAX) + 1)
            .ok_or(Error::NumberOverflow)?;
        pos += 1;
    }

    if pos == digits_start {
        return Err(Error::ArgumentFormat);
    }
    if input.get(pos).is_some_and(|&c| !is_separator(c)) {
        return Err(Error::ArgumentFormat);
    }

    let value = if negative { -magnitude } else { magnitude };
    if value > i64::from(i32::MAX) {
        return Err(Error::NumberOverflow);
    }

    Ok((value as i32, pos))
}
