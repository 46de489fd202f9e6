//! Go string literal unescaping (interpreted and raw forms).

use std::str::Chars;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnquoteError {
    #[error("not a quoted string")]
    NotQuoted,
    #[error("unterminated string literal")]
    Unterminated,
    #[error("unescaped quote inside literal")]
    UnexpectedQuote,
    #[error("newline inside interpreted literal")]
    Newline,
    #[error("invalid escape sequence \\{0}")]
    InvalidEscape(char),
    #[error("invalid code point {0:#x}")]
    InvalidCodePoint(u32),
    #[error("literal is not valid UTF-8")]
    InvalidUtf8,
}

/// Remove the quotes from a Go string literal and resolve its escapes.
///
/// Unlike Go, byte escapes that leave the result invalid UTF-8 are rejected.
pub fn unquote(literal: &str) -> Result<String, UnquoteError> {
    let quote = literal.chars().next().ok_or(UnquoteError::NotQuoted)?;
    if quote != '"' && quote != '`' {
        return Err(UnquoteError::NotQuoted);
    }
    if literal.len() < 2 || !literal.ends_with(quote) {
        return Err(UnquoteError::Unterminated);
    }
    let body = &literal[1..literal.len() - 1];

    if quote == '`' {
        if body.contains('`') {
            return Err(UnquoteError::UnexpectedQuote);
        }
        return Ok(body.replace('\r', ""));
    }
    unescape(body)
}

fn unescape(body: &str) -> Result<String, UnquoteError> {
    let mut out = Vec::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => return Err(UnquoteError::UnexpectedQuote),
            '\n' => return Err(UnquoteError::Newline),
            '\\' => {
                let escape = chars.next().ok_or(UnquoteError::Unterminated)?;
                match escape {
                    'a' => out.push(0x07),
                    'b' => out.push(0x08),
                    'f' => out.push(0x0c),
                    'n' => out.push(b'\n'),
                    'r' => out.push(b'\r'),
                    't' => out.push(b'\t'),
                    'v' => out.push(0x0b),
                    '\\' => out.push(b'\\'),
                    '"' => out.push(b'"'),
                    '0'..='7' => {
                        let high = escape.to_digit(8).unwrap_or(0);
                        let value = high * 64 + read_digits(&mut chars, 2, 8, escape)?;
                        let byte = u8::try_from(value).map_err(|_| UnquoteError::InvalidEscape(escape))?;
                        out.push(byte);
                    }
                    'x' => {
                        let value = read_digits(&mut chars, 2, 16, escape)?;
                        out.push(value as u8);
                    }
                    'u' | 'U' => {
                        let len = if escape == 'u' { 4 } else { 8 };
                        let value = read_digits(&mut chars, len, 16, escape)?;
                        let decoded =
                            char::from_u32(value).ok_or(UnquoteError::InvalidCodePoint(value))?;
                        push_char(&mut out, decoded);
                    }
                    other => return Err(UnquoteError::InvalidEscape(other)),
                }
            }
            c => push_char(&mut out, c),
        }
    }

    String::from_utf8(out).map_err(|_| UnquoteError::InvalidUtf8)
}

fn read_digits(chars: &mut Chars<'_>, count: usize, radix: u32, escape: char) -> Result<u32, UnquoteError> {
    let mut value = 0u32;
    for _ in 0..count {
        let digit = chars
            .next()
            .and_then(|c| c.to_digit(radix))
            .ok_or(UnquoteError::InvalidEscape(escape))?;
        value = value * radix + digit;
    }
    Ok(value)
}

fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0u8; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}
