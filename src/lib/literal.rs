//! ASCII-only quoted string literals for the manifest.
//!
//! The escaped form uses `'` as the quote unless the text contains `'` and no
//! `"`. Printable ASCII is kept as-is; `\\`, `\n`, `\r`, `\t` and the quote
//! get backslash escapes; other controls and 0x7F..=0xFF become `\xNN`, the
//! rest of the BMP `\uNNNN` and everything above `\UNNNNNNNN`.

use std::fmt::Write as _;

use thiserror::Error;

/// Reasons a literal can fail to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("literal must start with a quote")]
    MissingQuote,

    #[error("literal is not terminated")]
    Unterminated,

    #[error("unknown escape '\\{0}'")]
    UnknownEscape(char),

    #[error("escape '\\{marker}' needs {digits} hex digits")]
    BadHex { marker: char, digits: usize },

    #[error("U+{0:04X} is not a Unicode scalar value")]
    InvalidScalar(u32),

    #[error("unexpected text after closing quote")]
    TrailingText,
}

/// Render `text` as an escaped, quoted, ASCII-only literal.
pub fn escape_literal(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            ' '..='~' => out.push(ch),
            // Writing to a String cannot fail
            c if u32::from(c) <= 0xFF => {
                let _ = write!(out, "\\x{:02x}", u32::from(c));
            }
            c if u32::from(c) <= 0xFFFF => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c => {
                let _ = write!(out, "\\U{:08x}", u32::from(c));
            }
        }
    }
    out.push(quote);
    out
}

/// Parse a literal produced by [`escape_literal`] back into its text.
///
/// The whole input must be one literal; surrounding whitespace is not
/// accepted.
pub fn unescape_literal(literal: &str) -> Result<String, LiteralError> {
    let mut chars = literal.chars();
    let quote = match chars.next() {
        Some(q @ ('\'' | '"')) => q,
        _ => return Err(LiteralError::MissingQuote),
    };

    let mut text = String::new();
    loop {
        let ch = chars.next().ok_or(LiteralError::Unterminated)?;
        if ch == quote {
            break;
        }
        if ch != '\\' {
            text.push(ch);
            continue;
        }

        let marker = chars.next().ok_or(LiteralError::Unterminated)?;
        let decoded = match marker {
            '\\' | '\'' | '"' => marker,
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'x' => hex_escape(&mut chars, marker, 2)?,
            'u' => hex_escape(&mut chars, marker, 4)?,
            'U' => hex_escape(&mut chars, marker, 8)?,
            other => return Err(LiteralError::UnknownEscape(other)),
        };
        text.push(decoded);
    }

    if chars.next().is_some() {
        return Err(LiteralError::TrailingText);
    }
    Ok(text)
}

fn hex_escape(
    chars: &mut std::str::Chars<'_>,
    marker: char,
    digits: usize,
) -> Result<char, LiteralError> {
    let mut value: u32 = 0;
    for _ in 0..digits {
        let digit = chars
            .next()
            .and_then(|c| c.to_digit(16))
            .ok_or(LiteralError::BadHex { marker, digits })?;
        value = (value << 4) | digit;
    }
    char::from_u32(value).ok_or(LiteralError::InvalidScalar(value))
}
