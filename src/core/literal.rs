//! Go string literal decoding and encoding.
//!
//! `unquote` mirrors `strconv.Unquote` for string literals: interpreted
//! literals (`"..."`) with escape sequences and raw literals (`` `...` ``).
//! `\x` and octal escapes produce single bytes, so the decoded literal must
//! be valid UTF-8 to be usable as a `String`.
//! `quote` mirrors `strconv.Quote` and is used both for suggested fixes and
//! for quoting key names in messages.

use unicode_general_category::{GeneralCategory, get_general_category};

/// Decode a Go string literal. Returns `None` for malformed input and for
/// literals whose bytes are not valid UTF-8.
pub fn unquote(lit: &str) -> Option<String> {
    if let Some(raw) = lit
        .strip_prefix('`')
        .and_then(|rest| rest.strip_suffix('`'))
    {
        if raw.contains('`') {
            return None;
        }
        // Carriage returns are discarded from raw literals.
        return Some(raw.chars().filter(|&c| c != '\r').collect());
    }

    let body = lit.strip_prefix('"')?.strip_suffix('"')?;
    let mut out: Vec<u8> = Vec::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' | '\n' => return None,
            '\\' => {
                let escape = chars.next()?;
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
                    'x' => out.push(u8::try_from(take_hex(&mut chars, 2)?).ok()?),
                    'u' => push_char(&mut out, char::from_u32(take_hex(&mut chars, 4)?)?),
                    'U' => push_char(&mut out, char::from_u32(take_hex(&mut chars, 8)?)?),
                    '0'..='7' => {
                        let mut value = escape.to_digit(8)?;
                        for _ in 0..2 {
                            value = value * 8 + chars.next()?.to_digit(8)?;
                        }
                        out.push(u8::try_from(value).ok()?);
                    }
                    _ => return None,
                }
            }
            _ => push_char(&mut out, c),
        }
    }

    String::from_utf8(out).ok()
}

fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}

fn take_hex(chars: &mut impl Iterator<Item = char>, digits: usize) -> Option<u32> {
    let mut value = 0u32;
    for _ in 0..digits {
        value = value * 16 + chars.next()?.to_digit(16)?;
    }
    Some(value)
}

/// Encode a string as an interpreted Go string literal.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{b}' => out.push_str("\\v"),
            c if !is_print(c) => {
                let code = c as u32;
                let escaped = if code < 0x80 {
                    format!("\\x{:02x}", code)
                } else if code < 0x10000 {
                    format!("\\u{:04x}", code)
                } else {
                    format!("\\U{:08x}", code)
                };
                out.push_str(&escaped);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Letters, marks, numbers, punctuation, symbols and the ASCII space, as
/// `strconv.IsPrint` defines printable.
fn is_print(c: char) -> bool {
    c == ' '
        || !matches!(
            get_general_category(c),
            GeneralCategory::Control
                | GeneralCategory::Format
                | GeneralCategory::Surrogate
                | GeneralCategory::PrivateUse
                | GeneralCategory::Unassigned
                | GeneralCategory::SpaceSeparator
                | GeneralCategory::LineSeparator
                | GeneralCategory::ParagraphSeparator
        )
}
