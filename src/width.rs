//! Display-width measurement, safe encoding, truncation, and the
//! raw/export emitters used by the rest of the engine.
//!
//! `display_width` is modeled as `Option<usize>` rather than a sentinel
//! magic number. For valid UTF-8 `&str` input, the width is always
//! computable, so `None` doesn't occur in practice here.

use std::io::{self, Write};

use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthChar;

/// Display width, in terminal cells, that a control-byte escape (`\xHH`)
/// occupies once rendered.
const ESCAPE_WIDTH: usize = 4;

fn char_display_width(ch: char) -> usize {
    if ch.is_control() {
        ESCAPE_WIDTH
    } else {
        UnicodeWidthChar::width(ch).unwrap_or(0)
    }
}

/// Display width only, same width accounting as [`safe_encode`] but
/// without allocating the encoded copy.
pub fn safe_width(data: &str) -> Option<usize> {
    Some(data.chars().map(char_display_width).sum())
}

/// Replace non-printable characters with `\xHH` hex escapes, returning the
/// encoded text and its display width in terminal cells.
pub fn safe_encode(data: &str) -> (String, Option<usize>) {
    let mut out = String::with_capacity(data.len());
    let mut width = 0usize;

    for ch in data.chars() {
        if ch.is_control() {
            let cp = ch as u32;
            if cp <= 0xFF {
                out.push_str(&format!("\\x{:02x}", cp));
                width += ESCAPE_WIDTH;
            } else {
                let mut buf = [0u8; 4];
                for b in ch.encode_utf8(&mut buf).bytes() {
                    out.push_str(&format!("\\x{:02x}", b));
                    width += ESCAPE_WIDTH;
                }
            }
        } else {
            out.push(ch);
            width += UnicodeWidthChar::width(ch).unwrap_or(0);
        }
    }

    (out, Some(width))
}

/// Trim `data` to at most `max_width` display cells, returning the
/// truncated text and the width it actually achieved (which may be less
/// than `max_width` when the boundary falls inside a wide character).
pub fn truncate(data: &str, max_width: usize) -> (String, usize) {
    let (truncated, width) = data.unicode_truncate(max_width);
    (truncated.to_string(), width)
}

/// Emit `data` as-is, dropping any embedded NUL bytes ("fputs-nonblank").
pub fn fputs_nonblank<W: Write>(data: &str, out: &mut W) -> io::Result<()> {
    for ch in data.chars() {
        if ch == '\0' {
            continue;
        }
        write!(out, "{}", ch)?;
    }
    Ok(())
}

fn needs_shell_quoting(data: &str) -> bool {
    data.is_empty()
        || data.chars().any(|c| {
            c.is_whitespace()
                || matches!(
                    c,
                    '\'' | '"'
                        | '`'
                        | '$'
                        | '\\'
                        | ';'
                        | '|'
                        | '&'
                        | '('
                        | ')'
                        | '<'
                        | '>'
                        | '*'
                        | '?'
                        | '['
                        | ']'
                        | '#'
                        | '~'
                        | '='
                        | '!'
                        | '{'
                        | '}'
                )
        })
}

/// Emit `data` quoted for shell-safe reuse ("fputs-quoted"), used by
/// export mode's `KEY=VALUE` pairs. Data containing no shell metacharacters
/// is emitted bare.
pub fn fputs_quoted<W: Write>(data: &str, out: &mut W) -> io::Result<()> {
    if !needs_shell_quoting(data) {
        return write!(out, "{}", data);
    }

    write!(out, "'")?;
    for ch in data.chars() {
        if ch == '\'' {
            write!(out, "'\\''")?;
        } else {
            write!(out, "{}", ch)?;
        }
    }
    write!(out, "'")
}
