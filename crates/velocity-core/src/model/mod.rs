//! Records served by the HTTP API and their wire encoding.
//!
//! JSON bodies are written the way Go's `json.Encoder` writes them: compact,
//! fields in declaration order, `<` `>` `&` U+2028 U+2029 escaped as `\uXXXX`,
//! terminated by a single newline.

pub mod user;

pub use user::User;

use std::io;

use bytes::Bytes;
use serde::Serialize;
use serde_json::ser::Formatter;

use crate::error::{Result, VelocityError};

/// Compact formatter that additionally escapes HTML-sensitive characters.
struct HtmlSafeFormatter;

impl Formatter for HtmlSafeFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            let escaped = match c {
                '<' => "\\u003c",
                '>' => "\\u003e",
                '&' => "\\u0026",
                '\u{2028}' => "\\u2028",
                '\u{2029}' => "\\u2029",
                _ => continue,
            };
            writer.write_all(fragment[start..i].as_bytes())?;
            writer.write_all(escaped.as_bytes())?;
            start = i + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Encode `value` as compact, HTML-safe JSON followed by `\n`.
pub fn encode_json_line<T: Serialize + ?Sized>(value: &T) -> Result<Bytes> {
    let mut buf = Vec::with_capacity(128);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, HtmlSafeFormatter);
    value
        .serialize(&mut ser)
        .map_err(|e| VelocityError::Internal(format!("json encode failed: {e}")))?;
    buf.push(b'\n');
    Ok(Bytes::from(buf))
}
