//! Newline-delimited JSON output
//!
//! Records are serialized one per line with a trailing `\n` after every
//! record, including the last one. The file as a whole is not a JSON document.
//!
//! The default [`JsonStyle`] matches the layout consumers of the original
//! dumps already parse: `", "` between members, `": "` after keys, and every
//! character outside printable ASCII escaped as lowercase `\uXXXX`.

use serde::Serialize;
use serde_json::ser::Formatter;
use std::io::{self, Write};

/// Layout options for each serialized line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonStyle {
    /// Put a space after `,` and `:` separators
    pub spaced: bool,
    /// Escape non-ASCII and DEL characters as `\uXXXX`
    pub ascii_only: bool,
}

impl Default for JsonStyle {
    fn default() -> Self {
        Self {
            spaced: true,
            ascii_only: true,
        }
    }
}

impl JsonStyle {
    /// Compact separators, raw UTF-8 strings (serde_json's own layout)
    pub fn compact() -> Self {
        Self {
            spaced: false,
            ascii_only: false,
        }
    }
}

struct StyledFormatter {
    style: JsonStyle,
}

impl StyledFormatter {
    fn separator(&self) -> &'static [u8] {
        if self.style.spaced {
            b", "
        } else {
            b","
        }
    }
}

impl Formatter for StyledFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(self.separator())
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(self.separator())
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if self.style.spaced {
            writer.write_all(b": ")
        } else {
            writer.write_all(b":")
        }
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if !self.style.ascii_only || fragment.bytes().all(is_printable_ascii) {
            return writer.write_all(fragment.as_bytes());
        }

        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() && is_printable_ascii(ch as u8) {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

// Control characters never reach a fragment; serde_json escapes them itself.
fn is_printable_ascii(byte: u8) -> bool {
    byte.is_ascii() && byte != 0x7f
}

/// Streams serializable records to `W`, one JSON object per line
pub struct NdjsonWriter<W: Write> {
    inner: W,
    style: JsonStyle,
    records: usize,
}

impl<W: Write> NdjsonWriter<W> {
    pub fn new(inner: W, style: JsonStyle) -> Self {
        Self {
            inner,
            style,
            records: 0,
        }
    }

    /// Serializes `record` followed by a newline
    pub fn write_record<T: Serialize>(&mut self, record: &T) -> io::Result<()> {
        let formatter = StyledFormatter { style: self.style };
        let mut serializer = serde_json::Serializer::with_formatter(&mut self.inner, formatter);
        record.serialize(&mut serializer).map_err(io::Error::from)?;
        self.inner.write_all(b"\n")?;
        self.records += 1;
        Ok(())
    }

    /// Number of records written so far
    pub fn records(&self) -> usize {
        self.records
    }

    /// Flushes buffered output and hands back the underlying writer
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
