//! Name encoding to wire format with compression.
//!
//! The writer keeps one dictionary per encoded message, mapping each name
//! suffix already emitted to its absolute offset. When a suffix recurs the
//! encoder emits a 2-byte back-pointer (`0xC000 | offset`) instead of the
//! labels, which is what keeps real-world responses inside a UDP datagram.

use super::Name;
use crate::error::{Error, Result};
use crate::wire::WireWriter;
use crate::{MAX_COMPRESSION_OFFSET, MAX_LABEL_LENGTH};
use compact_str::CompactString;
use hashbrown::HashMap;

/// Pointer marker: top two bits of the 16-bit field.
const POINTER_BITS: u16 = 0xC000;

/// Writes domain names with message-scoped compression.
///
/// One `NameWriter` lives exactly as long as one message encode; the
/// dictionary it accumulates is meaningless outside that message. Keys are
/// the exact remaining-suffix strings of the names written, so lookups have
/// exact-match semantics.
#[derive(Debug, Default)]
pub struct NameWriter {
    /// Maps a name suffix (`"example.com."`) to the message offset where
    /// its first label was written.
    table: HashMap<CompactString, u16>,
}

impl NameWriter {
    /// Creates a writer with an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `name` at the writer's current position.
    ///
    /// Every suffix of the name is looked up in the dictionary; on the
    /// first hit a back-pointer is emitted and the name is finished. Labels
    /// actually written register their suffix for later names, as long as
    /// the offset still fits the 14-bit pointer format.
    pub fn write_name(&mut self, name: &Name, writer: &mut WireWriter) -> Result<()> {
        let text = name.as_str();
        if text.is_empty() {
            return Err(Error::EmptyName);
        }
        if text == "." {
            writer.write_u8(0);
            return Ok(());
        }
        debug_assert!(text.ends_with('.'));

        let mut i = 0;
        while i < text.len() {
            let remainder = &text[i..];
            if remainder == "." {
                break;
            }

            if let Some(&offset) = self.table.get(remainder) {
                writer.write_u16(POINTER_BITS | offset);
                return Ok(());
            }

            // Labels are dot-terminated by the Name invariant.
            let label_len = remainder.find('.').unwrap_or(remainder.len());
            debug_assert!(label_len >= 1 && label_len <= MAX_LABEL_LENGTH);

            let position = writer.len();
            if position <= MAX_COMPRESSION_OFFSET {
                self.table
                    .insert(CompactString::from(remainder), position as u16);
            }

            writer.write_u8(label_len as u8);
            writer.write_bytes(&remainder.as_bytes()[..label_len]);
            i += label_len + 1;
        }

        writer.write_u8(0);
        Ok(())
    }
}
