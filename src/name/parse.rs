//! Name decoding from wire format.
//!
//! Wire names are sequences of length-prefixed labels terminated by a zero
//! byte, where any label position may instead hold a 2-byte compression
//! pointer (top bits `11`, 14-bit absolute offset) into earlier message
//! bytes (RFC 1035 Section 4.1.4).

use super::Name;
use crate::error::{Error, Result};
use crate::wire::WireReader;
use crate::{MAX_LABEL_LENGTH, MAX_NAME_LENGTH};
use compact_str::CompactString;

/// Reads a domain name at the reader's current position.
///
/// Compression pointers are followed through the reader's own seek; after
/// the name terminates, the reader is left just past the name's bytes at
/// the original position (two bytes past the first pointer, if any), so
/// callers continue reading fixed record fields directly.
///
/// # Malformed input
///
/// - A pointer must target a strictly earlier offset; forward and
///   self-referencing pointers fail with [`Error::InvalidOffset`].
/// - As a defense in depth, the total number of label and pointer steps is
///   bounded by the message length; exceeding it fails with
///   [`Error::CompressionLoop`].
/// - A length byte above 63 that is not a pointer fails with
///   [`Error::LabelTooLong`]; an accumulated textual form beyond 254
///   characters fails with [`Error::NameTooLong`].
pub fn read_name(reader: &mut WireReader<'_>) -> Result<Name> {
    let mut text = CompactString::default();
    let mut return_pos: Option<usize> = None;
    let mut steps = 0usize;

    loop {
        steps += 1;
        if steps > reader.data().len() {
            return Err(Error::CompressionLoop {
                offset: reader.position(),
            });
        }

        let start = reader.position();
        let len = reader.read_u8()?;

        // Compression pointer: top two bits set.
        if len & 0xC0 == 0xC0 {
            let low = reader.read_u8()?;
            let target = usize::from(u16::from_be_bytes([len & 0x3F, low]));

            if target >= start {
                return Err(Error::invalid_offset(start, target));
            }

            // Only the first pointer determines where parsing resumes.
            if return_pos.is_none() {
                return_pos = Some(reader.position());
            }

            reader.seek(target)?;
            continue;
        }

        if len == 0 {
            break;
        }

        let len = usize::from(len);
        if len > MAX_LABEL_LENGTH {
            return Err(Error::LabelTooLong { length: len });
        }

        let label = reader.read_bytes(len)?;
        text.push_str(&String::from_utf8_lossy(label));
        text.push('.');

        if text.len() > MAX_NAME_LENGTH {
            return Err(Error::NameTooLong { length: text.len() });
        }
    }

    if text.is_empty() {
        text.push('.');
    }
    if let Some(pos) = return_pos {
        reader.seek(pos)?;
    }

    Ok(Name::from_decoded(text))
}
