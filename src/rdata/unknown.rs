//! Opaque record data (NULL, Unknown).

use crate::wire::WireWriter;
use data_encoding::HEXLOWER;
use serde::{Deserialize, Serialize};
use std::fmt;

/// NULL record - opaque payload (RFC 1035).
///
/// Anything up to 65535 bytes, carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NULL {
    /// The payload bytes.
    data: Vec<u8>,
}

impl NULL {
    /// Creates a NULL record around its payload.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }

    /// Returns the payload.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Writes the payload.
    pub fn write_to(&self, writer: &mut WireWriter) {
        writer.write_bytes(&self.data);
    }
}

impl fmt::Display for NULL {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\\# {} {}", self.data.len(), HEXLOWER.encode(&self.data))
    }
}

/// RDATA of an unsupported TYPE or a non-Internet class, preserved as the
/// exact bytes received.
///
/// Decoding never fails on an unknown TYPE; it lands here. Re-encoding
/// writes the stored bytes back verbatim. Rendered in the RFC 3597
/// `\# <length> <hex>` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Unknown {
    /// The TYPE code the data arrived under.
    type_code: u16,
    /// The raw RDATA bytes.
    data: Vec<u8>,
}

impl Unknown {
    /// Creates an unknown-type RDATA value.
    pub fn new(type_code: u16, data: impl Into<Vec<u8>>) -> Self {
        Self {
            type_code,
            data: data.into(),
        }
    }

    /// Returns the TYPE code.
    #[inline]
    pub const fn type_code(&self) -> u16 {
        self.type_code
    }

    /// Returns the raw RDATA.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Writes the raw RDATA back.
    pub fn write_to(&self, writer: &mut WireWriter) {
        writer.write_bytes(&self.data);
    }
}

impl fmt::Display for Unknown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\\# {} {}", self.data.len(), HEXLOWER.encode(&self.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_record() {
        let null = NULL::new(vec![0xDE, 0xAD]);
        assert_eq!(null.data(), &[0xDE, 0xAD]);
        assert_eq!(null.to_string(), "\\# 2 dead");

        let mut writer = WireWriter::new(4);
        null.write_to(&mut writer);
        assert_eq!(writer.as_bytes(), &[0xDE, 0xAD]);
    }

    #[test]
    fn test_unknown_record() {
        let unknown = Unknown::new(65280, vec![1, 2, 3, 4]);
        assert_eq!(unknown.type_code(), 65280);
        assert_eq!(unknown.data(), &[1, 2, 3, 4]);
        assert_eq!(unknown.to_string(), "\\# 4 01020304");
    }

    #[test]
    fn test_unknown_write_verbatim() {
        let unknown = Unknown::new(999, vec![0xCA, 0xFE]);
        let mut writer = WireWriter::new(4);
        unknown.write_to(&mut writer);
        assert_eq!(writer.as_bytes(), &[0xCA, 0xFE]);
    }
}
