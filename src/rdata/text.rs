//! Text record data (TXT, HINFO) and the two-name MINFO record.

use super::{read_character_string, write_character_string};
use crate::error::{Error, Result};
use crate::name::{read_name, Name, NameWriter};
use crate::wire::{WireReader, WireWriter};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// TXT record - text strings (RFC 1035).
///
/// One or more character-strings, each up to 255 bytes, together filling
/// the RDATA exactly. Used for SPF, DKIM, domain verification, and
/// arbitrary annotations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TXT {
    /// The character-strings.
    strings: SmallVec<[Vec<u8>; 2]>,
}

impl TXT {
    /// Creates a TXT record from the given strings.
    pub fn new(strings: impl IntoIterator<Item = impl Into<Vec<u8>>>) -> Self {
        Self {
            strings: strings.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a TXT record holding a single string.
    pub fn from_string(s: impl Into<Vec<u8>>) -> Self {
        Self {
            strings: smallvec::smallvec![s.into()],
        }
    }

    /// Returns the character-strings.
    pub fn strings(&self) -> &[Vec<u8>] {
        &self.strings
    }

    /// Returns all strings concatenated.
    ///
    /// Protocols like SPF treat the concatenation as the semantic value.
    pub fn data(&self) -> Vec<u8> {
        self.strings.iter().flatten().copied().collect()
    }

    /// Returns the concatenated data as a UTF-8 string if valid.
    pub fn text(&self) -> Option<String> {
        String::from_utf8(self.data()).ok()
    }

    /// Parses a TXT record from its RDATA bytes.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::malformed("TXT", "at least one character-string required"));
        }

        let mut strings = SmallVec::new();
        let mut pos = 0;
        while pos < data.len() {
            strings.push(read_character_string(data, &mut pos, "TXT")?.to_vec());
        }
        Ok(Self { strings })
    }

    /// Writes the TXT record RDATA.
    pub fn write_to(&self, writer: &mut WireWriter) -> Result<()> {
        if self.strings.is_empty() {
            return Err(Error::malformed("TXT", "at least one character-string required"));
        }
        for s in &self.strings {
            write_character_string(writer, s)?;
        }
        Ok(())
    }
}

impl fmt::Display for TXT {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for s in &self.strings {
            if !first {
                write!(f, " ")?;
            }
            first = false;

            write!(f, "\"")?;
            for &byte in s {
                if byte == b'"' || byte == b'\\' {
                    write!(f, "\\{}", byte as char)?;
                } else if byte.is_ascii_graphic() || byte == b' ' {
                    write!(f, "{}", byte as char)?;
                } else {
                    write!(f, "\\{byte:03}")?;
                }
            }
            write!(f, "\"")?;
        }
        Ok(())
    }
}

/// HINFO record - host information (RFC 1035).
///
/// Two character-strings: CPU type and operating system. Not compressible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HINFO {
    /// CPU type.
    cpu: Vec<u8>,
    /// Operating system.
    os: Vec<u8>,
}

impl HINFO {
    /// Creates a new HINFO record.
    pub fn new(cpu: impl Into<Vec<u8>>, os: impl Into<Vec<u8>>) -> Self {
        Self {
            cpu: cpu.into(),
            os: os.into(),
        }
    }

    /// Returns the CPU type.
    pub fn cpu(&self) -> &[u8] {
        &self.cpu
    }

    /// Returns the operating system.
    pub fn os(&self) -> &[u8] {
        &self.os
    }

    /// Parses an HINFO record from its RDATA bytes.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut pos = 0;
        let cpu = read_character_string(data, &mut pos, "HINFO")?.to_vec();
        let os = read_character_string(data, &mut pos, "HINFO")?.to_vec();

        if pos != data.len() {
            return Err(Error::malformed(
                "HINFO",
                format!("{} trailing bytes after OS string", data.len() - pos),
            ));
        }
        Ok(Self { cpu, os })
    }

    /// Writes the HINFO record RDATA.
    pub fn write_to(&self, writer: &mut WireWriter) -> Result<()> {
        write_character_string(writer, &self.cpu)?;
        write_character_string(writer, &self.os)
    }
}

impl fmt::Display for HINFO {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" \"{}\"",
            String::from_utf8_lossy(&self.cpu),
            String::from_utf8_lossy(&self.os)
        )
    }
}

/// MINFO record - mailbox information (RFC 1035).
///
/// Two domain names: the responsible mailbox and the error mailbox.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MINFO {
    /// Mailbox responsible for the mailing list or mailbox.
    rmailbx: Name,
    /// Mailbox receiving error messages.
    emailbx: Name,
}

impl MINFO {
    /// Creates a new MINFO record.
    pub fn new(rmailbx: Name, emailbx: Name) -> Self {
        Self { rmailbx, emailbx }
    }

    /// Returns the responsible mailbox.
    #[inline]
    pub fn rmailbx(&self) -> &Name {
        &self.rmailbx
    }

    /// Returns the error mailbox.
    #[inline]
    pub fn emailbx(&self) -> &Name {
        &self.emailbx
    }

    /// Parses an MINFO record at the reader's current position.
    pub fn parse(reader: &mut WireReader<'_>) -> Result<Self> {
        let rmailbx = read_name(reader)?;
        let emailbx = read_name(reader)?;
        Ok(Self { rmailbx, emailbx })
    }

    /// Writes the MINFO record RDATA with compression.
    pub fn write_to(&self, writer: &mut WireWriter, names: &mut NameWriter) -> Result<()> {
        names.write_name(&self.rmailbx, writer)?;
        names.write_name(&self.emailbx, writer)
    }
}

impl fmt::Display for MINFO {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.rmailbx, self.emailbx)
    }
}
