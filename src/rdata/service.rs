//! Service record data (SRV, CAA).

use crate::error::{Error, Result};
use crate::name::{read_name, Name, NameWriter};
use crate::wire::{WireReader, WireWriter};
use serde::{Deserialize, Serialize};
use std::fmt;

/// SRV record - service location (RFC 2782).
///
/// Priority, weight, and port, followed by the target host. The target is
/// serialized with compression, the behavior common in deployed encoders;
/// RFC 2782 itself asks for an uncompressed target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SRV {
    /// Priority (lower is more preferred).
    priority: u16,
    /// Weight for load balancing among equal priorities.
    weight: u16,
    /// TCP/UDP port of the service.
    port: u16,
    /// Target host name.
    target: Name,
}

impl SRV {
    /// Creates a new SRV record.
    pub fn new(priority: u16, weight: u16, port: u16, target: Name) -> Self {
        Self {
            priority,
            weight,
            port,
            target,
        }
    }

    /// Returns the priority.
    #[inline]
    pub const fn priority(&self) -> u16 {
        self.priority
    }

    /// Returns the weight.
    #[inline]
    pub const fn weight(&self) -> u16 {
        self.weight
    }

    /// Returns the port.
    #[inline]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns the target host name.
    #[inline]
    pub fn target(&self) -> &Name {
        &self.target
    }

    /// Returns true if the target is the root, meaning the service is
    /// decidedly not available at this name (RFC 2782).
    pub fn is_unavailable(&self) -> bool {
        self.target.is_root()
    }

    /// Parses an SRV record at the reader's current position.
    pub fn parse(reader: &mut WireReader<'_>) -> Result<Self> {
        let priority = reader.read_u16()?;
        let weight = reader.read_u16()?;
        let port = reader.read_u16()?;
        let target = read_name(reader)?;
        Ok(Self {
            priority,
            weight,
            port,
            target,
        })
    }

    /// Writes the SRV record RDATA.
    pub fn write_to(&self, writer: &mut WireWriter, names: &mut NameWriter) -> Result<()> {
        writer.write_u16(self.priority);
        writer.write_u16(self.weight);
        writer.write_u16(self.port);
        names.write_name(&self.target, writer)
    }
}

impl fmt::Display for SRV {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.priority, self.weight, self.port, self.target
        )
    }
}

/// CAA record - certification authority authorization (RFC 8659).
///
/// A flags byte (only bit 7, "issuer critical", is defined; the rest are
/// reserved and preserved as received), a lowercase ASCII property tag,
/// and an opaque property value filling the rest of the RDATA.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CAA {
    /// The raw flags byte.
    flags: u8,
    /// The property tag.
    tag: String,
    /// The property value.
    value: Vec<u8>,
}

impl CAA {
    /// Issuer-critical flag bit.
    const CRITICAL: u8 = 0x80;

    /// Creates a new CAA record. Reserved flag bits are left zero.
    pub fn new(critical: bool, tag: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            flags: if critical { Self::CRITICAL } else { 0 },
            tag: tag.into(),
            value: value.into(),
        }
    }

    /// Creates an `issue` CAA record.
    pub fn issue(issuer: impl Into<String>) -> Self {
        Self::new(false, "issue", issuer.into().into_bytes())
    }

    /// Creates an `issuewild` CAA record.
    pub fn issuewild(issuer: impl Into<String>) -> Self {
        Self::new(false, "issuewild", issuer.into().into_bytes())
    }

    /// Creates an `iodef` CAA record.
    pub fn iodef(uri: impl Into<String>) -> Self {
        Self::new(false, "iodef", uri.into().into_bytes())
    }

    /// Returns true if the issuer-critical flag is set.
    #[inline]
    pub const fn is_critical(&self) -> bool {
        self.flags & Self::CRITICAL != 0
    }

    /// Returns the raw flags byte, including reserved bits.
    #[inline]
    pub const fn flags(&self) -> u8 {
        self.flags
    }

    /// Returns the property tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the property value.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Parses a CAA record from its RDATA bytes.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < 2 {
            return Err(Error::malformed("CAA", "RDATA shorter than 2 bytes"));
        }

        let flags = data[0];
        let tag_len = usize::from(data[1]);
        if 2 + tag_len > data.len() {
            return Err(Error::malformed("CAA", "tag length exceeds RDATA"));
        }

        let tag = std::str::from_utf8(&data[2..2 + tag_len])
            .map_err(|_| Error::malformed("CAA", "tag is not valid UTF-8"))?
            .to_string();
        let value = data[2 + tag_len..].to_vec();

        Ok(Self { flags, tag, value })
    }

    /// Writes the CAA record RDATA.
    ///
    /// The tag must be non-empty lowercase ASCII letters and digits, at
    /// most 255 bytes.
    pub fn write_to(&self, writer: &mut WireWriter) -> Result<()> {
        if self.tag.is_empty() || self.tag.len() > 255 {
            return Err(Error::malformed(
                "CAA",
                format!("tag length {} outside 1..=255", self.tag.len()),
            ));
        }
        if !self
            .tag
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        {
            return Err(Error::malformed("CAA", "tag must be lowercase ASCII"));
        }

        writer.write_u8(self.flags);
        writer.write_u8(self.tag.len() as u8);
        writer.write_bytes(self.tag.as_bytes());
        writer.write_bytes(&self.value);
        Ok(())
    }
}

impl fmt::Display for CAA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} \"{}\"",
            self.flags,
            self.tag,
            String::from_utf8_lossy(&self.value)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_srv_record() {
        let srv = SRV::new(10, 20, 5060, Name::from_str("sip.example.com").unwrap());
        assert_eq!(srv.priority(), 10);
        assert_eq!(srv.weight(), 20);
        assert_eq!(srv.port(), 5060);
        assert!(!srv.is_unavailable());
        assert_eq!(srv.to_string(), "10 20 5060 sip.example.com.");
    }

    #[test]
    fn test_srv_unavailable() {
        let srv = SRV::new(0, 0, 0, Name::root());
        assert!(srv.is_unavailable());
    }

    #[test]
    fn test_srv_roundtrip() {
        let original = SRV::new(1, 2, 443, Name::from_str("h.example.com").unwrap());

        let mut writer = WireWriter::new(32);
        let mut names = NameWriter::new();
        original.write_to(&mut writer, &mut names).unwrap();

        let bytes = writer.as_bytes().to_vec();
        let mut reader = WireReader::new(&bytes);
        let parsed = SRV::parse(&mut reader).unwrap();

        assert_eq!(parsed, original);
        assert_eq!(reader.position(), bytes.len());
    }

    #[test]
    fn test_srv_target_compresses() {
        // Two SRV records against the same target share its labels.
        let srv = SRV::new(0, 5, 443, Name::from_str("h.example.com").unwrap());

        let mut writer = WireWriter::new(64);
        let mut names = NameWriter::new();
        srv.write_to(&mut writer, &mut names).unwrap();
        let first = writer.len();
        srv.write_to(&mut writer, &mut names).unwrap();

        // Second RDATA: three u16 fields plus one 2-byte pointer.
        assert_eq!(writer.len() - first, 8);
    }

    #[test]
    fn test_caa_record() {
        let caa = CAA::issue("letsencrypt.org");
        assert!(!caa.is_critical());
        assert_eq!(caa.tag(), "issue");
        assert_eq!(caa.value(), b"letsencrypt.org");
    }

    #[test]
    fn test_caa_roundtrip() {
        let original = CAA::new(true, "issue", "ca.example.net");

        let mut writer = WireWriter::new(32);
        original.write_to(&mut writer).unwrap();

        let parsed = CAA::parse(writer.as_bytes()).unwrap();
        assert_eq!(parsed, original);
        assert!(parsed.is_critical());
    }

    #[test]
    fn test_caa_reserved_flags_preserved() {
        // Decode keeps reserved bits; re-encode writes them back.
        let rdata = [0x8A, 5, b'i', b's', b's', b'u', b'e', b'x'];
        let caa = CAA::parse(&rdata).unwrap();
        assert_eq!(caa.flags(), 0x8A);
        assert!(caa.is_critical());

        let mut writer = WireWriter::new(16);
        caa.write_to(&mut writer).unwrap();
        assert_eq!(writer.as_bytes(), &rdata);
    }

    #[test]
    fn test_caa_tag_overrun_rejected() {
        // Tag length 10 inside a 6-byte RDATA.
        assert!(matches!(
            CAA::parse(&[0, 10, b'i', b's', b's', b'u']),
            Err(Error::MalformedRData { .. })
        ));
    }

    #[test]
    fn test_caa_tag_case_enforced_on_encode() {
        let caa = CAA::new(false, "Issue", "ca.example.net");
        assert!(matches!(
            caa.write_to(&mut WireWriter::new(32)),
            Err(Error::MalformedRData { .. })
        ));
    }
}
