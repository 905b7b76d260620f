//! Authority record data (SOA).

use crate::error::Result;
use crate::name::{read_name, Name, NameWriter};
use crate::wire::{WireReader, WireWriter};
use serde::{Deserialize, Serialize};
use std::fmt;

/// SOA record - start of authority (RFC 1035).
///
/// Two domain names (both participating in compression) followed by five
/// 32-bit fields in fixed order: serial, refresh, retry, expire, minimum.
///
/// ```text
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// /                     MNAME                     /
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// /                     RNAME                     /
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                    SERIAL                     |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                    REFRESH                    |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                     RETRY                     |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                    EXPIRE                     |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                    MINIMUM                    |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SOA {
    /// Primary name server for the zone.
    mname: Name,
    /// Mailbox of the responsible person (`@` encoded as the first dot).
    rname: Name,
    /// Zone serial number.
    serial: u32,
    /// Refresh interval in seconds.
    refresh: u32,
    /// Retry interval in seconds.
    retry: u32,
    /// Expire time in seconds.
    expire: u32,
    /// Minimum TTL / negative caching TTL in seconds.
    minimum: u32,
}

impl SOA {
    /// Creates a new SOA record.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        mname: Name,
        rname: Name,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    ) -> Self {
        Self {
            mname,
            rname,
            serial,
            refresh,
            retry,
            expire,
            minimum,
        }
    }

    /// Returns the primary name server.
    #[inline]
    pub fn mname(&self) -> &Name {
        &self.mname
    }

    /// Returns the responsible person's mailbox in DNS form.
    #[inline]
    pub fn rname(&self) -> &Name {
        &self.rname
    }

    /// Returns the zone serial number.
    #[inline]
    pub const fn serial(&self) -> u32 {
        self.serial
    }

    /// Returns the refresh interval in seconds.
    #[inline]
    pub const fn refresh(&self) -> u32 {
        self.refresh
    }

    /// Returns the retry interval in seconds.
    #[inline]
    pub const fn retry(&self) -> u32 {
        self.retry
    }

    /// Returns the expire time in seconds.
    #[inline]
    pub const fn expire(&self) -> u32 {
        self.expire
    }

    /// Returns the minimum / negative caching TTL in seconds.
    #[inline]
    pub const fn minimum(&self) -> u32 {
        self.minimum
    }

    /// Parses an SOA record at the reader's current position.
    pub fn parse(reader: &mut WireReader<'_>) -> Result<Self> {
        let mname = read_name(reader)?;
        let rname = read_name(reader)?;
        Ok(Self {
            mname,
            rname,
            serial: reader.read_u32()?,
            refresh: reader.read_u32()?,
            retry: reader.read_u32()?,
            expire: reader.read_u32()?,
            minimum: reader.read_u32()?,
        })
    }

    /// Writes the SOA record RDATA with compression.
    pub fn write_to(&self, writer: &mut WireWriter, names: &mut NameWriter) -> Result<()> {
        names.write_name(&self.mname, writer)?;
        names.write_name(&self.rname, writer)?;
        writer.write_u32(self.serial);
        writer.write_u32(self.refresh);
        writer.write_u32(self.retry);
        writer.write_u32(self.expire);
        writer.write_u32(self.minimum);
        Ok(())
    }
}

impl fmt::Display for SOA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.mname, self.rname, self.serial, self.refresh, self.retry, self.expire,
            self.minimum
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample() -> SOA {
        SOA::new(
            Name::from_str("ns1.example.com").unwrap(),
            Name::from_str("hostmaster.example.com").unwrap(),
            2024010101,
            7200,
            3600,
            1209600,
            300,
        )
    }

    #[test]
    fn test_soa_accessors() {
        let soa = sample();
        assert_eq!(soa.mname().as_str(), "ns1.example.com.");
        assert_eq!(soa.serial(), 2024010101);
        assert_eq!(soa.minimum(), 300);
    }

    #[test]
    fn test_soa_roundtrip() {
        let original = sample();

        let mut writer = WireWriter::new(64);
        let mut names = NameWriter::new();
        original.write_to(&mut writer, &mut names).unwrap();

        let bytes = writer.as_bytes().to_vec();
        let mut reader = WireReader::new(&bytes);
        let parsed = SOA::parse(&mut reader).unwrap();

        assert_eq!(parsed, original);
        assert_eq!(reader.position(), bytes.len());
    }

    #[test]
    fn test_soa_rname_compresses_against_mname() {
        let soa = sample();

        let mut writer = WireWriter::new(64);
        let mut names = NameWriter::new();
        soa.write_to(&mut writer, &mut names).unwrap();

        // mname is 17 bytes; rname writes "hostmaster" then points back
        // at "example.com." inside mname (offset 4).
        let bytes = writer.as_bytes();
        assert_eq!(&bytes[17..28], &[10, b'h', b'o', b's', b't', b'm', b'a', b's', b't', b'e', b'r']);
        assert_eq!(&bytes[28..30], &[0xC0, 0x04]);
    }
}
