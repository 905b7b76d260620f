//! DNS resource records.
//!
//! The generic record layout is a name, TYPE, CLASS, TTL, and a
//! length-prefixed RDATA:
//!
//! ```text
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! /                      NAME                     /
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                      TYPE                     |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                     CLASS                     |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                      TTL                      |
//! |                                               |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                   RDLENGTH                    |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! /                     RDATA                     /
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! ```
//!
//! The OPT pseudo-record (TYPE 41) steals the CLASS and TTL slots for EDNS
//! control fields, so the parser peeks at the TYPE before interpreting
//! them. [`Record`] keeps the two layouts apart.

use crate::class::{Class, RecordClass};
use crate::edns::OptRecord;
use crate::error::{Error, Result};
use crate::name::{read_name, Name, NameWriter};
use crate::rdata::{RData, A, AAAA, CNAME, MX, TXT};
use crate::rtype::{RecordType, Type};
use crate::wire::{WireReader, WireWriter};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// A resource record in the standard (non-OPT) layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceRecord {
    /// The owner name.
    pub name: Name,
    /// The record TYPE.
    pub rtype: Type,
    /// The record CLASS.
    pub class: Class,
    /// Time to live in seconds.
    pub ttl: i32,
    /// The record data; its variant corresponds to `rtype` when built
    /// through the constructors here.
    pub rdata: RData,
}

impl ResourceRecord {
    /// Creates a record of the TYPE matching `rdata`, in the Internet
    /// class.
    pub fn new(name: Name, ttl: i32, rdata: RData) -> Self {
        Self {
            rtype: rdata.rtype(),
            class: Class::Known(RecordClass::IN),
            name,
            ttl,
            rdata,
        }
    }

    /// Creates an A record.
    pub fn a(name: Name, ttl: i32, address: std::net::Ipv4Addr) -> Self {
        Self::new(name, ttl, RData::A(A::new(address)))
    }

    /// Creates an AAAA record.
    pub fn aaaa(name: Name, ttl: i32, address: std::net::Ipv6Addr) -> Self {
        Self::new(name, ttl, RData::AAAA(AAAA::new(address)))
    }

    /// Creates a CNAME record.
    pub fn cname(name: Name, ttl: i32, target: Name) -> Self {
        Self::new(name, ttl, RData::CNAME(CNAME::new(target)))
    }

    /// Creates an MX record.
    pub fn mx(name: Name, ttl: i32, preference: u16, exchange: Name) -> Self {
        Self::new(name, ttl, RData::MX(MX::new(preference, exchange)))
    }

    /// Creates a TXT record from a single string.
    pub fn txt(name: Name, ttl: i32, text: impl Into<Vec<u8>>) -> Self {
        Self::new(name, ttl, RData::TXT(TXT::from_string(text)))
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.name, self.ttl, self.class, self.rtype, self.rdata
        )
    }
}

/// One entry of a record section: either a standard record or the OPT
/// pseudo-record with its overlaid layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Record {
    /// A record in the standard layout.
    Standard(ResourceRecord),
    /// An EDNS OPT pseudo-record.
    Opt(OptRecord),
}

impl Record {
    /// Returns the owner name; the OPT pseudo-record has none stored
    /// (its owner is always the root).
    pub fn name(&self) -> Option<&Name> {
        match self {
            Self::Standard(rr) => Some(&rr.name),
            Self::Opt(_) => None,
        }
    }

    /// Returns the record TYPE.
    pub fn rtype(&self) -> Type {
        match self {
            Self::Standard(rr) => rr.rtype,
            Self::Opt(_) => Type::Known(RecordType::OPT),
        }
    }

    /// Returns the standard record, if this is one.
    pub fn as_standard(&self) -> Option<&ResourceRecord> {
        match self {
            Self::Standard(rr) => Some(rr),
            Self::Opt(_) => None,
        }
    }

    /// Returns the OPT record, if this is one.
    pub fn as_opt(&self) -> Option<&OptRecord> {
        match self {
            Self::Standard(_) => None,
            Self::Opt(opt) => Some(opt),
        }
    }

    /// Parses a record at the reader's current position.
    ///
    /// The TYPE decides how the two fixed slots after it are read: as
    /// CLASS and TTL for standard records, or as the EDNS payload size and
    /// control bits for OPT.
    pub fn parse(reader: &mut WireReader<'_>) -> Result<Self> {
        let name = read_name(reader)?;
        let rtype_value = reader.read_u16()?;

        if rtype_value == RecordType::OPT.to_u16() {
            if !name.is_root() {
                debug!(owner = %name, "OPT record with non-root owner name");
            }
            let udp_size = reader.read_u16()?;
            let ttl_bits = reader.read_u32()?;
            let rdlength = reader.read_u16()?;
            let rdata = reader.read_bytes(usize::from(rdlength))?;
            return Ok(Self::Opt(OptRecord::parse(udp_size, ttl_bits, rdata)?));
        }

        let rtype = Type::from_u16(rtype_value);
        if matches!(rtype, Type::Unknown(_)) {
            trace!(rtype = rtype_value, "unknown record type, keeping RDATA opaque");
        }

        let class = Class::from_u16(reader.read_u16()?);
        let ttl = reader.read_u32()? as i32;
        let rdlength = reader.read_u16()?;
        let rdata = RData::parse(reader, rtype, class, rdlength)?;

        Ok(Self::Standard(ResourceRecord {
            name,
            rtype,
            class,
            ttl,
            rdata,
        }))
    }

    /// Writes the record, threading the message's compression dictionary.
    ///
    /// RDLENGTH is not knowable up front once names compress, so a
    /// placeholder is written, the RDATA serialized, and the true length
    /// patched back in.
    pub fn write_to(&self, writer: &mut WireWriter, names: &mut NameWriter) -> Result<()> {
        match self {
            Self::Standard(rr) => {
                names.write_name(&rr.name, writer)?;
                writer.write_u16(rr.rtype.to_u16());
                writer.write_u16(rr.class.to_u16());
                writer.write_u32(rr.ttl as u32);

                let rdlength_at = writer.len();
                writer.write_u16(0);
                rr.rdata.write_to(writer, names)?;
                Self::patch_rdlength(writer, rdlength_at, &rr.rtype.to_string())?;
            }
            Self::Opt(opt) => {
                writer.write_u8(0); // root owner name
                writer.write_u16(RecordType::OPT.to_u16());
                writer.write_u16(opt.udp_size);
                writer.write_u32(opt.ttl_bits());

                let rdlength_at = writer.len();
                writer.write_u16(0);
                opt.write_options(writer)?;
                Self::patch_rdlength(writer, rdlength_at, "OPT")?;
            }
        }
        Ok(())
    }

    /// Back-patches the RDLENGTH placeholder at `rdlength_at`.
    fn patch_rdlength(writer: &mut WireWriter, rdlength_at: usize, rtype: &str) -> Result<()> {
        let rdlength = writer.len() - rdlength_at - 2;
        if rdlength > usize::from(u16::MAX) {
            return Err(Error::malformed(
                rtype,
                format!("RDATA of {rdlength} bytes exceeds 65535"),
            ));
        }
        writer.patch_u16(rdlength_at, rdlength as u16);
        Ok(())
    }

    /// Serializes the record standalone, with a fresh dictionary.
    pub fn to_wire(&self) -> Result<Bytes> {
        let mut writer = WireWriter::new(64);
        let mut names = NameWriter::new();
        self.write_to(&mut writer, &mut names)?;
        Ok(writer.freeze())
    }
}

impl From<ResourceRecord> for Record {
    fn from(rr: ResourceRecord) -> Self {
        Self::Standard(rr)
    }
}

impl From<OptRecord> for Record {
    fn from(opt: OptRecord) -> Self {
        Self::Opt(opt)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard(rr) => write!(f, "{rr}"),
            Self::Opt(opt) => write!(f, "{opt}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edns::EdnsOption;
    use crate::rdata::Unknown;
    use std::net::Ipv4Addr;
    use std::str::FromStr;

    #[test]
    fn test_a_record_wire() {
        let rr = ResourceRecord::a(
            Name::from_str("example.com").unwrap(),
            300,
            Ipv4Addr::new(192, 0, 2, 1),
        );

        let wire = Record::from(rr).to_wire().unwrap();
        assert_eq!(
            wire.as_ref(),
            &[
                7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 3, b'c', b'o', b'm', 0, // name
                0x00, 0x01, // TYPE=A
                0x00, 0x01, // CLASS=IN
                0x00, 0x00, 0x01, 0x2C, // TTL=300
                0x00, 0x04, // RDLENGTH=4
                192, 0, 2, 1,
            ]
        );
    }

    #[test]
    fn test_record_roundtrip() {
        let original = Record::from(ResourceRecord::mx(
            Name::from_str("example.com").unwrap(),
            3600,
            10,
            Name::from_str("mail.example.com").unwrap(),
        ));

        let wire = original.to_wire().unwrap();
        let mut reader = WireReader::new(&wire);
        let parsed = Record::parse(&mut reader).unwrap();

        assert_eq!(parsed, original);
        assert_eq!(reader.position(), wire.len());
    }

    #[test]
    fn test_rdlength_patching_variable_rdata() {
        let rr = ResourceRecord::txt(Name::from_str("t.example").unwrap(), 60, "hello world");
        let wire = Record::from(rr).to_wire().unwrap();

        // Name (11) + type/class/ttl (8) = 19; RDLENGTH sits at 19..21.
        let rdlength = u16::from_be_bytes([wire[19], wire[20]]);
        assert_eq!(usize::from(rdlength), 1 + 11);
        assert_eq!(wire.len(), 21 + usize::from(rdlength));
    }

    #[test]
    fn test_unknown_type_preserved() {
        // TYPE 65280 with a 3-byte opaque payload.
        let mut wire = Vec::new();
        wire.extend_from_slice(&[1, b'x', 0]); // x.
        wire.extend_from_slice(&0xFF00u16.to_be_bytes());
        wire.extend_from_slice(&1u16.to_be_bytes()); // IN
        wire.extend_from_slice(&60u32.to_be_bytes());
        wire.extend_from_slice(&3u16.to_be_bytes());
        wire.extend_from_slice(&[0xAA, 0xBB, 0xCC]);

        let mut reader = WireReader::new(&wire);
        let record = Record::parse(&mut reader).unwrap();

        let rr = record.as_standard().unwrap();
        assert_eq!(rr.rtype, Type::Unknown(0xFF00));
        assert_eq!(rr.rdata, RData::Unknown(Unknown::new(0xFF00, vec![0xAA, 0xBB, 0xCC])));

        // Re-encoding an unknown writes the same bytes back.
        let reencoded = record.to_wire().unwrap();
        assert_eq!(reencoded.as_ref(), &wire[..]);
    }

    #[test]
    fn test_negative_ttl_roundtrip() {
        // TTLs are i32 in the model; the sign bit survives the wire.
        let rr = ResourceRecord::a(
            Name::from_str("x.example").unwrap(),
            -1,
            Ipv4Addr::new(10, 0, 0, 1),
        );
        let wire = Record::from(rr.clone()).to_wire().unwrap();

        let mut reader = WireReader::new(&wire);
        let parsed = Record::parse(&mut reader).unwrap();
        assert_eq!(parsed.as_standard().unwrap().ttl, -1);
    }

    #[test]
    fn test_opt_record_roundtrip() {
        let mut opt = OptRecord::new();
        opt.udp_size = 4096;
        opt.ext_rcode = 1;
        opt.dnssec_ok = true;
        opt.options.push(EdnsOption::new(10, vec![1, 2, 3, 4, 5, 6, 7, 8]));

        let record = Record::from(opt.clone());
        let wire = record.to_wire().unwrap();

        // Fixed part: root(1) + type(2) + class-slot(2) + ttl-slot(4) + rdlength(2).
        assert_eq!(wire[0], 0);
        assert_eq!(u16::from_be_bytes([wire[1], wire[2]]), 41);
        assert_eq!(u16::from_be_bytes([wire[3], wire[4]]), 4096);

        let mut reader = WireReader::new(&wire);
        let parsed = Record::parse(&mut reader).unwrap();
        assert_eq!(parsed.as_opt().unwrap(), &opt);
    }

    #[test]
    fn test_truncated_record() {
        let wire = [0u8, 0x00, 0x01, 0x00]; // name + half a TYPE/CLASS
        let mut reader = WireReader::new(&wire);
        assert!(matches!(
            Record::parse(&mut reader),
            Err(Error::TruncatedInput { .. })
        ));
    }

    #[test]
    fn test_rdlength_beyond_message() {
        let mut wire = Vec::new();
        wire.extend_from_slice(&[0]); // root name
        wire.extend_from_slice(&1u16.to_be_bytes());
        wire.extend_from_slice(&1u16.to_be_bytes());
        wire.extend_from_slice(&0u32.to_be_bytes());
        wire.extend_from_slice(&200u16.to_be_bytes()); // claims 200 bytes
        wire.extend_from_slice(&[1, 2, 3]);

        let mut reader = WireReader::new(&wire);
        assert!(matches!(
            Record::parse(&mut reader),
            Err(Error::TruncatedInput { .. })
        ));
    }
}
