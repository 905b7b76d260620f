//! DNS record data (RDATA) types.
//!
//! Every supported TYPE carries a distinct structured payload, modeled as
//! one arm of the [`RData`] union:
//!
//! - **Address data**: A, AAAA, WKS
//! - **Single domain names**: NS, MD, MF, CNAME, MB, MG, MR, PTR
//! - **Authority data**: SOA
//! - **Text data**: TXT, HINFO, MINFO
//! - **Service data**: SRV, CAA
//! - **Opaque data**: NULL, Unknown
//!
//! Parsing is dispatched by the owning record's TYPE; serializing a
//! variant writes the layout for the TYPE it embodies. Records whose class
//! is not IN keep their RDATA opaque regardless of TYPE, since the layouts
//! above are defined for the Internet class only.

pub mod address;
pub mod authority;
pub mod name;
pub mod service;
pub mod text;
pub mod unknown;

pub use address::{A, AAAA, WKS};
pub use authority::SOA;
pub use name::{CNAME, MB, MD, MF, MG, MR, MX, NS, PTR};
pub use service::{CAA, SRV};
pub use text::{HINFO, MINFO, TXT};
pub use unknown::{Unknown, NULL};

use crate::class::Class;
use crate::error::{Error, Result};
use crate::name::NameWriter;
use crate::rtype::{RecordType, Type};
use crate::wire::{WireReader, WireWriter};
use crate::MAX_CHARACTER_STRING_LENGTH;
use serde::{Deserialize, Serialize};
use std::fmt;

/// DNS record data, keyed by the owning record's TYPE.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum RData {
    /// IPv4 address (A record)
    A(A),
    /// Authoritative name server (NS record)
    NS(NS),
    /// Mail destination (MD record, obsolete)
    MD(MD),
    /// Mail forwarder (MF record, obsolete)
    MF(MF),
    /// Canonical name (CNAME record)
    CNAME(CNAME),
    /// Start of authority (SOA record)
    SOA(SOA),
    /// Mailbox domain name (MB record)
    MB(MB),
    /// Mail group member (MG record)
    MG(MG),
    /// Mail rename domain name (MR record)
    MR(MR),
    /// Opaque payload (NULL record)
    NULL(NULL),
    /// Well-known services (WKS record)
    WKS(WKS),
    /// Domain name pointer (PTR record)
    PTR(PTR),
    /// Host information (HINFO record)
    HINFO(HINFO),
    /// Mailbox information (MINFO record)
    MINFO(MINFO),
    /// Mail exchange (MX record)
    MX(MX),
    /// Text strings (TXT record)
    TXT(TXT),
    /// IPv6 address (AAAA record)
    AAAA(AAAA),
    /// Service location (SRV record)
    SRV(SRV),
    /// Certification authority authorization (CAA record)
    CAA(CAA),
    /// Unknown or non-IN record data, preserved verbatim
    Unknown(Unknown),
}

impl RData {
    /// Parses RDATA at the reader's current position.
    ///
    /// The reader must sit at the first RDATA byte; on success it sits just
    /// past the last one. A parser that would consume more or fewer than
    /// `rdlength` bytes fails with [`Error::MalformedRData`].
    pub fn parse(
        reader: &mut WireReader<'_>,
        rtype: Type,
        class: Class,
        rdlength: u16,
    ) -> Result<Self> {
        let rdlength = usize::from(rdlength);
        let start = reader.position();

        // The RDATA layouts below are defined for the Internet class; any
        // other class travels opaque.
        let known = match rtype.as_known() {
            Some(t) if class.is_internet() => t,
            _ => {
                let data = reader.read_bytes(rdlength)?;
                return Ok(Self::Unknown(Unknown::new(rtype.to_u16(), data)));
            }
        };

        let rdata = match known {
            RecordType::A => Self::A(A::parse(reader.read_bytes(rdlength)?)?),
            RecordType::NS => Self::NS(NS::parse(reader)?),
            RecordType::MD => Self::MD(MD::parse(reader)?),
            RecordType::MF => Self::MF(MF::parse(reader)?),
            RecordType::CNAME => Self::CNAME(CNAME::parse(reader)?),
            RecordType::SOA => Self::SOA(SOA::parse(reader)?),
            RecordType::MB => Self::MB(MB::parse(reader)?),
            RecordType::MG => Self::MG(MG::parse(reader)?),
            RecordType::MR => Self::MR(MR::parse(reader)?),
            RecordType::NULL => Self::NULL(NULL::new(reader.read_bytes(rdlength)?)),
            RecordType::WKS => Self::WKS(WKS::parse(reader.read_bytes(rdlength)?)?),
            RecordType::PTR => Self::PTR(PTR::parse(reader)?),
            RecordType::HINFO => Self::HINFO(HINFO::parse(reader.read_bytes(rdlength)?)?),
            RecordType::MINFO => Self::MINFO(MINFO::parse(reader)?),
            RecordType::MX => Self::MX(MX::parse(reader)?),
            RecordType::TXT => Self::TXT(TXT::parse(reader.read_bytes(rdlength)?)?),
            RecordType::AAAA => Self::AAAA(AAAA::parse(reader.read_bytes(rdlength)?)?),
            RecordType::SRV => Self::SRV(SRV::parse(reader)?),
            RecordType::CAA => Self::CAA(CAA::parse(reader.read_bytes(rdlength)?)?),
            // The record codec handles OPT before RDATA dispatch; an OPT
            // arriving here (wrong section, unexpected class) stays opaque.
            RecordType::OPT => Self::Unknown(Unknown::new(
                RecordType::OPT.to_u16(),
                reader.read_bytes(rdlength)?,
            )),
        };

        let consumed = reader.position() - start;
        if consumed != rdlength {
            return Err(Error::malformed(
                known.name(),
                format!("parser consumed {consumed} of {rdlength} RDATA bytes"),
            ));
        }

        Ok(rdata)
    }

    /// Returns the TYPE this data embodies.
    pub fn rtype(&self) -> Type {
        match self {
            Self::A(_) => Type::Known(RecordType::A),
            Self::NS(_) => Type::Known(RecordType::NS),
            Self::MD(_) => Type::Known(RecordType::MD),
            Self::MF(_) => Type::Known(RecordType::MF),
            Self::CNAME(_) => Type::Known(RecordType::CNAME),
            Self::SOA(_) => Type::Known(RecordType::SOA),
            Self::MB(_) => Type::Known(RecordType::MB),
            Self::MG(_) => Type::Known(RecordType::MG),
            Self::MR(_) => Type::Known(RecordType::MR),
            Self::NULL(_) => Type::Known(RecordType::NULL),
            Self::WKS(_) => Type::Known(RecordType::WKS),
            Self::PTR(_) => Type::Known(RecordType::PTR),
            Self::HINFO(_) => Type::Known(RecordType::HINFO),
            Self::MINFO(_) => Type::Known(RecordType::MINFO),
            Self::MX(_) => Type::Known(RecordType::MX),
            Self::TXT(_) => Type::Known(RecordType::TXT),
            Self::AAAA(_) => Type::Known(RecordType::AAAA),
            Self::SRV(_) => Type::Known(RecordType::SRV),
            Self::CAA(_) => Type::Known(RecordType::CAA),
            Self::Unknown(u) => Type::from_u16(u.type_code()),
        }
    }

    /// Writes this data, threading the message's compression dictionary.
    pub fn write_to(&self, writer: &mut WireWriter, names: &mut NameWriter) -> Result<()> {
        match self {
            Self::A(r) => {
                r.write_to(writer);
                Ok(())
            }
            Self::NS(r) => r.write_to(writer, names),
            Self::MD(r) => r.write_to(writer, names),
            Self::MF(r) => r.write_to(writer, names),
            Self::CNAME(r) => r.write_to(writer, names),
            Self::SOA(r) => r.write_to(writer, names),
            Self::MB(r) => r.write_to(writer, names),
            Self::MG(r) => r.write_to(writer, names),
            Self::MR(r) => r.write_to(writer, names),
            Self::NULL(r) => {
                r.write_to(writer);
                Ok(())
            }
            Self::WKS(r) => {
                r.write_to(writer);
                Ok(())
            }
            Self::PTR(r) => r.write_to(writer, names),
            Self::HINFO(r) => r.write_to(writer),
            Self::MINFO(r) => r.write_to(writer, names),
            Self::MX(r) => r.write_to(writer, names),
            Self::TXT(r) => r.write_to(writer),
            Self::AAAA(r) => {
                r.write_to(writer);
                Ok(())
            }
            Self::SRV(r) => r.write_to(writer, names),
            Self::CAA(r) => r.write_to(writer),
            Self::Unknown(r) => {
                r.write_to(writer);
                Ok(())
            }
        }
    }

    /// Returns the IPv4 address if this is an A record.
    pub fn as_a(&self) -> Option<std::net::Ipv4Addr> {
        match self {
            Self::A(a) => Some(a.address()),
            _ => None,
        }
    }

    /// Returns the IPv6 address if this is an AAAA record.
    pub fn as_aaaa(&self) -> Option<std::net::Ipv6Addr> {
        match self {
            Self::AAAA(aaaa) => Some(aaaa.address()),
            _ => None,
        }
    }

    /// Returns the target name if this is a CNAME record.
    pub fn as_cname(&self) -> Option<&crate::Name> {
        match self {
            Self::CNAME(cname) => Some(cname.target()),
            _ => None,
        }
    }
}

impl fmt::Display for RData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A(r) => write!(f, "{r}"),
            Self::NS(r) => write!(f, "{r}"),
            Self::MD(r) => write!(f, "{r}"),
            Self::MF(r) => write!(f, "{r}"),
            Self::CNAME(r) => write!(f, "{r}"),
            Self::SOA(r) => write!(f, "{r}"),
            Self::MB(r) => write!(f, "{r}"),
            Self::MG(r) => write!(f, "{r}"),
            Self::MR(r) => write!(f, "{r}"),
            Self::NULL(r) => write!(f, "{r}"),
            Self::WKS(r) => write!(f, "{r}"),
            Self::PTR(r) => write!(f, "{r}"),
            Self::HINFO(r) => write!(f, "{r}"),
            Self::MINFO(r) => write!(f, "{r}"),
            Self::MX(r) => write!(f, "{r}"),
            Self::TXT(r) => write!(f, "{r}"),
            Self::AAAA(r) => write!(f, "{r}"),
            Self::SRV(r) => write!(f, "{r}"),
            Self::CAA(r) => write!(f, "{r}"),
            Self::Unknown(r) => write!(f, "{r}"),
        }
    }
}

/// Reads one length-prefixed character-string out of an RDATA slice.
pub(crate) fn read_character_string<'a>(
    data: &'a [u8],
    pos: &mut usize,
    rtype: &'static str,
) -> Result<&'a [u8]> {
    let Some(&len) = data.get(*pos) else {
        return Err(Error::malformed(rtype, "missing character-string"));
    };
    let len = usize::from(len);
    *pos += 1;

    if *pos + len > data.len() {
        return Err(Error::malformed(
            rtype,
            format!("character-string of {len} bytes overruns RDATA"),
        ));
    }
    let string = &data[*pos..*pos + len];
    *pos += len;
    Ok(string)
}

/// Writes one length-prefixed character-string, enforcing the 255-byte cap.
pub(crate) fn write_character_string(writer: &mut WireWriter, data: &[u8]) -> Result<()> {
    if data.len() > MAX_CHARACTER_STRING_LENGTH {
        return Err(Error::CharacterStringTooLong { length: data.len() });
    }
    writer.write_u8(data.len() as u8);
    writer.write_bytes(data);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::RecordClass;

    #[test]
    fn test_non_internet_class_stays_opaque() {
        // An A record in the CHAOS class keeps its 4 bytes opaque.
        let wire = [192, 0, 2, 1];
        let mut reader = WireReader::new(&wire);

        let rdata = RData::parse(
            &mut reader,
            Type::Known(RecordType::A),
            Class::Known(RecordClass::CH),
            4,
        )
        .unwrap();

        match rdata {
            RData::Unknown(u) => {
                assert_eq!(u.type_code(), 1);
                assert_eq!(u.data(), &wire);
            }
            other => panic!("expected opaque rdata, got {other:?}"),
        }
    }

    #[test]
    fn test_rdlength_mismatch_rejected() {
        // An MX with rdlength understating the name bytes that follow.
        let wire = [0, 10, 4, b'm', b'a', b'i', b'l', 0];
        let mut reader = WireReader::new(&wire);

        let result = RData::parse(
            &mut reader,
            Type::Known(RecordType::MX),
            Class::Known(RecordClass::IN),
            4,
        );
        assert!(matches!(result, Err(Error::MalformedRData { .. })));
    }

    #[test]
    fn test_character_string_helpers() {
        let mut writer = WireWriter::new(16);
        write_character_string(&mut writer, b"hello").unwrap();
        assert_eq!(writer.as_bytes(), &[5, b'h', b'e', b'l', b'l', b'o']);

        let mut pos = 0;
        let s = read_character_string(writer.as_bytes(), &mut pos, "TXT").unwrap();
        assert_eq!(s, b"hello");
        assert_eq!(pos, 6);

        let long = vec![0u8; 256];
        assert_eq!(
            write_character_string(&mut writer, &long),
            Err(Error::CharacterStringTooLong { length: 256 })
        );
    }
}
