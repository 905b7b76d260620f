//! DNS record types.
//!
//! This module defines the TYPE values the codec understands: the RFC 1035
//! set plus AAAA (RFC 3596), SRV (RFC 2782), OPT (RFC 6891), and CAA
//! (RFC 8659). Anything else travels through the [`Type::Unknown`] wrapper
//! with its RDATA preserved verbatim.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;

/// DNS record type with an explicit RDATA layout in this crate.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    IntoPrimitive,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(u16)]
pub enum RecordType {
    /// IPv4 address - RFC 1035
    A = 1,

    /// Authoritative name server - RFC 1035
    NS = 2,

    /// Mail destination (obsolete, use MX) - RFC 1035
    MD = 3,

    /// Mail forwarder (obsolete, use MX) - RFC 1035
    MF = 4,

    /// Canonical name (alias) - RFC 1035
    CNAME = 5,

    /// Start of authority - RFC 1035
    SOA = 6,

    /// Mailbox domain name - RFC 1035
    MB = 7,

    /// Mail group member - RFC 1035
    MG = 8,

    /// Mail rename domain name - RFC 1035
    MR = 9,

    /// Null record (opaque payload) - RFC 1035
    NULL = 10,

    /// Well-known services - RFC 1035
    WKS = 11,

    /// Domain name pointer - RFC 1035
    PTR = 12,

    /// Host information - RFC 1035
    HINFO = 13,

    /// Mailbox information - RFC 1035
    MINFO = 14,

    /// Mail exchange - RFC 1035
    MX = 15,

    /// Text strings - RFC 1035
    TXT = 16,

    /// IPv6 address - RFC 1886 / RFC 3596
    AAAA = 28,

    /// Server selection - RFC 2782
    SRV = 33,

    /// EDNS(0) option pseudo-record - RFC 6891
    OPT = 41,

    /// Certification authority authorization - RFC 8659
    CAA = 257,
}

impl RecordType {
    /// Returns the numeric value of the record type.
    #[inline]
    pub const fn to_u16(self) -> u16 {
        self as u16
    }

    /// Creates a record type from its numeric value.
    #[inline]
    pub fn from_u16(value: u16) -> Option<Self> {
        Self::try_from(value).ok()
    }

    /// Returns true if this is a pseudo-record type rather than DNS data.
    #[inline]
    pub const fn is_pseudo_record(self) -> bool {
        matches!(self, Self::OPT)
    }

    /// Returns true if this type's RDATA embeds one or more domain names.
    #[inline]
    pub const fn has_embedded_name(self) -> bool {
        matches!(
            self,
            Self::NS
                | Self::MD
                | Self::MF
                | Self::CNAME
                | Self::SOA
                | Self::MB
                | Self::MG
                | Self::MR
                | Self::PTR
                | Self::MINFO
                | Self::MX
                | Self::SRV
        )
    }

    /// Returns the human-readable name of the record type.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::NS => "NS",
            Self::MD => "MD",
            Self::MF => "MF",
            Self::CNAME => "CNAME",
            Self::SOA => "SOA",
            Self::MB => "MB",
            Self::MG => "MG",
            Self::MR => "MR",
            Self::NULL => "NULL",
            Self::WKS => "WKS",
            Self::PTR => "PTR",
            Self::HINFO => "HINFO",
            Self::MINFO => "MINFO",
            Self::MX => "MX",
            Self::TXT => "TXT",
            Self::AAAA => "AAAA",
            Self::SRV => "SRV",
            Self::OPT => "OPT",
            Self::CAA => "CAA",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Default for RecordType {
    fn default() -> Self {
        Self::A
    }
}

/// A TYPE value that can represent both supported types and unknown values.
///
/// Unknown values are kept for forward compatibility; their RDATA decodes
/// into [`crate::RData::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    /// A type with an explicit RDATA layout.
    Known(RecordType),
    /// An unassigned or unsupported type value (TYPE#### per RFC 3597).
    Unknown(u16),
}

impl Type {
    /// Creates a type from a u16 value.
    #[inline]
    pub fn from_u16(value: u16) -> Self {
        RecordType::from_u16(value)
            .map(Self::Known)
            .unwrap_or(Self::Unknown(value))
    }

    /// Returns the numeric value.
    #[inline]
    pub const fn to_u16(self) -> u16 {
        match self {
            Self::Known(t) => t.to_u16(),
            Self::Unknown(v) => v,
        }
    }

    /// Returns the supported type if known.
    #[inline]
    pub const fn as_known(self) -> Option<RecordType> {
        match self {
            Self::Known(t) => Some(t),
            Self::Unknown(_) => None,
        }
    }
}

impl From<RecordType> for Type {
    fn from(t: RecordType) -> Self {
        Self::Known(t)
    }
}

impl From<u16> for Type {
    fn from(value: u16) -> Self {
        Self::from_u16(value)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(t) => write!(f, "{t}"),
            Self::Unknown(v) => write!(f, "TYPE{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rtype_values() {
        assert_eq!(RecordType::A.to_u16(), 1);
        assert_eq!(RecordType::TXT.to_u16(), 16);
        assert_eq!(RecordType::AAAA.to_u16(), 28);
        assert_eq!(RecordType::SRV.to_u16(), 33);
        assert_eq!(RecordType::OPT.to_u16(), 41);
        assert_eq!(RecordType::CAA.to_u16(), 257);
    }

    #[test]
    fn test_rtype_from_u16() {
        assert_eq!(RecordType::from_u16(1), Some(RecordType::A));
        assert_eq!(RecordType::from_u16(257), Some(RecordType::CAA));
        assert_eq!(RecordType::from_u16(64), None);
    }

    #[test]
    fn test_rtype_predicates() {
        assert!(RecordType::OPT.is_pseudo_record());
        assert!(!RecordType::A.is_pseudo_record());

        assert!(RecordType::MX.has_embedded_name());
        assert!(RecordType::SOA.has_embedded_name());
        assert!(!RecordType::TXT.has_embedded_name());
    }

    #[test]
    fn test_generic_type() {
        let t = Type::from_u16(5);
        assert_eq!(t.as_known(), Some(RecordType::CNAME));

        let t = Type::from_u16(65280);
        assert_eq!(t.as_known(), None);
        assert_eq!(t.to_u16(), 65280);
        assert_eq!(t.to_string(), "TYPE65280");
    }
}
