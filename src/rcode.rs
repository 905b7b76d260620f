//! DNS response codes (RCODEs).
//!
//! Response codes indicate the status of a DNS operation. The header
//! carries the low 4 bits; values 16 and above additionally require the
//! upper 8 bits carried by an OPT pseudo-record (RFC 6891).

use num_enum::{FromPrimitive, IntoPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;

/// DNS response code.
///
/// With EDNS(0) the response code is 12 bits wide: 4 bits in the header and
/// 8 bits in the OPT record. Values without an assigned meaning are
/// preserved through a decode/encode round trip via the `Unknown` variant.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    FromPrimitive,
    IntoPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(u16)]
pub enum ResponseCode {
    /// No error condition - RFC 1035
    NoError = 0,

    /// Format error: the server could not interpret the query - RFC 1035
    FormErr = 1,

    /// Server failure - RFC 1035
    ServFail = 2,

    /// Name error: the queried domain does not exist - RFC 1035
    NXDomain = 3,

    /// Not implemented - RFC 1035
    NotImp = 4,

    /// Query refused for policy reasons - RFC 1035
    Refused = 5,

    /// Name exists when it should not - RFC 2136
    YXDomain = 6,

    /// RR set exists when it should not - RFC 2136
    YXRRSet = 7,

    /// RR set that should exist does not - RFC 2136
    NXRRSet = 8,

    /// Server not authoritative / not authorized - RFC 2136, RFC 8945
    NotAuth = 9,

    /// Name not contained in zone - RFC 2136
    NotZone = 10,

    /// Bad OPT version - RFC 6891 (requires EDNS)
    BadVers = 16,

    /// Key not recognized - RFC 8945
    BadKey = 17,

    /// Signature out of time window - RFC 8945
    BadTime = 18,

    /// Bad TKEY mode - RFC 2930
    BadMode = 19,

    /// Duplicate key name - RFC 2930
    BadName = 20,

    /// Algorithm not supported - RFC 2930
    BadAlg = 21,

    /// Bad truncation - RFC 8945
    BadTrunc = 22,

    /// Bad/missing server cookie - RFC 7873
    BadCookie = 23,

    /// Any other value, preserved as-is.
    #[num_enum(catch_all)]
    Unknown(u16),
}

impl ResponseCode {
    /// Returns the numeric value of the response code.
    #[inline]
    pub fn to_u16(self) -> u16 {
        self.into()
    }

    /// Returns the 4-bit value carried in the header RCODE field.
    #[inline]
    pub fn header_rcode(self) -> u8 {
        (self.to_u16() & 0x0F) as u8
    }

    /// Returns the upper 8 bits carried by the OPT record.
    #[inline]
    pub fn extended_rcode(self) -> u8 {
        (self.to_u16() >> 4) as u8
    }

    /// Combines the header nibble and the OPT extension byte.
    #[inline]
    pub fn from_parts(header_rcode: u8, extended_rcode: u8) -> Self {
        Self::from(u16::from(extended_rcode) << 4 | u16::from(header_rcode & 0x0F))
    }

    /// Returns true if this code only fits with an OPT record present.
    #[inline]
    pub fn is_extended(self) -> bool {
        self.to_u16() > 15
    }

    /// Returns true if this response indicates success.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Self::NoError)
    }

    /// Returns true if this response indicates the name does not exist.
    #[inline]
    pub fn is_nxdomain(self) -> bool {
        matches!(self, Self::NXDomain)
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NoError => "NOERROR",
            Self::FormErr => "FORMERR",
            Self::ServFail => "SERVFAIL",
            Self::NXDomain => "NXDOMAIN",
            Self::NotImp => "NOTIMP",
            Self::Refused => "REFUSED",
            Self::YXDomain => "YXDOMAIN",
            Self::YXRRSet => "YXRRSET",
            Self::NXRRSet => "NXRRSET",
            Self::NotAuth => "NOTAUTH",
            Self::NotZone => "NOTZONE",
            Self::BadVers => "BADVERS",
            Self::BadKey => "BADKEY",
            Self::BadTime => "BADTIME",
            Self::BadMode => "BADMODE",
            Self::BadName => "BADNAME",
            Self::BadAlg => "BADALG",
            Self::BadTrunc => "BADTRUNC",
            Self::BadCookie => "BADCOOKIE",
            Self::Unknown(value) => return write!(f, "RCODE{value}"),
        };
        f.write_str(name)
    }
}

impl Default for ResponseCode {
    fn default() -> Self {
        Self::NoError
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rcode_values() {
        assert_eq!(ResponseCode::NoError.to_u16(), 0);
        assert_eq!(ResponseCode::ServFail.to_u16(), 2);
        assert_eq!(ResponseCode::NXDomain.to_u16(), 3);
        assert_eq!(ResponseCode::BadVers.to_u16(), 16);
    }

    #[test]
    fn test_rcode_parts() {
        assert_eq!(ResponseCode::NoError.header_rcode(), 0);
        assert_eq!(ResponseCode::NoError.extended_rcode(), 0);

        // BADVERS is 16: low nibble 0, extension 1.
        assert_eq!(ResponseCode::BadVers.header_rcode(), 0);
        assert_eq!(ResponseCode::BadVers.extended_rcode(), 1);

        assert_eq!(ResponseCode::from_parts(0, 1), ResponseCode::BadVers);
        assert_eq!(ResponseCode::from_parts(3, 0), ResponseCode::NXDomain);
        assert_eq!(ResponseCode::from_parts(7, 1), ResponseCode::BadCookie);
    }

    #[test]
    fn test_rcode_unknown_preserved() {
        let rcode = ResponseCode::from(12u16);
        assert_eq!(rcode, ResponseCode::Unknown(12));
        assert_eq!(rcode.to_u16(), 12);

        let rcode = ResponseCode::from_parts(5, 200);
        assert_eq!(rcode.to_u16(), 3205);
        assert_eq!(rcode.header_rcode(), 5);
        assert_eq!(rcode.extended_rcode(), 200);
    }

    #[test]
    fn test_rcode_predicates() {
        assert!(ResponseCode::NoError.is_success());
        assert!(ResponseCode::NXDomain.is_nxdomain());
        assert!(ResponseCode::BadVers.is_extended());
        assert!(!ResponseCode::Refused.is_extended());
    }
}
