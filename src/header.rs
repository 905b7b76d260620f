//! DNS message header.
//!
//! The header is a fixed 12-byte structure: a message ID, two bytes of
//! packed flags, and four section counts.
//!
//! ```text
//!                                 1  1  1  1  1  1
//!   0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                      ID                       |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |QR|   Opcode  |AA|TC|RD|RA|   Z    |   RCODE   |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                    QDCOUNT                    |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                    ANCOUNT                    |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                    NSCOUNT                    |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                    ARCOUNT                    |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! ```
//!
//! The two flag bytes are packed and unpacked with explicit shifts and
//! masks; bit-field layouts are never left to the compiler.

use crate::error::{Error, Result};
use crate::opcode::Opcode;
use crate::rcode::ResponseCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Size of the DNS header in bytes.
pub const HEADER_SIZE: usize = 12;

/// Query/response discriminator (the QR bit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Qr {
    /// The message is a query (QR = 0).
    #[default]
    Query,
    /// The message is a response (QR = 1).
    Response,
}

/// The unpacked header flag fields.
///
/// `z` is the 3-bit reserved field: zero on everything this crate builds,
/// preserved as received on decode. The `rcode` here holds the full
/// response code; only its low 4 bits live in the header bytes, the rest
/// travels in an OPT record (see [`crate::OptRecord`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Flags {
    /// Query or response.
    pub qr: Qr,
    /// Kind of query.
    pub opcode: Opcode,
    /// Authoritative answer.
    pub aa: bool,
    /// Truncated message.
    pub tc: bool,
    /// Recursion desired.
    pub rd: bool,
    /// Recursion available.
    pub ra: bool,
    /// Reserved 3-bit field.
    pub z: u8,
    /// Response code.
    pub rcode: ResponseCode,
}

impl Flags {
    /// Packs the flags into header bytes 2 and 3.
    ///
    /// Only the low 4 bits of the response code are representable here;
    /// callers carrying an extended RCODE must also emit an OPT record.
    pub fn pack(&self) -> [u8; 2] {
        let mut byte2 = 0u8;
        if matches!(self.qr, Qr::Response) {
            byte2 |= 0x80;
        }
        byte2 |= (self.opcode.to_u8() & 0x0F) << 3;
        if self.aa {
            byte2 |= 0x04;
        }
        if self.tc {
            byte2 |= 0x02;
        }
        if self.rd {
            byte2 |= 0x01;
        }

        let mut byte3 = 0u8;
        if self.ra {
            byte3 |= 0x80;
        }
        byte3 |= (self.z & 0x07) << 4;
        byte3 |= self.rcode.header_rcode();

        [byte2, byte3]
    }

    /// Unpacks header bytes 2 and 3.
    pub fn unpack(bytes: [u8; 2]) -> Self {
        let [byte2, byte3] = bytes;
        Self {
            qr: if byte2 & 0x80 != 0 {
                Qr::Response
            } else {
                Qr::Query
            },
            opcode: Opcode::from_u8((byte2 >> 3) & 0x0F),
            aa: byte2 & 0x04 != 0,
            tc: byte2 & 0x02 != 0,
            rd: byte2 & 0x01 != 0,
            ra: byte3 & 0x80 != 0,
            z: (byte3 >> 4) & 0x07,
            rcode: ResponseCode::from(u16::from(byte3 & 0x0F)),
        }
    }
}

/// DNS message header.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Header {
    /// Message identifier for matching requests to responses.
    pub id: u16,
    /// The unpacked flag fields.
    pub flags: Flags,
    /// Number of questions.
    pub qd_count: u16,
    /// Number of answer records.
    pub an_count: u16,
    /// Number of authority records.
    pub ns_count: u16,
    /// Number of additional records.
    pub ar_count: u16,
}

impl Header {
    /// Creates a header with the given message ID and default flags.
    #[inline]
    pub fn new(id: u16) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Creates a query header with a random ID and recursion desired.
    pub fn query() -> Self {
        Self {
            id: rand::random(),
            flags: Flags {
                rd: true,
                ..Flags::default()
            },
            ..Self::default()
        }
    }

    /// Creates a response header with default fields.
    pub fn response() -> Self {
        Self {
            flags: Flags {
                qr: Qr::Response,
                ..Flags::default()
            },
            ..Self::default()
        }
    }

    /// Creates a response header echoing a query's ID, opcode, and RD flag.
    pub fn response_to(query: &Header) -> Self {
        Self {
            id: query.id,
            flags: Flags {
                qr: Qr::Response,
                opcode: query.flags.opcode,
                rd: query.flags.rd,
                ..Flags::default()
            },
            qd_count: query.qd_count,
            ..Self::default()
        }
    }

    /// Returns true if this is a query.
    #[inline]
    pub fn is_query(&self) -> bool {
        matches!(self.flags.qr, Qr::Query)
    }

    /// Returns true if this is a response.
    #[inline]
    pub fn is_response(&self) -> bool {
        matches!(self.flags.qr, Qr::Response)
    }

    /// Parses a header from the first 12 bytes of a message.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_SIZE {
            return Err(Error::truncated(data.len()));
        }

        Ok(Self {
            id: u16::from_be_bytes([data[0], data[1]]),
            flags: Flags::unpack([data[2], data[3]]),
            qd_count: u16::from_be_bytes([data[4], data[5]]),
            an_count: u16::from_be_bytes([data[6], data[7]]),
            ns_count: u16::from_be_bytes([data[8], data[9]]),
            ar_count: u16::from_be_bytes([data[10], data[11]]),
        })
    }

    /// Serializes the header to its 12-byte wire form.
    pub fn to_wire(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];

        buf[0..2].copy_from_slice(&self.id.to_be_bytes());
        buf[2..4].copy_from_slice(&self.flags.pack());
        buf[4..6].copy_from_slice(&self.qd_count.to_be_bytes());
        buf[6..8].copy_from_slice(&self.an_count.to_be_bytes());
        buf[8..10].copy_from_slice(&self.ns_count.to_be_bytes());
        buf[10..12].copy_from_slice(&self.ar_count.to_be_bytes());

        buf
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID:{:04X} {} {} {}",
            self.id,
            if self.is_query() { "QUERY" } else { "RESPONSE" },
            self.flags.opcode,
            self.flags.rcode
        )?;

        if self.flags.aa {
            write!(f, " AA")?;
        }
        if self.flags.tc {
            write!(f, " TC")?;
        }
        if self.flags.rd {
            write!(f, " RD")?;
        }
        if self.flags.ra {
            write!(f, " RA")?;
        }

        write!(
            f,
            " QD:{} AN:{} NS:{} AR:{}",
            self.qd_count, self.an_count, self.ns_count, self.ar_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_header_wire() {
        // id=1, query, opcode QUERY, rd set, qdcount=1.
        let header = Header {
            id: 1,
            flags: Flags {
                rd: true,
                ..Flags::default()
            },
            qd_count: 1,
            ..Header::default()
        };

        assert_eq!(
            header.to_wire(),
            [0x00, 0x01, 0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn test_header_roundtrip() {
        let header = Header {
            id: 0x1234,
            flags: Flags {
                qr: Qr::Response,
                opcode: Opcode::Status,
                aa: true,
                tc: false,
                rd: true,
                ra: true,
                z: 0,
                rcode: ResponseCode::NXDomain,
            },
            qd_count: 1,
            an_count: 2,
            ns_count: 3,
            ar_count: 4,
        };

        let parsed = Header::parse(&header.to_wire()).unwrap();
        assert_eq!(header, parsed);
    }

    #[test]
    fn test_z_bits_preserved() {
        let mut wire = Header::new(7).to_wire();
        wire[3] |= 0x70; // all three reserved bits

        let parsed = Header::parse(&wire).unwrap();
        assert_eq!(parsed.flags.z, 0x07);
        assert_eq!(parsed.to_wire(), wire);
    }

    #[test]
    fn test_unknown_opcode_preserved() {
        let mut wire = Header::new(7).to_wire();
        wire[2] |= 0x0D << 3;

        let parsed = Header::parse(&wire).unwrap();
        assert_eq!(parsed.flags.opcode, Opcode::Unknown(13));
        assert_eq!(parsed.to_wire(), wire);
    }

    #[test]
    fn test_header_parse_too_short() {
        assert!(matches!(
            Header::parse(&[0; 10]),
            Err(Error::TruncatedInput { .. })
        ));
    }

    #[test]
    fn test_response_to_query() {
        let query = Header::query();
        let response = Header::response_to(&query);

        assert_eq!(query.id, response.id);
        assert!(query.is_query());
        assert!(response.is_response());
        assert_eq!(query.flags.rd, response.flags.rd);
    }
}
