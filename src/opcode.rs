//! DNS operation codes.
//!
//! The OPCODE field in the header specifies the kind of query.
//! See RFC 1035 Section 4.1.1.

use num_enum::{FromPrimitive, IntoPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;

/// DNS operation code.
///
/// Values outside the RFC 1035 set are preserved through a decode/encode
/// round trip via the `Unknown` variant.
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
#[repr(u8)]
pub enum Opcode {
    /// Standard query (QUERY) - RFC 1035
    Query = 0,

    /// Inverse query (IQUERY) - RFC 1035, obsoleted by RFC 3425
    IQuery = 1,

    /// Server status request (STATUS) - RFC 1035
    Status = 2,

    /// Any other value, preserved as-is.
    #[num_enum(catch_all)]
    Unknown(u8),
}

impl Opcode {
    /// Returns the numeric value of the opcode.
    #[inline]
    pub fn to_u8(self) -> u8 {
        self.into()
    }

    /// Creates an opcode from its numeric value.
    #[inline]
    pub fn from_u8(value: u8) -> Self {
        Self::from(value)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query => write!(f, "QUERY"),
            Self::IQuery => write!(f, "IQUERY"),
            Self::Status => write!(f, "STATUS"),
            Self::Unknown(value) => write!(f, "OPCODE{value}"),
        }
    }
}

impl Default for Opcode {
    fn default() -> Self {
        Self::Query
    }
}
