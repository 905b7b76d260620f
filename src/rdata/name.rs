//! Record data holding domain names (NS, MD, MF, CNAME, MB, MG, MR, PTR,
//! MX).
//!
//! All of these delegate to the name codec. Their serialized names
//! participate in message compression, so the offsets they register are
//! reusable by later names in the same message.

use crate::error::Result;
use crate::name::{read_name, Name, NameWriter};
use crate::wire::{WireReader, WireWriter};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines a record whose RDATA is a single domain name.
macro_rules! single_name_rdata {
    ($(#[$doc:meta])* $name:ident, $field:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name {
            /// The domain name carried in the RDATA.
            $field: Name,
        }

        impl $name {
            /// Creates the record around its domain name.
            #[inline]
            pub fn new($field: Name) -> Self {
                Self { $field }
            }

            /// Returns the carried domain name.
            #[inline]
            pub fn $field(&self) -> &Name {
                &self.$field
            }

            /// Parses the record at the reader's current position.
            pub fn parse(reader: &mut WireReader<'_>) -> Result<Self> {
                Ok(Self {
                    $field: read_name(reader)?,
                })
            }

            /// Writes the record RDATA with compression.
            pub fn write_to(
                &self,
                writer: &mut WireWriter,
                names: &mut NameWriter,
            ) -> Result<()> {
                names.write_name(&self.$field, writer)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.$field)
            }
        }
    };
}

single_name_rdata! {
    /// NS record - authoritative name server (RFC 1035).
    NS, nsdname
}

single_name_rdata! {
    /// MD record - mail destination (RFC 1035, obsoleted by MX).
    MD, madname
}

single_name_rdata! {
    /// MF record - mail forwarder (RFC 1035, obsoleted by MX).
    MF, madname
}

single_name_rdata! {
    /// CNAME record - canonical name for an alias (RFC 1035).
    CNAME, cname
}

single_name_rdata! {
    /// MB record - mailbox domain name (RFC 1035).
    MB, madname
}

single_name_rdata! {
    /// MG record - mail group member (RFC 1035).
    MG, mgmname
}

single_name_rdata! {
    /// MR record - mail rename domain name (RFC 1035).
    MR, newname
}

single_name_rdata! {
    /// PTR record - domain name pointer for reverse lookups (RFC 1035).
    PTR, ptrdname
}

impl CNAME {
    /// Returns the canonical name the alias points at.
    #[inline]
    pub fn target(&self) -> &Name {
        self.cname()
    }
}

/// MX record - mail exchange (RFC 1035).
///
/// A 16-bit preference (lower is more preferred) followed by the exchange
/// host name. The preference precedes the name on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MX {
    /// The preference value.
    preference: u16,
    /// The mail exchange host.
    exchange: Name,
}

impl MX {
    /// Creates a new MX record.
    #[inline]
    pub fn new(preference: u16, exchange: Name) -> Self {
        Self {
            preference,
            exchange,
        }
    }

    /// Returns the preference value.
    #[inline]
    pub const fn preference(&self) -> u16 {
        self.preference
    }

    /// Returns the mail exchange host.
    #[inline]
    pub fn exchange(&self) -> &Name {
        &self.exchange
    }

    /// Parses an MX record at the reader's current position.
    pub fn parse(reader: &mut WireReader<'_>) -> Result<Self> {
        let preference = reader.read_u16()?;
        let exchange = read_name(reader)?;
        Ok(Self {
            preference,
            exchange,
        })
    }

    /// Writes the MX record RDATA with compression.
    pub fn write_to(&self, writer: &mut WireWriter, names: &mut NameWriter) -> Result<()> {
        writer.write_u16(self.preference);
        names.write_name(&self.exchange, writer)
    }
}

impl fmt::Display for MX {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.preference, self.exchange)
    }
}

impl PartialOrd for MX {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MX {
    /// Lower preference sorts first.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.preference.cmp(&other.preference)
    }
}
