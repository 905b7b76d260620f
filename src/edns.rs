//! EDNS(0) OPT pseudo-record (RFC 6891).
//!
//! The OPT record is syntactically a resource record but overlays its
//! fixed slots with EDNS control fields: the CLASS slot carries the
//! requestor's UDP payload size, and the TTL slot packs the extended-RCODE
//! byte, the EDNS version, the DO bit, and 15 reserved bits. Its RDATA is
//! a concatenation of `{code, length, data}` options.

use crate::error::{Error, Result};
use crate::wire::WireWriter;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// A single EDNS option: an option code and its opaque payload.
///
/// Option payloads are carried byte-exactly; interpreting individual
/// option codes is a resolver concern, not a codec one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdnsOption {
    /// The option code.
    pub code: u16,
    /// The option payload.
    pub data: Vec<u8>,
}

impl EdnsOption {
    /// Creates a new option.
    pub fn new(code: u16, data: impl Into<Vec<u8>>) -> Self {
        Self {
            code,
            data: data.into(),
        }
    }
}

impl fmt::Display for EdnsOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OPT={}: {} bytes", self.code, self.data.len())
    }
}

/// The EDNS control fields carried by an OPT pseudo-record.
///
/// The record's owner name is always the root and is not stored. At most
/// one OPT belongs in a message, in the additional section; the message
/// builder inserts one when an extended RCODE requires it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptRecord {
    /// Requestor's maximum UDP payload size (the CLASS slot).
    pub udp_size: u16,
    /// Upper 8 bits of the extended RCODE (high byte of the TTL slot).
    pub ext_rcode: u8,
    /// EDNS version, preserved as received.
    pub version: u8,
    /// DNSSEC OK bit.
    pub dnssec_ok: bool,
    /// Reserved 15-bit field, preserved as received.
    pub z: u16,
    /// The options carried in the RDATA.
    pub options: SmallVec<[EdnsOption; 2]>,
}

impl OptRecord {
    /// UDP payload size advertised when the builder has to insert an OPT
    /// record on its own (RFC 1035's classic limit).
    pub const DEFAULT_UDP_SIZE: u16 = 512;

    /// Creates an OPT record with default fields and no options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstructs the control fields from the overlaid CLASS and TTL
    /// slots plus the RDATA bytes.
    pub fn parse(udp_size: u16, ttl_bits: u32, rdata: &[u8]) -> Result<Self> {
        let ext_rcode = (ttl_bits >> 24) as u8;
        let version = ((ttl_bits >> 16) & 0xFF) as u8;
        let dnssec_ok = ttl_bits & 0x8000 != 0;
        let z = (ttl_bits & 0x7FFF) as u16;

        let mut options = SmallVec::new();
        let mut pos = 0;
        while pos < rdata.len() {
            if pos + 4 > rdata.len() {
                return Err(Error::malformed("OPT", "truncated option header"));
            }
            let code = u16::from_be_bytes([rdata[pos], rdata[pos + 1]]);
            let length = usize::from(u16::from_be_bytes([rdata[pos + 2], rdata[pos + 3]]));
            pos += 4;

            if pos + length > rdata.len() {
                return Err(Error::malformed(
                    "OPT",
                    format!("option {code} overruns RDATA"),
                ));
            }
            options.push(EdnsOption::new(code, &rdata[pos..pos + length]));
            pos += length;
        }

        Ok(Self {
            udp_size,
            ext_rcode,
            version,
            dnssec_ok,
            z,
            options,
        })
    }

    /// Returns the TTL-slot bit pattern for this record.
    pub fn ttl_bits(&self) -> u32 {
        u32::from(self.ext_rcode) << 24
            | u32::from(self.version) << 16
            | u32::from(self.dnssec_ok) << 15
            | u32::from(self.z & 0x7FFF)
    }

    /// Writes the options into an RDATA area.
    pub(crate) fn write_options(&self, writer: &mut WireWriter) -> Result<()> {
        for option in &self.options {
            if option.data.len() > usize::from(u16::MAX) {
                return Err(Error::malformed(
                    "OPT",
                    format!("option {} data exceeds 65535 bytes", option.code),
                ));
            }
            writer.write_u16(option.code);
            writer.write_u16(option.data.len() as u16);
            writer.write_bytes(&option.data);
        }
        Ok(())
    }
}

impl Default for OptRecord {
    fn default() -> Self {
        Self {
            udp_size: Self::DEFAULT_UDP_SIZE,
            ext_rcode: 0,
            version: 0,
            dnssec_ok: false,
            z: 0,
            options: SmallVec::new(),
        }
    }
}

impl fmt::Display for OptRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EDNS(version={}, udp={}, do={})",
            self.version, self.udp_size, self.dnssec_ok
        )?;
        for option in &self.options {
            write!(f, " [{option}]")?;
        }
        Ok(())
    }
}
