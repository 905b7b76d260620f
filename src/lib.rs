//! # dnswire
//!
//! A DNS wire-format codec following RFC 1035 and selected extensions:
//! AAAA (RFC 1886/3596), SRV (RFC 2782), EDNS(0)/OPT (RFC 6891), and CAA
//! (RFC 8659). The crate converts between an in-memory [`Message`] and its
//! exact binary representation; it is neither a transport nor a resolver.
//!
//! ## Features
//!
//! - **Name compression** on encode: repeated name suffixes become 14-bit
//!   back-pointers behind a per-message dictionary
//! - **Typed RDATA** for the RFC 1035 record set plus AAAA, SRV, and CAA,
//!   with unknown TYPEs preserved byte-exactly
//! - **EDNS(0)**: the OPT pseudo-record with its overlaid header slots and
//!   extended-RCODE folding
//! - **Hardened decoding**: bounded pointer chasing, strict length checks,
//!   no panics on untrusted input
//!
//! ## Example
//!
//! ```rust
//! use dnswire::{Framing, Message, Name, Question};
//! use std::str::FromStr;
//!
//! // Build and encode a query.
//! let query = Message::query(Question::a(Name::from_str("example.com")?));
//! let wire = query.encode(Framing::Udp)?;
//!
//! // Decode it back.
//! let decoded = Message::decode(&wire)?;
//! assert_eq!(decoded.question().unwrap().qname.as_str(), "example.com.");
//! # Ok::<(), dnswire::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::upper_case_acronyms)]

pub mod class;
pub mod edns;
pub mod error;
pub mod header;
pub mod message;
pub mod name;
pub mod opcode;
pub mod question;
pub mod rcode;
pub mod rdata;
pub mod record;
pub mod rtype;
pub mod wire;

// Re-exports for convenience
pub use class::{Class, RecordClass};
pub use edns::{EdnsOption, OptRecord};
pub use error::{Error, Result};
pub use header::{Flags, Header, Qr, HEADER_SIZE};
pub use message::{Framing, Message};
pub use name::{Name, NameWriter};
pub use opcode::Opcode;
pub use question::Question;
pub use rcode::ResponseCode;
pub use rdata::RData;
pub use record::{Record, ResourceRecord};
pub use rtype::{RecordType, Type};
pub use wire::{WireReader, WireWriter};

/// Maximum length of a single label on the wire (RFC 1035).
pub const MAX_LABEL_LENGTH: usize = 63;

/// Maximum textual length of a domain name including the trailing dot.
///
/// This is exactly what the 255-octet wire limit (length bytes plus the
/// root terminator) leaves for the presentation form.
pub const MAX_NAME_LENGTH: usize = 254;

/// Maximum length of a character-string (RFC 1035).
pub const MAX_CHARACTER_STRING_LENGTH: usize = 255;

/// Highest message offset a 14-bit compression pointer can reference.
pub const MAX_COMPRESSION_OFFSET: usize = 0x3FFF;

/// Maximum UDP message size without EDNS (RFC 1035).
pub const MAX_UDP_MESSAGE_SIZE: usize = 512;
