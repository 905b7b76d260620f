//! DNS question section entries.

use crate::class::{Class, RecordClass};
use crate::error::Result;
use crate::name::{read_name, Name, NameWriter};
use crate::rtype::{RecordType, Type};
use crate::wire::{WireReader, WireWriter};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A DNS question: a name, a query type, and a query class.
///
/// The qname is stored with its trailing dot (see [`Name`]); building a
/// question from the empty string yields a question for the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    /// The domain name being queried.
    pub qname: Name,
    /// The type of record being requested.
    pub qtype: Type,
    /// The class of the query (usually IN).
    pub qclass: Class,
}

impl Question {
    /// Creates a new question.
    #[inline]
    pub fn new(qname: Name, qtype: RecordType, qclass: RecordClass) -> Self {
        Self {
            qname,
            qtype: Type::Known(qtype),
            qclass: Class::Known(qclass),
        }
    }

    /// Creates a question for an A record lookup.
    #[inline]
    pub fn a(name: Name) -> Self {
        Self::new(name, RecordType::A, RecordClass::IN)
    }

    /// Creates a question for an AAAA record lookup.
    #[inline]
    pub fn aaaa(name: Name) -> Self {
        Self::new(name, RecordType::AAAA, RecordClass::IN)
    }

    /// Creates a question for an MX record lookup.
    #[inline]
    pub fn mx(name: Name) -> Self {
        Self::new(name, RecordType::MX, RecordClass::IN)
    }

    /// Creates a question for a TXT record lookup.
    #[inline]
    pub fn txt(name: Name) -> Self {
        Self::new(name, RecordType::TXT, RecordClass::IN)
    }

    /// Creates a question for a PTR (reverse) lookup.
    #[inline]
    pub fn ptr(name: Name) -> Self {
        Self::new(name, RecordType::PTR, RecordClass::IN)
    }

    /// Parses a question at the reader's current position.
    pub fn parse(reader: &mut WireReader<'_>) -> Result<Self> {
        let qname = read_name(reader)?;
        let qtype = Type::from_u16(reader.read_u16()?);
        let qclass = Class::from_u16(reader.read_u16()?);
        Ok(Self { qname, qtype, qclass })
    }

    /// Writes the question, threading the message's compression dictionary.
    pub fn write_to(&self, writer: &mut WireWriter, names: &mut NameWriter) -> Result<()> {
        names.write_name(&self.qname, writer)?;
        writer.write_u16(self.qtype.to_u16());
        writer.write_u16(self.qclass.to_u16());
        Ok(())
    }

    /// Serializes the question standalone, with a fresh dictionary.
    pub fn to_wire(&self) -> Result<Bytes> {
        let mut writer = WireWriter::new(32);
        let mut names = NameWriter::new();
        self.write_to(&mut writer, &mut names)?;
        Ok(writer.freeze())
    }

    /// Returns true if this question matches another.
    ///
    /// Names compare case-insensitively; type and class compare exactly.
    pub fn matches(&self, other: &Question) -> bool {
        self.qname == other.qname && self.qtype == other.qtype && self.qclass == other.qclass
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.qname, self.qclass, self.qtype)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_question_wire() {
        // nim-lang.org A IN.
        let question = Question::a(Name::from_str("nim-lang.org").unwrap());
        let wire = question.to_wire().unwrap();

        assert_eq!(
            wire.as_ref(),
            &[
                0x08, b'n', b'i', b'm', b'-', b'l', b'a', b'n', b'g', 0x03, b'o', b'r', b'g',
                0x00, 0x00, 0x01, 0x00, 0x01,
            ]
        );
        assert_eq!(wire.len(), 18);
    }

    #[test]
    fn test_question_roundtrip() {
        let original = Question::aaaa(Name::from_str("www.example.com").unwrap());
        let wire = original.to_wire().unwrap();

        let mut reader = WireReader::new(&wire);
        let parsed = Question::parse(&mut reader).unwrap();

        assert_eq!(original, parsed);
        assert_eq!(reader.position(), wire.len());
    }

    #[test]
    fn test_root_qname() {
        let question = Question::new(Name::root(), RecordType::NS, RecordClass::IN);
        let wire = question.to_wire().unwrap();
        assert_eq!(wire.as_ref(), &[0x00, 0x00, 0x02, 0x00, 0x01]);
    }

    #[test]
    fn test_question_matching() {
        let q1 = Question::a(Name::from_str("example.com").unwrap());
        let q2 = Question::a(Name::from_str("EXAMPLE.COM").unwrap());
        let q3 = Question::aaaa(Name::from_str("example.com").unwrap());

        assert!(q1.matches(&q2));
        assert!(!q1.matches(&q3));
    }

    #[test]
    fn test_question_display() {
        let q = Question::mx(Name::from_str("example.com").unwrap());
        assert_eq!(q.to_string(), "example.com. IN MX");
    }
}
