//! DNS messages.
//!
//! A message is a [`Header`] followed by four sections: questions,
//! answers, authorities, and additionals. Encoding walks the sections in
//! order behind one compression dictionary; decoding drives per-section
//! loops off the header counts and folds an OPT record's extended-RCODE
//! bits back into the header.

use crate::edns::OptRecord;
use crate::error::{Error, Result};
use crate::header::{Header, HEADER_SIZE};
use crate::name::NameWriter;
use crate::question::Question;
use crate::rcode::ResponseCode;
use crate::record::Record;
use crate::wire::{WireReader, WireWriter};
use bytes::{BufMut, Bytes, BytesMut};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// How an encoded message is framed for its transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Framing {
    /// Bare message bytes, as sent in a UDP datagram.
    #[default]
    Udp,
    /// The message prefixed with its big-endian u16 length, as sent on a
    /// TCP stream (RFC 1035 Section 4.2.2).
    Tcp,
}

/// A complete DNS message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Message {
    /// The message header.
    header: Header,
    /// The question section.
    questions: Vec<Question>,
    /// The answer section.
    answers: Vec<Record>,
    /// The authority section.
    authorities: Vec<Record>,
    /// The additional section, including any OPT pseudo-record.
    additionals: Vec<Record>,
}

impl Message {
    /// Builds a message from a header and its four section lists.
    ///
    /// The header's section counts are recomputed from the lists. If the
    /// header carries a response code above 15, its upper bits are folded
    /// into the additional section's OPT record, inserting one with
    /// default fields when none is present (RFC 6891).
    pub fn build(
        header: Header,
        questions: Vec<Question>,
        answers: Vec<Record>,
        authorities: Vec<Record>,
        mut additionals: Vec<Record>,
    ) -> Result<Self> {
        let mut header = header;

        if header.flags.rcode.is_extended() {
            let ext_rcode = header.flags.rcode.extended_rcode();
            match additionals.iter_mut().find_map(|record| match record {
                Record::Opt(opt) => Some(opt),
                Record::Standard(_) => None,
            }) {
                Some(opt) => opt.ext_rcode = ext_rcode,
                None => {
                    let mut opt = OptRecord::new();
                    opt.ext_rcode = ext_rcode;
                    additionals.push(Record::Opt(opt));
                }
            }
        }

        header.qd_count = section_count("question", questions.len())?;
        header.an_count = section_count("answer", answers.len())?;
        header.ns_count = section_count("authority", authorities.len())?;
        header.ar_count = section_count("additional", additionals.len())?;

        Ok(Self {
            header,
            questions,
            answers,
            authorities,
            additionals,
        })
    }

    /// Builds a query message around a single question.
    pub fn query(question: Question) -> Self {
        let mut header = Header::query();
        header.qd_count = 1;
        Self {
            header,
            questions: vec![question],
            ..Self::default()
        }
    }

    /// Returns the message header.
    #[inline]
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Returns a mutable reference to the header.
    #[inline]
    pub fn header_mut(&mut self) -> &mut Header {
        &mut self.header
    }

    /// Returns the message ID.
    #[inline]
    pub fn id(&self) -> u16 {
        self.header.id
    }

    /// Returns the response code.
    #[inline]
    pub fn rcode(&self) -> ResponseCode {
        self.header.flags.rcode
    }

    /// Returns the question section.
    #[inline]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns the first question, if any.
    #[inline]
    pub fn question(&self) -> Option<&Question> {
        self.questions.first()
    }

    /// Returns the answer section.
    #[inline]
    pub fn answers(&self) -> &[Record] {
        &self.answers
    }

    /// Returns the authority section.
    #[inline]
    pub fn authorities(&self) -> &[Record] {
        &self.authorities
    }

    /// Returns the additional section.
    #[inline]
    pub fn additionals(&self) -> &[Record] {
        &self.additionals
    }

    /// Returns the first OPT record in the additional section, if any.
    pub fn opt(&self) -> Option<&OptRecord> {
        self.additionals.iter().find_map(Record::as_opt)
    }

    /// Encodes the message, choosing UDP (bare) or TCP (length-prefixed)
    /// framing.
    ///
    /// A fresh compression dictionary is threaded through the header's
    /// sections in order; its offsets are relative to the message itself,
    /// so TCP framing is applied around the finished body.
    pub fn encode(&self, framing: Framing) -> Result<Bytes> {
        let mut writer = WireWriter::new(512);
        writer.write_bytes(&self.header.to_wire());

        let mut names = NameWriter::new();
        for question in &self.questions {
            question.write_to(&mut writer, &mut names)?;
        }
        for record in &self.answers {
            record.write_to(&mut writer, &mut names)?;
        }
        for record in &self.authorities {
            record.write_to(&mut writer, &mut names)?;
        }
        for record in &self.additionals {
            record.write_to(&mut writer, &mut names)?;
        }

        let body = writer.freeze();
        match framing {
            Framing::Udp => Ok(body),
            Framing::Tcp => {
                if body.len() > usize::from(u16::MAX) {
                    return Err(Error::MessageTooLarge { size: body.len() });
                }
                let mut framed = BytesMut::with_capacity(body.len() + 2);
                framed.put_u16(body.len() as u16);
                framed.extend_from_slice(&body);
                Ok(framed.freeze())
            }
        }
    }

    /// Encodes the message without transport framing.
    pub fn to_wire(&self) -> Result<Bytes> {
        self.encode(Framing::Udp)
    }

    /// Decodes a message from its bare wire bytes.
    ///
    /// The input must not carry a TCP length prefix. Header counts drive
    /// the section loops; after the additional section is read, the first
    /// OPT record's extension byte is combined with the header's RCODE
    /// nibble. Extra OPT records are a protocol violation and stay in the
    /// additional section untouched.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let mut header = Header::parse(data)?;
        trace!(id = header.id, "decoding message");

        let mut reader = WireReader::new(data);
        reader.seek(HEADER_SIZE)?;

        let mut questions = Vec::new();
        for _ in 0..header.qd_count {
            questions.push(Question::parse(&mut reader)?);
        }

        let mut answers = Vec::new();
        for _ in 0..header.an_count {
            answers.push(Record::parse(&mut reader)?);
        }

        let mut authorities = Vec::new();
        for _ in 0..header.ns_count {
            authorities.push(Record::parse(&mut reader)?);
        }

        let mut additionals = Vec::new();
        for _ in 0..header.ar_count {
            additionals.push(Record::parse(&mut reader)?);
        }

        let mut opts = additionals.iter().filter_map(Record::as_opt);
        if let Some(opt) = opts.next() {
            header.flags.rcode =
                ResponseCode::from_parts(header.flags.rcode.header_rcode(), opt.ext_rcode);
        }
        if opts.next().is_some() {
            debug!(id = header.id, "multiple OPT records in additional section");
        }

        Ok(Self {
            header,
            questions,
            answers,
            authorities,
            additionals,
        })
    }
}

/// Checks that a section list fits its u16 header count.
fn section_count(section: &'static str, count: usize) -> Result<u16> {
    u16::try_from(count).map_err(|_| Error::SectionCountOverflow { section, count })
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ";; ->>HEADER<<- {}", self.header)?;

        writeln!(f, ";; QUESTION SECTION:")?;
        for question in &self.questions {
            writeln!(f, ";{question}")?;
        }

        if !self.answers.is_empty() {
            writeln!(f, ";; ANSWER SECTION:")?;
            for record in &self.answers {
                writeln!(f, "{record}")?;
            }
        }

        if !self.authorities.is_empty() {
            writeln!(f, ";; AUTHORITY SECTION:")?;
            for record in &self.authorities {
                writeln!(f, "{record}")?;
            }
        }

        if !self.additionals.is_empty() {
            writeln!(f, ";; ADDITIONAL SECTION:")?;
            for record in &self.additionals {
                writeln!(f, "{record}")?;
            }
        }

        Ok(())
    }
}
