//! DNS domain names.
//!
//! Names are stored in presentation form: labels joined by `.`, always with
//! the trailing `.` that denotes the root. `"."` alone is the root itself.
//! The wire form - length-prefixed labels, optionally compressed through
//! 14-bit back-pointers - exists only inside [`parse`] and [`write`].
//!
//! Comparison and hashing are ASCII-case-insensitive per RFC 1035: the
//! names `Example.COM.` and `example.com.` are equal and hash identically.

mod parse;
mod write;

pub use parse::read_name;
pub use write::NameWriter;

use crate::error::{Error, Result};
use crate::{MAX_LABEL_LENGTH, MAX_NAME_LENGTH};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A DNS domain name in presentation form.
///
/// # Validation
///
/// [`Name::from_str`] enforces the rules the encoder relies on:
///
/// - every label is 1-63 bytes,
/// - the first byte of a label is a letter, digit, or `_` (the underscore
///   exception covers `_service` labels),
/// - the last byte is a letter or digit, interior bytes may also be `-`,
/// - the full textual form, including the trailing dot, is at most 254
///   characters (which is exactly what the 255-octet wire limit allows).
///
/// A missing trailing dot is supplied; the empty string and `"."` both
/// produce the root.
///
/// Names built by the decoder skip the per-byte checks - wire input is
/// only validated structurally - but respect the same length limits.
///
/// # Example
///
/// ```rust
/// use dnswire::Name;
/// use std::str::FromStr;
///
/// let name = Name::from_str("www.example.com").unwrap();
/// assert_eq!(name.as_str(), "www.example.com.");
/// assert_eq!(name.label_count(), 3);
///
/// // Comparison ignores ASCII case.
/// assert_eq!(name, Name::from_str("WWW.EXAMPLE.COM.").unwrap());
/// ```
#[derive(Clone)]
pub struct Name {
    /// Presentation form, always dot-terminated.
    text: CompactString,
}

impl Name {
    /// Creates the root domain name, `"."`.
    #[inline]
    pub fn root() -> Self {
        Self {
            text: CompactString::const_new("."),
        }
    }

    /// Wraps text produced by the wire decoder. Structural limits hold but
    /// label bytes are taken as-is.
    #[inline]
    pub(crate) fn from_decoded(text: CompactString) -> Self {
        debug_assert!(text.ends_with('.'));
        Self { text }
    }

    /// Returns the presentation form, including the trailing dot.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the textual length, including the trailing dot.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns false; even the root name is one character long.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns true if this is the root name.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.text == "."
    }

    /// Returns an iterator over the labels, left to right, without the root.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.text
            .strip_suffix('.')
            .unwrap_or("")
            .split('.')
            .filter(|label| !label.is_empty())
    }

    /// Returns the number of labels, not counting the root.
    #[inline]
    pub fn label_count(&self) -> usize {
        self.labels().count()
    }

    /// Returns the parent name, dropping the leftmost label.
    ///
    /// Returns `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        let rest = &self.text[self.text.find('.')? + 1..];
        Some(if rest.is_empty() {
            Self::root()
        } else {
            Self {
                text: CompactString::from(rest),
            }
        })
    }
}

/// Validates one label of a textual name. `start` is the label's byte
/// offset within the whole name, used for error positions.
fn validate_label(label: &str, start: usize) -> Result<()> {
    if label.is_empty() {
        return Err(Error::EmptyInnerLabel { position: start });
    }
    if label.len() > MAX_LABEL_LENGTH {
        return Err(Error::LabelTooLong {
            length: label.len(),
        });
    }

    let bytes = label.as_bytes();
    for (i, &byte) in bytes.iter().enumerate() {
        let ok = if i == 0 {
            byte.is_ascii_alphanumeric() || byte == b'_'
        } else if i == bytes.len() - 1 {
            byte.is_ascii_alphanumeric()
        } else {
            byte.is_ascii_alphanumeric() || byte == b'-'
        };
        if !ok {
            return Err(Error::InvalidLabelByte {
                byte,
                position: start + i,
            });
        }
    }

    Ok(())
}

impl FromStr for Name {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() || s == "." {
            return Ok(Self::root());
        }

        let trimmed = s.strip_suffix('.').unwrap_or(s);
        if trimmed.len() + 1 > MAX_NAME_LENGTH {
            return Err(Error::NameTooLong {
                length: trimmed.len() + 1,
            });
        }

        let mut position = 0;
        for label in trimmed.split('.') {
            validate_label(label, position)?;
            position += label.len() + 1;
        }

        let mut text = CompactString::from(trimmed);
        text.push('.');
        Ok(Self { text })
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name(\"{}\")", self.text)
    }
}

impl PartialEq for Name {
    /// Case-insensitive comparison per DNS semantics.
    fn eq(&self, other: &Self) -> bool {
        self.text.eq_ignore_ascii_case(&other.text)
    }
}

impl Eq for Name {}

impl Hash for Name {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for &byte in self.text.as_bytes() {
            byte.to_ascii_lowercase().hash(state);
        }
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::root()
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_name() {
        let root = Name::root();
        assert!(root.is_root());
        assert_eq!(root.as_str(), ".");
        assert_eq!(root.label_count(), 0);
        assert_eq!(root.parent(), None);
    }

    #[test]
    fn test_name_parsing() {
        let name = Name::from_str("www.example.com.").unwrap();
        assert!(!name.is_root());
        assert_eq!(name.label_count(), 3);
        assert_eq!(name.to_string(), "www.example.com.");

        // Missing trailing dot is normalized.
        let name2 = Name::from_str("www.example.com").unwrap();
        assert_eq!(name, name2);

        // Empty input normalizes to the root.
        assert!(Name::from_str("").unwrap().is_root());
    }

    #[test]
    fn test_case_insensitive_comparison() {
        let lower = Name::from_str("www.example.com").unwrap();
        let upper = Name::from_str("WWW.EXAMPLE.COM").unwrap();
        let mixed = Name::from_str("Www.ExAmPlE.CoM").unwrap();

        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);

        use std::collections::hash_map::DefaultHasher;
        let hash = |n: &Name| {
            let mut h = DefaultHasher::new();
            n.hash(&mut h);
            h.finish()
        };
        assert_eq!(hash(&lower), hash(&upper));
    }

    #[test]
    fn test_label_iteration() {
        let name = Name::from_str("www.example.com").unwrap();
        let labels: Vec<_> = name.labels().collect();
        assert_eq!(labels, vec!["www", "example", "com"]);

        assert_eq!(Name::root().labels().count(), 0);
    }

    #[test]
    fn test_parent() {
        let name = Name::from_str("www.example.com").unwrap();
        let parent = name.parent().unwrap();
        assert_eq!(parent.as_str(), "example.com.");
        assert_eq!(parent.parent().unwrap().as_str(), "com.");
        assert!(parent.parent().unwrap().parent().unwrap().is_root());
    }

    #[test]
    fn test_label_length_limits() {
        let max_label = "a".repeat(63);
        assert!(Name::from_str(&max_label).is_ok());

        let long_label = "a".repeat(64);
        assert!(matches!(
            Name::from_str(&long_label),
            Err(Error::LabelTooLong { length: 64 })
        ));
    }

    #[test]
    fn test_name_length_limits() {
        // Three 63-byte labels plus one 61-byte label: textual length
        // 63*3 + 61 + 4 dots = 254, the maximum.
        let label63 = "a".repeat(63);
        let max_name = format!("{label63}.{label63}.{label63}.{}.", "a".repeat(61));
        assert_eq!(max_name.len(), 254);
        assert_eq!(Name::from_str(&max_name).unwrap().len(), 254);

        // One character more is rejected.
        let too_long = format!("{label63}.{label63}.{label63}.{}.", "a".repeat(62));
        assert_eq!(too_long.len(), 255);
        assert!(matches!(
            Name::from_str(&too_long),
            Err(Error::NameTooLong { length: 255 })
        ));
    }

    #[test]
    fn test_empty_inner_label() {
        assert!(matches!(
            Name::from_str("a..b"),
            Err(Error::EmptyInnerLabel { position: 2 })
        ));
        assert!(matches!(
            Name::from_str(".a"),
            Err(Error::EmptyInnerLabel { position: 0 })
        ));
    }

    #[test]
    fn test_label_byte_rules() {
        // Underscore is allowed first, as in service labels.
        assert!(Name::from_str("_sip._tcp.example.com").is_ok());

        // Hyphen is fine in the middle, not at either end.
        assert!(Name::from_str("nim-lang.org").is_ok());
        assert!(matches!(
            Name::from_str("-bad.org"),
            Err(Error::InvalidLabelByte { byte: b'-', position: 0 })
        ));
        assert!(matches!(
            Name::from_str("bad-.org"),
            Err(Error::InvalidLabelByte { byte: b'-', position: 3 })
        ));

        // Underscore anywhere else is rejected.
        assert!(matches!(
            Name::from_str("ba_d.org"),
            Err(Error::InvalidLabelByte { byte: b'_', .. })
        ));

        assert!(matches!(
            Name::from_str("sp ace.org"),
            Err(Error::InvalidLabelByte { byte: b' ', .. })
        ));
    }
}
