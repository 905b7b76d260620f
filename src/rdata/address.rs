//! Address record data (A, AAAA, WKS).

use crate::error::{Error, Result};
use crate::wire::WireWriter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// A record - IPv4 address (RFC 1035).
///
/// The RDATA is exactly 4 bytes in network byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct A {
    /// The IPv4 address.
    address: Ipv4Addr,
}

impl A {
    /// Creates a new A record.
    #[inline]
    pub const fn new(address: Ipv4Addr) -> Self {
        Self { address }
    }

    /// Returns the IPv4 address.
    #[inline]
    pub const fn address(&self) -> Ipv4Addr {
        self.address
    }

    /// Parses an A record from its RDATA bytes.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let octets: [u8; 4] = data.try_into().map_err(|_| {
            Error::malformed("A", format!("expected 4 bytes, got {}", data.len()))
        })?;
        Ok(Self {
            address: Ipv4Addr::from(octets),
        })
    }

    /// Writes the A record RDATA.
    pub fn write_to(&self, writer: &mut WireWriter) {
        writer.write_bytes(&self.address.octets());
    }
}

impl From<Ipv4Addr> for A {
    fn from(address: Ipv4Addr) -> Self {
        Self::new(address)
    }
}

impl From<[u8; 4]> for A {
    fn from(octets: [u8; 4]) -> Self {
        Self::new(Ipv4Addr::from(octets))
    }
}

impl fmt::Display for A {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address)
    }
}

/// AAAA record - IPv6 address (RFC 1886 / RFC 3596).
///
/// The RDATA is exactly 16 bytes in network byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AAAA {
    /// The IPv6 address.
    address: Ipv6Addr,
}

impl AAAA {
    /// Creates a new AAAA record.
    #[inline]
    pub const fn new(address: Ipv6Addr) -> Self {
        Self { address }
    }

    /// Returns the IPv6 address.
    #[inline]
    pub const fn address(&self) -> Ipv6Addr {
        self.address
    }

    /// Parses an AAAA record from its RDATA bytes.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let octets: [u8; 16] = data.try_into().map_err(|_| {
            Error::malformed("AAAA", format!("expected 16 bytes, got {}", data.len()))
        })?;
        Ok(Self {
            address: Ipv6Addr::from(octets),
        })
    }

    /// Writes the AAAA record RDATA.
    pub fn write_to(&self, writer: &mut WireWriter) {
        writer.write_bytes(&self.address.octets());
    }
}

impl From<Ipv6Addr> for AAAA {
    fn from(address: Ipv6Addr) -> Self {
        Self::new(address)
    }
}

impl From<[u8; 16]> for AAAA {
    fn from(octets: [u8; 16]) -> Self {
        Self::new(Ipv6Addr::from(octets))
    }
}

impl fmt::Display for AAAA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address)
    }
}

/// WKS record - well-known services (RFC 1035).
///
/// An IPv4 address, an IP protocol number, and a bitmap with one bit per
/// port, filling the remainder of the RDATA.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WKS {
    /// The host address.
    address: Ipv4Addr,
    /// IP protocol number (6 for TCP, 17 for UDP).
    protocol: u8,
    /// Service bitmap; bit `n` set means port `n` is served.
    bitmap: Vec<u8>,
}

impl WKS {
    /// Creates a new WKS record.
    pub fn new(address: Ipv4Addr, protocol: u8, bitmap: impl Into<Vec<u8>>) -> Self {
        Self {
            address,
            protocol,
            bitmap: bitmap.into(),
        }
    }

    /// Returns the host address.
    #[inline]
    pub const fn address(&self) -> Ipv4Addr {
        self.address
    }

    /// Returns the IP protocol number.
    #[inline]
    pub const fn protocol(&self) -> u8 {
        self.protocol
    }

    /// Returns the service bitmap.
    pub fn bitmap(&self) -> &[u8] {
        &self.bitmap
    }

    /// Returns true if the bitmap marks `port` as served.
    pub fn serves_port(&self, port: u16) -> bool {
        let byte = usize::from(port / 8);
        let bit = 7 - (port % 8);
        self.bitmap
            .get(byte)
            .is_some_and(|b| b & (1 << bit) != 0)
    }

    /// Parses a WKS record from its RDATA bytes.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < 5 {
            return Err(Error::malformed(
                "WKS",
                format!("expected at least 5 bytes, got {}", data.len()),
            ));
        }
        let octets: [u8; 4] = data[..4].try_into().unwrap();
        Ok(Self {
            address: Ipv4Addr::from(octets),
            protocol: data[4],
            bitmap: data[5..].to_vec(),
        })
    }

    /// Writes the WKS record RDATA.
    pub fn write_to(&self, writer: &mut WireWriter) {
        writer.write_bytes(&self.address.octets());
        writer.write_u8(self.protocol);
        writer.write_bytes(&self.bitmap);
    }
}

impl fmt::Display for WKS {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.address, self.protocol)?;
        for (byte_idx, &byte) in self.bitmap.iter().enumerate() {
            for bit in 0..8 {
                if byte & (0x80 >> bit) != 0 {
                    write!(f, " {}", byte_idx * 8 + bit)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a_parse() {
        let a = A::parse(&[192, 0, 2, 1]).unwrap();
        assert_eq!(a.address(), Ipv4Addr::new(192, 0, 2, 1));
        assert_eq!(a.to_string(), "192.0.2.1");
    }

    #[test]
    fn test_a_length_checked() {
        assert!(matches!(
            A::parse(&[192, 0, 2]),
            Err(Error::MalformedRData { .. })
        ));
        assert!(A::parse(&[192, 0, 2, 1, 9]).is_err());
    }

    #[test]
    fn test_a_roundtrip() {
        let original = A::new(Ipv4Addr::new(10, 0, 0, 1));
        let mut writer = WireWriter::new(4);
        original.write_to(&mut writer);
        assert_eq!(A::parse(writer.as_bytes()).unwrap(), original);
    }

    #[test]
    fn test_aaaa_parse() {
        let data: [u8; 16] = [
            0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x01,
        ];
        let aaaa = AAAA::parse(&data).unwrap();
        assert_eq!(
            aaaa.address(),
            Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 1)
        );
        assert_eq!(aaaa.to_string(), "2001:db8::1");
    }

    #[test]
    fn test_aaaa_length_checked() {
        assert!(matches!(
            AAAA::parse(&[0; 15]),
            Err(Error::MalformedRData { .. })
        ));
    }

    #[test]
    fn test_wks() {
        // Byte 3 covers ports 24-31; mark 25 and 26.
        let mut bitmap = vec![0u8; 4];
        bitmap[3] = 0b0110_0000;
        let wks = WKS::new(Ipv4Addr::new(10, 0, 0, 1), 6, bitmap);

        assert!(wks.serves_port(25));
        assert!(wks.serves_port(26));
        assert!(!wks.serves_port(24));
        assert!(!wks.serves_port(80));

        let mut writer = WireWriter::new(16);
        wks.write_to(&mut writer);
        assert_eq!(WKS::parse(writer.as_bytes()).unwrap(), wks);
    }

    #[test]
    fn test_wks_too_short() {
        assert!(matches!(
            WKS::parse(&[10, 0, 0, 1]),
            Err(Error::MalformedRData { .. })
        ));
    }
}
