//! # Dotted-Quad Addresses
//!
//! Parsing for the address tokens found in access logs and for the two
//! address filters a run may carry.
//!
//! Both filters work on each octet independently:
//! * [`AddressBound`] admits an address when every octet is `>=` the bound's octet
//!   at the same position. `10.5.0.0` does not admit `11.0.0.0`.
//! * [`AddressMask`] admits an address when AND-ing each octet with the mask
//!   leaves it unchanged, i.e. the address sets no bit the mask leaves clear.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of octets in a dotted-quad address.
pub const OCTET_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressParseError {
    #[error("address is empty")]
    Empty,
    #[error("'{0}' is not an octet between 0 and 255")]
    InvalidOctet(String),
    #[error("expected {expected} octets, found {found}")]
    OctetCount { expected: usize, found: usize },
}

/// Parses a dot-separated list of decimal octets without checking how many there are.
///
/// Octets must be plain ASCII digits; signs and whitespace are rejected.
pub fn parse_octets(s: &str) -> Result<Vec<u8>, AddressParseError> {
    if s.is_empty() {
        return Err(AddressParseError::Empty);
    }

    s.split('.').map(parse_octet).collect()
}

/// Parses a full dotted-quad such as `192.168.1.10`.
pub fn parse_dotted_quad(s: &str) -> Result<[u8; OCTET_COUNT], AddressParseError> {
    let octets: Vec<u8> = parse_octets(s)?;
    let found: usize = octets.len();

    octets
        .try_into()
        .map_err(|_| AddressParseError::OctetCount {
            expected: OCTET_COUNT,
            found,
        })
}

fn parse_octet(octet: &str) -> Result<u8, AddressParseError> {
    if octet.is_empty() || !octet.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AddressParseError::InvalidOctet(octet.to_string()));
    }

    octet
        .parse::<u8>()
        .map_err(|_| AddressParseError::InvalidOctet(octet.to_string()))
}

fn write_octets(f: &mut fmt::Formatter<'_>, octets: &[u8]) -> fmt::Result {
    for (idx, octet) in octets.iter().enumerate() {
        if idx > 0 {
            f.write_str(".")?;
        }
        write!(f, "{octet}")?;
    }
    Ok(())
}

/// Lower bound compared octet by octet.
///
/// Accepts any number of octets. Only the positions present in both the bound
/// and the address are compared: `10.20` admits any address starting at or
/// above `10` and `20`, and the fifth octet of `10.0.0.1.5` is never looked at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressBound {
    octets: Vec<u8>,
}

impl AddressBound {
    pub fn octets(&self) -> &[u8] {
        &self.octets
    }

    /// Pairs are compared up to the shorter of the two octet lists.
    pub fn admits(&self, address: &[u8]) -> bool {
        address
            .iter()
            .zip(self.octets.iter())
            .all(|(addr_octet, start_octet)| addr_octet >= start_octet)
    }
}

impl FromStr for AddressBound {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_octets(s).map(|octets| Self { octets })
    }
}

impl fmt::Display for AddressBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_octets(f, &self.octets)
    }
}

/// Bit mask applied to every octet of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressMask {
    octets: [u8; OCTET_COUNT],
}

impl AddressMask {
    pub fn new(octets: [u8; OCTET_COUNT]) -> Self {
        Self { octets }
    }

    pub fn octets(&self) -> [u8; OCTET_COUNT] {
        self.octets
    }

    pub fn admits(&self, address: &[u8; OCTET_COUNT]) -> bool {
        address
            .iter()
            .zip(self.octets.iter())
            .all(|(addr_octet, mask_octet)| addr_octet & mask_octet == *addr_octet)
    }
}

impl FromStr for AddressMask {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_dotted_quad(s).map(Self::new)
    }
}

impl fmt::Display for AddressMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_octets(f, &self.octets)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
