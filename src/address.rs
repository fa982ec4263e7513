//! TON account identifiers.
//!
//! The registry only needs addresses to be comparable and hashable; this type exists so asset
//! lists in the community format deserialize without extra glue. Both the raw form
//! (`0:<64 hex>`) and the 48-character user-friendly form are accepted.

use std::fmt;
use std::str::FromStr;

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AddressError;

const HASH_LEN: usize = 32;
const FRIENDLY_LEN: usize = 36;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct AccountId {
    pub workchain: i32,
    pub hash: [u8; HASH_LEN],
}

impl AccountId {
    pub fn new(workchain: i32, hash: [u8; HASH_LEN]) -> Self {
        Self { workchain, hash }
    }

    fn parse_raw(wc: &str, hash: &str) -> Result<Self, AddressError> {
        let workchain = wc
            .parse::<i32>()
            .map_err(|_| AddressError::Workchain(wc.to_string()))?;
        let bytes = hex::decode(hash).map_err(|_| AddressError::Hash(hash.to_string()))?;
        let hash: [u8; HASH_LEN] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| AddressError::Length(bytes.len(), HASH_LEN))?;
        Ok(Self { workchain, hash })
    }

    /// flags(1) | workchain(1) | hash(32) | crc16(2)
    fn parse_friendly(s: &str) -> Result<Self, AddressError> {
        let engine = if s.contains(['-', '_']) { URL_SAFE } else { STANDARD };
        let bytes = engine.decode(s).map_err(|_| AddressError::Base64)?;
        if bytes.len() != FRIENDLY_LEN {
            return Err(AddressError::Length(bytes.len(), FRIENDLY_LEN));
        }
        let (body, checksum) = bytes.split_at(FRIENDLY_LEN - 2);
        if crc16(body).to_be_bytes() != checksum {
            return Err(AddressError::Checksum);
        }
        let mut hash = [0u8; HASH_LEN];
        hash.copy_from_slice(&body[2..]);
        Ok(Self {
            workchain: i32::from(body[1] as i8),
            hash,
        })
    }
}

/// CRC-16/XMODEM.
fn crc16(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for &byte in data {
        crc ^= u16::from(byte) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ 0x1021
            } else {
                crc << 1
            };
        }
    }
    crc
}

impl FromStr for AccountId {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once(':') {
            Some((wc, hash)) => Self::parse_raw(wc, hash),
            None => Self::parse_friendly(s),
        }
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.workchain, hex::encode(self.hash))
    }
}

impl Serialize for AccountId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crc16_matches_xmodem_check_value() {
        assert_eq!(crc16(b"123456789"), 0x31C3);
    }
}
