// rcs300-rs/rcs300/src/types.rs

use crate::{Error, Result};
use std::convert::TryFrom;

/// IDm - Newtype Pattern (8 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Idm([u8; 8]);

impl Idm {
    /// Wrap raw IDm bytes.
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// Compact uppercase hex, e.g. `"0102030405060708"`.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }

    /// Space-separated uppercase hex pairs, e.g. `"01 02 … 08"`.
    pub fn to_hex_spaced(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }

    /// Parse a 16-hex-digit string (whitespace tolerated) back into an Idm.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = crate::utils::parse_hex(s).map_err(|_| Error::InvalidIdm(s.to_string()))?;
        Self::try_from(&bytes[..]).map_err(|_| Error::InvalidIdm(s.to_string()))
    }
}

impl TryFrom<&[u8]> for Idm {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != 8 {
            return Err(Error::InvalidIdm(crate::utils::bytes_to_hex(bytes)));
        }
        let mut arr = [0u8; 8];
        arr.copy_from_slice(&bytes[..8]);
        Ok(Self(arr))
    }
}

/// Access mode for a block-list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccessMode {
    /// Plain read access.
    Normal,
    /// Purse cashback access (sets 0x10 in the block-list control byte).
    PurseCashback,
}

/// Block range to read from one service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockListParam {
    /// Access mode for every block in the range.
    pub access_mode: AccessMode,
    /// First block number, inclusive.
    pub block_no_start: u32,
    /// Last block number, inclusive. Must be <= 0xFFFF.
    pub block_no_end: u32,
}

impl BlockListParam {
    /// Number of blocks covered by the range (both ends inclusive).
    /// Callers keep `block_no_start <= block_no_end`.
    pub fn block_count(&self) -> u32 {
        self.block_no_end - self.block_no_start + 1
    }
}

/// One service to read in a ReadWithoutEncryption call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServiceReadParam {
    /// Service code as exactly 4 hex digits, e.g. `"090f"`. Transmitted
    /// little-endian on the wire.
    pub service_code: String,
    /// Blocks to read within the service.
    pub block_list: BlockListParam,
}

impl ServiceReadParam {
    /// Parse and validate the 4-hex-digit service code.
    pub fn service_code_value(&self) -> Result<u16> {
        if self.service_code.len() != 4 || !self.service_code.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(Error::InvalidServiceCode {
                code: self.service_code.clone(),
            });
        }
        u16::from_str_radix(&self.service_code, 16).map_err(|_| Error::InvalidServiceCode {
            code: self.service_code.clone(),
        })
    }
}

/// Result of a successful polling exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PollingResult {
    /// Card IDm as compact uppercase hex (8 bytes).
    pub idm: String,
    /// Requested system code as compact uppercase hex (2 bytes).
    pub system_code: String,
}

/// Result of a successful RequestService exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequestServiceResult {
    /// Card IDm as compact uppercase hex.
    pub idm: String,
    /// Number of node key versions returned.
    pub node_count: u8,
    /// Raw node key version bytes as returned by the card.
    pub node_key_ver_list: Vec<u8>,
}

/// Result of a successful ReadWithoutEncryption exchange. All fields are
/// uppercase hex strings: `block_data` compact, the rest space-separated
/// pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReadResult {
    /// Card IDm as space-separated uppercase hex pairs.
    pub idm: String,
    /// First status flag byte.
    pub status_flag1: String,
    /// Second status flag byte.
    pub status_flag2: String,
    /// Number of blocks in the response.
    pub block_size: String,
    /// Concatenated block payload bytes.
    pub block_data: String,
}
