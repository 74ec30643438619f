use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

use crate::{
    constants::{MAX_FIXED_BYTES, MAX_INTEGER_BITS},
    errors::EncodingError,
};

/// Elementary Solidity type a row field is declared with.
///
/// Only the types `abi.encodePacked` packs as a single contiguous value are
/// supported; arrays and tuples are rejected when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolidityType {
    String,
    Bytes,
    Bool,
    Address,
    /// `uintN`, with the width in bits.
    Uint(u16),
    /// `intN`, with the width in bits.
    Int(u16),
    /// `bytesN`, with the width in bytes.
    FixedBytes(u8),
}

impl SolidityType {
    /// Number of bytes the value occupies once packed, `None` for dynamic types.
    pub fn packed_size(&self) -> Option<usize> {
        match self {
            SolidityType::String | SolidityType::Bytes => None,
            SolidityType::Bool => Some(1),
            SolidityType::Address => Some(20),
            SolidityType::Uint(bits) | SolidityType::Int(bits) => Some(usize::from(*bits / 8)),
            SolidityType::FixedBytes(size) => Some(usize::from(*size)),
        }
    }
}

// `uint08` and `bytes+4` are not Solidity types.
fn is_canonical_number(digits: &str) -> bool {
    !digits.is_empty() && !digits.starts_with('0') && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parse_integer_bits(bits: &str, ty: &str) -> Result<u16, EncodingError> {
    // `uint` and `int` are aliases for the 256-bit types.
    if bits.is_empty() {
        return Ok(MAX_INTEGER_BITS);
    }
    if !is_canonical_number(bits) {
        return Err(EncodingError::InvalidType(ty.to_string()));
    }
    match bits.parse::<u16>() {
        Ok(bits) if bits % 8 == 0 && (8..=MAX_INTEGER_BITS).contains(&bits) => Ok(bits),
        _ => Err(EncodingError::InvalidType(ty.to_string())),
    }
}

impl FromStr for SolidityType {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ty = s.trim();
        match ty {
            "string" => Ok(SolidityType::String),
            "bytes" => Ok(SolidityType::Bytes),
            "bool" => Ok(SolidityType::Bool),
            "address" => Ok(SolidityType::Address),
            _ => {
                if let Some(bits) = ty.strip_prefix("uint") {
                    parse_integer_bits(bits, ty).map(SolidityType::Uint)
                } else if let Some(bits) = ty.strip_prefix("int") {
                    parse_integer_bits(bits, ty).map(SolidityType::Int)
                } else if let Some(size) = ty.strip_prefix("bytes") {
                    if !is_canonical_number(size) {
                        return Err(EncodingError::InvalidType(ty.to_string()));
                    }
                    match size.parse::<u8>() {
                        Ok(size) if (1..=MAX_FIXED_BYTES).contains(&size) => {
                            Ok(SolidityType::FixedBytes(size))
                        }
                        _ => Err(EncodingError::InvalidType(ty.to_string())),
                    }
                } else {
                    Err(EncodingError::InvalidType(ty.to_string()))
                }
            }
        }
    }
}

impl fmt::Display for SolidityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolidityType::String => write!(f, "string"),
            SolidityType::Bytes => write!(f, "bytes"),
            SolidityType::Bool => write!(f, "bool"),
            SolidityType::Address => write!(f, "address"),
            SolidityType::Uint(bits) => write!(f, "uint{bits}"),
            SolidityType::Int(bits) => write!(f, "int{bits}"),
            SolidityType::FixedBytes(size) => write!(f, "bytes{size}"),
        }
    }
}

impl Serialize for SolidityType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SolidityType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(D::Error::custom)
    }
}
