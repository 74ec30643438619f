use bytes::Bytes;
use ethereum_types::{Address, U256};

use crate::{
    errors::EncodingError,
    serde_utils,
    types::SolidityType,
};

/// A single row field, before packing.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Value {
    String(String),
    Bytes(Bytes),
    Bool(bool),
    Address(Address),
    Uint(U256),
    /// Signed integer in 256-bit two's complement.
    Int(U256),
    FixedBytes(Bytes),
}

impl Value {
    /// Builds a signed value from a native integer.
    pub fn int(value: i64) -> Self {
        let magnitude = U256::from(value.unsigned_abs());
        if value < 0 {
            Value::Int(serde_utils::u256::twos_complement_neg(magnitude))
        } else {
            Value::Int(magnitude)
        }
    }

    pub fn fixed_bytes(value: impl Into<Bytes>) -> Self {
        Value::FixedBytes(value.into())
    }

    /// Name of the value's kind, used in mismatch reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::String(_) => "a string",
            Value::Bytes(_) => "a byte string",
            Value::Bool(_) => "a bool",
            Value::Address(_) => "an address",
            Value::Uint(_) => "an unsigned integer",
            Value::Int(_) => "a signed integer",
            Value::FixedBytes(_) => "a fixed byte string",
        }
    }

    /// Reads a JSON value as the given Solidity type.
    ///
    /// Integers may be JSON numbers or strings (decimal or `0x` hex, with a
    /// leading `-` for signed types). Byte strings and addresses are hex
    /// strings.
    pub fn from_json(value: &serde_json::Value, ty: SolidityType) -> Result<Self, EncodingError> {
        use serde_json::Value as Json;

        let invalid = || EncodingError::InvalidValue {
            ty,
            value: value.to_string(),
        };
        let hex_bytes = |s: &str| serde_utils::bytes::from_hex_str(s).map_err(|_| invalid());

        match (ty, value) {
            (SolidityType::String, Json::String(s)) => Ok(Value::String(s.clone())),
            (SolidityType::Bool, Json::Bool(b)) => Ok(Value::Bool(*b)),
            (SolidityType::Bytes, Json::String(s)) => Ok(Value::Bytes(hex_bytes(s)?.into())),
            (SolidityType::FixedBytes(_), Json::String(s)) => {
                Ok(Value::FixedBytes(hex_bytes(s)?.into()))
            }
            (SolidityType::Address, Json::String(s)) => {
                let raw = hex_bytes(s)?;
                if raw.len() != Address::len_bytes() {
                    return Err(invalid());
                }
                Ok(Value::Address(Address::from_slice(&raw)))
            }
            (SolidityType::Uint(_), Json::Number(n)) => {
                n.as_u64().map(|n| Value::Uint(n.into())).ok_or_else(invalid)
            }
            (SolidityType::Uint(_), Json::String(s)) => serde_utils::u256::from_hex_or_dec_str(s)
                .map(Value::Uint)
                .map_err(|_| invalid()),
            (SolidityType::Int(_), Json::Number(n)) => {
                n.as_i64().map(Value::int).ok_or_else(invalid)
            }
            (SolidityType::Int(_), Json::String(s)) => serde_utils::u256::from_signed_str(s)
                .map(Value::Int)
                .map_err(|_| invalid()),
            _ => Err(invalid()),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Uint(value.into())
    }
}

impl From<U256> for Value {
    fn from(value: U256) -> Self {
        Value::Uint(value)
    }
}

impl From<Address> for Value {
    fn from(value: Address) -> Self {
        Value::Address(value)
    }
}
