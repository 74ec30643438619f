use std::str::FromStr;

use ethereum_types::{H256, U256};
use serde::{Deserialize, Serialize};
use tabletree_crypto::keccak::keccak_hash;

use crate::{
    constants::ROW_ID_TYPE,
    errors::EncodingError,
    types::{SolidityType, Value},
};

/// Ordered Solidity types every row of a table is packed with.
///
/// The schema is part of a tree's identity: the verifier contract hashes
/// rows with the same types, so two trees over different schemas never share
/// roots.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowSchema(Vec<SolidityType>);

impl RowSchema {
    /// Parses Solidity spellings such as `["string", "uint256"]`.
    pub fn parse<S: AsRef<str>>(types: &[S]) -> Result<Self, EncodingError> {
        types
            .iter()
            .map(|ty| SolidityType::from_str(ty.as_ref()))
            .collect()
    }

    pub fn types(&self) -> &[SolidityType] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Packs `(uint256 id, values...)` the way `abi.encodePacked` does.
    pub fn encode_packed(&self, id: usize, values: &[Value]) -> Result<Vec<u8>, EncodingError> {
        if values.len() != self.0.len() {
            return Err(EncodingError::FieldCount {
                expected: self.0.len(),
                actual: values.len(),
            });
        }

        let mut packed = Vec::with_capacity(
            self.0
                .iter()
                .map(|ty| ty.packed_size().unwrap_or_default())
                .sum::<usize>()
                + 32,
        );
        pack_uint(&mut packed, U256::from(id), ROW_ID_TYPE);
        for (index, (ty, value)) in self.0.iter().zip(values).enumerate() {
            pack_value(&mut packed, index, *ty, value)?;
        }
        Ok(packed)
    }

    /// Leaf hash of a row: `keccak256(abi.encodePacked(id, values...))`.
    pub fn hash_row(&self, id: usize, values: &[Value]) -> Result<H256, EncodingError> {
        let packed = self.encode_packed(id, values)?;
        Ok(H256(keccak_hash(packed)))
    }
}

impl FromIterator<SolidityType> for RowSchema {
    fn from_iter<I: IntoIterator<Item = SolidityType>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn pack_uint(out: &mut Vec<u8>, value: U256, ty: SolidityType) {
    let size = ty.packed_size().unwrap_or(32);
    out.extend_from_slice(&value.to_big_endian()[32 - size..]);
}

// Signed values fit iff every bit above the sign bit repeats it.
fn fits_signed(value: U256, bits: u16) -> bool {
    if bits >= 256 {
        return true;
    }
    let magnitude = if value.bit(255) { !value } else { value };
    magnitude.bits() < usize::from(bits)
}

fn pack_value(
    out: &mut Vec<u8>,
    index: usize,
    ty: SolidityType,
    value: &Value,
) -> Result<(), EncodingError> {
    match (ty, value) {
        (SolidityType::String, Value::String(s)) => out.extend_from_slice(s.as_bytes()),
        (SolidityType::Bytes, Value::Bytes(b)) => out.extend_from_slice(b),
        (SolidityType::Bool, Value::Bool(b)) => out.push(u8::from(*b)),
        (SolidityType::Address, Value::Address(a)) => out.extend_from_slice(a.as_bytes()),
        (SolidityType::Uint(bits), Value::Uint(n)) => {
            if n.bits() > usize::from(bits) {
                return Err(EncodingError::IntegerOverflow { index, ty });
            }
            pack_uint(out, *n, ty);
        }
        (SolidityType::Int(bits), Value::Int(n)) => {
            if !fits_signed(*n, bits) {
                return Err(EncodingError::IntegerOverflow { index, ty });
            }
            // Truncating the two's complement keeps the sign.
            pack_uint(out, *n, ty);
        }
        (SolidityType::FixedBytes(size), Value::FixedBytes(b)) => {
            if b.len() != usize::from(size) {
                return Err(EncodingError::FixedBytesLength {
                    index,
                    ty,
                    expected: usize::from(size),
                    actual: b.len(),
                });
            }
            out.extend_from_slice(b);
        }
        (expected, actual) => {
            return Err(EncodingError::TypeMismatch {
                index,
                expected,
                actual: actual.kind(),
            });
        }
    }
    Ok(())
}
