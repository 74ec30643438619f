use crate::H256;
use crate::types::SolidityType;

// === On-chain verifier compatibility ===

/// Padding for the unmatched last node of an odd-width level, and the root of
/// an empty table. Must stay `bytes32(0)` to match the verifier contract.
pub const ZERO_HASH: H256 = H256([0u8; 32]);

/// Row ids are packed as `uint256` ahead of the row values.
pub const ROW_ID_TYPE: SolidityType = SolidityType::Uint(256);

/// Widest integer and fixed-bytes types Solidity can declare.
pub const MAX_INTEGER_BITS: u16 = 256;
pub const MAX_FIXED_BYTES: u8 = 32;
