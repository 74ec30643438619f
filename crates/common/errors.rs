use crate::H256;
use crate::types::SolidityType;

/// A row that cannot be packed against the tree's schema.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("row has {actual} values but the schema declares {expected}")]
    FieldCount { expected: usize, actual: usize },
    #[error("value {index} is {actual} but the schema declares {expected}")]
    TypeMismatch {
        index: usize,
        expected: SolidityType,
        actual: &'static str,
    },
    #[error("value {index} does not fit in {ty}")]
    IntegerOverflow { index: usize, ty: SolidityType },
    #[error("value {index} has {actual} bytes but {ty} needs exactly {expected}")]
    FixedBytesLength {
        index: usize,
        ty: SolidityType,
        expected: usize,
        actual: usize,
    },
    #[error("invalid solidity type `{0}`")]
    InvalidType(String),
    #[error("invalid {ty} value: {value}")]
    InvalidValue { ty: SolidityType, value: String },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TableTreeError {
    #[error("encoding mismatch: {0}")]
    EncodingMismatch(#[from] EncodingError),
    #[error("position {position} is out of range [1, {max}]")]
    OutOfRange { position: usize, max: usize },
}

/// Rejections raised while folding a proof the way the verifier contract does.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProofError {
    #[error("proof ran out of siblings")]
    ProofTooShort,
    #[error("proof has {unused} unused siblings")]
    ProofTooLong { unused: usize },
    #[error("proof folds to {computed:#x}, expected root {expected:#x}")]
    RootMismatch { expected: H256, computed: H256 },
}
