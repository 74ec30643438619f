pub use ethereum_types::*;
pub mod constants;
pub mod serde_utils;
pub mod types;
pub use bytes::Bytes;
pub mod errors;
pub mod merkle_proof;
pub mod merkle_tree;
pub mod table_tree;

pub use table_tree::TableMerkleTree;
