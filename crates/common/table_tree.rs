use tracing::{debug, trace};

use crate::{
    H256,
    errors::TableTreeError,
    merkle_tree::{compute_merkle_proof, compute_merkle_root},
    types::{RowSchema, Value},
};

/// Off-chain mirror of an append-only table committed on-chain by its Merkle
/// root.
///
/// Rows are identified by their 1-based append order, the same id the
/// contract assigns when it accepts the row. Appends must be replayed in the
/// exact order the contract accepted them; the tree has no way to detect a
/// reordering, it simply yields roots the contract will not recognize.
///
/// The root and proofs are recomputed from the leaves on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableMerkleTree {
    schema: RowSchema,
    leaves: Vec<H256>,
}

impl TableMerkleTree {
    pub fn new(schema: RowSchema) -> Self {
        Self {
            schema,
            leaves: Vec::new(),
        }
    }

    pub fn schema(&self) -> &RowSchema {
        &self.schema
    }

    /// Number of rows appended so far.
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    pub fn leaves(&self) -> &[H256] {
        &self.leaves
    }

    /// Append `row` as the next row id. A row that does not match the schema
    /// leaves the tree untouched.
    pub fn append(&mut self, row: &[Value]) -> Result<(), TableTreeError> {
        let id = self.leaves.len() + 1;
        let leaf = self.schema.hash_row(id, row)?;
        trace!(id, ?leaf, "Appended table row");
        self.leaves.push(leaf);
        Ok(())
    }

    /// Leaf hash of the row at 1-based `position`.
    pub fn get(&self, position: usize) -> Option<H256> {
        position
            .checked_sub(1)
            .and_then(|idx| self.leaves.get(idx))
            .copied()
    }

    pub fn root(&self) -> H256 {
        compute_merkle_root(&self.leaves)
    }

    /// Proof the contract needs to fold the next row into the current root.
    /// Defined for an empty tree, where it is empty.
    pub fn append_proof(&self) -> Vec<H256> {
        // The next free slot is always addressable.
        compute_merkle_proof(&self.leaves, self.leaves.len()).unwrap_or_default()
    }

    /// Proof that the row at 1-based `position` is committed by [`Self::root`].
    ///
    /// `position == len() + 1` is accepted and yields the append proof.
    pub fn inclusion_proof(&self, position: usize) -> Result<Vec<H256>, TableTreeError> {
        let max = self.leaves.len() + 1;
        let out_of_range = TableTreeError::OutOfRange { position, max };
        if position == 0 || position > max {
            debug!(position, max, "Rejected proof request");
            return Err(out_of_range);
        }
        compute_merkle_proof(&self.leaves, position - 1).ok_or(out_of_range)
    }
}
