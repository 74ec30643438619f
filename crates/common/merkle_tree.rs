//! Ordered Keccak256 Merkle tree over table leaves, matching the dynamic Merkle
//! tree library used by the table's verifier contract.
//!
//! Unlike OpenZeppelin's `MerkleProof`, pairs are hashed in position order
//! (`H(left, right)`), and the unmatched last node of an odd-width level is
//! paired with [`ZERO_HASH`] instead of being promoted or duplicated.

use crate::H256;
use crate::constants::ZERO_HASH;
use tabletree_crypto::keccak::Keccak256;

/// Compute the Merkle root of an ordered leaf sequence.
///
/// An empty sequence yields [`ZERO_HASH`], the root the verifier contract
/// starts from; a single leaf is its own root.
pub fn compute_merkle_root(hashes: &[H256]) -> H256 {
    match hashes {
        [] => ZERO_HASH,
        [single] => *single,
        _ => {
            let mut current_level = hashes.to_vec();
            while current_level.len() > 1 {
                current_level = merkle_next_level(&current_level);
            }
            current_level.first().copied().unwrap_or(ZERO_HASH)
        }
    }
}

/// Compute the sibling path for the leaf at 0-based `index`.
///
/// `index == hashes.len()` addresses the next free slot: the path is computed
/// as if a [`ZERO_HASH`] placeholder were appended, which is what the verifier
/// folds a new leaf through on append. Returns `None` past that slot.
///
/// Siblings that fall beyond the end of their level are left out; the verifier
/// substitutes [`ZERO_HASH`] for them.
pub fn compute_merkle_proof(hashes: &[H256], index: usize) -> Option<Vec<H256>> {
    if index > hashes.len() {
        return None;
    }

    let mut current_level = hashes.to_vec();
    if index == current_level.len() {
        current_level.push(ZERO_HASH);
    }
    let mut proof = Vec::new();
    let mut idx = index;

    while current_level.len() > 1 {
        // Add sibling to proof if it exists
        if let Some(sibling) = current_level.get(idx ^ 1) {
            proof.push(*sibling);
        }

        current_level = merkle_next_level(&current_level);
        idx /= 2;
    }

    Some(proof)
}

/// Build the next level of a Merkle tree from the current level.
///
/// Pairs adjacent elements and hashes them. If there's an odd element, it's
/// paired with [`ZERO_HASH`].
fn merkle_next_level(current_level: &[H256]) -> Vec<H256> {
    let mut next_level = Vec::with_capacity(current_level.len().div_ceil(2));
    for pair in current_level.chunks(2) {
        match pair {
            [left, right] => next_level.push(hash_pair(left, right)),
            [single] => next_level.push(hash_pair(single, &ZERO_HASH)),
            _ => {}
        }
    }
    next_level
}

/// Ordered pair hash: `keccak256(abi.encodePacked(left, right))`.
pub fn hash_pair(left: &H256, right: &H256) -> H256 {
    H256(Keccak256::new().update(left).update(right).finalize())
}
