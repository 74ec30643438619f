//! Off-chain mirror of the verifier contract's proof checks.
//!
//! These functions fold proofs exactly like the on-chain library does, so a
//! proof accepted here is accepted by the contract. They are stricter in one
//! respect: trailing proof elements the fold never reads are rejected with
//! [`ProofError::ProofTooLong`], where the contract ignores them. They never
//! look at the leaf sequence; only the tree size, the proof and the hashes the
//! contract would be given.

use crate::H256;
use crate::constants::ZERO_HASH;
use crate::errors::ProofError;
use crate::merkle_tree::hash_pair;

/// Fold `leaf`, sitting at 0-based `idx` in a tree of `len` leaves, up to the
/// root.
///
/// A level whose sibling slot is past its end consumes no proof element and
/// pads with [`ZERO_HASH`] instead.
pub fn calc_root_hash(
    mut idx: usize,
    mut len: usize,
    leaf: H256,
    proof: &[H256],
) -> Result<H256, ProofError> {
    if len == 0 {
        return Ok(ZERO_HASH);
    }

    let mut siblings = proof.iter();
    let mut node = leaf;
    while len > 1 {
        let peer_idx = idx ^ 1;
        let peer = if peer_idx < len {
            *siblings.next().ok_or(ProofError::ProofTooShort)?
        } else {
            ZERO_HASH
        };
        node = if idx % 2 == 0 {
            hash_pair(&node, &peer)
        } else {
            hash_pair(&peer, &node)
        };
        len = (len - 1) / 2 + 1;
        idx /= 2;
    }

    ensure_consumed(siblings.len())?;
    Ok(node)
}

/// Recompute the root of a `len`-leaf tree from its append proof.
///
/// The append proof describes the path of the empty slot at `len`. Walking it
/// through the current tree, a node on that path only exists once it has a
/// real left peer; until then it is absent rather than a zero leaf. When the
/// current tree narrows to a single node, that node is the root, unless the
/// path sits right of it, which happens exactly when `len` is a power of two
/// and the proof is `[root]`.
pub fn calc_prior_root(len: usize, proof: &[H256]) -> Result<H256, ProofError> {
    if len == 0 {
        ensure_consumed(proof.len())?;
        return Ok(ZERO_HASH);
    }

    let mut siblings = proof.iter();
    let mut node: Option<H256> = None;
    let mut idx = len;
    let mut width = len;
    while width > 1 {
        node = if idx % 2 == 1 {
            let peer = siblings.next().ok_or(ProofError::ProofTooShort)?;
            Some(hash_pair(peer, &node.unwrap_or(ZERO_HASH)))
        } else {
            node.map(|node| hash_pair(&node, &ZERO_HASH))
        };
        width = width.div_ceil(2);
        idx /= 2;
    }

    let root = if idx == 0 {
        node.ok_or(ProofError::ProofTooShort)?
    } else {
        *siblings.next().ok_or(ProofError::ProofTooShort)?
    };
    ensure_consumed(siblings.len())?;
    Ok(root)
}

/// Check that `leaf` sits at 1-based `position` of the tree committed to by
/// `root`.
pub fn verify_inclusion(
    root: H256,
    len: usize,
    position: usize,
    leaf: H256,
    proof: &[H256],
) -> bool {
    if position == 0 || position > len {
        return false;
    }
    calc_root_hash(position - 1, len, leaf, proof).is_ok_and(|computed| computed == root)
}

/// Check an append proof against the current root and return the root after
/// appending `leaf` as row `len + 1`.
pub fn verify_append(
    len: usize,
    old_root: H256,
    leaf: H256,
    proof: &[H256],
) -> Result<H256, ProofError> {
    let computed = calc_prior_root(len, proof)?;
    if computed != old_root {
        return Err(ProofError::RootMismatch {
            expected: old_root,
            computed,
        });
    }
    calc_root_hash(len, len + 1, leaf, proof)
}

fn ensure_consumed(unused: usize) -> Result<(), ProofError> {
    if unused > 0 {
        return Err(ProofError::ProofTooLong { unused });
    }
    Ok(())
}
