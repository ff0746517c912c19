use sha2::{Digest, Sha256};

use crate::tree::AllocationNode;

/// Computes a SHA-256 fingerprint of an allocated tree.
///
/// The digest covers the pre-order sequence of `(depth, name, weight,
/// allocated)`, so two trees share a digest exactly when they have the same
/// shape, labels, weights and amounts.
pub fn allocation_digest(root: &AllocationNode) -> String {
    let mut hasher = Sha256::new();
    for (depth, node) in root.iter_preorder() {
        hasher.update((depth as u64).to_le_bytes());
        hasher.update((node.name.len() as u64).to_le_bytes());
        hasher.update(node.name.as_bytes());
        hasher.update(node.weight.to_le_bytes());
        match node.allocated {
            Some(amount) => {
                hasher.update(b"some");
                hasher.update(amount.to_le_bytes());
            }
            None => hasher.update(b"none"),
        }
    }
    format!("{:x}", hasher.finalize())
}
