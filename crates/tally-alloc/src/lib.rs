#![deny(missing_docs)]
#![doc = "Weighted exact-partition engine: largest-remainder splitting of integer amounts and its recursive application over a weighted tree."]

//! The splitter never creates or destroys a unit: `split(total, w)` always
//! sums to `total`, and [`allocate_tree`] keeps `parent == sum(children)` at
//! every internal node. Neither function performs I/O.

mod hash;
mod split;
mod tree;

pub use hash::allocation_digest;
pub use split::{split, split_money};
pub use tree::{allocate_tree, verify_conservation, AllocationNode, PreOrder};
