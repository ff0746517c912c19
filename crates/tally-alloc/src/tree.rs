use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use tally_core::{ErrorInfo, TallyError};
use tracing::debug;

use crate::split::split;

/// A bucket in the allocation hierarchy.
///
/// The caller owns the tree. [`allocate_tree`] only ever writes the
/// `allocated` slot; names, weights and child order are left untouched.
/// Child order decides tie-break priority among siblings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AllocationNode {
    /// Opaque label, carried into error context and reports.
    pub name: String,
    /// Relative claim on the parent's amount.
    #[serde(default = "default_weight")]
    pub weight: u64,
    /// Ordered sub-buckets.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<AllocationNode>,
    /// Amount assigned by the allocator; `None` until allocated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocated: Option<i64>,
}

fn default_weight() -> u64 {
    1
}

impl AllocationNode {
    /// Creates a leaf node with no allocation.
    pub fn new(name: impl Into<String>, weight: u64) -> Self {
        Self {
            name: name.into(),
            weight,
            children: Vec::new(),
            allocated: None,
        }
    }

    /// Replaces the children of this node.
    pub fn with_children(mut self, children: impl IntoIterator<Item = AllocationNode>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    /// Appends a child to this node.
    pub fn push_child(&mut self, child: AllocationNode) {
        self.children.push(child);
    }

    /// Returns whether the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the allocated amount, if any.
    pub fn allocated(&self) -> Option<i64> {
        self.allocated
    }

    /// Returns the child at `index`.
    pub fn child(&self, index: usize) -> Option<&AllocationNode> {
        self.children.get(index)
    }

    /// Walks the tree depth first, parents before children, yielding the depth
    /// of every node (the root is at depth 0).
    pub fn iter_preorder(&self) -> PreOrder<'_> {
        PreOrder {
            stack: vec![(0, self)],
        }
    }

    /// Clears every allocated slot in the subtree.
    pub fn reset(&mut self) {
        self.allocated = None;
        for child in &mut self.children {
            child.reset();
        }
    }

    /// Renders an indented, one-line-per-node view of the tree.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for AllocationNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (depth, node) in self.iter_preorder() {
            let indent = "  ".repeat(depth);
            match node.allocated {
                Some(amount) => writeln!(
                    f,
                    "{indent}- {}: {amount} (weight: {})",
                    node.name, node.weight
                )?,
                None => writeln!(f, "{indent}- {}: - (weight: {})", node.name, node.weight)?,
            }
        }
        Ok(())
    }
}

/// Pre-order iterator returned by [`AllocationNode::iter_preorder`].
#[derive(Debug)]
pub struct PreOrder<'a> {
    stack: Vec<(usize, &'a AllocationNode)>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (usize, &'a AllocationNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}

/// Distributes `total` down the hierarchy rooted at `root`.
///
/// The root receives `total`. Every internal node then splits its own amount
/// across its children by weight with [`split`], assigns all children, and
/// only then descends into each child in order. On success every internal
/// node holds exactly the sum of its children.
///
/// # Errors
///
/// Returns [`TallyError::InvalidWeights`] as soon as a node's children have
/// weights summing to zero; the error context names the node and its depth.
/// Allocation stops at that point and the tree is left partially allocated:
/// nodes assigned before the failure keep their amounts and the failing
/// node's children stay unset. Callers must discard or re-run the whole tree.
pub fn allocate_tree(root: &mut AllocationNode, total: i64) -> Result<(), TallyError> {
    root.allocated = Some(total);
    debug!(root = %root.name, total, "allocating tree");
    distribute(root, total, 0)
}

fn distribute(parent: &mut AllocationNode, amount: i64, depth: usize) -> Result<(), TallyError> {
    if parent.is_leaf() {
        return Ok(());
    }

    let weights: Vec<u64> = parent.children.iter().map(|child| child.weight).collect();
    let parts = split(amount, &weights).map_err(|err| at_node(err, &parent.name, depth))?;
    for (child, part) in parent.children.iter_mut().zip(&parts) {
        child.allocated = Some(*part);
    }
    debug!(node = %parent.name, depth, amount, ?parts, "distributed to children");

    for (child, part) in parent.children.iter_mut().zip(parts) {
        distribute(child, part, depth + 1)?;
    }
    Ok(())
}

fn at_node(err: TallyError, name: &str, depth: usize) -> TallyError {
    err.map_info(|info| info.with_context("node", name).with_context("depth", depth))
}

/// Checks that every node is allocated and that every internal node holds
/// exactly the sum of its children.
///
/// # Errors
///
/// Returns [`TallyError::Conservation`] naming the first offending node in
/// pre-order.
pub fn verify_conservation(root: &AllocationNode) -> Result<(), TallyError> {
    for (depth, node) in root.iter_preorder() {
        let Some(amount) = node.allocated else {
            let info = ErrorInfo::new("unallocated-node", "node has no allocated amount")
                .with_context("node", &node.name)
                .with_context("depth", depth);
            return Err(TallyError::Conservation(info));
        };
        if node.is_leaf() {
            continue;
        }
        let mut children_sum: i128 = 0;
        for child in &node.children {
            match child.allocated {
                Some(value) => children_sum += i128::from(value),
                None => {
                    let info = ErrorInfo::new("unallocated-node", "node has no allocated amount")
                        .with_context("node", &child.name)
                        .with_context("depth", depth + 1);
                    return Err(TallyError::Conservation(info));
                }
            }
        }
        if children_sum != i128::from(amount) {
            let info = ErrorInfo::new("sum-mismatch", "children do not sum to their parent")
                .with_context("node", &node.name)
                .with_context("depth", depth)
                .with_context("expected", amount)
                .with_context("actual", children_sum);
            return Err(TallyError::Conservation(info));
        }
    }
    Ok(())
}
