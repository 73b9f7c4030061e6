//! Wrapper module for [`TreeNode`]

use crate::angle::Angle;
use crate::Float;

/// A single branch in the generated tree
///
/// Ownership is strictly tree-shaped: every node owns its children and nothing else refers to
/// them. A node's `length`, `start_width` and `end_width` are placeholders until the growth
/// engine visits it; `angle` is set when the node is created (or, for the root, when growth
/// starts).
#[derive(Clone, Debug, PartialEq)]
pub struct TreeNode {
    /// Absolute orientation of the branch (0° = straight up)
    pub angle: Angle,
    /// Resolved branch length; may be non-positive under heavy negative jitter
    pub length: Float,
    /// Width at the end attached to the parent
    pub start_width: Float,
    /// Width at the far end, after tapering
    pub end_width: Float,
    /// Ordered children, between zero and two of them
    pub children: Vec<TreeNode>,
    /// True only for nodes that ended growth with no children
    pub has_leaves: bool,
}

impl TreeNode {
    /// Creates the root node with placeholder values
    ///
    /// The growth engine overwrites the angle and sizes on its first visit.
    pub fn root() -> Self {
        TreeNode::sprout(Angle::new(0.0))
    }

    /// Creates a freshly grown child at the given orientation
    ///
    /// Sizes stay at zero until the engine visits the node in the next generation.
    pub(crate) fn sprout(angle: Angle) -> Self {
        TreeNode {
            angle,
            length: 0.0,
            start_width: 0.0,
            end_width: 0.0,
            children: Vec::new(),
            has_leaves: false,
        }
    }

    /// Counts this node and all of its descendants
    pub fn count_nodes(&self) -> usize {
        1 + self.children.iter().map(TreeNode::count_nodes).sum::<usize>()
    }

    /// Returns the length of the longest root-to-leaf path, in edges
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}
