// Depth-first traversal over parsed element trees

use super::TreeNode;

/// Visit every node of a forest in pre-order.
///
/// `visit` decides whether to descend: returning `false` skips the node's
/// children. All results flow out through whatever `visit` captures.
pub fn walk<F>(nodes: &[TreeNode], visit: &mut F)
where
    F: FnMut(&TreeNode) -> bool,
{
    for node in nodes {
        if visit(node) {
            walk(node.children(), visit);
        }
    }
}

/// Walk a single document starting at its root
pub fn walk_document<F>(root: &TreeNode, mut visit: F)
where
    F: FnMut(&TreeNode) -> bool,
{
    walk(std::slice::from_ref(root), &mut visit);
}
