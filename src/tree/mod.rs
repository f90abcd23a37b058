// Generic XML tree model and traversal

mod node;
mod walk;

pub use node::{parse_document, read_document, TreeNode};
pub use walk::{walk, walk_document};
