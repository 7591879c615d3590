//! Height-balanced binary search tree.

#[path = "AvlTree.rs"]
pub mod avl_tree;
pub mod types;
pub mod util;

pub use avl_tree::Avl;
pub use types::{AvlNode, AvlNodeLike};
