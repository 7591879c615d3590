//! Arena-based generic containers.
//!
//! Five containers share one item contract: items are moved in (or cloned
//! in through [`Item`]), destroyed exactly once by `Drop`, and ordered by a
//! `Fn(&T, &T) -> i32` comparator.
//!
//! Instead of raw pointers, every "pointer" is an `Option<u32>` index into a
//! container-owned arena. Tree rotations are plain index relinking and there
//! is no manual allocation/free pairing to get wrong.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`], [`ItemNode`], [`Item`], [`Comparator`] |
//! [`util`] | `first`, `next`, `insert`, iterative `height` / `balanced_height` |
//! [`cursor`] | [`Cursor`], in-order traversal decoupled from the tree |
//! [`bst`] | [`Bst`], unbalanced binary search tree |
//! [`avl`] | [`Avl`], height-balanced tree with tri-node restructuring |
//! [`list`] | [`BoundedList`], capacity-bounded singly linked list |
//! [`stack`] | [`Stack`], singly linked LIFO |
//! [`heap`] | [`MaxHeap`], array-backed binary max-heap |

pub mod avl;
pub mod bst;
pub mod cursor;
pub mod error;
pub mod heap;
pub mod list;
mod slots;
pub mod stack;
#[path = "TreeNode.rs"]
pub mod tree_node;
pub mod types;
pub mod util;

pub use avl::{Avl, AvlNode};
pub use bst::Bst;
pub use cursor::{Cursor, OrderedTree};
pub use error::{Error, Result};
pub use heap::MaxHeap;
pub use list::{BoundedList, MAX_LIST_SIZE};
pub use stack::Stack;
pub use tree_node::TreeNode;
pub use types::{default_comparator, Comparator, Item, ItemNode, Node};
