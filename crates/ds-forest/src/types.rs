//! Node and item contracts shared by every container.
//!
//! Tree nodes live in a `Vec`-backed arena owned by the tree. Each link
//! (`p`, `l`, `r`) is an `Option<u32>` index into that arena, so all
//! tree-manipulation helpers take the arena as a slice and work with
//! indices.

/// Parent / left / right links of an arena node.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Node that owns a stored item.
pub trait ItemNode<T>: Node {
    fn item(&self) -> &T;
}

/// Three-way comparator: negative if `a < b`, zero if equal, positive
/// otherwise.
pub type Comparator<T> = dyn Fn(&T, &T) -> i32;

/// Items a container can copy out of a borrowed value.
///
/// Containers take ownership of what they store, so moving an item in is
/// the allocating copy and `Drop` is the destroy step. `Item` is needed only
/// by the entry points that duplicate a caller's value instead of moving it.
pub trait Item: Clone {}

impl<T: Clone> Item for T {}

/// Comparator derived from `PartialOrd`. Incomparable values (NaN) compare
/// as greater, which routes them right.
pub fn default_comparator<T: PartialOrd>(a: &T, b: &T) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}
