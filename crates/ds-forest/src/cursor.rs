//! In-order traversal over arena trees.
//!
//! A [`Cursor`] is a small `Copy` value owned by the caller, not by the tree,
//! so any number of traversals can run over the same tree independently.
//! The parent links stored in every node are the traversal state: each step
//! is O(height) worst case and amortized O(1) over a full walk.
//!
//! Every tree carries a stamp that changes whenever its contents are torn
//! down. A cursor remembers the stamp it was positioned under and refuses to
//! move once it no longer matches, which also rejects cursors that were
//! positioned on a different tree.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{Error, Result};
use crate::types::ItemNode;
use crate::util::{first, next};

static NEXT_STAMP: AtomicU64 = AtomicU64::new(1);

/// Fresh tree stamp, never handed out twice in one process.
pub(crate) fn next_stamp() -> u64 {
    NEXT_STAMP.fetch_add(1, Ordering::Relaxed)
}

/// Read access to an arena tree, shared by [`Bst`](crate::Bst) and
/// [`Avl`](crate::Avl).
pub trait OrderedTree<T> {
    type Node: ItemNode<T>;

    fn arena(&self) -> &[Self::Node];
    fn root(&self) -> Option<u32>;
    fn stamp(&self) -> u64;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum State {
    #[default]
    Unpositioned,
    At {
        node: u32,
        stamp: u64,
    },
    Exhausted {
        stamp: u64,
    },
}

/// In-order traversal position.
///
/// ```
/// use ds_forest::{Avl, Cursor};
///
/// let mut tree = Avl::new();
/// for i in [2, 1, 3] {
///     tree.insert(i).unwrap();
/// }
///
/// let mut cursor = Cursor::new();
/// assert_eq!(cursor.minimum(&tree), Some(&1));
/// assert_eq!(cursor.successor(&tree), Ok(Some(&2)));
/// assert_eq!(cursor.successor(&tree), Ok(Some(&3)));
/// assert_eq!(cursor.successor(&tree), Ok(None));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    state: State,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions the cursor on the smallest item and returns it.
    ///
    /// On an empty tree the cursor is left unpositioned and `None` is
    /// returned.
    pub fn minimum<'a, T, R>(&mut self, tree: &'a R) -> Option<&'a T>
    where
        R: OrderedTree<T>,
    {
        let arena = tree.arena();
        match first(arena, tree.root()) {
            Some(node) => {
                self.state = State::At {
                    node,
                    stamp: tree.stamp(),
                };
                Some(arena[node as usize].item())
            }
            None => {
                self.state = State::Unpositioned;
                None
            }
        }
    }

    /// Advances to the in-order successor and returns its item.
    ///
    /// `Ok(None)` once the largest item has been passed; the cursor then
    /// stays exhausted. Fails with [`Error::InvalidCursorState`] if the
    /// cursor was never positioned by [`minimum`](Self::minimum) on this
    /// tree, or the tree has been cleared since.
    pub fn successor<'a, T, R>(&mut self, tree: &'a R) -> Result<Option<&'a T>>
    where
        R: OrderedTree<T>,
    {
        match self.state {
            State::At { node, stamp } if stamp == tree.stamp() => {
                let arena = tree.arena();
                match next(arena, node) {
                    Some(succ) => {
                        self.state = State::At { node: succ, stamp };
                        Ok(Some(arena[succ as usize].item()))
                    }
                    None => {
                        self.state = State::Exhausted { stamp };
                        Ok(None)
                    }
                }
            }
            State::Exhausted { stamp } if stamp == tree.stamp() => Ok(None),
            _ => Err(Error::InvalidCursorState),
        }
    }

    /// Item under the cursor.
    pub fn item<'a, T, R>(&self, tree: &'a R) -> Result<&'a T>
    where
        R: OrderedTree<T>,
    {
        match self.state {
            State::At { node, stamp } if stamp == tree.stamp() => {
                Ok(tree.arena()[node as usize].item())
            }
            _ => Err(Error::InvalidCursorState),
        }
    }

    /// Arena index of the node under the cursor, if positioned on one.
    pub fn node(&self) -> Option<u32> {
        match self.state {
            State::At { node, .. } => Some(node),
            _ => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, State::Exhausted { .. })
    }
}

/// In-order iterator over an arena tree.
pub struct Iter<'a, T, N> {
    arena: &'a [N],
    curr: Option<u32>,
    remaining: usize,
    _item: PhantomData<&'a T>,
}

impl<'a, T, N> Iter<'a, T, N>
where
    N: ItemNode<T>,
{
    pub(crate) fn new(arena: &'a [N], root: Option<u32>, len: usize) -> Self {
        Self {
            arena,
            curr: first(arena, root),
            remaining: len,
            _item: PhantomData,
        }
    }
}

impl<'a, T: 'a, N> Iterator for Iter<'a, T, N>
where
    N: ItemNode<T>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.curr?;
        self.curr = next(self.arena, idx);
        self.remaining = self.remaining.saturating_sub(1);
        Some(self.arena[idx as usize].item())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a, N> ExactSizeIterator for Iter<'a, T, N> where N: ItemNode<T> {}
