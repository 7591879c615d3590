use crate::cursor::{next_stamp, Iter, OrderedTree};
use crate::error::Result;
use crate::types::{default_comparator, Item};
use crate::util::{balanced_height, find, first, last, print, push_node};

use super::types::AvlNode;
use super::util::{assert_avl_tree, insert};

/// Height-balanced binary search tree.
///
/// After every insertion the heights of any node's two subtrees differ by at
/// most one, so the height stays within about `1.44 * log2(n + 2)` no matter
/// the insertion order.
pub struct Avl<T, C = fn(&T, &T) -> i32>
where
    C: Fn(&T, &T) -> i32,
{
    root: Option<u32>,
    size: usize,
    comparator: C,
    stamp: u64,
    arena: Vec<AvlNode<T>>,
}

impl<T> Avl<T, fn(&T, &T) -> i32>
where
    T: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<T>)
    }
}

impl<T> Default for Avl<T, fn(&T, &T) -> i32>
where
    T: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Avl<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            size: 0,
            comparator,
            stamp: next_stamp(),
            arena: Vec::new(),
        }
    }

    /// Inserts `item`, rebalancing as needed, and returns the arena index of
    /// its node. Indices stay stable across rotations.
    pub fn insert(&mut self, item: T) -> Result<u32> {
        let node = push_node(&mut self.arena, AvlNode::new(item))?;
        self.root = insert(&mut self.arena, self.root, node, &self.comparator);
        self.size += 1;
        Ok(node)
    }

    /// Inserts a copy of `item`.
    pub fn insert_cloned(&mut self, item: &T) -> Result<u32>
    where
        T: Item,
    {
        self.insert(item.clone())
    }

    /// Inserts copies of every item in `items`, stopping at the first failure.
    pub fn extend_cloned(&mut self, items: &[T]) -> Result<()>
    where
        T: Item,
    {
        for item in items {
            self.insert_cloned(item)?;
        }
        Ok(())
    }

    pub fn contains(&self, item: &T) -> bool {
        find(&self.arena, self.root, item, &self.comparator).is_some()
    }

    pub fn minimum(&self) -> Option<&T> {
        first(&self.arena, self.root).map(|i| &self.arena[i as usize].item)
    }

    pub fn maximum(&self) -> Option<&T> {
        last(&self.arena, self.root).map(|i| &self.arena[i as usize].item)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// `-1` for an empty tree, `0` for a single node.
    pub fn height(&self) -> i32 {
        self.root.map_or(-1, |r| self.arena[r as usize].h)
    }

    /// Recomputes subtree heights from scratch and checks the balance
    /// condition at every node.
    pub fn is_balanced(&self) -> bool {
        balanced_height(&self.arena, self.root).is_some()
    }

    /// Item stored at arena index `node`.
    pub fn item(&self, node: u32) -> Option<&T> {
        self.arena.get(node as usize).map(|n| &n.item)
    }

    pub fn iter(&self) -> Iter<'_, T, AvlNode<T>> {
        Iter::new(&self.arena, self.root, self.size)
    }

    /// Drops every stored item and leaves the tree empty. Cursors positioned
    /// before the call are invalidated.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.size = 0;
        self.stamp = next_stamp();
    }

    pub fn assert_valid(&self) -> std::result::Result<(), String> {
        assert_avl_tree(&self.arena, self.root, self.size, &self.comparator)
    }

    pub fn print(&self, tab: &str) -> String
    where
        T: std::fmt::Debug,
    {
        format!(
            "Avl\n{tab}└─ {}",
            print(&self.arena, self.root, &format!("{tab}   "), &|i, n: &AvlNode<T>| {
                format!("Node[{i}] [h={}] {:?}", n.h, n.item)
            })
        )
    }
}

impl<T, C> OrderedTree<T> for Avl<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    type Node = AvlNode<T>;

    fn arena(&self) -> &[AvlNode<T>] {
        &self.arena
    }

    fn root(&self) -> Option<u32> {
        self.root
    }

    fn stamp(&self) -> u64 {
        self.stamp
    }
}

impl<'a, T, C> IntoIterator for &'a Avl<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, AvlNode<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_and_height_track_inserts() {
        let mut tree = Avl::new();
        assert_eq!(tree.height(), -1);
        for i in 0..7 {
            tree.insert(i).unwrap();
        }
        assert_eq!(tree.size(), 7);
        assert_eq!(tree.height(), 2);
        assert!(tree.is_balanced());
        tree.assert_valid().unwrap();
    }

    #[test]
    fn node_indices_survive_rotation() {
        let mut tree = Avl::new();
        let a = tree.insert(10).unwrap();
        let b = tree.insert(20).unwrap();
        let c = tree.insert(30).unwrap();
        assert_eq!(tree.item(a), Some(&10));
        assert_eq!(tree.item(b), Some(&20));
        assert_eq!(tree.item(c), Some(&30));
        assert_eq!(tree.root(), Some(b));
    }

    #[test]
    fn print_shows_heights() {
        let mut tree = Avl::new();
        tree.extend_cloned(&[1, 2, 3]).unwrap();
        assert_eq!(
            tree.print(""),
            "Avl\n└─ Node[1] [h=1] 2\n   ← Node[0] [h=0] 1\n   → Node[2] [h=0] 3"
        );
    }
}
