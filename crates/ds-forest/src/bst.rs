use crate::cursor::{next_stamp, Iter, OrderedTree};
use crate::error::Result;
use crate::tree_node::TreeNode;
use crate::types::{default_comparator, Item};
use crate::util::{
    assert_bst, balanced_height, find, first, height, insert, last, print, push_node,
};

/// Unbalanced binary search tree.
///
/// Items are placed by plain descent and never moved afterwards, so the
/// shape depends entirely on insertion order: ascending input degrades the
/// tree into a right-leaning chain.
pub struct Bst<T, C = fn(&T, &T) -> i32>
where
    C: Fn(&T, &T) -> i32,
{
    root: Option<u32>,
    comparator: C,
    stamp: u64,
    arena: Vec<TreeNode<T>>,
}

impl<T> Bst<T, fn(&T, &T) -> i32>
where
    T: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<T>)
    }
}

impl<T> Default for Bst<T, fn(&T, &T) -> i32>
where
    T: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Bst<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
            stamp: next_stamp(),
            arena: Vec::new(),
        }
    }

    /// Inserts `item` and returns the arena index of its node.
    ///
    /// Duplicates are kept; an item equal to stored ones is placed after
    /// them in order.
    pub fn insert(&mut self, item: T) -> Result<u32> {
        let node = push_node(&mut self.arena, TreeNode::new(item))?;
        self.root = insert(&mut self.arena, self.root, node, &self.comparator);
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

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// `-1` for an empty tree, `0` for a single node.
    pub fn height(&self) -> i32 {
        height(&self.arena, self.root)
    }

    pub fn is_balanced(&self) -> bool {
        balanced_height(&self.arena, self.root).is_some()
    }

    /// Item stored at arena index `node`.
    pub fn item(&self, node: u32) -> Option<&T> {
        self.arena.get(node as usize).map(|n| &n.item)
    }

    pub fn iter(&self) -> Iter<'_, T, TreeNode<T>> {
        Iter::new(&self.arena, self.root, self.arena.len())
    }

    /// Drops every stored item and leaves the tree empty. Cursors positioned
    /// before the call are invalidated.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.stamp = next_stamp();
    }

    pub fn assert_valid(&self) -> std::result::Result<(), String> {
        assert_bst(&self.arena, self.root, self.arena.len(), &self.comparator)
    }

    pub fn print(&self, tab: &str) -> String
    where
        T: std::fmt::Debug,
    {
        format!(
            "Bst\n{tab}└─ {}",
            print(&self.arena, self.root, &format!("{tab}   "), &|_, n: &TreeNode<T>| {
                format!("{:?}", n.item)
            })
        )
    }
}

impl<T, C> OrderedTree<T> for Bst<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    type Node = TreeNode<T>;

    fn arena(&self) -> &[TreeNode<T>] {
        &self.arena
    }

    fn root(&self) -> Option<u32> {
        self.root
    }

    fn stamp(&self) -> u64 {
        self.stamp
    }
}

impl<'a, T, C> IntoIterator for &'a Bst<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, TreeNode<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;

    #[test]
    fn root_is_first_inserted() {
        let mut tree = Bst::new();
        tree.insert(5).unwrap();
        tree.insert(2).unwrap();
        tree.insert(9).unwrap();
        assert_eq!(tree.root(), Some(0));
        assert_eq!(tree.arena()[0].l, Some(1));
        assert_eq!(tree.arena()[0].r, Some(2));
        assert_eq!(tree.arena()[1].p, Some(0));
        tree.assert_valid().unwrap();
    }

    #[test]
    fn clear_resets_and_invalidates_cursor() {
        let mut tree = Bst::new();
        tree.extend_cloned(&[3, 1, 2]).unwrap();
        let mut cursor = Cursor::new();
        assert_eq!(cursor.minimum(&tree), Some(&1));
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), -1);
        assert!(cursor.successor(&tree).is_err());
    }

    #[test]
    fn print_shows_structure() {
        let mut tree = Bst::new();
        tree.extend_cloned(&[2, 1, 3]).unwrap();
        assert_eq!(tree.print(""), "Bst\n└─ 2\n   ← 1\n   → 3");
    }
}
