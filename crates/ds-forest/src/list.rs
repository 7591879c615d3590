//! Capacity-bounded singly linked list with positional access.

use crate::error::{Error, Result};
use crate::slots::Slots;

/// Default capacity of a [`BoundedList`].
pub const MAX_LIST_SIZE: usize = 4;

struct ListNode<T> {
    item: T,
    next: Option<u32>,
}

/// Singly linked list holding at most `capacity` items.
///
/// Positions count from the head. Every positional operation walks the
/// links from the head, so it costs O(position).
pub struct BoundedList<T> {
    first: Option<u32>,
    len: usize,
    capacity: usize,
    nodes: Slots<ListNode<T>>,
}

impl<T> BoundedList<T> {
    /// Empty list with [`MAX_LIST_SIZE`] capacity.
    pub fn new() -> Self {
        Self::with_capacity(MAX_LIST_SIZE)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            first: None,
            len: 0,
            capacity,
            nodes: Slots::new(),
        }
    }

    fn move_to(&self, position: usize) -> Option<u32> {
        let mut p = self.first;
        for _ in 0..position {
            p = self.nodes[p?].next;
        }
        p
    }

    /// Node just before `position`. `position` must be at least 1; a walk
    /// that runs off the links reports `OutOfRange`.
    fn predecessor(&self, position: usize) -> Result<u32> {
        self.move_to(position - 1).ok_or(self.out_of_range(position))
    }

    fn out_of_range(&self, position: usize) -> Error {
        Error::OutOfRange {
            position,
            len: self.len,
        }
    }

    /// Inserts `item` so that it ends up at `position`.
    ///
    /// `position` may equal the current length, which appends.
    pub fn insert(&mut self, position: usize, item: T) -> Result<()> {
        if self.is_full() {
            return Err(Error::Full {
                capacity: self.capacity,
            });
        }
        if position > self.len {
            return Err(self.out_of_range(position));
        }

        let prev = match position {
            0 => None,
            _ => Some(self.predecessor(position)?),
        };
        let q = self.nodes.alloc(ListNode { item, next: None })?;
        match prev {
            None => {
                self.nodes[q].next = self.first;
                self.first = Some(q);
            }
            Some(p) => {
                self.nodes[q].next = self.nodes[p].next;
                self.nodes[p].next = Some(q);
            }
        }
        self.len += 1;
        Ok(())
    }

    /// Unlinks the item at `position` and hands it back.
    pub fn delete(&mut self, position: usize) -> Result<T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        if position >= self.len {
            return Err(self.out_of_range(position));
        }

        let prev = match position {
            0 => None,
            _ => Some(self.predecessor(position)?),
        };
        let link = match prev {
            None => self.first,
            Some(p) => self.nodes[p].next,
        };
        let q = link.ok_or(self.out_of_range(position))?;

        let node = self.nodes.release(q);
        match prev {
            None => self.first = node.next,
            Some(p) => self.nodes[p].next = node.next,
        }
        self.len -= 1;
        Ok(node.item)
    }

    pub fn peek(&self, position: usize) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        if position >= self.len {
            return Err(self.out_of_range(position));
        }
        self.move_to(position)
            .map(|p| &self.nodes[p].item)
            .ok_or(self.out_of_range(position))
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Reverses the list in place by relinking; the head becomes the tail.
    pub fn reverse(&mut self) {
        let mut prev: Option<u32> = None;
        let mut curr = self.first;
        while let Some(c) = curr {
            curr = self.nodes[c].next;
            self.nodes[c].next = prev;
            prev = Some(c);
        }
        self.first = prev;
    }

    /// Drops every item.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.first = None;
        self.len = 0;
    }

    /// Items from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            curr: self.first,
        }
    }
}

impl<T> Default for BoundedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Iter<'a, T> {
    list: &'a BoundedList<T>,
    curr: Option<u32>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = &self.list.nodes[self.curr?];
        self.curr = node.next;
        Some(&node.item)
    }
}

impl<'a, T> IntoIterator for &'a BoundedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
