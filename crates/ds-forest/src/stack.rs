use crate::error::{Error, Result};
use crate::slots::Slots;

struct StackNode<T> {
    item: T,
    next: Option<u32>,
}

/// Unbounded singly linked LIFO stack.
pub struct Stack<T> {
    first: Option<u32>,
    len: usize,
    nodes: Slots<StackNode<T>>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            first: None,
            len: 0,
            nodes: Slots::new(),
        }
    }

    pub fn push(&mut self, item: T) -> Result<()> {
        let q = self.nodes.alloc(StackNode {
            item,
            next: self.first,
        })?;
        self.first = Some(q);
        self.len += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T> {
        let top = self.first.ok_or(Error::Empty)?;
        let node = self.nodes.release(top);
        self.first = node.next;
        self.len -= 1;
        Ok(node.item)
    }

    pub fn top(&self) -> Result<&T> {
        self.first
            .map(|top| &self.nodes[top].item)
            .ok_or(Error::Empty)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reverses the stack in place: the bottom item becomes the top.
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

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.first = None;
        self.len = 0;
    }

    /// Items from top to bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            stack: self,
            curr: self.first,
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Iter<'a, T> {
    stack: &'a Stack<T>,
    curr: Option<u32>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = &self.stack.nodes[self.curr?];
        self.curr = node.next;
        Some(&node.item)
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
