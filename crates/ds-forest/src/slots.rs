//! Slot arena with a free list, backing the linked list and the stack.
//!
//! Unlike the tree arenas, linked containers release single nodes, so freed
//! slots are recycled. Growth goes through `try_reserve`, which is what lets
//! node allocation report failure.

use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};

pub(crate) struct Slots<N> {
    slots: Vec<Option<N>>,
    free: Vec<u32>,
}

impl<N> Slots<N> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Stores `node` and returns its slot index.
    pub(crate) fn alloc(&mut self, node: N) -> Result<u32> {
        if let Some(i) = self.free.pop() {
            self.slots[i as usize] = Some(node);
            return Ok(i);
        }
        let i = u32::try_from(self.slots.len()).map_err(|_| Error::AllocationFailed)?;
        self.slots.try_reserve(1)?;
        // Every slot may end up on the free list; keep room so `release`
        // never allocates.
        self.free.try_reserve(self.slots.len() + 1)?;
        self.slots.push(Some(node));
        Ok(i)
    }

    /// Takes the node out of slot `i` and recycles the slot.
    pub(crate) fn release(&mut self, i: u32) -> N {
        match self.slots[i as usize].take() {
            Some(node) => {
                self.free.push(i);
                node
            }
            None => panic!("slot {i} is vacant"),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

impl<N> Index<u32> for Slots<N> {
    type Output = N;

    fn index(&self, i: u32) -> &N {
        match &self.slots[i as usize] {
            Some(node) => node,
            None => panic!("slot {i} is vacant"),
        }
    }
}

impl<N> IndexMut<u32> for Slots<N> {
    fn index_mut(&mut self, i: u32) -> &mut N {
        match &mut self.slots[i as usize] {
            Some(node) => node,
            None => panic!("slot {i} is vacant"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn released_slots_are_reused() {
        let mut slots = Slots::new();
        let a = slots.alloc("a").unwrap();
        let b = slots.alloc("b").unwrap();
        assert_eq!(slots.release(a), "a");
        let c = slots.alloc("c").unwrap();
        assert_eq!(c, a);
        assert_eq!(slots[b], "b");
        assert_eq!(slots[c], "c");
    }

    #[test]
    #[should_panic(expected = "vacant")]
    fn indexing_vacant_slot_panics() {
        let mut slots = Slots::new();
        let a = slots.alloc(1).unwrap();
        slots.release(a);
        let _ = &slots[a];
    }
}
