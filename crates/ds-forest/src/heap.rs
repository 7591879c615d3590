//! Array-backed binary max-heap with a fixed capacity.
//!
//! Index arithmetic uses the classic 1-based layout: the children of slot
//! `i` are `2i` and `2i + 1`, its parent is `i / 2`. Slot `i` lives at
//! `items[i - 1]`.

use crate::error::{Error, Result};
use crate::types::default_comparator;

pub struct MaxHeap<T, C = fn(&T, &T) -> i32>
where
    C: Fn(&T, &T) -> i32,
{
    items: Vec<T>,
    capacity: usize,
    comparator: C,
}

impl<T> MaxHeap<T, fn(&T, &T) -> i32>
where
    T: PartialOrd,
{
    /// Empty heap holding at most `capacity` items. Storage is reserved up
    /// front.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_capacity_and_comparator(capacity, default_comparator::<T>)
    }
}

impl<T, C> MaxHeap<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Result<Self> {
        let mut items = Vec::new();
        items.try_reserve_exact(capacity)?;
        Ok(Self {
            items,
            capacity,
            comparator,
        })
    }

    #[inline]
    fn cmp_slots(&self, a: usize, b: usize) -> i32 {
        (self.comparator)(&self.items[a - 1], &self.items[b - 1])
    }

    /// Appends `item` and sifts it up. O(log n).
    pub fn insert(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            return Err(Error::Full {
                capacity: self.capacity,
            });
        }
        self.items.try_reserve(1)?;
        self.items.push(item);

        let mut child = self.items.len();
        while child > 1 {
            let parent = child / 2;
            if self.cmp_slots(child, parent) <= 0 {
                break;
            }
            self.items.swap(child - 1, parent - 1);
            child = parent;
        }
        Ok(())
    }

    /// Removes and returns the largest item. O(log n).
    ///
    /// The last item takes the root slot and sifts down towards the larger
    /// child.
    pub fn remove(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(Error::Empty);
        }
        let top = self.items.swap_remove(0);

        let n = self.items.len();
        let mut parent = 1;
        loop {
            let mut child = parent * 2;
            if child > n {
                break;
            }
            if child < n && self.cmp_slots(child, child + 1) < 0 {
                child += 1;
            }
            if self.cmp_slots(child, parent) <= 0 {
                break;
            }
            self.items.swap(child - 1, parent - 1);
            parent = child;
        }
        Ok(top)
    }

    /// Largest item.
    pub fn top(&self) -> Result<&T> {
        self.items.first().ok_or(Error::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Items in heap (level) order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Drains the heap into a vector sorted in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.items.len());
        while let Ok(item) = self.remove() {
            out.push(item);
        }
        out.reverse();
        out
    }

    /// Checks that no item compares greater than its parent.
    pub fn assert_valid(&self) -> std::result::Result<(), String> {
        if self.items.len() > self.capacity {
            return Err(format!(
                "Heap holds {} items over capacity {}",
                self.items.len(),
                self.capacity
            ));
        }
        for child in 2..=self.items.len() {
            if self.cmp_slots(child, child / 2) > 0 {
                return Err(format!("Heap order violated at slot {child}"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sift_up_places_max_at_root() {
        let mut heap = MaxHeap::with_capacity(8).unwrap();
        for i in [3, 9, 1, 7] {
            heap.insert(i).unwrap();
            heap.assert_valid().unwrap();
        }
        assert_eq!(heap.as_slice()[0], 9);
        assert_eq!(heap.len(), 4);
    }

    #[test]
    fn sift_down_prefers_larger_child() {
        let mut heap = MaxHeap::with_capacity(8).unwrap();
        for i in [10, 8, 9, 1, 2, 3] {
            heap.insert(i).unwrap();
        }
        assert_eq!(heap.remove(), Ok(10));
        heap.assert_valid().unwrap();
        assert_eq!(heap.top(), Ok(&9));
    }

    #[test]
    fn zero_capacity_heap_is_full() {
        let mut heap = MaxHeap::<i32>::with_capacity(0).unwrap();
        assert!(heap.is_full());
        assert!(heap.is_empty());
        assert_eq!(heap.insert(1), Err(Error::Full { capacity: 0 }));
    }
}
