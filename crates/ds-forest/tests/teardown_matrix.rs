use std::cell::Cell;
use std::rc::Rc;

use ds_forest::{Avl, BoundedList, Bst, MaxHeap, Stack};

/// Item that keeps a live-instance count: construction and `Clone` add one,
/// `Drop` takes one away.
#[derive(Debug)]
struct Tracked {
    key: i32,
    live: Rc<Cell<isize>>,
}

impl Tracked {
    fn new(key: i32, live: &Rc<Cell<isize>>) -> Self {
        live.set(live.get() + 1);
        Self {
            key,
            live: Rc::clone(live),
        }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Self::new(self.key, &self.live)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

fn by_key(a: &Tracked, b: &Tracked) -> i32 {
    a.key.cmp(&b.key) as i32
}

#[test]
fn avl_clear_drops_every_item_once() {
    let live = Rc::new(Cell::new(0));
    let mut tree = Avl::with_comparator(by_key);
    for k in 0..100 {
        tree.insert(Tracked::new(k % 17, &live)).unwrap();
    }
    assert_eq!(live.get(), 100);
    tree.clear();
    assert_eq!(live.get(), 0);
    tree.clear();
    assert_eq!(live.get(), 0);
}

#[test]
fn cloned_inserts_leave_originals_alone() {
    let live = Rc::new(Cell::new(0));
    let originals: Vec<Tracked> = (0..10).map(|k| Tracked::new(k, &live)).collect();
    {
        let mut tree = Bst::with_comparator(by_key);
        tree.extend_cloned(&originals).unwrap();
        assert_eq!(live.get(), 20);

        let mut cursor = ds_forest::Cursor::new();
        let copied = cursor.minimum(&tree).cloned();
        assert_eq!(copied.as_ref().map(|t| t.key), Some(0));
        assert_eq!(live.get(), 21);
    }
    assert_eq!(live.get(), 10);
    drop(originals);
    assert_eq!(live.get(), 0);
}

#[test]
fn dropping_containers_releases_items() {
    let live = Rc::new(Cell::new(0));
    {
        let mut avl = Avl::with_comparator(by_key);
        let mut list = BoundedList::with_capacity(8);
        let mut stack = Stack::new();
        let mut heap = MaxHeap::with_capacity_and_comparator(8, by_key).unwrap();
        for k in 0..8 {
            avl.insert(Tracked::new(k, &live)).unwrap();
            list.insert(0, Tracked::new(k, &live)).unwrap();
            stack.push(Tracked::new(k, &live)).unwrap();
            heap.insert(Tracked::new(k, &live)).unwrap();
        }
        assert_eq!(live.get(), 32);

        drop(list.delete(3).unwrap());
        drop(stack.pop().unwrap());
        drop(heap.remove().unwrap());
        assert_eq!(live.get(), 29);
    }
    assert_eq!(live.get(), 0);
}

#[test]
fn container_clear_releases_items() {
    let live = Rc::new(Cell::new(0));
    let mut list = BoundedList::new();
    let mut stack = Stack::new();
    let mut heap = MaxHeap::with_capacity_and_comparator(4, by_key).unwrap();
    for k in 0..4 {
        list.insert(0, Tracked::new(k, &live)).unwrap();
        stack.push(Tracked::new(k, &live)).unwrap();
        heap.insert(Tracked::new(k, &live)).unwrap();
    }
    list.clear();
    stack.clear();
    heap.clear();
    assert_eq!(live.get(), 0);
    assert!(list.is_empty() && stack.is_empty() && heap.is_empty());
}
