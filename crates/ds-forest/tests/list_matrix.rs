use ds_forest::{BoundedList, Error, MAX_LIST_SIZE};

fn items<T: Copy>(list: &BoundedList<T>) -> Vec<T> {
    list.iter().copied().collect()
}

#[test]
fn list_bounds_matrix() {
    let mut list = BoundedList::new();
    for i in 0..MAX_LIST_SIZE {
        list.insert(i, i).unwrap();
    }
    assert!(list.is_full());
    assert_eq!(
        list.insert(0, 99),
        Err(Error::Full {
            capacity: MAX_LIST_SIZE
        })
    );
    assert_eq!(items(&list), vec![0, 1, 2, 3]);
    assert_eq!(list.len(), MAX_LIST_SIZE);

    for _ in 0..MAX_LIST_SIZE {
        list.delete(0).unwrap();
    }
    assert!(list.is_empty());
    assert_eq!(list.delete(0), Err(Error::Empty));
    assert_eq!(list.peek(0), Err(Error::Empty));
}

#[test]
fn list_out_of_range_matrix() {
    let mut list = BoundedList::with_capacity(10);
    list.insert(0, 'a').unwrap();
    list.insert(1, 'b').unwrap();

    assert_eq!(list.insert(3, 'z'), Err(Error::OutOfRange { position: 3, len: 2 }));
    assert_eq!(list.peek(2), Err(Error::OutOfRange { position: 2, len: 2 }));
    assert_eq!(list.delete(2), Err(Error::OutOfRange { position: 2, len: 2 }));
    assert_eq!(items(&list), vec!['a', 'b']);
    assert_eq!(list.len(), 2);
}

#[test]
fn list_peek_after_insert_matrix() {
    let mut list = BoundedList::with_capacity(6);
    let steps = [(0, 10), (1, 30), (1, 20), (0, 5), (4, 40), (2, 15)];
    for (position, value) in steps {
        let before = list.len();
        list.insert(position, value).unwrap();
        assert_eq!(list.peek(position), Ok(&value));
        assert_eq!(list.len(), before + 1);
    }
    assert_eq!(items(&list), vec![5, 10, 15, 20, 30, 40]);
}

#[test]
fn list_reverse_matrix() {
    let mut list = BoundedList::with_capacity(5);
    for i in 0..5 {
        list.insert(i, i * 10).unwrap();
    }
    list.reverse();
    assert_eq!(items(&list), vec![40, 30, 20, 10, 0]);
    assert_eq!(list.peek(0), Ok(&40));
    assert_eq!(list.delete(4), Ok(0));
    list.reverse();
    assert_eq!(items(&list), vec![10, 20, 30, 40]);
}

#[test]
fn list_slot_reuse_matrix() {
    let mut list = BoundedList::with_capacity(3);
    for round in 0..20 {
        list.insert(list.len(), round).unwrap();
        if list.is_full() {
            assert_eq!(list.delete(1), Ok(round - 1));
        }
    }
    assert_eq!(list.len(), 2);
    assert_eq!(list.peek(0), Ok(&0));
    assert_eq!(list.peek(1), Ok(&19));
}
