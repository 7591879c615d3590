use crate::util::{self, assert_bst, get_l, get_p, get_r, set_l, set_p, set_r};

use super::types::AvlNodeLike;

#[inline]
fn height_of<T, N>(arena: &[N], i: Option<u32>) -> i32
where
    N: AvlNodeLike<T>,
{
    i.map_or(-1, |i| arena[i as usize].height())
}

#[inline]
fn update_height<T, N>(arena: &mut [N], i: u32) -> i32
where
    N: AvlNodeLike<T>,
{
    let lh = height_of(arena, get_l(arena, i));
    let rh = height_of(arena, get_r(arena, i));
    let h = 1 + lh.max(rh);
    arena[i as usize].set_height(h);
    h
}

/// Inserts the detached leaf `n` and restores balance. Returns the new root.
pub fn insert<T, N, C>(arena: &mut [N], root: Option<u32>, n: u32, comparator: &C) -> Option<u32>
where
    N: AvlNodeLike<T>,
    C: Fn(&T, &T) -> i32,
{
    let root = util::insert(arena, root, n, comparator)?;
    Some(rebalance_after_insert(arena, root, n))
}

/// Walks up from the freshly linked leaf `n`, refreshing cached heights,
/// and restructures at the first ancestor whose children differ in height by
/// more than one.
///
/// Stops early once an ancestor's height is unchanged: nothing above it can
/// have moved. A single restructure brings the subtree back to its
/// pre-insert height, so at most one happens per insertion.
fn rebalance_after_insert<T, N>(arena: &mut [N], root: u32, n: u32) -> u32
where
    N: AvlNodeLike<T>,
{
    let mut child = n;
    let mut grandchild: Option<u32> = None;
    let mut curr = get_p(arena, n);

    while let Some(c) = curr {
        let lh = height_of(arena, get_l(arena, c));
        let rh = height_of(arena, get_r(arena, c));
        if (lh - rh).abs() > 1 {
            let Some(a) = grandchild else {
                return root;
            };
            return restructure(arena, root, a, child, c);
        }

        let h = 1 + lh.max(rh);
        if h == arena[c as usize].height() {
            return root;
        }
        arena[c as usize].set_height(h);

        grandchild = Some(child);
        child = c;
        curr = get_p(arena, c);
    }

    root
}

/// Tri-node restructure of `c`, its child `b` and grandchild `a` on the
/// insertion path.
///
/// The four shapes (left-left, left-right, right-left, right-right) are
/// named `x < y < z` by tree order. `y` becomes the local root with `x` on
/// its left and `z` on its right; the inner subtrees `t2`, `t3` are
/// reattached to keep in-order sequence, and the outer `t1`, `t4` stay where
/// they were. Returns the new tree root.
fn restructure<T, N>(arena: &mut [N], root: u32, a: u32, b: u32, c: u32) -> u32
where
    N: AvlNodeLike<T>,
{
    let p = get_p(arena, c);

    let (x, y, z, t2, t3) = if get_l(arena, c) == Some(b) {
        if get_l(arena, b) == Some(a) {
            (a, b, c, get_r(arena, a), get_r(arena, b))
        } else {
            (b, a, c, get_l(arena, a), get_r(arena, a))
        }
    } else if get_l(arena, b) == Some(a) {
        (c, a, b, get_l(arena, a), get_r(arena, a))
    } else {
        (c, b, a, get_l(arena, b), get_l(arena, a))
    };
    let t1 = get_l(arena, x);
    let t4 = get_r(arena, z);

    set_l(arena, x, t1);
    set_r(arena, x, t2);
    set_l(arena, z, t3);
    set_r(arena, z, t4);
    set_l(arena, y, Some(x));
    set_r(arena, y, Some(z));
    set_p(arena, x, Some(y));
    set_p(arena, z, Some(y));
    if let Some(t1) = t1 {
        set_p(arena, t1, Some(x));
    }
    if let Some(t2) = t2 {
        set_p(arena, t2, Some(x));
    }
    if let Some(t3) = t3 {
        set_p(arena, t3, Some(z));
    }
    if let Some(t4) = t4 {
        set_p(arena, t4, Some(z));
    }

    update_height(arena, x);
    update_height(arena, z);
    update_height(arena, y);

    set_p(arena, y, p);
    match p {
        None => y,
        Some(p) => {
            if get_l(arena, p) == Some(c) {
                set_l(arena, p, Some(y));
            } else {
                set_r(arena, p, Some(y));
            }
            root
        }
    }
}

/// Validates links, ordering, size, cached heights and the balance
/// condition of the tree rooted at `root`.
pub fn assert_avl_tree<T, N, C>(
    arena: &[N],
    root: Option<u32>,
    expected_size: usize,
    comparator: &C,
) -> Result<(), String>
where
    N: AvlNodeLike<T>,
    C: Fn(&T, &T) -> i32,
{
    assert_bst(arena, root, expected_size, comparator)?;

    let mut stack = Vec::new();
    stack.extend(root);
    while let Some(i) = stack.pop() {
        let l = get_l(arena, i);
        let r = get_r(arena, i);
        let expected = util::height(arena, Some(i));
        let actual = arena[i as usize].height();
        if actual != expected {
            return Err(format!(
                "Height mismatch at node {i}: expected {expected}, got {actual}"
            ));
        }
        let bf = height_of(arena, l) - height_of(arena, r);
        if !(-1..=1).contains(&bf) {
            return Err(format!("AVL balance violated at node {i}: bf={bf}"));
        }
        stack.extend(l);
        stack.extend(r);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avl::AvlNode;
    use crate::types::default_comparator;
    use crate::util::push_node;

    fn build(keys: &[i32]) -> (Vec<AvlNode<i32>>, Option<u32>) {
        let mut arena = Vec::new();
        let mut root = None;
        for &k in keys {
            let idx = push_node(&mut arena, AvlNode::new(k)).unwrap();
            root = insert(&mut arena, root, idx, &default_comparator::<i32>);
            assert_avl_tree(&arena, root, arena.len(), &default_comparator::<i32>).unwrap();
        }
        (arena, root)
    }

    fn shape(arena: &[AvlNode<i32>], root: Option<u32>) -> (i32, Option<i32>, Option<i32>) {
        let root = &arena[root.unwrap() as usize];
        (
            root.item,
            root.l.map(|i| arena[i as usize].item),
            root.r.map(|i| arena[i as usize].item),
        )
    }

    #[test]
    fn left_left_case() {
        let (arena, root) = build(&[30, 20, 10]);
        assert_eq!(shape(&arena, root), (20, Some(10), Some(30)));
    }

    #[test]
    fn left_right_case() {
        let (arena, root) = build(&[30, 10, 20]);
        assert_eq!(shape(&arena, root), (20, Some(10), Some(30)));
    }

    #[test]
    fn right_left_case() {
        let (arena, root) = build(&[10, 30, 20]);
        assert_eq!(shape(&arena, root), (20, Some(10), Some(30)));
    }

    #[test]
    fn right_right_case() {
        let (arena, root) = build(&[10, 20, 30]);
        assert_eq!(shape(&arena, root), (20, Some(10), Some(30)));
    }

    #[test]
    fn restructure_below_root_splices_into_parent() {
        let (arena, root) = build(&[50, 25, 75, 80, 90]);
        assert_eq!(shape(&arena, root), (50, Some(25), Some(80)));
        let r = arena[root.unwrap() as usize].r.unwrap();
        assert_eq!(arena[r as usize].p, root);
        assert_eq!(arena[r as usize].h, 1);
    }

    #[test]
    fn inner_subtrees_are_reattached() {
        // Right-left at the root; 25 moves across as t2.
        let (arena, root) = build(&[20, 10, 40, 30, 50, 25]);
        assert_eq!(shape(&arena, root), (30, Some(20), Some(40)));
        assert_eq!(arena[root.unwrap() as usize].h, 2);
    }

    #[test]
    fn detects_stale_height() {
        let (mut arena, root) = build(&[2, 1, 3]);
        arena[0].h = 5;
        assert!(assert_avl_tree(&arena, root, 3, &default_comparator::<i32>).is_err());
    }
}
