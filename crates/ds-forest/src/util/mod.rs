//! Arena tree helpers shared by [`Bst`](crate::Bst) and [`Avl`](crate::Avl).
//!
//! Everything here walks the tree with loops or an explicit work stack, so a
//! degenerate (list-shaped) BST cannot exhaust the call stack.

pub mod print;

use crate::error::{Error, Result};
use crate::types::{ItemNode, Node};

pub use print::print;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Appends `node` to the arena and returns its index.
///
/// Arena growth goes through `try_reserve`, so running out of memory is
/// reported as [`Error::AllocationFailed`] instead of aborting.
pub(crate) fn push_node<N>(arena: &mut Vec<N>, node: N) -> Result<u32> {
    let idx = u32::try_from(arena.len()).map_err(|_| Error::AllocationFailed)?;
    arena.try_reserve(1)?;
    arena.push(node);
    Ok(idx)
}

/// Leftmost node under `root`.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_l(arena, idx) {
            Some(l) => curr = Some(l),
            None => return Some(idx),
        }
    }
    curr
}

/// Rightmost node under `root`.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_r(arena, idx) {
            Some(r) => curr = Some(r),
            None => return Some(idx),
        }
    }
    curr
}

/// In-order successor.
///
/// The minimum of the right subtree if there is one; otherwise the first
/// ancestor reached from a left child. `None` once the ascent runs off the
/// root.
pub fn next<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        return first(arena, Some(r));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Links the detached leaf `node` below its insertion point.
///
/// Descends from `root`, going left when `node` compares less than the
/// visited item and right otherwise, so equal items land to the right of
/// the ones already stored. Returns the new root.
pub fn insert<T, N, C>(arena: &mut [N], root: Option<u32>, node: u32, comparator: &C) -> Option<u32>
where
    N: ItemNode<T>,
    C: Fn(&T, &T) -> i32,
{
    let Some(mut curr) = root else {
        return Some(node);
    };

    loop {
        let cmp = comparator(arena[node as usize].item(), arena[curr as usize].item());
        let next = if cmp < 0 {
            get_l(arena, curr)
        } else {
            get_r(arena, curr)
        };
        match next {
            Some(next) => curr = next,
            None => {
                if cmp < 0 {
                    set_l(arena, curr, Some(node));
                } else {
                    set_r(arena, curr, Some(node));
                }
                set_p(arena, node, Some(curr));
                return root;
            }
        }
    }
}

/// Finds a node whose item compares equal to `item`.
pub fn find<T, N, C>(arena: &[N], root: Option<u32>, item: &T, comparator: &C) -> Option<u32>
where
    N: ItemNode<T>,
    C: Fn(&T, &T) -> i32,
{
    let mut curr = root;
    while let Some(i) = curr {
        let cmp = comparator(item, arena[i as usize].item());
        if cmp == 0 {
            return Some(i);
        }
        curr = if cmp < 0 {
            get_l(arena, i)
        } else {
            get_r(arena, i)
        };
    }
    None
}

/// Height of the subtree under `root`: `-1` when empty, `0` for a leaf.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> i32 {
    let mut max = -1;
    let mut stack: Vec<(u32, i32)> = root.map(|r| (r, 0)).into_iter().collect();
    while let Some((idx, depth)) = stack.pop() {
        max = max.max(depth);
        if let Some(l) = get_l(arena, idx) {
            stack.push((l, depth + 1));
        }
        if let Some(r) = get_r(arena, idx) {
            stack.push((r, depth + 1));
        }
    }
    max
}

/// Height of the subtree under `root`, or `None` if any node in it has
/// subtrees whose heights differ by more than one.
pub fn balanced_height<N: Node>(arena: &[N], root: Option<u32>) -> Option<i32> {
    let Some(root) = root else {
        return Some(-1);
    };

    let mut heights = vec![-1i32; arena.len()];
    let mut stack = vec![(root, false)];
    while let Some((idx, expanded)) = stack.pop() {
        let l = get_l(arena, idx);
        let r = get_r(arena, idx);
        if expanded {
            let lh = l.map_or(-1, |l| heights[l as usize]);
            let rh = r.map_or(-1, |r| heights[r as usize]);
            if (lh - rh).abs() > 1 {
                return None;
            }
            heights[idx as usize] = 1 + lh.max(rh);
        } else {
            stack.push((idx, true));
            if let Some(r) = r {
                stack.push((r, false));
            }
            if let Some(l) = l {
                stack.push((l, false));
            }
        }
    }
    Some(heights[root as usize])
}

/// Number of nodes under `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let mut count = 0;
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(idx) = stack.pop() {
        count += 1;
        stack.extend(get_l(arena, idx));
        stack.extend(get_r(arena, idx));
    }
    count
}

/// Checks parent/child link consistency, in-order ordering and the node
/// count of the tree rooted at `root`.
pub fn assert_bst<T, N, C>(
    arena: &[N],
    root: Option<u32>,
    expected_size: usize,
    comparator: &C,
) -> std::result::Result<(), String>
where
    N: ItemNode<T>,
    C: Fn(&T, &T) -> i32,
{
    let Some(root) = root else {
        return if expected_size == 0 {
            Ok(())
        } else {
            Err(format!("Empty tree but size is {expected_size}"))
        };
    };

    if get_p(arena, root).is_some() {
        return Err("Root has parent".to_string());
    }

    let mut stack = vec![root];
    while let Some(idx) = stack.pop() {
        if let Some(l) = get_l(arena, idx) {
            if get_p(arena, l) != Some(idx) {
                return Err(format!("Broken parent link on left child of node {idx}"));
            }
            stack.push(l);
        }
        if let Some(r) = get_r(arena, idx) {
            if get_p(arena, r) != Some(idx) {
                return Err(format!("Broken parent link on right child of node {idx}"));
            }
            stack.push(r);
        }
    }

    let count = size(arena, Some(root));
    if count != expected_size {
        return Err(format!("Size mismatch: counted {count}, expected {expected_size}"));
    }

    let mut prev: Option<u32> = None;
    let mut curr = first(arena, Some(root));
    while let Some(i) = curr {
        if let Some(prev) = prev {
            if comparator(arena[prev as usize].item(), arena[i as usize].item()) > 0 {
                return Err(format!("Node order violated between {prev} and {i}"));
            }
        }
        prev = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}
