use crate::types::{ItemNode, Node};

/// AVL tree node.
#[derive(Clone, Debug)]
pub struct AvlNode<T> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub item: T,
    /// Height of the subtree rooted here; a leaf has height 0.
    pub h: i32,
}

impl<T> AvlNode<T> {
    pub fn new(item: T) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            item,
            h: 0,
        }
    }
}

impl<T> Node for AvlNode<T> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<T> ItemNode<T> for AvlNode<T> {
    fn item(&self) -> &T {
        &self.item
    }
}

/// AVL-specific node behavior.
pub trait AvlNodeLike<T>: ItemNode<T> {
    fn height(&self) -> i32;
    fn set_height(&mut self, h: i32);
}

impl<T> AvlNodeLike<T> for AvlNode<T> {
    fn height(&self) -> i32 {
        self.h
    }

    fn set_height(&mut self, h: i32) {
        self.h = h;
    }
}
