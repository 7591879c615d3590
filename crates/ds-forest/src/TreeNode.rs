use crate::types::{ItemNode, Node};

/// Plain binary search tree node.
#[derive(Clone, Debug)]
pub struct TreeNode<T> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub item: T,
}

impl<T> TreeNode<T> {
    pub fn new(item: T) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            item,
        }
    }
}

impl<T> Node for TreeNode<T> {
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

impl<T> ItemNode<T> for TreeNode<T> {
    fn item(&self) -> &T {
        &self.item
    }
}
