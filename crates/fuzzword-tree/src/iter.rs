// Lazy in-order traversal with an explicit stack.

use std::iter::FusedIterator;

use crate::node::Node;

/// Ascending iterator over the words of a (sub)tree.
///
/// Holds the chain of ancestors whose word has not been yielded yet, so the
/// memory used is bounded by the tree height. A fresh traversal is started
/// by calling `iter()` again; iterators are independent of each other.
#[derive(Debug, Clone)]
pub struct InOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> InOrder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        let capacity = root.map_or(0, |node| node.height() as usize);
        let mut iter = Self {
            stack: Vec::with_capacity(capacity),
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut cursor: Option<&'a Node>) {
        while let Some(node) = cursor {
            self.stack.push(node);
            cursor = node.left();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.word())
    }
}

impl FusedIterator for InOrder<'_> {}
