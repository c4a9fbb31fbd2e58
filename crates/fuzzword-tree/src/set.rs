// OrderedWordSet: the AVL-balanced dictionary.

use std::cmp::Ordering;

use crate::BalanceViolation;
use crate::iter::InOrder;
use crate::node::{self, Link, Node};
use crate::path::{Lookup, SearchPath};

/// A set of words kept in lexicographic order by an AVL tree.
///
/// Words are compared as raw strings; callers normalize before inserting
/// and before looking up so both sides agree.
#[derive(Debug, Clone, Default)]
pub struct OrderedWordSet {
    root: Link,
    len: usize,
}

impl OrderedWordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `word` if absent, then rebalance the access path.
    ///
    /// Returns `false` (and changes nothing) when the word is already present.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        let (root, inserted) = node::insert(self.root.take(), word.into());
        self.root = Some(root);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Exact membership test recording every visited node.
    pub fn lookup(&self, word: &str) -> Lookup<'_> {
        let mut path = SearchPath::with_capacity(self.height() as usize);
        let mut cursor = self.root.as_deref();

        while let Some(node) = cursor {
            path.push(node.word());
            cursor = match word.cmp(node.word()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Lookup { found: true, path },
            };
        }
        Lookup { found: false, path }
    }

    /// Membership test without recording the path.
    pub fn contains(&self, word: &str) -> bool {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match word.cmp(node.word()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Ascending traversal of every word.
    pub fn iter(&self) -> InOrder<'_> {
        InOrder::new(self.root.as_deref())
    }

    /// Root node, for callers that split work over subtrees.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree; 0 when empty.
    pub fn height(&self) -> u32 {
        node::link_height(&self.root)
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Walk the whole tree and verify ordering, cached heights and the AVL
    /// balance condition.
    pub fn check_balance(&self) -> Result<(), BalanceViolation> {
        node::verify(self.root())?;
        let mut previous: Option<&str> = None;
        for word in self.iter() {
            match previous {
                Some(prev) if prev >= word => {
                    return Err(BalanceViolation::OutOfOrder {
                        previous: prev.to_string(),
                        next: word.to_string(),
                    });
                }
                _ => {}
            }
            previous = Some(word);
        }
        Ok(())
    }
}

impl<S: Into<String>> Extend<S> for OrderedWordSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for OrderedWordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a OrderedWordSet {
    type Item = &'a str;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
