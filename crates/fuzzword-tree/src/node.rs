// AVL tree nodes: cached heights, rotations and rebalancing.

use std::cmp::Ordering;

use crate::BalanceViolation;
use crate::iter::InOrder;

/// Optional owned child link.
pub(crate) type Link = Option<Box<Node>>;

/// A tree node holding one word and owning at most two subtrees.
///
/// `height` is the height of the subtree rooted here: 1 for a leaf, and an
/// absent child counts as 0.
#[derive(Debug, Clone)]
pub struct Node {
    word: String,
    left: Link,
    right: Link,
    height: u32,
}

impl Node {
    pub(crate) fn leaf(word: String) -> Box<Self> {
        Box::new(Self {
            word,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// The word stored in this node.
    #[inline]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Left subtree (words ordered before this node's word).
    #[inline]
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// Right subtree (words ordered after this node's word).
    #[inline]
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Cached height of the subtree rooted at this node.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Left height minus right height. In a valid tree this is -1, 0 or 1.
    #[inline]
    pub fn balance_factor(&self) -> i32 {
        link_height(&self.left) as i32 - link_height(&self.right) as i32
    }

    /// Ascending traversal of this node's subtree only.
    pub fn iter(&self) -> InOrder<'_> {
        InOrder::new(Some(self))
    }

    #[inline]
    fn update_height(&mut self) {
        self.height = 1 + link_height(&self.left).max(link_height(&self.right));
    }
}

#[inline]
pub(crate) fn link_height(link: &Link) -> u32 {
    link.as_ref().map_or(0, |node| node.height)
}

/// Rotate the subtree rooted at `y` to the right.
///
/// ```text
///       y            x
///      / \          / \
///     x   C  ==>   A   y
///    / \              / \
///   A   B            B   C
/// ```
fn rotate_right(mut y: Box<Node>) -> Box<Node> {
    let Some(mut x) = y.left.take() else {
        return y;
    };
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

/// Mirror image of [`rotate_right`].
fn rotate_left(mut x: Box<Node>) -> Box<Node> {
    let Some(mut y) = x.right.take() else {
        return x;
    };
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

/// Recompute `node`'s height and restore the AVL property at this node.
///
/// Both children must already be valid AVL trees whose heights differ by at
/// most 2, which is what a single insertion below `node` can produce.
pub(crate) fn rebalance(mut node: Box<Node>) -> Box<Node> {
    node.update_height();
    let balance = node.balance_factor();

    if balance > 1 {
        // Left-right case: straighten the left child first.
        if node.left.as_ref().is_some_and(|left| left.balance_factor() < 0) {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }
    if balance < -1 {
        // Right-left case.
        if node.right.as_ref().is_some_and(|right| right.balance_factor() > 0) {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }
    node
}

/// Insert `word` into the subtree at `link`.
///
/// Returns the new subtree root and whether the word was added. A duplicate
/// leaves the subtree untouched.
pub(crate) fn insert(link: Link, word: String) -> (Box<Node>, bool) {
    let Some(mut node) = link else {
        return (Node::leaf(word), true);
    };

    let inserted = match word.as_str().cmp(node.word.as_str()) {
        Ordering::Less => {
            let (child, inserted) = insert(node.left.take(), word);
            node.left = Some(child);
            inserted
        }
        Ordering::Greater => {
            let (child, inserted) = insert(node.right.take(), word);
            node.right = Some(child);
            inserted
        }
        Ordering::Equal => return (node, false),
    };

    if inserted {
        (rebalance(node), true)
    } else {
        (node, false)
    }
}

/// Verify cached heights and balance factors below `node`.
///
/// Returns the recomputed height of the subtree.
pub(crate) fn verify(node: Option<&Node>) -> Result<u32, BalanceViolation> {
    let Some(node) = node else {
        return Ok(0);
    };
    let left = verify(node.left())?;
    let right = verify(node.right())?;
    let actual = 1 + left.max(right);
    if node.height != actual {
        return Err(BalanceViolation::StaleHeight {
            word: node.word.clone(),
            cached: node.height,
            actual,
        });
    }
    let balance = left as i32 - right as i32;
    if !(-1..=1).contains(&balance) {
        return Err(BalanceViolation::Unbalanced {
            word: node.word.clone(),
            balance,
        });
    }
    Ok(actual)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(words: &[&str]) -> Box<Node> {
        let mut root: Link = None;
        for word in words {
            let (node, _) = insert(root.take(), word.to_string());
            root = Some(node);
        }
        root.unwrap()
    }

    fn shape(node: Option<&Node>) -> String {
        match node {
            None => "-".to_string(),
            Some(n) if n.left.is_none() && n.right.is_none() => n.word.clone(),
            Some(n) => format!("({} {} {})", shape(n.left()), n.word, shape(n.right())),
        }
    }

    #[test]
    fn leaf_has_height_one() {
        let node = Node::leaf("cat".to_string());
        assert_eq!(node.height(), 1);
        assert_eq!(node.balance_factor(), 0);
        assert!(node.left().is_none());
        assert!(node.right().is_none());
    }

    #[test]
    fn ascending_inserts_trigger_left_rotation() {
        let root = build(&["a", "b", "c"]);
        assert_eq!(shape(Some(&root)), "(a b c)");
        assert_eq!(root.height(), 2);
    }

    #[test]
    fn descending_inserts_trigger_right_rotation() {
        let root = build(&["c", "b", "a"]);
        assert_eq!(shape(Some(&root)), "(a b c)");
    }

    #[test]
    fn left_right_case_uses_double_rotation() {
        let root = build(&["c", "a", "b"]);
        assert_eq!(shape(Some(&root)), "(a b c)");
    }

    #[test]
    fn right_left_case_uses_double_rotation() {
        let root = build(&["a", "c", "b"]);
        assert_eq!(shape(Some(&root)), "(a b c)");
    }

    #[test]
    fn duplicate_insert_is_noop() {
        let root = build(&["b", "a", "c"]);
        let (root, inserted) = insert(Some(root), "a".to_string());
        assert!(!inserted);
        assert_eq!(shape(Some(&root)), "(a b c)");
        assert_eq!(root.height(), 2);
    }

    #[test]
    fn rotation_preserves_words() {
        let root = build(&["d", "b", "f", "a", "c", "e", "g", "h", "i"]);
        let words: Vec<&str> = root.iter().collect();
        assert_eq!(words, ["a", "b", "c", "d", "e", "f", "g", "h", "i"]);
        assert!(verify(Some(&root)).is_ok());
    }

    #[test]
    fn verify_detects_stale_height() {
        let mut root = build(&["b", "a", "c"]);
        root.height = 7;
        assert_eq!(
            verify(Some(&root)),
            Err(BalanceViolation::StaleHeight {
                word: "b".to_string(),
                cached: 7,
                actual: 2,
            })
        );
    }

    #[test]
    fn verify_detects_imbalance() {
        // Hand-built chain a -> b -> c without rebalancing.
        let mut c = Node::leaf("c".to_string());
        c.update_height();
        let mut b = Node::leaf("b".to_string());
        b.right = Some(c);
        b.update_height();
        let mut a = Node::leaf("a".to_string());
        a.right = Some(b);
        a.update_height();
        assert_eq!(
            verify(Some(&a)),
            Err(BalanceViolation::Unbalanced {
                word: "a".to_string(),
                balance: -2,
            })
        );
    }
}
