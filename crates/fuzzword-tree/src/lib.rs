//! Ordered word set backed by an AVL tree.
//!
//! Every node exclusively owns its two children, so the tree is a plain
//! ownership tree with no parent pointers, arena or reference counting.
//! Insertion rebalances the access path bottom-up, keeping the height
//! within `~1.44 * log2(n + 2)` and lookups logarithmic.
//!
//! # Architecture
//!
//! - [`node`] -- node layout, cached heights, rotations and rebalancing
//! - [`set`] -- [`OrderedWordSet`]: insertion, lookup and enumeration
//! - [`iter`] -- lazy in-order traversal (explicit stack)
//! - [`path`] -- [`Lookup`] results and the visited-node [`SearchPath`]
//!
//! The set is built once during an exclusive load phase and is read-only
//! afterwards. `&OrderedWordSet` is `Sync`, so any number of readers may
//! traverse it concurrently; insertion needs `&mut` and therefore cannot
//! race a reader.

pub mod iter;
pub mod node;
pub mod path;
pub mod set;

pub use iter::InOrder;
pub use node::Node;
pub use path::{Lookup, SearchPath};
pub use set::OrderedWordSet;

/// Structural problem found by [`OrderedWordSet::check_balance`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BalanceViolation {
    #[error("node {word:?} has balance factor {balance}")]
    Unbalanced { word: String, balance: i32 },
    #[error("node {word:?} caches height {cached} but its subtree is {actual} high")]
    StaleHeight {
        word: String,
        cached: u32,
        actual: u32,
    },
    #[error("in-order traversal yields {next:?} after {previous:?}")]
    OutOfOrder { previous: String, next: String },
}
