// Lookup results and the diagnostic search path.

use std::fmt;

/// Words visited by a lookup, root first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath<'a> {
    words: Vec<&'a str>,
}

impl<'a> SearchPath<'a> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            words: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, word: &'a str) {
        self.words.push(word);
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The last node visited: the match on success, otherwise the node
    /// whose missing child ended the descent.
    pub fn last(&self) -> Option<&'a str> {
        self.words.last().copied()
    }

    pub fn as_slice(&self) -> &[&'a str] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.words.iter().copied()
    }

    /// Copy the path out of the tree's borrow.
    pub fn to_owned_words(&self) -> Vec<String> {
        self.words.iter().map(|w| (*w).to_string()).collect()
    }
}

impl fmt::Display for SearchPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(" > ")?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}

/// Outcome of an exact lookup: membership plus the nodes visited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup<'a> {
    pub found: bool,
    pub path: SearchPath<'a>,
}
