// Parallel dictionary scan over disjoint subtrees

use fuzzword_tree::Node;

/// Subtrees at most this high are walked on the current worker instead of
/// being split further.
const SEQUENTIAL_HEIGHT: u32 = 6;

/// Call `visit` once for every word under `root`.
///
/// The left and right subtrees of each split node are handed to
/// `rayon::join`, so workers never share a subtree. Visitation order is
/// unspecified. Blocks until every word has been visited.
pub fn scan_parallel<'a, F>(root: Option<&'a Node>, visit: &F)
where
    F: Fn(&'a str) + Sync,
{
    let Some(node) = root else {
        return;
    };
    if node.height() <= SEQUENTIAL_HEIGHT {
        node.iter().for_each(visit);
        return;
    }
    visit(node.word());
    rayon::join(
        || scan_parallel(node.left(), visit),
        || scan_parallel(node.right(), visit),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuzzword_tree::OrderedWordSet;
    use std::sync::Mutex;

    fn collect(set: &OrderedWordSet) -> Vec<String> {
        let seen = Mutex::new(Vec::new());
        scan_parallel(set.root(), &|word: &str| {
            seen.lock().unwrap().push(word.to_string());
        });
        let mut seen = seen.into_inner().unwrap();
        seen.sort();
        seen
    }

    #[test]
    fn empty_tree_visits_nothing() {
        assert!(collect(&OrderedWordSet::new()).is_empty());
    }

    #[test]
    fn small_tree_visits_every_word_once() {
        let set: OrderedWordSet = ["cat", "cats", "bat", "hat"].into_iter().collect();
        assert_eq!(collect(&set), ["bat", "cat", "cats", "hat"]);
    }

    #[test]
    fn large_tree_is_split_and_visits_every_word_once() {
        let set: OrderedWordSet = (0..5000).map(|i| format!("w{i:05}")).collect();
        assert!(set.height() > SEQUENTIAL_HEIGHT);
        let seen = collect(&set);
        assert_eq!(seen.len(), 5000);
        let expected: Vec<String> = set.iter().map(str::to_string).collect();
        assert_eq!(seen, expected);
    }
}
