//! Prefix completion over a built [`Trie`].
use crate::node::NodeId;
use crate::trie::Trie;

impl Trie {
    /// Completion list for `prefix`: every node ending a word that starts
    /// with `prefix`.
    ///
    /// - `None`: no stored word starts with `prefix`.
    /// - `Some(vec![])`: the prefix is empty or the trie holds no words.
    ///
    /// Order of the returned nodes is unspecified.
    pub fn complete(&self, prefix: &str) -> Option<Vec<NodeId>> {
        let root = self.node(self.root());
        let prefix: Vec<char> = prefix.chars().collect();
        if root.first_child().is_none() || prefix.is_empty() {
            return Some(Vec::new());
        }

        let corpus = self.corpus();
        let mut cursor = root.first_child();
        while let Some(id) = cursor {
            let node = self.node(id);
            let sub = node.substr()?;
            let word = corpus.chars(sub.word);

            // Offsets in the prefix line up with offsets in the word: the
            // ancestors already matched `prefix[..sub.start]`.
            debug_assert!(sub.start < prefix.len());
            if prefix.get(sub.start) != Some(&word[sub.start]) {
                cursor = node.sibling();
                continue;
            }

            // Siblings differ in their first character, so this is the only
            // path the prefix can take from here.
            let mut idx = sub.start + 1;
            while idx <= sub.end && idx < prefix.len() {
                if prefix[idx] != word[idx] {
                    return None;
                }
                idx += 1;
            }

            if idx < prefix.len() {
                // Node consumed, prefix continues below it.
                cursor = node.first_child();
                continue;
            }

            return Some(match node.first_child() {
                None => vec![id],
                Some(child) => {
                    let mut hits = Vec::new();
                    if node.ends_word() {
                        hits.push(id);
                    }
                    self.collect_into(child, &mut hits);
                    hits
                }
            });
        }
        None
    }

    /// Like [`Trie::complete`], resolved to the words themselves.
    pub fn complete_words(&self, prefix: &str) -> Option<Vec<&str>> {
        let hits = self.complete(prefix)?;
        Some(hits.into_iter().filter_map(|id| self.word_of(id)).collect())
    }

    /// Check whether `word` is stored exactly, not just as a prefix.
    pub fn contains_word(&self, word: &str) -> bool {
        match self.complete(word) {
            Some(hits) => hits.into_iter().any(|id| self.word_of(id) == Some(word)),
            None => false,
        }
    }

    /// Every word-ending node in the subtrees of `start` and of each sibling
    /// after it.
    ///
    /// Pass a node's first child to gather that node's whole subtree. Order of
    /// the result is unspecified.
    pub fn collect_leaves(&self, start: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_into(start, &mut out);
        out
    }

    fn collect_into(&self, start: NodeId, out: &mut Vec<NodeId>) {
        let mut cursor = Some(start);
        while let Some(id) = cursor {
            let node = self.node(id);
            match node.first_child() {
                None => out.push(id),
                Some(child) => {
                    if node.ends_word() {
                        out.push(id);
                    }
                    self.collect_into(child, out);
                }
            }
            cursor = node.sibling();
        }
    }
}
