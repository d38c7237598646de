//! Compressed trie (radix tree) over a fixed corpus.
//!
//! Nodes are kept in an arena and addressed by [`NodeId`]. Each node links to
//! its first child and its next sibling; splitting a node during construction
//! allocates a new slot and rewires the link that pointed at the old one.
use std::sync::Arc;

use tracing::{debug, trace};

use crate::common_prefix::common_prefix_length;
use crate::corpus::Corpus;
use crate::node::{Node, NodeId, Substr};

/// A compressed trie built once over a [`Corpus`] and read-only afterwards.
///
/// # Example
/// ```
/// use libradix_core::Trie;
///
/// let trie = Trie::from_words(["bear", "bull", "stock", "bell"]);
///
/// let mut words = trie.complete_words("be").unwrap();
/// words.sort();
/// assert_eq!(words, vec!["bear", "bell"]);
///
/// assert!(trie.complete("z").is_none());
/// assert_eq!(trie.complete(""), Some(vec![]));
/// ```
#[derive(Debug, Clone)]
pub struct Trie {
    corpus: Arc<Corpus>,
    nodes: Vec<Node>,
    words: usize,
}

/// The link that currently points at the node being examined.
#[derive(Debug, Clone, Copy)]
enum Link {
    Child(NodeId),
    Sibling(NodeId),
}

impl Default for Trie {
    fn default() -> Self {
        Self::empty()
    }
}

impl Trie {
    /// A bare root over an empty corpus.
    pub fn empty() -> Self {
        Self {
            corpus: Arc::new(Corpus::default()),
            nodes: vec![Node::root()],
            words: 0,
        }
    }

    /// Insert every word of `corpus` in order, first to last.
    ///
    /// The same ordered corpus always yields the same tree shape. Empty words
    /// and exact duplicates are skipped.
    pub fn build(corpus: impl Into<Arc<Corpus>>) -> Self {
        let corpus = corpus.into();
        let mut trie = Self {
            corpus: Arc::clone(&corpus),
            nodes: Vec::with_capacity(corpus.len() * 2 + 1),
            words: 0,
        };
        trie.nodes.push(Node::root());

        for word in 0..corpus.len() {
            trie.insert(word);
        }

        debug!(
            words = trie.words,
            corpus = corpus.len(),
            nodes = trie.nodes.len(),
            "built trie"
        );
        debug_assert!(
            trie.check_invariants().is_ok(),
            "trie invariants violated: {:?}",
            trie.check_invariants()
        );
        trie
    }

    /// Build from an ordered list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::build(Corpus::new(words))
    }

    /// Build from a possibly absent word list; `None` yields an empty trie.
    pub fn from_optional_words<I, S>(words: Option<I>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match words {
            Some(words) => Self::from_words(words),
            None => Self::empty(),
        }
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    fn relink(&mut self, link: Link, to: NodeId) {
        match link {
            Link::Child(parent) => self.nodes[parent.0].first_child = Some(to),
            Link::Sibling(prev) => self.nodes[prev.0].sibling = Some(to),
        }
    }

    /// Substring reference of a non-root node.
    fn substr_of(&self, id: NodeId) -> Substr {
        match self.nodes[id.0].substr {
            Some(sub) => sub,
            None => unreachable!("root node {} reached below the root", id.0),
        }
    }

    /// Insert word `word` of the corpus.
    fn insert(&mut self, word: usize) {
        let corpus = Arc::clone(&self.corpus);
        let new = corpus.chars(word);
        let len = new.len();
        if len == 0 {
            debug!(word, "skipping empty word");
            return;
        }

        let Some(mut cur) = self.nodes[NodeId::ROOT.0].first_child else {
            let id = self.alloc(Node::leaf(Substr::new(word, 0, len - 1), None));
            self.nodes[NodeId::ROOT.0].first_child = Some(id);
            self.words += 1;
            return;
        };

        // Characters of `new` before `start` are already matched by ancestors.
        let mut start = 0;
        let mut link = Link::Child(NodeId::ROOT);

        loop {
            let sub = self.substr_of(cur);
            let Node {
                first_child,
                sibling,
                terminal,
                ..
            } = self.nodes[cur.0];
            debug_assert_eq!(sub.start, start);

            let common = common_prefix_length(new, start, corpus.chars(sub.word), start);

            if common == 0 {
                match sibling {
                    Some(next) => {
                        link = Link::Sibling(cur);
                        cur = next;
                        continue;
                    }
                    None => {
                        let id = self.alloc(Node::leaf(Substr::new(word, start, len - 1), None));
                        self.nodes[cur.0].sibling = Some(id);
                        self.words += 1;
                        trace!(word, after = cur.0, "appended leaf sibling");
                        return;
                    }
                }
            }

            let span = sub.len();
            let remaining = len - start;

            if common >= span {
                if remaining == span {
                    // The new word ends exactly where this node ends.
                    if first_child.is_none() || terminal.is_some() {
                        debug!(word, existing = ?self.nodes[cur.0].word_index(), "skipping duplicate word");
                    } else {
                        self.nodes[cur.0].terminal = Some(word);
                        self.words += 1;
                        trace!(word, node = cur.0, "marked internal node as word end");
                    }
                    return;
                }

                match first_child {
                    Some(child) => {
                        start = sub.end + 1;
                        link = Link::Child(cur);
                        cur = child;
                        trace!(word, node = cur.0, start, "descending");
                    }
                    None => {
                        // The leaf's word is a proper prefix of the new word.
                        let id = self.alloc(Node::leaf(Substr::new(word, sub.end + 1, len - 1), None));
                        let node = &mut self.nodes[cur.0];
                        node.terminal = Some(sub.word);
                        node.first_child = Some(id);
                        self.words += 1;
                        trace!(word, node = cur.0, "extended leaf into internal node");
                        return;
                    }
                }
                continue;
            }

            // Partial overlap: fork after `common` characters.
            let split_end = start + common - 1;
            let new_leaf = if remaining == common {
                None
            } else {
                Some(self.alloc(Node::leaf(Substr::new(word, split_end + 1, len - 1), None)))
            };
            let ends_here = new_leaf.is_none().then_some(word);

            if first_child.is_some() {
                let parent = self.alloc(Node {
                    substr: Some(Substr::new(sub.word, sub.start, split_end)),
                    first_child: Some(cur),
                    sibling,
                    terminal: ends_here,
                });
                self.relink(link, parent);
                let node = &mut self.nodes[cur.0];
                node.substr = Some(Substr::new(sub.word, split_end + 1, sub.end));
                node.sibling = new_leaf;
                trace!(word, node = cur.0, parent = parent.0, split_end, "split internal node");
            } else {
                let rest = self.alloc(Node::leaf(Substr::new(sub.word, split_end + 1, sub.end), new_leaf));
                let node = &mut self.nodes[cur.0];
                node.substr = Some(Substr::new(sub.word, sub.start, split_end));
                node.first_child = Some(rest);
                node.terminal = ends_here;
                trace!(word, node = cur.0, split_end, "split leaf in place");
            }
            self.words += 1;
            return;
        }
    }

    /// The shared corpus this trie indexes.
    pub fn corpus(&self) -> &Arc<Corpus> {
        &self.corpus
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// # Panics
    /// If `id` does not belong to this trie.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    #[cfg(test)]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Iterate the children of `id`, first child then its siblings.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            trie: self,
            next: self.nodes[id.0].first_child,
        }
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of arena nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The full word that `id` completes, if it ends one.
    pub fn word_of(&self, id: NodeId) -> Option<&str> {
        self.nodes[id.0].word_index().map(|w| self.corpus.word(w))
    }

    /// The characters covered by the node's own substring reference.
    pub fn segment(&self, id: NodeId) -> String {
        match self.nodes[id.0].substr {
            Some(sub) => self.corpus.chars(sub.word)[sub.start..=sub.end].iter().collect(),
            None => String::new(),
        }
    }

    /// Text spelled from the root down to and including `id`.
    ///
    /// Every ancestor shares the node's word up to its start offset, so this
    /// is just a prefix of that word.
    pub fn path_text(&self, id: NodeId) -> String {
        match self.nodes[id.0].substr {
            Some(sub) => self.corpus.chars(sub.word)[..=sub.end].iter().collect(),
            None => String::new(),
        }
    }
}

/// Iterator over a sibling chain. See [`Trie::children`].
#[derive(Debug, Clone)]
pub struct Children<'a> {
    trie: &'a Trie,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.trie.nodes[id.0].sibling;
        Some(id)
    }
}
