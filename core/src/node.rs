//! Trie node and substring reference types.
//!
//! Nodes live in an arena owned by [`crate::Trie`] and link to each other by
//! [`NodeId`]. A node never stores text: its [`Substr`] points into one word
//! of the shared [`crate::Corpus`].
use serde::{Deserialize, Serialize};

/// Index of a node inside the trie arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root is always the first arena slot.
    pub const ROOT: NodeId = NodeId(0);

    /// Raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A range of characters `corpus[word][start..=end]`.
///
/// Offsets are inclusive `char` positions within the word. A valid reference
/// always satisfies `start <= end < word length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Substr {
    pub word: usize,
    pub start: usize,
    pub end: usize,
}

impl Substr {
    pub fn new(word: usize, start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "empty substring reference {word}:{start}..={end}");
        Self { word, start, end }
    }

    /// Number of characters covered.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }
}

impl std::fmt::Display for Substr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.word, self.start, self.end)
    }
}

/// A node of the compressed trie.
///
/// The role is structural:
/// - root: no substring reference,
/// - internal: has a first child,
/// - leaf: no first child; its path from the root spells exactly one word.
///
/// An internal node may additionally end a word (`terminal`) when that word
/// is a proper prefix of other stored words.
#[derive(Debug, Clone, Default)]
pub struct Node {
    pub(crate) substr: Option<Substr>,
    pub(crate) first_child: Option<NodeId>,
    pub(crate) sibling: Option<NodeId>,
    pub(crate) terminal: Option<usize>,
}

impl Node {
    pub(crate) fn root() -> Self {
        Self::default()
    }

    pub(crate) fn leaf(substr: Substr, sibling: Option<NodeId>) -> Self {
        Self {
            substr: Some(substr),
            first_child: None,
            sibling,
            terminal: None,
        }
    }

    pub fn substr(&self) -> Option<Substr> {
        self.substr
    }

    pub fn first_child(&self) -> Option<NodeId> {
        self.first_child
    }

    pub fn sibling(&self) -> Option<NodeId> {
        self.sibling
    }

    pub fn is_root(&self) -> bool {
        self.substr.is_none()
    }

    pub fn is_leaf(&self) -> bool {
        self.substr.is_some() && self.first_child.is_none()
    }

    /// Index of the word this node completes, if any.
    ///
    /// For a leaf this is the word its substring points into; for an internal
    /// node it is the word recorded as ending on it.
    pub fn word_index(&self) -> Option<usize> {
        if self.is_leaf() {
            self.substr.map(|s| s.word)
        } else {
            self.terminal
        }
    }

    /// True for leaves and for internal nodes that end a word.
    pub fn ends_word(&self) -> bool {
        self.word_index().is_some()
    }
}
