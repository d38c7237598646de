//! Structural checks for a built trie.
use thiserror::Error;

use crate::node::{NodeId, Substr};
use crate::trie::Trie;

/// A violated structural invariant, naming the offending node.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantError {
    #[error("root must have no substring and no sibling")]
    MalformedRoot,

    #[error("node {node:?} below the root has no substring")]
    MissingSubstr { node: NodeId },

    #[error("node {node:?} substring {substr} is out of range for a word of {word_len} chars")]
    OutOfRange {
        node: NodeId,
        substr: Substr,
        word_len: usize,
    },

    #[error("node {node:?} starts at {found}, expected {expected}")]
    Misaligned {
        node: NodeId,
        expected: usize,
        found: usize,
    },

    #[error("node {node:?} does not share its parent's path")]
    PathMismatch { node: NodeId },

    #[error("siblings {first:?} and {second:?} both start with {ch:?}")]
    SharedFirstChar {
        first: NodeId,
        second: NodeId,
        ch: char,
    },

    #[error("leaf {node:?} does not reach the end of its word")]
    IncompleteLeaf { node: NodeId },

    #[error("node {node:?} is marked as ending word {word} which its path does not spell")]
    TerminalMismatch { node: NodeId, word: usize },

    #[error("internal node {node:?} has a single child and ends no word")]
    Uncompressed { node: NodeId },

    #[error("node graph is not a tree (visited more nodes than allocated)")]
    NotATree,
}

impl Trie {
    /// Verify the structural invariants of the whole tree.
    ///
    /// Checks substring bounds, that each node starts right after its
    /// parent's end, that siblings differ in their first character, that
    /// leaves spell complete words and that internal nodes are compressed.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let root = self.node(self.root());
        if !root.is_root() || root.sibling().is_some() {
            return Err(InvariantError::MalformedRoot);
        }

        let corpus = self.corpus();
        let mut visited = 0usize;
        let mut stack: Vec<(NodeId, usize, Option<Substr>)> = vec![(self.root(), 0, None)];

        while let Some((parent, start, parent_sub)) = stack.pop() {
            let mut first_chars: Vec<(char, NodeId)> = Vec::new();

            for id in self.children(parent) {
                visited += 1;
                if visited >= self.node_count() {
                    return Err(InvariantError::NotATree);
                }

                let node = self.node(id);
                let sub = node.substr().ok_or(InvariantError::MissingSubstr { node: id })?;
                let word_len = if sub.word < corpus.len() {
                    corpus.char_len(sub.word)
                } else {
                    0
                };
                if sub.start > sub.end || sub.end >= word_len {
                    return Err(InvariantError::OutOfRange {
                        node: id,
                        substr: sub,
                        word_len,
                    });
                }
                if sub.start != start {
                    return Err(InvariantError::Misaligned {
                        node: id,
                        expected: start,
                        found: sub.start,
                    });
                }

                let chars = corpus.chars(sub.word);
                if let Some(p) = parent_sub {
                    if chars[..=p.end] != corpus.chars(p.word)[..=p.end] {
                        return Err(InvariantError::PathMismatch { node: id });
                    }
                }

                let ch = chars[sub.start];
                if let Some(&(_, first)) = first_chars.iter().find(|(c, _)| *c == ch) {
                    return Err(InvariantError::SharedFirstChar {
                        first,
                        second: id,
                        ch,
                    });
                }
                first_chars.push((ch, id));

                match node.first_child() {
                    None => {
                        if sub.end + 1 != word_len {
                            return Err(InvariantError::IncompleteLeaf { node: id });
                        }
                    }
                    Some(_) => {
                        if let Some(word) = node.word_index() {
                            let spelled = word < corpus.len()
                                && corpus.chars(word) == &chars[..=sub.end];
                            if !spelled {
                                return Err(InvariantError::TerminalMismatch { node: id, word });
                            }
                        } else if self.children(id).nth(1).is_none() {
                            return Err(InvariantError::Uncompressed { node: id });
                        }
                        stack.push((id, sub.end + 1, Some(sub)));
                    }
                }
            }
        }
        Ok(())
    }
}
