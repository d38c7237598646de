//! libradix-core
//!
//! Compressed trie (radix tree) over a fixed word list, answering prefix
//! completion queries. Shared by the `complete` and `print_trie` tools.
//!
//! Public API:
//! - `Corpus` - The ordered word list every node points into
//! - `Trie` - Construction, completion queries and read-only traversal
//! - `Node` / `NodeId` / `Substr` - Arena nodes and their substring references
//! - `common_prefix_length` - Shared-prefix measurement used while building
//! - `InvariantError` - Structural check failures
//! - `Config` - Loader and display options
use serde::{Deserialize, Serialize};

// Core modules
pub mod common_prefix;
pub use common_prefix::common_prefix_length;

pub mod corpus;
pub use corpus::Corpus;

pub mod node;
pub use node::{Node, NodeId, Substr};

pub mod trie;
pub use trie::{Children, Trie};

pub mod complete;

pub mod invariants;
pub use invariants::InvariantError;

/// Options for loading word lists and presenting completions.
///
/// Completion results are unordered sets; sorting and truncation here only
/// affect how tools display them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Lines of a word list starting with this are ignored. Empty disables.
    pub comment_prefix: String,

    /// Maximum completions shown per prefix (0 = unlimited)
    pub max_completions: usize,

    /// Sort completions alphabetically before display
    pub sort_completions: bool,

    /// Show `(word,start,end)` substring references when printing a tree
    pub show_segments: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            comment_prefix: "#".to_string(),
            max_completions: 0,
            sort_completions: true,
            show_segments: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Apply display options to a list of completed words.
    pub fn present<'a>(&self, mut words: Vec<&'a str>) -> Vec<&'a str> {
        if self.sort_completions {
            words.sort_unstable();
        }
        if self.max_completions > 0 {
            words.truncate(self.max_completions);
        }
        words
    }
}
