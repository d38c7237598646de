//! The word list a trie indexes.
//!
//! Words are stored once, both as text and as a `char` buffer so nodes can
//! compare characters by position without re-decoding UTF-8. Nodes refer to
//! words by index only.
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::Config;

/// An ordered, immutable list of words indexed `0..len`.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    words: Vec<String>,
    chars: Vec<Box<[char]>>,
}

impl Corpus {
    /// Build a corpus from an ordered list of words.
    ///
    /// Words are taken as-is: no trimming or case folding.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let chars = words
            .iter()
            .map(|w| w.chars().collect::<Vec<_>>().into_boxed_slice())
            .collect();
        Self { words, chars }
    }

    /// Read one word per line.
    ///
    /// Surrounding whitespace is trimmed. Blank lines and lines starting with
    /// `config.comment_prefix` (when non-empty) are skipped.
    pub fn from_reader<R: BufRead>(reader: R, config: &Config) -> Result<Self> {
        let mut words = Vec::new();
        for (lineno, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("read line {}", lineno + 1))?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            if !config.comment_prefix.is_empty() && word.starts_with(&config.comment_prefix) {
                continue;
            }
            words.push(word.to_string());
        }
        Ok(Self::new(words))
    }

    /// Load a word list file (see [`Corpus::from_reader`]).
    pub fn load_word_list<P: AsRef<Path>>(path: P, config: &Config) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("open word list {}", path.display()))?;
        let corpus = Self::from_reader(BufReader::new(file), config)
            .with_context(|| format!("load word list {}", path.display()))?;
        tracing::debug!(path = %path.display(), words = corpus.len(), "loaded word list");
        Ok(corpus)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Text of word `index`.
    ///
    /// # Panics
    /// If `index` is out of range.
    pub fn word(&self, index: usize) -> &str {
        &self.words[index]
    }

    /// Characters of word `index`.
    ///
    /// # Panics
    /// If `index` is out of range.
    pub fn chars(&self, index: usize) -> &[char] {
        &self.chars[index]
    }

    /// Number of characters in word `index`.
    pub fn char_len(&self, index: usize) -> usize {
        self.chars[index].len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_order_and_chars() {
        let corpus = Corpus::new(["bear", "bull"]);
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.word(1), "bull");
        assert_eq!(corpus.chars(0), &['b', 'e', 'a', 'r']);
        assert_eq!(corpus.iter().collect::<Vec<_>>(), vec!["bear", "bull"]);
    }

    #[test]
    fn char_offsets_for_multibyte_words() {
        let corpus = Corpus::new(["ñandú"]);
        assert_eq!(corpus.char_len(0), 5);
        assert_eq!(corpus.chars(0)[4], 'ú');
    }

    #[test]
    fn reader_skips_blank_and_comment_lines() {
        let input = "# animals\nbear\n\n  bull  \n#stock\nbell\n";
        let corpus = Corpus::from_reader(input.as_bytes(), &Config::default()).unwrap();
        assert_eq!(corpus.iter().collect::<Vec<_>>(), vec!["bear", "bull", "bell"]);
    }

    #[test]
    fn reader_without_comment_prefix_keeps_hash_lines() {
        let cfg = Config {
            comment_prefix: String::new(),
            ..Config::default()
        };
        let corpus = Corpus::from_reader("#tag\nword\n".as_bytes(), &cfg).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.word(0), "#tag");
    }

    #[test]
    fn missing_file_reports_path() {
        let path = std::env::temp_dir().join("libradix_missing_word_list.txt");
        let _ = std::fs::remove_file(&path);
        let err = Corpus::load_word_list(&path, &Config::default()).unwrap_err();
        assert!(format!("{err:#}").contains("libradix_missing_word_list.txt"));
    }
}
