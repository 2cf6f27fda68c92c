use std::collections::HashSet;

use crate::analysis::tokenizer::{is_valid_word, split_into_words};
use crate::core::error::{Error, ErrorKind, Result};

/// An immutable set of stop words, built once at engine construction.
#[derive(Debug, Clone, Default)]
pub struct StopWordSet {
    words: HashSet<Box<str>>,
}

impl StopWordSet {
    /// Builds a set from any iterator of string-likes, discarding empty
    /// strings and rejecting any survivor that contains a control character.
    pub fn build<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = HashSet::new();
        for candidate in stop_words {
            let candidate = candidate.as_ref();
            if candidate.is_empty() {
                continue;
            }
            if !is_valid_word(candidate) {
                return Err(Error::new(
                    ErrorKind::InvalidStopWord,
                    format!("stop word {:?} contains a control character", candidate),
                ));
            }
            words.insert(candidate.into());
        }
        Ok(StopWordSet { words })
    }

    /// Convenience constructor: tokenizes a whitespace-delimited string first.
    pub fn from_text(stop_words_text: &str) -> Result<Self> {
        let words = split_into_words(stop_words_text)
            .map_err(|e| Error::new(ErrorKind::InvalidStopWord, e.context))?;
        Self::build(words)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
