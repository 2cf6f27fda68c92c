use serde::{Deserialize, Serialize};
use std::fmt;

/// A live document id. Constructed only by `IndexStore::add_document`, which
/// rejects negative or duplicate ids before one of these is ever minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocId(pub u64);

impl DocId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Actual,
    Irrelevant,
    Banned,
    Removed,
}

/// A single ranked match, returned by `find_top_documents`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: DocId,
    pub relevance: f64,
    pub rating: i32,
}

impl SearchResult {
    pub fn new(id: DocId, relevance: f64, rating: i32) -> Self {
        SearchResult { id, relevance, rating }
    }
}

pub(crate) fn average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| r as i64).sum();
    (sum / ratings.len() as i64) as i32
}
