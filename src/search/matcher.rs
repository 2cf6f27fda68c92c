use std::sync::Arc;

use rayon::prelude::*;

use crate::analysis::stopwords::StopWordSet;
use crate::core::types::{DocId, Status};
use crate::index::store::IndexStore;
use crate::query::parser::parse_query;
use crate::query::Query;
use crate::scoring::Execution;

/// Which plus-words of `query` appear in document `id`, or empty if any
/// minus-word is present. Panics if `id` is not live — callers must gate
/// with `IndexStore::iterate_ids`.
pub fn match_document(
    store: &IndexStore,
    raw_query: &str,
    id: DocId,
    stop_words: &StopWordSet,
    execution: Execution,
) -> crate::core::error::Result<(Vec<Arc<str>>, Status)> {
    let status = store
        .metadata(id)
        .unwrap_or_else(|| panic!("match_document called on unknown id {}", id))
        .status;

    let matched = match execution {
        Execution::Sequential => {
            let query = parse_query(raw_query, stop_words, false)?;
            match_sequential(store, &query, id)
        }
        Execution::Parallel => {
            let query = parse_query(raw_query, stop_words, true)?;
            match_parallel(store, &query, id)
        }
    };

    Ok((matched, status))
}

fn match_sequential(store: &IndexStore, query: &Query, id: DocId) -> Vec<Arc<str>> {
    let row = store.word_frequencies(id);
    for word in &query.minus_words {
        if row.contains_key(word.as_str()) {
            return Vec::new();
        }
    }
    query
        .plus_words
        .iter()
        .filter_map(|word| row.get_key_value(word.as_str()).map(|(k, _)| Arc::clone(k)))
        .collect()
}

fn match_parallel(store: &IndexStore, query: &Query, id: DocId) -> Vec<Arc<str>> {
    let row = store.word_frequencies(id);

    let hit_minus = query
        .minus_words
        .par_iter()
        .find_any(|word| row.contains_key(word.as_str()));
    if hit_minus.is_some() {
        return Vec::new();
    }

    let mut matched: Vec<Arc<str>> = query
        .plus_words
        .par_iter()
        .filter_map(|word| row.get_key_value(word.as_str()).map(|(k, _)| Arc::clone(k)))
        .collect();
    matched.sort();
    matched.dedup();
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Status;

    #[test]
    fn matches_plus_words_present_in_document() {
        let sw = StopWordSet::from_text("in the").unwrap();
        let mut store = IndexStore::new();
        let id = store
            .add_document(25, "white elaphant in the big city", Status::Actual, &[], &sw)
            .unwrap();
        let (words, status) =
            match_document(&store, "big white mouse lost", id, &sw, Execution::Sequential).unwrap();
        let words: Vec<&str> = words.iter().map(|w| w.as_ref()).collect();
        assert!(words.contains(&"big"));
        assert!(words.contains(&"white"));
        assert_eq!(status, Status::Actual);
    }

    #[test]
    fn minus_word_present_clears_match() {
        let sw = StopWordSet::from_text("in the").unwrap();
        let mut store = IndexStore::new();
        let id = store
            .add_document(25, "white elaphant in the big city", Status::Actual, &[], &sw)
            .unwrap();
        let (words, _) = match_document(
            &store,
            "big white mouse lost -elaphant",
            id,
            &sw,
            Execution::Sequential,
        )
        .unwrap();
        assert!(words.is_empty());
    }

    #[test]
    fn sequential_and_parallel_agree() {
        let sw = StopWordSet::from_text("in the").unwrap();
        let mut store = IndexStore::new();
        let id = store
            .add_document(25, "white elaphant in the big city", Status::Actual, &[], &sw)
            .unwrap();
        let (mut seq, _) =
            match_document(&store, "big white mouse lost", id, &sw, Execution::Sequential).unwrap();
        let (mut par, _) =
            match_document(&store, "big white mouse lost", id, &sw, Execution::Parallel).unwrap();
        seq.sort();
        par.sort();
        assert_eq!(seq, par);
    }

    #[test]
    #[should_panic]
    fn panics_on_unknown_id() {
        let sw = StopWordSet::from_text("").unwrap();
        let store = IndexStore::new();
        let _ = match_document(&store, "big", DocId(1), &sw, Execution::Sequential);
    }
}
