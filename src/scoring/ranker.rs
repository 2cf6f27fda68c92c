use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::core::config::Config;
use crate::core::types::{DocId, SearchResult, Status};
use crate::index::store::IndexStore;
use crate::parallel::ShardedRelevanceMap;
use crate::query::Query;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Execution {
    Sequential,
    Parallel,
}

fn idf(store: &IndexStore, word: &str) -> f64 {
    let df = store.inverted_row(word).map(|row| row.len()).unwrap_or(0);
    (store.document_count() as f64 / df as f64).ln()
}

/// Executes a parsed query against `store`, ranking by TF-IDF relevance and
/// truncating to `config.max_results`.
pub fn find_top_documents(
    store: &IndexStore,
    query: &Query,
    predicate: &(dyn Fn(DocId, Status, i32) -> bool + Sync),
    execution: Execution,
    config: &Config,
) -> Vec<SearchResult> {
    let relevance = match execution {
        Execution::Sequential => find_all_sequential(store, query, predicate),
        Execution::Parallel => find_all_parallel(store, query, predicate, config),
    };

    let mut results: Vec<SearchResult> = relevance
        .into_iter()
        .map(|(id, relevance)| {
            let rating = store.metadata(id).map(|m| m.rating).unwrap_or(0);
            SearchResult::new(id, relevance, rating)
        })
        .collect();

    let tolerance = config.relevance_tolerance;
    results.sort_by(|a, b| {
        if (a.relevance - b.relevance).abs() < tolerance {
            b.rating.cmp(&a.rating).then(a.id.cmp(&b.id))
        } else {
            b.relevance.partial_cmp(&a.relevance).unwrap()
        }
    });
    results.truncate(config.max_results);
    results
}

fn find_all_sequential(
    store: &IndexStore,
    query: &Query,
    predicate: &(dyn Fn(DocId, Status, i32) -> bool + Sync),
) -> BTreeMap<DocId, f64> {
    let mut relevance: BTreeMap<DocId, f64> = BTreeMap::new();

    for word in &query.plus_words {
        let Some(row) = store.inverted_row(word) else { continue };
        let word_idf = idf(store, word);
        for (&doc, &tf) in row {
            let meta = store.metadata(doc).expect("live id has metadata");
            if predicate(doc, meta.status, meta.rating) {
                *relevance.entry(doc).or_insert(0.0) += tf * word_idf;
            }
        }
    }

    for word in &query.minus_words {
        let Some(row) = store.inverted_row(word) else { continue };
        for doc in row.keys() {
            relevance.remove(doc);
        }
    }

    relevance
}

fn find_all_parallel(
    store: &IndexStore,
    query: &Query,
    predicate: &(dyn Fn(DocId, Status, i32) -> bool + Sync),
    config: &Config,
) -> BTreeMap<DocId, f64> {
    // For a small corpus, `doc_count / shard_divisor` collapses toward 1 and the
    // sharded map buys no parallelism; floor it at the available core count instead.
    let shard_count = (store.document_count() / config.shard_divisor).max(num_cpus::get());
    let relevance = ShardedRelevanceMap::new(shard_count);

    query.plus_words.par_iter().for_each(|word| {
        let Some(row) = store.inverted_row(word) else { return };
        let word_idf = idf(store, word);
        row.par_iter().for_each(|(&doc, &tf)| {
            let meta = store.metadata(doc).expect("live id has metadata");
            if predicate(doc, meta.status, meta.rating) {
                relevance.accumulate(doc, tf * word_idf);
            }
        });
    });

    // Minus-word removal must observe every plus-word accumulation above;
    // rayon's `for_each` is a barrier, so this pass starts only once that
    // one has fully drained.
    query.minus_words.par_iter().for_each(|word| {
        let Some(row) = store.inverted_row(word) else { return };
        row.par_iter().for_each(|(&doc, _)| {
            relevance.remove(doc);
        });
    });

    relevance.drain()
}
