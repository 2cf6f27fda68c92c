use std::sync::Arc;

use crate::analysis::stopwords::StopWordSet;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::types::{DocId, SearchResult, Status};
use crate::index::store::IndexStore;
use crate::scoring::{find_top_documents as rank, Execution};
use crate::search::{match_document as do_match, remove_duplicates as do_remove_duplicates};

/// The public façade composing the tokenizer, stop-word set, index store,
/// ranker, matcher and duplicate collapser into one engine.
pub struct Engine {
    stop_words: StopWordSet,
    store: IndexStore,
    config: Config,
}

impl Engine {
    /// Builds an engine from any iterator of string-likes as stop words.
    pub fn new<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Engine {
            stop_words: StopWordSet::build(stop_words)?,
            store: IndexStore::new(),
            config: Config::default(),
        })
    }

    /// Builds an engine from a single whitespace-delimited stop-word string.
    pub fn from_text(stop_words_text: &str) -> Result<Self> {
        Ok(Engine {
            stop_words: StopWordSet::from_text(stop_words_text)?,
            store: IndexStore::new(),
            config: Config::default(),
        })
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn add_document(
        &mut self,
        id: i64,
        text: &str,
        status: Status,
        ratings: &[i32],
    ) -> Result<()> {
        self.store
            .add_document(id, text, status, ratings, &self.stop_words)?;
        Ok(())
    }

    /// Top-K results ranked by TF-IDF relevance, filtered by an arbitrary
    /// `(id, status, rating)` predicate.
    pub fn find_top_documents(
        &self,
        query: &str,
        predicate: impl Fn(DocId, Status, i32) -> bool + Sync,
        execution: Execution,
    ) -> Result<Vec<SearchResult>> {
        let parsed = crate::query::parse_query(query, &self.stop_words, false)?;
        Ok(rank(&self.store, &parsed, &predicate, execution, &self.config))
    }

    /// Sugar over `find_top_documents` filtering by an exact status.
    pub fn find_top_documents_with_status(
        &self,
        query: &str,
        status: Status,
        execution: Execution,
    ) -> Result<Vec<SearchResult>> {
        self.find_top_documents(query, move |_, s, _| s == status, execution)
    }

    /// Sugar over `find_top_documents_with_status` defaulting to `Status::Actual`.
    pub fn find_top_documents_default(
        &self,
        query: &str,
        execution: Execution,
    ) -> Result<Vec<SearchResult>> {
        self.find_top_documents_with_status(query, Status::Actual, execution)
    }

    /// Panics if `id` is not live.
    pub fn match_document(
        &self,
        query: &str,
        id: DocId,
        execution: Execution,
    ) -> Result<(Vec<Arc<str>>, Status)> {
        do_match(&self.store, query, id, &self.stop_words, execution)
    }

    /// No-op if `id` is absent.
    pub fn remove_document(&mut self, id: DocId, execution: Execution) {
        match execution {
            Execution::Sequential => self.store.remove_document(id),
            Execution::Parallel => self.store.remove_document_parallel(id),
        }
    }

    pub fn remove_duplicates(&mut self, sink: &mut dyn std::io::Write) {
        do_remove_duplicates(&mut self.store, sink);
    }

    pub fn word_frequencies(&self, id: DocId) -> &std::collections::HashMap<Arc<str>, f64> {
        self.store.word_frequencies(id)
    }

    pub fn document_count(&self) -> usize {
        self.store.document_count()
    }

    pub fn iterate_ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.store.iterate_ids()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_word_exclusion_scenario() {
        let mut engine = Engine::from_text("in the").unwrap();
        engine
            .add_document(42, "cat in the city", Status::Actual, &[1, 2, 3])
            .unwrap();
        let results = engine
            .find_top_documents_default("in", Execution::Sequential)
            .unwrap();
        assert!(results.is_empty());

        let mut engine_no_stopwords = Engine::from_text("").unwrap();
        engine_no_stopwords
            .add_document(42, "cat in the city", Status::Actual, &[1, 2, 3])
            .unwrap();
        let results = engine_no_stopwords
            .find_top_documents_default("in", Execution::Sequential)
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, DocId(42));
    }

    #[test]
    fn remove_document_is_reflected_in_find_top() {
        let mut engine = Engine::from_text("").unwrap();
        engine.add_document(1, "cat dog", Status::Actual, &[]).unwrap();
        engine.remove_document(DocId(1), Execution::Sequential);
        let results = engine
            .find_top_documents_default("cat", Execution::Sequential)
            .unwrap();
        assert!(results.is_empty());
        assert_eq!(engine.document_count(), 0);
    }

    #[test]
    fn result_cap_is_five() {
        let mut engine = Engine::from_text("").unwrap();
        for id in 0..10 {
            engine
                .add_document(id, "common word", Status::Actual, &[id as i32])
                .unwrap();
        }
        let results = engine
            .find_top_documents_default("common", Execution::Sequential)
            .unwrap();
        assert!(results.len() <= 5);
    }
}
