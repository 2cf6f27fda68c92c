use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use rayon::prelude::*;

use crate::analysis::stopwords::StopWordSet;
use crate::analysis::tokenizer::split_into_words;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{average_rating, DocId, Status};

#[derive(Debug, Clone, Copy)]
pub struct DocumentMeta {
    pub rating: i32,
    pub status: Status,
}

/// Owns the inverted index, the forward index, per-document metadata, and the
/// live-id set. Word keys are `Arc<str>`, shared by value across both indices
/// (see design note 9.1 in SPEC_FULL.md) rather than borrowed views into a
/// pinned arena.
#[derive(Debug, Default)]
pub struct IndexStore {
    inverted: HashMap<Arc<str>, HashMap<DocId, f64>>,
    forward: HashMap<DocId, HashMap<Arc<str>, f64>>,
    metadata: HashMap<DocId, DocumentMeta>,
    live_ids: BTreeSet<DocId>,
    empty_row: HashMap<Arc<str>, f64>,
}

impl IndexStore {
    pub fn new() -> Self {
        IndexStore::default()
    }

    pub fn document_count(&self) -> usize {
        self.live_ids.len()
    }

    pub fn is_live(&self, id: DocId) -> bool {
        self.metadata.contains_key(&id)
    }

    pub fn iterate_ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.live_ids.iter().copied()
    }

    pub fn metadata(&self, id: DocId) -> Option<DocumentMeta> {
        self.metadata.get(&id).copied()
    }

    pub fn inverted_row(&self, word: &str) -> Option<&HashMap<DocId, f64>> {
        self.inverted.get(word)
    }

    pub fn word_frequencies(&self, id: DocId) -> &HashMap<Arc<str>, f64> {
        self.forward.get(&id).unwrap_or(&self.empty_row)
    }

    /// Adds a document. Rejects a negative or already-live id, a malformed
    /// token, or a document with zero surviving (non-stop) tokens.
    pub fn add_document(
        &mut self,
        raw_id: i64,
        text: &str,
        status: Status,
        ratings: &[i32],
        stop_words: &StopWordSet,
    ) -> Result<DocId> {
        if raw_id < 0 {
            return Err(Error::new(
                ErrorKind::InvalidDocumentId,
                format!("document id {} is negative", raw_id),
            ));
        }
        let id = DocId(raw_id as u64);
        if self.is_live(id) {
            return Err(Error::new(
                ErrorKind::InvalidDocumentId,
                format!("document id {} is already live", raw_id),
            ));
        }

        let tokens = split_into_words(text)?;
        let surviving: Vec<&str> = tokens
            .into_iter()
            .filter(|w| !stop_words.contains(w))
            .collect();
        if surviving.is_empty() {
            return Err(Error::new(
                ErrorKind::InvalidDocumentId,
                format!("document id {} has no indexable tokens", raw_id),
            ));
        }

        let inv_count = 1.0 / surviving.len() as f64;
        let mut row: HashMap<Arc<str>, f64> = HashMap::new();
        for word in surviving {
            match row.get_key_value(word) {
                Some((key, _)) => {
                    let key = key.clone();
                    *row.get_mut(&key).unwrap() += inv_count;
                }
                None => {
                    row.insert(Arc::from(word), inv_count);
                }
            }
        }

        for (word, tf) in &row {
            self.inverted
                .entry(Arc::clone(word))
                .or_default()
                .insert(id, *tf);
        }
        self.forward.insert(id, row);
        self.metadata.insert(
            id,
            DocumentMeta { rating: average_rating(ratings), status },
        );
        self.live_ids.insert(id);

        Ok(id)
    }

    /// No-op if `id` is absent.
    pub fn remove_document(&mut self, id: DocId) {
        if !self.live_ids.remove(&id) {
            return;
        }
        self.metadata.remove(&id);
        if let Some(row) = self.forward.remove(&id) {
            for word in row.keys() {
                if let Some(inner) = self.inverted.get_mut(word.as_ref()) {
                    inner.remove(&id);
                }
            }
        }
    }

    /// Parallel variant: erases the per-word inverted-index entry for `id`
    /// via an unsynchronized rayon pass. Sound because a document's forward
    /// row holds each word at most once, so every task touches a distinct
    /// inner map.
    pub fn remove_document_parallel(&mut self, id: DocId) {
        if !self.live_ids.remove(&id) {
            return;
        }
        self.metadata.remove(&id);
        if let Some(row) = self.forward.remove(&id) {
            let words: Vec<Arc<str>> = row.into_keys().collect();
            let shared = SharedMutPtr(&mut self.inverted as *mut HashMap<Arc<str>, HashMap<DocId, f64>>);
            // SAFETY: each `word` in `words` is distinct (a forward row has no
            // duplicate keys), so the `get_mut` calls below touch disjoint
            // inner maps and never alias the same `HashMap<DocId, f64>`.
            words.par_iter().for_each(|word| {
                // Rebind to force capturing the whole `SharedMutPtr`, not just its
                // `.0` field, which would bypass the `Sync` impl under 2021 disjoint
                // closure capture.
                #[allow(clippy::redundant_locals)]
                let shared = shared;
                let inverted: &mut HashMap<Arc<str>, HashMap<DocId, f64>> = unsafe { &mut *shared.0 };
                if let Some(inner) = inverted.get_mut(word.as_ref()) {
                    inner.remove(&id);
                }
            });
        }
    }
}

/// Carries a raw pointer across a rayon `for_each` closure boundary. Safe to
/// share only because each task that dereferences it touches a distinct key,
/// per the precondition documented on `remove_document_parallel`.
struct SharedMutPtr<T>(*mut T);
impl<T> Clone for SharedMutPtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for SharedMutPtr<T> {}
unsafe impl<T> Sync for SharedMutPtr<T> {}
unsafe impl<T> Send for SharedMutPtr<T> {}
