use std::collections::BTreeSet;
use std::io::Write;
use std::sync::Arc;

use crate::core::types::DocId;
use crate::index::store::IndexStore;

/// Walks live ids ascending, collapsing any document whose exact (post-stop-word)
/// word set duplicates one already seen under a lower id. Writes one
/// "Found duplicate document id <id>" line per collapsed id to `sink`.
pub fn remove_duplicates(store: &mut IndexStore, sink: &mut dyn Write) {
    let mut seen: std::collections::HashMap<BTreeSet<Arc<str>>, DocId> = std::collections::HashMap::new();
    let mut to_remove = Vec::new();

    for id in store.iterate_ids() {
        let words: BTreeSet<Arc<str>> = store.word_frequencies(id).keys().cloned().collect();
        match seen.entry(words) {
            std::collections::hash_map::Entry::Occupied(_) => {
                let _ = writeln!(sink, "Found duplicate document id {}", id);
                to_remove.push(id);
            }
            std::collections::hash_map::Entry::Vacant(e) => {
                e.insert(id);
            }
        }
    }

    for id in to_remove {
        store.remove_document(id);
    }
}
