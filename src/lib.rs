pub mod analysis;
pub mod batch;
pub mod core;
pub mod engine;
pub mod index;
pub mod pagination;
pub mod parallel;
pub mod query;
pub mod request_queue;
pub mod scoring;
pub mod search;

pub use core::error::{Error, ErrorKind, Result};
pub use core::types::{DocId, SearchResult, Status};
pub use engine::Engine;
pub use scoring::Execution;

/*
┌──────────────────────────────────────────────────────────────────────┐
│                        LEXIGRAPH ARCHITECTURE                        │
└──────────────────────────────────────────────────────────────────────┘

┌──────────────────────────── engine::Engine ───────────────────────────┐
│ stop_words: StopWordSet        // built once, immutable                │
│ store: IndexStore               // inverted + forward index, metadata  │
│ config: Config                  // shard sizing, result cap, tolerance │
└─────────────────────────────────────────────────────────────────────┘
        │                               │                      │
        ▼                               ▼                      ▼
  index::store::IndexStore      scoring::ranker         search::matcher
  (word -> doc -> tf,           (sequential / parallel  (plus-words
   doc -> word -> tf)            TF-IDF ranking via       present in one
                                  ShardedRelevanceMap)      document's row)
        │
        ▼
  search::duplicates  (collapse documents with identical word sets)

batch::process_queries and pagination::Paginator and
request_queue::RequestTracker sit outside the engine and drive it
through its public `&Engine` / `&mut Engine` surface only.
*/
