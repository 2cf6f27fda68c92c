pub mod ranker;

pub use ranker::{find_top_documents, Execution};
