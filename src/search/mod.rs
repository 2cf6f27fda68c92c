pub mod duplicates;
pub mod matcher;

pub use duplicates::remove_duplicates;
pub use matcher::match_document;
