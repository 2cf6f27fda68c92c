use rayon::prelude::*;

use crate::core::types::SearchResult;
use crate::engine::Engine;
use crate::scoring::Execution;

/// Runs each query against `engine` in parallel via rayon, preserving input
/// order in the output (an indexed parallel iterator's `collect` is
/// order-preserving).
pub fn process_queries(engine: &Engine, queries: &[String]) -> Vec<Vec<SearchResult>> {
    queries
        .par_iter()
        .map(|query| {
            engine
                .find_top_documents_default(query, Execution::Sequential)
                .unwrap_or_default()
        })
        .collect()
}

/// Concatenates the per-query result vectors into one flat sequence,
/// preserving query order and intra-query order.
pub fn process_queries_joined(engine: &Engine, queries: &[String]) -> Vec<SearchResult> {
    process_queries(engine, queries).into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Status;

    #[test]
    fn preserves_query_order() {
        let mut engine = Engine::from_text("in the").unwrap();
        engine
            .add_document(23, "wolf in the underground big grey", Status::Actual, &[1, 2, 3])
            .unwrap();
        engine
            .add_document(25, "big grey parrot found", Status::Actual, &[3, 4, 5])
            .unwrap();

        let queries: Vec<String> = vec!["big".into(), "grey".into(), "wolf".into()];
        let batched = process_queries(&engine, &queries);
        for (query, results) in queries.iter().zip(batched.iter()) {
            let sequential = engine
                .find_top_documents_default(query, Execution::Sequential)
                .unwrap();
            assert_eq!(results, &sequential);
        }
    }

    #[test]
    fn joined_concatenates_in_order() {
        let mut engine = Engine::from_text("").unwrap();
        engine.add_document(1, "cat", Status::Actual, &[]).unwrap();
        engine.add_document(2, "dog", Status::Actual, &[]).unwrap();

        let queries: Vec<String> = vec!["cat".into(), "dog".into()];
        let joined = process_queries_joined(&engine, &queries);
        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0].id.value(), 1);
        assert_eq!(joined[1].id.value(), 2);
    }
}
