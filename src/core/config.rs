/// Engine-wide tunables. Mirrors the teacher's `Config`-with-`Default` pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Shard count for the parallel ranking path is `max(num_cpus, doc_count / shard_divisor)`.
    pub shard_divisor: usize,
    /// Results returned by `find_top_documents` never exceed this.
    pub max_results: usize,
    /// Absolute tolerance used when comparing two relevance scores for ties.
    pub relevance_tolerance: f64,
    /// Size of the sliding window kept by `RequestTracker`.
    pub request_window: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            shard_divisor: 4,
            max_results: 5,
            relevance_tolerance: 1e-6,
            request_window: 1440,
        }
    }
}
