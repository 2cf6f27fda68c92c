use std::collections::{BTreeMap, HashMap};

use parking_lot::Mutex;

use crate::core::types::DocId;

/// A fixed-bucket concurrent mapping from `DocId` to accumulated relevance.
/// Each bucket carries its own `parking_lot::Mutex`; two threads touching
/// distinct buckets never block each other.
pub struct ShardedRelevanceMap {
    buckets: Vec<Mutex<HashMap<DocId, f64>>>,
}

impl ShardedRelevanceMap {
    pub fn new(bucket_count: usize) -> Self {
        let bucket_count = bucket_count.max(1);
        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, || Mutex::new(HashMap::new()));
        ShardedRelevanceMap { buckets }
    }

    fn bucket_for(&self, key: DocId) -> &Mutex<HashMap<DocId, f64>> {
        let index = (key.value() % self.buckets.len() as u64) as usize;
        &self.buckets[index]
    }

    pub fn accumulate(&self, key: DocId, delta: f64) {
        let mut bucket = self.bucket_for(key).lock();
        *bucket.entry(key).or_insert(0.0) += delta;
    }

    pub fn remove(&self, key: DocId) {
        self.bucket_for(key).lock().remove(&key);
    }

    /// Locks each bucket in turn and merges its contents into one ordered map.
    pub fn drain(&self) -> BTreeMap<DocId, f64> {
        let mut merged = BTreeMap::new();
        for bucket in &self.buckets {
            merged.extend(bucket.lock().iter().map(|(&k, &v)| (k, v)));
        }
        merged
    }
}
