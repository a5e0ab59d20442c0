use std::collections::HashMap;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub expired: usize,
    pub stores: usize,
    pub hits_by_operation: HashMap<&'static str, usize>,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&mut self, operation: &'static str) {
        self.hits += 1;
        *self.hits_by_operation.entry(operation).or_default() += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_expired(&mut self, count: usize) {
        self.expired += count;
    }

    pub fn record_store(&mut self) {
        self.stores += 1;
    }
}
