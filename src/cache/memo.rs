use std::collections::HashMap;

use crate::analysis::AnalysisResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoCounters {
    pub hits: u64,
    pub misses: u64,
    pub writes: u64,
}

/// Session-scoped store of analysis results keyed by analysis identifier.
///
/// Entries are never evicted or expired; the last write for a key wins.
#[derive(Debug, Clone, Default)]
pub struct AnalysisMemo {
    entries: HashMap<String, AnalysisResult>,
    counters: MemoCounters,
}

impl AnalysisMemo {
    pub fn get(&mut self, key: &str) -> Option<AnalysisResult> {
        match self.entries.get(key) {
            Some(result) => {
                self.counters.hits += 1;
                Some(result.clone())
            }
            None => {
                self.counters.misses += 1;
                None
            }
        }
    }

    /// Lookup that leaves the counters alone, for redraws.
    pub fn peek(&self, key: &str) -> Option<&AnalysisResult> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, result: AnalysisResult) {
        self.entries.insert(key.into(), result);
        self.counters.writes += 1;
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn counters(&self) -> MemoCounters {
        self.counters
    }

    pub fn hit_rate(&self) -> f64 {
        let lookups = self.counters.hits + self.counters.misses;
        if lookups == 0 {
            return 0.0;
        }
        self.counters.hits as f64 / lookups as f64
    }
}
