//! Per-document memoization of synthesized definition examples
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;
use std::collections::HashMap;

/// Cache of examples keyed by definition id.
///
/// A stored `None` means synthesis ran and found nothing; it is returned from
/// the cache like any other result.
#[derive(Debug, Clone, Default)]
pub struct ExampleCache {
    entries: HashMap<String, Option<Value>>,
    hits: u64,
    misses: u64,
}

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of memoized definitions
    pub entries: usize,
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that required synthesis
    pub misses: u64,
}

impl ExampleCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a definition, recording a hit or a miss.
    ///
    /// The outer `Option` is cache presence, the inner one is the example.
    pub fn lookup(&mut self, id: &str) -> Option<Option<Value>> {
        match self.entries.get(id) {
            Some(example) => {
                self.hits += 1;
                Some(example.clone())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Store the synthesis result for a definition
    pub fn insert(&mut self, id: impl Into<String>, example: Option<Value>) {
        self.entries.insert(id.into(), example);
    }

    /// Check whether a definition has been memoized
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Drop every memoized example; counters are kept
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}
