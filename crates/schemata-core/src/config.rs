//! Limits applied while resolving references and synthesizing examples
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};

/// Configuration for resolver and synthesizer behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// Maximum number of `$ref` hops followed by a single dereference
    pub max_reference_depth: usize,
    /// Maximum nesting of example synthesis calls
    pub max_synthesis_depth: usize,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            max_reference_depth: 64,
            max_synthesis_depth: 128,
        }
    }
}

impl SchemaConfig {
    /// Set the maximum `$ref` chain length
    pub fn with_max_reference_depth(mut self, depth: usize) -> Self {
        self.max_reference_depth = depth;
        self
    }

    /// Set the maximum synthesis recursion depth
    pub fn with_max_synthesis_depth(mut self, depth: usize) -> Self {
        self.max_synthesis_depth = depth;
        self
    }
}
