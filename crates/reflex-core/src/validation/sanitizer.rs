//! Input sanitization for security
//!
//! This module produces defensive copies of untrusted JSON objects. Keys that
//! collide with object-prototype machinery in dynamic-language consumers are
//! dropped, and string values are trimmed, so the result can be merged into
//! other structures without corrupting them.

use serde_json::{Map, Value};

/// Keys that must never survive sanitization. Merging any of these into a
/// JavaScript object downstream rewires its prototype chain.
const RESERVED_KEYS: [&str; 3] = ["__proto__", "constructor", "prototype"];

/// Sanitizer configuration
#[derive(Debug, Clone)]
pub struct SanitizerConfig {
    /// Keys dropped from the input
    pub denied_keys: Vec<String>,
    /// Trim leading/trailing whitespace from string values
    pub trim_strings: bool,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            denied_keys: RESERVED_KEYS.iter().map(|k| k.to_string()).collect(),
            trim_strings: true,
        }
    }
}

/// Record sanitizer for untrusted key/value input
pub struct RecordSanitizer {
    config: SanitizerConfig,
}

impl RecordSanitizer {
    /// Create a new sanitizer with the default config
    pub fn new() -> Self {
        Self::with_config(SanitizerConfig::default())
    }

    /// Create a new sanitizer with a custom config
    pub fn with_config(config: SanitizerConfig) -> Self {
        Self { config }
    }

    /// Check whether a key is on the denylist
    pub fn is_denied(&self, key: &str) -> bool {
        self.config.denied_keys.iter().any(|k| k == key)
    }

    /// Sanitize an object into a new map
    ///
    /// Iterates the input's keys in enumeration order, drops denylisted keys,
    /// and copies every retained value unchanged except strings, which are
    /// stored trimmed. The input is never mutated. If every key is
    /// denylisted the result is an empty map; callers are expected to
    /// re-validate for non-emptiness rather than rely on an error here.
    pub fn sanitize(&self, input: &Map<String, Value>) -> Map<String, Value> {
        let mut cleaned = Map::new();

        for (key, value) in input {
            if self.is_denied(key) {
                continue;
            }
            let value = match value {
                Value::String(s) if self.config.trim_strings => {
                    Value::String(s.trim().to_string())
                }
                other => other.clone(),
            };
            cleaned.insert(key.clone(), value);
        }

        cleaned
    }
}

impl Default for RecordSanitizer {
    fn default() -> Self {
        Self::new()
    }
}
