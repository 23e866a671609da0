//! Classification of untrusted analysis input
//!
//! [`classify`] is the entry point: it inspects an arbitrary JSON value,
//! rejects shapes that cannot be analyzed with a specific reason, sanitizes
//! accepted objects, and re-checks the sanitized result before reporting
//! success. Every rejection is reported through [`AnalysisOutcome::Rejected`];
//! nothing in this module panics or returns `Err`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::audit;
use super::sanitizer::RecordSanitizer;

/// Reason an input was rejected
///
/// The `Display` strings form a fixed enumeration; callers surface them to
/// users verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum RejectReason {
    /// Input was null (or absent, via [`classify_opt`])
    #[error("Input cannot be null or undefined")]
    NullInput,
    /// Input was a number, string, bool, or array
    #[error("Input must be a valid object")]
    NotAnObject,
    /// Input was an object with zero entries
    #[error("Input object cannot be empty")]
    EmptyObject,
    /// Sanitization stripped every entry
    #[error("Invalid data structure provided")]
    InvalidStructure,
}

/// Outcome of classifying one input
///
/// Exactly one variant is produced per invocation; the value is returned
/// immediately and never retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnalysisOutcome {
    /// Input survived validation and sanitization
    Accepted {
        /// Fixed confirmation message
        message: String,
        /// Number of keys in the sanitized record
        processed_fields: usize,
    },
    /// Input was rejected; expected, not exceptional
    Rejected {
        /// Why the input was rejected
        reason: RejectReason,
    },
}

impl AnalysisOutcome {
    fn rejected(reason: RejectReason) -> Self {
        Self::Rejected { reason }
    }

    /// Whether the input was accepted
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Rejection reason, if any
    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            Self::Rejected { reason } => Some(*reason),
            Self::Accepted { .. } => None,
        }
    }
}

/// Classify an arbitrary JSON value with the default sanitizer
pub fn classify(input: &Value) -> AnalysisOutcome {
    classify_with(&RecordSanitizer::new(), input)
}

/// Classify a possibly-absent value
///
/// `None` takes the same rejection path as an explicit null.
pub fn classify_opt(input: Option<&Value>) -> AnalysisOutcome {
    match input {
        None => AnalysisOutcome::rejected(RejectReason::NullInput),
        Some(value) => classify(value),
    }
}

/// Classify with a caller-supplied sanitizer
pub fn classify_with(sanitizer: &RecordSanitizer, input: &Value) -> AnalysisOutcome {
    let map = match input {
        Value::Null => return AnalysisOutcome::rejected(RejectReason::NullInput),
        Value::Object(map) => map,
        _ => return AnalysisOutcome::rejected(RejectReason::NotAnObject),
    };

    if map.is_empty() {
        return AnalysisOutcome::rejected(RejectReason::EmptyObject);
    }

    let cleaned = sanitizer.sanitize(map);

    // Sanitization may have stripped everything; re-check before accepting.
    if cleaned.is_empty() {
        return AnalysisOutcome::rejected(RejectReason::InvalidStructure);
    }

    audit::log_analysis_attempt(&cleaned);

    AnalysisOutcome::Accepted {
        message: "User analysis completed successfully".to_string(),
        processed_fields: cleaned.len(),
    }
}
