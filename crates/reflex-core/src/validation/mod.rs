//! Input validation for untrusted analysis requests
//!
//! This module decides whether an arbitrary JSON value is safe to hand to
//! downstream analysis, with the following pieces:
//!
//! - **Classification**: reject null, non-object, and empty inputs with a
//!   specific reason for each shape
//! - **Sanitization**: defensive copy of accepted objects with reserved-key
//!   filtering and string trimming
//! - **Audit logging**: one structured event per accepted input
//!
//! # Example
//!
//! ```rust
//! use reflex_core::validation::{classify, AnalysisOutcome};
//! use serde_json::json;
//!
//! let outcome = classify(&json!({ "name": "John", "email": "john@example.com" }));
//! assert!(matches!(outcome, AnalysisOutcome::Accepted { processed_fields: 2, .. }));
//! ```
//!
//! Rejection is always a value, never an error: callers match on
//! [`AnalysisOutcome`] and treat the `Rejected` variant as an expected
//! result, not an exceptional one.

pub mod analyzer;
pub mod audit;
pub mod sanitizer;

// Re-export main types
pub use analyzer::{AnalysisOutcome, RejectReason, classify, classify_opt, classify_with};

pub use sanitizer::{RecordSanitizer, SanitizerConfig};
