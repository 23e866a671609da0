//! Reflexive Review core
//!
//! Building blocks for a self-reviewing code-analysis agent: untrusted-input
//! validation and sanitization, plus a thin LLM layer for submitting review
//! prompts to an OpenAI-compatible endpoint.

// Validation module - input classification, sanitization, audit logging
pub mod validation;

// llm module - provider trait, x.ai chat-completions client, review agent
pub mod llm;

pub use validation::{
    AnalysisOutcome, RecordSanitizer, RejectReason, SanitizerConfig, classify, classify_opt,
};

pub use llm::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, LLMError, LLMProvider, LLMResult,
    ReviewAgent, XaiConfig, XaiProvider,
};
