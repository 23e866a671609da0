//! LLM 模块
//! LLM Module
//!
//! 提供 LLM (Large Language Model) 集成支持
//! Provides Large Language Model integration support
//!
//! # 快速开始
//! # Quick Start
//!
//! ```rust,ignore
//! use reflex_core::llm::{ReviewAgent, XaiProvider};
//! use std::sync::Arc;
//!
//! let provider = Arc::new(XaiProvider::from_env());
//! let agent = ReviewAgent::new(provider)
//!     .with_preamble("You are a code review assistant.");
//!
//! // 单次问答
//! // Single-shot prompt
//! let answer = agent.prompt("Review this function: ...").await?;
//! ```

pub mod agent;
pub mod provider;
pub mod types;
pub mod xai;

// Re-export main types
pub use agent::ReviewAgent;
pub use provider::LLMProvider;
pub use types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, FinishReason, LLMError,
    LLMResult, Role, Usage,
};
pub use xai::{XaiConfig, XaiProvider};
