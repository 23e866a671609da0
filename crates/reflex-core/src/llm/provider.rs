//! LLM Provider Trait
//!
//! 定义 LLM 提供商接口
//! Defines the LLM provider interface
//!
//! 所有 LLM 后端都需要实现此 trait；[`crate::llm::ReviewAgent`] 只通过它与
//! 远端服务交互。
//! All LLM backends implement this trait; [`crate::llm::ReviewAgent`] talks
//! to the remote service exclusively through it.

use super::types::*;
use async_trait::async_trait;

/// LLM 提供商 trait
/// LLM Provider trait
///
/// # 示例
/// # Example
///
/// ```rust,ignore
/// use reflex_core::llm::{LLMProvider, ChatCompletionRequest, LLMResult};
///
/// struct MyLLMProvider {
///     api_key: String,
/// }
///
/// #[async_trait::async_trait]
/// impl LLMProvider for MyLLMProvider {
///     fn name(&self) -> &str {
///         "my-llm"
///     }
///
///     async fn chat(&self, request: ChatCompletionRequest) -> LLMResult<ChatCompletionResponse> {
///         // 实现 API 调用
///         // Implement API call
///         todo!()
///     }
/// }
/// ```
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// 获取提供商名称
    /// Get provider name
    fn name(&self) -> &str;

    /// 获取默认模型
    /// Get default model
    fn default_model(&self) -> &str {
        ""
    }

    /// 发送 Chat Completion 请求
    /// Send Chat Completion request
    async fn chat(&self, request: ChatCompletionRequest) -> LLMResult<ChatCompletionResponse>;

    /// 健康检查
    /// Health check
    async fn health_check(&self) -> LLMResult<bool> {
        Ok(true)
    }
}
