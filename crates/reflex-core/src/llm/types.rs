//! LLM 核心类型定义
//! Core LLM type definitions
//!
//! 定义与 LLM 交互所需的所有类型
//! Defines all types required for interacting with LLMs

use serde::{Deserialize, Serialize};

// ============================================================================
// 消息类型
// Message Types
// ============================================================================

/// 消息角色
/// Message Role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// 系统消息（设置 LLM 行为）
    /// System message (configures LLM behavior)
    System,
    /// 用户消息
    /// User message
    #[default]
    User,
    /// 助手（LLM）响应
    /// Assistant (LLM) response
    Assistant,
}

/// 聊天消息
/// Chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// 消息角色
    /// Message role
    pub role: Role,
    /// 消息内容
    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// 创建系统消息
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// 创建用户消息
    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// 创建助手消息
    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

// ============================================================================
// 请求 / 响应
// Request / Response
// ============================================================================

/// Chat Completion 请求
/// Chat Completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    /// 模型名称
    /// Model name
    pub model: String,
    /// 消息列表
    /// Message list
    pub messages: Vec<ChatMessage>,
    /// 温度
    /// Temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// 最大 token 数
    /// Max tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ChatCompletionRequest {
    /// 创建新请求
    /// Create a new request
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            temperature: None,
            max_tokens: None,
        }
    }

    /// 添加系统消息
    /// Add a system message
    pub fn system(mut self, content: impl Into<String>) -> Self {
        self.messages.push(ChatMessage::system(content));
        self
    }

    /// 添加用户消息
    /// Add a user message
    pub fn user(mut self, content: impl Into<String>) -> Self {
        self.messages.push(ChatMessage::user(content));
        self
    }

    /// 设置温度
    /// Set temperature
    pub fn temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    /// 设置最大 token 数
    /// Set maximum tokens
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.max_tokens = Some(tokens);
        self
    }
}

/// Chat Completion 响应
/// Chat Completion response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    /// 响应 ID
    /// Response ID
    #[serde(default)]
    pub id: String,
    /// 模型名称
    /// Model name
    #[serde(default)]
    pub model: String,
    /// 选择列表
    /// List of choices
    pub choices: Vec<Choice>,
    /// 使用统计
    /// Usage statistics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

impl ChatCompletionResponse {
    /// 获取第一个选择的消息内容
    /// Get the message content of the first choice
    pub fn content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }

    /// 获取完成原因
    /// Get the finish reason
    pub fn finish_reason(&self) -> Option<&FinishReason> {
        self.choices.first()?.finish_reason.as_ref()
    }
}

/// 选择
/// Choice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    /// 选择索引
    /// Choice index
    #[serde(default)]
    pub index: u32,
    /// 消息
    /// Message
    pub message: ChatMessage,
    /// 完成原因
    /// Finish reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<FinishReason>,
}

/// 完成原因
/// Finish reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// 正常完成
    /// Completed normally
    Stop,
    /// 达到长度限制
    /// Length limit reached
    Length,
    /// 内容过滤
    /// Content filtered
    ContentFilter,
    /// 其他
    /// Other
    #[serde(other)]
    Other,
}

/// Token 使用统计
/// Token usage statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    /// 提示 token 数
    /// Prompt tokens
    pub prompt_tokens: u32,
    /// 完成 token 数
    /// Completion tokens
    pub completion_tokens: u32,
    /// 总 token 数
    /// Total tokens
    pub total_tokens: u32,
}

// ============================================================================
// 错误类型
// Error Types
// ============================================================================

/// LLM 错误
/// LLM error
#[derive(Debug, Clone, thiserror::Error)]
pub enum LLMError {
    /// API 错误
    /// API error
    #[error("API error: {message} (code: {code:?})")]
    ApiError {
        code: Option<String>,
        message: String,
    },
    /// 认证错误
    /// Authentication error
    #[error("Authentication failed: {0}")]
    AuthError(String),
    /// 网络错误
    /// Network error
    #[error("Network error: {0}")]
    NetworkError(String),
    /// 超时
    /// Request timeout
    #[error("Request timeout: {0}")]
    Timeout(String),
    /// 序列化错误
    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// 配置错误
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// 其他错误
    /// Other error
    #[error("LLM error: {0}")]
    Other(String),
}

/// LLM 结果类型
/// LLM result type
pub type LLMResult<T> = Result<T, LLMError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = ChatCompletionRequest::new("grok-beta")
            .system("You are a reviewer.")
            .user("Review this.")
            .temperature(0.2)
            .max_tokens(512);

        assert_eq!(request.model, "grok-beta");
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        assert_eq!(request.messages[1].role, Role::User);
        assert_eq!(request.temperature, Some(0.2));
        assert_eq!(request.max_tokens, Some(512));
    }

    #[test]
    fn test_message_roles_serialize_lowercase() {
        let json = serde_json::to_value(ChatMessage::system("s")).unwrap();
        assert_eq!(json["role"], "system");
        let json = serde_json::to_value(ChatMessage::user("u")).unwrap();
        assert_eq!(json["role"], "user");
    }

    #[test]
    fn test_response_content_extraction() {
        let raw = serde_json::json!({
            "id": "chatcmpl-1",
            "model": "grok-beta",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "Looks fine." },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 10, "completion_tokens": 3, "total_tokens": 13 }
        });

        let response: ChatCompletionResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(response.content(), Some("Looks fine."));
        assert_eq!(response.finish_reason(), Some(&FinishReason::Stop));
    }

    #[test]
    fn test_unknown_finish_reason_tolerated() {
        let raw = serde_json::json!({
            "choices": [{
                "message": { "role": "assistant", "content": "hi" },
                "finish_reason": "model_specific_reason"
            }]
        });

        let response: ChatCompletionResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(response.finish_reason(), Some(&FinishReason::Other));
    }
}
