//! End-to-end flow tests: input classification feeding the review agent,
//! with mock providers standing in for the remote endpoint.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use reflex_core::llm::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, LLMError, LLMProvider,
    LLMResult, ReviewAgent, Role,
};
use reflex_core::validation::{AnalysisOutcome, RejectReason, classify};

/// Mock provider returning a deterministic response without network calls.
struct MockLLM {
    response: String,
}

impl MockLLM {
    fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

#[async_trait]
impl LLMProvider for MockLLM {
    fn name(&self) -> &str {
        "mock"
    }

    fn default_model(&self) -> &str {
        "mock-model"
    }

    async fn chat(&self, request: ChatCompletionRequest) -> LLMResult<ChatCompletionResponse> {
        assert!(!request.messages.is_empty());
        Ok(ChatCompletionResponse {
            id: "mock-1".to_string(),
            model: request.model,
            choices: vec![Choice {
                index: 0,
                message: ChatMessage::assistant(self.response.clone()),
                finish_reason: None,
            }],
            usage: None,
        })
    }
}

/// Mock provider that always fails with a transport error.
struct FailingLLM;

#[async_trait]
impl LLMProvider for FailingLLM {
    fn name(&self) -> &str {
        "failing"
    }

    async fn chat(&self, _request: ChatCompletionRequest) -> LLMResult<ChatCompletionResponse> {
        Err(LLMError::NetworkError("connection refused".to_string()))
    }
}

/// Mock provider that never answers within a short deadline.
struct SlowLLM;

#[async_trait]
impl LLMProvider for SlowLLM {
    fn name(&self) -> &str {
        "slow"
    }

    async fn chat(&self, request: ChatCompletionRequest) -> LLMResult<ChatCompletionResponse> {
        tokio::time::sleep(Duration::from_millis(200)).await;
        Ok(ChatCompletionResponse {
            id: "slow-1".to_string(),
            model: request.model,
            choices: vec![],
            usage: None,
        })
    }
}

#[tokio::test]
async fn agent_round_trip_with_preamble() {
    let agent = ReviewAgent::new(Arc::new(MockLLM::new("The function lacks validation.")))
        .with_preamble("You are a code review assistant.");

    let answer = agent.prompt("Review this function.").await.unwrap();
    assert_eq!(answer, "The function lacks validation.");
}

#[tokio::test]
async fn agent_preamble_sent_as_system_message() {
    struct CapturingLLM;

    #[async_trait]
    impl LLMProvider for CapturingLLM {
        fn name(&self) -> &str {
            "capturing"
        }

        async fn chat(&self, request: ChatCompletionRequest) -> LLMResult<ChatCompletionResponse> {
            assert_eq!(request.messages.len(), 2);
            assert_eq!(request.messages[0].role, Role::System);
            assert_eq!(request.messages[0].content, "preamble");
            assert_eq!(request.messages[1].role, Role::User);
            Ok(ChatCompletionResponse {
                id: String::new(),
                model: request.model,
                choices: vec![Choice {
                    index: 0,
                    message: ChatMessage::assistant("ok"),
                    finish_reason: None,
                }],
                usage: None,
            })
        }
    }

    let agent = ReviewAgent::new(Arc::new(CapturingLLM)).with_preamble("preamble");
    assert_eq!(agent.prompt("question").await.unwrap(), "ok");
}

#[tokio::test]
async fn transport_failure_surfaces_as_error_value() {
    let agent = ReviewAgent::new(Arc::new(FailingLLM));

    let err = agent.prompt("Review this.").await.unwrap_err();
    assert!(matches!(err, LLMError::NetworkError(_)));

    // Caller-side substitution: the demo catches the error and falls back to
    // a canned analysis so the run always completes.
    let fallback = "mock analysis";
    let output = match agent.prompt("Review this.").await {
        Ok(text) => text,
        Err(_) => fallback.to_string(),
    };
    assert_eq!(output, fallback);
}

#[tokio::test]
async fn deadline_elapsing_yields_timeout() {
    let agent = ReviewAgent::new(Arc::new(SlowLLM));

    let err = agent
        .prompt_with_timeout("Review this.", Duration::from_millis(20))
        .await
        .unwrap_err();
    assert!(matches!(err, LLMError::Timeout(_)));
}

#[tokio::test]
async fn empty_choices_reported_as_missing_content() {
    struct EmptyLLM;

    #[async_trait]
    impl LLMProvider for EmptyLLM {
        fn name(&self) -> &str {
            "empty"
        }

        async fn chat(&self, request: ChatCompletionRequest) -> LLMResult<ChatCompletionResponse> {
            Ok(ChatCompletionResponse {
                id: String::new(),
                model: request.model,
                choices: vec![],
                usage: None,
            })
        }
    }

    let agent = ReviewAgent::new(Arc::new(EmptyLLM));
    let err = agent.prompt("anything").await.unwrap_err();
    assert!(matches!(err, LLMError::Other(_)));
}

#[tokio::test]
async fn classification_gates_the_agent_call() {
    // Only inputs that survive classification reach the agent.
    let inputs = [
        json!(null),
        json!([1, 2]),
        json!({}),
        json!({ "__proto__": "x" }),
        json!({ "name": "John", "email": "john@example.com" }),
    ];

    let agent = ReviewAgent::new(Arc::new(MockLLM::new("reviewed")));
    let mut reviews = Vec::new();

    for input in &inputs {
        if let AnalysisOutcome::Accepted {
            processed_fields, ..
        } = classify(input)
        {
            let text = agent
                .prompt(format!("Review a record with {processed_fields} fields."))
                .await
                .unwrap();
            reviews.push(text);
        }
    }

    assert_eq!(reviews, vec!["reviewed".to_string()]);
}

#[test]
fn rejection_reasons_for_bad_shapes() {
    assert_eq!(
        classify(&json!(null)).reason(),
        Some(RejectReason::NullInput)
    );
    assert_eq!(
        classify(&json!("text")).reason(),
        Some(RejectReason::NotAnObject)
    );
    assert_eq!(
        classify(&json!({})).reason(),
        Some(RejectReason::EmptyObject)
    );
    assert_eq!(
        classify(&json!({ "constructor": "y" })).reason(),
        Some(RejectReason::InvalidStructure)
    );
}
