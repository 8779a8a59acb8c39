use tracing::{info, warn};

use crate::prompt::BuiltPrompt;
use crate::provider::{ChatRequest, LlmProvider, Message, ProviderError, Role};

/// Completion token cap per plan.
const MAX_TOKENS: u32 = 1000;
/// Sampling temperature for plan generation.
const TEMPERATURE: f32 = 0.7;

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("provider returned an empty completion")]
    EmptyCompletion,
}

/// Turns a built prompt into plan text with one chat-completion call.
///
/// Holds the injected provider and the model id; sampling parameters are
/// fixed. One call per request, no retry — callers decide what to show
/// on failure.
pub struct PlanGenerator {
    provider: Box<dyn LlmProvider>,
    model: String,
}

impl PlanGenerator {
    pub fn new(provider: Box<dyn LlmProvider>, model: String) -> Self {
        Self { provider, model }
    }

    pub async fn generate(&self, prompt: &BuiltPrompt) -> Result<String, GenerationError> {
        let req = ChatRequest {
            model: self.model.clone(),
            system: prompt.system.clone(),
            messages: vec![Message {
                role: Role::User,
                content: prompt.user.clone(),
            }],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        info!(model = %req.model, provider = %self.provider.name(), "requesting plan generation");

        let resp = self.provider.send(&req).await.map_err(|e| {
            warn!(provider = %self.provider.name(), error = %e, "plan generation call failed");
            e
        })?;

        if resp.content.trim().is_empty() {
            warn!(model = %resp.model, "provider returned an empty completion");
            return Err(GenerationError::EmptyCompletion);
        }

        Ok(resp.content)
    }
}
