use async_trait::async_trait;

use super::errors::AgentResult;

/// Completion service used by agents and the team allocator
///
/// One prompt in, one completion out. Implementations do not retry.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> AgentResult<String>;
}
