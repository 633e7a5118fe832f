use std::sync::Arc;

use taskforce::agents::{AgentResult, TeamAllocator};
use taskforce::config::Config;
use taskforce::driver::{self, default_roster, DEFAULT_TASKS};
use taskforce::infrastructure::OpenAiClient;

#[tokio::main]
async fn main() -> AgentResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = Config::from_env()?;
    config.prepare_directories()?;

    let llm = OpenAiClient::from_config(&config)?;
    tracing::info!("Using model {}", llm.model());

    let mut allocator = TeamAllocator::new(Arc::new(llm), default_roster());
    let summary = driver::run(&mut allocator, &DEFAULT_TASKS).await?;

    tracing::info!(
        "Run finished: {} of {} tasks staffed, {} agents executed",
        summary.tasks_staffed,
        summary.tasks_requested,
        summary.agents_executed.len()
    );

    Ok(())
}
