// Infrastructure layer module
// Contains adapters to external services

pub mod openai;

pub use openai::OpenAiClient;
