//! AI-assisted analysis: completion provider seam and response adapter

pub mod adapter;
pub mod prompts;
pub mod provider;

pub use adapter::AiAnalyzer;
pub use provider::{CompletionProvider, OpenAiProvider};
