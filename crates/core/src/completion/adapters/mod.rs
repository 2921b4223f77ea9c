//! Completion service adapter implementations.

mod openai_adapter;
pub mod sample_service;

pub use openai_adapter::OpenAiCompletionService;
pub use sample_service::SampleCompletionService;
