pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod llm;
pub mod output;
pub mod pipeline;
pub mod prompt;
