pub mod cli;
pub mod core;
pub mod engine;
pub mod services;
pub mod storage;

pub use crate::core::{CountSummary, PipelineConfig, PipelineError, PipelineResult, PipelineState};
pub use engine::{count_words, create_default_engine, WordCountEngine, WordCountPipeline};
pub use services::DefaultPipelineConfig;
pub use storage::{local::LocalFileSource, memory::MemoryFileSource, FileSource};
