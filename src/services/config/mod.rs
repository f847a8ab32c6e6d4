// 設定管理の具象実装

pub mod implementations;

pub use implementations::{DefaultPipelineConfig, DEFAULT_INPUT_DIR};
