// サービス層 - 機能別のビジネスロジック
// 各サービスは特定の責任を持ち、疎結合で設計されている

pub mod config;
pub mod monitoring;
pub mod processing;

pub use config::{DefaultPipelineConfig, DEFAULT_INPUT_DIR};
pub use monitoring::init_logging;
pub use processing::count_tokens;
