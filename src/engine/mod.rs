// エンジン層 - ステージの並列実行とオーケストレーション
// サービス層とストレージ層を組み合わせて高レベルな処理を提供

pub mod aggregator;
pub mod api;
pub mod lister;
pub mod opener;
pub mod pipeline;
pub mod processing_engine;
pub mod reader;
pub mod stage;
pub mod state;
pub mod tokenizer;

// 公開API - 主要エンジンクラス
pub use aggregator::{aggregate, RunningTotal};
pub use api::{count_words, create_default_engine};
pub use lister::spawn_lister;
pub use opener::spawn_opener;
pub use pipeline::WordCountPipeline;
pub use processing_engine::WordCountEngine;
pub use reader::spawn_readers;
pub use stage::Stage;
pub use state::StateTracker;
pub use tokenizer::spawn_tokenizers;
