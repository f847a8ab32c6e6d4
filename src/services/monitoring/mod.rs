// 監視機能 - ログ出力の初期化

pub mod telemetry;

pub use telemetry::{init_logging, log_filter};
