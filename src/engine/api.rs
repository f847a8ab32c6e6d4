// 高レベル公開API
// WordCountEngine を簡単に使用できるようにするための便利な関数

use super::WordCountEngine;
use crate::core::{CountSummary, PipelineResult};
use crate::services::DefaultPipelineConfig;
use crate::storage::local::LocalFileSource;
use std::path::Path;

/// ローカルファイルシステムとデフォルト設定でエンジンを作成
pub fn create_default_engine() -> WordCountEngine<LocalFileSource, DefaultPipelineConfig> {
    WordCountEngine::new(LocalFileSource::new(), DefaultPipelineConfig::default())
}

/// デフォルト設定でディレクトリの単語数を数える
pub async fn count_words(directory: impl AsRef<Path>) -> PipelineResult<CountSummary> {
    create_default_engine().count_directory(directory).await
}
