// WordCountEngine - 依存性注入による単語数カウントエンジン
// ファイルソースと設定をコンストラクタで受け取り、実行ごとにパイプラインを組み立てる

use super::pipeline::WordCountPipeline;
use crate::core::{CountSummary, PipelineConfig, PipelineResult};
use crate::storage::FileSource;
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// 単語数カウントエンジン
///
/// ファイルソースは全ステージで共有するため Arc で保持する。
pub struct WordCountEngine<S, C> {
    source: Arc<S>,
    config: C,
}

impl<S, C> WordCountEngine<S, C>
where
    S: FileSource + 'static,
    C: PipelineConfig,
{
    pub fn new(source: S, config: C) -> Self {
        Self {
            source: Arc::new(source),
            config,
        }
    }

    /// ディレクトリ内の全ファイルの単語数を数える
    pub async fn count_directory(&self, directory: impl AsRef<Path>) -> PipelineResult<CountSummary> {
        self.count_directory_with_abort(directory, CancellationToken::new())
            .await
    }

    /// 外部から中断できる版
    pub async fn count_directory_with_abort(
        &self,
        directory: impl AsRef<Path>,
        abort: CancellationToken,
    ) -> PipelineResult<CountSummary> {
        WordCountPipeline::new(Arc::clone(&self.source))
            .execute(directory, &self.config, abort)
            .await
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
