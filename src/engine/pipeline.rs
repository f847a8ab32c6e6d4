// Pipeline - 5段のステージを接続するオーケストレーション

use super::aggregator::aggregate;
use super::lister::spawn_lister;
use super::opener::spawn_opener;
use super::reader::spawn_readers;
use super::stage::join_stage;
use super::state::StateTracker;
use super::tokenizer::spawn_tokenizers;
use crate::core::{CountSummary, PipelineConfig, PipelineError, PipelineResult, PipelineState};
use crate::services::config::implementations::validate_config;
use crate::storage::FileSource;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Lister → Opener → Reader → Tokenizer → Aggregator のパイプライン
///
/// 状態は実行のたびに `Idle` から始まる。同じインスタンスで同時に実行しないこと。
pub struct WordCountPipeline<S> {
    source: Arc<S>,
    state: StateTracker,
}

impl<S> WordCountPipeline<S>
where
    S: FileSource + 'static,
{
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            state: StateTracker::new(),
        }
    }

    /// 状態遷移を購読する
    pub fn subscribe(&self) -> watch::Receiver<PipelineState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> PipelineState {
        self.state.current()
    }

    /// ディレクトリ内の全ファイルのトークン数を数える
    ///
    /// 各ステージは起動直後に出力キューを返し、最後の集計だけが呼び出し元で待つ。
    /// どこかのステージが失敗すると `abort` が立ち、全ステージを join してから
    /// 上流側で最初に見つかったエラーを返す。途中の合計は返さない。
    pub async fn execute<C>(
        &self,
        dir: impl AsRef<Path>,
        config: &C,
        abort: CancellationToken,
    ) -> PipelineResult<CountSummary>
    where
        C: PipelineConfig + ?Sized,
    {
        self.state.reset();

        if let Err(err) = validate_config(config) {
            self.state.advance(PipelineState::Done);
            return Err(err);
        }

        let dir = dir.as_ref().to_path_buf();
        let start_time = Instant::now();
        debug!(
            dir = %dir.display(),
            reader_workers = config.reader_workers(),
            tokenizer_workers = config.tokenizer_workers(),
            "pipeline starting"
        );

        let paths = spawn_lister(
            Arc::clone(&self.source),
            dir,
            config.path_buffer_size(),
            self.state.clone(),
            abort.clone(),
        );
        let files = spawn_opener(
            Arc::clone(&self.source),
            paths.rx,
            config.file_buffer_size(),
            abort.clone(),
        );
        let lines = spawn_readers(
            files.rx,
            config.reader_workers(),
            config.line_buffer_size(),
            abort.clone(),
        );
        let counts = spawn_tokenizers(
            lines.rx,
            config.tokenizer_workers(),
            config.count_buffer_size(),
            abort.clone(),
        );

        let total_words = aggregate(counts.rx, &abort).await;

        // 結果を確定する前に全ステージを join する
        let entries = join_stage(paths.handle).await;
        let opened = join_stage(files.handle).await;
        let read = join_stage(lines.handle).await;
        let tokenized = join_stage(counts.handle).await;
        self.state.advance(PipelineState::Done);

        let entries = entries?;
        let files = opened?;
        let lines = read?;
        let tokenized = tokenized?;

        if abort.is_cancelled() {
            warn!("pipeline aborted before completion");
            return Err(PipelineError::Aborted);
        }
        debug_assert_eq!(lines, tokenized);

        let summary = CountSummary {
            total_words,
            entries,
            files,
            lines,
            elapsed: start_time.elapsed(),
        };
        debug!(?summary, "pipeline finished");
        Ok(summary)
    }
}
