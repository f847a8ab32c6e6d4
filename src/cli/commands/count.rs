use crate::cli::Cli;
use crate::core::CountSummary;
use crate::engine::WordCountEngine;
use crate::storage::local::LocalFileSource;
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{debug, info};

/// 結果行の書式
pub fn format_result(total_words: u64, elapsed: Duration) -> String {
    format!("{} words counted in {}ms", total_words, elapsed.as_millis())
}

/// count コマンドを実行する
///
/// 設定の検証からパイプラインの完了まで。結果の表示は呼び出し側で行う。
pub async fn execute_count(cli: &Cli) -> Result<CountSummary> {
    let config = cli.pipeline_config();
    config.validate().context("Invalid configuration")?;

    info!(directory = %cli.directory.display(), "counting words");

    let engine = WordCountEngine::new(LocalFileSource::new(), config);
    let summary = engine
        .count_directory(&cli.directory)
        .await
        .with_context(|| format!("Failed to count words in {}", cli.directory.display()))?;

    debug!(
        entries = summary.entries,
        files = summary.files,
        lines = summary.lines,
        total_words = summary.total_words,
        "count finished"
    );
    Ok(summary)
}
