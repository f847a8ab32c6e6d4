// Tokenizer - 行のトークン数を数えるステージ

use super::stage::{recv_shared, send_or_abort, supervise, SharedReceiver, Stage, WorkerHandle};
use crate::core::{Line, TokenCount};
use crate::services::count_tokens;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

const STAGE: &str = "tokenizer";

/// 単一 Tokenizer ワーカー
pub fn spawn_single_tokenizer(
    lines: SharedReceiver<Line>,
    tx: mpsc::Sender<TokenCount>,
    abort: CancellationToken,
) -> WorkerHandle {
    tokio::spawn(async move {
        let mut emitted = 0u64;

        while let Some(line) = recv_shared(&lines, &abort).await {
            if !send_or_abort(&tx, count_tokens(&line), &abort).await {
                break;
            }
            emitted += 1;
        }

        Ok(emitted)
    })
}

/// Tokenizers: 並列ワーカープール
///
/// 1行につきカウントを1つ送る。順序は保証しない。
pub fn spawn_tokenizers(
    lines: mpsc::Receiver<Line>,
    worker_count: usize,
    capacity: usize,
    abort: CancellationToken,
) -> Stage<TokenCount> {
    let (tx, rx) = mpsc::channel::<TokenCount>(capacity);
    let lines = Arc::new(tokio::sync::Mutex::new(lines));

    let workers = (0..worker_count)
        .map(|_| spawn_single_tokenizer(Arc::clone(&lines), tx.clone(), abort.clone()))
        .collect();

    Stage {
        rx,
        handle: supervise(STAGE, workers, abort),
    }
}
