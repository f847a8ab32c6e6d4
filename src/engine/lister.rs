// Lister - ディレクトリ列挙ステージ

use super::stage::{fail, send_or_abort, supervise, Stage};
use super::state::StateTracker;
use crate::core::{PipelineError, PipelineState};
use crate::storage::FileSource;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

const STAGE: &str = "lister";

/// Lister: ディレクトリを1回だけ読み、エントリのパスを1つずつ配信する
///
/// 列挙に失敗した場合は中断シグナルを立てて終了する。
/// 全エントリを送り終えたら送信側をドロップして下流にキュー終了を伝える。
pub fn spawn_lister<S>(
    source: Arc<S>,
    dir: PathBuf,
    capacity: usize,
    state: StateTracker,
    abort: CancellationToken,
) -> Stage<PathBuf>
where
    S: FileSource + 'static,
{
    let (tx, rx) = mpsc::channel::<PathBuf>(capacity);
    let worker_abort = abort.clone();

    let worker = tokio::spawn(async move {
        let abort = worker_abort;
        state.advance(PipelineState::Listing);

        let entries = match source.list_entries(&dir).await {
            Ok(entries) => entries,
            Err(err) => return fail(STAGE, &abort, PipelineError::list_directory(&dir, err)),
        };
        debug!(dir = %dir.display(), entries = entries.len(), "directory listed");
        state.advance(PipelineState::Streaming);

        let mut emitted = 0u64;
        for path in entries {
            if !send_or_abort(&tx, path, &abort).await {
                break;
            }
            emitted += 1;
        }

        // 送信側をドロップしてキュー終了シグナル
        drop(tx);
        state.advance(PipelineState::Draining);
        Ok(emitted)
    });

    Stage {
        rx,
        handle: supervise(STAGE, vec![worker], abort),
    }
}
