// Opener - ファイルオープンステージ

use super::stage::{fail, recv_or_abort, send_or_abort, supervise, Stage};
use crate::core::{OpenedFile, PipelineError};
use crate::storage::FileSource;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::trace;

const STAGE: &str = "opener";

/// Opener: パスを受け取って順にオープンし、ハンドルを Reader へ渡す
///
/// ハンドルの所有権はキューを通じて Reader のワーカーへ移る。
/// オープンに失敗した時点で中断シグナルを立てる（スキップはしない）。
pub fn spawn_opener<S>(
    source: Arc<S>,
    mut paths: mpsc::Receiver<PathBuf>,
    capacity: usize,
    abort: CancellationToken,
) -> Stage<OpenedFile>
where
    S: FileSource + 'static,
{
    let (tx, rx) = mpsc::channel::<OpenedFile>(capacity);
    let worker_abort = abort.clone();

    let worker = tokio::spawn(async move {
        let abort = worker_abort;
        let mut emitted = 0u64;

        while let Some(path) = recv_or_abort(&mut paths, &abort).await {
            let handle = match source.open(&path).await {
                Ok(handle) => handle,
                Err(err) => return fail(STAGE, &abort, PipelineError::open_file(&path, err)),
            };
            trace!(path = %path.display(), "file opened");

            // 中断時は送信待ちの OpenedFile ごとドロップされ、ハンドルも閉じる
            if !send_or_abort(&tx, OpenedFile::new(path, handle), &abort).await {
                break;
            }
            emitted += 1;
        }

        Ok(emitted)
    });

    Stage {
        rx,
        handle: supervise(STAGE, vec![worker], abort),
    }
}
