// Reader - 行読み込みステージ
// 固定サイズのワーカープールでファイルを並行に読み、1行ずつ配信する

use super::stage::{fail, recv_shared, send_or_abort, supervise, SharedReceiver, Stage, WorkerHandle};
use crate::core::{Line, OpenedFile, PipelineError, PipelineResult};
use std::sync::Arc;
use tokio::io::AsyncBufReadExt;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::trace;

const STAGE: &str = "reader";

/// 改行とその直前の `\r` を取り除いて文字列にする
///
/// 不正な UTF-8 は置換文字になる（スペースの数は変わらない）。
pub fn decode_line(raw: &[u8]) -> Line {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

/// 1ファイルを最後まで読み、行を送る
///
/// ハンドルはこの関数が所有し、どの経路で抜けてもここでドロップされる。
/// 中断された場合はそれまでに送った行数を返す。
async fn read_file(
    opened: OpenedFile,
    tx: &mpsc::Sender<Line>,
    abort: &CancellationToken,
) -> PipelineResult<u64> {
    let OpenedFile { path, mut handle } = opened;
    let mut buf = Vec::new();
    let mut lines = 0u64;

    loop {
        buf.clear();
        let read = tokio::select! {
            biased;
            _ = abort.cancelled() => return Ok(lines),
            read = handle.read_until(b'\n', &mut buf) => read,
        };

        match read {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => return Err(PipelineError::read_file(&path, err)),
        }

        if !send_or_abort(tx, decode_line(&buf), abort).await {
            return Ok(lines);
        }
        lines += 1;
    }

    trace!(path = %path.display(), lines, "file drained");
    Ok(lines)
}

/// 単一 Reader ワーカー
pub fn spawn_single_reader(
    worker_id: usize,
    files: SharedReceiver<OpenedFile>,
    tx: mpsc::Sender<Line>,
    abort: CancellationToken,
) -> WorkerHandle {
    tokio::spawn(async move {
        let mut emitted = 0u64;

        while let Some(opened) = recv_shared(&files, &abort).await {
            match read_file(opened, &tx, &abort).await {
                Ok(lines) => emitted += lines,
                Err(err) => return fail(STAGE, &abort, err),
            }
        }

        trace!(worker_id, emitted, "reader worker finished");
        Ok(emitted)
    })
}

/// Readers: 並列ワーカープール
///
/// 出力キューは全ワーカーが終了して送信側がすべてドロップされた時点で閉じる。
pub fn spawn_readers(
    files: mpsc::Receiver<OpenedFile>,
    worker_count: usize,
    capacity: usize,
    abort: CancellationToken,
) -> Stage<Line> {
    let (tx, rx) = mpsc::channel::<Line>(capacity);
    let files = Arc::new(tokio::sync::Mutex::new(files));

    let workers = (0..worker_count)
        .map(|worker_id| {
            spawn_single_reader(worker_id, Arc::clone(&files), tx.clone(), abort.clone())
        })
        .collect();

    Stage {
        rx,
        handle: supervise(STAGE, workers, abort),
    }
}
