// Stage - ステージ間の共通配管
// 有界キューへの送受信、中断シグナルの監視、ワーカーの join

use crate::core::{PipelineError, PipelineResult};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

/// ワーカーが返す結果（送出したアイテム数）
pub type WorkerHandle = JoinHandle<PipelineResult<u64>>;

/// ワーカープールで共有する入力キュー
pub type SharedReceiver<T> = Arc<Mutex<mpsc::Receiver<T>>>;

/// 起動済みステージ
///
/// `rx` はステージの出力キュー。最後のワーカーが送信側をドロップした時点で閉じる。
/// `handle` はステージの全ワーカーを join した後に完了する。
pub struct Stage<T> {
    pub rx: mpsc::Receiver<T>,
    pub handle: WorkerHandle,
}

/// 有界キューへ送信する。中断された、または受信側が閉じた場合は false
pub async fn send_or_abort<T>(
    tx: &mpsc::Sender<T>,
    item: T,
    abort: &CancellationToken,
) -> bool {
    tokio::select! {
        biased;
        _ = abort.cancelled() => false,
        sent = tx.send(item) => sent.is_ok(),
    }
}

/// キューから受信する。中断された、またはキューが閉じた場合は None
pub async fn recv_or_abort<T>(
    rx: &mut mpsc::Receiver<T>,
    abort: &CancellationToken,
) -> Option<T> {
    tokio::select! {
        biased;
        _ = abort.cancelled() => None,
        item = rx.recv() => item,
    }
}

/// 共有キューから受信する
///
/// ロックは受信が終わった時点で解放される。
pub async fn recv_shared<T>(rx: &SharedReceiver<T>, abort: &CancellationToken) -> Option<T> {
    let mut guard = tokio::select! {
        biased;
        _ = abort.cancelled() => return None,
        guard = rx.lock() => guard,
    };
    recv_or_abort(&mut guard, abort).await
}

/// エラーを記録して中断シグナルを立てる
pub fn fail(stage: &'static str, abort: &CancellationToken, err: PipelineError) -> PipelineResult<u64> {
    error!(stage, error = %err, "stage failed, aborting pipeline");
    abort.cancel();
    Err(err)
}

/// ステージの全ワーカーを join するタスクを起動する
///
/// 1つでも失敗（パニック含む）すれば中断シグナルを立て、最初のエラーを返す。
pub fn supervise(
    stage: &'static str,
    workers: Vec<WorkerHandle>,
    abort: CancellationToken,
) -> WorkerHandle {
    tokio::spawn(async move {
        let worker_count = workers.len();
        let mut emitted = 0u64;
        let mut first_error = None;

        for handle in workers {
            match handle.await {
                Ok(Ok(count)) => emitted += count,
                Ok(Err(err)) => {
                    abort.cancel();
                    first_error.get_or_insert(err);
                }
                Err(join_error) => {
                    error!(stage, error = %join_error, "worker panicked");
                    abort.cancel();
                    first_error.get_or_insert(PipelineError::task(join_error));
                }
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => {
                debug!(stage, workers = worker_count, emitted, "stage finished");
                Ok(emitted)
            }
        }
    })
}

/// ステージの完了を待ち、結果を取り出す
pub async fn join_stage(handle: WorkerHandle) -> PipelineResult<u64> {
    handle.await.map_err(PipelineError::task)?
}
