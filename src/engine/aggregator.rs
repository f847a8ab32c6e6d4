// Aggregator - トークン数の集計
// 呼び出し元のタスク上で同期的にキューを読み切る

use super::stage::recv_or_abort;
use crate::core::TokenCount;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// 合計値（アトミックに加算される唯一の共有状態）
#[derive(Debug, Default)]
pub struct RunningTotal(AtomicU64);

impl RunningTotal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, count: TokenCount) {
        self.0.fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// キューが閉じるまでカウントを加算し、合計を返す
///
/// 中断シグナルが立った場合はその時点で抜ける（戻り値は途中経過なので使わないこと）。
pub async fn aggregate(mut counts: mpsc::Receiver<TokenCount>, abort: &CancellationToken) -> u64 {
    let total = RunningTotal::new();

    while let Some(count) = recv_or_abort(&mut counts, abort).await {
        total.add(count);
    }

    total.get()
}
