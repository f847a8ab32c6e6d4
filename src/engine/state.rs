// パイプライン状態の公開

use crate::core::PipelineState;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

/// パイプライン状態を watch チャンネルで公開する
///
/// 状態は前にしか進まない。後退する遷移は無視される。
#[derive(Debug, Clone)]
pub struct StateTracker {
    tx: Arc<watch::Sender<PipelineState>>,
}

impl StateTracker {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(PipelineState::Idle);
        Self { tx: Arc::new(tx) }
    }

    /// `next` が現在より先の状態なら遷移する
    pub fn advance(&self, next: PipelineState) -> bool {
        let advanced = self.tx.send_if_modified(|current| {
            if next > *current {
                *current = next;
                true
            } else {
                false
            }
        });

        if advanced {
            debug!(state = %next, "pipeline state changed");
        }
        advanced
    }

    /// 次の実行のために `Idle` へ戻す
    pub fn reset(&self) {
        let reset = self.tx.send_if_modified(|current| {
            if *current != PipelineState::Idle {
                *current = PipelineState::Idle;
                true
            } else {
                false
            }
        });

        if reset {
            debug!("pipeline state reset");
        }
    }

    pub fn current(&self) -> PipelineState {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<PipelineState> {
        self.tx.subscribe()
    }
}

impl Default for StateTracker {
    fn default() -> Self {
        Self::new()
    }
}
