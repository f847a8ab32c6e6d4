// パイプラインを流れるデータ構造と実行結果の型定義

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::AsyncBufRead;

/// 読み取り専用のファイルハンドル
///
/// 所有者はつねに1つ。ドロップ時にクローズされる。
pub type FileHandle = Box<dyn AsyncBufRead + Send + Unpin>;

/// 1行分のテキスト（出所のファイルは保持しない）
pub type Line = String;

/// 1行に含まれるトークン数
pub type TokenCount = usize;

/// Opener ステージが Reader ステージへ渡すオープン済みファイル
pub struct OpenedFile {
    pub path: PathBuf,
    pub handle: FileHandle,
}

impl OpenedFile {
    pub fn new(path: PathBuf, handle: FileHandle) -> Self {
        Self { path, handle }
    }
}

impl fmt::Debug for OpenedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenedFile")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// パイプライン全体の状態
///
/// `Idle → Listing → Streaming → Draining → Done` の順にのみ進む。
/// 失敗時も `Done` で終わる（独立したエラー状態は持たない）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PipelineState {
    Idle,
    Listing,
    Streaming,
    Draining,
    Done,
}

impl PipelineState {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Listing => "listing",
            Self::Streaming => "streaming",
            Self::Draining => "draining",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 1回の実行結果のサマリー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountSummary {
    /// 全行のトークン数合計
    pub total_words: u64,
    /// 列挙されたディレクトリエントリ数
    pub entries: u64,
    /// オープンされたファイル数
    pub files: u64,
    /// 読み込まれた行数
    pub lines: u64,
    pub elapsed: Duration,
}
