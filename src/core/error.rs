// Custom error types for the word counting pipeline
// パイプライン専用のカスタムエラー型定義

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// パイプライン固有のエラー型
///
/// I/O 系のバリアント（ディレクトリ列挙・オープン・読み込み）はすべて致命的で、
/// 発生したステージが中断シグナルを立ててから返す。
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("ディレクトリ読み込みエラー: {} - {source}", path.display())]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("ファイルオープンエラー: {} - {source}", path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("ファイル読み込みエラー: {} - {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("設定エラー: {message}")]
    Configuration { message: String },

    #[error("タスクエラー: {source}")]
    Task {
        #[source]
        source: tokio::task::JoinError,
    },

    #[error("パイプラインが中断されました")]
    Aborted,
}

impl PipelineError {
    /// ディレクトリ列挙エラーの作成
    pub fn list_directory(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::ListDirectory {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// ファイルオープンエラーの作成
    pub fn open_file(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::OpenFile {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// ファイル読み込みエラーの作成
    pub fn read_file(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::ReadFile {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// タスクエラーの作成
    pub fn task(source: tokio::task::JoinError) -> Self {
        Self::Task { source }
    }

    /// ファイルシステム起因のエラーかどうか
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Self::ListDirectory { .. } | Self::OpenFile { .. } | Self::ReadFile { .. }
        )
    }

    /// エラーに関係するパス（あれば）
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::ListDirectory { path, .. }
            | Self::OpenFile { path, .. }
            | Self::ReadFile { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// パイプライン処理の結果型
pub type PipelineResult<T> = Result<T, PipelineError>;
