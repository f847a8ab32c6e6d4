use crate::core::FileHandle;
use async_trait::async_trait;
use mockall::automock;
use std::io;
use std::path::{Path, PathBuf};

pub mod local;
pub mod memory;

/// ファイルシステムへのアクセスを抽象化するトレイト
///
/// パイプラインが使うのは「ディレクトリの列挙」と「逐次読み込み用のオープン」の2つだけ。
#[automock]
#[async_trait]
pub trait FileSource: Send + Sync {
    /// ディレクトリ直下のエントリを列挙する（再帰しない）
    ///
    /// 返すパスは `dir.join(entry_name)` の形。
    async fn list_entries(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;

    /// ファイルを逐次読み込み用にオープンする
    async fn open(&self, path: &Path) -> io::Result<FileHandle>;
}

// FileSource for Box<dyn FileSource>
#[async_trait]
impl FileSource for Box<dyn FileSource> {
    async fn list_entries(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        self.as_ref().list_entries(dir).await
    }

    async fn open(&self, path: &Path) -> io::Result<FileHandle> {
        self.as_ref().open(path).await
    }
}
