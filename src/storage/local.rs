use super::FileSource;
use crate::core::FileHandle;
use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use tokio::io::BufReader;

/// ローカルファイルシステム用の FileSource
#[derive(Debug, Clone, Default)]
pub struct LocalFileSource;

impl LocalFileSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileSource for LocalFileSource {
    async fn list_entries(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut entries = tokio::fs::read_dir(dir).await?;
        let mut paths = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            paths.push(entry.path());
        }

        // 名前順で返す
        paths.sort();
        Ok(paths)
    }

    async fn open(&self, path: &Path) -> io::Result<FileHandle> {
        let file = tokio::fs::File::open(path).await?;

        // サブディレクトリは降りずに「行のないファイル」として扱う
        if file.metadata().await?.is_dir() {
            return Ok(Box::new(tokio::io::empty()));
        }

        Ok(Box::new(BufReader::new(file)))
    }
}
