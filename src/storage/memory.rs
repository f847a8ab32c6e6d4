use super::FileSource;
use crate::core::FileHandle;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::io::{AsyncBufRead, AsyncRead, ReadBuf};

/// メモリ内の FileSource 実装（テスト・ベンチマーク用）
///
/// 列挙順は登録順。オープン回数と未クローズのハンドル数を数える。
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSource {
    directories: HashSet<PathBuf>,
    listing: Vec<PathBuf>,
    contents: HashMap<PathBuf, Arc<Vec<u8>>>,
    unreadable: HashSet<PathBuf>,
    failing: HashSet<PathBuf>,
    opened: Arc<AtomicUsize>,
    live_handles: Arc<AtomicUsize>,
}

impl MemoryFileSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// 空のディレクトリを登録
    pub fn with_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.directories.insert(dir.into());
        self
    }

    /// ファイルを登録（親ディレクトリも登録される）
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        let path = path.into();
        self.register(&path);
        self.contents.insert(path, Arc::new(content.into()));
        self
    }

    /// 列挙はされるがオープンに失敗するファイルを登録
    pub fn with_unreadable_file(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.register(&path);
        self.unreadable.insert(path);
        self
    }

    /// `content` を読み切った後で読み込みエラーになるファイルを登録
    pub fn with_failing_file(mut self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        let path = path.into();
        self.register(&path);
        self.contents.insert(path.clone(), Arc::new(content.into()));
        self.failing.insert(path);
        self
    }

    fn register(&mut self, path: &Path) {
        if let Some(parent) = path.parent() {
            self.directories.insert(parent.to_path_buf());
        }
        if !self.listing.iter().any(|p| p == path) {
            self.listing.push(path.to_path_buf());
        }
    }

    /// これまでに成功したオープン回数
    pub fn opened_count(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    /// まだドロップされていないハンドル数
    pub fn live_handles(&self) -> usize {
        self.live_handles.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FileSource for MemoryFileSource {
    async fn list_entries(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        if !self.directories.contains(dir) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("directory not found: {}", dir.display()),
            ));
        }

        Ok(self
            .listing
            .iter()
            .filter(|path| path.parent() == Some(dir))
            .cloned()
            .collect())
    }

    async fn open(&self, path: &Path) -> io::Result<FileHandle> {
        if self.unreadable.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied: {}", path.display()),
            ));
        }

        let content = self.contents.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found: {}", path.display()),
            )
        })?;

        self.opened.fetch_add(1, Ordering::SeqCst);
        self.live_handles.fetch_add(1, Ordering::SeqCst);

        Ok(Box::new(TrackedHandle {
            inner: io::Cursor::new(content.as_ref().clone()),
            fail_at_end: self.failing.contains(path),
            live: Arc::clone(&self.live_handles),
        }))
    }
}

/// ドロップ時に未クローズ数を減らすハンドル
struct TrackedHandle {
    inner: io::Cursor<Vec<u8>>,
    fail_at_end: bool,
    live: Arc<AtomicUsize>,
}

impl TrackedHandle {
    fn exhausted_with_failure(&self) -> bool {
        self.fail_at_end && self.inner.position() >= self.inner.get_ref().len() as u64
    }
}

fn read_failure() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "device went away mid-read")
}

impl Drop for TrackedHandle {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

impl AsyncRead for TrackedHandle {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        if self.exhausted_with_failure() {
            return Poll::Ready(Err(read_failure()));
        }
        Pin::new(&mut self.inner).poll_read(cx, buf)
    }
}

impl AsyncBufRead for TrackedHandle {
    fn poll_fill_buf(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<&[u8]>> {
        let this = self.get_mut();
        if this.exhausted_with_failure() {
            return Poll::Ready(Err(read_failure()));
        }
        Pin::new(&mut this.inner).poll_fill_buf(cx)
    }

    fn consume(mut self: Pin<&mut Self>, amt: usize) {
        Pin::new(&mut self.inner).consume(amt)
    }
}
