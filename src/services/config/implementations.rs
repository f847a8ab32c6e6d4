// 設定管理の具象実装

use crate::core::{PipelineConfig, PipelineError, PipelineResult};
use tokio::sync::Semaphore;

/// 入力ディレクトリの既定値（カレントディレクトリからの相対パス）
pub const DEFAULT_INPUT_DIR: &str = "files";

const DEFAULT_PATH_BUFFER: usize = 10;
const DEFAULT_FILE_BUFFER: usize = 10;
const DEFAULT_LINE_BUFFER: usize = 1024;
const DEFAULT_COUNT_BUFFER: usize = 1024;

/// デフォルト設定実装
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultPipelineConfig {
    reader_workers: usize,
    tokenizer_workers: usize,
    path_buffer: usize,
    file_buffer: usize,
    line_buffer: usize,
    count_buffer: usize,
}

impl DefaultPipelineConfig {
    /// CPU数からワーカー数を決める
    pub fn new(cpu_count: usize) -> Self {
        let workers = cpu_count.max(1) * 2;
        Self {
            reader_workers: workers,
            tokenizer_workers: workers,
            path_buffer: DEFAULT_PATH_BUFFER,
            file_buffer: DEFAULT_FILE_BUFFER,
            line_buffer: DEFAULT_LINE_BUFFER,
            count_buffer: DEFAULT_COUNT_BUFFER,
        }
    }

    pub fn with_reader_workers(mut self, workers: usize) -> Self {
        self.reader_workers = workers;
        self
    }

    pub fn with_tokenizer_workers(mut self, workers: usize) -> Self {
        self.tokenizer_workers = workers;
        self
    }

    pub fn with_path_buffer(mut self, capacity: usize) -> Self {
        self.path_buffer = capacity;
        self
    }

    pub fn with_file_buffer(mut self, capacity: usize) -> Self {
        self.file_buffer = capacity;
        self
    }

    pub fn with_line_buffer(mut self, capacity: usize) -> Self {
        self.line_buffer = capacity;
        self
    }

    pub fn with_count_buffer(mut self, capacity: usize) -> Self {
        self.count_buffer = capacity;
        self
    }

    /// 0 の値と大きすぎるキュー容量を設定エラーとして弾く
    ///
    /// tokio の bounded channel は容量 0 または `Semaphore::MAX_PERMITS` 超で panic する。
    pub fn validate(&self) -> PipelineResult<()> {
        validate_config(self)
    }
}

impl Default for DefaultPipelineConfig {
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}

impl PipelineConfig for DefaultPipelineConfig {
    fn reader_workers(&self) -> usize {
        self.reader_workers
    }

    fn tokenizer_workers(&self) -> usize {
        self.tokenizer_workers
    }

    fn path_buffer_size(&self) -> usize {
        self.path_buffer
    }

    fn file_buffer_size(&self) -> usize {
        self.file_buffer
    }

    fn line_buffer_size(&self) -> usize {
        self.line_buffer
    }

    fn count_buffer_size(&self) -> usize {
        self.count_buffer
    }
}

/// 任意の PipelineConfig 実装を検証する
pub fn validate_config<C: PipelineConfig + ?Sized>(config: &C) -> PipelineResult<()> {
    let workers = [
        ("reader_workers", config.reader_workers()),
        ("tokenizer_workers", config.tokenizer_workers()),
    ];
    let buffers = [
        ("path_buffer", config.path_buffer_size()),
        ("file_buffer", config.file_buffer_size()),
        ("line_buffer", config.line_buffer_size()),
        ("count_buffer", config.count_buffer_size()),
    ];

    for (name, value) in workers.iter().chain(buffers.iter()) {
        if *value == 0 {
            return Err(PipelineError::configuration(format!(
                "{name} は1以上である必要があります"
            )));
        }
    }

    for (name, value) in buffers {
        if value > Semaphore::MAX_PERMITS {
            return Err(PipelineError::configuration(format!(
                "{name} は{}以下である必要があります",
                Semaphore::MAX_PERMITS
            )));
        }
    }

    Ok(())
}
