use crate::services::{DefaultPipelineConfig, DEFAULT_INPUT_DIR};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "word_pipeline")]
#[command(about = "Count space-separated words across every file in a directory")]
#[command(version)]
pub struct Cli {
    /// Directory whose entries are counted (not descended into)
    #[arg(default_value = DEFAULT_INPUT_DIR)]
    pub directory: PathBuf,

    /// Number of concurrent file readers
    #[arg(short = 'r', long)]
    pub reader_workers: Option<usize>,

    /// Number of concurrent line tokenizers
    #[arg(short = 't', long)]
    pub tokenizer_workers: Option<usize>,

    /// Capacity of the line queue
    #[arg(long)]
    pub line_buffer: Option<usize>,

    /// Capacity of the token count queue
    #[arg(long)]
    pub count_buffer: Option<usize>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// 指定されたオプションだけデフォルト設定を上書きする
    pub fn pipeline_config(&self) -> DefaultPipelineConfig {
        let mut config = DefaultPipelineConfig::default();

        if let Some(workers) = self.reader_workers {
            config = config.with_reader_workers(workers);
        }
        if let Some(workers) = self.tokenizer_workers {
            config = config.with_tokenizer_workers(workers);
        }
        if let Some(capacity) = self.line_buffer {
            config = config.with_line_buffer(capacity);
        }
        if let Some(capacity) = self.count_buffer {
            config = config.with_count_buffer(capacity);
        }

        config
    }
}
