// テスト用のディレクトリ・入力データ
use std::fs;
use std::path::Path;
use word_pipeline::{DefaultPipelineConfig, MemoryFileSource};

/// `words_per_line` 語の行を `lines` 行並べた内容
pub fn file_content(lines: usize, words_per_line: usize) -> String {
    let line = vec!["word"; words_per_line].join(" ");
    let mut content = String::with_capacity(lines * (line.len() + 1));
    for _ in 0..lines {
        content.push_str(&line);
        content.push('\n');
    }
    content
}

/// ディスク上にテストファイル群を作る
pub fn write_files(dir: &Path, files: &[(&str, &str)]) {
    for (name, content) in files {
        fs::write(dir.join(name), content).unwrap();
    }
}

/// `order` の順に登録したメモリ上のディレクトリ
pub fn memory_source(dir: &str, files: &[(&str, String)], order: &[usize]) -> MemoryFileSource {
    order.iter().fold(MemoryFileSource::new().with_directory(dir), |source, &i| {
        let (name, content) = &files[i];
        source.with_file(Path::new(dir).join(name), content.clone())
    })
}

/// 全キューを容量1にした設定（背圧が常にかかる）
pub fn tight_config(workers: usize) -> DefaultPipelineConfig {
    DefaultPipelineConfig::new(1)
        .with_reader_workers(workers)
        .with_tokenizer_workers(workers)
        .with_path_buffer(1)
        .with_file_buffer(1)
        .with_line_buffer(1)
        .with_count_buffer(1)
}
