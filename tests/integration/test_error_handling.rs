// エラーハンドリングの統合テスト
use crate::fixtures::file_content;
use tempfile::TempDir;
use word_pipeline::{
    count_words, DefaultPipelineConfig, MemoryFileSource, PipelineError, WordCountEngine,
};

#[tokio::test]
async fn test_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("files");

    let error = count_words(&missing).await.unwrap_err();

    assert!(matches!(error, PipelineError::ListDirectory { .. }));
    assert!(error.is_io());
    assert_eq!(error.path(), Some(missing.as_path()));
}

#[tokio::test]
async fn test_unopenable_file_fails_whole_run() {
    let source = MemoryFileSource::new()
        .with_file("files/a.txt", file_content(100, 3))
        .with_unreadable_file("files/locked.txt")
        .with_file("files/z.txt", file_content(100, 3));
    let engine = WordCountEngine::new(source, DefaultPipelineConfig::new(2));

    let error = engine.count_directory("files").await.unwrap_err();

    match error {
        PipelineError::OpenFile { path, .. } => assert!(path.ends_with("locked.txt")),
        other => panic!("unexpected error: {other}"),
    }
    // 中断後にハンドルが残っていないこと
    assert_eq!(engine.source().live_handles(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_read_failure_releases_sibling_handles() {
    let mut source = MemoryFileSource::new();
    for i in 0..10 {
        source = source.with_file(format!("files/{i:02}.txt"), file_content(2000, 4));
    }
    let source = source
        .with_failing_file("files/05_flaky.txt", file_content(10, 2))
        .with_file("files/99.txt", file_content(2000, 4));
    let config = crate::fixtures::tight_config(4);
    let engine = WordCountEngine::new(source, config);

    let error = engine.count_directory("files").await.unwrap_err();

    match &error {
        PipelineError::ReadFile { path, .. } => assert!(path.ends_with("05_flaky.txt")),
        other => panic!("unexpected error: {other}"),
    }
    assert!(error.is_io());
    assert_eq!(engine.source().live_handles(), 0);
}

#[tokio::test]
async fn test_invalid_configuration_is_rejected_before_listing() {
    let source = MemoryFileSource::new().with_file("files/a.txt", "a\n");
    let config = DefaultPipelineConfig::new(2).with_line_buffer(0);
    let engine = WordCountEngine::new(source, config);

    let error = engine.count_directory("files").await.unwrap_err();

    assert!(matches!(error, PipelineError::Configuration { .. }));
    assert_eq!(engine.source().opened_count(), 0);
}

#[tokio::test]
async fn test_failure_does_not_leak_partial_total() {
    let source = MemoryFileSource::new()
        .with_file("files/big.txt", file_content(5000, 4))
        .with_unreadable_file("files/zz.txt");
    let engine = WordCountEngine::new(source, DefaultPipelineConfig::new(4));

    let result = engine.count_directory("files").await;

    assert!(result.is_err());
}
