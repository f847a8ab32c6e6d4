// エンドツーエンド統合テスト
use crate::fixtures::{file_content, memory_source, write_files};
use std::fs;
use tempfile::TempDir;
use word_pipeline::{count_words, DefaultPipelineConfig, WordCountEngine};

#[tokio::test]
async fn test_counts_words_across_files() {
    let temp_dir = TempDir::new().unwrap();
    write_files(
        temp_dir.path(),
        &[
            ("a.txt", "hello world\nfoo bar baz\n"),
            ("b.txt", "one\n"),
            ("c.txt", "x y"),
        ],
    );

    let summary = count_words(temp_dir.path()).await.unwrap();

    assert_eq!(summary.total_words, 8);
    assert_eq!(summary.entries, 3);
    assert_eq!(summary.files, 3);
    assert_eq!(summary.lines, 4);
}

#[tokio::test]
async fn test_empty_directory_counts_zero() {
    let temp_dir = TempDir::new().unwrap();

    let summary = count_words(temp_dir.path()).await.unwrap();

    assert_eq!(summary.total_words, 0);
    assert_eq!(summary.entries, 0);
}

#[tokio::test]
async fn test_empty_file_contributes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    write_files(temp_dir.path(), &[("empty.txt", ""), ("one.txt", "single\n")]);

    let summary = count_words(temp_dir.path()).await.unwrap();

    assert_eq!(summary.total_words, 1);
    assert_eq!(summary.lines, 1);
}

#[tokio::test]
async fn test_split_is_strictly_on_single_spaces() {
    let temp_dir = TempDir::new().unwrap();
    // "a  b" → 3, 空行 → 1, " lead" → 2, "tab\tsep" → 1
    write_files(temp_dir.path(), &[("f.txt", "a  b\n\n lead\ntab\tsep\n")]);

    let summary = count_words(temp_dir.path()).await.unwrap();

    assert_eq!(summary.total_words, 7);
    assert_eq!(summary.lines, 4);
}

#[tokio::test]
async fn test_crlf_line_endings_are_stripped() {
    let temp_dir = TempDir::new().unwrap();
    write_files(temp_dir.path(), &[("dos.txt", "a b\r\nc\r\n")]);

    let summary = count_words(temp_dir.path()).await.unwrap();

    assert_eq!(summary.total_words, 3);
    assert_eq!(summary.lines, 2);
}

#[tokio::test]
async fn test_subdirectories_are_not_descended() {
    let temp_dir = TempDir::new().unwrap();
    write_files(temp_dir.path(), &[("top.txt", "a b c\n")]);
    let nested = temp_dir.path().join("nested");
    fs::create_dir(&nested).unwrap();
    fs::write(nested.join("hidden.txt"), "not counted at all\n").unwrap();

    let summary = count_words(temp_dir.path()).await.unwrap();

    assert_eq!(summary.total_words, 3);
    assert_eq!(summary.entries, 2);
}

#[tokio::test]
async fn test_non_utf8_content_is_counted() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("bin.dat"), b"\xff\xfe a\n").unwrap();

    let summary = count_words(temp_dir.path()).await.unwrap();

    assert_eq!(summary.total_words, 2);
}

#[tokio::test]
async fn test_total_is_independent_of_listing_order() {
    let files: Vec<(&str, String)> = vec![
        ("a.txt", file_content(10, 1)),
        ("b.txt", file_content(3, 7)),
        ("c.txt", file_content(0, 0)),
        ("d.txt", file_content(50, 2)),
        ("e.txt", "a  b\n".to_string()),
    ];
    let expected = 10 + 21 + 100 + 3;

    let orders: [&[usize]; 4] = [
        &[0, 1, 2, 3, 4],
        &[4, 3, 2, 1, 0],
        &[2, 0, 4, 1, 3],
        &[3, 4, 0, 2, 1],
    ];

    for order in orders {
        let source = memory_source("files", &files, order);
        let engine = WordCountEngine::new(source, DefaultPipelineConfig::new(4));

        let summary = engine.count_directory("files").await.unwrap();
        assert_eq!(summary.total_words, expected, "order {order:?}");
    }
}
