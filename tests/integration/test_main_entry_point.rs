// main.rsとエントリーポイントのテスト
use crate::fixtures::write_files;
use std::process::Command;
use tempfile::TempDir;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_word_pipeline"))
}

#[test]
fn test_prints_single_result_line() {
    let temp_dir = TempDir::new().unwrap();
    write_files(temp_dir.path(), &[("a.txt", "one two three\n"), ("b.txt", "four\n")]);

    let output = binary().arg(temp_dir.path()).output().expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let line = stdout.strip_suffix('\n').expect("trailing newline");
    assert!(!line.contains('\n'));

    let rest = line.strip_prefix("4 words counted in ").expect("total first");
    let millis = rest.strip_suffix("ms").expect("ms suffix");
    assert!(millis.parse::<u128>().is_ok());
}

#[test]
fn test_defaults_to_files_directory() {
    let temp_dir = TempDir::new().unwrap();
    let files_dir = temp_dir.path().join("files");
    std::fs::create_dir(&files_dir).unwrap();
    write_files(&files_dir, &[("a.txt", "a b\n")]);

    let output = binary()
        .current_dir(temp_dir.path())
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("2 words counted in "));
}

#[test]
fn test_missing_directory_exits_with_failure() {
    let temp_dir = TempDir::new().unwrap();

    let output = binary()
        .arg(temp_dir.path().join("nope"))
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error:"));
}

#[test]
fn test_cli_help() {
    let output = binary().arg("--help").output().expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("--reader-workers"));
    assert!(stdout.contains("--tokenizer-workers"));
}
