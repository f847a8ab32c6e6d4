// tracing-subscriber によるログ初期化
//
// 標準出力は結果行専用なので、ログはすべて標準エラーへ出す。

use tracing_subscriber::EnvFilter;

/// 既定のフィルタ文字列
pub fn log_filter(verbose: bool) -> &'static str {
    if verbose {
        "word_pipeline=debug,warn"
    } else {
        "word_pipeline=info,warn"
    }
}

/// グローバルな subscriber を設定する
///
/// `RUST_LOG` が設定されていればそちらを優先する。二重初期化はエラーにせず無視する。
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}
