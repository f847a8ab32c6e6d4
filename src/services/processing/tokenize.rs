// Tokenize - 1行のトークン数を数える

use crate::core::TokenCount;

/// 半角スペース1文字で分割したセグメント数を返す
///
/// 空白の正規化はしない。連続したスペースは空セグメントとして数え、
/// タブなど他の空白文字は区切りとみなさない。空行は1を返す。
pub fn count_tokens(line: &str) -> TokenCount {
    line.split(' ').count()
}
