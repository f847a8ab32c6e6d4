// 行単位の処理機能
// 1行をトークンに分割して数える

pub mod tokenize;

pub use tokenize::count_tokens;
