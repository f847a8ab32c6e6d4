// パイプラインのトレイト定義

use mockall::automock;

/// パイプラインの設定を抽象化するトレイト
///
/// キュー容量はステージごとの上限。ワーカー数は各プールの固定サイズ。
#[automock]
pub trait PipelineConfig: Send + Sync {
    /// Reader ステージのワーカー数
    fn reader_workers(&self) -> usize;

    /// Tokenizer ステージのワーカー数
    fn tokenizer_workers(&self) -> usize;

    /// Lister → Opener 間のキュー容量
    fn path_buffer_size(&self) -> usize;

    /// Opener → Reader 間のキュー容量
    fn file_buffer_size(&self) -> usize;

    /// Reader → Tokenizer 間のキュー容量
    fn line_buffer_size(&self) -> usize;

    /// Tokenizer → Aggregator 間のキュー容量
    fn count_buffer_size(&self) -> usize;
}
