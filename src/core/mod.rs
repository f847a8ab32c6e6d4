// コアレイヤー - 基盤となるトレイト、型、エラー定義
// 他のレイヤーから参照される基本的な抽象化を提供

pub mod error;
pub mod traits;
pub mod types;

pub use error::{PipelineError, PipelineResult};
pub use traits::PipelineConfig;
pub use types::{CountSummary, FileHandle, Line, OpenedFile, PipelineState, TokenCount};
