//! 永続カウンタ Outbound ポート
//!
//! 名前付きのキー・値（どちらも文字列）を保存する。値は 10 進整数のテキスト。

use common::error::Error;

/// キー・値ストアの抽象
///
/// 実装は `adapter::FileCounterStore` やテスト用のメモリ実装など。
pub trait CounterStore: Send + Sync {
    /// 値を読む。未設定なら None
    fn get(&self, key: &str) -> Result<Option<String>, Error>;

    fn set(&self, key: &str, value: &str) -> Result<(), Error>;
}
