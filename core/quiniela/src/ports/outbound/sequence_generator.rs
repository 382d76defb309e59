//! シーケンス発行 Outbound ポート
//!
//! usecase は SequenceGenerator を注入し、テストでは固定値を返す実装や壊れたストアを渡せる。

use crate::domain::Sequence;
use common::error::Error;

/// 受付シーケンス番号を発行する抽象
///
/// 読み出し→書き込みは原子的ではない。1 端末 1 操作者を前提とする。
pub trait SequenceGenerator: Send + Sync {
    /// 現在のカウンタ値（未設定なら開始値）
    fn load(&self) -> Result<u64, Error>;

    fn persist(&self, counter: u64) -> Result<(), Error>;

    /// 現在値を 9 桁で返し、カウンタ + 1 を永続化する（永続化してから返す）
    fn next(&self) -> Result<Sequence, Error>;

    /// 次に発行される番号（消費しない）
    fn peek(&self) -> Result<Sequence, Error> {
        Sequence::from_counter(self.load()?)
    }
}
