//! 受付シーケンス番号（SECUENCIA）
//!
//! カウンタ値を 9 桁のゼロ埋め 10 進文字列にしたもの。9 桁を超える値は表現できない。

use common::error::Error;
use std::fmt;

/// 表示幅（桁数）
pub const SEQUENCE_WIDTH: usize = 9;

/// 永続化された値が無いときの開始値
pub const INITIAL_COUNTER: u64 = 10_000;

/// 9 桁で表せる最大値
pub const MAX_COUNTER: u64 = 999_999_999;

/// 永続カウンタのキー
pub const COUNTER_KEY: &str = "secuenciaCounter";

/// 9 桁ゼロ埋めのシーケンス番号
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sequence(String);

impl Sequence {
    /// カウンタ値から生成する。9 桁を超える場合は SequenceExhausted。
    pub fn from_counter(counter: u64) -> Result<Self, Error> {
        if counter > MAX_COUNTER {
            return Err(Error::SequenceExhausted(counter));
        }
        Ok(Self(format!("{:0width$}", counter, width = SEQUENCE_WIDTH)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for Sequence {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
