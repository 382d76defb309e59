//! 時刻取得 Outbound ポート
//!
//! usecase はこの trait 経由で「現在時刻」を取得し、チケットの FECHA/HORA や保存レコードに使う。

use chrono::{DateTime, FixedOffset};

/// 時刻取得の抽象
///
/// 実装は `common::adapter::StdClock` やテスト用の固定時刻など。
pub trait Clock: Send + Sync {
    /// 端末のローカル時刻（オフセット付き）を返す
    fn now(&self) -> DateTime<FixedOffset>;
}
