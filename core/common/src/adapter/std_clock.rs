//! 標準時刻実装（chrono::Local を委譲）

use crate::ports::outbound::Clock;
use chrono::{DateTime, FixedOffset, Local};

/// システムのローカルタイムゾーンで現在時刻を返す Clock 実装
#[derive(Debug, Clone, Default)]
pub struct StdClock;

impl Clock for StdClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}
