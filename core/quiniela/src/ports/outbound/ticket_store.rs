//! ジュガダ保存 Outbound ポート
//!
//! pasador ごとのコレクションに 1 受付 1 レコードで追記する。

use crate::domain::TicketRecord;
use common::error::Error;

/// ジュガダ保存先の抽象
///
/// 書き込み失敗は Persistence エラーで返す。
pub trait TicketStore: Send + Sync {
    fn append(&self, collection: &str, record: &TicketRecord) -> Result<(), Error>;
}
