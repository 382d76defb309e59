//! pasador ディレクトリ Outbound ポート（読み取り専用）

use crate::domain::Agent;
use common::error::Error;

/// pasador 一覧の取得
pub trait AgentDirectory: Send + Sync {
    fn list(&self) -> Result<Vec<Agent>, Error>;

    /// id で 1 件探す。見つからなければ None
    fn find(&self, id: &str) -> Result<Option<Agent>, Error> {
        Ok(self.list()?.into_iter().find(|a| a.id == id))
    }
}
