//! pasador 一覧のユースケース

use common::error::Error;
use std::sync::Arc;

use crate::domain::Agent;
use crate::ports::outbound::AgentDirectory;

/// pasadores コマンドのユースケース
pub struct AgentsUseCase {
    directory: Arc<dyn AgentDirectory>,
}

impl AgentsUseCase {
    pub fn new(directory: Arc<dyn AgentDirectory>) -> Self {
        Self { directory }
    }

    /// 選択リスト用に displayId 順で返す
    pub fn list(&self) -> Result<Vec<Agent>, Error> {
        let mut agents = self.directory.list()?;
        agents.sort_by(|a, b| a.display_id.cmp(&b.display_id));
        Ok(agents)
    }
}
