//! pasadores.json（JSON 配列）を読む AgentDirectory 実装

use crate::domain::Agent;
use crate::ports::outbound::AgentDirectory;
use common::error::Error;
use common::ports::outbound::FileSystem;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct JsonAgentDirectory {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl JsonAgentDirectory {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl AsRef<Path>) -> Self {
        Self {
            fs,
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl AgentDirectory for JsonAgentDirectory {
    /// ファイルが無ければ空の一覧
    fn list(&self) -> Result<Vec<Agent>, Error> {
        if !self.fs.exists(&self.path) {
            return Ok(Vec::new());
        }
        let s = self.fs.read_to_string(&self.path)?;
        serde_json::from_str(&s)
            .map_err(|e| Error::json(format!("parse {}: {}", self.path.display(), e)))
    }
}
