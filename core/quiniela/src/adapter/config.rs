//! 端末設定（config/config.json）の読み込み

use common::error::Error;
use common::ports::outbound::FileSystem;
use serde::Deserialize;
use std::path::Path;

/// 既定の端末 ID
pub const DEFAULT_TERMINAL: &str = "72-0005";

/// 端末設定
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TerminalConfig {
    #[serde(default = "default_terminal")]
    pub terminal: String,
}

fn default_terminal() -> String {
    DEFAULT_TERMINAL.to_string()
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            terminal: default_terminal(),
        }
    }
}

/// 設定ファイルを読む。ファイルが無ければ既定値。
pub fn load_terminal_config(fs: &dyn FileSystem, path: &Path) -> Result<TerminalConfig, Error> {
    if !fs.exists(path) {
        return Ok(TerminalConfig::default());
    }
    let s = fs.read_to_string(path)?;
    serde_json::from_str(&s).map_err(|e| Error::json(format!("parse {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::adapter::StdFileSystem;

    #[test]
    fn test_missing_file_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        let c = load_terminal_config(&StdFileSystem, &dir.path().join("config.json")).unwrap();
        assert_eq!(c.terminal, DEFAULT_TERMINAL);
    }

    #[test]
    fn test_reads_terminal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"terminal": "10-0001"}"#).unwrap();
        assert_eq!(
            load_terminal_config(&StdFileSystem, &path).unwrap().terminal,
            "10-0001"
        );

        std::fs::write(&path, "{}").unwrap();
        assert_eq!(
            load_terminal_config(&StdFileSystem, &path).unwrap().terminal,
            DEFAULT_TERMINAL
        );
    }
}
