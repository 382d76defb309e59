//! 実行時ディレクトリ（XDG / QUINIELA_HOME 解決結果）
//!
//! EnvResolver::resolve_dirs() で取得し、設定・データ・カウンタ・ログのパス計算に使う。

use std::path::PathBuf;

const CONFIG_FILENAME: &str = "config.json";
const LOG_FILENAME: &str = "quiniela.jsonl";

/// 解決済みの config / data / state ディレクトリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dirs {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
    pub state_dir: PathBuf,
}

impl Dirs {
    /// ホーム直下に config / data / state を置くレイアウト
    pub fn under_home(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        Self {
            config_dir: home.join("config"),
            data_dir: home.join("data"),
            state_dir: home.join("state"),
        }
    }

    /// 端末設定ファイル（config/config.json）
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILENAME)
    }

    /// ログ格納ディレクトリ（state/logs）
    pub fn logs_dir(&self) -> PathBuf {
        self.state_dir.join("logs")
    }

    /// 構造化ログ（JSONL）のパス
    pub fn log_file(&self) -> PathBuf {
        self.logs_dir().join(LOG_FILENAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_under_home_layout() {
        let d = Dirs::under_home("/h");
        assert_eq!(d.config_dir, PathBuf::from("/h/config"));
        assert_eq!(d.data_dir, PathBuf::from("/h/data"));
        assert_eq!(d.state_dir, PathBuf::from("/h/state"));
        assert_eq!(d.config_file(), PathBuf::from("/h/config/config.json"));
        assert_eq!(d.log_file(), PathBuf::from("/h/state/logs/quiniela.jsonl"));
    }
}
