//! 環境変数解決 Outbound ポート
//!
//! 設定・データ・状態ディレクトリを環境変数から解決する。
//! usecase / wiring はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::{Dirs, HomeDir};
use crate::error::Error;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用の固定値など。
pub trait EnvResolver: Send + Sync {
    /// ホームディレクトリ（-d 指定 > QUINIELA_HOME）。どちらも無ければ None
    fn home_dir(&self) -> Option<HomeDir>;

    /// config / data / state ディレクトリを解決する
    ///
    /// 優先順位:
    /// 1. home_dir() があればその直下の config / data / state
    /// 2. XDG_CONFIG_HOME / XDG_DATA_HOME / XDG_STATE_HOME 配下の quiniela
    /// 3. $HOME/.config / $HOME/.local/share / $HOME/.local/state 配下の quiniela
    fn resolve_dirs(&self) -> Result<Dirs, Error>;
}
