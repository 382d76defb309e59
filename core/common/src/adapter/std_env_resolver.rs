//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::{Dirs, HomeDir};
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "quiniela";
const HOME_ENV: &str = "QUINIELA_HOME";

/// 標準環境変数解決実装
///
/// `home_override` は CLI の `-d/--home-dir`。環境変数より優先する。
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver {
    home_override: Option<PathBuf>,
}

impl StdEnvResolver {
    pub fn new(home_override: Option<PathBuf>) -> Self {
        Self { home_override }
    }
}

impl EnvResolver for StdEnvResolver {
    fn home_dir(&self) -> Option<HomeDir> {
        if let Some(ref h) = self.home_override {
            return Some(HomeDir::new(h.clone()));
        }
        non_empty_var(HOME_ENV).map(HomeDir::new)
    }

    fn resolve_dirs(&self) -> Result<Dirs, Error> {
        if let Some(home) = self.home_dir() {
            return Ok(Dirs::under_home(home.to_path_buf()));
        }
        dirs_from_vars(non_empty_var)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// XDG / HOME から Dirs を組み立てる（環境変数の読み出しは `get` に委譲）
fn dirs_from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Dirs, Error> {
    let home = get("HOME").map(PathBuf::from);
    let base = |xdg: &str, fallback: &[&str]| -> Result<PathBuf, Error> {
        if let Some(p) = get(xdg) {
            return Ok(PathBuf::from(p).join(APP_DIR));
        }
        let mut p = home
            .clone()
            .ok_or_else(|| Error::env(format!("neither {} nor HOME is set", xdg)))?;
        for seg in fallback {
            p.push(seg);
        }
        p.push(APP_DIR);
        Ok(p)
    };
    Ok(Dirs {
        config_dir: base("XDG_CONFIG_HOME", &[".config"])?,
        data_dir: base("XDG_DATA_HOME", &[".local", "share"])?,
        state_dir: base("XDG_STATE_HOME", &[".local", "state"])?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let m: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| m.get(k).cloned()
    }

    #[test]
    fn test_override_wins() {
        let r = StdEnvResolver::new(Some(PathBuf::from("/opt/q")));
        assert_eq!(r.home_dir(), Some(HomeDir::new("/opt/q")));
        let d = r.resolve_dirs().unwrap();
        assert_eq!(d.state_dir, PathBuf::from("/opt/q/state"));
    }

    #[test]
    fn test_home_fallbacks() {
        let d = dirs_from_vars(vars(&[("HOME", "/home/u")])).unwrap();
        assert_eq!(d.config_dir, PathBuf::from("/home/u/.config/quiniela"));
        assert_eq!(d.data_dir, PathBuf::from("/home/u/.local/share/quiniela"));
        assert_eq!(d.state_dir, PathBuf::from("/home/u/.local/state/quiniela"));
    }

    #[test]
    fn test_xdg_takes_precedence() {
        let d = dirs_from_vars(vars(&[
            ("HOME", "/home/u"),
            ("XDG_DATA_HOME", "/data"),
        ]))
        .unwrap();
        assert_eq!(d.data_dir, PathBuf::from("/data/quiniela"));
        assert_eq!(d.config_dir, PathBuf::from("/home/u/.config/quiniela"));
    }

    #[test]
    fn test_no_home_is_env_error() {
        let err = dirs_from_vars(vars(&[])).unwrap_err();
        assert!(matches!(err, Error::Env(_)));
    }
}
