//! JSON オブジェクト 1 ファイルにキー・値を保存する CounterStore 実装
//!
//! 書き込みは一時ファイルに書いてから rename する（途中で落ちても旧値か新値のどちらかが残る）。

use crate::ports::outbound::CounterStore;
use common::error::Error;
use common::ports::outbound::FileSystem;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct FileCounterStore {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl FileCounterStore {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl AsRef<Path>) -> Self {
        Self {
            fs,
            path: path.as_ref().to_path_buf(),
        }
    }

    fn load_all(&self) -> Result<BTreeMap<String, String>, Error> {
        if !self.fs.exists(&self.path) {
            return Ok(BTreeMap::new());
        }
        let s = self.fs.read_to_string(&self.path)?;
        if s.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&s).map_err(|e| {
            Error::persistence(format!("parse {}: {}", self.path.display(), e))
        })
    }
}

impl CounterStore for FileCounterStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.load_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let mut all = self.load_all()?;
        all.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            self.fs.create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        let body = serde_json::to_string_pretty(&all)?;
        self.fs.write(&tmp, &body)?;
        self.fs.rename(&tmp, &self.path)?;
        Ok(())
    }
}
