//! コレクションごとに JSONL ファイルへ追記する TicketStore 実装
//!
//! 1 レコード = 1 行。fechaHora（保存時刻）はここで付与する。

use crate::domain::TicketRecord;
use crate::ports::outbound::TicketStore;
use common::error::Error;
use common::ports::outbound::{Clock, FileSystem};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 保存時の 1 行（保存時刻 + レコード本体）
#[derive(Serialize)]
struct StoredTicket<'a> {
    #[serde(rename = "fechaHora")]
    fecha_hora: String,
    #[serde(flatten)]
    record: &'a TicketRecord,
}

pub struct JsonlTicketStore {
    fs: Arc<dyn FileSystem>,
    clock: Arc<dyn Clock>,
    dir: PathBuf,
}

impl JsonlTicketStore {
    pub fn new(fs: Arc<dyn FileSystem>, clock: Arc<dyn Clock>, dir: impl AsRef<Path>) -> Self {
        Self {
            fs,
            clock,
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// コレクション名に対応するファイルパス
    pub fn collection_path(&self, collection: &str) -> PathBuf {
        self.dir.join(format!("{}.jsonl", file_stem(collection)))
    }
}

/// パス区切り・制御文字を '_' に置き換えたファイル名
fn file_stem(collection: &str) -> String {
    let stem: String = collection
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    match stem.trim() {
        "" | "." | ".." => "_".to_string(),
        s => s.to_string(),
    }
}

impl TicketStore for JsonlTicketStore {
    fn append(&self, collection: &str, record: &TicketRecord) -> Result<(), Error> {
        let persist = |e: Error| Error::persistence(format!("{}: {}", collection, e));
        self.fs.create_dir_all(&self.dir).map_err(persist)?;
        let line = serde_json::to_string(&StoredTicket {
            fecha_hora: self.clock.now().to_rfc3339(),
            record,
        })?;
        let path = self.collection_path(collection);
        let mut w = self.fs.open_append(&path).map_err(persist)?;
        w.write_all(line.as_bytes())
            .and_then(|_| w.write_all(b"\n"))
            .and_then(|_| w.flush())
            .map_err(|e| Error::persistence(format!("write {}: {}", path.display(), e)))?;
        Ok(())
    }
}
