//! 受付者（pasador）

use serde::{Deserialize, Serialize};

/// ジュガダを保存するコレクション名の接頭辞
const COLLECTION_PREFIX: &str = "JUGADAS DE ";

/// エージェントディレクトリの 1 件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    #[serde(rename = "displayId", default)]
    pub display_id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "nombreFantasia", default)]
    pub trade_name: String,
}

impl Agent {
    /// 選択リストの表示（"<displayId> - <屋号 or 氏名>"）
    pub fn label(&self) -> String {
        let shown = if self.trade_name.is_empty() {
            &self.name
        } else {
            &self.trade_name
        };
        format!("{} - {}", self.display_id, shown)
    }

    /// この pasador のジュガダを保存するコレクション名
    pub fn collection_name(&self) -> String {
        format!("{}{}", COLLECTION_PREFIX, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent(trade_name: &str) -> Agent {
        Agent {
            id: "abc".to_string(),
            display_id: "017".to_string(),
            name: "Juan Perez".to_string(),
            trade_name: trade_name.to_string(),
        }
    }

    #[test]
    fn test_label_prefers_trade_name() {
        assert_eq!(agent("La Suerte").label(), "017 - La Suerte");
        assert_eq!(agent("").label(), "017 - Juan Perez");
    }

    #[test]
    fn test_collection_name() {
        assert_eq!(agent("").collection_name(), "JUGADAS DE Juan Perez");
    }

    #[test]
    fn test_deserialize_directory_record() {
        let json = r#"{"id":"x1","displayId":"001","nombre":"Ana"}"#;
        let a: Agent = serde_json::from_str(json).unwrap();
        assert_eq!(a.name, "Ana");
        assert_eq!(a.trade_name, "");
        assert_eq!(a.label(), "001 - Ana");
    }
}
