//! エラーハンドリング
//!
//! ライブラリ・CLI 共通のエラー型。`main` は `exit_code()` で終了コードに落とす。

use thiserror::Error as ThisError;

/// 共通エラー型
///
/// - Validation / Lookup / Persistence: 受付処理（cargar）の業務エラー
/// - それ以外: 引数・I/O・環境などの周辺エラー
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// 引数不正（usage を表示する）
    #[error("{0}")]
    InvalidArgument(String),

    /// 入力検証エラー（シーケンスは消費しない）
    #[error("validation error: {0}")]
    Validation(String),

    /// 参照先が見つからない（例: 選択された pasador がディレクトリに無い）
    #[error("not found: {0}")]
    Lookup(String),

    /// 外部ストアへの書き込み失敗（フォーム入力は保持したまま再試行可能）
    #[error("persistence error: {0}")]
    Persistence(String),

    /// シーケンスが 9 桁に収まらない
    #[error("sequence exhausted: counter {0} does not fit in 9 digits")]
    SequenceExhausted(u64),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(String),

    /// 環境変数・ディレクトリ解決の失敗
    #[error("environment error: {0}")]
    Env(String),

    #[error("system error: {0}")]
    System(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    pub fn lookup(msg: impl Into<String>) -> Self {
        Error::Lookup(msg.into())
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        Error::Persistence(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Error::Json(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Error::Env(msg.into())
    }

    pub fn system(msg: impl Into<String>) -> Self {
        Error::System(msg.into())
    }

    /// usage を併せて表示すべきエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// プロセス終了コード（sysexits.h 準拠）
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgument(_) => 64,
            Error::Validation(_) | Error::Json(_) => 65,
            Error::Lookup(_) => 66,
            Error::SequenceExhausted(_) | Error::System(_) => 70,
            Error::Io(_) | Error::Persistence(_) => 74,
            Error::Env(_) => 78,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e.to_string())
    }
}
