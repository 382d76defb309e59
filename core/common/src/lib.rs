//! quiniela 共通ライブラリ
//!
//! CLI と受付ロジックで共有されるエラー型・ディレクトリ解決・Outbound ポートと標準アダプタを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（ディレクトリ等の Newtype）
pub mod domain;

/// Ports & Adapters のポート定義
pub mod ports;

/// 標準アダプタ（std::fs / chrono::Local / std::env / JSONL ログ）
pub mod adapter;
