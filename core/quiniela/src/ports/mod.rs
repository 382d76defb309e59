//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: カウンタ・pasador ディレクトリ・ジュガダ保存先の trait（common の FileSystem / Clock / Log も利用）

pub mod inbound;
pub mod outbound;
