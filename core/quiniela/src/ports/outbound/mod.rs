//! Outbound ポート: 受付処理が外部コラボレータ（カウンタ保存・pasador ディレクトリ・ジュガダ保存先）を使うための trait

pub mod agent_directory;
pub mod counter_store;
pub mod sequence_generator;
pub mod ticket_store;

pub use agent_directory::AgentDirectory;
pub use counter_store::CounterStore;
pub use sequence_generator::SequenceGenerator;
pub use ticket_store::TicketStore;
