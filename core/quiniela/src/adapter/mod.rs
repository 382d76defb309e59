//! Outbound ポートの標準実装（ファイルベース）

pub mod config;
pub mod file_counter_store;
pub mod json_agent_directory;
pub mod jsonl_ticket_store;
pub mod logging_ticket_store;
pub mod std_sequence_generator;

pub use config::{load_terminal_config, TerminalConfig};
pub use file_counter_store::FileCounterStore;
pub use json_agent_directory::JsonAgentDirectory;
pub use jsonl_ticket_store::JsonlTicketStore;
pub use logging_ticket_store::LoggingTicketStore;
pub use std_sequence_generator::StdSequenceGenerator;
