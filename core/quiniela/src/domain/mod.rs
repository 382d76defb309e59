//! ドメイン型（Newtype、enum、整形ルール）

pub mod agent;
pub mod bet_line;
pub mod command;
pub mod draw;
pub mod print_document;
pub mod receipt;
pub mod region;
pub mod sequence;
pub mod ticket_record;

pub use agent::Agent;
pub use bet_line::{compute_total, format_money, parse_amount, valid_lines, BetLine};
pub use draw::{DrawCode, DrawSlot};
pub use print_document::render_print_html;
pub use receipt::{format_receipt, Receipt, ReceiptInput, RECEIPT_WIDTH};
pub use region::{Region, RegionCode, RegionSelection};
pub use sequence::{Sequence, COUNTER_KEY, INITIAL_COUNTER, MAX_COUNTER};
pub use ticket_record::TicketRecord;
