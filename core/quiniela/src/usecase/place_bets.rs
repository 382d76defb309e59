//! ジュガダ受付（cargar jugadas）のユースケース
//!
//! 検証 → pasador 解決 → 合計 → シーケンス発行 → チケット整形 → 保存 の順。
//! 検証・解決に失敗した場合はシーケンスを消費しない。

use common::error::Error;
use common::ports::outbound::{Clock, Log, LogLevel, LogRecord};
use rust_decimal::Decimal;
use std::fmt;
use std::sync::Arc;

use crate::domain::{
    compute_total, format_money, format_receipt, valid_lines, Agent, BetLine, DrawCode, Receipt,
    ReceiptInput, RegionSelection, Sequence, TicketRecord,
};
use crate::ports::outbound::{AgentDirectory, SequenceGenerator, TicketStore};

/// フォーム 1 回分の入力
#[derive(Debug, Clone, Default)]
pub struct BetSubmission {
    pub agent_id: String,
    pub draw: Option<DrawCode>,
    pub regions: RegionSelection,
    /// 空行を含んだままの入力行（有効行の抽出はここで行う）
    pub lines: Vec<BetLine>,
}

/// 受付結果
#[derive(Debug, Clone)]
pub struct PlacedTicket {
    pub sequence: Sequence,
    pub total: Decimal,
    pub receipt: Receipt,
    pub collection: String,
}

/// 受付の失敗
///
/// `Unsaved` はシーケンス発行・チケット整形までは済んだが保存できなかった場合。
/// 発行済みのチケットを持つので、呼び出し側は表示してから再試行を促せる。
#[derive(Debug, Clone)]
pub enum PlaceError {
    /// 検証・解決・シーケンス発行の失敗
    Rejected(Error),
    /// 保存の失敗（error は Persistence）
    Unsaved { ticket: PlacedTicket, error: Error },
}

impl PlaceError {
    pub fn error(&self) -> &Error {
        match self {
            PlaceError::Rejected(e) | PlaceError::Unsaved { error: e, .. } => e,
        }
    }

    /// 保存に失敗したが発行済みのチケット
    pub fn unsaved_ticket(&self) -> Option<&PlacedTicket> {
        match self {
            PlaceError::Rejected(_) => None,
            PlaceError::Unsaved { ticket, .. } => Some(ticket),
        }
    }
}

impl From<Error> for PlaceError {
    fn from(e: Error) -> Self {
        PlaceError::Rejected(e)
    }
}

impl From<PlaceError> for Error {
    fn from(e: PlaceError) -> Self {
        match e {
            PlaceError::Rejected(e) | PlaceError::Unsaved { error: e, .. } => e,
        }
    }
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.error(), f)
    }
}

pub struct PlaceBetsUseCase {
    agents: Arc<dyn AgentDirectory>,
    sequence: Arc<dyn SequenceGenerator>,
    store: Arc<dyn TicketStore>,
    clock: Arc<dyn Clock>,
    log: Arc<dyn Log>,
    terminal_id: String,
}

impl PlaceBetsUseCase {
    pub fn new(
        agents: Arc<dyn AgentDirectory>,
        sequence: Arc<dyn SequenceGenerator>,
        store: Arc<dyn TicketStore>,
        clock: Arc<dyn Clock>,
        log: Arc<dyn Log>,
        terminal_id: impl Into<String>,
    ) -> Self {
        Self {
            agents,
            sequence,
            store,
            clock,
            log,
            terminal_id: terminal_id.into(),
        }
    }

    /// 受付けてチケットを発行・保存する。
    ///
    /// 保存に失敗した場合は `PlaceError::Unsaved`（Persistence エラーと発行済みチケット）。
    /// その時点でシーケンスは消費済み。
    pub fn place(&self, submission: &BetSubmission) -> Result<PlacedTicket, PlaceError> {
        let (agent, draw, lines, total) = self.validate(submission)?;

        let sequence = self.sequence.next()?;
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "sequence issued")
                .layer("usecase")
                .kind("sequence")
                .field("secuencia", sequence.as_str()),
        );

        let now = self.clock.now();
        let receipt = format_receipt(&ReceiptInput {
            passer_name: &agent.name,
            draw: Some(draw),
            regions: &submission.regions,
            lines: &lines,
            total,
            sequence: &sequence,
            timestamp: now,
            terminal_id: &self.terminal_id,
        })?;

        let collection = agent.collection_name();
        let record = TicketRecord::build(
            &sequence,
            &agent.id,
            draw,
            &submission.regions,
            &lines,
            total,
            &now.to_rfc3339(),
        )?;
        let ticket = PlacedTicket {
            sequence,
            total,
            receipt,
            collection,
        };
        if let Err(e) = self.store.append(&ticket.collection, &record) {
            let error = match e {
                Error::Persistence(_) => e,
                other => Error::persistence(other.to_string()),
            };
            return Err(PlaceError::Unsaved { ticket, error });
        }

        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "ticket saved")
                .layer("usecase")
                .kind("ticket")
                .field("secuencia", ticket.sequence.as_str())
                .field("pasador_id", agent.id.as_str())
                .field("sorteo", draw.code())
                .field("lines", lines.len())
                .field("total", format_money(total)),
        );

        Ok(ticket)
    }

    /// シーケンス発行前の検証と合計。失敗時は何も消費しない。
    fn validate<'a>(
        &self,
        submission: &'a BetSubmission,
    ) -> Result<(Agent, &'a DrawCode, Vec<BetLine>, Decimal), Error> {
        let Some(draw) = submission.draw.as_ref() else {
            return Err(Error::validation("no sorteo selected"));
        };
        if submission.regions.is_empty() {
            return Err(Error::validation("no loteria selected"));
        }
        if submission.agent_id.trim().is_empty() {
            return Err(Error::validation("no pasador selected"));
        }
        if submission.lines.is_empty() {
            return Err(Error::validation("no bet lines"));
        }

        let agent = self
            .agents
            .find(&submission.agent_id)?
            .ok_or_else(|| Error::lookup(format!("pasador '{}'", submission.agent_id)))?;
        if agent.name.trim().is_empty() {
            return Err(Error::validation(format!(
                "pasador '{}' has no name",
                agent.id
            )));
        }

        let lines = valid_lines(&submission.lines);
        if lines.is_empty() {
            return Err(Error::validation("no valid bet lines to save"));
        }
        let total = compute_total(&lines, submission.regions.len())?;
        Ok((agent, draw, lines, total))
    }
}
