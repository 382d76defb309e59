//! ジュガダ保存レコード（bet store に 1 件として追記される内容）
//!
//! 明細は選択された provincias を行ごとに複製して持つ。合計は地域数倍だが、
//! レコード上の provincias は 1 組だけ。

use common::error::Error;
use rust_decimal::Decimal;
use serde::Serialize;

use super::bet_line::{format_money, BetLine};
use super::draw::DrawCode;
use super::region::RegionSelection;
use super::sequence::Sequence;

/// レコード種別マーカー
pub const RECORD_TYPE: &str = "NUEVA JUGADA";

/// 明細 1 行分
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketLineRecord {
    pub decomposition_step: u32,
    pub fecha_hora: String,
    pub loteria: String,
    /// 入力されたままの金額文字列
    pub monto: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub monto_total: Decimal,
    pub numero: String,
    pub numeros: Vec<String>,
    pub original_numero: String,
    pub original_posicion: String,
    pub posicion: String,
    pub provincias: Vec<String>,
    pub secuencia: String,
    pub tipo: String,
}

/// 保存レコード本体。fechaHora（保存時刻）はストア側で付与する。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketRecord {
    pub id: String,
    pub jugadas: Vec<TicketLineRecord>,
    pub loteria: String,
    /// 小数 2 桁の文字列
    pub monto: String,
    pub numero: String,
    pub numeros: Vec<String>,
    pub pasador_id: String,
    pub provincias: Vec<String>,
    pub secuencia: String,
    pub tipo: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_monto: Decimal,
}

impl TicketRecord {
    /// 有効な明細からレコードを組み立てる（lines は空でないこと）
    ///
    /// 金額が Decimal に収まらない行があれば Validation エラー。
    pub fn build(
        sequence: &Sequence,
        agent_id: &str,
        draw: &DrawCode,
        regions: &RegionSelection,
        lines: &[BetLine],
        total: Decimal,
        created_at: &str,
    ) -> Result<Self, Error> {
        let provincias = regions.codes();
        let jugadas = lines
            .iter()
            .map(|l| {
                Ok(TicketLineRecord {
                    decomposition_step: 0,
                    fecha_hora: created_at.to_string(),
                    loteria: draw.code().to_string(),
                    monto: l.amount.clone(),
                    monto_total: l.amount_value()?,
                    numero: l.number.clone(),
                    numeros: vec![l.number.clone()],
                    original_numero: l.number.clone(),
                    original_posicion: l.position.clone(),
                    posicion: l.position.clone(),
                    provincias: provincias.clone(),
                    secuencia: sequence.to_string(),
                    tipo: RECORD_TYPE.to_string(),
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;
        Ok(Self {
            id: sequence.to_string(),
            jugadas,
            loteria: draw.code().to_string(),
            monto: format_money(total),
            numero: lines.first().map(|l| l.number.clone()).unwrap_or_default(),
            numeros: lines.iter().map(|l| l.number.clone()).collect(),
            pasador_id: agent_id.to_string(),
            provincias,
            secuencia: sequence.to_string(),
            tipo: RECORD_TYPE.to_string(),
            total_monto: total,
        })
    }
}
