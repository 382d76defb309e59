//! チケット（受付票）の整形
//!
//! 80mm 幅の感熱プリンタ向け固定幅テキスト。行の順序・パディングは印字結果と 1 バイト単位で一致させる。

use chrono::{DateTime, FixedOffset};
use common::error::Error;
use rust_decimal::Decimal;
use std::fmt;

use super::bet_line::{format_money, valid_lines, BetLine};
use super::draw::DrawCode;
use super::region::RegionSelection;
use super::sequence::Sequence;

/// 区切り線・合計行の幅
pub const RECEIPT_WIDTH: usize = 32;

/// ジュガダ以外の固定行数（見出しまでの 10 行 + 区切り + 合計）
pub const FIXED_LINES: usize = 12;

const TIMESTAMP_FORMAT: &str = "%d/%m/%y %H:%M";

/// 整形の入力
#[derive(Debug, Clone)]
pub struct ReceiptInput<'a> {
    pub passer_name: &'a str,
    pub draw: Option<&'a DrawCode>,
    pub regions: &'a RegionSelection,
    pub lines: &'a [BetLine],
    pub total: Decimal,
    pub sequence: &'a Sequence,
    pub timestamp: DateTime<FixedOffset>,
    pub terminal_id: &'a str,
}

/// 整形済みチケット（不変）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt(String);

impl Receipt {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// チケット本文を整形する。
///
/// 無効な明細行（空の項目を含む行）は印字しない。
/// pasador 名が空・有効なジュガダが無い・地域未選択・sorteo 未選択のときは Validation エラー。
/// 呼び出し側はシーケンス発行前に同じ条件を確認しておくこと。
pub fn format_receipt(input: &ReceiptInput<'_>) -> Result<Receipt, Error> {
    if input.passer_name.trim().is_empty() {
        return Err(Error::validation("pasador name is empty"));
    }
    let Some(draw) = input.draw else {
        return Err(Error::validation("no sorteo selected"));
    };
    if input.regions.is_empty() {
        return Err(Error::validation("no loteria selected"));
    }
    let lines = valid_lines(input.lines);
    if lines.is_empty() {
        return Err(Error::validation("no valid bet lines"));
    }

    let rule = "-".repeat(RECEIPT_WIDTH);
    let mut out =
        String::with_capacity((FIXED_LINES + lines.len()) * (RECEIPT_WIDTH + 1));
    let mut push = |line: &str| {
        out.push_str(line);
        out.push('\n');
    };

    push("TICKET");
    push(&format!(
        "FECHA/HORA {}",
        input.timestamp.format(TIMESTAMP_FORMAT)
    ));
    push(&format!("TERMINAL   {}", input.terminal_id));
    push(&format!("PASADOR    {}", input.passer_name));
    push(&format!("SORTEO     {}", draw.code()));
    push(&rule);
    push(draw.abbreviation());
    push(&format!("SECUENCIA  {}", input.sequence));
    push(&format!("LOTERIAS: {}", input.regions.abbreviations().join(" ")));
    push("NUMERO UBIC   IMPORTE");
    for line in &lines {
        push(&format_bet_line(line)?);
    }
    push(&rule);
    push(&format!(
        "{:>width$}",
        format!("TOTAL: ${}", format_money(input.total)),
        width = RECEIPT_WIDTH
    ));

    Ok(Receipt(out))
}

/// 明細 1 行: 番号(右寄せ 4) + 2 空白 + 位置(右寄せ 2) + 3 空白 + "$" + 金額
fn format_bet_line(line: &BetLine) -> Result<String, Error> {
    Ok(format!(
        "{:>4}  {:>2}   ${}",
        line.number,
        line.position,
        format_money(line.amount_value()?)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bet_line::compute_total;
    use crate::domain::draw::DrawSlot;
    use crate::domain::region::{Region, RegionCode};
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn ts() -> DateTime<FixedOffset> {
        FixedOffset::west_opt(3 * 3600)
            .unwrap()
            .with_ymd_and_hms(2026, 3, 7, 9, 5, 42)
            .unwrap()
    }

    fn regions(rs: &[Region]) -> RegionSelection {
        rs.iter().map(|r| RegionCode::from(*r)).collect()
    }

    #[test]
    fn test_example_ticket_exact() {
        let draw = DrawCode::from(DrawSlot::Primera);
        let regs = regions(&[Region::Nacion]);
        let lines = vec![BetLine::new("1234", "5", "10.5")];
        let total = compute_total(&lines, regs.len()).unwrap();
        let seq = Sequence::from_counter(10_000).unwrap();
        let r = format_receipt(&ReceiptInput {
            passer_name: "Juan",
            draw: Some(&draw),
            regions: &regs,
            lines: &lines,
            total,
            sequence: &seq,
            timestamp: ts(),
            terminal_id: "72-0005",
        })
        .unwrap();

        let expected = "\
TICKET
FECHA/HORA 07/03/26 09:05
TERMINAL   72-0005
PASADOR    Juan
SORTEO     PRIMERA
--------------------------------
PR
SECUENCIA  000010000
LOTERIAS: N
NUMERO UBIC   IMPORTE
1234   5   $10.50
--------------------------------
                   TOTAL: $10.50
";
        assert_eq!(r.as_str(), expected);
        assert_eq!(total, dec!(10.5));
    }

    #[test]
    fn test_line_count_is_fixed_plus_lines() {
        let draw = DrawCode::from(DrawSlot::Nocturna);
        let regs = regions(&[Region::Nacion, Region::Provincia]);
        let lines = vec![
            BetLine::new("1", "1", "1"),
            BetLine::new("22", "2", "2"),
            BetLine::new("333", "3", "3"),
        ];
        let seq = Sequence::from_counter(10_001).unwrap();
        let r = format_receipt(&ReceiptInput {
            passer_name: "Ana",
            draw: Some(&draw),
            regions: &regs,
            lines: &lines,
            total: compute_total(&lines, regs.len()).unwrap(),
            sequence: &seq,
            timestamp: ts(),
            terminal_id: "T",
        })
        .unwrap();
        let rendered: Vec<&str> = r.as_str().lines().collect();
        assert_eq!(rendered.len(), FIXED_LINES + 3);
        assert_eq!(rendered[8], "LOTERIAS: N P");
        assert_eq!(rendered[10], "   1   1   $1.00");
        assert_eq!(rendered[12], " 333   3   $3.00");
        assert_eq!(rendered.last().unwrap().len(), RECEIPT_WIDTH);
        assert!(rendered.last().unwrap().ends_with("TOTAL: $12.00"));
    }

    #[test]
    fn test_unknown_codes_fall_back_to_raw() {
        let draw = DrawCode::parse("SIESTA").unwrap();
        let regs: RegionSelection = ["TUCUMA", "NACION"]
            .iter()
            .filter_map(|c| RegionCode::parse(c))
            .collect();
        let lines = vec![BetLine::new("12345", "10", "abc")];
        let seq = Sequence::from_counter(1).unwrap();
        let r = format_receipt(&ReceiptInput {
            passer_name: "Ana",
            draw: Some(&draw),
            regions: &regs,
            lines: &lines,
            total: Decimal::ZERO,
            sequence: &seq,
            timestamp: ts(),
            terminal_id: "T",
        })
        .unwrap();
        let rendered: Vec<&str> = r.as_str().lines().collect();
        assert_eq!(rendered[4], "SORTEO     SIESTA");
        assert_eq!(rendered[6], "SIESTA");
        assert_eq!(rendered[8], "LOTERIAS: TUCUMA N");
        // 幅を超える番号は切り詰めない
        assert_eq!(rendered[10], "12345  10   $0.00");
    }

    #[test]
    fn test_refuses_incomplete_input() {
        let draw = DrawCode::from(DrawSlot::Matutina);
        let regs = regions(&[Region::Chaco]);
        let empty_regs = RegionSelection::new();
        let lines = vec![BetLine::new("1", "1", "1")];
        let blank = vec![BetLine::default(), BetLine::new("7", "", "2")];
        let seq = Sequence::from_counter(1).unwrap();
        let base = ReceiptInput {
            passer_name: "Ana",
            draw: Some(&draw),
            regions: &regs,
            lines: &lines,
            total: Decimal::ONE,
            sequence: &seq,
            timestamp: ts(),
            terminal_id: "T",
        };
        assert!(format_receipt(&base).is_ok());

        let cases = [
            ReceiptInput { passer_name: "", ..base.clone() },
            ReceiptInput { draw: None, ..base.clone() },
            ReceiptInput { regions: &empty_regs, ..base.clone() },
            ReceiptInput { lines: &[], ..base.clone() },
            ReceiptInput { lines: &blank, ..base.clone() },
        ];
        for c in &cases {
            assert!(matches!(format_receipt(c), Err(Error::Validation(_))));
        }
    }

    #[test]
    fn test_invalid_lines_are_not_printed() {
        let draw = DrawCode::from(DrawSlot::Primera);
        let regs = regions(&[Region::Nacion]);
        let lines = vec![
            BetLine::default(),
            BetLine::new("1234", "5", "10.5"),
            BetLine::new("99", "", "3"),
        ];
        let seq = Sequence::from_counter(10_000).unwrap();
        let r = format_receipt(&ReceiptInput {
            passer_name: "Juan",
            draw: Some(&draw),
            regions: &regs,
            lines: &lines,
            total: compute_total(&valid_lines(&lines), regs.len()).unwrap(),
            sequence: &seq,
            timestamp: ts(),
            terminal_id: "72-0005",
        })
        .unwrap();
        let rendered: Vec<&str> = r.as_str().lines().collect();
        assert_eq!(rendered.len(), FIXED_LINES + 1);
        assert_eq!(rendered[10], "1234   5   $10.50");
    }
}
