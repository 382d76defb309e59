//! ジュガダ（1 行の賭け: 番号・位置・金額）と金額計算

use common::error::Error;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use std::sync::OnceLock;

/// 先頭の数値部分（符号・整数部・小数部）。指数表記は扱わない。
const AMOUNT_PREFIX: &str = r"^[+-]?(?:\d+(?:\.\d+)?|\.\d+)";

/// フォームの 1 行。入力は文字列のまま保持し、金額は必要時に解釈する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BetLine {
    pub number: String,
    pub position: String,
    pub amount: String,
}

impl BetLine {
    pub fn new(
        number: impl Into<String>,
        position: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            position: position.into(),
            amount: amount.into(),
        }
    }

    /// 3 項目すべてが空でなければ有効
    pub fn is_valid(&self) -> bool {
        !self.number.trim().is_empty()
            && !self.position.trim().is_empty()
            && !self.amount.trim().is_empty()
    }

    /// 金額。表現できない大きさなら Validation エラー（[`parse_amount`]）
    pub fn amount_value(&self) -> Result<Decimal, Error> {
        parse_amount(&self.amount)
    }
}

/// 有効な行だけを入力順で返す
pub fn valid_lines(lines: &[BetLine]) -> Vec<BetLine> {
    lines.iter().filter(|l| l.is_valid()).cloned().collect()
}

/// 金額文字列を解釈する。
///
/// 先頭の数値部分だけを読む（"10.5abc" は 10.5）。数値が読めない・負の値は 0。
/// 数値として読めても Decimal に収まらない桁数（整数部 29 桁超など）は 0 に丸めず
/// Validation エラーにする。
pub fn parse_amount(s: &str) -> Result<Decimal, Error> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    let Some(re) = PATTERN.get_or_init(|| Regex::new(AMOUNT_PREFIX).ok()) else {
        return Ok(Decimal::ZERO);
    };
    let Some(m) = re.find(s.trim_start()) else {
        return Ok(Decimal::ZERO);
    };
    let matched = m.as_str();
    if matched.starts_with('-') {
        return Ok(Decimal::ZERO);
    }
    let digits = matched.trim_start_matches('+');
    let normalized = if digits.starts_with('.') {
        format!("0{}", digits)
    } else {
        digits.to_string()
    };
    Decimal::from_str(&normalized)
        .map_err(|_| Error::validation(format!("amount out of range: {}", s.trim())))
}

/// 合計 = Σ(金額) × 選択地域数
///
/// 途中で Decimal の範囲を超えたら Validation エラー（シーケンス発行前に弾く）。
pub fn compute_total(lines: &[BetLine], region_count: usize) -> Result<Decimal, Error> {
    let overflow = || Error::validation("total amount out of range");
    let mut sum = Decimal::ZERO;
    for line in lines {
        sum = sum.checked_add(line.amount_value()?).ok_or_else(overflow)?;
    }
    sum.checked_mul(Decimal::from(region_count))
        .ok_or_else(overflow)
}

/// 小数 2 桁（四捨五入）で表示する
pub fn format_money(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validity_requires_all_fields() {
        assert!(BetLine::new("1234", "5", "10").is_valid());
        assert!(!BetLine::new("", "5", "10").is_valid());
        assert!(!BetLine::new("1234", " ", "10").is_valid());
        assert!(!BetLine::new("1234", "5", "").is_valid());
        assert!(!BetLine::default().is_valid());
    }

    #[test]
    fn test_valid_lines_keeps_order() {
        let lines = vec![
            BetLine::new("1", "1", "5"),
            BetLine::default(),
            BetLine::new("2", "", "5"),
            BetLine::new("3", "2", "7"),
        ];
        let v = valid_lines(&lines);
        assert_eq!(v.len(), 2);
        assert_eq!(v[0].number, "1");
        assert_eq!(v[1].number, "3");
    }

    #[test]
    fn test_parse_amount_lenient() {
        assert_eq!(parse_amount("10.5").unwrap(), dec!(10.5));
        assert_eq!(parse_amount("  7").unwrap(), dec!(7));
        assert_eq!(parse_amount("+3.25").unwrap(), dec!(3.25));
        assert_eq!(parse_amount(".5").unwrap(), dec!(0.5));
        assert_eq!(parse_amount("10.5abc").unwrap(), dec!(10.5));
        assert_eq!(parse_amount("12,50").unwrap(), dec!(12));
        assert_eq!(parse_amount("10.").unwrap(), dec!(10));
    }

    #[test]
    fn test_parse_amount_invalid_is_zero() {
        assert_eq!(parse_amount("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_amount("abc").unwrap(), Decimal::ZERO);
        assert_eq!(parse_amount("-5").unwrap(), Decimal::ZERO);
        assert_eq!(parse_amount("$10").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_compute_total_multiplies_by_regions() {
        let lines = vec![
            BetLine::new("1234", "5", "10.5"),
            BetLine::new("56", "1", "x"),
            BetLine::new("78", "2", "4.25"),
        ];
        assert_eq!(compute_total(&lines, 1).unwrap(), dec!(14.75));
        assert_eq!(compute_total(&lines, 3).unwrap(), dec!(44.25));
        assert_eq!(compute_total(&lines, 0).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_amount_beyond_decimal_range_is_validation_error() {
        let err = parse_amount("792281625142643375935439503350").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(
            BetLine::new("1", "1", "79228162514264337593543950335")
                .amount_value()
                .unwrap(),
            Decimal::MAX
        );
    }

    #[test]
    fn test_total_overflow_is_validation_error() {
        let max = "79228162514264337593543950335";
        assert_eq!(
            compute_total(&[BetLine::new("1", "1", max)], 1).unwrap(),
            Decimal::MAX
        );
        let err = compute_total(&[BetLine::new("1", "1", max)], 2).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        let err = compute_total(
            &[BetLine::new("1", "1", max), BetLine::new("2", "1", "1")],
            1,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_format_money_two_decimals() {
        assert_eq!(format_money(dec!(10.5)), "10.50");
        assert_eq!(format_money(dec!(0)), "0.00");
        assert_eq!(format_money(dec!(3)), "3.00");
        assert_eq!(format_money(dec!(1.005)), "1.01");
        assert_eq!(format_money(dec!(2.344)), "2.34");
    }
}
