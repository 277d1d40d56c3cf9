//! 정밀한 금융 계산을 위한 Decimal 유틸리티.
//!
//! 모든 가격과 원화 금액은 `rust_decimal::Decimal`로 다룹니다.
//! 부동소수점 오차 없이 중간값/평균 매입가 계산을 수행하기 위함입니다.

use rust_decimal::Decimal;

/// 금융 정밀도를 위한 가격 타입.
pub type Price = Decimal;

/// 원화 표시용 확장 트레이트.
pub trait WonExt {
    /// 천 단위 구분자가 포함된 원화 문자열로 변환합니다 (소수점 없음).
    ///
    /// 예: `1234567` → `"1,234,567원"`
    fn to_won_string(&self) -> String;

    /// 수익률 문자열로 변환합니다 (소수점 2자리).
    ///
    /// 값이 이미 % 단위라고 가정합니다. 예: `50` → `"50.00%"`
    fn to_rate_string(&self) -> String;
}

impl WonExt for Decimal {
    fn to_won_string(&self) -> String {
        let rounded = self
            .round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
        format!("{}원", group_thousands(&rounded.to_string()))
    }

    fn to_rate_string(&self) -> String {
        let rounded = self
            .round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
        format!("{:.2}%", rounded)
    }
}

/// 정수 문자열에 천 단위 구분자를 삽입합니다.
fn group_thousands(digits: &str) -> String {
    let (sign, body) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut grouped = String::with_capacity(body.len() + body.len() / 3 + 1);
    for (i, ch) in body.chars().enumerate() {
        if i > 0 && (body.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}", sign, grouped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_to_won_string() {
        assert_eq!(dec!(1234567).to_won_string(), "1,234,567원");
        assert_eq!(dec!(1000).to_won_string(), "1,000원");
        assert_eq!(dec!(999).to_won_string(), "999원");
        assert_eq!(dec!(0).to_won_string(), "0원");
    }

    #[test]
    fn test_to_won_string_rounds_to_integer() {
        assert_eq!(dec!(1234.5).to_won_string(), "1,235원");
        assert_eq!(dec!(1234.4).to_won_string(), "1,234원");
    }

    #[test]
    fn test_to_won_string_negative() {
        assert_eq!(dec!(-1234567).to_won_string(), "-1,234,567원");
        assert_eq!(dec!(-100).to_won_string(), "-100원");
    }

    #[test]
    fn test_to_rate_string() {
        assert_eq!(dec!(50).to_rate_string(), "50.00%");
        assert_eq!(dec!(40.125).to_rate_string(), "40.13%");
        assert_eq!(dec!(-3.5).to_rate_string(), "-3.50%");
    }
}
