//! 평가 결과 요약 텍스트.
//!
//! 스냅샷의 주요 수치를 원화/수익률 형식으로 포맷한 여러 줄
//! 문자열을 만듭니다.

use holdings_core::{PortfolioSnapshot, WonExt};

/// 요약 텍스트를 생성합니다.
///
/// 금액은 천 단위 구분자가 있는 정수 원화, 수익률은 소수점
/// 2자리로 표시됩니다.
pub fn render_summary(snapshot: &PortfolioSnapshot) -> String {
    format!(
        "총 매입 금액: {}\n\
         실현 손익: {}\n\
         현재 평가액: {}\n\
         현재 수익률: {}\n\
         추정 총자산(보유 현금 포함): {}",
        snapshot.buy_total.to_won_string(),
        snapshot.realized_profit.to_won_string(),
        snapshot.current_value.to_won_string(),
        snapshot.profit_rate_pct.to_rate_string(),
        snapshot.total_asset.to_won_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn snapshot() -> PortfolioSnapshot {
        PortfolioSnapshot {
            as_of: NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
            initial_cash: dec!(1_000_000),
            buy_total: dec!(1000),
            sell_total: dec!(600),
            total_buy_qty: 10,
            total_sell_qty: 4,
            net_quantity: 6,
            avg_buy_price: dec!(100),
            current_price: dec!(200),
            current_value: dec!(1200),
            realized_profit: dec!(200),
            total_eval: dec!(1400),
            profit_rate_pct: dec!(40),
            total_asset: dec!(1_001_400),
        }
    }

    #[test]
    fn test_summary_lines() {
        let text = render_summary(&snapshot());

        assert!(text.contains("총 매입 금액: 1,000원"));
        assert!(text.contains("실현 손익: 200원"));
        assert!(text.contains("현재 평가액: 1,200원"));
        assert!(text.contains("현재 수익률: 40.00%"));
        assert!(text.contains("추정 총자산(보유 현금 포함): 1,001,400원"));
    }

    #[test]
    fn test_summary_negative_value() {
        let mut snap = snapshot();
        snap.current_value = dec!(-600);

        let text = render_summary(&snap);
        assert!(text.contains("현재 평가액: -600원"));
    }

    #[test]
    fn test_sell_total_not_rendered() {
        // sell_total은 계산 대상일 뿐 표시되지 않음
        let text = render_summary(&snapshot());
        assert!(!text.contains("총 매도"));
        assert!(!text.contains("600원"));
    }
}
