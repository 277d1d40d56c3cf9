//! 포트폴리오 평가 스냅샷.
//!
//! 평가 한 번의 결과를 담는 값 객체입니다. 생성 후 수정되지 않으며,
//! 가격 이력이나 원장이 바뀌면 처음부터 다시 계산합니다.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Price;

/// 포트폴리오 평가 결과.
///
/// 모든 금액은 원화, 수익률은 % 단위입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    /// 평가 기준일
    pub as_of: NaiveDate,
    /// 보유 현금
    pub initial_cash: Decimal,
    /// 총 매입 금액 (Σ 매수일 가격 × 수량)
    pub buy_total: Decimal,
    /// 총 매도 금액 (Σ 매도일 가격 × 수량). 표시에는 사용되지 않음.
    pub sell_total: Decimal,
    /// 총 매수 수량
    pub total_buy_qty: u64,
    /// 총 매도 수량
    pub total_sell_qty: u64,
    /// 순 보유 수량 (매수 − 매도). 과매도 시 음수.
    pub net_quantity: i64,
    /// 평균 매입가. 매수 수량이 0이면 0.
    pub avg_buy_price: Price,
    /// 평가에 사용된 현재가 (기준일 가격, 없으면 최근 가격)
    pub current_price: Price,
    /// 현재 평가액 (현재가 × 순 보유 수량)
    pub current_value: Decimal,
    /// 실현 손익
    pub realized_profit: Decimal,
    /// 총 평가 (현재 평가액 + 실현 손익)
    pub total_eval: Decimal,
    /// 현재 수익률 (%)
    pub profit_rate_pct: Decimal,
    /// 추정 총자산 (보유 현금 + 총 평가)
    pub total_asset: Decimal,
}
