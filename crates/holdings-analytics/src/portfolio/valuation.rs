//! 포트폴리오 평가 계산.
//!
//! (가격 이력, 매매 원장, 보유 현금, 기준일)의 순수 함수로 평가
//! 스냅샷을 만듭니다. 호출 간 상태를 유지하지 않습니다.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

use holdings_core::{
    HoldingsError, HoldingsResult, PortfolioSnapshot, Price, PriceHistory, TradeLedger, TradeLot,
};

/// 기준일의 평가 가격을 결정합니다.
///
/// 기준일이 이력에 있으면 그 날의 중간값을, 없으면 가장 최근
/// 거래일의 중간값을 반환합니다. 이력이 비어 있으면 `None`입니다.
pub fn resolve_current_price(history: &PriceHistory, as_of: NaiveDate) -> Option<Price> {
    history
        .price_on(as_of)
        .or_else(|| history.latest().map(|d| d.median_price))
}

/// 포트폴리오를 평가합니다.
///
/// 수식:
/// - 총 매입 금액 = Σ 매수일 가격 × 수량
/// - 평균 매입가 = 총 매입 금액 / 총 매수 수량 (수량 0이면 0)
/// - 실현 손익 = Σ 매도 수량 × (매도일 가격 − 평균 매입가)
/// - 현재 평가액 = 현재가 × 순 보유 수량
/// - 총 평가 = 현재 평가액 + 실현 손익
/// - 수익률(%) = (총 평가 − 총 매입 금액) / 총 매입 금액 × 100 (매입 0이면 0)
/// - 추정 총자산 = 보유 현금 + 총 평가
///
/// 0 나눗셈은 에러 대신 0 대입으로 처리합니다. 과매도로 순 보유
/// 수량이 음수가 되면 경고만 남기고 음수 평가액을 그대로 반환합니다.
///
/// # Errors
///
/// 원장의 거래일이 가격 이력에 없으면 [`HoldingsError::UnknownDate`].
pub fn evaluate(
    history: &PriceHistory,
    ledger: &TradeLedger,
    initial_cash: Decimal,
    as_of: NaiveDate,
) -> HoldingsResult<PortfolioSnapshot> {
    let buy_total = notional_total(history, ledger.buys())?;
    let sell_total = notional_total(history, ledger.sells())?;

    let total_buy_qty: u64 = ledger.buys().iter().map(|lot| u64::from(lot.quantity)).sum();
    let total_sell_qty: u64 = ledger.sells().iter().map(|lot| u64::from(lot.quantity)).sum();
    let net_quantity = total_buy_qty as i64 - total_sell_qty as i64;

    if net_quantity < 0 {
        warn!(net_quantity, "매도 수량이 매수 수량을 초과함 (과매도)");
    }

    let avg_buy_price = if total_buy_qty > 0 {
        buy_total / Decimal::from(total_buy_qty)
    } else {
        Decimal::ZERO
    };

    let mut realized_profit = Decimal::ZERO;
    for lot in ledger.sells() {
        let price = lot_price(history, lot)?;
        realized_profit += Decimal::from(lot.quantity) * (price - avg_buy_price);
    }

    let current_price = resolve_current_price(history, as_of).unwrap_or(Decimal::ZERO);
    let current_value = current_price * Decimal::from(net_quantity);
    let total_eval = current_value + realized_profit;

    let profit_rate_pct = if buy_total > Decimal::ZERO {
        (total_eval - buy_total) / buy_total * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    Ok(PortfolioSnapshot {
        as_of,
        initial_cash,
        buy_total,
        sell_total,
        total_buy_qty,
        total_sell_qty,
        net_quantity,
        avg_buy_price,
        current_price,
        current_value,
        realized_profit,
        total_eval,
        profit_rate_pct,
        total_asset: initial_cash + total_eval,
    })
}

/// 로트 목록의 명목 금액 합계 (Σ 해당일 가격 × 수량).
fn notional_total(history: &PriceHistory, lots: &[TradeLot]) -> HoldingsResult<Decimal> {
    let mut total = Decimal::ZERO;
    for lot in lots {
        total += lot_price(history, lot)? * Decimal::from(lot.quantity);
    }
    Ok(total)
}

/// 로트 거래일의 가격을 조회합니다.
fn lot_price(history: &PriceHistory, lot: &TradeLot) -> HoldingsResult<Price> {
    history
        .price_on(lot.date)
        .ok_or(HoldingsError::UnknownDate { date: lot.date })
}
