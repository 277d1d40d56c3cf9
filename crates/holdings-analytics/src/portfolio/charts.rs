//! 가격 차트 데이터 구조
//!
//! 중간값 가격 선과 매수/매도 마커로 구성된 차트 시리즈를 생성합니다.
//! 축/범례/그리기 자체는 렌더러의 몫이고, 여기서는 데이터만 만듭니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use holdings_core::{Price, PriceHistory, TradeLedger, TradeLot};

/// 가격 선 위의 한 점.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// 거래일
    pub date: NaiveDate,
    /// 그 날의 중간값
    pub price: Price,
}

/// 매수/매도 마커.
///
/// 마커는 해당 거래일의 중간값 위치에 찍힙니다. 매수는 위쪽,
/// 매도는 아래쪽 화살표로 그리는 것이 렌더러의 관례입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeMarker {
    /// 거래일
    pub date: NaiveDate,
    /// 마커 위치 (그 날의 중간값)
    pub price: Price,
    /// 거래 수량
    pub quantity: u32,
}

/// 매매 지점이 표시된 가격 차트 시리즈.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceChart {
    /// 중간값 가격 선 (날짜 오름차순)
    pub line: Vec<PricePoint>,
    /// 매수 마커
    pub buy_markers: Vec<TradeMarker>,
    /// 매도 마커
    pub sell_markers: Vec<TradeMarker>,
}

impl PriceChart {
    /// 가격 이력과 원장에서 차트 시리즈를 생성합니다.
    ///
    /// 가격 선은 이력의 모든 거래일을 포함하고, 마커는 로트마다
    /// 하나씩 그 날의 가격 위치에 생성됩니다.
    pub fn build(history: &PriceHistory, ledger: &TradeLedger) -> Self {
        Self {
            line: history
                .days()
                .iter()
                .map(|day| PricePoint {
                    date: day.date,
                    price: day.median_price,
                })
                .collect(),
            buy_markers: markers_for(history, ledger.buys()),
            sell_markers: markers_for(history, ledger.sells()),
        }
    }
}

/// 로트 목록을 마커로 변환합니다.
///
/// 이력에 없는 날짜의 로트는 마커 없이 건너뜁니다 (원장 기록 시점에
/// 이미 검증되므로 정상 경로에서는 발생하지 않음).
fn markers_for(history: &PriceHistory, lots: &[TradeLot]) -> Vec<TradeMarker> {
    lots.iter()
        .filter_map(|lot| {
            history.price_on(lot.date).map(|price| TradeMarker {
                date: lot.date,
                price,
                quantity: lot.quantity,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdings_core::DailyPrice;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> (PriceHistory, TradeLedger) {
        let history = PriceHistory::from_days(vec![
            DailyPrice {
                date: date(2024, 1, 2),
                median_price: dec!(100),
            },
            DailyPrice {
                date: date(2024, 1, 3),
                median_price: dec!(150),
            },
            DailyPrice {
                date: date(2024, 1, 4),
                median_price: dec!(200),
            },
        ]);

        let mut ledger = TradeLedger::new();
        ledger
            .record_buy(
                &history,
                TradeLot {
                    date: date(2024, 1, 2),
                    quantity: 10,
                },
            )
            .unwrap();
        ledger
            .record_sell(
                &history,
                TradeLot {
                    date: date(2024, 1, 3),
                    quantity: 4,
                },
            )
            .unwrap();

        (history, ledger)
    }

    #[test]
    fn test_line_covers_every_trading_day() {
        let (history, ledger) = sample();
        let chart = PriceChart::build(&history, &ledger);

        assert_eq!(chart.line.len(), 3);
        assert_eq!(chart.line[0].date, date(2024, 1, 2));
        assert_eq!(chart.line[2].price, dec!(200));
    }

    #[test]
    fn test_markers_at_trade_day_price() {
        let (history, ledger) = sample();
        let chart = PriceChart::build(&history, &ledger);

        assert_eq!(chart.buy_markers.len(), 1);
        assert_eq!(chart.buy_markers[0].price, dec!(100));
        assert_eq!(chart.buy_markers[0].quantity, 10);

        assert_eq!(chart.sell_markers.len(), 1);
        assert_eq!(chart.sell_markers[0].price, dec!(150));
        assert_eq!(chart.sell_markers[0].quantity, 4);
    }

    #[test]
    fn test_duplicate_lots_keep_separate_markers() {
        let (history, mut ledger) = sample();
        ledger
            .record_buy(
                &history,
                TradeLot {
                    date: date(2024, 1, 2),
                    quantity: 5,
                },
            )
            .unwrap();

        let chart = PriceChart::build(&history, &ledger);
        assert_eq!(chart.buy_markers.len(), 2);
    }

    #[test]
    fn test_chart_serializes_to_json() {
        let (history, ledger) = sample();
        let chart = PriceChart::build(&history, &ledger);

        let json = serde_json::to_string(&chart).unwrap();
        assert!(json.contains("\"buy_markers\""));

        let parsed: PriceChart = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, chart);
    }
}
