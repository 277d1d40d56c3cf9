//! 매매 원장.
//!
//! 매수와 매도는 날짜별 독립적인 로트 목록으로 기록됩니다.
//! 같은 날짜가 양쪽에 모두 나타날 수 있고, 한쪽에 두 번 나타나면
//! 덮어쓰지 않고 별도 로트로 누적됩니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::PriceHistory;
use crate::error::{HoldingsError, HoldingsResult};

/// 매매 방향.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeSide {
    /// 매수
    Buy,
    /// 매도
    Sell,
}

impl std::fmt::Display for TradeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "매수"),
            Self::Sell => write!(f, "매도"),
        }
    }
}

/// 하나의 매매 로트 (거래일 + 수량).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeLot {
    /// 거래일 (가격 이력에 존재해야 함)
    pub date: NaiveDate,
    /// 주식 수량. 0은 기록 시 걸러집니다.
    pub quantity: u32,
}

impl FromStr for TradeLot {
    type Err = HoldingsError;

    /// `YYYY-MM-DD:수량` 형식을 파싱합니다.
    ///
    /// 음수 수량은 0으로 취급되어 이후 기록 단계에서 걸러집니다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (date_part, qty_part) = s
            .split_once(':')
            .ok_or_else(|| HoldingsError::InvalidInput(format!("로트 형식이 아님 (DATE:QTY): {}", s)))?;

        let date = date_part.trim().parse::<NaiveDate>().map_err(|_| {
            HoldingsError::InvalidInput(format!("날짜 형식이 아님 (YYYY-MM-DD): {}", date_part))
        })?;

        let quantity = qty_part
            .trim()
            .parse::<i64>()
            .map_err(|_| HoldingsError::InvalidInput(format!("수량이 아님: {}", qty_part)))?;

        Ok(Self {
            date,
            quantity: quantity.try_into().unwrap_or(0),
        })
    }
}

/// 매수/매도 로트를 기록하는 원장.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeLedger {
    buys: Vec<TradeLot>,
    sells: Vec<TradeLot>,
}

impl TradeLedger {
    /// 빈 원장을 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 원장이 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.buys.is_empty() && self.sells.is_empty()
    }

    /// 매수 로트 목록을 반환합니다.
    pub fn buys(&self) -> &[TradeLot] {
        &self.buys
    }

    /// 매도 로트 목록을 반환합니다.
    pub fn sells(&self) -> &[TradeLot] {
        &self.sells
    }

    /// 로트를 기록합니다.
    ///
    /// 거래일이 가격 이력에 없으면 [`HoldingsError::UnknownDate`]를
    /// 반환합니다. 수량 0은 에러가 아니라 조용히 걸러지며, 이때 `false`를
    /// 반환합니다.
    pub fn record(
        &mut self,
        history: &PriceHistory,
        side: TradeSide,
        lot: TradeLot,
    ) -> HoldingsResult<bool> {
        if !history.contains(lot.date) {
            return Err(HoldingsError::UnknownDate { date: lot.date });
        }

        if lot.quantity == 0 {
            return Ok(false);
        }

        match side {
            TradeSide::Buy => self.buys.push(lot),
            TradeSide::Sell => self.sells.push(lot),
        }

        Ok(true)
    }

    /// 매수 로트를 기록합니다.
    pub fn record_buy(&mut self, history: &PriceHistory, lot: TradeLot) -> HoldingsResult<bool> {
        self.record(history, TradeSide::Buy, lot)
    }

    /// 매도 로트를 기록합니다.
    pub fn record_sell(&mut self, history: &PriceHistory, lot: TradeLot) -> HoldingsResult<bool> {
        self.record(history, TradeSide::Sell, lot)
    }
}
