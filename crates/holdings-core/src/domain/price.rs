//! 일별 가격 이력.
//!
//! 하루의 대표 가격은 고가와 저가의 중간값으로 정의합니다.
//! 이력은 날짜 오름차순으로 정렬되며 날짜당 정확히 하나의 중간값을 가집니다.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::Price;

/// 하루치 대표 가격.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPrice {
    /// 거래일
    pub date: NaiveDate,
    /// 중간값 (고가 + 저가) / 2
    pub median_price: Price,
}

impl DailyPrice {
    /// 고가와 저가에서 중간값을 계산하여 생성합니다.
    pub fn from_range(date: NaiveDate, high: Price, low: Price) -> Self {
        Self {
            date,
            median_price: (high + low) / Decimal::TWO,
        }
    }
}

/// 월별 평균 중간값.
///
/// 표시 전용으로 제공되며 평가 계산에는 사용되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAverage {
    /// 연-월 키 (예: "2024-03")
    pub month: String,
    /// 해당 월 중간값의 산술 평균
    pub avg_median_price: Price,
}

/// 날짜 오름차순으로 정렬된 일별 가격 이력.
///
/// 날짜당 하나의 항목만 유지합니다. 같은 날짜가 여러 번 들어오면
/// 나중 항목이 이전 항목을 대체합니다 (페이지 경계 중복 대응).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    days: Vec<DailyPrice>,
}

impl PriceHistory {
    /// 일별 가격 목록에서 이력을 생성합니다.
    ///
    /// 입력 순서와 무관하게 날짜 오름차순으로 정렬되고 중복이 제거됩니다.
    pub fn from_days(days: impl IntoIterator<Item = DailyPrice>) -> Self {
        let map: BTreeMap<NaiveDate, Price> = days
            .into_iter()
            .map(|d| (d.date, d.median_price))
            .collect();

        Self {
            days: map
                .into_iter()
                .map(|(date, median_price)| DailyPrice { date, median_price })
                .collect(),
        }
    }

    /// 이력이 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// 거래일 수를 반환합니다.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// 전체 일별 가격을 날짜 오름차순으로 반환합니다.
    pub fn days(&self) -> &[DailyPrice] {
        &self.days
    }

    /// 해당 날짜가 이력에 존재하는지 확인합니다.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.price_on(date).is_some()
    }

    /// 해당 날짜의 중간값을 반환합니다.
    pub fn price_on(&self, date: NaiveDate) -> Option<Price> {
        self.days
            .binary_search_by_key(&date, |d| d.date)
            .ok()
            .map(|i| self.days[i].median_price)
    }

    /// 가장 최근 거래일의 가격을 반환합니다.
    pub fn latest(&self) -> Option<&DailyPrice> {
        self.days.last()
    }

    /// 월별 평균 중간값을 계산합니다.
    ///
    /// 월 키는 ISO 날짜의 앞 7자리 (`YYYY-MM`)입니다.
    pub fn monthly_averages(&self) -> Vec<MonthlyAverage> {
        let mut months: Vec<MonthlyAverage> = Vec::new();
        let mut current: Option<(String, Decimal, u32)> = None;

        for day in &self.days {
            let key = format!("{:04}-{:02}", day.date.year(), day.date.month());

            match &mut current {
                Some((month, sum, count)) if *month == key => {
                    *sum += day.median_price;
                    *count += 1;
                }
                _ => {
                    if let Some((month, sum, count)) = current.take() {
                        months.push(MonthlyAverage {
                            month,
                            avg_median_price: sum / Decimal::from(count),
                        });
                    }
                    current = Some((key, day.median_price, 1));
                }
            }
        }

        if let Some((month, sum, count)) = current {
            months.push(MonthlyAverage {
                month,
                avg_median_price: sum / Decimal::from(count),
            });
        }

        months
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_median_from_range() {
        let day = DailyPrice::from_range(date(2024, 1, 2), dec!(110), dec!(90));
        assert_eq!(day.median_price, dec!(100));
    }

    #[test]
    fn test_history_sorted_and_deduplicated() {
        let history = PriceHistory::from_days(vec![
            DailyPrice {
                date: date(2024, 1, 3),
                median_price: dec!(105),
            },
            DailyPrice {
                date: date(2024, 1, 2),
                median_price: dec!(100),
            },
            // 페이지 경계 중복: 나중 값이 유지됨
            DailyPrice {
                date: date(2024, 1, 3),
                median_price: dec!(106),
            },
        ]);

        assert_eq!(history.len(), 2);
        assert_eq!(history.days()[0].date, date(2024, 1, 2));
        assert_eq!(history.price_on(date(2024, 1, 3)), Some(dec!(106)));
    }

    #[test]
    fn test_price_lookup() {
        let history = PriceHistory::from_days(vec![DailyPrice {
            date: date(2024, 1, 2),
            median_price: dec!(100),
        }]);

        assert!(history.contains(date(2024, 1, 2)));
        assert!(!history.contains(date(2024, 1, 3)));
        assert_eq!(history.price_on(date(2024, 1, 2)), Some(dec!(100)));
    }

    #[test]
    fn test_latest() {
        let history = PriceHistory::from_days(vec![
            DailyPrice {
                date: date(2024, 1, 2),
                median_price: dec!(100),
            },
            DailyPrice {
                date: date(2024, 1, 5),
                median_price: dec!(120),
            },
        ]);

        assert_eq!(history.latest().unwrap().date, date(2024, 1, 5));
        assert!(PriceHistory::default().latest().is_none());
    }

    #[test]
    fn test_monthly_averages() {
        let history = PriceHistory::from_days(vec![
            DailyPrice {
                date: date(2024, 3, 4),
                median_price: dec!(100),
            },
            DailyPrice {
                date: date(2024, 3, 5),
                median_price: dec!(200),
            },
            DailyPrice {
                date: date(2024, 3, 6),
                median_price: dec!(300),
            },
            DailyPrice {
                date: date(2024, 4, 1),
                median_price: dec!(400),
            },
        ]);

        let months = history.monthly_averages();
        assert_eq!(months.len(), 2);
        assert_eq!(months[0].month, "2024-03");
        assert_eq!(months[0].avg_median_price, dec!(200));
        assert_eq!(months[1].month, "2024-04");
        assert_eq!(months[1].avg_median_price, dec!(400));
    }
}
