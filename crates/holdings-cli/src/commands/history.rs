//! 가격 이력 조회 명령어.
//!
//! 수집된 일별 중간값과 월별 평균을 표 형태로 출력합니다.

use anyhow::{Context, Result};

use holdings_core::{FetchConfig, WonExt};
use holdings_data::NaverDailyPriceFetcher;

/// 이력 조회 설정.
pub struct HistoryConfig {
    /// 종목 코드
    pub code: String,
    /// 종목명 (표시용)
    pub name: String,
    /// 수집할 페이지 수
    pub pages: u32,
    /// 수집 설정
    pub fetch: FetchConfig,
}

/// 가격 이력을 수집하여 출력합니다.
pub async fn run_history(config: HistoryConfig) -> Result<()> {
    let fetcher = NaverDailyPriceFetcher::from_config(&config.fetch);

    let history = fetcher
        .fetch_history(&config.code, config.pages)
        .await
        .with_context(|| format!("일별 시세 수집 실패: {}", config.code))?;

    println!("\n📈 {} ({}) 일별 중간값", config.name, config.code);
    println!("{:<12} {:>16}", "날짜", "중간값");
    for day in history.days() {
        println!("{:<12} {:>16}", day.date, day.median_price.to_won_string());
    }

    println!("\n📅 월별 평균 중간값");
    println!("{:<12} {:>16}", "월", "평균");
    for month in history.monthly_averages() {
        println!(
            "{:<12} {:>16}",
            month.month,
            month.avg_median_price.to_won_string()
        );
    }

    Ok(())
}
