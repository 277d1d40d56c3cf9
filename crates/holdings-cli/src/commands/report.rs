//! 평가 리포트 명령어.
//!
//! 일별 시세를 한 번 수집한 뒤, 입력된 매매 이력과 보유 현금으로
//! 평가 스냅샷을 계산하고 요약과 차트 데이터를 출력합니다.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};
use rust_decimal::Decimal;
use tracing::info;

use holdings_analytics::{evaluate, render_summary, PriceChart};
use holdings_core::{FetchConfig, PriceHistory, TradeLedger, TradeLot, TradeSide};
use holdings_data::NaverDailyPriceFetcher;

/// 리포트 실행 설정.
pub struct ReportConfig {
    /// 종목 코드
    pub code: String,
    /// 종목명 (표시용)
    pub name: String,
    /// 수집할 페이지 수
    pub pages: u32,
    /// 보유 현금
    pub initial_cash: Decimal,
    /// 매수 로트
    pub buys: Vec<TradeLot>,
    /// 매도 로트
    pub sells: Vec<TradeLot>,
    /// 평가 기준일
    pub as_of: NaiveDate,
    /// 차트 데이터 JSON 출력 경로 (선택)
    pub chart_out: Option<String>,
    /// 수집 설정
    pub fetch: FetchConfig,
}

/// 평가 리포트를 실행합니다.
pub async fn run_report(config: ReportConfig) -> Result<()> {
    let history = fetch_history(&config).await?;

    info!(
        code = %config.code,
        days = history.len(),
        "price history loaded"
    );

    // 매매 이력 기록 (수량 0은 걸러지고, 이력에 없는 날짜는 에러)
    let mut ledger = TradeLedger::new();
    record_lots(&mut ledger, &history, TradeSide::Buy, &config.buys)?;
    record_lots(&mut ledger, &history, TradeSide::Sell, &config.sells)?;

    let snapshot = evaluate(&history, &ledger, config.initial_cash, config.as_of)?;

    let first = history.days().first().map(|d| d.date);
    let last = history.latest().map(|d| d.date);

    println!("\n📈 {} 주가 분석 & 매매 이력 추적", config.name);
    println!("종목: {} ({})", config.name, config.code);
    if let (Some(first), Some(last)) = (first, last) {
        println!("기간: {} ~ {} ({}거래일)", first, last, history.len());
    }

    println!("\n📊 결과 요약");
    println!("{}", render_summary(&snapshot));

    let chart = PriceChart::build(&history, &ledger);

    if let Some(path) = &config.chart_out {
        let json = serde_json::to_string_pretty(&chart)?;
        std::fs::write(path, json).with_context(|| format!("차트 데이터 저장 실패: {}", path))?;
        println!(
            "\n📉 차트 데이터 저장됨: {} (선 {}개, 매수 {}개, 매도 {}개)",
            path,
            chart.line.len(),
            chart.buy_markers.len(),
            chart.sell_markers.len()
        );
    }

    Ok(())
}

/// 로트 목록을 원장에 기록합니다.
fn record_lots(
    ledger: &mut TradeLedger,
    history: &PriceHistory,
    side: TradeSide,
    lots: &[TradeLot],
) -> Result<()> {
    for lot in lots {
        ledger
            .record(history, side, *lot)
            .with_context(|| format!("{} 이력 기록 실패: {}:{}", side, lot.date, lot.quantity))?;
    }
    Ok(())
}

/// 진행 표시와 함께 일별 시세를 수집합니다.
async fn fetch_history(config: &ReportConfig) -> Result<PriceHistory> {
    let fetcher = NaverDailyPriceFetcher::from_config(&config.fetch);

    let pb = ProgressBar::new(u64::from(config.pages));
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap(),
    );
    pb.set_message(format!("{} 일별 시세 수집 중...", config.code));

    let history = fetcher
        .fetch_history_with_progress(&config.code, config.pages, |page, _| {
            pb.set_position(u64::from(page));
        })
        .await
        .with_context(|| format!("일별 시세 수집 실패: {}", config.code))?;

    pb.finish_and_clear();

    Ok(history)
}
