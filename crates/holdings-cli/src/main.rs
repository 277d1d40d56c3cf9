//! 보유 종목 추적기 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 삼성전자 최근 10페이지 시세로 평가 리포트
//! holdings report --cash 1000000 --buy 2024-01-02:10 --sell 2024-01-15:4
//!
//! # 다른 종목, 차트 데이터 JSON 저장
//! holdings report -c 035720 --buy 2024-01-02:3 --chart-out chart.json
//!
//! # 일별 중간값과 월별 평균 조회
//! holdings history
//! ```

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::error;

mod commands;

use commands::history::{run_history, HistoryConfig};
use commands::report::{run_report, ReportConfig};

use holdings_core::{init_logging, AppConfig, HoldingsError, LogConfig, TradeLot};

#[derive(Parser)]
#[command(name = "holdings")]
#[command(about = "Holdings tracker CLI - 네이버 금융 기반 주가 분석 & 매매 이력 추적", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 평가 리포트 출력 (시세 수집 → 매매 이력 기록 → 평가)
    Report {
        /// 종목 코드 (기본: 설정 파일의 종목)
        #[arg(short, long)]
        code: Option<String>,

        /// 수집할 일별 시세 페이지 수
        #[arg(short, long)]
        pages: Option<u32>,

        /// 보유 현금 (원, 기본: 설정의 기본값)
        #[arg(long)]
        cash: Option<String>,

        /// 매수 이력 (반복 가능, 형식: YYYY-MM-DD:수량)
        #[arg(short = 'b', long = "buy")]
        buys: Vec<String>,

        /// 매도 이력 (반복 가능, 형식: YYYY-MM-DD:수량)
        #[arg(short = 's', long = "sell")]
        sells: Vec<String>,

        /// 평가 기준일 (YYYY-MM-DD, 기본: 오늘)
        #[arg(long = "as-of")]
        as_of: Option<String>,

        /// 차트 데이터 JSON 출력 경로
        #[arg(long = "chart-out")]
        chart_out: Option<String>,

        /// 설정 파일
        #[arg(long, default_value = "config/default.toml")]
        config: String,
    },

    /// 일별 중간값과 월별 평균 조회
    History {
        /// 종목 코드 (기본: 설정 파일의 종목)
        #[arg(short, long)]
        code: Option<String>,

        /// 수집할 일별 시세 페이지 수
        #[arg(short, long)]
        pages: Option<u32>,

        /// 설정 파일
        #[arg(long, default_value = "config/default.toml")]
        config: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config_path = match &cli.command {
        Commands::Report { config, .. } | Commands::History { config, .. } => config.clone(),
    };
    let app = AppConfig::load_or_default(&config_path)
        .map_err(|e| HoldingsError::Config(e.to_string()))?;

    init_logging(log_config(&app))?;

    match cli.command {
        Commands::Report {
            code,
            pages,
            cash,
            buys,
            sells,
            as_of,
            chart_out,
            ..
        } => {
            let (code, name) = resolve_instrument(&app, code);

            let initial_cash = match cash {
                Some(raw) => raw.parse::<Decimal>().map_err(|_| {
                    HoldingsError::InvalidInput(format!("보유 현금이 숫자가 아님: {}", raw))
                })?,
                None => app.portfolio.default_initial_cash,
            };
            if initial_cash < Decimal::ZERO {
                return Err(
                    HoldingsError::InvalidInput("보유 현금은 0 이상이어야 함".to_string()).into(),
                );
            }

            let as_of = match as_of {
                Some(raw) => raw.parse().map_err(|_| {
                    HoldingsError::InvalidInput(format!("날짜 형식이 아님 (YYYY-MM-DD): {}", raw))
                })?,
                None => chrono::Local::now().date_naive(),
            };

            let buys = parse_lots(&buys)?;
            let sells = parse_lots(&sells)?;

            let report_config = ReportConfig {
                code,
                name,
                pages: pages.unwrap_or(app.fetch.pages),
                initial_cash,
                buys,
                sells,
                as_of,
                chart_out,
                fetch: app.fetch,
            };

            if let Err(e) = run_report(report_config).await {
                error!("Report failed: {:#}", e);
                return Err(e.into());
            }
        }

        Commands::History { code, pages, .. } => {
            let (code, name) = resolve_instrument(&app, code);

            let history_config = HistoryConfig {
                code,
                name,
                pages: pages.unwrap_or(app.fetch.pages),
                fetch: app.fetch,
            };

            if let Err(e) = run_history(history_config).await {
                error!("History failed: {:#}", e);
                return Err(e.into());
            }
        }
    }

    Ok(())
}

/// 로깅 설정을 결정합니다.
///
/// 환경 변수(`RUST_LOG`, `LOG_FORMAT`)가 설정 파일보다 우선합니다.
fn log_config(app: &AppConfig) -> LogConfig {
    let mut config = LogConfig::from_env();

    if std::env::var("RUST_LOG").is_err() {
        config.level = app.logging.level.clone();
    }
    if std::env::var("LOG_FORMAT").is_err() {
        if let Ok(format) = app.logging.format.parse() {
            config.format = format;
        }
    }

    config
}

/// 종목 코드와 표시용 이름을 결정합니다.
///
/// 플래그로 설정과 다른 종목이 지정되면 이름 대신 코드를 표시합니다.
fn resolve_instrument(app: &AppConfig, code_flag: Option<String>) -> (String, String) {
    match code_flag {
        Some(code) if code != app.instrument.code => (code.clone(), code),
        _ => (app.instrument.code.clone(), app.instrument.name.clone()),
    }
}

/// `DATE:QTY` 문자열 목록을 로트로 파싱합니다.
fn parse_lots(raw: &[String]) -> Result<Vec<TradeLot>, HoldingsError> {
    raw.iter().map(|s| s.parse()).collect()
}
