//! 설정 관리.
//!
//! 이 모듈은 애플리케이션 설정을 정의하고 관리합니다.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 대상 종목 설정
    #[serde(default)]
    pub instrument: InstrumentConfig,
    /// 가격 수집 설정
    #[serde(default)]
    pub fetch: FetchConfig,
    /// 포트폴리오 설정
    #[serde(default)]
    pub portfolio: PortfolioConfig,
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 대상 종목 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InstrumentConfig {
    /// 종목 코드 (6자리, 예: "005930")
    pub code: String,
    /// 종목명 (표시용)
    pub name: String,
}

impl Default for InstrumentConfig {
    fn default() -> Self {
        Self {
            code: "005930".to_string(),
            name: "삼성전자".to_string(),
        }
    }
}

/// 가격 수집 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetchConfig {
    /// 네이버 금융 기본 URL
    pub base_url: String,
    /// User-Agent 헤더 값
    pub user_agent: String,
    /// 수집할 일별 시세 페이지 수 (1페이지당 10거래일)
    pub pages: u32,
    /// 페이지 요청 간 딜레이 (밀리초)
    pub request_delay_ms: u64,
    /// HTTP 타임아웃 (초)
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://finance.naver.com".to_string(),
            user_agent: "Mozilla/5.0".to_string(),
            pages: 10,
            request_delay_ms: 300,
            timeout_secs: 30,
        }
    }
}

/// 포트폴리오 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PortfolioConfig {
    /// 기본 보유 현금 (원)
    pub default_initial_cash: Decimal,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            default_initial_cash: Decimal::from(1_000_000),
        }
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // 파일에서 로드
            .add_source(config::File::from(path.as_ref()))
            // 환경 변수로 오버라이드
            .add_source(
                config::Environment::with_prefix("HOLDINGS")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// 파일이 있으면 로드하고, 없으면 기본값을 사용합니다.
    ///
    /// 환경 변수 오버라이드는 두 경우 모두 적용됩니다.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        if path.as_ref().exists() {
            builder = builder.add_source(config::File::from(path.as_ref()));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("HOLDINGS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
