//! 데이터 모듈 오류 타입.

use holdings_core::HoldingsError;
use thiserror::Error;

/// 데이터 수집 관련 오류.
#[derive(Debug, Error)]
pub enum DataError {
    /// HTTP 요청 실패
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTML 파싱 실패
    #[error("Parse error: {0}")]
    Parse(String),

    /// 요청 한도 초과 (HTTP 429)
    #[error("Rate limited by source")]
    RateLimited,

    /// 수집된 데이터 없음
    #[error("No data for instrument: {code}")]
    NoData {
        /// 종목 코드
        code: String,
    },
}

impl From<DataError> for HoldingsError {
    fn from(err: DataError) -> Self {
        HoldingsError::Data(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
