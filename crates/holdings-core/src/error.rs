//! 보유 종목 추적기의 에러 타입.
//!
//! 이 모듈은 시스템 전반에서 사용되는 에러 타입을 정의합니다.

use chrono::NaiveDate;
use thiserror::Error;

/// 핵심 에러.
#[derive(Debug, Error)]
pub enum HoldingsError {
    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 잘못된 입력
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),

    /// 가격 이력에 존재하지 않는 거래일
    #[error("가격 이력에 없는 날짜: {date}")]
    UnknownDate {
        /// 요청된 날짜
        date: NaiveDate,
    },

    /// 데이터 수집 에러
    #[error("데이터 에러: {0}")]
    Data(String),

    /// 직렬화 에러
    #[error("직렬화 에러: {0}")]
    Serialization(String),
}

/// 보유 종목 작업을 위한 Result 타입.
pub type HoldingsResult<T> = Result<T, HoldingsError>;

impl HoldingsError {
    /// 사용자 입력 문제인지 확인합니다 (재입력으로 해결 가능).
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            HoldingsError::InvalidInput(_) | HoldingsError::UnknownDate { .. }
        )
    }
}

impl From<serde_json::Error> for HoldingsError {
    fn from(err: serde_json::Error) -> Self {
        HoldingsError::Serialization(err.to_string())
    }
}
