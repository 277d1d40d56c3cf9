//! 도메인 모델.
//!
//! 이 모듈은 보유 종목 추적의 핵심 도메인 타입을 정의합니다:
//! - [`price`] - 일별 가격 이력 및 월별 평균
//! - [`ledger`] - 매매 원장 (매수/매도 로트)
//! - [`snapshot`] - 포트폴리오 평가 스냅샷

pub mod ledger;
pub mod price;
pub mod snapshot;

pub use ledger::*;
pub use price::*;
pub use snapshot::*;
