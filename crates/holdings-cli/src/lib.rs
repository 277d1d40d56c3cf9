//! CLI 도구 모음.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - 평가 리포트 출력 (매매 이력 + 보유 현금 → 수익률/총자산)
//! - 가격 이력 및 월별 평균 조회

pub mod commands;

pub use commands::*;
