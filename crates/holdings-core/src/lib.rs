//! # Holdings Core
//!
//! 보유 종목 추적기의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 시스템 전반에서 사용되는 기본 타입을 제공합니다:
//! - 일별 가격 이력 및 월별 평균
//! - 매매 원장 (매수/매도 로트)
//! - 포트폴리오 평가 스냅샷
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use crate::config::*;
pub use crate::domain::*;
pub use crate::error::*;
pub use crate::logging::*;
pub use crate::types::*;
