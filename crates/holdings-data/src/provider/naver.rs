//! 네이버 금융 일별 시세 크롤러.
//!
//! `/item/sise_day.naver` 페이지를 1페이지부터 순서대로 수집하여
//! 날짜별 중간값(고가+저가 / 2) 이력을 만듭니다.
//!
//! ## 사용 예시
//! ```rust,ignore
//! let fetcher = NaverDailyPriceFetcher::new();
//! let history = fetcher.fetch_history("005930", 10).await?;
//! println!("거래일 수: {}", history.len());
//! ```

use chrono::NaiveDate;
use reqwest::Client;
use rust_decimal::Decimal;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, warn};

use holdings_core::{DailyPrice, FetchConfig, PriceHistory};

use crate::error::{DataError, Result};

/// 일별 시세 테이블의 컬럼 수 (날짜, 종가, 전일비, 시가, 고가, 저가, 거래량).
const DAILY_ROW_CELLS: usize = 7;

/// 네이버 금융 일별 시세 크롤러.
///
/// HTML 파싱을 통해 날짜별 고가/저가를 수집합니다.
pub struct NaverDailyPriceFetcher {
    client: Client,
    base_url: String,
    /// 페이지 요청 간 딜레이 (기본: 300ms)
    request_delay: Duration,
}

impl NaverDailyPriceFetcher {
    /// 기본 설정으로 생성합니다.
    pub fn new() -> Self {
        Self::from_config(&FetchConfig::default())
    }

    /// 수집 설정으로 생성합니다.
    pub fn from_config(config: &FetchConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .expect("HTTP 클라이언트 생성 실패");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            request_delay: Duration::from_millis(config.request_delay_ms),
        }
    }

    /// 요청 딜레이를 반환합니다.
    pub fn request_delay(&self) -> Duration {
        self.request_delay
    }

    /// 일별 시세 이력을 수집합니다.
    ///
    /// # Arguments
    /// * `code` - 종목 코드 (예: "005930")
    /// * `pages` - 수집할 페이지 수 (1페이지부터 순서대로)
    pub async fn fetch_history(&self, code: &str, pages: u32) -> Result<PriceHistory> {
        self.fetch_history_with_progress(code, pages, |_, _| {}).await
    }

    /// 진행 상황 콜백과 함께 일별 시세 이력을 수집합니다.
    ///
    /// 페이지는 1..=pages 순서로 하나씩 요청되며, 요청 사이에
    /// 고정 딜레이가 적용됩니다 (재시도/백오프 아님).
    ///
    /// # Arguments
    /// * `progress_callback` - 진행 상황 콜백 (현재 페이지, 전체 페이지)
    pub async fn fetch_history_with_progress<F>(
        &self,
        code: &str,
        pages: u32,
        mut progress_callback: F,
    ) -> Result<PriceHistory>
    where
        F: FnMut(u32, u32),
    {
        let mut all_days: Vec<DailyPrice> = Vec::new();

        for page in 1..=pages {
            progress_callback(page, pages);

            let url = format!(
                "{}/item/sise_day.naver?code={}&page={}",
                self.base_url, code, page
            );

            let response = self.client.get(&url).send().await?;

            if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
                return Err(DataError::RateLimited);
            }

            let html = response.text().await?;
            let rows = parse_daily_rows(&html);

            if rows.is_empty() {
                warn!(code, page, "일별 시세 행을 찾지 못함");
            } else {
                debug!(code, page, rows = rows.len(), "일별 시세 수집");
            }

            all_days.extend(rows);

            // 마지막 페이지가 아니면 딜레이 적용
            if page < pages {
                tokio::time::sleep(self.request_delay).await;
            }
        }

        let history = PriceHistory::from_days(all_days);

        if history.is_empty() {
            return Err(DataError::NoData {
                code: code.to_string(),
            });
        }

        Ok(history)
    }
}

impl Default for NaverDailyPriceFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// 일별 시세 페이지에서 날짜별 중간값을 추출합니다.
///
/// 테이블 행은 날짜/종가/전일비/시가/고가/저가/거래량 순의 7개 셀을
/// 가집니다. 셀이 모자라거나 값이 파싱되지 않는 행은 통째로 버립니다
/// (부분 보정 없음). 간격 맞춤용 빈 행도 같은 규칙으로 걸러집니다.
fn parse_daily_rows(html: &str) -> Vec<DailyPrice> {
    let document = Html::parse_document(html);

    let row_selector = match Selector::parse("table.type2 tr") {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };
    let cell_selector = match Selector::parse("span.tah") {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    let mut days = Vec::new();

    for row in document.select(&row_selector) {
        let cells: Vec<String> = row
            .select(&cell_selector)
            .map(|cell| cell.text().collect::<String>().trim().to_string())
            .collect();

        if let Some(day) = parse_daily_cells(&cells) {
            days.push(day);
        }
    }

    days
}

/// 한 행의 셀 값들에서 일별 가격을 만듭니다.
///
/// 날짜/고가/저가 외의 수치 셀도 파싱을 요구하여, 값이 깨진 행은
/// 전체가 탈락합니다. 전일비 셀은 방향 텍스트가 섞이므로 존재만
/// 확인합니다.
fn parse_daily_cells(cells: &[String]) -> Option<DailyPrice> {
    if cells.len() != DAILY_ROW_CELLS {
        return None;
    }

    let date = parse_naver_date(&cells[0])?;

    // 종가, 시가, 거래량도 온전해야 행을 유지함
    parse_korean_number(&cells[1])?;
    parse_korean_number(&cells[3])?;
    parse_korean_number(&cells[6])?;

    if cells[2].is_empty() {
        return None;
    }

    let high = parse_korean_number(&cells[4])?;
    let low = parse_korean_number(&cells[5])?;

    Some(DailyPrice::from_range(date, high, low))
}

/// 네이버 날짜 형식(`YYYY.MM.DD`)을 파싱합니다.
fn parse_naver_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y.%m.%d").ok()
}

/// 한글 숫자 문자열 파싱 (쉼표 제거).
///
/// "1,234,567" -> 1234567
fn parse_korean_number(text: &str) -> Option<Decimal> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse().ok()
}
