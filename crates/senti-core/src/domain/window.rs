//! 수집 구간 라벨.

use chrono::{DateTime, Duration, Local, NaiveDate, Utc};

/// 실행당 한 번 계산되는 24시간 조회 구간.
///
/// 구간 라벨은 실행의 모든 요약/상세 행에 동일하게 부착되어
/// 행 단위 추적을 가능하게 합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionWindow {
    /// 구간 시작 (UTC)
    pub start: DateTime<Utc>,
    /// 구간 종료 (UTC)
    pub end: DateTime<Utc>,
}

impl CollectionWindow {
    /// 현재 시각 기준 직전 24시간 구간을 생성합니다.
    pub fn last_24h() -> Self {
        Self::ending_at(Utc::now())
    }

    /// 종료 시각을 지정해 구간을 생성합니다 (테스트용).
    pub fn ending_at(end: DateTime<Utc>) -> Self {
        Self {
            start: end - Duration::hours(24),
            end,
        }
    }

    /// 리포트 행에 부착되는 구간 라벨.
    pub fn label(&self) -> String {
        format!(
            "{} to {}",
            self.start.format("%Y-%m-%d %H:%M UTC"),
            self.end.format("%Y-%m-%d %H:%M UTC")
        )
    }
}

/// 리포트 파일명에 쓰이는 실행 날짜 (로컬 캘린더 기준).
pub fn report_date() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_window_label() {
        let end = Utc.with_ymd_and_hms(2025, 3, 14, 15, 9, 0).unwrap();
        let window = CollectionWindow::ending_at(end);

        assert_eq!(
            window.label(),
            "2025-03-13 15:09 UTC to 2025-03-14 15:09 UTC"
        );
    }

    #[test]
    fn test_window_spans_24_hours() {
        let window = CollectionWindow::last_24h();
        assert_eq!(window.end - window.start, Duration::hours(24));
    }
}
