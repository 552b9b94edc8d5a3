//! 티커별 감성 집계.
//!
//! 집계는 티커 단위로 독립적이며 상태가 없습니다.
//! 티커 간 정규화는 수행하지 않습니다.

use senti_core::{CollectionWindow, ScoredTitle, TickerEntry, TickerSentiment};

/// 극단 감성 임계값. `abs(mean) > 0.10`이면 극단으로 분류합니다.
///
/// 설정값이 아닌 고정 상수입니다.
pub const EXTREME_THRESHOLD: f64 = 0.10;

/// 평균 복합 점수를 계산합니다.
///
/// 점수가 하나도 없으면 0.0입니다 (0 나눗셈 없이 명시적 기본값).
pub fn mean_compound(scored: &[ScoredTitle]) -> f64 {
    if scored.is_empty() {
        return 0.0;
    }
    let sum: f64 = scored.iter().map(|s| s.score).sum();
    sum / scored.len() as f64
}

/// 평균이 극단 임계값을 넘는지 확인합니다.
///
/// 경계값(정확히 0.10)은 포함하지 않습니다 (엄격 초과).
pub fn is_extreme(mean: f64) -> bool {
    mean.abs() > EXTREME_THRESHOLD
}

/// 티커 하나의 감성 요약을 생성합니다.
pub fn aggregate(
    entry: &TickerEntry,
    scored: &[ScoredTitle],
    window: &CollectionWindow,
) -> TickerSentiment {
    TickerSentiment {
        ticker: entry.ticker.clone(),
        asset: entry.company.clone(),
        sentiment: mean_compound(scored),
        timestamp: window.label(),
    }
}
