//! VADER 기반 복합 감성 스코어러.
//!
//! 사전/규칙 기반(VADER)이므로 학습 과정이 없고 상태도 없습니다.
//! 복합 점수는 [-1.0, 1.0] 범위의 정규화된 부호 있는 값으로,
//! 0보다 작으면 부정, 크면 긍정, 절대값이 강도입니다.

use senti_core::ScoredTitle;
use vader_sentiment::SentimentIntensityAnalyzer;

/// 복합 감성 스코어러.
pub struct SentimentScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl SentimentScorer {
    /// 새 스코어러를 생성합니다.
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    /// 텍스트 하나의 복합 점수를 계산합니다.
    ///
    /// 공백뿐인 텍스트는 0.0으로 처리합니다.
    pub fn score(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }
        self.analyzer.polarity_scores(text)["compound"]
    }

    /// 제목 목록을 순서 그대로 (제목, 점수) 쌍으로 변환합니다.
    ///
    /// 입력 하나당 출력 하나가 보장됩니다.
    pub fn score_titles(&self, titles: &[String]) -> Vec<ScoredTitle> {
        titles
            .iter()
            .map(|title| ScoredTitle::new(title.clone(), self.score(title)))
            .collect()
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_headline() {
        let scorer = SentimentScorer::new();
        let score = scorer.score("Company reports great earnings, investors happy");
        assert!(score > 0.0, "expected positive score, got {}", score);
    }

    #[test]
    fn test_negative_headline() {
        let scorer = SentimentScorer::new();
        let score = scorer.score("Terrible losses, investors panic after fraud scandal");
        assert!(score < 0.0, "expected negative score, got {}", score);
    }

    #[test]
    fn test_empty_text_scores_zero() {
        let scorer = SentimentScorer::new();
        assert_eq!(scorer.score(""), 0.0);
        assert_eq!(scorer.score("   "), 0.0);
    }

    #[test]
    fn test_score_is_normalized() {
        let scorer = SentimentScorer::new();
        for text in [
            "Absolutely amazing wonderful fantastic incredible gains!!!",
            "Horrible terrible awful catastrophic devastating crash!!!",
            "The quarterly report was released on Tuesday",
        ] {
            let score = scorer.score(text);
            assert!((-1.0..=1.0).contains(&score), "{} -> {}", text, score);
        }
    }

    #[test]
    fn test_score_titles_preserves_order_and_count() {
        let scorer = SentimentScorer::new();
        let titles = vec![
            "Stock surges on good news".to_string(),
            "Stock crashes on bad news".to_string(),
            "Stock unchanged".to_string(),
        ];

        let scored = scorer.score_titles(&titles);

        assert_eq!(scored.len(), titles.len());
        for (input, output) in titles.iter().zip(&scored) {
            assert_eq!(&output.title, input);
        }
    }
}
