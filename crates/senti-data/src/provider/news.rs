//! NewsAPI 기사 검색 Provider.
//!
//! NewsAPI 호환 `/v2/everything` 엔드포인트에서 검색어에 매칭되는
//! 기사 헤드라인을 수집합니다. API 키는 쿼리 파라미터로 전달됩니다.

use async_trait::async_trait;
use senti_core::{TitleSource, MAX_TITLES_PER_SOURCE};
use serde::Deserialize;

use crate::error::DataError;

const NEWS_API_BASE_URL: &str = "https://newsapi.org";

/// NewsAPI 제목 Provider.
pub struct NewsTitleSource {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl NewsTitleSource {
    /// 새 Provider를 생성합니다.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: NEWS_API_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// base URL을 교체합니다 (테스트용).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn search(&self, term: &str) -> Result<Vec<String>, DataError> {
        #[derive(Deserialize)]
        struct NewsResponse {
            #[serde(default)]
            articles: Vec<Article>,
        }

        #[derive(Deserialize)]
        struct Article {
            #[serde(default)]
            title: Option<String>,
        }

        let url = format!("{}/v2/everything", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("q", term), ("apiKey", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DataError::BadStatus {
                status: response.status().as_u16(),
                url,
            });
        }

        // 업스트림은 결과 수를 제한하지 않으므로 클라이언트에서 자릅니다.
        let body: NewsResponse = response.json().await?;
        let titles = body
            .articles
            .into_iter()
            .filter_map(|article| article.title)
            .take(MAX_TITLES_PER_SOURCE)
            .collect();

        Ok(titles)
    }
}

#[async_trait]
impl TitleSource for NewsTitleSource {
    fn name(&self) -> &'static str {
        "news"
    }

    async fn fetch_titles(
        &self,
        term: &str,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.search(term).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn news_body(titles: &[&str]) -> String {
        let articles: Vec<_> = titles
            .iter()
            .map(|t| serde_json::json!({"title": t, "description": "d"}))
            .collect();
        serde_json::json!({"status": "ok", "articles": articles}).to_string()
    }

    #[tokio::test]
    async fn test_fetch_titles_parses_articles() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v2/everything")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("q".into(), "Apple".into()),
                mockito::Matcher::UrlEncoded("apiKey".into(), "test-key".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(news_body(&["Apple rallies", "Apple slides"]))
            .create_async()
            .await;

        let source = NewsTitleSource::new("test-key").with_base_url(server.url());
        let titles = source.fetch_titles("Apple").await.unwrap();

        mock.assert_async().await;
        assert_eq!(titles, vec!["Apple rallies", "Apple slides"]);
    }

    #[tokio::test]
    async fn test_fetch_titles_truncates_to_ten() {
        let mut server = mockito::Server::new_async().await;
        let many: Vec<String> = (0..20).map(|i| format!("Headline {}", i)).collect();
        let many_refs: Vec<&str> = many.iter().map(String::as_str).collect();
        let _mock = server
            .mock("GET", "/v2/everything")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(news_body(&many_refs))
            .create_async()
            .await;

        let source = NewsTitleSource::new("test-key").with_base_url(server.url());
        let titles = source.fetch_titles("Apple").await.unwrap();

        assert_eq!(titles.len(), MAX_TITLES_PER_SOURCE);
    }

    #[tokio::test]
    async fn test_fetch_titles_skips_null_titles() {
        let mut server = mockito::Server::new_async().await;
        let body = serde_json::json!({
            "status": "ok",
            "articles": [
                {"title": "Kept"},
                {"title": null},
                {"description": "no title field"}
            ]
        });
        let _mock = server
            .mock("GET", "/v2/everything")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(body.to_string())
            .create_async()
            .await;

        let source = NewsTitleSource::new("test-key").with_base_url(server.url());
        let titles = source.fetch_titles("Apple").await.unwrap();

        assert_eq!(titles, vec!["Kept"]);
    }

    #[tokio::test]
    async fn test_fetch_titles_propagates_unauthorized() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/v2/everything")
            .match_query(mockito::Matcher::Any)
            .with_status(401)
            .create_async()
            .await;

        let source = NewsTitleSource::new("bad-key").with_base_url(server.url());
        assert!(source.fetch_titles("Apple").await.is_err());
    }
}
