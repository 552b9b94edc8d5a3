//! YouTube 영상 검색 Provider.
//!
//! YouTube Data API v3 `search` 엔드포인트에서 `"<검색어> stock"`에
//! 매칭되는 영상 제목을 수집합니다. 결과 수는 `maxResults`로 제한합니다.

use async_trait::async_trait;
use senti_core::{TitleSource, MAX_TITLES_PER_SOURCE};
use serde::Deserialize;

use crate::error::DataError;

const YOUTUBE_BASE_URL: &str = "https://www.googleapis.com";

/// YouTube 제목 Provider.
pub struct YoutubeTitleSource {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl YoutubeTitleSource {
    /// 새 Provider를 생성합니다.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: YOUTUBE_BASE_URL.to_string(),
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
        struct SearchResponse {
            #[serde(default)]
            items: Vec<Item>,
        }

        #[derive(Deserialize)]
        struct Item {
            snippet: Snippet,
        }

        #[derive(Deserialize)]
        struct Snippet {
            #[serde(default)]
            title: String,
        }

        let url = format!("{}/youtube/v3/search", self.base_url);
        // 주식 문맥으로 한정하기 위해 검색어에 "stock"을 덧붙입니다.
        let query = format!("{} stock", term);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("q", query.as_str()),
                ("key", self.api_key.as_str()),
                ("maxResults", "10"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DataError::BadStatus {
                status: response.status().as_u16(),
                url,
            });
        }

        let body: SearchResponse = response.json().await?;
        let titles = body
            .items
            .into_iter()
            .map(|item| item.snippet.title)
            .take(MAX_TITLES_PER_SOURCE)
            .collect();

        Ok(titles)
    }
}

#[async_trait]
impl TitleSource for YoutubeTitleSource {
    fn name(&self) -> &'static str {
        "youtube"
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

    fn search_body(titles: &[&str]) -> String {
        let items: Vec<_> = titles
            .iter()
            .map(|t| serde_json::json!({"snippet": {"title": t}}))
            .collect();
        serde_json::json!({"items": items}).to_string()
    }

    #[tokio::test]
    async fn test_fetch_titles_appends_stock_to_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/youtube/v3/search")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("q".into(), "Apple stock".into()),
                mockito::Matcher::UrlEncoded("maxResults".into(), "10".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(search_body(&["Apple stock review", "Buy Apple?"]))
            .create_async()
            .await;

        let source = YoutubeTitleSource::new("yt-key").with_base_url(server.url());
        let titles = source.fetch_titles("Apple").await.unwrap();

        mock.assert_async().await;
        assert_eq!(titles, vec!["Apple stock review", "Buy Apple?"]);
    }

    #[tokio::test]
    async fn test_fetch_titles_propagates_quota_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/youtube/v3/search")
            .match_query(mockito::Matcher::Any)
            .with_status(403)
            .create_async()
            .await;

        let source = YoutubeTitleSource::new("yt-key").with_base_url(server.url());
        assert!(source.fetch_titles("Apple").await.is_err());
    }

    #[tokio::test]
    async fn test_fetch_titles_empty_items() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/youtube/v3/search")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let source = YoutubeTitleSource::new("yt-key").with_base_url(server.url());
        let titles = source.fetch_titles("Apple").await.unwrap();
        assert!(titles.is_empty());
    }
}
