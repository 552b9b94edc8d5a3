//! Reddit 커뮤니티 검색 Provider.
//!
//! Reddit 공개 JSON 검색 API로 고정된 커뮤니티(서브레딧) 안에서
//! 검색어에 매칭되는 게시물 제목을 수집합니다.
//!
//! 공개 API는 User-Agent 헤더로 클라이언트를 식별해야 합니다.

use async_trait::async_trait;
use senti_core::{TitleSource, MAX_TITLES_PER_SOURCE};
use serde::Deserialize;

use crate::error::DataError;

const REDDIT_BASE_URL: &str = "https://www.reddit.com";

/// Reddit 제목 Provider.
pub struct RedditTitleSource {
    client: reqwest::Client,
    base_url: String,
    subreddit: String,
    user_agent: String,
}

impl RedditTitleSource {
    /// 새 Provider를 생성합니다.
    ///
    /// # Arguments
    /// * `subreddit` - 검색을 한정할 커뮤니티 (예: "stocks")
    /// * `user_agent` - 공개 API 요청에 사용할 User-Agent
    pub fn new(subreddit: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: REDDIT_BASE_URL.to_string(),
            subreddit: subreddit.into(),
            user_agent: user_agent.into(),
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
        struct Listing {
            data: ListingData,
        }

        #[derive(Deserialize)]
        struct ListingData {
            #[serde(default)]
            children: Vec<Child>,
        }

        #[derive(Deserialize)]
        struct Child {
            data: PostData,
        }

        #[derive(Deserialize)]
        struct PostData {
            #[serde(default)]
            title: String,
        }

        let url = format!("{}/r/{}/search.json", self.base_url, self.subreddit);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", term),
                ("restrict_sr", "on"),
                ("sort", "relevance"),
                ("limit", "10"),
            ])
            .header("User-Agent", &self.user_agent)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DataError::BadStatus {
                status: response.status().as_u16(),
                url,
            });
        }

        let listing: Listing = response.json().await?;
        let titles = listing
            .data
            .children
            .into_iter()
            .map(|child| child.data.title)
            .take(MAX_TITLES_PER_SOURCE)
            .collect();

        Ok(titles)
    }
}

#[async_trait]
impl TitleSource for RedditTitleSource {
    fn name(&self) -> &'static str {
        "reddit"
    }

    async fn fetch_titles(
        &self,
        term: &str,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.search(term).await?)
    }
}
