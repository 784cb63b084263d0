use crate::config::toml_config::GitHubConfig;
use crate::domain::model::{PrState, PullRequestHit, RepositoryQualityFact};
use crate::domain::ports::PullRequestSource;
use crate::utils::error::{Result, StatsError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

const ACCEPT_GITHUB_V3: &str = "application/vnd.github.v3+json";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    total_count: u64,
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    title: String,
    html_url: String,
    repository_url: String,
    number: u64,
    created_at: DateTime<Utc>,
    closed_at: Option<DateTime<Utc>>,
}

impl From<SearchItem> for PullRequestHit {
    fn from(item: SearchItem) -> Self {
        Self {
            title: item.title,
            html_url: item.html_url,
            repository_url: item.repository_url,
            number: item.number,
            created_at: item.created_at,
            closed_at: item.closed_at,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RepositoryResponse {
    full_name: String,
    #[serde(default)]
    stargazers_count: u64,
    #[serde(default)]
    forks_count: u64,
}

/// GitHub REST client used as the pull-request source.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    api_base: String,
    per_page: u32,
}

impl GitHubClient {
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_GITHUB_V3));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent).map_err(|e| {
                StatsError::InvalidConfigValueError {
                    field: "github.user_agent".to_string(),
                    value: config.user_agent.clone(),
                    reason: e.to_string(),
                }
            })?,
        );

        // Anonymous access works, a token only raises the rate limit.
        if let Some(token) = config.resolved_token() {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                StatsError::ConfigError {
                    message: "github.token contains characters not allowed in a header"
                        .to_string(),
                }
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        } else {
            tracing::info!("🔓 No GitHub token configured, using anonymous rate limits");
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            per_page: config.per_page,
        })
    }

    fn search_query(handle: &str, state: PrState) -> String {
        format!("author:{} {}", handle, state.search_qualifier())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        tracing::debug!("📡 GET {} {:?}", url, query);
        let response = self.client.get(url).query(query).send().await?;

        let status = response.status();
        tracing::debug!("📡 Response status: {}", status);

        if status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS {
            return Err(StatsError::RateLimited {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(StatsError::UpstreamStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn search(&self, handle: &str, state: PrState, per_page: u32) -> Result<SearchResponse> {
        let url = format!("{}/search/issues", self.api_base);
        let query = [
            ("q", Self::search_query(handle, state)),
            ("per_page", per_page.to_string()),
        ];
        self.get_json(&url, &query).await
    }
}

#[async_trait]
impl PullRequestSource for GitHubClient {
    async fn search_pull_requests(
        &self,
        handle: &str,
        state: PrState,
    ) -> Result<Vec<PullRequestHit>> {
        let response = self.search(handle, state, self.per_page).await?;
        Ok(response.items.into_iter().map(PullRequestHit::from).collect())
    }

    async fn count_pull_requests(&self, handle: &str, state: PrState) -> Result<u64> {
        let response = self.search(handle, state, 1).await?;
        Ok(response.total_count)
    }

    async fn repository_facts(&self, full_name: &str) -> Result<RepositoryQualityFact> {
        let url = format!("{}/repos/{}", self.api_base, full_name);
        let repo: RepositoryResponse = self.get_json(&url, &[]).await?;
        Ok(RepositoryQualityFact {
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            full_name: repo.full_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn config(server: &MockServer, token: Option<&str>) -> GitHubConfig {
        GitHubConfig {
            api_base: server.base_url(),
            token: token.map(str::to_string),
            ..GitHubConfig::default()
        }
    }

    #[tokio::test]
    async fn test_search_maps_items() {
        let server = MockServer::start();
        let search_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/search/issues")
                .query_param("q", "author:alice is:pr is:merged")
                .query_param("per_page", "100")
                .header("Accept", ACCEPT_GITHUB_V3);
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "total_count": 1,
                    "items": [{
                        "title": "Fix flaky test",
                        "html_url": "https://github.com/apache/kafka/pull/42",
                        "repository_url": "https://api.github.com/repos/apache/kafka",
                        "number": 42,
                        "created_at": "2025-01-02T03:04:05Z",
                        "closed_at": "2025-01-05T00:00:00Z"
                    }]
                }));
        });

        let client = GitHubClient::new(&config(&server, None)).unwrap();
        let hits = client
            .search_pull_requests("alice", PrState::Merged)
            .await
            .unwrap();

        search_mock.assert();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].number, 42);
        assert_eq!(hits[0].repo_full_name(), "apache/kafka");
        assert!(hits[0].closed_at.is_some());
    }

    #[tokio::test]
    async fn test_closed_query_excludes_merged() {
        let server = MockServer::start();
        let search_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/search/issues")
                .query_param("q", "author:bob is:pr is:closed is:unmerged")
                .query_param("per_page", "1");
            then.status(200)
                .json_body(serde_json::json!({"total_count": 7, "items": []}));
        });

        let client = GitHubClient::new(&config(&server, None)).unwrap();
        let count = client
            .count_pull_requests("bob", PrState::Closed)
            .await
            .unwrap();

        search_mock.assert();
        assert_eq!(count, 7);
    }

    #[tokio::test]
    async fn test_token_is_sent_as_bearer() {
        let server = MockServer::start();
        let authed = server.mock(|when, then| {
            when.method(GET)
                .path("/repos/apache/kafka")
                .header("Authorization", "Bearer s3cret");
            then.status(200).json_body(serde_json::json!({
                "full_name": "apache/kafka",
                "stargazers_count": 30000,
                "forks_count": 14000
            }));
        });

        let client = GitHubClient::new(&config(&server, Some("s3cret"))).unwrap();
        let fact = client.repository_facts("apache/kafka").await.unwrap();

        authed.assert();
        assert_eq!(fact.stars, 30000);
        assert_eq!(fact.forks, 14000);
        assert_eq!(fact.full_name, "apache/kafka");
    }

    #[tokio::test]
    async fn test_missing_items_is_empty() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search/issues");
            then.status(200).json_body(serde_json::json!({"total_count": 0}));
        });

        let client = GitHubClient::new(&config(&server, None)).unwrap();
        let hits = client
            .search_pull_requests("ghost", PrState::Open)
            .await
            .unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_rate_limit_and_status_errors() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search/issues");
            then.status(403);
        });
        server.mock(|when, then| {
            when.method(GET).path("/repos/missing/repo");
            then.status(404);
        });

        let client = GitHubClient::new(&config(&server, None)).unwrap();

        let limited = client
            .search_pull_requests("alice", PrState::Merged)
            .await
            .unwrap_err();
        assert!(matches!(limited, StatsError::RateLimited { .. }));

        let missing = client.repository_facts("missing/repo").await.unwrap_err();
        assert!(matches!(
            missing,
            StatsError::UpstreamStatus { status: 404, .. }
        ));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/repos/odd/repo");
            then.status(200).body("<html>not json</html>");
        });

        let client = GitHubClient::new(&config(&server, None)).unwrap();
        let err = client.repository_facts("odd/repo").await.unwrap_err();
        assert_eq!(err.kind(), "upstream-malformed");
    }
}
