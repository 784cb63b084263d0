//! In-memory `PullRequestSource` for unit tests.

use crate::domain::model::{PrState, PullRequestHit, RepositoryQualityFact};
use crate::domain::ports::PullRequestSource;
use crate::utils::error::{Result, StatsError};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
pub struct MockSource {
    hits: HashMap<(String, PrState), Vec<PullRequestHit>>,
    failing: Vec<(String, PrState)>,
    repos: HashMap<String, RepositoryQualityFact>,
    pub repo_lookups: AtomicUsize,
}

impl MockSource {
    pub fn with_prs(mut self, handle: &str, state: PrState, repos: &[&str]) -> Self {
        let entry = self.hits.entry((handle.to_string(), state)).or_default();
        for repo in repos {
            let number = entry.len() as u64 + 1;
            entry.push(hit(repo, number, number as u32));
        }
        self
    }

    pub fn failing(mut self, handle: &str, state: PrState) -> Self {
        self.failing.push((handle.to_string(), state));
        self
    }

    pub fn with_repo(mut self, full_name: &str, stars: u64, forks: u64) -> Self {
        self.repos.insert(
            full_name.to_string(),
            RepositoryQualityFact {
                stars,
                forks,
                full_name: full_name.to_string(),
            },
        );
        self
    }

    pub fn lookups(&self) -> usize {
        self.repo_lookups.load(Ordering::SeqCst)
    }
}

pub fn hit(repo: &str, number: u64, day: u32) -> PullRequestHit {
    PullRequestHit {
        title: format!("Change #{} in {}", number, repo),
        html_url: format!("https://github.com/{}/pull/{}", repo, number),
        repository_url: format!("https://api.github.com/repos/{}", repo),
        number,
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        closed_at: Some(Utc.with_ymd_and_hms(2025, 3, day.clamp(1, 28), 0, 0, 0).unwrap()),
    }
}

#[async_trait]
impl PullRequestSource for MockSource {
    async fn search_pull_requests(
        &self,
        handle: &str,
        state: PrState,
    ) -> Result<Vec<PullRequestHit>> {
        let key = (handle.to_string(), state);
        if self.failing.contains(&key) {
            return Err(StatsError::RateLimited {
                url: format!("mock://search/{}/{}", handle, state),
            });
        }
        Ok(self.hits.get(&key).cloned().unwrap_or_default())
    }

    async fn count_pull_requests(&self, handle: &str, state: PrState) -> Result<u64> {
        Ok(self.search_pull_requests(handle, state).await?.len() as u64)
    }

    async fn repository_facts(&self, full_name: &str) -> Result<RepositoryQualityFact> {
        self.repo_lookups.fetch_add(1, Ordering::SeqCst);
        self.repos
            .get(full_name)
            .cloned()
            .ok_or_else(|| StatsError::UpstreamStatus {
                status: 404,
                url: format!("mock://repos/{}", full_name),
            })
    }
}
