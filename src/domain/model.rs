use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A club member whose pull requests are tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub github: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub avatar: String,
}

fn default_role() -> String {
    "Member".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrState {
    Merged,
    Open,
    Closed,
}

impl PrState {
    /// Search qualifiers selecting pull requests in this state.
    pub fn search_qualifier(self) -> &'static str {
        match self {
            PrState::Merged => "is:pr is:merged",
            PrState::Open => "is:pr is:open",
            PrState::Closed => "is:pr is:closed is:unmerged",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PrState::Merged => "merged",
            PrState::Open => "open",
            PrState::Closed => "closed",
        }
    }
}

impl fmt::Display for PrState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One search result as returned by the source, before classification.
#[derive(Debug, Clone, PartialEq)]
pub struct PullRequestHit {
    pub title: String,
    pub html_url: String,
    pub repository_url: String,
    pub number: u64,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl PullRequestHit {
    /// `owner/name`, taken from the last two segments of the repository URL.
    pub fn repo_full_name(&self) -> String {
        let segments: Vec<&str> = self
            .repository_url
            .trim_end_matches('/')
            .rsplitn(3, '/')
            .take(2)
            .collect();
        match segments.as_slice() {
            [name, owner] => format!("{}/{}", owner, name),
            _ => self.repository_url.clone(),
        }
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.closed_at.unwrap_or(self.created_at)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestRecord {
    pub title: String,
    pub url: String,
    pub repo: String,
    pub number: u64,
    pub date: DateTime<Utc>,
    pub state: PrState,
    pub is_gsoc: bool,
}

impl PullRequestRecord {
    pub fn owner(&self) -> &str {
        self.repo.split('/').next().unwrap_or(&self.repo)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryQualityFact {
    pub stars: u64,
    pub forks: u64,
    pub full_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct QualityThresholds {
    pub min_stars: u64,
    pub min_forks: u64,
}

impl QualityThresholds {
    pub fn admits(&self, fact: &RepositoryQualityFact) -> bool {
        fact.stars >= self.min_stars && fact.forks >= self.min_forks
    }
}

impl Default for QualityThresholds {
    fn default() -> Self {
        Self {
            min_stars: 100,
            min_forks: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub name: String,
    pub count: u64,
    pub emoji: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextMilestone {
    #[serde(flatten)]
    pub milestone: Milestone,
    pub progress: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MilestoneProgress {
    pub achieved: Vec<Milestone>,
    pub next: Option<NextMilestone>,
}
