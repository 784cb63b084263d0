use crate::domain::model::{
    Member, Milestone, PrState, PullRequestHit, QualityThresholds, RepositoryQualityFact,
};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn members(&self) -> &[Member];
    fn organizations(&self) -> &[String];
    fn quality_thresholds(&self) -> QualityThresholds;
    fn individual_milestones(&self) -> &[Milestone];
    fn team_milestones(&self) -> &[Milestone];
    fn concurrent_requests(&self) -> usize;
    fn web_base(&self) -> &str;
}

/// Read-only access to the code-hosting API.
#[async_trait]
pub trait PullRequestSource: Send + Sync {
    /// Up to one page of pull requests authored by `handle` in `state`.
    async fn search_pull_requests(&self, handle: &str, state: PrState)
        -> Result<Vec<PullRequestHit>>;

    /// Total number of pull requests authored by `handle` in `state`.
    async fn count_pull_requests(&self, handle: &str, state: PrState) -> Result<u64>;

    /// Star and fork counts of `owner/name`.
    async fn repository_facts(&self, full_name: &str) -> Result<RepositoryQualityFact>;
}
