use crate::domain::model::{PullRequestHit, QualityThresholds, RepositoryQualityFact};
use crate::domain::ports::PullRequestSource;
use std::collections::HashMap;

/// Keeps merged pull requests whose repository clears the popularity thresholds.
///
/// Repository lookups are memoized for the lifetime of the filter, failures
/// included, so each distinct repository costs at most one upstream call.
/// A filter serves a single member within a single request.
pub struct QualityFilter<'a, S: PullRequestSource> {
    source: &'a S,
    thresholds: QualityThresholds,
    cache: HashMap<String, Option<RepositoryQualityFact>>,
}

impl<'a, S: PullRequestSource> QualityFilter<'a, S> {
    pub fn new(source: &'a S, thresholds: QualityThresholds) -> Self {
        Self {
            source,
            thresholds,
            cache: HashMap::new(),
        }
    }

    pub async fn resolve(&mut self, full_name: &str) -> Option<RepositoryQualityFact> {
        if let Some(cached) = self.cache.get(full_name) {
            return cached.clone();
        }

        let fact = match self.source.repository_facts(full_name).await {
            Ok(fact) => Some(fact),
            Err(e) => {
                tracing::warn!(
                    repo = full_name,
                    kind = e.kind(),
                    "⚠️ Repository lookup failed, excluding its PRs from quality set: {}",
                    e
                );
                None
            }
        };
        self.cache.insert(full_name.to_string(), fact.clone());
        fact
    }

    /// Pairs each admitted hit with its repository facts, preserving input order.
    pub async fn retain_quality(
        &mut self,
        hits: Vec<PullRequestHit>,
    ) -> Vec<(PullRequestHit, RepositoryQualityFact)> {
        let mut admitted = Vec::new();
        for hit in hits {
            let Some(fact) = self.resolve(&hit.repo_full_name()).await else {
                continue;
            };
            if self.thresholds.admits(&fact) {
                admitted.push((hit, fact));
            }
        }
        admitted
    }

    pub fn lookups_cached(&self) -> usize {
        self.cache.len()
    }
}
