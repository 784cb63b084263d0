use crate::core::aggregator::{org_breakdown, summarize, MemberPullRequests};
use crate::core::classifier::OrganizationClassifier;
use crate::core::milestones::calculate_milestones;
use crate::core::quality::QualityFilter;
use crate::domain::model::{Member, PrState, PullRequestHit, PullRequestRecord};
use crate::domain::ports::{ConfigProvider, PullRequestSource};
use crate::domain::reports::{
    BreakdownReport, MemberBreakdown, MemberQualityStats, MemberStats, QualityAuthor, QualityPr,
    QualityPrsReport, QualityTeamStats, TeamStats,
};
use chrono::Utc;
use futures::stream::{self, StreamExt};
use std::future::Future;

/// Merged PRs of one member that passed the quality filter.
struct MemberQuality {
    merged: u64,
    prs: Vec<QualityPr>,
}

/// Composes the pull-request reports for the configured roster.
///
/// Upstream failures never abort a report: every failed unit of work (one
/// member and state, or one repository lookup) is logged and contributes
/// nothing.
pub struct StatsEngine<S: PullRequestSource, C: ConfigProvider> {
    source: S,
    config: C,
    classifier: OrganizationClassifier,
}

impl<S: PullRequestSource, C: ConfigProvider> StatsEngine<S, C> {
    pub fn new(source: S, config: C) -> Self {
        let classifier = OrganizationClassifier::new(config.organizations());
        Self {
            source,
            config,
            classifier,
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// Runs `task` for every member, at most `concurrent_requests` at a time,
    /// returning results in roster order.
    async fn fan_out<'a, T, F, Fut>(&'a self, task: F) -> Vec<T>
    where
        F: Fn(&'a Member) -> Fut,
        Fut: Future<Output = T> + 'a,
    {
        stream::iter(self.config.members())
            .map(task)
            .buffered(self.config.concurrent_requests().max(1))
            .collect()
            .await
    }

    async fn count(&self, member: &Member, state: PrState) -> u64 {
        match self.source.count_pull_requests(&member.github, state).await {
            Ok(count) => count,
            Err(e) => {
                tracing::warn!(
                    github = %member.github,
                    %state,
                    kind = e.kind(),
                    "⚠️ Counting PRs failed, contributing zero: {}",
                    e
                );
                0
            }
        }
    }

    async fn search(&self, member: &Member, state: PrState) -> Vec<PullRequestHit> {
        match self.source.search_pull_requests(&member.github, state).await {
            Ok(hits) => {
                tracing::debug!(github = %member.github, %state, "📡 Found {} PRs", hits.len());
                hits
            }
            Err(e) => {
                tracing::warn!(
                    github = %member.github,
                    %state,
                    kind = e.kind(),
                    "⚠️ Fetching PRs failed, contributing nothing: {}",
                    e
                );
                Vec::new()
            }
        }
    }

    fn classify(&self, hit: PullRequestHit, state: PrState) -> PullRequestRecord {
        let repo = hit.repo_full_name();
        let is_gsoc = self.classifier.is_eligible_repo(&repo);
        PullRequestRecord {
            date: hit.date(),
            title: hit.title,
            url: hit.html_url,
            repo,
            number: hit.number,
            state,
            is_gsoc,
        }
    }

    /// All three states of one member, fetched concurrently.
    pub async fn fetch_member(&self, member: &Member) -> MemberPullRequests {
        let (merged, open, closed) = futures::join!(
            self.search(member, PrState::Merged),
            self.search(member, PrState::Open),
            self.search(member, PrState::Closed),
        );

        let mut prs = MemberPullRequests::new(member.clone());
        for (state, hits) in [
            (PrState::Merged, merged),
            (PrState::Open, open),
            (PrState::Closed, closed),
        ] {
            let records = prs.records_mut(state);
            records.extend(hits.into_iter().map(|hit| self.classify(hit, state)));
        }
        prs
    }

    async fn member_quality(&self, member: &Member) -> MemberQuality {
        let hits = self.search(member, PrState::Merged).await;
        let merged = hits.len() as u64;

        let mut filter = QualityFilter::new(&self.source, self.config.quality_thresholds());
        let web_base = self.config.web_base().trim_end_matches('/');
        let prs = filter
            .retain_quality(hits)
            .await
            .into_iter()
            .map(|(hit, fact)| QualityPr {
                merged_at: hit.date(),
                title: hit.title,
                url: hit.html_url,
                number: hit.number,
                repo_url: format!("{}/{}", web_base, fact.full_name),
                repo_name: fact.full_name,
                repo_stars: fact.stars,
                repo_forks: fact.forks,
                author: QualityAuthor {
                    name: member.name.clone(),
                    github: member.github.clone(),
                    avatar: member.avatar.clone(),
                },
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            github = %member.github,
            "🌟 {} of {} merged PRs meet the quality bar",
            prs.len(),
            merged
        );
        MemberQuality { merged, prs }
    }

    /// Merged/open/closed counts and milestone progress per member and team.
    pub async fn pr_stats(&self) -> TeamStats {
        let members = self
            .fan_out(|member| async move {
                let (merged, open, closed) = futures::join!(
                    self.count(member, PrState::Merged),
                    self.count(member, PrState::Open),
                    self.count(member, PrState::Closed),
                );
                let progress = calculate_milestones(merged, self.config.individual_milestones());
                MemberStats {
                    name: member.name.clone(),
                    github: member.github.clone(),
                    role: member.role.clone(),
                    avatar: member.avatar.clone(),
                    pr_count: merged,
                    open_count: open,
                    closed_count: closed,
                    milestones: progress.achieved,
                    next_milestone: progress.next,
                }
            })
            .await;

        let total_prs = members.iter().map(|m| m.pr_count).sum();
        let total_open = members.iter().map(|m| m.open_count).sum();
        let total_closed = members.iter().map(|m| m.closed_count).sum();
        let team = calculate_milestones(total_prs, self.config.team_milestones());

        tracing::info!("📊 PR stats: {} merged across {} members", total_prs, members.len());

        TeamStats {
            total_prs,
            total_open,
            total_closed,
            members,
            team_milestones: team.achieved,
            next_team_milestone: team.next,
            last_updated: Utc::now(),
        }
    }

    /// Like `pr_stats`, but milestones only count PRs to popular repositories.
    pub async fn quality_stats(&self) -> QualityTeamStats {
        let members = self
            .fan_out(|member| async move {
                let quality = self.member_quality(member).await;
                let quality_count = quality.prs.len() as u64;
                let progress =
                    calculate_milestones(quality_count, self.config.individual_milestones());
                MemberQualityStats {
                    name: member.name.clone(),
                    github: member.github.clone(),
                    role: member.role.clone(),
                    avatar: member.avatar.clone(),
                    merged_count: quality.merged,
                    quality_count,
                    milestones: progress.achieved,
                    next_milestone: progress.next,
                }
            })
            .await;

        let total_merged = members.iter().map(|m| m.merged_count).sum();
        let total_quality_prs = members.iter().map(|m| m.quality_count).sum();
        let team = calculate_milestones(total_quality_prs, self.config.team_milestones());

        tracing::info!(
            "🌟 Quality stats: {} of {} merged PRs qualify",
            total_quality_prs,
            total_merged
        );

        QualityTeamStats {
            total_merged,
            total_quality_prs,
            thresholds: self.config.quality_thresholds(),
            members,
            team_milestones: team.achieved,
            next_team_milestone: team.next,
            last_updated: Utc::now(),
        }
    }

    /// Every PR split by state and by program eligibility, with an
    /// organization rollup of each member's eligible PRs.
    pub async fn breakdown(&self) -> BreakdownReport {
        let fetched = self.fan_out(|member| self.fetch_member(member)).await;
        let summary = summarize(&fetched);

        let members = fetched
            .iter()
            .map(|prs| {
                let counts = prs.counts();
                let eligible = prs.eligible_counts();
                MemberBreakdown {
                    name: prs.member.name.clone(),
                    github: prs.member.github.clone(),
                    merged: counts.merged,
                    open: counts.open,
                    closed: counts.closed,
                    gsoc_merged: eligible.merged,
                    gsoc_open: eligible.open,
                    gsoc_closed: eligible.closed,
                    gsoc_prs: prs.eligible().cloned().collect(),
                    org_breakdown: org_breakdown(prs.eligible()),
                }
            })
            .collect();

        tracing::info!(
            "📊 Breakdown: {} PRs, {} to eligible organizations",
            summary.total,
            summary.gsoc_total
        );

        BreakdownReport {
            summary,
            members,
            last_updated: Utc::now(),
        }
    }

    /// Flat list of quality PRs across the roster, newest merge first.
    pub async fn quality_prs(&self) -> QualityPrsReport {
        let per_member = self.fan_out(|member| self.member_quality(member)).await;

        let mut prs: Vec<QualityPr> = per_member.into_iter().flat_map(|q| q.prs).collect();
        prs.sort_by(|a, b| b.merged_at.cmp(&a.merged_at));

        QualityPrsReport {
            total_count: prs.len() as u64,
            prs,
            last_updated: Utc::now(),
        }
    }
}
