use crate::domain::model::{Member, PrState, PullRequestRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Every classified pull request found for one member, split by state.
#[derive(Debug, Clone)]
pub struct MemberPullRequests {
    pub member: Member,
    pub merged: Vec<PullRequestRecord>,
    pub open: Vec<PullRequestRecord>,
    pub closed: Vec<PullRequestRecord>,
}

impl MemberPullRequests {
    pub fn new(member: Member) -> Self {
        Self {
            member,
            merged: Vec::new(),
            open: Vec::new(),
            closed: Vec::new(),
        }
    }

    pub fn records_mut(&mut self, state: PrState) -> &mut Vec<PullRequestRecord> {
        match state {
            PrState::Merged => &mut self.merged,
            PrState::Open => &mut self.open,
            PrState::Closed => &mut self.closed,
        }
    }

    pub fn all(&self) -> impl Iterator<Item = &PullRequestRecord> {
        self.merged.iter().chain(self.open.iter()).chain(self.closed.iter())
    }

    pub fn eligible(&self) -> impl Iterator<Item = &PullRequestRecord> {
        self.all().filter(|pr| pr.is_gsoc)
    }

    pub fn counts(&self) -> StateCounts {
        StateCounts::tally(self.all())
    }

    pub fn eligible_counts(&self) -> StateCounts {
        StateCounts::tally(self.eligible())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateCounts {
    pub merged: u64,
    pub open: u64,
    pub closed: u64,
    pub total: u64,
}

impl StateCounts {
    pub fn tally<'a>(records: impl Iterator<Item = &'a PullRequestRecord>) -> Self {
        let mut counts = Self::default();
        for record in records {
            counts.add(record.state, 1);
        }
        counts
    }

    pub fn add(&mut self, state: PrState, n: u64) {
        match state {
            PrState::Merged => self.merged += n,
            PrState::Open => self.open += n,
            PrState::Closed => self.closed += n,
        }
        self.total += n;
    }

    pub fn merge(&mut self, other: &StateCounts) {
        self.merged += other.merged;
        self.open += other.open;
        self.closed += other.closed;
        self.total += other.total;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownSummary {
    pub merged: u64,
    pub open: u64,
    pub closed: u64,
    pub total: u64,
    pub gsoc_merged: u64,
    pub gsoc_open: u64,
    pub gsoc_closed: u64,
    pub gsoc_total: u64,
}

impl BreakdownSummary {
    pub fn from_counts(all: StateCounts, eligible: StateCounts) -> Self {
        Self {
            merged: all.merged,
            open: all.open,
            closed: all.closed,
            total: all.total,
            gsoc_merged: eligible.merged,
            gsoc_open: eligible.open,
            gsoc_closed: eligible.closed,
            gsoc_total: eligible.total,
        }
    }
}

/// Sums per-member counts into the aggregate summary.
pub fn summarize(members: &[MemberPullRequests]) -> BreakdownSummary {
    let mut all = StateCounts::default();
    let mut eligible = StateCounts::default();
    for member in members {
        all.merge(&member.counts());
        eligible.merge(&member.eligible_counts());
    }
    BreakdownSummary::from_counts(all, eligible)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrgStats {
    pub org: String,
    pub merged: u64,
    pub open: u64,
    pub closed: u64,
    pub total: u64,
    pub prs: Vec<PullRequestRecord>,
}

/// Groups records by repository owner, largest contribution first.
///
/// Ties are broken by owner name so the output is stable across runs.
pub fn org_breakdown<'a>(records: impl Iterator<Item = &'a PullRequestRecord>) -> Vec<OrgStats> {
    let mut groups: HashMap<String, (StateCounts, Vec<PullRequestRecord>)> = HashMap::new();
    for record in records {
        let (counts, prs) = groups.entry(record.owner().to_string()).or_default();
        counts.add(record.state, 1);
        prs.push(record.clone());
    }

    let mut orgs: Vec<OrgStats> = groups
        .into_iter()
        .map(|(org, (counts, prs))| OrgStats {
            org,
            merged: counts.merged,
            open: counts.open,
            closed: counts.closed,
            total: counts.total,
            prs,
        })
        .collect();
    orgs.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.org.cmp(&b.org)));
    orgs
}
