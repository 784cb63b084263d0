//! Shapes returned by the JSON endpoints and the CLI report.

use crate::core::aggregator::{BreakdownSummary, OrgStats};
use crate::domain::model::{Milestone, NextMilestone, PullRequestRecord, QualityThresholds};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStats {
    pub name: String,
    pub github: String,
    pub role: String,
    pub avatar: String,
    pub pr_count: u64,
    pub open_count: u64,
    pub closed_count: u64,
    pub milestones: Vec<Milestone>,
    pub next_milestone: Option<NextMilestone>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    #[serde(rename = "totalPRs")]
    pub total_prs: u64,
    pub total_open: u64,
    pub total_closed: u64,
    pub members: Vec<MemberStats>,
    pub team_milestones: Vec<Milestone>,
    pub next_team_milestone: Option<NextMilestone>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberQualityStats {
    pub name: String,
    pub github: String,
    pub role: String,
    pub avatar: String,
    pub merged_count: u64,
    pub quality_count: u64,
    pub milestones: Vec<Milestone>,
    pub next_milestone: Option<NextMilestone>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityTeamStats {
    pub total_merged: u64,
    #[serde(rename = "totalQualityPRs")]
    pub total_quality_prs: u64,
    pub thresholds: QualityThresholds,
    pub members: Vec<MemberQualityStats>,
    pub team_milestones: Vec<Milestone>,
    pub next_team_milestone: Option<NextMilestone>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberBreakdown {
    pub name: String,
    pub github: String,
    pub merged: u64,
    pub open: u64,
    pub closed: u64,
    pub gsoc_merged: u64,
    pub gsoc_open: u64,
    pub gsoc_closed: u64,
    #[serde(rename = "gsocPRs")]
    pub gsoc_prs: Vec<PullRequestRecord>,
    pub org_breakdown: Vec<OrgStats>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownReport {
    pub summary: BreakdownSummary,
    pub members: Vec<MemberBreakdown>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityAuthor {
    pub name: String,
    pub github: String,
    pub avatar: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityPr {
    pub title: String,
    pub url: String,
    pub number: u64,
    pub merged_at: DateTime<Utc>,
    pub repo_name: String,
    pub repo_url: String,
    pub repo_stars: u64,
    pub repo_forks: u64,
    pub author: QualityAuthor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityPrsReport {
    pub prs: Vec<QualityPr>,
    pub total_count: u64,
    pub last_updated: DateTime<Utc>,
}
