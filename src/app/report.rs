use crate::core::Storage;
use crate::domain::model::PrState;
use crate::domain::reports::BreakdownReport;
use crate::utils::error::Result;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ReportFormat {
    Json,
    Csv,
}

impl ReportFormat {
    pub fn file_name(self) -> &'static str {
        match self {
            ReportFormat::Json => "pr-data-report.json",
            ReportFormat::Csv => "pr-data-report.csv",
        }
    }
}

/// Writes a breakdown report through a `Storage` backend.
pub struct ReportWriter<S: Storage> {
    storage: S,
}

impl<S: Storage> ReportWriter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Returns the file name written, relative to the storage root.
    pub async fn write(&self, report: &BreakdownReport, format: ReportFormat) -> Result<String> {
        let data = match format {
            ReportFormat::Json => serde_json::to_vec_pretty(report)?,
            ReportFormat::Csv => to_csv(report)?.into_bytes(),
        };

        tracing::debug!("Writing {} ({} bytes) to storage", format.file_name(), data.len());
        self.storage.write_file(format.file_name(), &data).await?;
        Ok(format.file_name().to_string())
    }
}

/// One row per member with all-PR and eligible-PR counts.
pub fn to_csv(report: &BreakdownReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "name",
        "github",
        "merged",
        "open",
        "closed",
        "gsoc_merged",
        "gsoc_open",
        "gsoc_closed",
    ])?;

    for member in &report.members {
        writer.write_record([
            member.name.clone(),
            member.github.clone(),
            member.merged.to_string(),
            member.open.to_string(),
            member.closed.to_string(),
            member.gsoc_merged.to_string(),
            member.gsoc_open.to_string(),
            member.gsoc_closed.to_string(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| crate::utils::error::StatsError::ProcessingError {
        message: format!("CSV output is not UTF-8: {}", e),
    })
}

fn state_icon(state: PrState) -> &'static str {
    match state {
        PrState::Merged => "✅",
        PrState::Open => "🔓",
        PrState::Closed => "❌",
    }
}

/// Console summary: totals, per-member lines, then every eligible PR.
pub fn render_summary(report: &BreakdownReport) -> String {
    let s = &report.summary;
    let mut out = String::new();

    let _ = writeln!(out, "DevForge PR Data Report ({})", report.last_updated.to_rfc3339());
    let _ = writeln!(out);
    let _ = writeln!(out, "📊 ALL PRs:");
    let _ = writeln!(out, "   ✅ Merged:  {}", s.merged);
    let _ = writeln!(out, "   🔓 Open:    {}", s.open);
    let _ = writeln!(out, "   ❌ Closed:  {}", s.closed);
    let _ = writeln!(out, "   📈 Total:   {}", s.total);
    let _ = writeln!(out);
    let _ = writeln!(out, "🌟 GSoC-ELIGIBLE ORG PRs:");
    let _ = writeln!(out, "   ✅ Merged:  {}", s.gsoc_merged);
    let _ = writeln!(out, "   🔓 Open:    {}", s.gsoc_open);
    let _ = writeln!(out, "   ❌ Closed:  {}", s.gsoc_closed);
    let _ = writeln!(out, "   📈 Total:   {}", s.gsoc_total);

    let _ = writeln!(out);
    let _ = writeln!(out, "PER-MEMBER BREAKDOWN");
    for member in &report.members {
        let _ = writeln!(out, "👤 {} (@{})", member.name, member.github);
        let _ = writeln!(
            out,
            "   All PRs:  Merged: {}, Open: {}, Closed: {}",
            member.merged, member.open, member.closed
        );
        let _ = writeln!(
            out,
            "   GSoC PRs: Merged: {}, Open: {}, Closed: {}",
            member.gsoc_merged, member.gsoc_open, member.gsoc_closed
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "DETAILED GSOC PR LIST");
    for member in report.members.iter().filter(|m| !m.gsoc_prs.is_empty()) {
        let _ = writeln!(out, "👤 {}:", member.name);
        for pr in &member.gsoc_prs {
            let _ = writeln!(
                out,
                "   {} [{}] {}#{}",
                state_icon(pr.state),
                pr.state.as_str().to_uppercase(),
                pr.repo,
                pr.number
            );
            let _ = writeln!(out, "      {}", pr.title);
            let _ = writeln!(out, "      {}", pr.url);
        }
    }

    out
}
