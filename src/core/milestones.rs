use crate::domain::model::{Milestone, MilestoneProgress, NextMilestone};

fn milestone(name: &str, count: u64, emoji: &str) -> Milestone {
    Milestone {
        name: name.to_string(),
        count,
        emoji: emoji.to_string(),
    }
}

pub fn default_individual_milestones() -> Vec<Milestone> {
    vec![
        milestone("Beginner", 5, "🌱"),
        milestone("Contributor", 15, "🪪"),
        milestone("Active", 25, "👕"),
        milestone("Champion", 50, "🏅"),
        milestone("Legend", 100, "👑"),
        milestone("Master", 200, "🚀"),
    ]
}

pub fn default_team_milestones() -> Vec<Milestone> {
    vec![
        milestone("Bronze", 50, "🥉"),
        milestone("Silver", 100, "🥈"),
        milestone("Gold", 250, "🥇"),
        milestone("Platinum", 500, "💎"),
        milestone("Diamond", 1000, "🏆"),
    ]
}

/// Splits an ascending milestone list around `count`.
///
/// Progress towards the next milestone is linear between the last achieved
/// threshold (or zero) and the next one.
pub fn calculate_milestones(count: u64, milestones: &[Milestone]) -> MilestoneProgress {
    let achieved: Vec<Milestone> = milestones
        .iter()
        .filter(|m| count >= m.count)
        .cloned()
        .collect();

    let next = milestones.iter().find(|m| count < m.count).map(|next| {
        let previous = achieved.last().map(|m| m.count).unwrap_or(0);
        let progress = (count - previous) as f64 / (next.count - previous) as f64 * 100.0;
        NextMilestone {
            milestone: next.clone(),
            progress,
        }
    });

    MilestoneProgress { achieved, next }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(milestones: &[Milestone]) -> Vec<&str> {
        milestones.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn test_zero_count_reports_first_milestone_as_next() {
        let result = calculate_milestones(0, &default_individual_milestones());
        assert!(result.achieved.is_empty());
        let next = result.next.unwrap();
        assert_eq!(next.milestone.count, 5);
        assert_eq!(next.progress, 0.0);
    }

    #[test]
    fn test_exact_threshold_counts_as_achieved() {
        let result = calculate_milestones(15, &default_individual_milestones());
        assert_eq!(names(&result.achieved), vec!["Beginner", "Contributor"]);
        let next = result.next.unwrap();
        assert_eq!(next.milestone.count, 25);
        assert_eq!(next.progress, 0.0);
    }

    #[test]
    fn test_progress_is_linear_between_thresholds() {
        let result = calculate_milestones(20, &default_individual_milestones());
        let next = result.next.unwrap();
        assert_eq!(next.milestone.name, "Active");
        assert!((next.progress - 50.0).abs() < f64::EPSILON);

        let result = calculate_milestones(3, &default_individual_milestones());
        assert!((result.next.unwrap().progress - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_next_at_or_beyond_maximum() {
        let result = calculate_milestones(200, &default_individual_milestones());
        assert_eq!(result.achieved.len(), 6);
        assert!(result.next.is_none());

        let result = calculate_milestones(5000, &default_team_milestones());
        assert_eq!(result.achieved.len(), 5);
        assert!(result.next.is_none());
    }

    #[test]
    fn test_achieved_is_prefix_of_list() {
        let list = default_team_milestones();
        for count in [0, 49, 50, 99, 100, 251, 999] {
            let result = calculate_milestones(count, &list);
            assert_eq!(result.achieved.as_slice(), &list[..result.achieved.len()]);
            if let Some(next) = &result.next {
                assert_eq!(next.milestone, list[result.achieved.len()]);
                assert!(next.milestone.count > count);
            }
        }
    }

    #[test]
    fn test_empty_list() {
        let result = calculate_milestones(10, &[]);
        assert!(result.achieved.is_empty());
        assert!(result.next.is_none());
    }
}
