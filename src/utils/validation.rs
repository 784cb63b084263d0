use crate::domain::model::Milestone;
use crate::utils::error::{Result, StatsError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(StatsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(StatsError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(StatsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(StatsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(StatsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StatsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(StatsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Milestone lists are read as ordered thresholds: counts must strictly increase.
pub fn validate_ascending_milestones(field_name: &str, milestones: &[Milestone]) -> Result<()> {
    if milestones.is_empty() {
        return Err(StatsError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    for pair in milestones.windows(2) {
        if pair[1].count <= pair[0].count {
            return Err(StatsError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format!("{} -> {}", pair[0].count, pair[1].count),
                reason: "Milestone counts must be strictly ascending".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milestone(count: u64) -> Milestone {
        Milestone {
            name: format!("m{}", count),
            count,
            emoji: "⭐".to_string(),
        }
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("github.api_base", "https://api.github.com").is_ok());
        assert!(validate_url("github.api_base", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("github.api_base", "").is_err());
        assert!(validate_url("github.api_base", "invalid-url").is_err());
        assert!(validate_url("github.api_base", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("github.per_page", 100, 1, 100).is_ok());
        assert!(validate_range("github.per_page", 0, 1, 100).is_err());
        assert!(validate_range("github.per_page", 101, 1, 100).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("members.github", "octocat").is_ok());
        assert!(validate_non_empty_string("members.github", "   ").is_err());
    }

    #[test]
    fn test_validate_ascending_milestones() {
        let ascending = vec![milestone(5), milestone(15), milestone(25)];
        assert!(validate_ascending_milestones("milestones.individual", &ascending).is_ok());

        let unordered = vec![milestone(15), milestone(5)];
        assert!(validate_ascending_milestones("milestones.individual", &unordered).is_err());

        let duplicated = vec![milestone(5), milestone(5)];
        assert!(validate_ascending_milestones("milestones.individual", &duplicated).is_err());

        assert!(validate_ascending_milestones("milestones.team", &[]).is_err());
    }
}
