use crate::core::classifier::DEFAULT_GSOC_ORGS;
use crate::core::milestones::{default_individual_milestones, default_team_milestones};
use crate::domain::model::{Member, Milestone, QualityThresholds};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, StatsError};
use crate::utils::validation::{
    validate_ascending_milestones, validate_non_empty_string, validate_range, validate_url,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Roster and defaults compiled into the binary.
const BUNDLED_CONFIG: &str = include_str!("../../config/devforge.toml");

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub github: GitHubConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub quality: QualityThresholds,
    #[serde(default)]
    pub eligibility: EligibilityConfig,
    #[serde(default)]
    pub milestones: MilestonesConfig,
    #[serde(default)]
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
    /// Seconds a computed report is served before being recomputed; 0 disables.
    pub revalidate_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8080,
            revalidate_seconds: 300,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    pub api_base: String,
    pub web_base: String,
    pub user_agent: String,
    pub token: Option<String>,
    pub per_page: u32,
    pub timeout_seconds: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            web_base: "https://github.com".to_string(),
            user_agent: "DevForge-PR-Stats".to_string(),
            token: None,
            per_page: 100,
            timeout_seconds: 30,
        }
    }
}

impl GitHubConfig {
    /// The configured token, ignoring blanks and unresolved `${VAR}` placeholders.
    pub fn resolved_token(&self) -> Option<&str> {
        self.token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty() && !t.starts_with("${"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub concurrent_requests: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            concurrent_requests: 8,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EligibilityConfig {
    pub organizations: Vec<String>,
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            organizations: DEFAULT_GSOC_ORGS.iter().map(|o| o.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MilestonesConfig {
    pub individual: Vec<Milestone>,
    pub team: Vec<Milestone>,
}

impl Default for MilestonesConfig {
    fn default() -> Self {
        Self {
            individual: default_individual_milestones(),
            team: default_team_milestones(),
        }
    }
}

impl TomlConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| StatsError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// The configuration shipped with the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_toml_str(BUNDLED_CONFIG)
    }

    /// Replace `${VAR_NAME}` with the environment value; unset variables stay verbatim.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| StatsError::ProcessingError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("github.api_base", &self.github.api_base)?;
        validate_url("github.web_base", &self.github.web_base)?;
        validate_non_empty_string("github.user_agent", &self.github.user_agent)?;
        validate_range("github.per_page", self.github.per_page, 1, 100)?;
        validate_range("github.timeout_seconds", self.github.timeout_seconds, 1, 600)?;
        validate_range("fetch.concurrent_requests", self.fetch.concurrent_requests, 1, 64)?;
        validate_non_empty_string("server.bind", &self.server.bind)?;
        validate_range("server.port", self.server.port, 1, u16::MAX)?;

        if self.members.is_empty() {
            return Err(StatsError::MissingConfigError {
                field: "members".to_string(),
            });
        }
        for member in &self.members {
            validate_non_empty_string("members.name", &member.name)?;
            validate_non_empty_string("members.github", &member.github)?;
        }

        validate_ascending_milestones("milestones.individual", &self.milestones.individual)?;
        validate_ascending_milestones("milestones.team", &self.milestones.team)?;

        tracing::debug!(
            "✅ Configuration validated: {} members, {} organizations",
            self.members.len(),
            self.eligibility.organizations.len()
        );
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn members(&self) -> &[Member] {
        &self.members
    }

    fn organizations(&self) -> &[String] {
        &self.eligibility.organizations
    }

    fn quality_thresholds(&self) -> QualityThresholds {
        self.quality
    }

    fn individual_milestones(&self) -> &[Milestone] {
        &self.milestones.individual
    }

    fn team_milestones(&self) -> &[Milestone] {
        &self.milestones.team
    }

    fn concurrent_requests(&self) -> usize {
        self.fetch.concurrent_requests
    }

    fn web_base(&self) -> &str {
        &self.github.web_base
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
