pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::github::GitHubClient;
pub use app::report::{ReportFormat, ReportWriter};
pub use config::{cli::LocalStorage, TomlConfig};
pub use core::stats::StatsEngine;
pub use utils::error::{Result, StatsError};
