pub mod cli;
pub mod toml_config;

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::app::report::ReportFormat;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "devforge-stats")]
#[command(about = "Pull-request statistics for the DevForge club roster")]
pub struct CliConfig {
    #[arg(long, global = true, help = "TOML configuration file (defaults to the bundled roster)")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Serve the JSON endpoints
    Serve {
        #[arg(long)]
        bind: Option<String>,

        #[arg(long)]
        port: Option<u16>,
    },
    /// Compute the PR breakdown once and write a report file
    Report {
        #[arg(long, default_value = "./output")]
        output_path: String,

        #[arg(long, value_enum, default_value = "json")]
        format: ReportFormat,
    },
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Settings from `--config`, or the bundled file, with `serve` overrides applied.
    pub fn load_settings(&self) -> Result<TomlConfig> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::info!("📄 Loading configuration from {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::bundled()?,
        };

        if let Command::Serve { bind, port } = &self.command {
            if let Some(bind) = bind {
                settings.server.bind = bind.clone();
            }
            if let Some(port) = port {
                settings.server.port = *port;
            }
        }
        Ok(settings)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_serve_overrides_bundled_settings() {
        let cli = CliConfig::parse_from(["devforge-stats", "serve", "--port", "9090"]);
        let settings = cli.load_settings().unwrap();
        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.server.bind, "127.0.0.1");
    }

    #[test]
    fn test_report_arguments() {
        let cli = CliConfig::parse_from([
            "devforge-stats",
            "report",
            "--format",
            "csv",
            "--output-path",
            "/tmp/reports",
            "--verbose",
        ]);
        assert!(cli.verbose);
        match cli.command {
            Command::Report {
                output_path,
                format,
            } => {
                assert_eq!(output_path, "/tmp/reports");
                assert_eq!(format, ReportFormat::Csv);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
