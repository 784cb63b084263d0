use anyhow::Context;
use clap::Parser;
use devforge_stats::app::report::render_summary;
use devforge_stats::config::Command;
use devforge_stats::utils::{logger, validation::Validate, validation::validate_path};
use devforge_stats::{
    server, CliConfig, GitHubClient, LocalStorage, ReportFormat, ReportWriter, StatsEngine,
    TomlConfig,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting devforge-stats");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = cli.load_settings().context("failed to load configuration")?;
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    match cli.command {
        Command::Serve { .. } => server::serve(settings).await,
        Command::Report {
            output_path,
            format,
        } => report(settings, output_path, format).await,
    }
}

async fn report(
    settings: TomlConfig,
    output_path: String,
    format: ReportFormat,
) -> anyhow::Result<()> {
    validate_path("output_path", &output_path)?;

    let source = GitHubClient::new(&settings.github)?;
    let engine = StatsEngine::new(source, settings);

    tracing::info!(
        "🔍 Fetching PR breakdown for {} members",
        engine.config().members.len()
    );
    let breakdown = engine.breakdown().await;
    print!("{}", render_summary(&breakdown));

    let writer = ReportWriter::new(LocalStorage::new(output_path.clone()));
    let file_name = writer
        .write(&breakdown, format)
        .await
        .context("failed to write report")?;

    tracing::info!("📁 Report saved to {}/{}", output_path, file_name);
    println!("📁 Report saved to {}/{}", output_path, file_name);
    Ok(())
}
