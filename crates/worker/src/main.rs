use anyhow::Context;
use clap::Parser;
use recession_watch_core::config::Settings;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "recession_watch_worker")]
struct Args {
    /// Indicator CSV. Defaults to RECESSION_DATA_PATH, then recession_data.csv.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Report destination. Defaults to REPORT_OUTPUT_PATH, then final_site.html.
    #[arg(long)]
    output: Option<PathBuf>,

    /// YAML overrides for thresholds, colors and chart styling.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Score and log the latest observation without writing the report.
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env();
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();
    let settings = settings.with_overrides(args.input, args.output, args.config);

    if let Err(err) = run(&settings, args.dry_run) {
        sentry_anyhow::capture_anyhow(&err);
        tracing::error!(error = %err, "dashboard build failed");
        return Err(err);
    }
    Ok(())
}

fn run(settings: &Settings, dry_run: bool) -> anyhow::Result<()> {
    let input = settings.input_path_or_default();
    let output = settings.output_path_or_default();
    let cfg = settings.report_config().context("load report config failed")?;

    let summary = recession_watch_core::generate(
        &input,
        (!dry_run).then_some(output.as_path()),
        &cfg,
    )
    .with_context(|| format!("build dashboard from {} failed", input.display()))?;

    if dry_run {
        tracing::info!(
            dry_run = true,
            date = %summary.snapshot.date,
            score = summary.assessment.score,
            status = %summary.assessment.status,
            "dashboard not written (dry-run)"
        );
        return Ok(());
    }

    println!(
        "Dashboard updated: {} ({} {}%)",
        output.display(),
        summary.assessment.status,
        summary.assessment.score
    );
    Ok(())
}

fn init_sentry(settings: &Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
