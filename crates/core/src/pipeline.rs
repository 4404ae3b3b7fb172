use crate::chart;
use crate::config::ReportConfig;
use crate::domain::indicators::LatestSnapshot;
use crate::domain::risk::{self, RiskAssessment};
use crate::error::Result;
use crate::ingest;
use crate::report::{self, ReportContext};
use serde::Serialize;
use std::path::Path;

/// What a run computed, for logging and dry runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub snapshot: LatestSnapshot,
    pub assessment: RiskAssessment,
    pub rows: usize,
}

/// Loads `input`, scores the latest row and writes the dashboard to `output`
/// with the built-in configuration.
pub fn run(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
    generate(input.as_ref(), Some(output.as_ref()), &ReportConfig::default())?;
    Ok(())
}

/// Runs the whole pipeline. With `output = None` nothing is written.
///
/// Every fallible step happens before the write, so an error never leaves a
/// partial report behind.
pub fn generate(input: &Path, output: Option<&Path>, cfg: &ReportConfig) -> Result<RunSummary> {
    let table = ingest::load_indicator_table(input)?;
    let snapshot = LatestSnapshot::from_table(&table)?;
    let assessment = risk::assess(&snapshot, &cfg.risk);

    tracing::info!(
        date = %snapshot.date,
        score = assessment.score,
        status = %assessment.status,
        "scored latest observation"
    );

    let figure = chart::build_figure(&table, &cfg.chart)?;
    let chart_html = figure.to_html_fragment(&cfg.chart.element_id, &cfg.chart.plotly_cdn_url)?;

    let html = report::render(
        &ReportContext {
            assessment: &assessment,
            snapshot: &snapshot,
            chart_html: &chart_html,
        },
        &cfg.risk,
    );

    if let Some(output) = output {
        report::write_atomic(output, &html)?;
    }

    Ok(RunSummary {
        snapshot,
        assessment,
        rows: table.len(),
    })
}
