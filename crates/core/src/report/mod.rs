//! HTML rendering of the dashboard.
//!
//! The page is a single self-contained document except for the Plotly
//! script, which is pulled from its CDN at view time.

pub mod panels;
pub mod writer;

pub use writer::write_atomic;

use crate::config::{RiskConfig, TierColors};
use crate::domain::color::Rgb;
use crate::domain::indicators::LatestSnapshot;
use crate::domain::risk::RiskAssessment;
use panels::{Panel, PANELS};
use std::fmt::Write as _;

const TIER_TAGS: [(&str, &str); 3] = [
    ("tag-healthy", "HEALTHY"),
    ("tag-caution", "CAUTION"),
    ("tag-danger", "RECESSION SIGNAL"),
];

pub struct ReportContext<'a> {
    pub assessment: &'a RiskAssessment,
    pub snapshot: &'a LatestSnapshot,
    /// Pre-rendered chart markup, inserted verbatim.
    pub chart_html: &'a str,
}

/// Render the full page. Output depends only on the inputs.
pub fn render(ctx: &ReportContext<'_>, risk: &RiskConfig) -> String {
    let a = ctx.assessment;

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Recession Watch Dashboard</title>
    <style>{css}</style>
</head>
<body>

    <div class="top-hero">
        <div style="max-width: 1100px; margin: auto;">
            <div class="status-badge">{status}</div>
            <div class="score-display">{score}% <small style="font-size: 18px; color: #7f8c8d;">Risk Probability</small></div>
            <div class="as-of">Latest observation: {as_of}</div>
            {chart}
        </div>
    </div>

    <div class="content-container">
        <div class="info-window">
{panels}
        </div>
        <div style="height: 50px;"></div>
    </div>

</body>
</html>
"#,
        css = inline_css(a.color, &risk.colors),
        status = a.status.label(),
        score = a.score,
        as_of = ctx.snapshot.date.format("%Y-%m-%d"),
        chart = ctx.chart_html,
        panels = render_panels(ctx.snapshot),
    )
}

fn render_panels(snapshot: &LatestSnapshot) -> String {
    let mut out = String::new();
    for panel in &PANELS {
        render_panel(&mut out, panel, snapshot);
    }
    out
}

fn render_panel(out: &mut String, panel: &Panel, snapshot: &LatestSnapshot) {
    if let Some(heading) = panel.heading {
        let _ = writeln!(out, "            <h2>{}</h2>\n", escape_html(heading));
    }

    let current = panel
        .reading
        .map(|r| {
            format!(
                " Currently at <strong>{}</strong>.",
                format_percent(r.value(snapshot))
            )
        })
        .unwrap_or_default();

    let _ = writeln!(
        out,
        r#"            <div class="explanation-text">
                <strong>{title}</strong><br>
                {summary}{current}
                <table class="range-table">"#,
        title = escape_html(panel.title),
        summary = escape_html(panel.summary),
    );

    for (tier, (class, tag)) in panel.tiers.iter().zip(TIER_TAGS) {
        let _ = writeln!(
            out,
            r#"                    <tr><td>{range}</td><td><span class="range-tag {class}">{tag}</span> {note}</td></tr>"#,
            range = escape_html(tier.range),
            note = escape_html(tier.note),
        );
    }

    let _ = writeln!(
        out,
        r#"                </table>
                <a href="{url}" class="source-link">Source: {label}</a>
            </div>
"#,
        url = escape_html(panel.source_url),
        label = escape_html(panel.source_label),
    );
}

/// Two decimals with a percent sign; `n/a` for a missing reading.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.2}%"),
        _ => "n/a".to_string(),
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn inline_css(accent: Rgb, tiers: &TierColors) -> String {
    format!(
        r#"
        body {{
            font-family: 'Helvetica Neue', Helvetica, Arial, sans-serif;
            background-color: #f4f7f6;
            background-image: radial-gradient(#d1d1d1 1px, transparent 1px);
            background-size: 40px 40px;
            color: #333; margin: 0; padding: 0;
        }}
        .top-hero {{ background: #ffffff; padding: 30px; border-bottom: 1px solid #ddd; box-shadow: 0 4px 10px rgba(0,0,0,0.05); }}
        .content-container {{ max-width: 1000px; margin: 40px auto; padding: 0 20px; }}
        .info-window {{
            background: #2c3e50; color: #ecf0f1; padding: 40px; border-radius: 20px;
            box-shadow: 0 15px 35px rgba(0,0,0,0.2); margin-bottom: 40px;
        }}
        .status-badge {{ display: inline-block; padding: 5px 15px; border-radius: 4px; background: {accent}; color: white; font-weight: bold; }}
        .score-display {{ font-size: 64px; font-weight: 900; margin: 10px 0; }}
        .as-of {{ color: #7f8c8d; font-size: 0.9em; margin-bottom: 10px; }}
        h2 {{ border-bottom: 2px solid {accent}; padding-bottom: 10px; margin-top: 40px; color: #fff; font-size: 1.8em; }}
        .explanation-text {{ line-height: 1.6; margin-bottom: 1.5em; color: #bdc3c7; font-size: 1.05em; text-align: justify; }}
        strong {{ color: white; }}

        .range-table {{ width: 100%; margin-top: 15px; border-collapse: collapse; font-size: 0.9em; background: rgba(0,0,0,0.2); border-radius: 8px; overflow: hidden; }}
        .range-table td {{ padding: 10px; border-bottom: 1px solid rgba(255,255,255,0.05); }}
        .range-tag {{ font-weight: bold; padding: 2px 8px; border-radius: 4px; font-size: 0.8em; }}
        .tag-healthy {{ background: {healthy}; color: white; }}
        .tag-caution {{ background: {caution}; color: white; }}
        .tag-danger {{ background: {danger}; color: white; }}

        .source-link {{ color: {accent}; font-size: 0.85em; text-decoration: none; display: block; margin-top: 15px; font-weight: bold; }}
    "#,
        healthy = tiers.stable,
        caution = tiers.caution,
        danger = tiers.high_risk,
    )
}
