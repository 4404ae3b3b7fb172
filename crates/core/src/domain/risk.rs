use crate::config::RiskConfig;
use crate::domain::color::Rgb;
use crate::domain::indicators::LatestSnapshot;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MAX_SCORE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskStatus {
    Stable,
    Caution,
    HighRisk,
}

impl RiskStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Stable => "STABLE",
            Self::Caution => "CAUTION",
            Self::HighRisk => "HIGH RISK",
        }
    }
}

impl fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: u32,
    pub status: RiskStatus,
    pub color: Rgb,
}

/// Additive threshold score, capped at [`MAX_SCORE`].
///
/// A missing or NaN reading never fires its rule: every comparison below is
/// false for NaN, and `None` is matched out explicitly.
pub fn score(spread_10y_2y: Option<f64>, sahm_rule: Option<f64>, cfg: &RiskConfig) -> u32 {
    let mut score: u32 = 0;
    if matches!(spread_10y_2y, Some(v) if v < cfg.spread_10y_2y_below) {
        score = score.saturating_add(cfg.spread_points);
    }
    if matches!(sahm_rule, Some(v) if v >= cfg.sahm_caution_at) {
        score = score.saturating_add(cfg.sahm_caution_points);
    }
    if matches!(sahm_rule, Some(v) if v >= cfg.sahm_trigger_at) {
        score = score.saturating_add(cfg.sahm_trigger_points);
    }
    score.min(MAX_SCORE)
}

pub fn classify(score: u32, cfg: &RiskConfig) -> (RiskStatus, Rgb) {
    if score >= cfg.high_risk_at {
        (RiskStatus::HighRisk, cfg.colors.high_risk)
    } else if score >= cfg.caution_at {
        (RiskStatus::Caution, cfg.colors.caution)
    } else {
        (RiskStatus::Stable, cfg.colors.stable)
    }
}

pub fn assess(snapshot: &LatestSnapshot, cfg: &RiskConfig) -> RiskAssessment {
    let score = score(snapshot.spread_10y_2y, snapshot.sahm_rule, cfg);
    let (status, color) = classify(score, cfg);
    RiskAssessment {
        score,
        status,
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(y2: f64, s: f64) -> RiskAssessment {
        let cfg = RiskConfig::default();
        let score = score(Some(y2), Some(s), &cfg);
        let (status, color) = classify(score, &cfg);
        RiskAssessment {
            score,
            status,
            color,
        }
    }

    #[test]
    fn healthy_curve_and_labor_market_is_stable() {
        for (y2, s) in [(0.7, 0.0), (1.5, 0.29), (3.0, -0.1)] {
            let a = run(y2, s);
            assert_eq!(a.score, 0, "y2={y2} s={s}");
            assert_eq!(a.status, RiskStatus::Stable);
            assert_eq!(a.color.to_string(), "#2ecc71");
        }
    }

    #[test]
    fn flat_curve_alone_stays_stable() {
        for (y2, s) in [(0.69, 0.0), (-1.0, 0.29), (0.0, 0.1)] {
            let a = run(y2, s);
            assert_eq!(a.score, 20, "y2={y2} s={s}");
            assert_eq!(a.status, RiskStatus::Stable);
        }
    }

    #[test]
    fn early_sahm_warning_is_caution() {
        for s in [0.3, 0.4, 0.49] {
            let a = run(0.7, s);
            assert_eq!(a.score, 30, "s={s}");
            assert_eq!(a.status, RiskStatus::Caution);
            assert_eq!(a.color.to_string(), "#f39c12");
        }
    }

    #[test]
    fn inverted_curve_with_sahm_trigger_is_high_risk() {
        for (y2, s) in [(0.69, 0.5), (-0.5, 1.2)] {
            let a = run(y2, s);
            assert_eq!(a.score, 100, "y2={y2} s={s}");
            assert_eq!(a.status, RiskStatus::HighRisk);
            assert_eq!(a.color.to_string(), "#e74c3c");
        }
    }

    #[test]
    fn sahm_trigger_without_inversion_is_high_risk() {
        let a = run(1.0, 0.5);
        assert_eq!(a.score, 80);
        assert_eq!(a.status, RiskStatus::HighRisk);
    }

    #[test]
    fn flat_curve_with_sahm_warning_is_caution() {
        let a = run(0.5, 0.4);
        assert_eq!(a.score, 50);
        assert_eq!(a.status, RiskStatus::Caution);
    }

    #[test]
    fn score_is_monotonic_in_sahm() {
        for y2 in [-1.0, 0.69, 0.7, 2.0] {
            let scores: Vec<u32> = [0.0, 0.29, 0.3, 0.49, 0.5, 2.0]
                .into_iter()
                .map(|s| run(y2, s).score)
                .collect();
            assert!(scores.windows(2).all(|w| w[0] <= w[1]), "y2={y2}: {scores:?}");
        }
    }

    #[test]
    fn attainable_scores() {
        let mut seen: Vec<u32> = [-1.0, 1.0]
            .into_iter()
            .flat_map(|y2| [0.0, 0.4, 0.6].into_iter().map(move |s| run(y2, s).score))
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 20, 30, 50, 80, 100]);
    }

    #[test]
    fn nan_and_missing_never_fire() {
        let cfg = RiskConfig::default();
        assert_eq!(score(Some(f64::NAN), Some(f64::NAN), &cfg), 0);
        assert_eq!(score(None, None, &cfg), 0);
        assert_eq!(score(Some(f64::NAN), Some(0.6), &cfg), 80);
        assert_eq!(score(Some(0.1), None, &cfg), 20);
    }

    #[test]
    fn custom_points_are_capped() {
        let cfg = RiskConfig {
            spread_points: 60,
            ..RiskConfig::default()
        };
        assert_eq!(score(Some(0.0), Some(1.0), &cfg), MAX_SCORE);
    }

    #[test]
    fn huge_custom_points_do_not_overflow() {
        let yaml = "spread_points: 4294967295\nsahm_caution_points: 4294967295\n";
        let cfg: RiskConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.spread_points, u32::MAX);

        let s = score(Some(0.0), Some(0.4), &cfg);
        assert_eq!(s, MAX_SCORE);
        assert_eq!(classify(s, &cfg).0, RiskStatus::HighRisk);
    }

    #[test]
    fn assess_reads_snapshot() {
        let snapshot = LatestSnapshot {
            date: chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            spread_10y_2y: Some(0.5),
            spread_10y_3m: Some(-0.2),
            sahm_rule: Some(0.4),
        };
        let a = assess(&snapshot, &RiskConfig::default());
        assert_eq!(a.score, 50);
        assert_eq!(a.status, RiskStatus::Caution);
        assert_eq!(a.status.to_string(), "CAUTION");
    }

    #[test]
    fn status_serializes_in_screaming_case() {
        assert_eq!(
            serde_json::to_string(&RiskStatus::HighRisk).unwrap(),
            "\"HIGH_RISK\""
        );
        assert_eq!(RiskStatus::HighRisk.label(), "HIGH RISK");
    }
}
