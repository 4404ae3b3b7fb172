pub mod report;

pub use report::{ChartStyle, LineStyle, ReportConfig, RiskConfig, SeriesStyle, TierColors};

use std::path::PathBuf;

pub const DEFAULT_INPUT_PATH: &str = "recession_data.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "final_site.html";

#[derive(Debug, Clone)]
pub struct Settings {
    pub input_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub report_config_path: Option<PathBuf>,
    pub sentry_dsn: Option<String>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds settings from a variable lookup. Blank values count as unset.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|s| !s.trim().is_empty());
        Self {
            input_path: var("RECESSION_DATA_PATH").map(PathBuf::from),
            output_path: var("REPORT_OUTPUT_PATH").map(PathBuf::from),
            report_config_path: var("REPORT_CONFIG_PATH").map(PathBuf::from),
            sentry_dsn: var("SENTRY_DSN"),
        }
    }

    /// Command-line values win over whatever the environment set.
    pub fn with_overrides(
        mut self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        report_config: Option<PathBuf>,
    ) -> Self {
        if input.is_some() {
            self.input_path = input;
        }
        if output.is_some() {
            self.output_path = output;
        }
        if report_config.is_some() {
            self.report_config_path = report_config;
        }
        self
    }

    pub fn input_path_or_default(&self) -> PathBuf {
        self.input_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PATH))
    }

    pub fn output_path_or_default(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH))
    }

    /// Report configuration from `report_config_path`, or the built-in defaults.
    pub fn report_config(&self) -> Result<ReportConfig, crate::error::ConfigError> {
        match &self.report_config_path {
            Some(path) => ReportConfig::load(path),
            None => Ok(ReportConfig::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn falls_back_to_fixed_paths() {
        let settings = Settings {
            input_path: None,
            output_path: None,
            report_config_path: None,
            sentry_dsn: None,
        };
        assert_eq!(settings.input_path_or_default(), PathBuf::from("recession_data.csv"));
        assert_eq!(settings.output_path_or_default(), PathBuf::from("final_site.html"));
        assert_eq!(settings.report_config().unwrap(), ReportConfig::default());
    }

    #[test]
    fn env_overrides_defaults() {
        let settings = env(&[
            ("RECESSION_DATA_PATH", "data/indicators.csv"),
            ("REPORT_OUTPUT_PATH", "  "),
            ("SENTRY_DSN", "https://key@sentry.example/1"),
        ]);

        assert_eq!(settings.input_path_or_default(), PathBuf::from("data/indicators.csv"));
        // Blank means unset.
        assert_eq!(settings.output_path_or_default(), PathBuf::from("final_site.html"));
        assert_eq!(settings.sentry_dsn.as_deref(), Some("https://key@sentry.example/1"));
        assert!(settings.report_config_path.is_none());
    }

    #[test]
    fn flags_override_env() {
        let settings = env(&[
            ("RECESSION_DATA_PATH", "env.csv"),
            ("REPORT_OUTPUT_PATH", "env.html"),
            ("REPORT_CONFIG_PATH", "env.yaml"),
        ])
        .with_overrides(Some(PathBuf::from("flag.csv")), None, Some(PathBuf::from("flag.yaml")));

        assert_eq!(settings.input_path_or_default(), PathBuf::from("flag.csv"));
        assert_eq!(settings.output_path_or_default(), PathBuf::from("env.html"));
        assert_eq!(settings.report_config_path, Some(PathBuf::from("flag.yaml")));
    }

    #[test]
    fn flags_apply_without_env() {
        let settings = env(&[]).with_overrides(None, Some(PathBuf::from("out/site.html")), None);
        assert_eq!(settings.input_path_or_default(), PathBuf::from("recession_data.csv"));
        assert_eq!(settings.output_path_or_default(), PathBuf::from("out/site.html"));
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        let settings = env(&[]).with_overrides(None, None, Some(path.clone()));

        let err = settings.report_config().unwrap_err();
        assert!(matches!(err, ConfigError::Io { path: ref p, .. } if *p == path));
    }

    #[test]
    fn invalid_config_file_is_a_yaml_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.yaml");
        std::fs::write(&path, "risk:\n  spread_points: [not, a, number]\n").unwrap();

        let err = ReportConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Yaml { path: ref p, .. } if *p == path));
    }

    #[test]
    fn config_file_overrides_are_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.yaml");
        std::fs::write(&path, "risk:\n  high_risk_at: 90\n").unwrap();

        let cfg = ReportConfig::load(&path).unwrap();
        assert_eq!(cfg.risk.high_risk_at, 90);
        assert_eq!(cfg.risk.caution_at, 30);
    }
}
