use crate::errors::TxtStatResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use toml;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ReportConfig {
    /// Source label used when text is piped through standard input.
    pub stdin_label: String,
}
impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            stdin_label: "stdin".into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct InputConfig {
    /// Refuse input files larger than this, in megabytes. `None` means no limit.
    pub max_file_size_mb: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
#[derive(Default)]
pub struct Config {
    pub report: ReportConfig,
    pub input: InputConfig,
}

impl Config {
    /// Read `txtstat.local` from `config_dir` if it is there. Never writes anything.
    pub fn load(config_dir: &Path) -> TxtStatResult<Self> {
        let mut config = Config::default();

        let user_config_path = config_dir.join("txtstat.local");
        if user_config_path.is_file() {
            let user_config_content = fs::read_to_string(&user_config_path)?;
            let user_config: Config = toml::from_str(&user_config_content)?;

            config = merge_configs(config, user_config);

            tracing::debug!("Loaded user config from: {}", user_config_path.display());
        } else {
            tracing::debug!(
                "Using default configuration. Create '{}' to customize.",
                user_config_path.display()
            );
        }

        Ok(config)
    }
}

/// Overlay the user's values on the defaults. A blank stdin label keeps the default.
fn merge_configs(mut default: Config, user: Config) -> Config {
    // --- ReportConfig ---
    let label = user.report.stdin_label.trim();
    if !label.is_empty() {
        default.report.stdin_label = label.to_owned();
    }

    // --- InputConfig ---
    default.input.max_file_size_mb = user.input.max_file_size_mb;

    default
}

#[test]
fn merge_configs_keeps_default_label_when_blank() {
    let mut user_cfg = Config::default();
    user_cfg.report.stdin_label = "   ".into();
    user_cfg.input.max_file_size_mb = Some(4);

    let merged = merge_configs(Config::default(), user_cfg);

    assert_eq!(merged.report.stdin_label, "stdin");
    assert_eq!(merged.input.max_file_size_mb, Some(4));
}

#[test]
fn shipped_example_config_parses_to_defaults() {
    let example = include_str!("../../default-txtstat.conf");
    let parsed: Config = toml::from_str(example).expect("example config is valid TOML");

    assert_eq!(parsed.report.stdin_label, "stdin");
    assert_eq!(parsed.input.max_file_size_mb, None);
}

#[test]
fn load_reads_user_overrides_without_writing() {
    let cfg_dir = tempfile::tempdir().unwrap();
    let cfg_path = cfg_dir.path();

    let user_toml = r#"
        [report]
        stdin_label = "<pipe>"

        [input]
        max_file_size_mb = 8
    "#;
    fs::write(cfg_path.join("txtstat.local"), user_toml).unwrap();

    let cfg = Config::load(cfg_path).expect("Config::load should succeed");

    assert!(!cfg_path.join("txtstat.conf").exists());

    assert_eq!(cfg.report.stdin_label, "<pipe>");
    assert_eq!(cfg.input.max_file_size_mb, Some(8));
}

#[test]
fn load_rejects_malformed_user_config() {
    let cfg_dir = tempfile::tempdir().unwrap();
    fs::write(cfg_dir.path().join("txtstat.local"), "[report\nstdin_label = 1").unwrap();

    let err = Config::load(cfg_dir.path()).unwrap_err();
    assert!(matches!(err, crate::errors::TxtStatError::Config(_)));
}

#[test]
fn load_missing_or_unusable_dir_yields_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let not_a_dir = tmp.path().join("plain-file");
    fs::write(&not_a_dir, "").unwrap();

    for dir in [tmp.path().join("absent"), not_a_dir.join("txtstat")] {
        let cfg = Config::load(&dir).expect("missing config is not an error");
        assert_eq!(cfg.report.stdin_label, "stdin");
        assert!(!dir.exists());
    }
}
