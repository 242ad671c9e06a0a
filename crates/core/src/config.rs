use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scoring::{MetricWeights, DEFAULT_THRESHOLD, DEFAULT_WEIGHTS, MIN_WEIGHT_SUM};

pub const DEFAULT_CONFIG_FILE: &str = "hunter.toml";
pub const NESTED_CONFIG_FILE: &str = "config/hunter.toml";

#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    pub scoring: ScoringConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoringConfig {
    pub weights: MetricWeights,
    pub threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self { weights: DEFAULT_WEIGHTS, threshold: DEFAULT_THRESHOLD }
    }
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: LogFormat::Compact }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub threshold: Option<f64>,
    pub log_level: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("environment variable interpolation failed for `{var}`")]
    MissingEnvInterpolation { var: String },
    #[error("unterminated environment interpolation expression")]
    UnterminatedInterpolation,
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

impl AppConfig {
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let maybe_path = resolve_config_path(options.config_path.as_deref());

        if let Some(path) = maybe_path {
            let patch = read_patch(&path)?;
            config.apply_patch(patch);
        } else if options.require_file {
            let expected =
                options.config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
            return Err(ConfigError::MissingConfigFile(expected));
        }

        config.apply_env_overrides()?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        Ok(config)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(scoring) = patch.scoring {
            if let Some(threshold) = scoring.threshold {
                self.scoring.threshold = threshold;
            }
            if let Some(weights) = scoring.weights {
                let current = &mut self.scoring.weights;
                if let Some(duf) = weights.duf {
                    current.duf = duf;
                }
                if let Some(discount_proportion) = weights.discount_proportion {
                    current.discount_proportion = discount_proportion;
                }
                if let Some(pfds) = weights.pfds {
                    current.pfds = pfds;
                }
                if let Some(dscaf) = weights.dscaf {
                    current.dscaf = dscaf;
                }
            }
        }

        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(value) = read_env("HUNTER_SCORING_THRESHOLD") {
            self.scoring.threshold = parse_f64("HUNTER_SCORING_THRESHOLD", &value)?;
        }
        if let Some(value) = read_env("HUNTER_WEIGHT_DUF") {
            self.scoring.weights.duf = parse_f64("HUNTER_WEIGHT_DUF", &value)?;
        }
        if let Some(value) = read_env("HUNTER_WEIGHT_DISCOUNT_PROPORTION") {
            self.scoring.weights.discount_proportion =
                parse_f64("HUNTER_WEIGHT_DISCOUNT_PROPORTION", &value)?;
        }
        if let Some(value) = read_env("HUNTER_WEIGHT_PFDS") {
            self.scoring.weights.pfds = parse_f64("HUNTER_WEIGHT_PFDS", &value)?;
        }
        if let Some(value) = read_env("HUNTER_WEIGHT_DSCAF") {
            self.scoring.weights.dscaf = parse_f64("HUNTER_WEIGHT_DSCAF", &value)?;
        }

        let log_level = read_env("HUNTER_LOGGING_LEVEL").or_else(|| read_env("HUNTER_LOG_LEVEL"));
        if let Some(value) = log_level {
            self.logging.level = value;
        }
        let log_format =
            read_env("HUNTER_LOGGING_FORMAT").or_else(|| read_env("HUNTER_LOG_FORMAT"));
        if let Some(value) = log_format {
            self.logging.format = value.parse()?;
        }

        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(threshold) = overrides.threshold {
            self.scoring.threshold = threshold;
        }
        if let Some(log_level) = overrides.log_level {
            self.logging.level = log_level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_scoring(&self.scoring)?;
        validate_logging(&self.logging)?;
        Ok(())
    }
}

/// Explicit path if it exists, otherwise the first conventional location found.
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then_some(path.to_path_buf());
    }

    [PathBuf::from(DEFAULT_CONFIG_FILE), PathBuf::from(NESTED_CONFIG_FILE)]
        .into_iter()
        .find(|path| path.exists())
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;

    let interpolated = interpolate_env_vars(&raw)?;
    toml::from_str::<ConfigPatch>(&interpolated)
        .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}

fn interpolate_env_vars(input: &str) -> Result<String, ConfigError> {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && matches!(chars.peek(), Some('{')) {
            chars.next();
            let mut key = String::new();

            loop {
                match chars.next() {
                    Some('}') => break,
                    Some(next) => key.push(next),
                    None => return Err(ConfigError::UnterminatedInterpolation),
                }
            }

            let value = env::var(&key)
                .map_err(|_| ConfigError::MissingEnvInterpolation { var: key.clone() })?;
            output.push_str(&value);
            continue;
        }

        output.push(ch);
    }

    Ok(output)
}

fn validate_scoring(scoring: &ScoringConfig) -> Result<(), ConfigError> {
    let weights = [
        ("scoring.weights.duf", scoring.weights.duf),
        ("scoring.weights.discount_proportion", scoring.weights.discount_proportion),
        ("scoring.weights.pfds", scoring.weights.pfds),
        ("scoring.weights.dscaf", scoring.weights.dscaf),
    ];
    if let Some((key, _)) = weights.iter().find(|(_, weight)| !weight.is_finite()) {
        return Err(ConfigError::Validation(format!("{key} must be a finite number")));
    }

    if scoring.weights.sum().abs() < MIN_WEIGHT_SUM {
        return Err(ConfigError::Validation(
            "scoring.weights must not sum to zero (weights are normalized by their sum)"
                .to_string(),
        ));
    }

    if !scoring.threshold.is_finite() {
        return Err(ConfigError::Validation(
            "scoring.threshold must be a finite number".to_string(),
        ));
    }

    Ok(())
}

fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
    let level = logging.level.trim().to_ascii_lowercase();
    match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ConfigError::Validation(
            "logging.level must be one of trace|debug|info|warn|error".to_string(),
        )),
    }
}

/// Reads an override variable; blank values count as unset.
pub fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_f64(key: &str, value: &str) -> Result<f64, ConfigError> {
    value.trim().parse::<f64>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    scoring: Option<ScoringPatch>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct ScoringPatch {
    threshold: Option<f64>,
    weights: Option<WeightsPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct WeightsPatch {
    duf: Option<f64>,
    discount_proportion: Option<f64>,
    pfds: Option<f64>,
    dscaf: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}
