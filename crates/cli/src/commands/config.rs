use std::fs;
use std::path::Path;

use hunter_core::config::{read_env, resolve_config_path, AppConfig, LoadOptions};
use hunter_core::ScoreCombiner;
use toml::Value;

pub fn run(config_path: Option<&Path>) -> String {
    let options = LoadOptions {
        config_path: config_path.map(Path::to_path_buf),
        require_file: config_path.is_some(),
        ..LoadOptions::default()
    };
    let config = match AppConfig::load(options) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let config_file_path = resolve_config_path(config_path);
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());
    let source = |key_path: &str, env_keys: &[&str]| {
        field_source(key_path, env_keys, config_file_doc.as_ref(), config_file_path.as_deref())
    };

    let weights = config.scoring.weights;
    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];

    lines.push(render_line(
        "scoring.threshold",
        &config.scoring.threshold.to_string(),
        source("scoring.threshold", &["HUNTER_SCORING_THRESHOLD"]),
    ));
    lines.push(render_line(
        "scoring.weights.duf",
        &weights.duf.to_string(),
        source("scoring.weights.duf", &["HUNTER_WEIGHT_DUF"]),
    ));
    lines.push(render_line(
        "scoring.weights.discount_proportion",
        &weights.discount_proportion.to_string(),
        source("scoring.weights.discount_proportion", &["HUNTER_WEIGHT_DISCOUNT_PROPORTION"]),
    ));
    lines.push(render_line(
        "scoring.weights.pfds",
        &weights.pfds.to_string(),
        source("scoring.weights.pfds", &["HUNTER_WEIGHT_PFDS"]),
    ));
    lines.push(render_line(
        "scoring.weights.dscaf",
        &weights.dscaf.to_string(),
        source("scoring.weights.dscaf", &["HUNTER_WEIGHT_DSCAF"]),
    ));
    lines.push(render_line(
        "logging.level",
        &config.logging.level,
        source("logging.level", &["HUNTER_LOGGING_LEVEL", "HUNTER_LOG_LEVEL"]),
    ));
    lines.push(render_line(
        "logging.format",
        &format!("{:?}", config.logging.format),
        source("logging.format", &["HUNTER_LOGGING_FORMAT", "HUNTER_LOG_FORMAT"]),
    ));

    if let Ok(combiner) = ScoreCombiner::new(weights) {
        let normalized = combiner.normalized_weights();
        lines.push(format!(
            "normalized weights: duf={:.4} discount_proportion={:.4} pfds={:.4} dscaf={:.4}",
            normalized.duf, normalized.discount_proportion, normalized.pfds, normalized.dscaf
        ));
    }

    lines.join("\n")
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) = env_keys.iter().find(|key| read_env(key).is_some()) {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}
