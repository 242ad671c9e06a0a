use std::fs;
use std::path::PathBuf;

use hunter_core::config::{AppConfig, ConfigOverrides, LoadOptions};
use hunter_core::{parse_activity_batch, ApplicationError, DiscountHunterPipeline, HunterAssessment};

use crate::commands::CommandResult;

#[derive(Debug, Clone)]
pub struct ClassifyArgs {
    pub input: PathBuf,
    pub config_path: Option<PathBuf>,
    pub threshold: Option<f64>,
    pub pretty: bool,
}

pub fn run(args: ClassifyArgs) -> CommandResult {
    match classify(&args) {
        Ok(assessment) => CommandResult::payload("classify", &assessment, args.pretty),
        Err(error) => {
            tracing::error!(
                event_name = "hunter.cli.classify_failed",
                error_class = error.error_class(),
                "{error}"
            );
            CommandResult::failure(
                "classify",
                error.error_class(),
                error.to_string(),
                error.exit_code(),
            )
        }
    }
}

fn classify(args: &ClassifyArgs) -> Result<HunterAssessment, ApplicationError> {
    // An explicit --config must exist; otherwise fall back to conventional locations.
    let config = AppConfig::load(LoadOptions {
        config_path: args.config_path.clone(),
        require_file: args.config_path.is_some(),
        overrides: ConfigOverrides { threshold: args.threshold, ..ConfigOverrides::default() },
    })?;
    crate::logging::init(&config.logging);

    let pipeline = DiscountHunterPipeline::from_config(&config.scoring)?;

    let raw = fs::read_to_string(&args.input).map_err(|error| {
        ApplicationError::Input(format!("could not read `{}`: {error}", args.input.display()))
    })?;
    let records = parse_activity_batch(&raw)?;
    tracing::debug!(
        event_name = "hunter.cli.input_loaded",
        path = %args.input.display(),
        records = records.len(),
        "activity records loaded"
    );

    Ok(pipeline.assess(&records))
}
