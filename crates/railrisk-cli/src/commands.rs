use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::Parser;
use railrisk_core::{
    assess, estimate_lifetime, review_classification, review_model_lifetime, ClassVerdict,
    PredictionRequest,
};
use railrisk_data::load_reference_data;
use railrisk_model::{
    build_classifier, build_regressor, classifier_features, inspect_model, regressor_features,
    Classifier, ModelSource,
};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::cli::{Cli, Command};
use crate::error::{CommandError, InputError};
use crate::fallback::{fallback_payload, Flow};
use crate::logging::init_logging;
use crate::settings::Settings;

/// What the binary should do after parsing.
#[derive(Debug)]
pub enum Outcome {
    /// JSON payload for stdout.
    Report(Value),
    /// Help or version text, printed as clap renders it.
    Display(clap::Error),
}

/// Parses `args`, runs the command and returns the payload. Every failure
/// past help/version output becomes a fallback payload.
pub fn run(args: Vec<OsString>) -> Outcome {
    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(err) => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                return Outcome::Display(err);
            }
            let rendered = err.render().to_string();
            let err = InputError::Usage(rendered.lines().next().unwrap_or_default().to_string());
            return Outcome::Report(fallback_payload(Flow::guess(&args), &err.to_string()));
        }
    };

    let settings = Settings::from_env().with_overrides(&cli);
    init_logging(&settings.log_filter);

    let flow = Flow::of(&cli.command);
    match execute(&cli.command, &settings) {
        Ok(value) => Outcome::Report(value),
        Err(err) => {
            warn!(command = cli.command.name(), error = %err, "command failed, emitting fallback");
            Outcome::Report(fallback_payload(flow, &err.to_string()))
        }
    }
}

pub fn execute(command: &Command, settings: &Settings) -> Result<Value, CommandError> {
    info!(command = command.name(), "evaluating");
    match command {
        Command::Assess(args) => {
            let request = args.to_request()?;
            let records = load_reference_data(&settings.data_path)?;
            let report = assess(&records, &request);
            debug!(
                verdict = report.prediction.label(),
                score = report.risk_score,
                "assessment complete"
            );
            Ok(serde_json::to_value(report)?)
        }
        Command::Lifetime(args) => {
            let request = args.to_request()?;
            let records = load_reference_data(&settings.data_path)?;
            Ok(serde_json::to_value(estimate_lifetime(&records, &request))?)
        }
        Command::Classify(args) => {
            let request = args.to_request()?;
            let model = build_classifier(ModelSource::json(&settings.classifier_model))?;
            let verdict = classify(model.as_ref(), &request)?;
            let records = load_reference_data(&settings.data_path)?;
            let report = review_classification(
                verdict,
                model.name(),
                model.n_features(),
                &records,
                &request,
            );
            Ok(serde_json::to_value(report)?)
        }
        Command::LifetimeModel(args) => {
            let request = args.to_request()?;
            let model = build_regressor(ModelSource::json(&settings.lifetime_model))?;
            let hours = model.predict(&regressor_features(&request))?;
            debug!(hours, model = model.name(), "regressor prediction");
            Ok(serde_json::to_value(review_model_lifetime(
                hours,
                model.name(),
                &request,
            ))?)
        }
        Command::Predict(args) => {
            let request = args.to_request()?;
            let model = build_classifier(ModelSource::json(&settings.classifier_model))?;
            Ok(serde_json::to_value(classify(model.as_ref(), &request)?)?)
        }
        Command::InspectModel(args) => {
            let path = args
                .path
                .clone()
                .unwrap_or_else(|| settings.classifier_model.clone());
            Ok(serde_json::to_value(inspect_model(ModelSource::json(path))?)?)
        }
    }
}

fn classify(
    model: &dyn Classifier,
    request: &PredictionRequest,
) -> Result<ClassVerdict, CommandError> {
    let out = model.classify(&classifier_features(request))?;
    debug!(class = out.class, model = model.name(), "classifier prediction");
    Ok(ClassVerdict::from_prediction(
        out.class,
        out.probabilities.as_deref(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str =
        "Vendor ID,Part type,material,Defect,Lifetime (Days),Region,Route Type,Warranty (Years)";

    fn with_data(rows: &str) -> (tempfile::NamedTempFile, Settings) {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "{HEADER}").expect("write header");
        write!(file, "{rows}").expect("write rows");
        let settings = Settings {
            data_path: file.path().to_path_buf(),
            ..Settings::default()
        };
        (file, settings)
    }

    fn parse(args: &[&str]) -> Command {
        Cli::try_parse_from(args).expect("parse").command
    }

    #[test]
    fn assess_with_empty_data_uses_default_estimate() {
        let (_file, settings) = with_data("");
        let value = execute(&parse(&["railrisk", "assess"]), &settings).expect("assess");
        assert_eq!(
            value["historical_data"]["data_source"],
            "default estimate (no historical data)"
        );
        assert_eq!(value["prediction"], "MODERATE RISK");
    }

    #[test]
    fn malformed_material_is_an_input_error() {
        let (_file, settings) = with_data("");
        let err = execute(&parse(&["railrisk", "assess", "100", "Rail Clips", "soft"]), &settings)
            .expect_err("bad material");
        assert!(matches!(err, CommandError::Input(_)));
        assert!(err.to_string().contains("material"));
    }

    #[test]
    fn missing_model_is_a_model_error() {
        let settings = Settings {
            classifier_model: "/no/such/model.json".into(),
            ..Settings::default()
        };
        let err = execute(&parse(&["railrisk", "predict"]), &settings).expect_err("no model");
        assert!(matches!(err, CommandError::Model(_)));
    }

    #[test]
    fn unknown_subcommand_falls_back_to_risk_payload() {
        let args = ["railrisk", "forecast"].iter().map(OsString::from).collect();
        match run(args) {
            Outcome::Report(value) => {
                assert_eq!(value["prediction"], "PASS");
                assert!(value["error"].is_string());
            }
            Outcome::Display(err) => panic!("unexpected display: {err}"),
        }
    }

    #[test]
    fn help_is_displayed_not_reported() {
        let args = ["railrisk", "--help"].iter().map(OsString::from).collect();
        assert!(matches!(run(args), Outcome::Display(_)));
    }
}
