use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::error;
use tracing_subscriber::EnvFilter;

use hair_predict::cli::Args;
use hair_predict::error::PredictError;
use hair_predict::model;
use hair_predict::predictor::Predictor;
use hair_predict::preprocess::{PreprocessConfig, Processor};

fn main() -> ExitCode {
    init_logging();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, details = ?err.details(), "run failed");
            let line = serde_json::to_string(&err.to_report())
                .unwrap_or_else(|_| String::from(r#"{"error": "Script execution failed."}"#));
            // Best effort; the exit code still reports the failure if
            // stdout is gone.
            let _ = emit_line(&line);
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<(), PredictError> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            return Err(PredictError::Unexpected {
                details: e.to_string(),
            });
        }
    };

    // Model load comes before argument validation, matching the startup
    // order the host relies on.
    let session = model::load_session(&args.model_path()).map_err(|e| {
        error!(error = %format!("{e:#}"), "failed to load model");
        PredictError::ModelLoadFailed
    })?;

    let image_path = args.image.ok_or(PredictError::ArgumentMissing)?;
    if !Path::new(&image_path).exists() {
        return Err(PredictError::FileNotFound { path: image_path });
    }

    let predictor = Predictor::new(session, Processor::new(PreprocessConfig::default()));
    let prediction = predictor.predict(&image_path)?;

    let line = serde_json::to_string(&prediction).map_err(|e| PredictError::Unexpected {
        details: e.to_string(),
    })?;
    emit_line(&line).map_err(|e| PredictError::Unexpected {
        details: e.to_string(),
    })
}

/// The single stdout write of the process: one JSON object, newline,
/// blocking flush. The downstream reader parses this line.
fn emit_line(line: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{line}")?;
    stdout.flush()
}

fn init_logging() {
    // Default keeps stage diagnostics visible and ONNX Runtime quiet;
    // RUST_LOG overrides both.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,ort=error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
