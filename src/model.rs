//! ONNX session construction for the classifier artifact.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ort::session::builder::{GraphOptimizationLevel, SessionBuilder};
use ort::session::Session;
use tracing::{info, warn};

/// Fixed artifact name, resolved next to the executable.
pub const MODEL_FILE: &str = "hair_model.onnx";

/// Set to skip graph optimizations on the first load attempt.
pub const ENV_NO_GRAPH_OPT: &str = "HAIR_PREDICT_NO_GRAPH_OPT";
/// Set to allocate incrementally instead of from a pre-planned pattern.
pub const ENV_NO_MEM_PATTERN: &str = "HAIR_PREDICT_NO_MEM_PATTERN";

pub fn default_model_path() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(MODEL_FILE)))
        .unwrap_or_else(|| PathBuf::from(MODEL_FILE))
}

fn builder(conservative: bool) -> Result<SessionBuilder> {
    let level = if conservative || env::var_os(ENV_NO_GRAPH_OPT).is_some() {
        GraphOptimizationLevel::Disable
    } else {
        GraphOptimizationLevel::Level3
    };
    let mut builder = Session::builder()?
        .with_optimization_level(level)?
        .with_intra_threads(1)?;
    if conservative || env::var_os(ENV_NO_MEM_PATTERN).is_some() {
        builder = builder.with_memory_pattern(false)?;
    }
    Ok(builder)
}

/// Loads the session: an optimized attempt first, then a conservative
/// retry with optimizations and memory planning off. Some exports of the
/// artifact only deserialize under the conservative options.
pub fn load_session(path: &Path) -> Result<Session> {
    ort::init().commit()?;
    info!(path = %path.display(), "loading model");

    match builder(false)?.commit_from_file(path) {
        Ok(session) => {
            info!("model loaded");
            Ok(session)
        }
        Err(first) => {
            warn!(error = %first, "optimized load failed, retrying with conservative session options");
            let session = builder(true)?
                .commit_from_file(path)
                .context("conservative load attempt failed")?;
            info!("model loaded with conservative session options");
            Ok(session)
        }
    }
}
