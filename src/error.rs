use thiserror::Error;

use crate::report::ErrorReport;

/// Everything the process can report on standard output, one variant per
/// failure class. The display strings are the wire contract the host
/// matches on, so they are fixed.
#[derive(Error, Debug)]
pub enum PredictError {
    #[error("No image path provided.")]
    ArgumentMissing,

    #[error("Image file not found.")]
    FileNotFound { path: String },

    /// The real load failure reasons go to standard error only; the wire
    /// detail is a constant.
    #[error("Model could not be loaded.")]
    ModelLoadFailed,

    #[error("Prediction failed.")]
    InferenceFailed { details: String },

    #[error("Script execution failed.")]
    Unexpected { details: String },
}

impl PredictError {
    pub fn details(&self) -> Option<String> {
        match self {
            Self::ArgumentMissing => None,
            Self::FileNotFound { path } => Some(format!("Path: {path}")),
            Self::ModelLoadFailed => Some("Failed to initialize model".to_string()),
            Self::InferenceFailed { details } | Self::Unexpected { details } => {
                Some(details.clone())
            }
        }
    }

    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            error: self.to_string(),
            details: self.details(),
        }
    }
}
