//! JSON payloads written to standard output, one object per invocation.

use serde::{Deserialize, Serialize};

/// Per-class probabilities, keyed the way the host expects them. Field
/// order follows the class label set.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Confidence {
    pub hair: f32,
    pub other: f32,
}

/// Successful classification result.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Prediction {
    pub prediction: String,
    pub confidence: Confidence,
}

/// Failure payload. `details` is omitted when there is nothing to add.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ErrorReport {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
