//! The single-image prediction pipeline around a loaded session.

use std::path::Path;

use anyhow::{Result, anyhow};
use ndarray::Array1;
use ort::session::Session;
use tracing::info;

use crate::error::PredictError;
use crate::labels::CLASS_NAMES;
use crate::postprocess::{argmax_and_max, softmax};
use crate::preprocess::Processor;
use crate::report::{Confidence, Prediction};

pub struct Predictor {
    session: Session,
    processor: Processor,
}

impl Predictor {
    pub fn new(session: Session, processor: Processor) -> Self {
        Self { session, processor }
    }

    /// Classifies one image file. Every failure in the pipeline collapses
    /// into the one generic prediction-failure category the host knows.
    pub fn predict(&self, image_path: &str) -> Result<Prediction, PredictError> {
        self.infer(image_path).map_err(|e| PredictError::InferenceFailed {
            details: format!("{e:#}"),
        })
    }

    fn infer(&self, image_path: &str) -> Result<Prediction> {
        info!(path = %image_path, "loading image");
        let batch = self.processor.preprocess_file(Path::new(image_path))?;
        info!("image loaded and resized");

        info!("making prediction");
        let batch = batch.into_dyn();
        let outputs = self.session.run(ort::inputs![batch.view()]?)?;
        let (_name, value) = outputs
            .iter()
            .next()
            .ok_or_else(|| anyhow!("model produced no outputs"))?;
        let raw = value.try_extract_tensor::<f32>()?;

        let scores: Array1<f32> = raw.iter().copied().collect();
        if scores.len() != CLASS_NAMES.len() {
            return Err(anyhow!(
                "expected {} output scores, got {}",
                CLASS_NAMES.len(),
                scores.len()
            ));
        }
        let probs = softmax(&scores);
        info!("prediction completed");

        let (winner, _) = argmax_and_max(&probs);
        Ok(Prediction {
            prediction: CLASS_NAMES[winner].to_string(),
            confidence: Confidence {
                hair: probs[0],
                other: probs[1],
            },
        })
    }
}
