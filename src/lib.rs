pub mod cli;
pub mod error;
pub mod labels;
pub mod model;
pub mod postprocess;
pub mod predictor;
pub mod preprocess;
pub mod report;

pub use crate::cli::Args;
pub use crate::error::PredictError;
pub use crate::labels::CLASS_NAMES;
pub use crate::model::{default_model_path, load_session};
pub use crate::postprocess::{argmax_and_max, softmax};
pub use crate::predictor::Predictor;
pub use crate::preprocess::{PreprocessConfig, Processor};
pub use crate::report::{Confidence, ErrorReport, Prediction};
