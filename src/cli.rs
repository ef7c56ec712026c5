use clap::Parser;
use std::path::PathBuf;

use crate::model;

#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Image file to classify. Optional at the parser level so the missing
    /// case is reported through the JSON contract instead of usage text.
    pub image: Option<String>,

    /// Model artifact path; defaults to hair_model.onnx beside the executable
    #[arg(long)]
    pub model: Option<PathBuf>,
}

impl Args {
    pub fn model_path(&self) -> PathBuf {
        self.model.clone().unwrap_or_else(model::default_model_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_path_is_positional() {
        let args = Args::try_parse_from(["hair-predict", "/tmp/a.png"]).unwrap();
        assert_eq!(args.image.as_deref(), Some("/tmp/a.png"));
        assert!(args.model.is_none());
    }

    #[test]
    fn missing_image_parses() {
        let args = Args::try_parse_from(["hair-predict"]).unwrap();
        assert!(args.image.is_none());
    }

    #[test]
    fn model_override() {
        let args = Args::try_parse_from(["hair-predict", "--model", "/models/m.onnx", "a.png"]).unwrap();
        assert_eq!(args.model_path(), PathBuf::from("/models/m.onnx"));
    }
}
