use hair_predict::error::PredictError;
use hair_predict::report::{Confidence, Prediction};
use serde_json::{Value, json};

fn to_value<T: serde::Serialize>(payload: &T) -> Value {
    serde_json::to_value(payload).unwrap()
}

#[test]
fn prediction_payload_shape() {
    let prediction = Prediction {
        prediction: "hair".to_string(),
        confidence: Confidence {
            hair: 0.75,
            other: 0.25,
        },
    };
    assert_eq!(
        to_value(&prediction),
        json!({"prediction": "hair", "confidence": {"hair": 0.75, "other": 0.25}})
    );
}

#[test]
fn missing_argument_payload_has_no_details() {
    let value = to_value(&PredictError::ArgumentMissing.to_report());
    assert_eq!(value, json!({"error": "No image path provided."}));
}

#[test]
fn missing_file_payload_carries_the_path() {
    let err = PredictError::FileNotFound {
        path: "/tmp/does-not-exist.png".to_string(),
    };
    assert_eq!(
        to_value(&err.to_report()),
        json!({
            "error": "Image file not found.",
            "details": "Path: /tmp/does-not-exist.png"
        })
    );
}

#[test]
fn load_failure_payload_uses_the_fixed_detail() {
    assert_eq!(
        to_value(&PredictError::ModelLoadFailed.to_report()),
        json!({
            "error": "Model could not be loaded.",
            "details": "Failed to initialize model"
        })
    );
}

#[test]
fn prediction_failure_payload_keeps_the_cause() {
    let err = PredictError::InferenceFailed {
        details: "failed to decode image /tmp/x.png: unsupported format".to_string(),
    };
    let value = to_value(&err.to_report());
    assert_eq!(value["error"], "Prediction failed.");
    assert!(!value["details"].as_str().unwrap().is_empty());
}

#[test]
fn unexpected_failure_payload() {
    let err = PredictError::Unexpected {
        details: "broken pipe".to_string(),
    };
    assert_eq!(
        to_value(&err.to_report()),
        json!({"error": "Script execution failed.", "details": "broken pipe"})
    );
}

#[test]
fn payloads_serialize_to_a_single_line() {
    let err = PredictError::InferenceFailed {
        details: "anything".to_string(),
    };
    let line = serde_json::to_string(&err.to_report()).unwrap();
    assert!(!line.contains('\n'));
}
