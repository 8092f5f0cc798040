use partsample_core::errors::{ErrorInfo, SamplingError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("particles", "3")
        .with_context("reason", "example")
}

#[test]
fn invalid_input_type_surface() {
    let err = SamplingError::InvalidInputType(sample_info("T001", "wrong particle count"));
    assert_eq!(err.info().code, "T001");
    assert_eq!(err.kind(), "invalid-input-type");
    assert!(err.info().context.contains_key("particles"));
}

#[test]
fn invalid_input_surface() {
    let err = SamplingError::InvalidInput(sample_info("I001", "negative energy"));
    assert_eq!(err.info().code, "I001");
    assert_eq!(err.kind(), "invalid-input");
}

#[test]
fn missing_capability_surface() {
    let err = SamplingError::MissingCapability(
        sample_info("M001", "no sampler").with_hint("register a sampler"),
    );
    assert_eq!(err.kind(), "missing-capability");
    assert_eq!(err.info().hint.as_deref(), Some("register a sampler"));
}

#[test]
fn display_includes_context_and_hint() {
    let err = SamplingError::Config(
        ErrorInfo::new("C001", "bad seed")
            .with_context("seed", "x")
            .with_hint("use an integer"),
    );
    assert_eq!(
        err.to_string(),
        "config error: bad seed (code: C001) | context: [seed=x] | hint: use an integer"
    );
}

#[test]
fn errors_round_trip_json() {
    let err = SamplingError::InvalidInput(sample_info("I002", "off shell"));
    let json = serde_json::to_string(&err).expect("serialize");
    assert!(json.contains("\"kind\":\"InvalidInput\""));
    let decoded: SamplingError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}
