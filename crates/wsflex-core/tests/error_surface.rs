use wsflex_core::errors::{ErrorInfo, WsError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("n", 5)
        .with_context("k", 6.0)
}

#[test]
fn graph_error_surface() {
    let err = WsError::Graph(sample_info("self-loop", "self loops are not allowed"));
    assert_eq!(err.code(), "self-loop");
    assert!(err.info().context.contains_key("n"));
}

#[test]
fn invalid_degree_surface() {
    let err = WsError::InvalidDegree(sample_info("k-exceeds-n", "k>n"));
    assert_eq!(err.info().code, "k-exceeds-n");
    assert_eq!(err.info().context.get("k"), Some(&"6".to_string()));
}

#[test]
fn invalid_parameter_surface() {
    let err = WsError::InvalidParameter(sample_info("invalid-probability", "p out of range"));
    assert_eq!(err.code(), "invalid-probability");
}

#[test]
fn rng_and_serde_surface() {
    let rng = WsError::Rng(sample_info("empty-choice", "nothing to choose from"));
    let serde = WsError::Serde(sample_info("deserialize-json", "bad payload"));
    assert_eq!(rng.code(), "empty-choice");
    assert_eq!(serde.code(), "deserialize-json");
}

#[test]
fn with_context_applies_to_every_family() {
    let err = WsError::InvalidParameter(ErrorInfo::new("empty-graph", "no nodes"))
        .with_context("n", 0);
    assert_eq!(err.info().context.get("n"), Some(&"0".to_string()));
}

#[test]
fn display_includes_context_and_hint() {
    let err = WsError::InvalidDegree(
        ErrorInfo::new("k-exceeds-n", "k>n, choose smaller k or larger n")
            .with_context("n", 5)
            .with_hint("lower k"),
    );
    let rendered = err.to_string();
    assert!(rendered.starts_with("invalid degree: k>n"));
    assert!(rendered.contains("n=5"));
    assert!(rendered.contains("hint: lower k"));
}
