use avia_frailty::{load_model, FrailtyError, FrailtyModel};

const TINY_MODEL: &str = r#"{
    "model_name": "m",
    "version": "0.1.0",
    "intercept": 0.0,
    "numeric": [{"name": "age", "impute": 70.0, "mean": 70.0, "scale": 10.0, "weight": 1.0}],
    "categorical": [{"name": "sex", "levels": {"female": 0.5}}]
}"#;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn load_model_from_json_file() {
    init_logger();
    let tmp = tempfile::tempdir().expect("tmpdir");
    let path = tmp.path().join("model.json");
    std::fs::write(&path, TINY_MODEL).expect("write");

    let model = load_model(&path).expect("load");
    assert_eq!(model.name(), "m");
    assert_eq!(model.version.as_deref(), Some("0.1.0"));
    assert_eq!(model.numeric.len(), 1);
    assert_eq!(model.categorical[0].levels["female"], 0.5);
}

#[test]
fn missing_file_is_missing_artifact() {
    let tmp = tempfile::tempdir().expect("tmpdir");
    let path = tmp.path().join("model_pipeline.json");

    let err = load_model(&path).unwrap_err();
    assert!(err.is_missing_artifact());
    assert!(err.to_string().contains("model_pipeline.json"));
}

#[test]
fn malformed_json_is_a_parse_error() {
    init_logger();
    let tmp = tempfile::tempdir().expect("tmpdir");
    let path = tmp.path().join("model.json");
    std::fs::write(&path, "{ not json").expect("write");

    let err = load_model(&path).unwrap_err();
    assert!(matches!(err, FrailtyError::Parse { .. }));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn invalid_parameters_are_rejected_at_load() {
    let tmp = tempfile::tempdir().expect("tmpdir");
    let path = tmp.path().join("model.json");
    std::fs::write(&path, TINY_MODEL.replace("\"scale\": 10.0", "\"scale\": 0.0")).expect("write");

    let err = load_model(&path).unwrap_err();
    assert!(matches!(err, FrailtyError::InvalidModel(_)));
}

#[test]
fn directory_path_is_an_io_error() {
    let tmp = tempfile::tempdir().expect("tmpdir");
    let err = load_model(tmp.path()).unwrap_err();
    assert!(matches!(err, FrailtyError::Io { .. }));
}
