//! Shared helpers for the end-to-end tests.

use std::path::PathBuf;

use avia_frailty::{load_model, LogisticPipeline};

/// Path of the demo model shipped at the workspace root.
pub fn bundled_model_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(avia_frailty::DEFAULT_MODEL_PATH)
}

pub fn bundled_model() -> LogisticPipeline {
    load_model(bundled_model_path()).expect("bundled model loads")
}
