//! Frailty risk scoring for older adults.
//!
//! Patient records are flattened into named features, scored by a
//! [`FrailtyModel`] and the resulting probability is bucketed into a
//! low / medium / high band by [`classify`].

pub mod error;
pub mod fixtures;
pub mod model;
pub mod patient;
pub mod report;
pub mod risk;

pub use error::FrailtyError;
pub use fixtures::{demo_cohort, example_patient, high_risk_patient, low_risk_patient, NamedPatient};
pub use model::{load_model, predict_frailty, FrailtyModel, LogisticPipeline, DEFAULT_MODEL_PATH};
pub use patient::{FeatureMap, FeatureValue, PatientRecord};
pub use risk::{classify, Diagnosis, RiskAssessment, RiskLevel};
