//! Frailty model loading and inference.
//!
//! The classifier only needs "a probability for this patient"; [`FrailtyModel`]
//! is that seam. [`LogisticPipeline`] is the bundled implementation: a JSON
//! artifact describing imputation, standardization, one-hot weights and a
//! logistic link.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs::read_to_string;
use std::path::Path;

use crate::error::FrailtyError;
use crate::patient::{FeatureMap, FeatureValue, PatientRecord};
use crate::risk::{classify, RiskAssessment};

/// File name looked up when no model path is given.
pub const DEFAULT_MODEL_PATH: &str = "model_pipeline.json";

/// Anything that can estimate the probability of the frail class.
pub trait FrailtyModel {
    fn name(&self) -> &str;

    /// Probability that the patient described by `features` is frail.
    fn predict_proba(&self, features: &FeatureMap) -> Result<f64, FrailtyError>;
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NumericColumn {
    pub name: String,
    /// Value substituted when the feature is missing.
    pub impute: f64,
    pub mean: f64,
    pub scale: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoricalColumn {
    pub name: String,
    /// Weight per known level; unknown levels contribute nothing.
    pub levels: BTreeMap<String, f64>,
}

/// Imputer + scaler + one-hot encoder feeding a logistic regression.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogisticPipeline {
    pub model_name: String,
    #[serde(default)]
    pub version: Option<String>,
    pub intercept: f64,
    #[serde(default)]
    pub numeric: Vec<NumericColumn>,
    #[serde(default)]
    pub categorical: Vec<CategoricalColumn>,
}

impl LogisticPipeline {
    /// Reject pipelines that could only produce garbage at inference time.
    pub fn validate(&self) -> Result<(), FrailtyError> {
        if !self.intercept.is_finite() {
            return Err(FrailtyError::InvalidModel(
                "intercept must be finite".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        let names = self
            .numeric
            .iter()
            .map(|c| &c.name)
            .chain(self.categorical.iter().map(|c| &c.name));
        for name in names {
            if !seen.insert(name.as_str()) {
                return Err(FrailtyError::InvalidModel(format!(
                    "duplicate column '{name}'"
                )));
            }
        }

        for col in &self.numeric {
            if !(col.scale.is_finite() && col.scale != 0.0) {
                return Err(FrailtyError::InvalidModel(format!(
                    "column '{}' has unusable scale {}",
                    col.name, col.scale
                )));
            }
            if ![col.impute, col.mean, col.weight].iter().all(|x| x.is_finite()) {
                return Err(FrailtyError::InvalidModel(format!(
                    "column '{}' has non-finite parameters",
                    col.name
                )));
            }
        }
        for col in &self.categorical {
            if let Some((level, w)) = col.levels.iter().find(|(_, w)| !w.is_finite()) {
                return Err(FrailtyError::InvalidModel(format!(
                    "column '{}' level '{level}' has weight {w}",
                    col.name
                )));
            }
        }
        Ok(())
    }

    /// Linear predictor before the logistic link.
    pub fn logit(&self, features: &FeatureMap) -> Result<f64, FrailtyError> {
        let mut z = self.intercept;

        for col in &self.numeric {
            let x = match features.get(&col.name) {
                Some(FeatureValue::Number(x)) => *x,
                Some(FeatureValue::Missing) | None => col.impute,
                Some(FeatureValue::Category(level)) => {
                    return Err(FrailtyError::Inference(format!(
                        "numeric column '{}' received category '{level}'",
                        col.name
                    )))
                }
            };
            z += (x - col.mean) / col.scale * col.weight;
        }

        for col in &self.categorical {
            match features.get(&col.name) {
                Some(FeatureValue::Category(level)) => {
                    z += col.levels.get(level).copied().unwrap_or(0.0);
                }
                Some(FeatureValue::Missing) | None => {}
                Some(FeatureValue::Number(x)) => {
                    return Err(FrailtyError::Inference(format!(
                        "categorical column '{}' received number {x}",
                        col.name
                    )))
                }
            }
        }

        Ok(z)
    }
}

impl FrailtyModel for LogisticPipeline {
    fn name(&self) -> &str {
        &self.model_name
    }

    fn predict_proba(&self, features: &FeatureMap) -> Result<f64, FrailtyError> {
        let z = self.logit(features)?;
        let p = 1.0 / (1.0 + (-z).exp());
        if !p.is_finite() {
            return Err(FrailtyError::Inference(format!(
                "model produced non-finite probability from logit {z}"
            )));
        }
        debug!("{}: logit={z:.4} p={p:.4}", self.model_name);
        Ok(p)
    }
}

/// Load a [`LogisticPipeline`] from a JSON file.
pub fn load_model(path: impl AsRef<Path>) -> Result<LogisticPipeline, FrailtyError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(FrailtyError::MissingArtifact {
            path: path.to_path_buf(),
        });
    }

    debug!("loading model from {}", path.display());
    let s = read_to_string(path).map_err(|source| FrailtyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let model: LogisticPipeline =
        serde_json::from_str(&s).map_err(|source| FrailtyError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    model.validate()?;

    debug!(
        "loaded model '{}' ({} numeric, {} categorical columns)",
        model.model_name,
        model.numeric.len(),
        model.categorical.len()
    );
    Ok(model)
}

/// Score one patient and classify the resulting probability.
pub fn predict_frailty<M: FrailtyModel + ?Sized>(
    model: &M,
    record: &PatientRecord,
) -> Result<RiskAssessment, FrailtyError> {
    let features = record.features();
    let risk_score = model.predict_proba(&features)?;
    Ok(classify(risk_score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::example_patient;
    use crate::risk::RiskLevel;

    fn tiny() -> LogisticPipeline {
        LogisticPipeline {
            model_name: "tiny".into(),
            version: None,
            intercept: 0.0,
            numeric: vec![NumericColumn {
                name: "age".into(),
                impute: 70.0,
                mean: 70.0,
                scale: 10.0,
                weight: 2.0,
            }],
            categorical: vec![CategoricalColumn {
                name: "sex".into(),
                levels: BTreeMap::from([("female".to_string(), 1.0)]),
            }],
        }
    }

    fn row(cells: &[(&str, FeatureValue)]) -> FeatureMap {
        cells
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn mean_patient_scores_one_half() {
        let p = tiny()
            .predict_proba(&row(&[("age", FeatureValue::Number(70.0))]))
            .unwrap();
        assert!((p - 0.5).abs() < 1e-12);
    }

    #[test]
    fn missing_numeric_is_imputed() {
        let m = tiny();
        let absent = m.logit(&FeatureMap::new()).unwrap();
        let missing = m.logit(&row(&[("age", FeatureValue::Missing)])).unwrap();
        assert_eq!(absent, 0.0);
        assert_eq!(missing, 0.0);
    }

    #[test]
    fn one_hot_levels_add_weight() {
        let m = tiny();
        let f = row(&[("sex", FeatureValue::Category("female".into()))]);
        assert!((m.logit(&f).unwrap() - 1.0).abs() < 1e-12);
        let unknown = row(&[("sex", FeatureValue::Category("other".into()))]);
        assert_eq!(m.logit(&unknown).unwrap(), 0.0);
    }

    #[test]
    fn type_mismatch_is_an_inference_error() {
        let m = tiny();
        let err = m
            .predict_proba(&row(&[("age", FeatureValue::Category("old".into()))]))
            .unwrap_err();
        assert!(matches!(err, FrailtyError::Inference(_)));
        let err = m
            .predict_proba(&row(&[("sex", FeatureValue::Number(1.0))]))
            .unwrap_err();
        assert!(matches!(err, FrailtyError::Inference(_)));
    }

    #[test]
    fn validate_rejects_zero_scale_and_duplicates() {
        let mut m = tiny();
        m.numeric[0].scale = 0.0;
        assert!(matches!(m.validate(), Err(FrailtyError::InvalidModel(_))));

        let mut m = tiny();
        m.categorical[0].name = "age".into();
        assert!(matches!(m.validate(), Err(FrailtyError::InvalidModel(_))));
    }

    #[test]
    fn predict_frailty_uses_record_features() {
        let mut m = tiny();
        m.intercept = -10.0;
        let a = predict_frailty(&m, &example_patient()).unwrap();
        assert_eq!(a.risk_level, RiskLevel::Low);

        m.intercept = 10.0;
        let a = predict_frailty(&m, &example_patient()).unwrap();
        assert_eq!(a.risk_level, RiskLevel::High);
    }
}
