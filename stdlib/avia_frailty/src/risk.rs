//! Three-band frailty risk classification.
//!
//! A model probability is bucketed into half-open bands with inclusive lower
//! bounds: `[.., 0.33)` is low, `[0.33, 0.66)` is medium and `[0.66, ..]` is
//! high. Scores outside `[0, 1]` are classified by the same comparisons.

use serde::Serialize;
use std::fmt;

/// Scores strictly below this value are low risk.
pub const LOW_RISK_UPPER_BOUND: f64 = 0.33;
/// Scores at or above this value are high risk.
pub const HIGH_RISK_LOWER_BOUND: f64 = 0.66;

pub const LOW_RISK_INTERPRETATION: &str = "The patient presents a low risk of frailty";
pub const MEDIUM_RISK_INTERPRETATION: &str = "The patient presents a moderate risk of frailty";
pub const HIGH_RISK_INTERPRETATION: &str = "The patient presents a high risk of frailty";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Diagnosis {
    Robust,
    PreFrail,
    Frail,
}

impl RiskLevel {
    /// Band for a raw score. NaN fails every comparison and lands in `High`.
    pub fn from_score(risk_score: f64) -> Self {
        if risk_score < LOW_RISK_UPPER_BOUND {
            RiskLevel::Low
        } else if risk_score < HIGH_RISK_LOWER_BOUND {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub fn diagnosis(self) -> Diagnosis {
        match self {
            RiskLevel::Low => Diagnosis::Robust,
            RiskLevel::Medium => Diagnosis::PreFrail,
            RiskLevel::High => Diagnosis::Frail,
        }
    }

    pub fn interpretation(self) -> &'static str {
        match self {
            RiskLevel::Low => LOW_RISK_INTERPRETATION,
            RiskLevel::Medium => MEDIUM_RISK_INTERPRETATION,
            RiskLevel::High => HIGH_RISK_INTERPRETATION,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl Diagnosis {
    pub fn as_str(self) -> &'static str {
        match self {
            Diagnosis::Robust => "robust",
            Diagnosis::PreFrail => "pre-frail",
            Diagnosis::Frail => "frail",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying one risk score.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct RiskAssessment {
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub diagnosis: Diagnosis,
    pub interpretation: &'static str,
}

/// Map a model probability to its risk band. Pure and total.
pub fn classify(risk_score: f64) -> RiskAssessment {
    let risk_level = RiskLevel::from_score(risk_score);
    RiskAssessment {
        risk_score,
        risk_level,
        diagnosis: risk_level.diagnosis(),
        interpretation: risk_level.interpretation(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_lower_inclusive() {
        assert_eq!(classify(0.33).risk_level, RiskLevel::Medium);
        assert_eq!(classify(0.329999).risk_level, RiskLevel::Low);
        assert_eq!(classify(0.66).risk_level, RiskLevel::High);
        assert_eq!(classify(0.659999).risk_level, RiskLevel::Medium);
    }

    #[test]
    fn scenario_scores() {
        let cases = [
            (0.0, RiskLevel::Low, Diagnosis::Robust),
            (0.10, RiskLevel::Low, Diagnosis::Robust),
            (0.50, RiskLevel::Medium, Diagnosis::PreFrail),
            (0.90, RiskLevel::High, Diagnosis::Frail),
            (1.0, RiskLevel::High, Diagnosis::Frail),
        ];
        for (score, level, diagnosis) in cases {
            let a = classify(score);
            assert_eq!(a.risk_level, level, "score {score}");
            assert_eq!(a.diagnosis, diagnosis, "score {score}");
            assert_eq!(a.risk_score, score);
        }
    }

    #[test]
    fn out_of_range_scores_are_accepted() {
        assert_eq!(classify(-0.5).diagnosis, Diagnosis::Robust);
        assert_eq!(classify(1.7).diagnosis, Diagnosis::Frail);
        assert_eq!(classify(f64::INFINITY).risk_level, RiskLevel::High);
        assert_eq!(classify(f64::NEG_INFINITY).risk_level, RiskLevel::Low);
    }

    #[test]
    fn nan_falls_through_to_high() {
        assert_eq!(classify(f64::NAN).risk_level, RiskLevel::High);
    }

    #[test]
    fn interpretation_matches_band() {
        assert_eq!(classify(0.1).interpretation, LOW_RISK_INTERPRETATION);
        assert_eq!(classify(0.4).interpretation, MEDIUM_RISK_INTERPRETATION);
        assert_eq!(classify(0.8).interpretation, HIGH_RISK_INTERPRETATION);
    }

    #[test]
    fn labels_render_lowercase() {
        assert_eq!(RiskLevel::Medium.to_string(), "medium");
        assert_eq!(Diagnosis::PreFrail.to_string(), "pre-frail");
        let json = serde_json::to_value(classify(0.5)).unwrap();
        assert_eq!(json["risk_level"], "medium");
        assert_eq!(json["diagnosis"], "pre-frail");
    }
}
