//! Plain-text rendering of assessments for the console demo.

use std::fmt;

use crate::patient::PatientRecord;
use crate::risk::RiskAssessment;

const RULE_WIDTH: usize = 60;

/// Full report for one patient: the assessment followed by a short record summary.
pub struct Report<'a> {
    pub assessment: &'a RiskAssessment,
    pub record: &'a PatientRecord,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);
        let a = self.assessment;
        let r = self.record;

        writeln!(f, "{heavy}")?;
        writeln!(f, "FRAILTY PREDICTION RESULTS")?;
        writeln!(f, "{heavy}")?;
        writeln!(f)?;
        writeln!(
            f,
            "Frailty probability: {:.4} ({:.2}%)",
            a.risk_score,
            a.risk_score * 100.0
        )?;
        writeln!(f, "Risk level: {}", a.risk_level.as_str().to_uppercase())?;
        writeln!(f, "Diagnosis: {}", a.diagnosis.as_str().to_uppercase())?;
        writeln!(f)?;
        writeln!(f, "Interpretation: {}", a.interpretation)?;

        writeln!(f)?;
        writeln!(f, "{light}")?;
        writeln!(f, "PATIENT DATA (summary)")?;
        writeln!(f, "{light}")?;
        writeln!(f, "Age: {} years", r.age)?;
        writeln!(f, "Sex: {}", r.sex.as_str())?;
        writeln!(f, "Marital status: {}", r.marital_status.as_str())?;
        writeln!(f, "BMI: {:.1}", r.bmi)?;
        writeln!(f, "Abdominal circumference: {:.1} cm", r.abdominal_circumference_cm)?;

        let conditions = r.headline_conditions();
        if !conditions.is_empty() {
            writeln!(f, "Health conditions: {}", conditions.join(", "))?;
        }
        writeln!(f, "{heavy}")
    }
}

pub fn render_report(assessment: &RiskAssessment, record: &PatientRecord) -> String {
    Report { assessment, record }.to_string()
}

/// Short entry used in the multi-patient section.
pub fn render_cohort_line(name: &str, assessment: &RiskAssessment) -> String {
    format!(
        "{name}:\n  - Probability: {:.4}\n  - Diagnosis: {}",
        assessment.risk_score, assessment.diagnosis
    )
}

/// Section banner, e.g. for the multi-patient listing.
pub fn banner(title: &str) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    format!("{heavy}\n{title}\n{heavy}")
}
