//! Hand-authored demo patients.

use serde::{Deserialize, Serialize};

use crate::patient::{
    Conditions, Education, MaritalStatus, PatientRecord, PhysicalActivity, SensoryRating, Sex,
};

/// A record with the label it is shown under in reports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NamedPatient {
    pub name: String,
    pub record: PatientRecord,
}

/// Baseline record: a 72-year-old married man with hypertension, diabetes and osteoarthritis.
pub fn example_patient() -> PatientRecord {
    PatientRecord {
        age: 72,
        marital_status: MaritalStatus::Married,
        sex: Sex::Male,
        education: Education::Secondary,
        gross_income: 15000.0,
        conditions: Conditions {
            hypertension: true,
            diabetes: true,
            osteoarthritis: true,
            ..Conditions::default()
        },
        urinary_incontinence: 2,
        smoking: None,
        alcohol: Some(3.0),
        abdominal_circumference_cm: 105.5,
        bmi: 28.5,
        height_cm: 175.0,
        weight_kg: 87.3,
        hearing: SensoryRating::Fair,
        vision: SensoryRating::Fair,
        falls: true,
        balance: Some(1.0),
        chair_stand_seconds: 8.5,
        grip_strength_kg: 35.5,
        walk_time_seconds: 3.2,
        health_status: 3.0,
        pain: 2.0,
        memory: 4.0,
        sleep: 2.0,
        loneliness: 2.0,
        depression: Some(1.0),
        uses_internet_email: false,
        has_mobile_phone: true,
        social_support: Some(2.0),
        physical_activity: PhysicalActivity {
            vigorous: 1.0,
            moderate: 1.0,
            light: 2.0,
        },
        fatigability: [2.0, 2.0],
    }
}

/// Baseline aged to 85, sedentary, slow chair-stand and poorer self-rated health.
pub fn high_risk_patient() -> PatientRecord {
    let mut p = example_patient();
    p.age = 85;
    p.conditions.hypertension = true;
    p.conditions.diabetes = true;
    p.conditions.osteoarthritis = true;
    p.falls = true;
    p.health_status = 4.0;
    p.chair_stand_seconds = 15.0;
    p.physical_activity = PhysicalActivity {
        vigorous: 0.0,
        moderate: 0.0,
        light: 1.0,
    };
    p
}

/// Baseline made younger, active and free of the headline conditions.
pub fn low_risk_patient() -> PatientRecord {
    let mut p = example_patient();
    p.age = 65;
    p.conditions.hypertension = false;
    p.conditions.diabetes = false;
    p.conditions.osteoarthritis = false;
    p.falls = false;
    p.health_status = 1.0;
    p.chair_stand_seconds = 5.0;
    p.physical_activity = PhysicalActivity {
        vigorous: 3.0,
        moderate: 3.0,
        light: 3.0,
    };
    p.abdominal_circumference_cm = 90.0;
    p.bmi = 23.0;
    p
}

pub fn demo_cohort() -> Vec<NamedPatient> {
    vec![
        NamedPatient {
            name: "Patient 1 (baseline example)".to_string(),
            record: example_patient(),
        },
        NamedPatient {
            name: "Patient 2 (high risk)".to_string(),
            record: high_risk_patient(),
        },
        NamedPatient {
            name: "Patient 3 (low risk)".to_string(),
            record: low_risk_patient(),
        },
    ]
}
