//! Patient records and their flattening into model features.
//!
//! A [`PatientRecord`] is opaque to the classifier: nothing here validates
//! clinical ranges. [`PatientRecord::features`] turns it into the row of named
//! columns a [`crate::model::FrailtyModel`] consumes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Single,
    Married,
    Cohabiting,
    Divorced,
    Widowed,
}

/// Highest completed schooling, coded 1 (university) to 7 (none).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Education {
    University,
    Technical,
    HighSchool,
    Secondary,
    Primary,
    Other,
    NoSchooling,
}

/// Self-reported hearing or vision quality.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SensoryRating {
    Good,
    Fair,
    Poor,
}

impl Sex {
    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl MaritalStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MaritalStatus::Single => "single",
            MaritalStatus::Married => "married",
            MaritalStatus::Cohabiting => "cohabiting",
            MaritalStatus::Divorced => "divorced",
            MaritalStatus::Widowed => "widowed",
        }
    }
}

impl Education {
    /// Survey code used as the categorical level.
    pub fn code(self) -> &'static str {
        match self {
            Education::University => "1",
            Education::Technical => "2",
            Education::HighSchool => "3",
            Education::Secondary => "4",
            Education::Primary => "5",
            Education::Other => "6",
            Education::NoSchooling => "7",
        }
    }
}

impl SensoryRating {
    pub fn score(self) -> f64 {
        match self {
            SensoryRating::Good => 1.0,
            SensoryRating::Fair => 2.0,
            SensoryRating::Poor => 3.0,
        }
    }
}

/// Chronic conditions recorded as present/absent.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Conditions {
    pub hypertension: bool,
    pub stroke: bool,
    pub angina: bool,
    pub heart_failure: bool,
    pub diabetes: bool,
    pub copd: bool,
    pub osteoarthritis: bool,
    pub osteoporosis: bool,
    pub mental_disorders: bool,
    pub dementia: bool,
}

/// Weekly physical activity by intensity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PhysicalActivity {
    pub vigorous: f64,
    pub moderate: f64,
    pub light: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientRecord {
    // Demographics
    pub age: u32,
    pub marital_status: MaritalStatus,
    pub sex: Sex,
    pub education: Education,
    pub gross_income: f64,

    #[serde(default)]
    pub conditions: Conditions,
    pub urinary_incontinence: u8,

    // Habits
    #[serde(default)]
    pub smoking: Option<f64>,
    #[serde(default)]
    pub alcohol: Option<f64>,

    // Body measures
    pub abdominal_circumference_cm: f64,
    pub bmi: f64,
    pub height_cm: f64,
    pub weight_kg: f64,

    pub hearing: SensoryRating,
    pub vision: SensoryRating,

    // Physical function
    pub falls: bool,
    #[serde(default)]
    pub balance: Option<f64>,
    pub chair_stand_seconds: f64,
    pub grip_strength_kg: f64,
    pub walk_time_seconds: f64,

    // Self-reported scales
    pub health_status: f64,
    pub pain: f64,
    pub memory: f64,
    pub sleep: f64,
    pub loneliness: f64,
    #[serde(default)]
    pub depression: Option<f64>,

    pub uses_internet_email: bool,
    pub has_mobile_phone: bool,
    #[serde(default)]
    pub social_support: Option<f64>,

    pub physical_activity: PhysicalActivity,
    pub fatigability: [f64; 2],
}

/// One cell of a feature row.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    Number(f64),
    Category(String),
    Missing,
}

impl From<f64> for FeatureValue {
    fn from(x: f64) -> Self {
        FeatureValue::Number(x)
    }
}

impl From<bool> for FeatureValue {
    fn from(b: bool) -> Self {
        FeatureValue::Number(if b { 1.0 } else { 0.0 })
    }
}

impl From<Option<f64>> for FeatureValue {
    fn from(x: Option<f64>) -> Self {
        x.map_or(FeatureValue::Missing, FeatureValue::Number)
    }
}

impl From<&str> for FeatureValue {
    fn from(s: &str) -> Self {
        FeatureValue::Category(s.to_string())
    }
}

/// A single named feature row, ordered by column name.
pub type FeatureMap = BTreeMap<String, FeatureValue>;

impl PatientRecord {
    /// Flatten the record into model columns.
    pub fn features(&self) -> FeatureMap {
        let c = &self.conditions;
        let pa = &self.physical_activity;
        let columns: [(&str, FeatureValue); 43] = [
            ("age", f64::from(self.age).into()),
            ("marital_status", self.marital_status.as_str().into()),
            ("sex", self.sex.as_str().into()),
            ("education", self.education.code().into()),
            ("gross_income", self.gross_income.into()),
            ("hypertension", c.hypertension.into()),
            ("stroke", c.stroke.into()),
            ("angina", c.angina.into()),
            ("heart_failure", c.heart_failure.into()),
            ("diabetes", c.diabetes.into()),
            ("copd", c.copd.into()),
            ("osteoarthritis", c.osteoarthritis.into()),
            ("osteoporosis", c.osteoporosis.into()),
            ("mental_disorders", c.mental_disorders.into()),
            ("dementia", c.dementia.into()),
            ("urinary_incontinence", f64::from(self.urinary_incontinence).into()),
            ("smoking", self.smoking.into()),
            ("alcohol", self.alcohol.into()),
            ("abdominal_circumference_cm", self.abdominal_circumference_cm.into()),
            ("bmi", self.bmi.into()),
            ("height_cm", self.height_cm.into()),
            ("weight_kg", self.weight_kg.into()),
            ("hearing", self.hearing.score().into()),
            ("vision", self.vision.score().into()),
            ("falls", self.falls.into()),
            ("balance", self.balance.into()),
            ("chair_stand_seconds", self.chair_stand_seconds.into()),
            ("grip_strength_kg", self.grip_strength_kg.into()),
            ("walk_time_seconds", self.walk_time_seconds.into()),
            ("health_status", self.health_status.into()),
            ("pain", self.pain.into()),
            ("memory", self.memory.into()),
            ("sleep", self.sleep.into()),
            ("loneliness", self.loneliness.into()),
            ("depression", self.depression.into()),
            ("uses_internet_email", self.uses_internet_email.into()),
            ("has_mobile_phone", self.has_mobile_phone.into()),
            ("social_support", self.social_support.into()),
            ("physical_activity_vigorous", pa.vigorous.into()),
            ("physical_activity_moderate", pa.moderate.into()),
            ("physical_activity_light", pa.light.into()),
            ("fatigability_1", self.fatigability[0].into()),
            ("fatigability_2", self.fatigability[1].into()),
        ];
        columns
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect()
    }

    /// Names of the conditions shown in the report summary, in display order.
    pub fn headline_conditions(&self) -> Vec<&'static str> {
        let c = &self.conditions;
        [
            (c.hypertension, "Hypertension"),
            (c.diabetes, "Diabetes"),
            (c.osteoarthritis, "Osteoarthritis"),
        ]
        .into_iter()
        .filter_map(|(present, name)| present.then_some(name))
        .collect()
    }
}
