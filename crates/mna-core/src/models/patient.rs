use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unknown,
}

impl Sex {
    /// Anything other than `male` or `female` is recorded as unknown.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Sex::Male,
            "female" | "f" => Sex::Female,
            _ => Sex::Unknown,
        }
    }
}

/// Identity and anthropometric data for the assessed subject.
///
/// Every field may be unanswered; the record is always structurally valid.
/// Values are not checked for clinical plausibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PatientRecord {
    pub name: String,
    pub sex: Sex,
    pub age: Option<f64>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub date: Option<jiff::civil::Date>,
}

impl PatientRecord {
    pub fn apply(&mut self, update: PatientUpdate) {
        match update {
            PatientUpdate::Name(name) => self.name = name,
            PatientUpdate::Sex(sex) => self.sex = sex,
            PatientUpdate::Age(age) => self.age = age,
            PatientUpdate::WeightKg(weight) => self.weight_kg = weight,
            PatientUpdate::HeightCm(height) => self.height_cm = height,
            PatientUpdate::Date(date) => self.date = date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PatientField {
    Name,
    Sex,
    Age,
    WeightKg,
    HeightCm,
    Date,
}

impl FromStr for PatientField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(PatientField::Name),
            "sex" => Ok(PatientField::Sex),
            "age" => Ok(PatientField::Age),
            "weight" | "weight_kg" => Ok(PatientField::WeightKg),
            "height" | "height_cm" => Ok(PatientField::HeightCm),
            "date" => Ok(PatientField::Date),
            other => Err(CoreError::UnknownField(other.to_string())),
        }
    }
}

/// A single-field change to a [`PatientRecord`].
#[derive(Debug, Clone, PartialEq)]
pub enum PatientUpdate {
    Name(String),
    Sex(Sex),
    Age(Option<f64>),
    WeightKg(Option<f64>),
    HeightCm(Option<f64>),
    Date(Option<jiff::civil::Date>),
}

impl PatientUpdate {
    /// Build an update from raw form text. Numbers and dates that do not
    /// parse are recorded as absent rather than rejected.
    pub fn parse(field: PatientField, raw: &str) -> Self {
        match field {
            PatientField::Name => PatientUpdate::Name(raw.trim().to_string()),
            PatientField::Sex => PatientUpdate::Sex(Sex::parse(raw)),
            PatientField::Age => PatientUpdate::Age(parse_number(raw)),
            PatientField::WeightKg => PatientUpdate::WeightKg(parse_number(raw)),
            PatientField::HeightCm => PatientUpdate::HeightCm(parse_number(raw)),
            PatientField::Date => PatientUpdate::Date(raw.trim().parse().ok()),
        }
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
