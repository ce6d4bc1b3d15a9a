use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::patient::PatientRecord;
use super::response::{ResponseDocument, ResponseSet};
use super::score::{Evaluation, RiskCategory};

/// A submitted assessment. Built once from a snapshot of the session and
/// never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentRecord {
    id: Uuid,
    patient: PatientRecord,
    #[ts(as = "ResponseDocument")]
    responses: ResponseSet,
    screening_score: f64,
    assessment_score: f64,
    total_score: f64,
    category: RiskCategory,
    bmi: Option<f64>,
    created_at: jiff::Timestamp,
}

impl AssessmentRecord {
    /// Copy the current patient data and responses into a new record.
    /// Absent fields stay absent.
    pub fn assemble(
        patient: &PatientRecord,
        responses: &ResponseSet,
        evaluation: Evaluation,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            patient: patient.clone(),
            responses: responses.clone(),
            screening_score: evaluation.scores.screening_score,
            assessment_score: evaluation.scores.assessment_score,
            total_score: evaluation.scores.total_score,
            category: evaluation.category,
            bmi: evaluation.scores.bmi,
            created_at: jiff::Timestamp::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn patient(&self) -> &PatientRecord {
        &self.patient
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    pub fn screening_score(&self) -> f64 {
        self.screening_score
    }

    pub fn assessment_score(&self) -> f64 {
        self.assessment_score
    }

    pub fn total_score(&self) -> f64 {
        self.total_score
    }

    pub fn category(&self) -> RiskCategory {
        self.category
    }

    pub fn bmi(&self) -> Option<f64> {
        self.bmi
    }

    pub fn created_at(&self) -> jiff::Timestamp {
        self.created_at
    }

    /// Calendar day (UTC) the record was submitted.
    pub fn submitted_on(&self) -> jiff::civil::Date {
        self.created_at.to_zoned(jiff::tz::TimeZone::UTC).date()
    }
}
