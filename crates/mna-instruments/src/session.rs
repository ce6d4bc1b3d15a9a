use mna_core::error::CoreError;
use mna_core::models::patient::{PatientRecord, PatientUpdate};
use mna_core::models::question::QuestionId;
use mna_core::models::record::AssessmentRecord;
use mna_core::models::response::{ProteinIndicator, ResponseSet};
use mna_core::models::score::Evaluation;

use crate::classify::evaluate;

/// One operator's assessment in progress.
///
/// The mutators are the only way to change the patient data or responses,
/// and each one recomputes the live evaluation before returning it.
#[derive(Debug, Clone)]
pub struct Session {
    patient: PatientRecord,
    responses: ResponseSet,
    live: Evaluation,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        let patient = PatientRecord::default();
        let responses = ResponseSet::new();
        let live = evaluate(&patient, &responses);
        Self {
            patient,
            responses,
            live,
        }
    }

    pub fn update_patient_field(&mut self, update: PatientUpdate) -> Evaluation {
        self.patient.apply(update);
        self.recompute()
    }

    /// Answer (`Some`) or clear (`None`) a question. A refused value leaves
    /// the session untouched.
    pub fn update_response(
        &mut self,
        question: QuestionId,
        value: Option<f64>,
    ) -> Result<Evaluation, CoreError> {
        match value {
            Some(value) => {
                if let Err(e) = self.responses.set(question, value) {
                    tracing::debug!(%question, value, error = %e, "response rejected");
                    return Err(e);
                }
            }
            None => self.responses.clear(question),
        }
        Ok(self.recompute())
    }

    pub fn toggle_protein_indicator(
        &mut self,
        indicator: ProteinIndicator,
        checked: bool,
    ) -> Evaluation {
        self.responses.set_protein_indicator(indicator, checked);
        self.recompute()
    }

    pub fn live(&self) -> Evaluation {
        self.live
    }

    pub fn patient(&self) -> &PatientRecord {
        &self.patient
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    /// Assemble a record from the current state. The session itself is not
    /// changed and may keep being edited.
    pub fn submit(&self) -> AssessmentRecord {
        let record = AssessmentRecord::assemble(&self.patient, &self.responses, self.live);
        tracing::debug!(
            id = %record.id(),
            total = record.total_score(),
            category = ?record.category(),
            "assessment assembled"
        );
        record
    }

    /// Discard the current answers and start a new assessment.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn recompute(&mut self) -> Evaluation {
        self.live = evaluate(&self.patient, &self.responses);
        self.live
    }
}
