//! Score computation.
//!
//! Every call recomputes all outputs from the current patient data and
//! responses. Unanswered questions contribute zero; a missing or unusable
//! weight or height makes the BMI absent. Nothing here fails.

use mna_core::models::patient::PatientRecord;
use mna_core::models::question::Section;
use mna_core::models::response::ResponseSet;
use mna_core::models::score::ScoreSummary;

use crate::scoring::ScoreRange;

/// Screening 0–14 plus assessment 0–16.5.
pub const TOTAL_RANGE: ScoreRange = ScoreRange {
    min: 0.0,
    max: 30.5,
    step: Some(0.5),
};

pub fn score(patient: &PatientRecord, responses: &ResponseSet) -> ScoreSummary {
    let screening_score = section_score(responses, Section::Screening);
    let assessment_score = section_score(responses, Section::Assessment);
    let total_score = screening_score + assessment_score;
    debug_assert!(
        TOTAL_RANGE.contains(total_score),
        "total {total_score} outside {TOTAL_RANGE:?}"
    );
    ScoreSummary {
        screening_score,
        assessment_score,
        total_score,
        bmi: bmi(patient.weight_kg, patient.height_cm),
    }
}

/// Sum of the answered fragments in `section`.
pub fn section_score(responses: &ResponseSet, section: Section) -> f64 {
    section
        .questions()
        .iter()
        .filter_map(|q| responses.get(*q))
        .sum()
}

/// `weight / (height in m)²`, rounded to one decimal.
pub fn bmi(weight_kg: Option<f64>, height_cm: Option<f64>) -> Option<f64> {
    let weight = weight_kg.filter(|w| w.is_finite() && *w != 0.0)?;
    let height_m = height_cm.filter(|h| h.is_finite() && *h != 0.0)? / 100.0;
    let bmi = weight / (height_m * height_m);
    bmi.is_finite().then(|| (bmi * 10.0).round() / 10.0)
}
