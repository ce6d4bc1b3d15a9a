use mna_core::models::patient::PatientRecord;
use mna_core::models::response::ResponseSet;
use mna_core::models::score::{Evaluation, RiskCategory};

use crate::engine;

pub const NORMAL_MIN: f64 = 24.0;
pub const AT_RISK_MIN: f64 = 17.0;
pub const AT_RISK_MAX: f64 = 23.5;

/// Map a total score to its risk category.
///
/// Totals strictly between 23.5 and 24 match neither the normal nor the
/// at-risk band and are classified as malnourished.
pub fn classify(total_score: f64) -> RiskCategory {
    if total_score >= NORMAL_MIN {
        RiskCategory::Normal
    } else if (AT_RISK_MIN..=AT_RISK_MAX).contains(&total_score) {
        RiskCategory::AtRisk
    } else {
        RiskCategory::Malnourished
    }
}

/// Score and classify in one step.
pub fn evaluate(patient: &PatientRecord, responses: &ResponseSet) -> Evaluation {
    let scores = engine::score(patient, responses);
    Evaluation {
        scores,
        category: classify(scores.total_score),
    }
}
