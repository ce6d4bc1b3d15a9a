use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Output of one full recomputation of the scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScoreSummary {
    pub screening_score: f64,
    pub assessment_score: f64,
    pub total_score: f64,
    /// Advisory only; never fed into question F.
    pub bmi: Option<f64>,
}

/// Nutritional status derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskCategory {
    Normal,
    AtRisk,
    Malnourished,
}

impl RiskCategory {
    pub fn label(self) -> &'static str {
        match self {
            RiskCategory::Normal => "Normal nutritional status",
            RiskCategory::AtRisk => "At risk of malnutrition",
            RiskCategory::Malnourished => "Malnourished",
        }
    }
}

/// The live read-out shown to the operator after every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Evaluation {
    #[serde(flatten)]
    #[ts(flatten)]
    pub scores: ScoreSummary,
    pub category: RiskCategory,
}
