use mna_core::models::question::{QuestionId, Section};
use mna_core::models::response::ProteinIndicator;
use serde::Serialize;
use ts_rs::TS;

/// Defines the valid range for a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ScoreRange {
    /// Whether `value` lies within the bounds and, when a step is set, on
    /// a whole number of steps from `min`.
    pub fn contains(&self, value: f64) -> bool {
        const EPSILON: f64 = 1e-9;
        if !(self.min - EPSILON..=self.max + EPSILON).contains(&value) {
            return false;
        }
        self.step.is_none_or(|step| {
            let steps = (value - self.min) / step;
            (steps - steps.round()).abs() < EPSILON
        })
    }
}

/// One selectable answer, as printed on the form.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub value: f64,
    pub label: String,
}

/// A protein-intake checkbox feeding question K.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct IndicatorDef {
    pub indicator: ProteinIndicator,
    pub label: String,
}

/// A question definition within an instrument.
///
/// Enumerated questions list `options`; derived questions list the
/// `indicators` they are computed from instead.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct QuestionDef {
    pub id: QuestionId,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
    pub indicators: Vec<IndicatorDef>,
}

impl QuestionDef {
    pub fn option(&self, value: f64) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

/// A top-level section within an instrument, containing questions.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct SectionDef {
    pub section: Section,
    pub name: String,
    pub questions: Vec<QuestionDef>,
    pub range: ScoreRange,
    pub description: Option<String>,
}
