//! mna-instruments
//!
//! The Mini Nutritional Assessment instrument: question catalog, scoring
//! engine, risk classification and the interactive scoring session.
//! Pure computation, no I/O.

pub mod classify;
pub mod engine;
pub mod instruments;
pub mod scoring;
pub mod session;

use mna_core::models::question::QuestionId;
use mna_core::models::response::ResponseSet;
use scoring::{QuestionDef, SectionDef};

/// Trait implemented by a questionnaire instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "mna").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// The sections and questions this instrument asks, in form order.
    fn sections(&self) -> &[SectionDef];

    fn question(&self, id: QuestionId) -> Option<&QuestionDef> {
        self.sections()
            .iter()
            .flat_map(|s| &s.questions)
            .find(|q| q.id == id)
    }

    /// Format the answered questions as structured text, one line per
    /// question with the chosen option label.
    fn describe(&self, responses: &ResponseSet) -> String {
        let mut output = format!("## {}\n\n", self.name());
        for section in self.sections() {
            output.push_str(&format!("### {}\n", section.name));
            for question in &section.questions {
                let Some(value) = responses.get(question.id) else {
                    continue;
                };
                if question.indicators.is_empty() {
                    let label = question
                        .option(value)
                        .map(|o| o.label.as_str())
                        .unwrap_or("?");
                    output.push_str(&format!(
                        "- {}. {}: {} = {}\n",
                        question.id, question.prompt, value, label
                    ));
                } else {
                    let checked = question
                        .indicators
                        .iter()
                        .filter(|i| responses.protein_intake().get(i.indicator) == Some(true))
                        .count();
                    output.push_str(&format!(
                        "- {}. {}: {} ({} of {} checked)\n",
                        question.id,
                        question.prompt,
                        value,
                        checked,
                        question.indicators.len()
                    ));
                }
            }
            output.push('\n');
        }
        output
    }
}
