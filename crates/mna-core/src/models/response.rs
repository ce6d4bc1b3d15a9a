use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::question::QuestionId;
use crate::error::CoreError;

/// Contribution of each checked protein-intake indicator to K.
pub const PROTEIN_INDICATOR_WEIGHT: f64 = 0.5;

/// One of the three protein-intake checkboxes behind question K.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ProteinIndicator {
    /// At least one serving of dairy products per day.
    Dairy,
    /// Two or more servings of legumes or eggs per week.
    LegumesOrEggs,
    /// Meat, fish or poultry every day.
    MeatFishOrPoultry,
}

impl ProteinIndicator {
    pub const ALL: [ProteinIndicator; 3] = [
        ProteinIndicator::Dairy,
        ProteinIndicator::LegumesOrEggs,
        ProteinIndicator::MeatFishOrPoultry,
    ];

    /// 1-based position on the form.
    pub fn index(self) -> u8 {
        match self {
            ProteinIndicator::Dairy => 1,
            ProteinIndicator::LegumesOrEggs => 2,
            ProteinIndicator::MeatFishOrPoultry => 3,
        }
    }
}

impl TryFrom<u8> for ProteinIndicator {
    type Error = CoreError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        ProteinIndicator::ALL
            .into_iter()
            .find(|i| i.index() == index)
            .ok_or(CoreError::UnknownIndicator(index))
    }
}

/// Current state of the three protein-intake indicators.
///
/// `None` means the checkbox has not been answered. K is derived from this
/// state alone, so toggling an indicator off always undoes toggling it on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProteinIntake {
    pub dairy: Option<bool>,
    pub legumes_or_eggs: Option<bool>,
    pub meat_fish_or_poultry: Option<bool>,
}

impl ProteinIntake {
    pub fn get(&self, indicator: ProteinIndicator) -> Option<bool> {
        match indicator {
            ProteinIndicator::Dairy => self.dairy,
            ProteinIndicator::LegumesOrEggs => self.legumes_or_eggs,
            ProteinIndicator::MeatFishOrPoultry => self.meat_fish_or_poultry,
        }
    }

    pub fn set(&mut self, indicator: ProteinIndicator, checked: bool) {
        let slot = match indicator {
            ProteinIndicator::Dairy => &mut self.dairy,
            ProteinIndicator::LegumesOrEggs => &mut self.legumes_or_eggs,
            ProteinIndicator::MeatFishOrPoultry => &mut self.meat_fish_or_poultry,
        };
        *slot = Some(checked);
    }

    pub fn checked(&self) -> usize {
        ProteinIndicator::ALL
            .into_iter()
            .filter(|i| self.get(*i) == Some(true))
            .count()
    }

    pub fn is_answered(&self) -> bool {
        ProteinIndicator::ALL
            .into_iter()
            .any(|i| self.get(i).is_some())
    }

    /// The K fragment: half a point per checked indicator, absent until any
    /// indicator has been answered.
    pub fn fragment(&self) -> Option<f64> {
        self.is_answered()
            .then(|| PROTEIN_INDICATOR_WEIGHT * self.checked() as f64)
    }
}

/// The answers given so far, one optional fragment per question.
///
/// Every stored fragment belongs to its question's domain. K is never stored
/// directly; it is read from the protein-intake indicators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "ResponseDocument", try_from = "ResponseDocument")]
pub struct ResponseSet {
    answers: BTreeMap<QuestionId, f64>,
    protein_intake: ProteinIntake,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, question: QuestionId) -> Option<f64> {
        if question.is_derived() {
            self.protein_intake.fragment()
        } else {
            self.answers.get(&question).copied()
        }
    }

    /// Store a fragment. Out-of-domain values are refused and leave the
    /// previous answer in place.
    pub fn set(&mut self, question: QuestionId, value: f64) -> Result<(), CoreError> {
        if question.is_derived() {
            return Err(CoreError::DerivedFragment { question });
        }
        let fragment = question
            .canonical(value)
            .ok_or(CoreError::InvalidFragment { question, value })?;
        self.answers.insert(question, fragment);
        Ok(())
    }

    /// Mark a question unanswered. Clearing K resets all three indicators.
    pub fn clear(&mut self, question: QuestionId) {
        if question.is_derived() {
            self.protein_intake = ProteinIntake::default();
        } else {
            self.answers.remove(&question);
        }
    }

    pub fn protein_intake(&self) -> &ProteinIntake {
        &self.protein_intake
    }

    pub fn set_protein_indicator(&mut self, indicator: ProteinIndicator, checked: bool) {
        self.protein_intake.set(indicator, checked);
    }

    /// Answered questions in instrument order, K included once answered.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, f64)> + '_ {
        QuestionId::ALL
            .into_iter()
            .filter_map(|q| self.get(q).map(|value| (q, value)))
    }

    pub fn answered(&self) -> usize {
        self.iter().count()
    }
}

/// Wire form of a [`ResponseSet`].
///
/// `answers` is keyed by question id and carries the derived K value for
/// readers that only want fragments; `proteinIntake` keeps the indicators it
/// came from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ResponseDocument {
    pub answers: BTreeMap<QuestionId, f64>,
    #[serde(default)]
    pub protein_intake: ProteinIntake,
}

impl From<ResponseSet> for ResponseDocument {
    fn from(set: ResponseSet) -> Self {
        Self {
            answers: set.iter().collect(),
            protein_intake: set.protein_intake,
        }
    }
}

impl TryFrom<ResponseDocument> for ResponseSet {
    type Error = CoreError;

    fn try_from(doc: ResponseDocument) -> Result<Self, Self::Error> {
        let mut set = ResponseSet {
            answers: BTreeMap::new(),
            protein_intake: doc.protein_intake,
        };
        for (question, value) in doc.answers {
            if question.is_derived() {
                // K must agree with the indicators it was derived from.
                let derived = set.protein_intake.fragment();
                if derived.is_none() || question.canonical(value) != derived {
                    return Err(CoreError::InvalidFragment { question, value });
                }
                continue;
            }
            set.set(question, value)?;
        }
        Ok(set)
    }
}
