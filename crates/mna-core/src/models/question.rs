use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Tolerance used when matching an incoming value against a domain member.
const TOLERANCE: f64 = 1e-9;

const ZERO_ONE: &[f64] = &[0.0, 1.0];
const ZERO_TWO: &[f64] = &[0.0, 2.0];
const ZERO_TO_TWO: &[f64] = &[0.0, 1.0, 2.0];
const ZERO_TO_THREE: &[f64] = &[0.0, 1.0, 2.0, 3.0];
const HALVES_TO_ONE: &[f64] = &[0.0, 0.5, 1.0];
const HALVES_TO_ONE_AND_HALF: &[f64] = &[0.0, 0.5, 1.0, 1.5];
const SELF_RATED_HEALTH: &[f64] = &[0.0, 0.5, 1.0, 2.0];

/// The two halves of the instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Section {
    /// Questions A–F, 0–14 points.
    Screening,
    /// Questions G–R. K counts half a point per protein-intake indicator,
    /// so the section tops out at 16.5.
    Assessment,
}

impl Section {
    pub fn questions(self) -> &'static [QuestionId] {
        match self {
            Section::Screening => &QuestionId::ALL[..6],
            Section::Assessment => &QuestionId::ALL[6..],
        }
    }

    /// Highest score the section can contribute.
    pub fn max_score(self) -> f64 {
        self.questions().iter().map(|q| q.max_fragment()).sum()
    }
}

/// Identifier of one of the 18 MNA questions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum QuestionId {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
}

impl QuestionId {
    pub const ALL: [QuestionId; 18] = [
        QuestionId::A,
        QuestionId::B,
        QuestionId::C,
        QuestionId::D,
        QuestionId::E,
        QuestionId::F,
        QuestionId::G,
        QuestionId::H,
        QuestionId::I,
        QuestionId::J,
        QuestionId::K,
        QuestionId::L,
        QuestionId::M,
        QuestionId::N,
        QuestionId::O,
        QuestionId::P,
        QuestionId::Q,
        QuestionId::R,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QuestionId::A => "A",
            QuestionId::B => "B",
            QuestionId::C => "C",
            QuestionId::D => "D",
            QuestionId::E => "E",
            QuestionId::F => "F",
            QuestionId::G => "G",
            QuestionId::H => "H",
            QuestionId::I => "I",
            QuestionId::J => "J",
            QuestionId::K => "K",
            QuestionId::L => "L",
            QuestionId::M => "M",
            QuestionId::N => "N",
            QuestionId::O => "O",
            QuestionId::P => "P",
            QuestionId::Q => "Q",
            QuestionId::R => "R",
        }
    }

    pub fn section(self) -> Section {
        if self <= QuestionId::F {
            Section::Screening
        } else {
            Section::Assessment
        }
    }

    /// The closed set of fragment values this question accepts.
    pub fn domain(self) -> &'static [f64] {
        match self {
            QuestionId::A | QuestionId::C | QuestionId::E => ZERO_TO_TWO,
            QuestionId::B | QuestionId::F => ZERO_TO_THREE,
            QuestionId::D => ZERO_TWO,
            QuestionId::G | QuestionId::H | QuestionId::I | QuestionId::L | QuestionId::R => {
                ZERO_ONE
            }
            QuestionId::J | QuestionId::N | QuestionId::O => ZERO_TO_TWO,
            QuestionId::K => HALVES_TO_ONE_AND_HALF,
            QuestionId::M | QuestionId::Q => HALVES_TO_ONE,
            QuestionId::P => SELF_RATED_HEALTH,
        }
    }

    /// K is computed from the protein-intake indicators and never chosen directly.
    pub fn is_derived(self) -> bool {
        self == QuestionId::K
    }

    pub fn max_fragment(self) -> f64 {
        self.domain().iter().copied().fold(0.0, f64::max)
    }

    /// Return the domain member equal to `value`, if any.
    pub fn canonical(self, value: f64) -> Option<f64> {
        self.domain()
            .iter()
            .copied()
            .find(|member| (member - value).abs() < TOLERANCE)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        QuestionId::ALL
            .into_iter()
            .find(|q| q.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CoreError::UnknownQuestion(trimmed.to_string()))
    }
}
