use mna_core::models::question::{QuestionId, Section};
use mna_core::models::response::ProteinIndicator;

use crate::scoring::{AnswerOption, IndicatorDef, QuestionDef, ScoreRange, SectionDef};
use crate::Instrument;

/// MNA: Mini Nutritional Assessment.
/// 18 questions in two sections. Screening A–F (0–14), assessment G–R
/// (0–16.5 with K at half a point per protein indicator), half-point steps.
pub struct Mna;

impl Instrument for Mna {
    fn id(&self) -> &str {
        "mna"
    }

    fn name(&self) -> &str {
        "MNA"
    }

    fn sections(&self) -> &[SectionDef] {
        static SECTIONS: std::sync::LazyLock<Vec<SectionDef>> = std::sync::LazyLock::new(|| {
            let screening = vec![
                question(
                    QuestionId::A,
                    "Has food intake declined over the past 3 months due to loss of appetite, \
                     digestive problems, chewing or swallowing difficulties?",
                    &[(0.0, "ate much less"), (1.0, "ate less"), (2.0, "ate the same")],
                ),
                question(
                    QuestionId::B,
                    "Involuntary weight loss during the last 3 months?",
                    &[
                        (0.0, "weight loss greater than 3 kg (6.6 lb)"),
                        (1.0, "does not know"),
                        (2.0, "weight loss between 1 and 3 kg (2.2 and 6.6 lb)"),
                        (3.0, "no weight loss"),
                    ],
                ),
                question(
                    QuestionId::C,
                    "Mobility?",
                    &[
                        (0.0, "bed or chair bound"),
                        (1.0, "able to get out of bed/chair but does not go out"),
                        (2.0, "goes out"),
                    ],
                ),
                question(
                    QuestionId::D,
                    "Has suffered psychological stress or acute disease in the past 3 months?",
                    &[(0.0, "yes"), (2.0, "no")],
                ),
                question(
                    QuestionId::E,
                    "Neuropsychological problems?",
                    &[
                        (0.0, "severe dementia or depression"),
                        (1.0, "mild dementia"),
                        (2.0, "no psychological problems"),
                    ],
                ),
                question(
                    QuestionId::F,
                    "Body Mass Index (BMI) = weight in kg / (height in m)²",
                    &[
                        (0.0, "BMI less than 19"),
                        (1.0, "BMI 19 to less than 21"),
                        (2.0, "BMI 21 to less than 23"),
                        (3.0, "BMI 23 or greater"),
                    ],
                ),
            ];

            let assessment = vec![
                question(
                    QuestionId::G,
                    "Lives independently (not in a nursing home)?",
                    &[(1.0, "yes"), (0.0, "no")],
                ),
                question(
                    QuestionId::H,
                    "Takes more than 3 prescription drugs per day?",
                    &[(0.0, "yes"), (1.0, "no")],
                ),
                question(
                    QuestionId::I,
                    "Pressure sores or skin ulcers?",
                    &[(0.0, "yes"), (1.0, "no")],
                ),
                question(
                    QuestionId::J,
                    "How many full meals does the patient eat daily?",
                    &[(0.0, "1 meal"), (1.0, "2 meals"), (2.0, "3 meals")],
                ),
                QuestionDef {
                    id: QuestionId::K,
                    prompt: "Selected consumption markers for protein intake".to_string(),
                    options: Vec::new(),
                    indicators: vec![
                        indicator(
                            ProteinIndicator::Dairy,
                            "At least one serving of dairy products per day?",
                        ),
                        indicator(
                            ProteinIndicator::LegumesOrEggs,
                            "Two or more servings of legumes or eggs per week?",
                        ),
                        indicator(
                            ProteinIndicator::MeatFishOrPoultry,
                            "Meat, fish or poultry every day?",
                        ),
                    ],
                },
                question(
                    QuestionId::L,
                    "Consumes two or more servings of fruit or vegetables per day?",
                    &[(0.0, "no"), (1.0, "yes")],
                ),
                question(
                    QuestionId::M,
                    "How much fluid (water, juice, coffee, tea, milk) is consumed per day?",
                    &[
                        (0.0, "less than 3 cups"),
                        (0.5, "3 to 5 cups"),
                        (1.0, "more than 5 cups"),
                    ],
                ),
                question(
                    QuestionId::N,
                    "Mode of feeding?",
                    &[
                        (0.0, "unable to eat without assistance"),
                        (1.0, "self-fed with some difficulty"),
                        (2.0, "self-fed without any problem"),
                    ],
                ),
                question(
                    QuestionId::O,
                    "Self view of nutritional status",
                    &[
                        (0.0, "views self as being malnourished"),
                        (1.0, "is uncertain of nutritional state"),
                        (2.0, "views self as having no nutritional problem"),
                    ],
                ),
                question(
                    QuestionId::P,
                    "In comparison with other people of the same age, how does the patient \
                     consider their health status?",
                    &[
                        (0.0, "not as good"),
                        (0.5, "does not know"),
                        (1.0, "as good"),
                        (2.0, "better"),
                    ],
                ),
                question(
                    QuestionId::Q,
                    "Mid-arm circumference (MAC) in cm",
                    &[
                        (0.0, "MAC less than 21"),
                        (0.5, "MAC 21 to 22"),
                        (1.0, "MAC 22 or greater"),
                    ],
                ),
                question(
                    QuestionId::R,
                    "Calf circumference (CC) in cm",
                    &[(0.0, "CC less than 31"), (1.0, "CC 31 or greater")],
                ),
            ];

            vec![
                SectionDef {
                    section: Section::Screening,
                    name: "Screening".to_string(),
                    questions: screening,
                    range: ScoreRange {
                        min: 0.0,
                        max: 14.0,
                        step: Some(1.0),
                    },
                    description: None,
                },
                SectionDef {
                    section: Section::Assessment,
                    name: "Assessment".to_string(),
                    questions: assessment,
                    range: ScoreRange {
                        min: 0.0,
                        max: 16.5,
                        step: Some(0.5),
                    },
                    description: Some(
                        "Total 24-30: normal, 17-23.5: at risk, below 17: malnourished"
                            .to_string(),
                    ),
                },
            ]
        });
        &SECTIONS
    }
}

fn question(id: QuestionId, prompt: &str, options: &[(f64, &str)]) -> QuestionDef {
    QuestionDef {
        id,
        prompt: prompt.to_string(),
        options: options
            .iter()
            .map(|(value, label)| AnswerOption {
                value: *value,
                label: label.to_string(),
            })
            .collect(),
        indicators: Vec::new(),
    }
}

fn indicator(indicator: ProteinIndicator, label: &str) -> IndicatorDef {
    IndicatorDef {
        indicator,
        label: label.to_string(),
    }
}
