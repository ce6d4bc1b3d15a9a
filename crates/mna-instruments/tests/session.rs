use mna_core::error::CoreError;
use mna_core::models::patient::{PatientField, PatientUpdate};
use mna_core::models::question::QuestionId;
use mna_core::models::response::ProteinIndicator;
use mna_core::models::score::RiskCategory;
use mna_instruments::session::Session;

#[test]
fn new_session_starts_at_zero() {
    let session = Session::new();
    let live = session.live();
    assert_eq!(live.scores.total_score, 0.0);
    assert_eq!(live.scores.bmi, None);
    assert_eq!(live.category, RiskCategory::Malnourished);
}

#[test]
fn every_mutation_refreshes_the_live_scores() {
    let mut session = Session::new();

    let live = session.update_response(QuestionId::B, Some(3.0)).unwrap();
    assert_eq!(live.scores.screening_score, 3.0);
    assert_eq!(session.live(), live);

    let live = session.toggle_protein_indicator(ProteinIndicator::Dairy, true);
    assert_eq!(live.scores.assessment_score, 0.5);

    let live = session.update_patient_field(PatientUpdate::parse(PatientField::WeightKg, "70"));
    assert_eq!(live.scores.bmi, None);
    let live = session.update_patient_field(PatientUpdate::parse(PatientField::HeightCm, "175"));
    assert_eq!(live.scores.bmi, Some(22.9));
    assert_eq!(live.scores.total_score, 3.5);
}

#[test]
fn invalid_fragment_names_the_question_and_keeps_the_old_value() {
    let mut session = Session::new();
    session.update_response(QuestionId::D, Some(2.0)).unwrap();
    let before = session.live();

    let err = session.update_response(QuestionId::D, Some(1.0)).unwrap_err();
    match err {
        CoreError::InvalidFragment { question, value } => {
            assert_eq!(question, QuestionId::D);
            assert_eq!(value, 1.0);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(session.responses().get(QuestionId::D), Some(2.0));
    assert_eq!(session.live(), before);
}

#[test]
fn clearing_an_answer_removes_its_contribution() {
    let mut session = Session::new();
    session.update_response(QuestionId::A, Some(2.0)).unwrap();
    let live = session.update_response(QuestionId::A, None).unwrap();
    assert_eq!(live.scores.screening_score, 0.0);
    assert_eq!(session.responses().get(QuestionId::A), None);
}

#[test]
fn protein_toggle_symmetry() {
    let mut session = Session::new();
    session.toggle_protein_indicator(ProteinIndicator::Dairy, true);
    assert_eq!(session.responses().get(QuestionId::K), Some(0.5));

    session.toggle_protein_indicator(ProteinIndicator::LegumesOrEggs, true);
    assert_eq!(session.responses().get(QuestionId::K), Some(1.0));

    let live = session.toggle_protein_indicator(ProteinIndicator::LegumesOrEggs, false);
    assert_eq!(session.responses().get(QuestionId::K), Some(0.5));
    assert_eq!(live.scores.assessment_score, 0.5);
}

#[test]
fn k_cannot_be_answered_directly() {
    let mut session = Session::new();
    assert!(matches!(
        session.update_response(QuestionId::K, Some(1.0)),
        Err(CoreError::DerivedFragment { .. })
    ));
}

#[test]
fn submitted_record_is_unaffected_by_later_edits() {
    let mut session = Session::new();
    session.update_patient_field(PatientUpdate::Name("X".to_string()));
    session.update_response(QuestionId::A, Some(1.0)).unwrap();

    let record = session.submit();
    session.update_response(QuestionId::A, Some(2.0)).unwrap();
    session.update_patient_field(PatientUpdate::Name("Y".to_string()));

    assert_eq!(record.patient().name, "X");
    assert_eq!(record.responses().get(QuestionId::A), Some(1.0));
    assert_eq!(record.screening_score(), 1.0);
    assert_eq!(session.live().scores.screening_score, 2.0);
}

#[test]
fn submit_does_not_change_the_session() {
    let mut session = Session::new();
    session.update_response(QuestionId::C, Some(2.0)).unwrap();
    let before = session.live();
    let first = session.submit();
    let second = session.submit();
    assert_ne!(first.id(), second.id());
    assert_eq!(session.live(), before);
    assert_eq!(first.total_score(), second.total_score());
}

#[test]
fn reset_starts_over() {
    let mut session = Session::new();
    session.update_response(QuestionId::C, Some(2.0)).unwrap();
    session.update_patient_field(PatientUpdate::Name("X".to_string()));
    session.reset();
    assert_eq!(session.responses().answered(), 0);
    assert_eq!(session.patient().name, "");
    assert_eq!(session.live().scores.total_score, 0.0);
}
