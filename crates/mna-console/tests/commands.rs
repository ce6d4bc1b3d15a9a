use mna_console::commands::{Command, Reply, execute, parse};
use mna_console::config::ConsoleConfig;
use mna_console::state::ConsoleState;
use mna_core::models::patient::PatientField;
use mna_core::models::question::QuestionId;
use mna_core::models::response::ProteinIndicator;
use mna_core::models::score::RiskCategory;
use mna_export::select::SinkPreference;

fn state_writing_to(dir: &std::path::Path) -> ConsoleState {
    let config = ConsoleConfig {
        sink: SinkPreference::Directory,
        output_dir: Some(dir.to_path_buf()),
        ..Default::default()
    };
    ConsoleState::new(config, None)
}

fn run(state: &mut ConsoleState, line: &str) -> String {
    match execute(state, parse(line).unwrap()).unwrap() {
        Reply::Continue(text) => text,
        Reply::Quit => panic!("unexpected quit"),
    }
}

#[test]
fn parses_patient_fields() {
    assert_eq!(
        parse("name Ana Lopez").unwrap(),
        Command::Patient(PatientField::Name, "Ana Lopez".to_string())
    );
    assert_eq!(
        parse("weight 70").unwrap(),
        Command::Patient(PatientField::WeightKg, "70".to_string())
    );
}

#[test]
fn parses_answers_and_indicators() {
    assert_eq!(
        parse("answer m 0.5").unwrap(),
        Command::Answer(QuestionId::M, Some(0.5))
    );
    assert_eq!(parse("answer A -").unwrap(), Command::Answer(QuestionId::A, None));
    assert_eq!(
        parse("protein 2 on").unwrap(),
        Command::Protein(ProteinIndicator::LegumesOrEggs, true)
    );
    assert!(parse("answer Z 1").is_err());
    assert!(parse("answer A one").is_err());
    assert!(parse("protein 4 on").is_err());
    assert!(parse("protein 1 maybe").is_err());
    assert!(parse("frobnicate").is_err());
}

#[test]
fn quit_ends_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = state_writing_to(dir.path());
    assert_eq!(execute(&mut state, Command::Quit).unwrap(), Reply::Quit);
}

#[test]
fn mutations_echo_live_scores() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = state_writing_to(dir.path());

    run(&mut state, "weight 70");
    let text = run(&mut state, "height 175");
    assert!(text.contains("BMI 22.9"), "{text}");

    let text = run(&mut state, "answer B 3");
    assert!(text.contains("screening 3"), "{text}");

    let text = run(&mut state, "protein 1 on");
    assert!(text.contains("assessment 0.5"), "{text}");
    assert!(text.contains("total 3.5"), "{text}");
}

#[test]
fn invalid_answer_is_reported_and_state_kept() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = state_writing_to(dir.path());
    run(&mut state, "answer D 2");

    let err = execute(&mut state, parse("answer D 1").unwrap()).unwrap_err();
    assert!(err.to_string().contains("question D"), "{err}");
    assert_eq!(state.session.responses().get(QuestionId::D), Some(2.0));
}

#[test]
fn submit_writes_to_the_configured_directory() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = state_writing_to(dir.path());

    for line in [
        "name X",
        "sex male",
        "age 80",
        "weight 50",
        "height 160",
        "date 2024-01-01",
        "answer A 1",
        "answer B 2",
        "answer C 1",
        "answer D 0",
        "answer F 2",
        "answer G 1",
        "answer H 0",
        "answer I 1",
        "answer J 2",
        "protein 1 on",
        "protein 2 off",
        "protein 3 on",
        "answer L 1",
        "answer M 0.5",
        "answer N 2",
        "answer O 1",
        "answer P 1",
        "answer Q 0.5",
        "answer R 1",
    ] {
        run(&mut state, line);
    }
    assert_eq!(state.session.live().category, RiskCategory::AtRisk);

    let text = run(&mut state, "submit");
    assert!(text.starts_with("Assessment saved to"), "{text}");

    let files: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(files.len(), 1);
    let json: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&files[0]).unwrap()).unwrap();
    assert_eq!(json["screeningScore"], 6.0);
    assert_eq!(json["assessmentScore"], 12.0);
    assert_eq!(json["totalScore"], 18.0);
    assert_eq!(json["category"], "at_risk");
    assert_eq!(json["patient"]["date"], "2024-01-01");

    // The session stays open after submitting.
    assert_eq!(state.session.live().scores.total_score, 18.0);
}

#[test]
fn new_clears_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = state_writing_to(dir.path());
    run(&mut state, "answer A 2");
    run(&mut state, "new");
    assert_eq!(state.session.responses().answered(), 0);
}

#[test]
fn show_lists_patient_and_answers() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = state_writing_to(dir.path());
    run(&mut state, "name X");
    run(&mut state, "answer D 0");
    let text = run(&mut state, "show");
    assert!(text.contains("Name:   X"));
    assert!(text.contains("- D. "));
    assert!(text.contains("total 0"));
}

#[test]
fn questions_lists_the_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = state_writing_to(dir.path());
    let text = run(&mut state, "questions");
    assert!(text.contains("Screening (0-14)"));
    assert!(text.contains("  K. "));
    assert!(text.contains("[3] Meat, fish or poultry every day?"));
}
