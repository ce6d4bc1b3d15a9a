use std::fmt::Write as _;
use std::path::PathBuf;

use mna_core::models::patient::{PatientField, PatientUpdate};
use mna_core::models::question::QuestionId;
use mna_core::models::response::ProteinIndicator;
use mna_core::models::score::Evaluation;
use mna_export::select::{SinkPreference, select_sink};
use mna_export::sink::{SaveOutcome, persist};
use mna_instruments::Instrument;
use mna_instruments::instruments::mna::Mna;

use crate::config;
use crate::state::ConsoleState;

pub const HELP: &str = "\
Commands:
  name <text>              patient name
  sex <male|female|unknown>
  age <years>
  weight <kg>
  height <cm>
  date <YYYY-MM-DD>
  answer <A-R> <value|->   answer a question, '-' clears it
  protein <1|2|3> <on|off> protein-intake indicators for question K
  show                     patient data, answers and scores
  questions                list the questions and their options
  submit                   save the assessment
  new                      start a new assessment
  sink <auto|dialog|directory>
  output-dir <path|->      where the directory sink writes
  help
  quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Patient(PatientField, String),
    Answer(QuestionId, Option<f64>),
    Protein(ProteinIndicator, bool),
    Show,
    Questions,
    Submit,
    New,
    Sink(SinkPreference),
    OutputDir(Option<PathBuf>),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Continue(String),
    Quit,
}

pub fn parse(line: &str) -> eyre::Result<Command> {
    let line = line.trim();
    let (keyword, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let keyword = keyword.to_ascii_lowercase();

    if let Ok(field) = keyword.parse::<PatientField>() {
        return Ok(Command::Patient(field, rest.to_string()));
    }

    match keyword.as_str() {
        "answer" => {
            let (question, value) = two_args(rest, "answer <A-R> <value|->")?;
            let question: QuestionId = question.parse()?;
            let value = match value {
                "-" => None,
                v => Some(
                    v.parse::<f64>()
                        .map_err(|_| eyre::eyre!("not a number: {v}"))?,
                ),
            };
            Ok(Command::Answer(question, value))
        }
        "protein" => {
            let (index, state) = two_args(rest, "protein <1|2|3> <on|off>")?;
            let index: u8 = index
                .parse()
                .map_err(|_| eyre::eyre!("not an indicator number: {index}"))?;
            let indicator = ProteinIndicator::try_from(index)?;
            let checked = match state.to_ascii_lowercase().as_str() {
                "on" | "yes" | "true" => true,
                "off" | "no" | "false" => false,
                other => return Err(eyre::eyre!("expected on or off, got {other}")),
            };
            Ok(Command::Protein(indicator, checked))
        }
        "show" => Ok(Command::Show),
        "questions" => Ok(Command::Questions),
        "submit" | "save" => Ok(Command::Submit),
        "new" => Ok(Command::New),
        "sink" => {
            let preference = match rest.to_ascii_lowercase().as_str() {
                "auto" => SinkPreference::Auto,
                "dialog" => SinkPreference::Dialog,
                "directory" => SinkPreference::Directory,
                other => return Err(eyre::eyre!("unknown sink: {other}")),
            };
            Ok(Command::Sink(preference))
        }
        "output-dir" => match rest {
            "" => Err(eyre::eyre!("usage: output-dir <path|->")),
            "-" => Ok(Command::OutputDir(None)),
            path => Ok(Command::OutputDir(Some(PathBuf::from(path)))),
        },
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(eyre::eyre!("unknown command: {other} (try 'help')")),
    }
}

fn two_args<'a>(rest: &'a str, usage: &str) -> eyre::Result<(&'a str, &'a str)> {
    let mut parts = rest.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), None) => Ok((a, b)),
        _ => Err(eyre::eyre!("usage: {usage}")),
    }
}

pub fn execute(state: &mut ConsoleState, command: Command) -> eyre::Result<Reply> {
    let text = match command {
        Command::Patient(field, raw) => {
            let live = state
                .session
                .update_patient_field(PatientUpdate::parse(field, &raw));
            format_live(&live)
        }
        Command::Answer(question, value) => {
            let live = state.session.update_response(question, value)?;
            format_live(&live)
        }
        Command::Protein(indicator, checked) => {
            let live = state.session.toggle_protein_indicator(indicator, checked);
            format_live(&live)
        }
        Command::Show => show(state),
        Command::Questions => questions(),
        Command::Submit => submit(state)?,
        Command::New => {
            state.session.reset();
            "Started a new assessment.".to_string()
        }
        Command::Sink(preference) => {
            state.config.sink = preference;
            save_config(state)?;
            format!("Sink set to {preference:?}.")
        }
        Command::OutputDir(dir) => {
            let text = match &dir {
                Some(dir) => format!("Output directory set to {}.", dir.display()),
                None => "Output directory cleared.".to_string(),
            };
            state.config.output_dir = dir;
            save_config(state)?;
            text
        }
        Command::Help => HELP.to_string(),
        Command::Quit => return Ok(Reply::Quit),
    };
    Ok(Reply::Continue(text))
}

fn submit(state: &mut ConsoleState) -> eyre::Result<String> {
    let record = state.session.submit();
    let sink = select_sink(state.config.sink, state.config.output_dir.as_deref());
    let text = match persist(sink.as_ref(), record)? {
        SaveOutcome::Stored(path) => format!("Assessment saved to {}.", path.display()),
        SaveOutcome::Cancelled => {
            "Save cancelled; the assessment is still open.".to_string()
        }
    };
    Ok(text)
}

fn save_config(state: &ConsoleState) -> eyre::Result<()> {
    if let Some(path) = &state.config_path {
        config::save_config_to(path, &state.config)?;
    }
    Ok(())
}

pub fn format_live(live: &Evaluation) -> String {
    let bmi = live
        .scores
        .bmi
        .map(|b| format!("{b:.1}"))
        .unwrap_or_else(|| "-".to_string());
    format!(
        "screening {} | assessment {} | total {} | BMI {} | {}",
        live.scores.screening_score,
        live.scores.assessment_score,
        live.scores.total_score,
        bmi,
        live.category.label()
    )
}

fn show(state: &ConsoleState) -> String {
    let patient = state.session.patient();
    let optional = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string());

    let mut output = String::new();
    let _ = writeln!(output, "Name:   {}", patient.name);
    let _ = writeln!(output, "Sex:    {:?}", patient.sex);
    let _ = writeln!(output, "Age:    {}", optional(patient.age));
    let _ = writeln!(output, "Weight: {} kg", optional(patient.weight_kg));
    let _ = writeln!(output, "Height: {} cm", optional(patient.height_cm));
    let _ = writeln!(
        output,
        "Date:   {}",
        patient
            .date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    output.push('\n');
    output.push_str(&Mna.describe(state.session.responses()));
    output.push_str(&format_live(&state.session.live()));
    output
}

fn questions() -> String {
    let mut output = String::new();
    for section in Mna.sections() {
        let _ = writeln!(output, "{} ({}-{})", section.name, section.range.min, section.range.max);
        for question in &section.questions {
            let _ = writeln!(output, "  {}. {}", question.id, question.prompt);
            for option in &question.options {
                let _ = writeln!(output, "       {} = {}", option.value, option.label);
            }
            for indicator in &question.indicators {
                let _ = writeln!(
                    output,
                    "       [{}] {}",
                    indicator.indicator.index(),
                    indicator.label
                );
            }
        }
    }
    output
}
