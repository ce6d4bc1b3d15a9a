use mna_core::models::patient::{PatientField, PatientRecord, PatientUpdate, Sex};

#[test]
fn new_record_is_empty_but_valid() {
    let patient = PatientRecord::default();
    assert_eq!(patient.name, "");
    assert_eq!(patient.sex, Sex::Unknown);
    assert_eq!(patient.age, None);
    assert_eq!(patient.weight_kg, None);
    assert_eq!(patient.height_cm, None);
    assert_eq!(patient.date, None);
}

#[test]
fn raw_numbers_parse_or_become_absent() {
    assert_eq!(
        PatientUpdate::parse(PatientField::WeightKg, " 70.5 "),
        PatientUpdate::WeightKg(Some(70.5))
    );
    assert_eq!(
        PatientUpdate::parse(PatientField::HeightCm, "tall"),
        PatientUpdate::HeightCm(None)
    );
    assert_eq!(
        PatientUpdate::parse(PatientField::Age, ""),
        PatientUpdate::Age(None)
    );
    assert_eq!(
        PatientUpdate::parse(PatientField::Age, "inf"),
        PatientUpdate::Age(None)
    );
}

#[test]
fn implausible_values_are_kept() {
    let mut patient = PatientRecord::default();
    patient.apply(PatientUpdate::parse(PatientField::Age, "-3"));
    assert_eq!(patient.age, Some(-3.0));
}

#[test]
fn dates_and_sex_parse() {
    let mut patient = PatientRecord::default();
    patient.apply(PatientUpdate::parse(PatientField::Date, "2024-01-01"));
    patient.apply(PatientUpdate::parse(PatientField::Sex, "Female"));
    assert_eq!(patient.date, Some(jiff::civil::date(2024, 1, 1)));
    assert_eq!(patient.sex, Sex::Female);

    patient.apply(PatientUpdate::parse(PatientField::Date, "01/01/2024"));
    patient.apply(PatientUpdate::parse(PatientField::Sex, "n/a"));
    assert_eq!(patient.date, None);
    assert_eq!(patient.sex, Sex::Unknown);
}

#[test]
fn field_names_parse() {
    assert_eq!("weight".parse::<PatientField>().unwrap(), PatientField::WeightKg);
    assert_eq!("height_cm".parse::<PatientField>().unwrap(), PatientField::HeightCm);
    assert!("shoe_size".parse::<PatientField>().is_err());
}
