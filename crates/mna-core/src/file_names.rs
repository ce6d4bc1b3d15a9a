//! File naming conventions for exported assessment documents.
//!
//! Pure string functions. Sinks use these to suggest a file name; the
//! operator may still choose another one.

pub const EXTENSION: &str = "json";

/// `MNA_<name>_<YYYY-MM-DD>.json`
pub fn assessment(patient_name: &str, date: jiff::civil::Date) -> String {
    format!("MNA_{}_{date}.{EXTENSION}", sanitize(patient_name))
}

/// Variant used when `assessment` already exists in a directory.
pub fn numbered(file_name: &str, n: u32) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) => format!("{stem} ({n}).{ext}"),
        None => format!("{file_name} ({n})"),
    }
}

fn sanitize(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}
