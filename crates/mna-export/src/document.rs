use mna_core::file_names;
use mna_core::models::record::AssessmentRecord;

use crate::error::ExportError;

/// Encode a record as pretty-printed JSON keyed by the record's field names.
pub fn encode(record: &AssessmentRecord) -> Result<Vec<u8>, ExportError> {
    Ok(serde_json::to_vec_pretty(record)?)
}

/// Parse a previously exported document. Responses are re-validated.
pub fn decode(bytes: &[u8]) -> Result<AssessmentRecord, ExportError> {
    Ok(serde_json::from_slice(bytes)?)
}

pub fn suggested_file_name(record: &AssessmentRecord) -> String {
    file_names::assessment(&record.patient().name, record.submitted_on())
}
