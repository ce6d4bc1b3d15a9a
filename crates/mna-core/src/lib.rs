//! mna-core
//!
//! Pure domain types for the Mini Nutritional Assessment: patient data, the
//! question/domain table, response sets and the assembled assessment record.
//! No I/O. This is the shared vocabulary of the workspace.

pub mod error;
pub mod file_names;
pub mod models;
