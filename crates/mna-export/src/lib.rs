//! mna-export
//!
//! Persistence for submitted assessments: JSON document encoding and the
//! sinks that write it out (native save dialog, or a plain directory when
//! no dialog is available).

pub mod dialog;
pub mod directory;
pub mod document;
pub mod error;
pub mod select;
pub mod sink;
