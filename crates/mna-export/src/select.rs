use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dialog::DialogSink;
use crate::directory::DirectorySink;
use crate::sink::RecordSink;

/// Which sink to use for submitted assessments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkPreference {
    /// Native dialog when one can be shown, directory otherwise.
    #[default]
    Auto,
    Dialog,
    Directory,
}

/// Whether a native save dialog can be shown in this environment.
pub fn native_dialog_available() -> bool {
    if cfg!(any(target_os = "macos", target_os = "windows")) {
        return true;
    }
    ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|var| std::env::var_os(var).is_some_and(|v| !v.is_empty()))
}

pub fn select_sink(
    preference: SinkPreference,
    output_dir: Option<&Path>,
) -> Box<dyn RecordSink> {
    select_sink_with(preference, native_dialog_available(), output_dir)
}

/// [`select_sink`] with the dialog capability given explicitly. Without a
/// dialog every preference ends up at the directory sink.
pub fn select_sink_with(
    preference: SinkPreference,
    dialog_available: bool,
    output_dir: Option<&Path>,
) -> Box<dyn RecordSink> {
    let use_dialog = match preference {
        SinkPreference::Auto => dialog_available,
        SinkPreference::Dialog => {
            if !dialog_available {
                tracing::warn!("dialog sink requested but no display was detected, saving to a directory");
            }
            dialog_available
        }
        SinkPreference::Directory => false,
    };

    if use_dialog {
        Box::new(DialogSink::new(output_dir.map(Path::to_path_buf)))
    } else {
        let sink = output_dir
            .map(DirectorySink::new)
            .unwrap_or_else(DirectorySink::in_downloads);
        tracing::debug!(dir = %sink.dir().display(), "using directory sink");
        Box::new(sink)
    }
}
