use std::path::PathBuf;

use mna_instruments::session::Session;

use crate::config::ConsoleConfig;

pub struct ConsoleState {
    pub session: Session,
    pub config: ConsoleConfig,
    /// Where config changes are written. `None` keeps them in memory only.
    pub config_path: Option<PathBuf>,
}

impl ConsoleState {
    pub fn new(config: ConsoleConfig, config_path: Option<PathBuf>) -> Self {
        Self {
            session: Session::new(),
            config,
            config_path,
        }
    }
}
