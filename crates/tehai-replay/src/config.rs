//! Replay configuration from the command line and environment.

use std::path::PathBuf;

/// Where the script comes from and how reports are written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReplayConfig {
    /// Script file; `None` reads stdin
    pub script: Option<PathBuf>,
    /// Pretty-print each report instead of one JSON object per line
    pub pretty: bool,
}

impl ReplayConfig {
    /// Build from process arguments and environment.
    ///
    /// The first argument overrides `TEHAI_SCRIPT`; `-` means stdin.
    /// `TEHAI_PRETTY=1` or `true` enables pretty output.
    pub fn from_env() -> Self {
        Self::from_parts(
            std::env::args().nth(1),
            std::env::var("TEHAI_SCRIPT").ok(),
            std::env::var("TEHAI_PRETTY").ok(),
        )
    }

    fn from_parts(
        arg: Option<String>,
        script_var: Option<String>,
        pretty_var: Option<String>,
    ) -> Self {
        let script = arg
            .or(script_var)
            .filter(|path| !path.is_empty() && path != "-")
            .map(PathBuf::from);
        let pretty = matches!(pretty_var.as_deref(), Some("1") | Some("true"));
        Self { script, pretty }
    }
}
