//! Process settings for constructing a run orchestrator.
//!
//! Runner selection is an explicit value the embedder reads once and passes
//! to whatever builds the orchestrator, not ambient process state.

use std::env;

/// Environment variable selecting the bootstrap runner.
pub const BOOTSTRAP_ENV_VAR: &str = "ORDEAL_BOOTSTRAP";

/// Which runner implementation an orchestrator should be built with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunnerKind {
    /// The full runner: telemetry, session wiring, output.
    #[default]
    Standard,
    /// The minimal self-hosting runner used while testing the framework
    /// itself.
    Bootstrap,
}

/// Explicit configuration for whatever constructs the orchestrator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub bootstrap: bool,
}

impl Settings {
    /// Read settings from the environment. `ORDEAL_BOOTSTRAP` set to `1`,
    /// `true`, or `on` (case-insensitive) selects the bootstrap runner;
    /// anything else, or an unset variable, selects the standard one.
    pub fn from_env() -> Self {
        let bootstrap = env::var(BOOTSTRAP_ENV_VAR)
            .map(|raw| {
                let mode = raw.trim().to_ascii_lowercase();
                matches!(mode.as_str(), "1" | "true" | "on")
            })
            .unwrap_or(false);
        if bootstrap {
            tracing::debug!(var = BOOTSTRAP_ENV_VAR, "bootstrap runner selected");
        }
        Self { bootstrap }
    }

    pub fn runner_kind(&self) -> RunnerKind {
        if self.bootstrap {
            RunnerKind::Bootstrap
        } else {
            RunnerKind::Standard
        }
    }
}
