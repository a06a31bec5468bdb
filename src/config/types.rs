use serde::{Deserialize, Serialize};

/// Root settings container, persisted as TOML.
///
/// Holds both the configured durations and the progress of the last
/// session, so an interrupted run can be restored with `--restore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub durations: Durations,
    #[serde(default)]
    pub session: SessionState,
}

/// Configured phase durations, in minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Durations {
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u32,
    #[serde(default = "default_rest_minutes")]
    pub rest_minutes: u32,
}

/// Elapsed progress of a session at the moment it was persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub paused: bool,
    /// Whether the rest phase was active; pause is tracked separately so
    /// resuming lands in the right phase.
    #[serde(default)]
    pub resting: bool,
    #[serde(default)]
    pub minute: u32,
    #[serde(default)]
    pub second: u32,
    /// Completed work/rest round trips since the last long rest.
    #[serde(default)]
    pub cycle: u8,
}

fn default_work_minutes() -> u32 {
    25
}

fn default_rest_minutes() -> u32 {
    5
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            work_minutes: default_work_minutes(),
            rest_minutes: default_rest_minutes(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            durations: Durations::default(),
            session: SessionState::default(),
        }
    }
}
