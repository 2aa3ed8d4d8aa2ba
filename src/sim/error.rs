//! Rejected transitions and configuration problems
//!
//! None of these escape the game driver: it logs them and leaves state untouched.

use thiserror::Error;

use super::state::SessionPhase;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Command not allowed from the current phase (e.g. restart with no lives left)
    #[error("cannot {command} while {phase:?}")]
    InvalidTransition {
        command: &'static str,
        phase: SessionPhase,
    },
    /// Late timer firing or collision delivered after the game stopped
    #[error("stale {event} ignored while {phase:?}")]
    StaleEvent {
        event: &'static str,
        phase: SessionPhase,
    },
    #[error("configuration error: {0}")]
    Configuration(String),
}
