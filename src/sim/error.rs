//! Errors raised by the round core
//!
//! None of these are fatal. The host may deliver late callbacks (an overlap
//! queued just before a pause, a key press after the round ended) so the
//! controller reports them and carries on.

use thiserror::Error;

use super::state::RoundPhase;

/// Host events understood by the round controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    Frame,
    CoinOverlap,
    EnemyOverlap,
    PauseRequested,
    ResumeRequested,
    KeyDown,
}

impl std::fmt::Display for RoundEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RoundEvent::Frame => "frame",
            RoundEvent::CoinOverlap => "coin overlap",
            RoundEvent::EnemyOverlap => "enemy overlap",
            RoundEvent::PauseRequested => "pause request",
            RoundEvent::ResumeRequested => "resume request",
            RoundEvent::KeyDown => "key down",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Event arrived in a phase that does not accept it
    #[error("{event} ignored while {phase:?}")]
    InvalidPhase { event: RoundEvent, phase: RoundPhase },
    /// Phase change the round state machine forbids
    #[error("illegal phase transition {from:?} -> {to:?}")]
    IllegalTransition { from: RoundPhase, to: RoundPhase },
}
