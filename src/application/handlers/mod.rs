//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

mod run_turn;

pub use run_turn::{RunTurnCommand, RunTurnHandler, TurnError, TurnOutcome};
