//! Level Up Game Engine
//!
//! Platform-agnostic core game logic for the Level Up life-sim game.
//! This crate provides all game mechanics without UI or platform-specific
//! dependencies: the renderer displays snapshots, invokes operations in
//! response to player intent, and shows the journal and day summaries the
//! engine hands back.

pub mod actions;
pub mod config;
pub mod constants;
pub mod engine;
pub mod journal;
pub mod objectives;
pub mod rng;
pub mod seed;
pub mod settlement;
pub mod state;

// Re-export commonly used types
pub use actions::{
    ActionCategory, ActionId, ActionOutcome, ActionResolution, ActionSpec, RejectReason,
    disabled_reason, injury_chance_pct, perform_action, sport_safe_limit,
};
pub use config::{ConfigError, EngineConfig};
pub use engine::{ActionReport, DayReport, GameEngine};
pub use journal::{GameLogEntry, Journal, Severity};
pub use objectives::{OBJECTIVES, Objective, ObjectiveStatus, current_objective, is_victory};
pub use rng::{FixedRng, RngSource, SessionRng};
pub use seed::{decode_to_seed, encode_friendly, generate_code_from_entropy};
pub use settlement::{DaySummary, settle_day};
pub use state::{Motivation, PlayerState, Stats};
