//! Session facade: owns the player state, journal, RNG and tuning config,
//! and exposes the operations a renderer drives.

use log::debug;

use crate::actions::{ActionId, ActionOutcome, perform_action};
use crate::config::EngineConfig;
use crate::constants::{MSG_STARTING_CONDITION, MSG_VICTORY};
use crate::journal::{GameLogEntry, Journal, Severity};
use crate::objectives::{ObjectiveStatus, current_objective, is_victory};
use crate::rng::{RngSource, SessionRng};
use crate::settlement::{DaySummary, settle_day};
use crate::state::PlayerState;

/// Result of one action attempt: the outcome plus the journal entry it
/// produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionReport {
    pub outcome: ActionOutcome,
    pub entry: GameLogEntry,
}

/// Result of one day settlement: the ordered summary plus the day-end
/// journal entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayReport {
    pub summary: DaySummary,
    pub entry: GameLogEntry,
}

/// One game session. All mutation happens inside [`GameEngine::perform`]
/// and [`GameEngine::end_day`]; the renderer only reads snapshots.
pub struct GameEngine<R: RngSource> {
    state: PlayerState,
    journal: Journal,
    rng: R,
    config: EngineConfig,
}

impl GameEngine<SessionRng> {
    /// Start a session with the default config and a ChaCha stream seeded
    /// from a user-visible seed (see [`crate::seed`] for share codes).
    #[must_use]
    pub fn new(name: &str, seed: u64) -> Self {
        Self::with_rng(name, SessionRng::from_user_seed(seed))
    }
}

impl<R: RngSource> GameEngine<R> {
    #[must_use]
    pub fn with_rng(name: &str, rng: R) -> Self {
        Self::with_config(name, rng, EngineConfig::default_config())
    }

    #[must_use]
    pub fn with_config(name: &str, rng: R, config: EngineConfig) -> Self {
        let mut state = PlayerState::new(name);
        state.max_energy = config.max_energy;
        state.energy = config.max_energy;
        let mut journal = Journal::default();
        journal.push(
            state.day,
            format!(
                "Welcome, {}. Your journey to a better life begins.",
                state.name
            ),
            Severity::Info,
        );
        journal.push(state.day, MSG_STARTING_CONDITION, Severity::Warning);
        Self {
            state,
            journal,
            rng,
            config,
        }
    }

    /// Attempt one action. Rejections leave state untouched but still land
    /// in the journal.
    pub fn perform(&mut self, id: ActionId) -> ActionReport {
        let resolution = perform_action(&mut self.state, id, &self.config, &mut self.rng);
        debug!(
            "action {id} on day {} -> {:?}",
            self.state.day, resolution.outcome
        );
        let entry = self
            .journal
            .push(self.state.day, resolution.message, resolution.severity);
        self.latch_victory();
        ActionReport {
            outcome: resolution.outcome,
            entry,
        }
    }

    /// Settle the current day and wake up on the next one.
    pub fn end_day(&mut self) -> DayReport {
        let summary = settle_day(&mut self.state, &self.config, &mut self.rng);
        debug!(
            "day {} settled with {} summary lines",
            summary.day,
            summary.lines.len()
        );
        let entry = self.journal.push(
            summary.day,
            format!("--- End of day {} ---", summary.day),
            Severity::Info,
        );
        self.latch_victory();
        DayReport { summary, entry }
    }

    // One-way latch: set once, never re-evaluated afterwards.
    fn latch_victory(&mut self) {
        if !self.state.game_won && is_victory(&self.state.stats) {
            self.state.game_won = true;
            self.journal
                .push(self.state.day, MSG_VICTORY, Severity::Success);
            debug!("victory latched on day {}", self.state.day);
        }
    }

    /// First unmet milestone, derived fresh from the current stats.
    #[must_use]
    pub fn current_objective(&self) -> ObjectiveStatus {
        current_objective(&self.state.stats)
    }

    #[must_use]
    pub fn is_victory(&self) -> bool {
        self.state.game_won || is_victory(&self.state.stats)
    }

    #[must_use]
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    #[must_use]
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Direct state access for harnesses and tests.
    pub fn with_state_mut(&mut self, f: impl FnOnce(&mut PlayerState)) {
        f(&mut self.state);
    }
}
