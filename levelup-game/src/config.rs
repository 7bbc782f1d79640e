//! Engine tuning configuration.
//!
//! Defaults mirror `constants.rs`; a host can override individual knobs from
//! JSON without recompiling. Probability thresholds for the motivation roll
//! stay constants on purpose: they shape the distribution, not the balance.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    ADDICTION_HEALTH_PENALTY, ADDICTION_WELLBEING_PENALTY, DEFAULT_MAX_ENERGY,
    HEALTHY_MEAL_HEALTH_BONUS, INJURY_LOCKOUT_DAYS, INJURY_RISK_STEP_PCT,
    INJURY_WELLBEING_PENALTY, JUNK_FOOD_HEALTH_PENALTY, MOTIVATION_WELLBEING_SHIELD,
    OVERTRAINING_DAILY_LIMIT, RECOVERY_GATE_STAT_MIN, SKILL_DECAY_FLOOR,
    SKILL_DECAY_INTERVAL_DAYS, SKIPPED_MEALS_WELLBEING_PENALTY, SOCIAL_ISOLATION_PENALTY,
    SOCIAL_ISOLATION_THRESHOLD,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub max_energy: i32,
    pub injury_lockout_days: u32,
    pub injury_wellbeing_penalty: i32,
    pub injury_risk_step_pct: u32,
    pub junk_food_health_penalty: i32,
    pub healthy_meal_health_bonus: i32,
    pub skipped_meals_wellbeing_penalty: i32,
    pub addiction_health_penalty: i32,
    pub addiction_wellbeing_penalty: i32,
    pub overtraining_daily_limit: u32,
    pub social_isolation_threshold: u32,
    pub social_isolation_penalty: i32,
    pub skill_decay_interval_days: u32,
    pub skill_decay_floor: i32,
    pub motivation_wellbeing_shield: i32,
    pub recovery_gate_stat_min: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_energy: DEFAULT_MAX_ENERGY,
            injury_lockout_days: INJURY_LOCKOUT_DAYS,
            injury_wellbeing_penalty: INJURY_WELLBEING_PENALTY,
            injury_risk_step_pct: INJURY_RISK_STEP_PCT,
            junk_food_health_penalty: JUNK_FOOD_HEALTH_PENALTY,
            healthy_meal_health_bonus: HEALTHY_MEAL_HEALTH_BONUS,
            skipped_meals_wellbeing_penalty: SKIPPED_MEALS_WELLBEING_PENALTY,
            addiction_health_penalty: ADDICTION_HEALTH_PENALTY,
            addiction_wellbeing_penalty: ADDICTION_WELLBEING_PENALTY,
            overtraining_daily_limit: OVERTRAINING_DAILY_LIMIT,
            social_isolation_threshold: SOCIAL_ISOLATION_THRESHOLD,
            social_isolation_penalty: SOCIAL_ISOLATION_PENALTY,
            skill_decay_interval_days: SKILL_DECAY_INTERVAL_DAYS,
            skill_decay_floor: SKILL_DECAY_FLOOR,
            motivation_wellbeing_shield: MOTIVATION_WELLBEING_SHIELD,
            recovery_gate_stat_min: RECOVERY_GATE_STAT_MIN,
        }
    }
}

impl EngineConfig {
    /// Get default configuration
    #[must_use]
    pub fn default_config() -> Self {
        Self::default()
    }

    /// Parse a config override from JSON. Missing fields keep their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a field has the wrong
    /// type.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid engine config: {0}")]
    Parse(#[from] serde_json::Error),
}
