//! End-of-day settlement pipeline.
//!
//! Settlement applies the nightly adjustments in a fixed order, collects one
//! human-readable line per adjustment for the day summary, then rolls the
//! clock forward and resets the daily trackers.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::config::EngineConfig;
use crate::constants::{
    MOTIVATION_HIGH_THRESHOLD, MOTIVATION_LOW_CHANCE, MOTIVATION_SHIELDED_HIGH_THRESHOLD,
    SKILL_DECAY_AMOUNT, SUMMARY_ADDICTION, SUMMARY_CONSECUTIVE_TRAINING, SUMMARY_HEALTHY_FOOD,
    SUMMARY_ISOLATION, SUMMARY_JUNK_FOOD, SUMMARY_MOTIVATED_HIGH, SUMMARY_MOTIVATED_SHIELDED,
    SUMMARY_MOTIVATION_LOW, SUMMARY_MUSCLES_RECOVERED, SUMMARY_NO_FOOD, SUMMARY_OVERTRAINED,
    SUMMARY_SKILL_DECAY, SUMMARY_SLEEP,
};
use crate::rng::RngSource;
use crate::state::{Motivation, PlayerState};

/// Summary returned to the caller after settlement, ordered as the rules
/// ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    /// The day that just ended.
    pub day: u32,
    pub lines: SmallVec<[String; 8]>,
}

/// Settle the current day and advance to the next one.
///
/// Rule order is fixed: nutrition, addiction, fatigue projection, social
/// decay, sleep, motivation roll, periodic skill decay. Deltas accumulate
/// and are applied in one batch before clamping.
pub fn settle_day(
    state: &mut PlayerState,
    cfg: &EngineConfig,
    rng: &mut dyn RngSource,
) -> DaySummary {
    let mut lines: SmallVec<[String; 8]> = SmallVec::new();
    let mut health_delta = 0;
    let mut wellbeing_delta = 0;
    let mut social_delta = 0;

    // 1. Nutrition: junk wins if both flags were somehow set.
    if state.ate_junk_today {
        lines.push(SUMMARY_JUNK_FOOD.to_string());
        health_delta -= cfg.junk_food_health_penalty;
    } else if state.ate_healthy_today {
        lines.push(SUMMARY_HEALTHY_FOOD.to_string());
        health_delta += cfg.healthy_meal_health_bonus;
    } else {
        lines.push(SUMMARY_NO_FOOD.to_string());
        wellbeing_delta -= cfg.skipped_meals_wellbeing_penalty;
    }

    // 2. Addiction drain.
    if state.has_addiction {
        lines.push(SUMMARY_ADDICTION.to_string());
        health_delta -= cfg.addiction_health_penalty;
        wellbeing_delta -= cfg.addiction_wellbeing_penalty;
    }

    // 3. Fatigue projection for tomorrow.
    let overtrained = state.sport_actions_today >= cfg.overtraining_daily_limit;
    let consecutive = state.sport_actions_today > 0 && state.sport_actions_yesterday > 0;
    let next_fatigue = overtrained || consecutive;
    if overtrained {
        lines.push(SUMMARY_OVERTRAINED.to_string());
    } else if consecutive {
        lines.push(SUMMARY_CONSECUTIVE_TRAINING.to_string());
    }
    if state.muscle_fatigue && !next_fatigue {
        lines.push(SUMMARY_MUSCLES_RECOVERED.to_string());
    }

    // 4. Social decay.
    let days_since_social = state.days_since_last_social + 1;
    if days_since_social >= cfg.social_isolation_threshold {
        lines.push(SUMMARY_ISOLATION.to_string());
        social_delta -= cfg.social_isolation_penalty;
    }

    lines.push(SUMMARY_SLEEP.to_string());

    // 5. Motivation roll, shielded by pre-settlement wellbeing.
    let roll = rng.unit();
    let motivation = if state.stats.wellbeing > cfg.motivation_wellbeing_shield {
        if roll > MOTIVATION_SHIELDED_HIGH_THRESHOLD {
            lines.push(SUMMARY_MOTIVATED_SHIELDED.to_string());
            Motivation::High
        } else {
            Motivation::Normal
        }
    } else if roll < MOTIVATION_LOW_CHANCE {
        lines.push(SUMMARY_MOTIVATION_LOW.to_string());
        Motivation::Low
    } else if roll > MOTIVATION_HIGH_THRESHOLD {
        lines.push(SUMMARY_MOTIVATED_HIGH.to_string());
        Motivation::High
    } else {
        Motivation::Normal
    };

    // 6. Periodic skill decay, keyed on the day being settled.
    let decay_day = state.day % cfg.skill_decay_interval_days == 0;
    if decay_day {
        lines.push(SUMMARY_SKILL_DECAY.to_string());
    }

    // Apply deltas in one batch, then clamp every gauge.
    state.stats.health += health_delta;
    state.stats.wellbeing += wellbeing_delta;
    state.stats.social += social_delta;
    if decay_day {
        if state.stats.sport > cfg.skill_decay_floor {
            state.stats.sport -= SKILL_DECAY_AMOUNT;
        }
        if state.stats.intelligence > cfg.skill_decay_floor {
            state.stats.intelligence -= SKILL_DECAY_AMOUNT;
        }
    }
    state.stats.clamp();

    // Roll the clock.
    let ended_day = state.day;
    state.day += 1;
    state.energy = state.max_energy;
    state.days_since_last_social = days_since_social;
    state.motivation = motivation;
    state.muscle_fatigue = next_fatigue;
    state.sport_actions_yesterday = state.sport_actions_today;
    state.reset_daily_trackers();

    DaySummary {
        day: ended_day,
        lines,
    }
}
