//! Centralized balance and message constants for the Level Up engine.
//!
//! These values define the deterministic math for the core simulation.
//! Keeping them together ensures that gameplay can only be adjusted via
//! code changes reviewed in version control (or an explicit `EngineConfig`
//! override), rather than through scattered magic numbers.

// Stat bounds --------------------------------------------------------------
pub(crate) const STAT_MIN: i32 = 0;
pub(crate) const STAT_MAX: i32 = 100;

// Starting state -----------------------------------------------------------
pub(crate) const START_INTELLIGENCE: i32 = 20;
pub(crate) const START_SPORT: i32 = 10;
pub(crate) const START_WELLBEING: i32 = 10;
pub(crate) const START_HEALTH: i32 = 10;
pub(crate) const START_SOCIAL: i32 = 40;
pub(crate) const DEFAULT_MAX_ENERGY: i32 = 100;
pub(crate) const DEFAULT_PLAYER_NAME: &str = "Player";

// Injury tuning ------------------------------------------------------------
pub(crate) const SPORT_SAFE_LIMIT_DIVISOR: i32 = 10;
pub(crate) const INJURY_RISK_STEP_PCT: u32 = 15;
pub(crate) const INJURY_LOCKOUT_DAYS: u32 = 5;
pub(crate) const INJURY_WELLBEING_PENALTY: i32 = 10;

// Settlement tuning --------------------------------------------------------
pub(crate) const JUNK_FOOD_HEALTH_PENALTY: i32 = 5;
pub(crate) const HEALTHY_MEAL_HEALTH_BONUS: i32 = 2;
pub(crate) const SKIPPED_MEALS_WELLBEING_PENALTY: i32 = 5;
pub(crate) const ADDICTION_HEALTH_PENALTY: i32 = 3;
pub(crate) const ADDICTION_WELLBEING_PENALTY: i32 = 2;
pub(crate) const OVERTRAINING_DAILY_LIMIT: u32 = 2;
pub(crate) const SOCIAL_ISOLATION_THRESHOLD: u32 = 5;
pub(crate) const SOCIAL_ISOLATION_PENALTY: i32 = 20;
pub(crate) const SKILL_DECAY_INTERVAL_DAYS: u32 = 3;
pub(crate) const SKILL_DECAY_FLOOR: i32 = 20;
pub(crate) const SKILL_DECAY_AMOUNT: i32 = 1;

// Motivation tuning --------------------------------------------------------
pub(crate) const MOTIVATION_WELLBEING_SHIELD: i32 = 60;
pub(crate) const MOTIVATION_LOW_CHANCE: f64 = 0.2;
pub(crate) const MOTIVATION_HIGH_THRESHOLD: f64 = 0.8;
pub(crate) const MOTIVATION_SHIELDED_HIGH_THRESHOLD: f64 = 0.6;

// Addiction recovery -------------------------------------------------------
pub(crate) const RECOVERY_STEPS_TO_CURE: u8 = 3;
pub(crate) const RECOVERY_GATE_STAT_MIN: i32 = 30;

// Journal ------------------------------------------------------------------
pub(crate) const JOURNAL_CAPACITY: usize = 50;

// Rejection messages -------------------------------------------------------
pub(crate) const MSG_NO_ENERGY: &str = "Not enough energy! Get some rest.";
pub(crate) const MSG_INJURY_LOCKOUT: &str = "You are injured! No sport for now.";
pub(crate) const MSG_MUSCLE_FATIGUE: &str = "Your muscles are wrecked. Rest them today.";
pub(crate) const MSG_ALREADY_ATE: &str = "You already had your meal today.";
pub(crate) const MSG_MOTIVATION_TOO_LOW: &str = "Too demotivated for that right now...";
pub(crate) const MSG_RECOVERY_GATE: &str =
    "You need more Sport or Wellbeing (above 30%) before fighting the addiction.";

// Session messages ---------------------------------------------------------
pub(crate) const MSG_STARTING_CONDITION: &str =
    "You start out with an addiction and fragile health. Time to change that.";
pub(crate) const MSG_VICTORY: &str = "You have become the best version of yourself!";

// Day summary lines --------------------------------------------------------
pub(crate) const SUMMARY_JUNK_FOOD: &str = "Junk food takes a toll on your body (-5 Health).";
pub(crate) const SUMMARY_HEALTHY_FOOD: &str = "Eating well pays off (+2 Health).";
pub(crate) const SUMMARY_NO_FOOD: &str = "You barely ate today (-5 Wellbeing).";
pub(crate) const SUMMARY_ADDICTION: &str = "Your addiction wears your health down (-3 Health).";
pub(crate) const SUMMARY_OVERTRAINED: &str =
    "You overdid the sport today (twice in one day). Sore muscles tomorrow, guaranteed!";
pub(crate) const SUMMARY_CONSECUTIVE_TRAINING: &str =
    "Two days of sport in a row... your muscles are begging for a break.";
pub(crate) const SUMMARY_MUSCLES_RECOVERED: &str =
    "Your muscles have recovered. Ready to train again!";
pub(crate) const SUMMARY_ISOLATION: &str = "Social isolation weighs on you (-20 Social).";
pub(crate) const SUMMARY_SLEEP: &str = "A good night's sleep restores your energy to 100.";
pub(crate) const SUMMARY_MOTIVATED_SHIELDED: &str =
    "Thanks to your wellbeing, you wake up super motivated!";
pub(crate) const SUMMARY_MOTIVATED_HIGH: &str = "You wake up super motivated!";
pub(crate) const SUMMARY_MOTIVATION_LOW: &str = "You wake up with zero motivation...";
pub(crate) const SUMMARY_SKILL_DECAY: &str =
    "Your skills fade slightly from lack of practice.";

// Action success messages --------------------------------------------------
pub(crate) const MSG_CARDIO_DONE: &str = "Cardio session done. You feel invigorated!";
pub(crate) const MSG_WEIGHTS_DONE: &str = "Heavy lifting session. Your muscles are burning!";
pub(crate) const MSG_READ_DONE: &str = "You read a fascinating chapter.";
pub(crate) const MSG_WORK_DONE: &str = "Another day of work done.";
pub(crate) const MSG_MEDITATE_DONE: &str = "You feel more at peace.";
pub(crate) const MSG_HEALTHY_MEAL_DONE: &str = "A balanced meal, well done!";
pub(crate) const MSG_JUNK_FOOD_DONE: &str = "That was tasty, but you feel a little guilty.";
pub(crate) const MSG_FRIENDS_DONE: &str =
    "Good times with friends. Your social gauge is recharged.";
pub(crate) const MSG_RECOVERY_STEP: &str = "One more step toward freedom. Hold on!";
pub(crate) const MSG_RECOVERY_CURED: &str = "Free at last! You beat the addiction!";
