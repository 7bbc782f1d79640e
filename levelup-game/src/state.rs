//! Player state and stat gauges.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    DEFAULT_MAX_ENERGY, DEFAULT_PLAYER_NAME, START_HEALTH, START_INTELLIGENCE, START_SOCIAL,
    START_SPORT, START_WELLBEING, STAT_MAX, STAT_MIN,
};

/// The five life gauges, each held in `[0, 100]` after every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub intelligence: i32,
    pub sport: i32,
    pub wellbeing: i32,
    pub health: i32,
    pub social: i32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            intelligence: START_INTELLIGENCE,
            sport: START_SPORT,
            wellbeing: START_WELLBEING,
            health: START_HEALTH,
            social: START_SOCIAL,
        }
    }
}

impl Stats {
    pub fn clamp(&mut self) {
        self.intelligence = self.intelligence.clamp(STAT_MIN, STAT_MAX);
        self.sport = self.sport.clamp(STAT_MIN, STAT_MAX);
        self.wellbeing = self.wellbeing.clamp(STAT_MIN, STAT_MAX);
        self.health = self.health.clamp(STAT_MIN, STAT_MAX);
        self.social = self.social.clamp(STAT_MIN, STAT_MAX);
    }

    /// All five gauges in a fixed order, handy for invariant checks.
    #[must_use]
    pub const fn as_array(&self) -> [i32; 5] {
        [
            self.intelligence,
            self.sport,
            self.wellbeing,
            self.health,
            self.social,
        ]
    }

    /// Whether every gauge sits at the 100 ceiling.
    #[must_use]
    pub const fn is_maxed(&self) -> bool {
        self.intelligence == STAT_MAX
            && self.sport == STAT_MAX
            && self.wellbeing == STAT_MAX
            && self.health == STAT_MAX
            && self.social == STAT_MAX
    }
}

/// Per-day mood tier, re-rolled every morning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Motivation {
    Low,
    #[default]
    Normal,
    High,
}

impl Motivation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Motivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Motivation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "normal" => Ok(Self::Normal),
            "high" => Ok(Self::High),
            _ => Err(()),
        }
    }
}

/// The sole mutable entity of the simulation. Mutated only by action
/// resolution and day settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub name: String,
    pub stats: Stats,
    pub energy: i32,
    pub max_energy: i32,
    #[serde(default)]
    pub money: i32,
    pub day: u32,
    pub has_addiction: bool,
    #[serde(default)]
    pub addiction_recovery_progress: u8,
    #[serde(default)]
    pub injured_until_day: Option<u32>,
    #[serde(default)]
    pub muscle_fatigue: bool,
    #[serde(default)]
    pub motivation: Motivation,
    #[serde(default)]
    pub days_since_last_social: u32,
    #[serde(default)]
    pub sport_actions_today: u32,
    #[serde(default)]
    pub sport_actions_yesterday: u32,
    #[serde(default)]
    pub actions_performed_today: u32,
    #[serde(default)]
    pub ate_healthy_today: bool,
    #[serde(default)]
    pub ate_junk_today: bool,
    #[serde(default)]
    pub game_won: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER_NAME)
    }
}

impl PlayerState {
    /// Fresh day-one state. An empty or whitespace name falls back to the
    /// default placeholder.
    #[must_use]
    pub fn new(name: &str) -> Self {
        let name = name.trim();
        let name = if name.is_empty() {
            DEFAULT_PLAYER_NAME.to_string()
        } else {
            name.to_string()
        };
        Self {
            name,
            stats: Stats::default(),
            energy: DEFAULT_MAX_ENERGY,
            max_energy: DEFAULT_MAX_ENERGY,
            money: 0,
            day: 1,
            has_addiction: true,
            addiction_recovery_progress: 0,
            injured_until_day: None,
            muscle_fatigue: false,
            motivation: Motivation::Normal,
            days_since_last_social: 0,
            sport_actions_today: 0,
            sport_actions_yesterday: 0,
            actions_performed_today: 0,
            ate_healthy_today: false,
            ate_junk_today: false,
            game_won: false,
        }
    }

    /// Whether the sport lockout is still active. The lockout clears by
    /// comparison once `day` catches up; the field is never reset.
    #[must_use]
    pub fn is_injured(&self) -> bool {
        self.injured_until_day.is_some_and(|until| until > self.day)
    }

    /// Days of sport lockout left, for display purposes.
    #[must_use]
    pub fn injury_days_remaining(&self) -> u32 {
        self.injured_until_day
            .map_or(0, |until| until.saturating_sub(self.day))
    }

    pub(crate) fn reset_daily_trackers(&mut self) {
        self.sport_actions_today = 0;
        self.actions_performed_today = 0;
        self.ate_healthy_today = false;
        self.ate_junk_today = false;
    }
}
