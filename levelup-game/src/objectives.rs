//! Objective ladder and victory evaluation.
//!
//! The ladder is a fixed ordered list of predicates over the stat gauges.
//! The current objective is always derived from state, never cached.

use serde::{Deserialize, Serialize};

use crate::state::Stats;

type ObjectiveCheck = fn(&Stats) -> bool;

/// One milestone of the ladder.
pub struct Objective {
    pub id: u8,
    pub text: &'static str,
    check: ObjectiveCheck,
}

impl Objective {
    #[must_use]
    pub fn is_met(&self, stats: &Stats) -> bool {
        (self.check)(stats)
    }
}

fn health_foundation(s: &Stats) -> bool {
    s.health >= 20
}

fn sport_halfway(s: &Stats) -> bool {
    s.sport >= 50
}

fn intelligence_halfway(s: &Stats) -> bool {
    s.intelligence >= 50
}

fn everything_maxed(s: &Stats) -> bool {
    s.is_maxed()
}

/// Milestones in presentation order.
pub const OBJECTIVES: [Objective; 4] = [
    Objective {
        id: 1,
        text: "Reach 20% Health",
        check: health_foundation,
    },
    Objective {
        id: 2,
        text: "Reach 50% Sport",
        check: sport_halfway,
    },
    Objective {
        id: 3,
        text: "Reach 50% Intelligence",
        check: intelligence_halfway,
    },
    Objective {
        id: 4,
        text: "Become the best version of yourself (everything at 100%)",
        check: everything_maxed,
    },
];

const TERMINAL_OBJECTIVE_ID: u8 = 99;
const TERMINAL_OBJECTIVE_TEXT: &str = "Game complete! You are at the top!";

/// Snapshot of the current objective for the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveStatus {
    pub id: u8,
    pub text: String,
    pub is_complete: bool,
}

/// First unmet milestone, or the terminal sentinel once the ladder is done.
#[must_use]
pub fn current_objective(stats: &Stats) -> ObjectiveStatus {
    for objective in &OBJECTIVES {
        if !objective.is_met(stats) {
            return ObjectiveStatus {
                id: objective.id,
                text: objective.text.to_string(),
                is_complete: false,
            };
        }
    }
    ObjectiveStatus {
        id: TERMINAL_OBJECTIVE_ID,
        text: TERMINAL_OBJECTIVE_TEXT.to_string(),
        is_complete: true,
    }
}

/// True iff every gauge sits exactly at 100.
#[must_use]
pub fn is_victory(stats: &Stats) -> bool {
    stats.is_maxed()
}
