//! Fixed action scripts.

use serde::{Deserialize, Serialize};

use super::arena::HeroId;

/// One step of a scripted fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArenaAction {
    Display(HeroId),
    DisplayAll,
    Attack { attacker: HeroId, target: HeroId },
    Heal { healer: HeroId, target: HeroId },
}

impl ArenaAction {
    pub fn attack(attacker: HeroId, target: HeroId) -> Self {
        ArenaAction::Attack { attacker, target }
    }

    pub fn heal(healer: HeroId, target: HeroId) -> Self {
        ArenaAction::Heal { healer, target }
    }
}
