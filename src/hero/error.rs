//! Hero construction checks.

use super::types::{Hero, HeroClass};

/// Reasons a hero is rejected by [`validate`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum HeroError {
    #[error("{name} has non-positive hit points ({hp})")]
    NonPositiveHitPoints { name: String, hp: i32 },

    #[error("{name} has crit chance {chance} outside [0, 1]")]
    CritChanceOutOfRange { name: String, chance: f64 },

    #[error("{name} has negative attack ({attack})")]
    NegativeAttack { name: String, attack: i32 },

    #[error("{name} has non-positive shield multiplier {multiplier}")]
    NonPositiveShield { name: String, multiplier: f64 },
}

/// Reject heroes that would start dead or roll impossible probabilities.
///
/// Constructors never call this; it is opt-in for sessions that want it.
pub fn validate(hero: &Hero) -> Result<(), HeroError> {
    let name = hero.name().to_string();

    match *hero.class() {
        HeroClass::Assassin { crit_chance } if !(0.0..=1.0).contains(&crit_chance) => {
            return Err(HeroError::CritChanceOutOfRange {
                name,
                chance: crit_chance,
            });
        }
        HeroClass::Tank { shield_multiplier } if shield_multiplier <= 0.0 => {
            return Err(HeroError::NonPositiveShield {
                name,
                multiplier: shield_multiplier,
            });
        }
        _ => {}
    }

    if hero.hp() <= 0 {
        return Err(HeroError::NonPositiveHitPoints { name, hp: hero.hp() });
    }

    // A negative attack would heal whoever it hits
    if hero.attack() < 0 {
        return Err(HeroError::NegativeAttack {
            name,
            attack: hero.attack(),
        });
    }

    Ok(())
}
