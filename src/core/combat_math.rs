//! Shared combat math functions.
//!
//! These pure functions calculate damage outcomes without side effects.
//! Hero logic uses them so that every variant truncates the same way.

use super::constants::{CRIT_DAMAGE_MULTIPLIER, MAGE_MANA_THRESHOLD};
use rand::Rng;

/// Result of an assassin attack calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackResult {
    /// Damage dealt (after crit multiplier if applicable).
    pub damage: i32,
    /// Whether this attack was a critical hit.
    pub is_crit: bool,
}

/// Scale an integer amount by a float multiplier, truncating toward zero.
///
/// # Arguments
/// * `amount` - Base value (attack or hit points)
/// * `multiplier` - Float multiplier (shield, crit)
///
/// # Returns
/// The scaled value; results outside `i32` saturate at its bounds
pub fn scale(amount: i32, multiplier: f64) -> i32 {
    (amount as f64 * multiplier) as i32
}

/// Roll for a critical hit.
///
/// Consumes exactly one uniform draw in `[0, 1)` from `rng`. A chance of
/// 1.0 or more always crits; 0.0 or less never does.
pub fn roll_crit(crit_chance: f64, rng: &mut impl Rng) -> bool {
    let roll: f64 = rng.gen();
    roll < crit_chance
}

/// Calculate assassin damage with a fresh crit roll.
///
/// # Arguments
/// * `attack` - Assassin's base attack
/// * `crit_chance` - Probability of a critical hit (values above 1.0 always crit)
/// * `rng` - Session random number generator, drawn from exactly once
///
/// # Returns
/// AttackResult with final damage and crit flag
pub fn calculate_assassin_attack(
    attack: i32,
    crit_chance: f64,
    rng: &mut impl Rng,
) -> AttackResult {
    let is_crit = roll_crit(crit_chance, rng);
    let damage = if is_crit {
        scale(attack, CRIT_DAMAGE_MULTIPLIER)
    } else {
        attack
    };

    AttackResult { damage, is_crit }
}

/// Whether a mage has enough mana for the staff multiplier.
pub fn is_empowered(mana: i32) -> bool {
    mana >= MAGE_MANA_THRESHOLD
}

/// Calculate mage damage.
///
/// The threshold is hard: no partial bonus below it. Mana is only read.
///
/// # Arguments
/// * `attack` - Mage's base attack
/// * `mana` - Current mana
/// * `staff_multiplier` - Multiplier applied at or above the mana threshold
///
/// # Returns
/// Effective damage, saturating at the `i32` bounds
pub fn calculate_mage_attack(attack: i32, mana: i32, staff_multiplier: i32) -> i32 {
    if is_empowered(mana) {
        attack.saturating_mul(staff_multiplier)
    } else {
        attack
    }
}

/// Starting hit points for a tank after its shield is applied.
pub fn shielded_hp(hp: i32, shield_multiplier: f64) -> i32 {
    scale(hp, shield_multiplier)
}
