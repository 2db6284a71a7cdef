//! Combat tuning constants.

/// Hit points restored by a single heal action.
pub const BASE_HEAL_AMOUNT: i32 = 10;

/// Mana a mage needs before the staff multiplier applies.
pub const MAGE_MANA_THRESHOLD: i32 = 100;

/// Damage multiplier for an assassin's critical hit.
pub const CRIT_DAMAGE_MULTIPLIER: f64 = 2.0;
