use serde::{Deserialize, Serialize};

use crate::core::combat_math::shielded_hp;

/// Class-specific data carried by a hero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HeroClass {
    /// Plain hero with no overrides.
    Base,
    Tank {
        shield_multiplier: f64,
    },
    Mage {
        /// Never spent; only gates the staff multiplier.
        mana: i32,
        staff_multiplier: i32,
    },
    Assassin {
        /// Probability of a critical hit per attack.
        crit_chance: f64,
    },
    Cleric {
        /// Stored only; no computation reads it.
        mana_multiplier: f64,
    },
}

/// Field-less tag for a [`HeroClass`], used in events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeroKind {
    Base,
    Tank,
    Mage,
    Assassin,
    Cleric,
}

impl HeroKind {
    /// Bracketed label used in console output. The base hero has none.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            HeroKind::Base => None,
            HeroKind::Tank => Some("Tank"),
            HeroKind::Mage => Some("Mage"),
            HeroKind::Assassin => Some("Assassin"),
            HeroKind::Cleric => Some("Cleric"),
        }
    }
}

impl HeroClass {
    pub fn kind(&self) -> HeroKind {
        match self {
            HeroClass::Base => HeroKind::Base,
            HeroClass::Tank { .. } => HeroKind::Tank,
            HeroClass::Mage { .. } => HeroKind::Mage,
            HeroClass::Assassin { .. } => HeroKind::Assassin,
            HeroClass::Cleric { .. } => HeroKind::Cleric,
        }
    }
}

/// A combatant. Death is a flag; heroes are never removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    name: String,
    hp: i32,
    attack: i32,
    alive: bool,
    class: HeroClass,
}

impl Hero {
    /// Create a base hero. Inputs are not validated; see [`super::validate`].
    pub fn new(name: impl Into<String>, hp: i32, attack: i32) -> Self {
        Self::with_class(name, hp, attack, HeroClass::Base)
    }

    /// Create a tank. Starting hit points are scaled by the shield multiplier.
    pub fn tank(name: impl Into<String>, hp: i32, attack: i32, shield_multiplier: f64) -> Self {
        Self::with_class(
            name,
            shielded_hp(hp, shield_multiplier),
            attack,
            HeroClass::Tank { shield_multiplier },
        )
    }

    pub fn mage(
        name: impl Into<String>,
        hp: i32,
        attack: i32,
        mana: i32,
        staff_multiplier: i32,
    ) -> Self {
        Self::with_class(
            name,
            hp,
            attack,
            HeroClass::Mage {
                mana,
                staff_multiplier,
            },
        )
    }

    pub fn assassin(name: impl Into<String>, hp: i32, attack: i32, crit_chance: f64) -> Self {
        Self::with_class(name, hp, attack, HeroClass::Assassin { crit_chance })
    }

    pub fn cleric(name: impl Into<String>, hp: i32, attack: i32, mana_multiplier: f64) -> Self {
        Self::with_class(name, hp, attack, HeroClass::Cleric { mana_multiplier })
    }

    fn with_class(name: impl Into<String>, hp: i32, attack: i32, class: HeroClass) -> Self {
        Self {
            name: name.into(),
            hp,
            attack,
            alive: true,
            class,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn attack(&self) -> i32 {
        self.attack
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn class(&self) -> &HeroClass {
        &self.class
    }

    pub fn kind(&self) -> HeroKind {
        self.class.kind()
    }

    /// Current mana, for mages only.
    pub fn mana(&self) -> Option<i32> {
        match self.class {
            HeroClass::Mage { mana, .. } => Some(mana),
            _ => None,
        }
    }

    pub(super) fn hp_mut(&mut self) -> &mut i32 {
        &mut self.hp
    }

    pub(super) fn mark_dead(&mut self) {
        self.alive = false;
    }
}
