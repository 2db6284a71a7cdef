//! Structured combat events and the sinks that consume them.
//!
//! Hero logic never prints. Every observable outcome is a [`CombatEvent`]
//! handed to an [`EventSink`]; the console renderer is just one sink.

use crate::hero::HeroKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How an attack was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackStyle {
    /// Plain attack at base power.
    Standard,
    /// Tank's flavored declaration, followed by a standard attack.
    Shielded,
    /// Mage had enough mana for the staff multiplier.
    Empowered { mana: i32 },
    /// Mage fell short of the mana threshold.
    Unempowered { mana: i32 },
    /// Assassin landed a critical hit.
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CombatEvent {
    // ── Display ─────────────────────────────────────────────────
    /// Stats of a living hero. `mana` is only present for mages.
    Stats {
        name: String,
        kind: HeroKind,
        hp: i32,
        attack: i32,
        mana: Option<i32>,
    },

    /// Stats requested for a dead hero.
    StatsOfDead { name: String, kind: HeroKind },

    // ── Actions ─────────────────────────────────────────────────
    /// A hero declared an attack. Damage is applied by a following
    /// `DamageTaken` (or `TargetAlreadyDead`) event.
    AttackDeclared {
        attacker: String,
        kind: HeroKind,
        target: String,
        damage: i32,
        style: AttackStyle,
    },

    /// Damage was subtracted from a living hero.
    DamageTaken {
        name: String,
        damage: i32,
        remaining_hp: i32,
    },

    /// A hero's hit points dropped to zero or below.
    Died { name: String },

    /// Healing was added to a living hero.
    HealingReceived {
        name: String,
        amount: i32,
        current_hp: i32,
    },

    // ── Dead-hero notices ───────────────────────────────────────
    CannotAttack { name: String },
    CannotHeal { name: String },
    /// Healing was aimed at a dead hero.
    HealingRefused { name: String },
    /// An attack landed on a hero that was already dead.
    TargetAlreadyDead { name: String },
}

impl CombatEvent {
    /// The hero this event is primarily about.
    pub fn subject(&self) -> &str {
        match self {
            CombatEvent::Stats { name, .. }
            | CombatEvent::StatsOfDead { name, .. }
            | CombatEvent::DamageTaken { name, .. }
            | CombatEvent::Died { name }
            | CombatEvent::HealingReceived { name, .. }
            | CombatEvent::CannotAttack { name }
            | CombatEvent::CannotHeal { name }
            | CombatEvent::HealingRefused { name }
            | CombatEvent::TargetAlreadyDead { name } => name,
            CombatEvent::AttackDeclared { attacker, .. } => attacker,
        }
    }

    /// True for the notices emitted when a dead hero is involved.
    pub fn is_dead_notice(&self) -> bool {
        matches!(
            self,
            CombatEvent::CannotAttack { .. }
                | CombatEvent::CannotHeal { .. }
                | CombatEvent::HealingRefused { .. }
                | CombatEvent::TargetAlreadyDead { .. }
                | CombatEvent::StatsOfDead { .. }
        )
    }
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatEvent::Stats {
                name,
                kind,
                hp,
                attack,
                mana,
            } => {
                if let Some(label) = kind.label() {
                    write!(f, "[{label}] ")?;
                }
                write!(f, "Name: {name}, HP: {hp}, Attack: {attack}")?;
                if let Some(mana) = mana {
                    write!(f, ", Mana: {mana}")?;
                }
                Ok(())
            }
            CombatEvent::StatsOfDead { name, kind } => match kind.label() {
                Some(label) => write!(f, "[{label}] {name} is dead."),
                None => write!(f, "{name} is dead."),
            },
            CombatEvent::AttackDeclared {
                attacker,
                kind,
                target,
                damage,
                style,
            } => match style {
                AttackStyle::Standard => match kind.label() {
                    Some(label) if *kind != HeroKind::Tank => write!(
                        f,
                        "{attacker} ({label}) attacks {target} for {damage} damage!"
                    ),
                    _ => write!(f, "{attacker} attacks {target} for {damage} damage!"),
                },
                AttackStyle::Shielded => write!(
                    f,
                    "{attacker} (Tank) attacks {target} for {damage} damage!"
                ),
                AttackStyle::Empowered { mana } => write!(
                    f,
                    "{attacker} (Mage) uses magic to attack {target} for {damage} damage! Remaining Mana: {mana}"
                ),
                AttackStyle::Unempowered { .. } => write!(
                    f,
                    "{attacker} (Mage) attacks {target} for {damage} damage! Not enough mana for staff multiplier."
                ),
                AttackStyle::Critical => write!(
                    f,
                    "{attacker} (Assassin) lands a critical hit on {target} for {damage} damage!"
                ),
            },
            CombatEvent::DamageTaken {
                name,
                damage,
                remaining_hp,
            } => write!(
                f,
                "{name} receives {damage} damage! Remaining HP: {remaining_hp}"
            ),
            CombatEvent::Died { name } => write!(f, "{name} has died."),
            CombatEvent::HealingReceived {
                name,
                amount,
                current_hp,
            } => write!(
                f,
                "{name} receives {amount} healing! Current HP: {current_hp}"
            ),
            CombatEvent::CannotAttack { name } => {
                write!(f, "{name} is dead and cannot attack.")
            }
            CombatEvent::CannotHeal { name } => write!(f, "{name} is dead and cannot heal."),
            CombatEvent::HealingRefused { name } => {
                write!(f, "{name} is dead and cannot be healed.")
            }
            CombatEvent::TargetAlreadyDead { name } => {
                write!(f, "{name} is already dead.")
            }
        }
    }
}

/// Consumer of combat events.
pub trait EventSink {
    fn record(&mut self, event: CombatEvent);
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn record(&mut self, event: CombatEvent) {
        (**self).record(event);
    }
}

/// In-memory event log. Used by tests and the JSON export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombatLog {
    events: Vec<CombatEvent>,
}

impl CombatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[CombatEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Number of `Died` events recorded for a hero.
    pub fn deaths_of(&self, name: &str) -> usize {
        self.about(name)
            .filter(|e| matches!(e, CombatEvent::Died { .. }))
            .count()
    }

    /// All damage amounts applied to a hero, in order.
    pub fn damage_taken_by(&self, name: &str) -> Vec<i32> {
        self.about(name)
            .filter_map(|e| match e {
                CombatEvent::DamageTaken { damage, .. } => Some(*damage),
                _ => None,
            })
            .collect()
    }

    /// Events whose [`CombatEvent::subject`] is `name`, in order.
    pub fn about<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a CombatEvent> + 'a {
        self.events.iter().filter(move |e| e.subject() == name)
    }

    /// Rendered console lines, one per event.
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl EventSink for CombatLog {
    fn record(&mut self, event: CombatEvent) {
        self.events.push(event);
    }
}

/// Prints each event as a line on stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn record(&mut self, event: CombatEvent) {
        println!("{event}");
    }
}

/// Forwards every event to two sinks.
#[derive(Debug, Default)]
pub struct Tee<A, B> {
    pub first: A,
    pub second: B,
}

impl<A: EventSink, B: EventSink> EventSink for Tee<A, B> {
    fn record(&mut self, event: CombatEvent) {
        self.first.record(event.clone());
        self.second.record(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_lines_match_console_format() {
        let tank = CombatEvent::Stats {
            name: "Garen".to_string(),
            kind: HeroKind::Tank,
            hp: 225,
            attack: 50,
            mana: None,
        };
        assert_eq!(tank.to_string(), "[Tank] Name: Garen, HP: 225, Attack: 50");

        let mage = CombatEvent::Stats {
            name: "Ryze".to_string(),
            kind: HeroKind::Mage,
            hp: 100,
            attack: 70,
            mana: Some(200),
        };
        assert_eq!(
            mage.to_string(),
            "[Mage] Name: Ryze, HP: 100, Attack: 70, Mana: 200"
        );

        let base = CombatEvent::StatsOfDead {
            name: "Nobody".to_string(),
            kind: HeroKind::Base,
        };
        assert_eq!(base.to_string(), "Nobody is dead.");
    }

    #[test]
    fn test_attack_lines_by_style() {
        let declared = |kind, style| CombatEvent::AttackDeclared {
            attacker: "A".to_string(),
            kind,
            target: "B".to_string(),
            damage: 5,
            style,
        };

        assert_eq!(
            declared(HeroKind::Tank, AttackStyle::Shielded).to_string(),
            "A (Tank) attacks B for 5 damage!"
        );
        assert_eq!(
            declared(HeroKind::Tank, AttackStyle::Standard).to_string(),
            "A attacks B for 5 damage!"
        );
        assert_eq!(
            declared(HeroKind::Cleric, AttackStyle::Standard).to_string(),
            "A (Cleric) attacks B for 5 damage!"
        );
        assert!(declared(HeroKind::Assassin, AttackStyle::Critical)
            .to_string()
            .contains("critical hit"));
    }

    #[test]
    fn test_dead_notice_classification() {
        let name = "X".to_string();
        assert!(CombatEvent::CannotAttack { name: name.clone() }.is_dead_notice());
        assert!(CombatEvent::HealingRefused { name: name.clone() }.is_dead_notice());
        assert!(!CombatEvent::Died { name }.is_dead_notice());
    }

    #[test]
    fn test_combat_log_queries() {
        let mut log = CombatLog::new();
        log.record(CombatEvent::DamageTaken {
            name: "A".to_string(),
            damage: 3,
            remaining_hp: 7,
        });
        log.record(CombatEvent::DamageTaken {
            name: "B".to_string(),
            damage: 4,
            remaining_hp: 1,
        });
        log.record(CombatEvent::Died {
            name: "A".to_string(),
        });

        assert_eq!(log.len(), 3);
        assert_eq!(log.damage_taken_by("A"), vec![3]);
        assert_eq!(log.deaths_of("A"), 1);
        assert_eq!(log.deaths_of("B"), 0);
        assert_eq!(log.events()[2].subject(), "A");
    }

    #[test]
    fn test_log_json_export() {
        let mut log = CombatLog::new();
        log.record(CombatEvent::Died {
            name: "A".to_string(),
        });
        let json = log.to_json().unwrap();
        let parsed: CombatLog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.events(), log.events());
    }

    #[test]
    fn test_tee_forwards_to_both() {
        let mut tee = Tee {
            first: CombatLog::new(),
            second: CombatLog::new(),
        };
        tee.record(CombatEvent::CannotHeal {
            name: "C".to_string(),
        });
        assert_eq!(tee.first.len(), 1);
        assert_eq!(tee.second.len(), 1);
    }
}
