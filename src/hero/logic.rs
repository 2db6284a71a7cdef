//! Hero combat behavior.
//!
//! Every action follows the same order: guard on the actor being alive,
//! compute the outgoing amount, then apply it to the target. Each action is
//! split into an actor half (`*_amount`) that only reads the actor and a
//! target half (`receive_*`) that mutates the target, so a session can
//! resolve self-targeted actions without aliasing.

use rand::Rng;
use tracing::{debug, trace};

use super::types::{Hero, HeroClass};
use crate::combat::events::{AttackStyle, CombatEvent, EventSink};
use crate::core::combat_math::{calculate_assassin_attack, calculate_mage_attack, is_empowered};
use crate::core::constants::BASE_HEAL_AMOUNT;

impl Hero {
    /// Emit this hero's stats, or a death notice.
    pub fn display_stats(&self, sink: &mut impl EventSink) {
        let event = if self.is_alive() {
            CombatEvent::Stats {
                name: self.name().to_string(),
                kind: self.kind(),
                hp: self.hp(),
                attack: self.attack(),
                mana: self.mana(),
            }
        } else {
            CombatEvent::StatsOfDead {
                name: self.name().to_string(),
                kind: self.kind(),
            }
        };
        sink.record(event);
    }

    /// Attack `target`. Applies damage at most once.
    pub fn deal_attack(&self, target: &mut Hero, rng: &mut impl Rng, sink: &mut impl EventSink) {
        if let Some(damage) = self.attack_amount(target.name(), rng, sink) {
            target.receive_attack(damage, sink);
        }
    }

    /// Guard, compute, and declare an attack against `target_name`.
    ///
    /// Returns the effective damage to apply, or `None` if this hero is dead.
    /// Only assassins draw from `rng`, exactly once per call.
    pub fn attack_amount(
        &self,
        target_name: &str,
        rng: &mut impl Rng,
        sink: &mut impl EventSink,
    ) -> Option<i32> {
        if !self.is_alive() {
            sink.record(CombatEvent::CannotAttack {
                name: self.name().to_string(),
            });
            return None;
        }

        let damage = match *self.class() {
            HeroClass::Base | HeroClass::Cleric { .. } => self.declare_standard(target_name, sink),
            HeroClass::Tank { .. } => {
                self.declare(target_name, self.attack(), AttackStyle::Shielded, sink);
                self.declare_standard(target_name, sink)
            }
            HeroClass::Mage {
                mana,
                staff_multiplier,
            } => {
                let damage = calculate_mage_attack(self.attack(), mana, staff_multiplier);
                let style = if is_empowered(mana) {
                    AttackStyle::Empowered { mana }
                } else {
                    AttackStyle::Unempowered { mana }
                };
                self.declare(target_name, damage, style, sink);
                damage
            }
            HeroClass::Assassin { crit_chance } => {
                let result = calculate_assassin_attack(self.attack(), crit_chance, rng);
                debug!(
                    assassin = self.name(),
                    crit_chance,
                    is_crit = result.is_crit,
                    "crit roll"
                );
                let style = if result.is_crit {
                    AttackStyle::Critical
                } else {
                    AttackStyle::Standard
                };
                self.declare(target_name, result.damage, style, sink);
                result.damage
            }
        };

        Some(damage)
    }

    /// The base attack path: declare at base power.
    fn declare_standard(&self, target_name: &str, sink: &mut impl EventSink) -> i32 {
        self.declare(target_name, self.attack(), AttackStyle::Standard, sink);
        self.attack()
    }

    fn declare(
        &self,
        target_name: &str,
        damage: i32,
        style: AttackStyle,
        sink: &mut impl EventSink,
    ) {
        sink.record(CombatEvent::AttackDeclared {
            attacker: self.name().to_string(),
            kind: self.kind(),
            target: target_name.to_string(),
            damage,
            style,
        });
    }

    /// Take damage. The only place hit points drop and the only place a hero dies.
    pub fn receive_attack(&mut self, damage: i32, sink: &mut impl EventSink) {
        if !self.is_alive() {
            sink.record(CombatEvent::TargetAlreadyDead {
                name: self.name().to_string(),
            });
            return;
        }

        let hp = self.hp_mut();
        *hp = hp.saturating_sub(damage);
        trace!(hero = self.name(), damage, hp = self.hp(), "damage applied");
        sink.record(CombatEvent::DamageTaken {
            name: self.name().to_string(),
            damage,
            remaining_hp: self.hp(),
        });

        if self.hp() <= 0 {
            self.mark_dead();
            debug!(hero = self.name(), hp = self.hp(), "hero died");
            sink.record(CombatEvent::Died {
                name: self.name().to_string(),
            });
        }
    }

    /// Heal `target` by the fixed heal amount.
    pub fn heal(&self, target: &mut Hero, sink: &mut impl EventSink) {
        if let Some(amount) = self.heal_amount(sink) {
            target.receive_healing(amount, sink);
        }
    }

    /// Guard a heal. Returns the amount to restore, or `None` if this hero is dead.
    pub fn heal_amount(&self, sink: &mut impl EventSink) -> Option<i32> {
        // Clerics check twice: their own guard, then the base one.
        if let HeroClass::Cleric { .. } = self.class() {
            if !self.is_alive() {
                self.refuse_heal(sink);
                return None;
            }
        }

        if !self.is_alive() {
            self.refuse_heal(sink);
            return None;
        }

        Some(BASE_HEAL_AMOUNT)
    }

    fn refuse_heal(&self, sink: &mut impl EventSink) {
        sink.record(CombatEvent::CannotHeal {
            name: self.name().to_string(),
        });
    }

    /// Restore hit points. There is no cap short of `i32::MAX`.
    pub fn receive_healing(&mut self, amount: i32, sink: &mut impl EventSink) {
        if !self.is_alive() {
            sink.record(CombatEvent::HealingRefused {
                name: self.name().to_string(),
            });
            return;
        }

        let hp = self.hp_mut();
        *hp = hp.saturating_add(amount);
        trace!(hero = self.name(), amount, hp = self.hp(), "healing applied");
        sink.record(CombatEvent::HealingReceived {
            name: self.name().to_string(),
            amount,
            current_hp: self.hp(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::events::CombatLog;
    use rand::rngs::mock::StepRng;
    use rand::RngCore;

    fn never_crit() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    fn always_crit() -> StepRng {
        StepRng::new(0, 0)
    }

    #[test]
    fn test_display_stats_alive_and_dead() {
        let mut log = CombatLog::new();
        let mut mage = Hero::mage("Ryze", 100, 70, 200, 2);
        mage.display_stats(&mut log);
        mage.receive_attack(100, &mut log);
        mage.display_stats(&mut log);

        assert!(matches!(
            &log.events()[0],
            CombatEvent::Stats { mana: Some(200), hp: 100, .. }
        ));
        assert!(matches!(
            log.events().last(),
            Some(CombatEvent::StatsOfDead { .. })
        ));
    }

    #[test]
    fn test_base_attack_applies_base_damage() {
        let mut log = CombatLog::new();
        let hero = Hero::new("A", 10, 7);
        let mut target = Hero::new("B", 20, 1);
        hero.deal_attack(&mut target, &mut never_crit(), &mut log);

        assert_eq!(target.hp(), 13);
        assert_eq!(log.damage_taken_by("B"), vec![7]);
    }

    #[test]
    fn test_tank_declares_twice_applies_once() {
        let mut log = CombatLog::new();
        let tank = Hero::tank("Garen", 150, 50, 1.5);
        let mut mage = Hero::mage("Ryze", 100, 70, 200, 2);
        tank.deal_attack(&mut mage, &mut never_crit(), &mut log);

        let styles: Vec<AttackStyle> = log
            .events()
            .iter()
            .filter_map(|e| match e {
                CombatEvent::AttackDeclared { style, .. } => Some(*style),
                _ => None,
            })
            .collect();
        assert_eq!(styles, vec![AttackStyle::Shielded, AttackStyle::Standard]);
        assert_eq!(log.damage_taken_by("Ryze"), vec![50]);
        assert_eq!(mage.hp(), 50);
    }

    #[test]
    fn test_mage_staff_multiplier_keeps_mana() {
        let mut log = CombatLog::new();
        let mage = Hero::mage("Ryze", 100, 70, 200, 2);
        let mut tank = Hero::tank("Garen", 150, 50, 1.5);
        mage.deal_attack(&mut tank, &mut never_crit(), &mut log);

        assert_eq!(tank.hp(), 85);
        assert_eq!(mage.mana(), Some(200));
        assert!(matches!(
            &log.events()[0],
            CombatEvent::AttackDeclared {
                damage: 140,
                style: AttackStyle::Empowered { mana: 200 },
                ..
            }
        ));
    }

    #[test]
    fn test_mage_below_threshold_uses_base_attack() {
        let mut log = CombatLog::new();
        let mage = Hero::mage("Apprentice", 50, 30, 99, 3);
        let mut target = Hero::new("Dummy", 100, 0);
        mage.deal_attack(&mut target, &mut never_crit(), &mut log);

        assert_eq!(target.hp(), 70);
        assert_eq!(mage.mana(), Some(99));
    }

    #[test]
    fn test_assassin_crit_and_normal() {
        let assassin = Hero::assassin("Talon", 80, 90, 0.5);

        let mut log = CombatLog::new();
        let mut target = Hero::new("Dummy", 1000, 0);
        assassin.deal_attack(&mut target, &mut always_crit(), &mut log);
        assert_eq!(target.hp(), 820);

        assassin.deal_attack(&mut target, &mut never_crit(), &mut log);
        assert_eq!(target.hp(), 730);
        assert_eq!(log.damage_taken_by("Dummy"), vec![180, 90]);
    }

    #[test]
    fn test_dead_attacker_deals_no_damage() {
        let mut log = CombatLog::new();
        let mut tank = Hero::tank("Garen", 10, 50, 1.0);
        tank.receive_attack(10, &mut log);
        log.clear();

        let mut target = Hero::new("B", 20, 1);
        tank.deal_attack(&mut target, &mut never_crit(), &mut log);

        assert_eq!(target.hp(), 20);
        assert_eq!(
            log.events(),
            &[CombatEvent::CannotAttack {
                name: "Garen".to_string()
            }]
        );
    }

    #[test]
    fn test_dead_assassin_does_not_roll() {
        let mut log = CombatLog::new();
        let mut assassin = Hero::assassin("Talon", 1, 90, 0.5);
        assassin.receive_attack(1, &mut log);

        let mut rng = StepRng::new(0, 1);
        let mut target = Hero::new("B", 20, 1);
        assassin.deal_attack(&mut target, &mut rng, &mut log);
        // Untouched generator still yields its first value
        assert_eq!(rng.next_u64(), 0);
    }

    #[test]
    fn test_death_transition_exactly_at_zero() {
        let mut log = CombatLog::new();
        let mut hero = Hero::new("A", 20, 1);
        hero.receive_attack(10, &mut log);
        assert!(hero.is_alive());
        hero.receive_attack(10, &mut log);
        assert!(!hero.is_alive());
        assert_eq!(hero.hp(), 0);

        hero.receive_attack(10, &mut log);
        assert_eq!(hero.hp(), 0);
        assert_eq!(log.deaths_of("A"), 1);
        assert!(matches!(
            log.events().last(),
            Some(CombatEvent::TargetAlreadyDead { .. })
        ));
    }

    #[test]
    fn test_healing_uncapped_and_gated() {
        let mut log = CombatLog::new();
        let cleric = Hero::cleric("Sarante", 120, 40, 1.2);
        let mut ally = Hero::new("Ally", 100, 1);
        cleric.heal(&mut ally, &mut log);
        cleric.heal(&mut ally, &mut log);
        assert_eq!(ally.hp(), 120);

        ally.receive_attack(200, &mut log);
        cleric.heal(&mut ally, &mut log);
        assert_eq!(ally.hp(), -80);
        assert!(matches!(
            log.events().last(),
            Some(CombatEvent::HealingRefused { .. })
        ));
    }

    #[test]
    fn test_dead_cleric_cannot_heal() {
        let mut log = CombatLog::new();
        let mut cleric = Hero::cleric("Sarante", 5, 40, 1.2);
        cleric.receive_attack(5, &mut log);
        log.clear();

        let mut ally = Hero::new("Ally", 100, 1);
        cleric.heal(&mut ally, &mut log);
        assert_eq!(ally.hp(), 100);
        assert_eq!(
            log.events(),
            &[CombatEvent::CannotHeal {
                name: "Sarante".to_string()
            }]
        );
    }

    #[test]
    fn test_healing_saturates_at_i32_max() {
        let mut log = CombatLog::new();
        let cleric = Hero::cleric("Sarante", 120, 40, 1.2);
        let mut giant = Hero::new("Giant", i32::MAX - 5, 1);
        cleric.heal(&mut giant, &mut log);

        assert_eq!(giant.hp(), i32::MAX);
        assert!(giant.is_alive());
        assert!(matches!(
            log.events().last(),
            Some(CombatEvent::HealingReceived {
                amount: 10,
                current_hp: i32::MAX,
                ..
            })
        ));
    }

    #[test]
    fn test_huge_hit_on_negative_hp_saturates_and_kills() {
        let mut log = CombatLog::new();
        let mage = Hero::mage("Archmage", 10, i32::MAX, 200, 2);
        // Constructed with negative hp but still flagged alive
        let mut victim = Hero::new("Victim", -10, 1);
        mage.deal_attack(&mut victim, &mut never_crit(), &mut log);

        assert_eq!(victim.hp(), i32::MIN);
        assert!(!victim.is_alive());
        assert_eq!(log.damage_taken_by("Victim"), vec![i32::MAX]);
        assert_eq!(log.deaths_of("Victim"), 1);
    }

    #[test]
    fn test_dead_base_hero_cannot_heal() {
        let mut log = CombatLog::new();
        let mut healer = Hero::new("Healer", 1, 1);
        healer.receive_attack(1, &mut log);
        assert_eq!(healer.heal_amount(&mut log), None);
    }
}
