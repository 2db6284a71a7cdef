use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

use super::script::ArenaAction;
use crate::combat::events::EventSink;
use crate::hero::{validate, Hero, HeroError};

/// Index of a hero within an [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeroId(pub usize);

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ArenaError {
    #[error("no hero with id {0}")]
    UnknownHero(HeroId),

    #[error("invalid hero: {0}")]
    InvalidHero(#[from] HeroError),
}

/// A combat session.
///
/// Owns every hero for its lifetime. The RNG is created once by the caller
/// and reused for every roll; the sink receives every event in order.
pub struct Arena<R, S> {
    heroes: Vec<Hero>,
    rng: R,
    sink: S,
}

impl<R: Rng, S: EventSink> Arena<R, S> {
    pub fn new(rng: R, sink: S) -> Self {
        Self {
            heroes: Vec::new(),
            rng,
            sink,
        }
    }

    /// Add a hero without validation.
    pub fn recruit(&mut self, hero: Hero) -> HeroId {
        let id = HeroId(self.heroes.len());
        debug!(%id, hero = hero.name(), kind = ?hero.kind(), hp = hero.hp(), "recruited");
        self.heroes.push(hero);
        id
    }

    /// Add a hero after checking it with [`validate`].
    pub fn try_recruit(&mut self, hero: Hero) -> Result<HeroId, ArenaError> {
        validate(&hero)?;
        Ok(self.recruit(hero))
    }

    pub fn hero(&self, id: HeroId) -> Result<&Hero, ArenaError> {
        self.heroes.get(id.0).ok_or(ArenaError::UnknownHero(id))
    }

    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    /// First hero with the given name.
    pub fn find(&self, name: &str) -> Option<HeroId> {
        self.heroes
            .iter()
            .position(|h| h.name() == name)
            .map(HeroId)
    }

    pub fn living(&self) -> impl Iterator<Item = &Hero> {
        self.heroes.iter().filter(|h| h.is_alive())
    }

    pub fn display(&mut self, id: HeroId) -> Result<(), ArenaError> {
        self.check(id)?;
        self.heroes[id.0].display_stats(&mut self.sink);
        Ok(())
    }

    pub fn display_all(&mut self) {
        for hero in &self.heroes {
            hero.display_stats(&mut self.sink);
        }
    }

    /// Resolve one attack. A hero may target itself.
    pub fn attack(&mut self, attacker: HeroId, target: HeroId) -> Result<(), ArenaError> {
        self.check(attacker)?;
        self.check(target)?;

        let damage = self.heroes[attacker.0].attack_amount(
            self.heroes[target.0].name(),
            &mut self.rng,
            &mut self.sink,
        );
        if let Some(damage) = damage {
            self.heroes[target.0].receive_attack(damage, &mut self.sink);
        }
        Ok(())
    }

    /// Resolve one heal. A hero may heal itself.
    pub fn heal(&mut self, healer: HeroId, target: HeroId) -> Result<(), ArenaError> {
        self.check(healer)?;
        self.check(target)?;

        if let Some(amount) = self.heroes[healer.0].heal_amount(&mut self.sink) {
            self.heroes[target.0].receive_healing(amount, &mut self.sink);
        }
        Ok(())
    }

    pub fn perform(&mut self, action: ArenaAction) -> Result<(), ArenaError> {
        match action {
            ArenaAction::Display(id) => self.display(id),
            ArenaAction::DisplayAll => {
                self.display_all();
                Ok(())
            }
            ArenaAction::Attack { attacker, target } => self.attack(attacker, target),
            ArenaAction::Heal { healer, target } => self.heal(healer, target),
        }
    }

    /// Run a script in order, stopping at the first bad id.
    pub fn run(&mut self, actions: &[ArenaAction]) -> Result<(), ArenaError> {
        for action in actions {
            self.perform(*action)?;
        }
        info!(
            steps = actions.len(),
            survivors = self.living().count(),
            "script finished"
        );
        Ok(())
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn check(&self, id: HeroId) -> Result<(), ArenaError> {
        self.hero(id).map(|_| ())
    }
}
