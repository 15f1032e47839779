//! High-level runtime orchestrator.
//!
//! The runtime owns the battle, its random source, and the player's action
//! provider, and exposes a builder-based API for clients to drive the fight.

use std::env;

use gladiator_core::{
    Archetype, Battle, BattleStatus, CombatError, Combatant, GameError, PcgRng, RngOracle, Side,
};

use crate::api::{ActionProvider, Result, RuntimeError};
use crate::events::{BattleEvent, extract_events};

/// Runtime configuration: who fights and how the dice are seeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub player_name: String,
    pub player_archetype: Archetype,
    pub enemy_name: String,
    pub enemy_archetype: Archetype,
    /// Seed for the battle RNG. `None` draws a fresh seed per process.
    pub seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            player_name: "Player".to_string(),
            player_archetype: Archetype::Warrior,
            enemy_name: "Shadow".to_string(),
            enemy_archetype: Archetype::Dragon,
            seed: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `GLADIATOR_SEED` - RNG seed for a reproducible battle (u64)
    /// - `GLADIATOR_ENEMY_NAME` - Enemy display name (default: Shadow)
    /// - `GLADIATOR_ENEMY_ARCHETYPE` - Enemy archetype (default: dragon)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construct configuration from an arbitrary key lookup.
    ///
    /// Same keys and rules as [`RuntimeConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup("GLADIATOR_SEED") {
            let seed = raw.trim().parse().map_err(|_| RuntimeError::InvalidConfig {
                key: "GLADIATOR_SEED",
                value: raw.clone(),
            })?;
            config.seed = Some(seed);
        }

        if let Some(name) = lookup("GLADIATOR_ENEMY_NAME") {
            let name = name.trim();
            if !name.is_empty() {
                config.enemy_name = name.to_string();
            }
        }

        if let Some(raw) = lookup("GLADIATOR_ENEMY_ARCHETYPE") {
            config.enemy_archetype = Archetype::parse(&raw)?;
        }

        Ok(config)
    }
}

/// Main runtime that drives a battle turn by turn.
pub struct Runtime {
    battle: Battle,
    rng: Box<dyn RngOracle>,
    provider: Box<dyn ActionProvider>,
    seed: Option<u64>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn battle(&self) -> &Battle {
        &self.battle
    }

    /// Seed the battle RNG was created from; `None` when an RNG was injected.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Plays exactly one turn and returns the events it produced.
    ///
    /// The `TurnStarted` event is not included: [`Runtime::run`] emits it
    /// before asking the provider, so frontends can show the state the player
    /// is choosing against.
    pub fn step(&mut self) -> Result<Vec<BattleEvent>> {
        if self.battle.is_over() {
            return Err(CombatError::BattleOver.into());
        }

        let turn = self.battle.turns_played() + 1;
        let action = self.provider.provide_action(&self.battle)?;
        tracing::debug!(turn, %action, "resolving turn");

        let report = match self.battle.play_turn(action, self.rng.as_mut()) {
            Ok(report) => report,
            Err(err) => {
                tracing::error!(
                    turn,
                    %action,
                    code = err.error_code(),
                    severity = err.severity().as_str(),
                    "turn rejected: {err}"
                );
                return Err(err.into());
            }
        };

        tracing::debug!(
            turn,
            ?report,
            player_hp = self.battle.player().current_health(),
            enemy_hp = self.battle.enemy().current_health(),
            "turn resolved"
        );

        let events = extract_events(&self.battle, &report);
        if let BattleStatus::Finished { winner } = self.battle.status() {
            tracing::info!(
                %winner,
                winner_name = self.battle.combatant(winner).name(),
                turns = self.battle.turns_played(),
                "battle finished"
            );
        }

        Ok(events)
    }

    /// Runs the battle to completion, forwarding every event to `on_event`.
    ///
    /// Returns the winning side.
    pub fn run(&mut self, mut on_event: impl FnMut(&BattleEvent)) -> Result<Side> {
        if self.battle.turns_played() == 0 {
            on_event(&BattleEvent::started(&self.battle));
        }

        loop {
            if let BattleStatus::Finished { winner } = self.battle.status() {
                return Ok(winner);
            }

            on_event(&BattleEvent::turn_started(&self.battle));
            for event in self.step()? {
                on_event(&event);
            }
        }
    }
}

/// Builder for [`Runtime`].
#[derive(Default)]
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    provider: Option<Box<dyn ActionProvider>>,
    rng: Option<Box<dyn RngOracle>>,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the player's name and archetype.
    pub fn player(mut self, name: impl Into<String>, archetype: Archetype) -> Self {
        self.config.player_name = name.into();
        self.config.player_archetype = archetype;
        self
    }

    pub fn provider(mut self, provider: impl ActionProvider + 'static) -> Self {
        self.provider = Some(Box::new(provider));
        self
    }

    /// Injects a random source, overriding the configured seed.
    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    pub fn build(self) -> Result<Runtime> {
        let provider = self.provider.ok_or(RuntimeError::ProviderNotSet)?;

        let (rng, seed): (Box<dyn RngOracle>, Option<u64>) = match self.rng {
            Some(rng) => (rng, None),
            None => {
                let seed = self.config.seed.unwrap_or_else(rand::random);
                (Box::new(PcgRng::new(seed)), Some(seed))
            }
        };

        let config = self.config;
        let battle = Battle::new(
            Combatant::new(config.player_name, config.player_archetype),
            Combatant::new(config.enemy_name, config.enemy_archetype),
        );

        tracing::info!(
            player = battle.player().name(),
            player_archetype = %battle.player().archetype(),
            enemy = battle.enemy().name(),
            enemy_archetype = %battle.enemy().archetype(),
            ?seed,
            "battle created"
        );

        Ok(Runtime {
            battle,
            rng,
            provider,
            seed,
        })
    }
}
