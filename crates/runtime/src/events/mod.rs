//! Battle events emitted by the runtime.
//!
//! Events are extracted from each [`TurnReport`] after the turn is applied and
//! are the only thing frontends need to render a battle.

use gladiator_core::{
    ActionOutcome, Battle, BattleStatus, CombatantSnapshot, ReactionOutcome, Side, TurnReport,
};

/// High-level occurrences during a battle, in the order they happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BattleEvent {
    /// Both combatants are set up.
    Started {
        player: CombatantSnapshot,
        enemy: CombatantSnapshot,
    },

    /// A new turn begins; snapshots are taken before anything resolves.
    TurnStarted {
        turn: u32,
        player: CombatantSnapshot,
        enemy: CombatantSnapshot,
    },

    /// Poison damaged a combatant at the start of the turn.
    PoisonTicked {
        side: Side,
        name: String,
        damage: u32,
    },

    /// The player's action resolved.
    ActionResolved {
        name: String,
        outcome: ActionOutcome,
    },

    /// The enemy's counter-move resolved.
    ReactionResolved {
        name: String,
        outcome: ReactionOutcome,
    },

    /// One side fell.
    Ended {
        winner: Side,
        winner_name: String,
        turns: u32,
    },
}

impl BattleEvent {
    pub fn started(battle: &Battle) -> Self {
        BattleEvent::Started {
            player: battle.player().snapshot(),
            enemy: battle.enemy().snapshot(),
        }
    }

    pub fn turn_started(battle: &Battle) -> Self {
        BattleEvent::TurnStarted {
            turn: battle.turns_played() + 1,
            player: battle.player().snapshot(),
            enemy: battle.enemy().snapshot(),
        }
    }
}

/// Extracts the events of a resolved turn.
///
/// `battle` must be the state right after `report` was produced; an `Ended`
/// event is appended when that turn finished the battle.
pub fn extract_events(battle: &Battle, report: &TurnReport) -> Vec<BattleEvent> {
    let mut events = Vec::new();

    for (side, damage) in [
        (Side::Player, report.poison.actor),
        (Side::Enemy, report.poison.target),
    ] {
        if damage > 0 {
            events.push(BattleEvent::PoisonTicked {
                side,
                name: battle.combatant(side).name().to_string(),
                damage,
            });
        }
    }

    events.push(BattleEvent::ActionResolved {
        name: battle.player().name().to_string(),
        outcome: report.action,
    });

    if let Some(outcome) = report.reaction {
        events.push(BattleEvent::ReactionResolved {
            name: battle.enemy().name().to_string(),
            outcome,
        });
    }

    if let BattleStatus::Finished { winner } = battle.status() {
        events.push(BattleEvent::Ended {
            winner,
            winner_name: battle.combatant(winner).name().to_string(),
            turns: battle.turns_played(),
        });
    }

    events
}
