//! Text rendering of battle events for the console.
//!
//! Rendering is a pure mapping from [`BattleEvent`] to output lines; writing
//! them is left to the caller.
mod status;

use status::status_lines;

use gladiator_core::{ActionOutcome, ReactionOutcome, Side, SpecialAttack, SpecialOutcome};
use gladiator_runtime::BattleEvent;

pub const TITLE: &str = "=== NUMBER GLADIATOR ===";
const SEPARATOR: &str = "========================================";

/// Output lines for one event.
pub fn event_lines(event: &BattleEvent, bar_width: usize) -> Vec<String> {
    match event {
        BattleEvent::Started { .. } => vec![String::new(), "--- BATTLE START ---".into()],
        BattleEvent::TurnStarted {
            turn,
            player,
            enemy,
        } => {
            let mut lines = vec![String::new(), format!("=== TURN {turn} ===")];
            lines.extend(status_lines(player, bar_width));
            lines.push(String::new());
            lines.extend(status_lines(enemy, bar_width));
            lines
        }
        BattleEvent::PoisonTicked { name, damage, .. } => {
            vec![format!("{name} takes {damage} poison damage!")]
        }
        BattleEvent::ActionResolved { name, outcome } => {
            let mut lines = vec![SEPARATOR.to_string()];
            lines.extend(action_lines(name, outcome));
            lines
        }
        BattleEvent::ReactionResolved { name, outcome } => vec![reaction_line(name, outcome)],
        BattleEvent::Ended {
            winner,
            winner_name,
            ..
        } => {
            let banner = match winner {
                Side::Player => format!("*** {winner_name} WINS! ***"),
                Side::Enemy => format!("*** {winner_name} wins. You were defeated. ***"),
            };
            vec![SEPARATOR.to_string(), String::new(), banner]
        }
    }
}

fn action_lines(name: &str, outcome: &ActionOutcome) -> Vec<String> {
    match outcome {
        ActionOutcome::Attacked { damage } => vec![format!("{name} attacks for {damage} damage!")],
        ActionOutcome::Defended => vec![format!("{name} takes a defensive stance!")],
        ActionOutcome::Healed { amount, .. } => vec![format!("{name} heals for {amount} HP!")],
        ActionOutcome::HeavyStrike { damage } => {
            vec![format!("{name} unleashes a HEAVY STRIKE for {damage} damage!")]
        }
        ActionOutcome::Stole { amount } => vec![format!("{name} steals {amount} HP!")],
        ActionOutcome::Special(special) => {
            vec![
                format!("{name} uses SPECIAL ATTACK!"),
                special_line(special),
            ]
        }
        ActionOutcome::Wasted => vec!["Invalid action — turn wasted!".to_string()],
    }
}

fn special_line(outcome: &SpecialOutcome) -> String {
    match outcome {
        SpecialOutcome::Damage { attack, damage } => {
            let label = match attack {
                SpecialAttack::PowerStrike => "Power Strike",
                SpecialAttack::ArcaneBlast => "Arcane Blast",
                SpecialAttack::Venom => "Venom",
            };
            format!("  {label} deals {damage} damage!")
        }
        SpecialOutcome::Poison {
            damage_per_tick,
            ticks,
        } => format!("  Venom: {damage_per_tick} poison damage for {ticks} turns!"),
    }
}

fn reaction_line(name: &str, outcome: &ReactionOutcome) -> String {
    match outcome {
        ReactionOutcome::Attacked { damage } => format!("{name} attacks back for {damage} damage!"),
        ReactionOutcome::Defended => format!("{name} prepares to defend!"),
        ReactionOutcome::Stole { amount } => format!("{name} steals {amount} HP!"),
        ReactionOutcome::Healed { amount, .. } => format!("{name} heals for {amount} HP!"),
    }
}

#[cfg(test)]
mod tests {
    use gladiator_core::{Archetype, Combatant};

    use super::*;

    #[test]
    fn turn_header_shows_both_combatants() {
        let event = BattleEvent::TurnStarted {
            turn: 3,
            player: Combatant::new("Brakka", Archetype::Warrior).snapshot(),
            enemy: Combatant::new("Shadow", Archetype::Dragon).snapshot(),
        };

        let lines = event_lines(&event, 10);

        assert_eq!(
            lines,
            vec![
                "",
                "=== TURN 3 ===",
                "Brakka",
                "  HP: [##########] 300/300",
                "  ATK: 15  DEF: 15",
                "",
                "Shadow",
                "  HP: [##########] 500/500",
                "  ATK: 10  DEF: 10",
            ]
        );
    }

    #[test]
    fn action_messages() {
        let cases = [
            (ActionOutcome::Attacked { damage: 14 }, "Brakka attacks for 14 damage!"),
            (ActionOutcome::Defended, "Brakka takes a defensive stance!"),
            (
                ActionOutcome::Healed {
                    amount: 20,
                    restored: 0,
                },
                "Brakka heals for 20 HP!",
            ),
            (
                ActionOutcome::HeavyStrike { damage: 22 },
                "Brakka unleashes a HEAVY STRIKE for 22 damage!",
            ),
            (ActionOutcome::Stole { amount: 6 }, "Brakka steals 6 HP!"),
            (ActionOutcome::Wasted, "Invalid action — turn wasted!"),
        ];

        for (outcome, expected) in cases {
            let lines = event_lines(
                &BattleEvent::ActionResolved {
                    name: "Brakka".into(),
                    outcome,
                },
                20,
            );
            assert_eq!(lines, vec![SEPARATOR.to_string(), expected.to_string()]);
        }
    }

    #[test]
    fn special_attack_names_the_effect() {
        let lines = event_lines(
            &BattleEvent::ActionResolved {
                name: "Vex".into(),
                outcome: ActionOutcome::Special(SpecialOutcome::Poison {
                    damage_per_tick: 10,
                    ticks: 3,
                }),
            },
            20,
        );

        assert_eq!(lines[1], "Vex uses SPECIAL ATTACK!");
        assert_eq!(lines[2], "  Venom: 10 poison damage for 3 turns!");
    }

    #[test]
    fn reaction_messages() {
        let line = |outcome| {
            event_lines(
                &BattleEvent::ReactionResolved {
                    name: "Shadow".into(),
                    outcome,
                },
                20,
            )
            .remove(0)
        };

        assert_eq!(
            line(ReactionOutcome::Attacked { damage: 9 }),
            "Shadow attacks back for 9 damage!"
        );
        assert_eq!(line(ReactionOutcome::Defended), "Shadow prepares to defend!");
        assert_eq!(line(ReactionOutcome::Stole { amount: 4 }), "Shadow steals 4 HP!");
        assert_eq!(
            line(ReactionOutcome::Healed {
                amount: 15,
                restored: 15
            }),
            "Shadow heals for 15 HP!"
        );
    }

    #[test]
    fn result_banners() {
        let won = event_lines(
            &BattleEvent::Ended {
                winner: Side::Player,
                winner_name: "Brakka".into(),
                turns: 12,
            },
            20,
        );
        assert_eq!(won.last().map(String::as_str), Some("*** Brakka WINS! ***"));

        let lost = event_lines(
            &BattleEvent::Ended {
                winner: Side::Enemy,
                winner_name: "Shadow".into(),
                turns: 30,
            },
            20,
        );
        assert_eq!(
            lost.last().map(String::as_str),
            Some("*** Shadow wins. You were defeated. ***")
        );
    }
}
