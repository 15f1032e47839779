//! Combatant status panel.

use gladiator_core::CombatantSnapshot;

/// ASCII health bar: `[####----]`.
///
/// The filled portion is `current * width / max`, truncated, so any damage at
/// all drops the first cell.
pub fn health_bar(current: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (u64::from(current.min(max)) * width as u64 / u64::from(max)) as usize
    };

    let mut bar = String::with_capacity(width + 2);
    bar.push('[');
    bar.extend(std::iter::repeat_n('#', filled));
    bar.extend(std::iter::repeat_n('-', width - filled));
    bar.push(']');
    bar
}

/// Three-line status block for one combatant.
pub fn status_lines(snapshot: &CombatantSnapshot, bar_width: usize) -> Vec<String> {
    let mut stats = format!(
        "  ATK: {}  DEF: {}",
        snapshot.attack_power, snapshot.defense_power
    );
    if snapshot.defending {
        stats.push_str("  [DEFENDING]");
    }
    if snapshot.poison_ticks_remaining > 0 {
        stats.push_str(&format!(
            "  [POISONED: {} turns]",
            snapshot.poison_ticks_remaining
        ));
    }

    vec![
        snapshot.name.clone(),
        format!(
            "  HP: {} {}/{}",
            health_bar(snapshot.current_health, snapshot.max_health, bar_width),
            snapshot.current_health,
            snapshot.max_health
        ),
        stats,
    ]
}
