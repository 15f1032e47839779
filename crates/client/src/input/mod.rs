//! Line-based console prompts.
//!
//! Every prompt is generic over its reader and writer so it can be driven by
//! stdin/stdout in the binary and by in-memory buffers in tests. End of input
//! surfaces as [`RuntimeError::InputClosed`].
mod provider;

pub use provider::MenuActionProvider;

use std::io::{BufRead, Write};

use gladiator_core::{ActionKind, Archetype};
use gladiator_runtime::{Result, RuntimeError};

const DEFAULT_PLAYER_NAME: &str = "Player";

/// Reads one line, trimmed. `None` means end of input.
pub(crate) fn read_line(reader: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Asks for the fighter's name. A blank answer falls back to "Player".
pub fn prompt_name(reader: &mut impl BufRead, writer: &mut impl Write) -> Result<String> {
    write!(writer, "Enter your fighter's name: ")?;
    writer.flush()?;

    let name = read_line(reader)?.ok_or(RuntimeError::InputClosed)?;
    if name.is_empty() {
        Ok(DEFAULT_PLAYER_NAME.to_string())
    } else {
        Ok(name)
    }
}

/// Shows the role menu until a valid archetype is picked.
///
/// Accepts the menu number or the archetype's name.
pub fn prompt_role(reader: &mut impl BufRead, writer: &mut impl Write) -> Result<Archetype> {
    loop {
        writeln!(writer, "\nChoose your role:")?;
        for (index, archetype) in Archetype::ALL.iter().enumerate() {
            writeln!(
                writer,
                "  {}. {} ({})",
                index + 1,
                title_case(archetype.as_ref()),
                archetype.description()
            )?;
        }
        write!(writer, "> ")?;
        writer.flush()?;

        let line = read_line(reader)?.ok_or(RuntimeError::InputClosed)?;
        match line.parse::<usize>() {
            Ok(choice) => match Archetype::ALL.get(choice.wrapping_sub(1)) {
                Some(archetype) => return Ok(*archetype),
                None => writeln!(writer, "Invalid choice. Please select 1-4.")?,
            },
            Err(_) => match Archetype::parse(&line) {
                Ok(archetype) => return Ok(archetype),
                Err(_) => writeln!(writer, "Invalid input. Enter a number.")?,
            },
        }
    }
}

/// Maps an action-menu answer to an action.
///
/// Menu numbers 1-6 and action names are understood; anything else is an
/// [`ActionKind::Invalid`] choice that wastes the turn.
pub fn parse_action_choice(line: &str) -> ActionKind {
    match line.trim().parse::<usize>() {
        Ok(choice) => ActionKind::MENU
            .get(choice.wrapping_sub(1))
            .copied()
            .unwrap_or(ActionKind::Invalid),
        Err(_) => ActionKind::parse_or_invalid(line),
    }
}

pub(crate) fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
