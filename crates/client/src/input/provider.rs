use std::io::{BufRead, Write};

use gladiator_core::{ActionKind, Battle};
use gladiator_runtime::{ActionProvider, Result, RuntimeError};

use super::{parse_action_choice, read_line, title_case};

/// Action provider that shows the action menu and waits for a line of input.
pub struct MenuActionProvider<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> MenuActionProvider<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.writer, "\nChoose action:")?;
        for (index, action) in ActionKind::MENU.iter().enumerate() {
            writeln!(self.writer, "  {}. {}", index + 1, action.label())?;
        }
        write!(self.writer, "> ")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> ActionProvider for MenuActionProvider<R, W> {
    fn provide_action(&mut self, battle: &Battle) -> Result<ActionKind> {
        loop {
            self.print_menu()?;

            let line = read_line(&mut self.reader)?.ok_or(RuntimeError::InputClosed)?;
            let action = parse_action_choice(&line);

            let archetype = battle.player().archetype();
            if action == ActionKind::Special && archetype.special_attack().is_none() {
                tracing::debug!(%archetype, "special attack refused at the menu");
                writeln!(
                    self.writer,
                    "{} has no special attack. Choose another action.",
                    title_case(archetype.as_ref())
                )?;
                continue;
            }

            tracing::debug!(input = %line, %action, "player chose action");
            return Ok(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use gladiator_core::{Archetype, Combatant};

    use super::*;

    fn battle(archetype: Archetype) -> Battle {
        Battle::new(
            Combatant::new("Brakka", archetype),
            Combatant::new("Shadow", Archetype::Dragon),
        )
    }

    #[test]
    fn menu_lists_every_action() {
        let mut provider = MenuActionProvider::new(Cursor::new("1\n"), Vec::new());

        let action = provider.provide_action(&battle(Archetype::Warrior)).unwrap();

        assert_eq!(action, ActionKind::Attack);
        let text = String::from_utf8(provider.writer).unwrap();
        assert!(text.starts_with("\nChoose action:\n  1. Attack\n"));
        assert!(text.contains("  4. Heavy Strike (150% ATK, skip defending)\n"));
        assert!(text.ends_with("  6. Special Attack\n> "));
    }

    #[test]
    fn garbage_is_an_invalid_action_not_a_reprompt() {
        let mut provider = MenuActionProvider::new(Cursor::new("xyz\n"), Vec::new());
        let action = provider.provide_action(&battle(Archetype::Mage)).unwrap();
        assert_eq!(action, ActionKind::Invalid);
    }

    #[test]
    fn dragon_is_reprompted_instead_of_using_special() {
        let mut provider = MenuActionProvider::new(Cursor::new("6\n2\n"), Vec::new());

        let action = provider.provide_action(&battle(Archetype::Dragon)).unwrap();

        assert_eq!(action, ActionKind::Defend);
        let text = String::from_utf8(provider.writer).unwrap();
        assert!(text.contains("Dragon has no special attack."));
        assert_eq!(text.matches("Choose action:").count(), 2);
    }

    #[test]
    fn closed_input_ends_the_battle() {
        let mut provider = MenuActionProvider::new(Cursor::new(""), Vec::new());
        let result = provider.provide_action(&battle(Archetype::Rogue));
        assert!(matches!(result, Err(RuntimeError::InputClosed)));
    }
}
