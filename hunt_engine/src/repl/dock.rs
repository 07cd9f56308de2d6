//! `repl::dock` module
//!
//! The Old Dock: a locked box that may give up the OLD KEY, and a note carrying the clue.

use log::info;

use crate::config::HuntConfig;
use crate::error::InputError;
use crate::inventory::{Inventory, add_item};
use crate::item::Item;
use crate::rng::{RandomSource, chance_check};
use crate::spinners::SpinnerType;
use crate::view::ViewItem;

use super::prompt::{Console, MenuChoice, YesNo};

/// Text of the torn note, and the only clue in the game.
pub const NOTE_CLUE: &str = "STONE GUARDS THE GOLD";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockAction {
    RustyBox,
    TornNote,
    Leave,
}

impl MenuChoice for DockAction {
    const ALL: &'static [Self] = &[Self::RustyBox, Self::TornNote, Self::Leave];

    fn label(self) -> &'static str {
        match self {
            DockAction::RustyBox => "box",
            DockAction::TornNote => "note",
            DockAction::Leave => "leave",
        }
    }
}

/// Visit the Old Dock.
///
/// Returns the clue if the player read the note. The caller keeps an earlier
/// clue when this returns `None`.
///
/// # Errors
/// - if player input ends or fails mid-visit
pub fn dock_handler(
    console: &mut Console,
    inventory: &mut Inventory,
    rng: &mut dyn RandomSource,
    config: &HuntConfig,
) -> Result<Option<&'static str>, InputError> {
    console.view.push(ViewItem::Scene {
        title: "OLD DOCK".to_string(),
        description: "You find a rusty box and a torn note stuck in a rope knot.".to_string(),
    });

    match console.ask_menu::<DockAction>("What do you check?")? {
        DockAction::RustyBox => {
            force_box(console, inventory, rng, config)?;
            Ok(None)
        },
        DockAction::TornNote => {
            info!("player read the note at the dock");
            console.view.push(ViewItem::ClueDiscovered(NOTE_CLUE.to_string()));
            Ok(Some(NOTE_CLUE))
        },
        DockAction::Leave => {
            console
                .view
                .push(ViewItem::Narration("You step away from the dock.".to_string()));
            Ok(None)
        },
    }
}

fn force_box(
    console: &mut Console,
    inventory: &mut Inventory,
    rng: &mut dyn RandomSource,
    config: &HuntConfig,
) -> Result<(), InputError> {
    console.view.push(ViewItem::Narration("The box is locked.".to_string()));
    if console.ask_menu::<YesNo>("Try to force it open?")? == YesNo::No {
        console
            .view
            .push(ViewItem::Narration("You leave the box alone.".to_string()));
        return Ok(());
    }

    if chance_check(rng, &mut console.view, "forcing the box", config.key_chance) {
        console
            .view
            .push(ViewItem::ActionSuccess("The lock snaps open!".to_string()));
        add_item(&mut console.view, inventory, Item::OldKey);
    } else {
        let quip = console.spin(SpinnerType::LockHolds, "It won't open. Maybe try again later.");
        console.view.push(ViewItem::ActionFailure(quip));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::input::ScriptedInput;
    use crate::rng::ScriptedRandom;
    use crate::view::View;

    fn visit(lines: &[&str], draws: &[f64], inventory: &mut Inventory) -> (Option<&'static str>, Console, ScriptedRandom) {
        let mut console = Console::new(ScriptedInput::from_lines(lines.iter().copied()), View::recording());
        let mut rng = ScriptedRandom::new(draws.iter().copied());
        let clue = dock_handler(&mut console, inventory, &mut rng, &HuntConfig::default()).unwrap();
        (clue, console, rng)
    }

    #[test]
    fn forcing_box_under_threshold_grants_key() {
        let mut inv = Inventory::new();
        let (clue, _, rng) = visit(&["box", "yes"], &[0.69], &mut inv);
        assert_eq!(clue, None);
        assert!(inv.contains(Item::OldKey));
        assert_eq!(rng.taken(), 1);
    }

    #[test]
    fn forcing_box_at_threshold_fails() {
        let mut inv = Inventory::new();
        let (_, console, _) = visit(&["box", "yes"], &[0.70], &mut inv);
        assert!(inv.is_empty());
        assert!(console.view.transcript().any(ViewItem::is_action_failure));
    }

    #[test]
    fn declining_to_force_draws_nothing() {
        let mut inv = Inventory::new();
        let (_, _, rng) = visit(&["box", "no"], &[0.0], &mut inv);
        assert!(inv.is_empty());
        assert_eq!(rng.taken(), 0);
    }

    #[test]
    fn forcing_again_with_key_is_idempotent() {
        let mut inv = Inventory::new();
        inv.add(Item::OldKey);
        let (_, console, _) = visit(&["box", "yes"], &[0.1], &mut inv);
        assert_eq!(inv.items(), &[Item::OldKey]);
        assert!(console.view.transcript().any(ViewItem::is_item_already_held));
    }

    #[test]
    fn note_always_yields_clue() {
        let mut inv = Inventory::new();
        let (clue, _, rng) = visit(&["NOTE"], &[], &mut inv);
        assert_eq!(clue, Some("STONE GUARDS THE GOLD"));
        assert!(inv.is_empty());
        assert_eq!(rng.taken(), 0);
    }

    #[test]
    fn leaving_changes_nothing() {
        let mut inv = Inventory::new();
        let (clue, _, rng) = visit(&["leave"], &[0.0], &mut inv);
        assert_eq!(clue, None);
        assert!(inv.is_empty());
        assert_eq!(rng.taken(), 0);
    }
}
