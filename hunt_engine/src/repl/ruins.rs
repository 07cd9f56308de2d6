//! `repl::ruins` module
//!
//! The Ancient Ruins: a stone gate that opens for the answer to a riddle.
//! Wrong answers cost nothing and may be retried on any later visit.

use log::info;

use crate::error::InputError;
use crate::inventory::{Inventory, add_item};
use crate::item::Item;
use crate::spinners::SpinnerType;
use crate::view::ViewItem;

use super::prompt::{Console, MenuChoice};

pub const RIDDLE: &str = "What has hands but cannot clap?";
/// Accepted answers, after trimming and lowercasing.
pub const RIDDLE_ANSWERS: [&str; 2] = ["clock", "a clock"];
const HINT_SUFFIX: &str = "(think about 'stone' places!)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuinsAction {
    Answer,
    Leave,
}

impl MenuChoice for RuinsAction {
    const ALL: &'static [Self] = &[Self::Answer, Self::Leave];

    fn label(self) -> &'static str {
        match self {
            RuinsAction::Answer => "answer",
            RuinsAction::Leave => "leave",
        }
    }
}

/// True if `answer` solves the riddle. Exact match only.
pub fn is_correct_answer(answer: &str) -> bool {
    let normalized = answer.trim().to_lowercase();
    RIDDLE_ANSWERS.contains(&normalized.as_str())
}

/// The hint shown after a wrong answer when the player knows the clue.
pub fn clue_hint(clue: &str) -> String {
    format!("Hint from your clue: {clue} {HINT_SUFFIX}")
}

/// Visit the Ancient Ruins.
///
/// # Errors
/// - if player input ends or fails mid-visit
pub fn ruins_handler(console: &mut Console, inventory: &mut Inventory, clue: Option<&str>) -> Result<(), InputError> {
    console.view.push(ViewItem::Scene {
        title: "ANCIENT RUINS".to_string(),
        description: format!(
            "A stone gate blocks the way. An inscription reads: \u{201c}Answer me to earn direction: {RIDDLE}\u{201d}"
        ),
    });

    if console.ask_menu::<RuinsAction>("What do you do?")? == RuinsAction::Leave {
        console
            .view
            .push(ViewItem::Narration("You back away from the gate.".to_string()));
        return Ok(());
    }

    let answer = console.read_text("Your answer: ")?;
    if is_correct_answer(&answer) {
        info!("riddle solved with \"{answer}\"");
        console
            .view
            .push(ViewItem::ActionSuccess("The stone gate slides open!".to_string()));
        console.view.push(ViewItem::Narration(
            "Inside, you find a small compass with a carved arrow.".to_string(),
        ));
        add_item(&mut console.view, inventory, Item::Compass);
    } else {
        info!("riddle answer \"{answer}\" rejected (clue known: {})", clue.is_some());
        let quip = console.spin(SpinnerType::GateShut, "The gate does not move.");
        console.view.push(ViewItem::ActionFailure(quip));
        if let Some(clue) = clue {
            console.view.push(ViewItem::Hint(clue_hint(clue)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::dock::NOTE_CLUE;
    use crate::repl::input::ScriptedInput;
    use crate::view::View;

    fn visit(lines: &[&str], inventory: &mut Inventory, clue: Option<&str>) -> Console {
        let mut console = Console::new(ScriptedInput::from_lines(lines.iter().copied()), View::recording());
        ruins_handler(&mut console, inventory, clue).unwrap();
        console
    }

    #[test]
    fn accepted_answers_are_exact_after_normalizing() {
        assert!(is_correct_answer("clock"));
        assert!(is_correct_answer("  A CLOCK "));
        assert!(!is_correct_answer("the clock"));
        assert!(!is_correct_answer("clocks"));
        assert!(!is_correct_answer(""));
    }

    #[test]
    fn correct_answer_grants_compass() {
        let mut inv = Inventory::new();
        visit(&["answer", "a clock"], &mut inv, None);
        assert_eq!(inv.items(), &[Item::Compass]);
    }

    #[test]
    fn wrong_answer_with_clue_shows_hint() {
        let mut inv = Inventory::new();
        let console = visit(&["answer", "sundial"], &mut inv, Some(NOTE_CLUE));
        assert!(inv.is_empty());
        let hints: Vec<_> = console.view.transcript().filter(|i| i.is_hint()).cloned().collect();
        assert_eq!(
            hints,
            vec![ViewItem::Hint(
                "Hint from your clue: STONE GUARDS THE GOLD (think about 'stone' places!)".to_string()
            )]
        );
    }

    #[test]
    fn wrong_answer_without_clue_gives_no_hint() {
        let mut inv = Inventory::new();
        let console = visit(&["answer", "sundial"], &mut inv, None);
        assert!(inv.is_empty());
        assert!(!console.view.transcript().any(ViewItem::is_hint));
    }

    #[test]
    fn solving_again_keeps_single_compass() {
        let mut inv = Inventory::new();
        visit(&["answer", "clock"], &mut inv, None);
        let console = visit(&["answer", "clock"], &mut inv, None);
        assert_eq!(inv.items(), &[Item::Compass]);
        assert!(console.view.transcript().any(ViewItem::is_item_already_held));
    }

    #[test]
    fn leaving_reads_no_answer() {
        let mut inv = Inventory::new();
        let mut console = Console::new(ScriptedInput::from_lines(["leave", "clock"]), View::recording());
        ruins_handler(&mut console, &mut inv, None).unwrap();
        assert!(inv.is_empty());
        assert_eq!(console.read_text("left over: ").unwrap(), "clock");
    }
}
