//! `repl::dig_site` module
//!
//! The Dig Site: where the hunt is won, either properly equipped or by sheer luck.

use log::info;

use crate::config::HuntConfig;
use crate::error::InputError;
use crate::inventory::Inventory;
use crate::item::Item;
use crate::rng::{RandomSource, chance_check};
use crate::spinners::SpinnerType;
use crate::view::ViewItem;
use crate::world::DigOutcome;

use super::prompt::{Console, MenuChoice};

/// Items that, together, lead straight to the treasure. Checked in this order.
pub const WINNING_ITEMS: [Item; 2] = [Item::Compass, Item::OldKey];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigAction {
    UseCompass,
    DigRandomly,
    Leave,
}

impl MenuChoice for DigAction {
    const ALL: &'static [Self] = &[Self::UseCompass, Self::DigRandomly, Self::Leave];

    fn label(self) -> &'static str {
        match self {
            DigAction::UseCompass => "use compass",
            DigAction::DigRandomly => "dig randomly",
            DigAction::Leave => "leave",
        }
    }
}

/// Visit the Dig Site. Never changes the inventory.
///
/// # Errors
/// - if player input ends or fails mid-visit
pub fn dig_site_handler(
    console: &mut Console,
    inventory: &Inventory,
    rng: &mut dyn RandomSource,
    config: &HuntConfig,
) -> Result<DigOutcome, InputError> {
    console.view.push(ViewItem::Scene {
        title: "DIG SITE".to_string(),
        description: "You reach a hill marked by an X of stones.".to_string(),
    });

    let outcome = match console.ask_menu::<DigAction>("What do you do?")? {
        DigAction::Leave => {
            console
                .view
                .push(ViewItem::Narration("You decide not to dig right now.".to_string()));
            DigOutcome::Continue
        },
        DigAction::UseCompass => use_compass(console, inventory),
        DigAction::DigRandomly => dig_randomly(console, rng, config),
    };
    Ok(outcome)
}

fn use_compass(console: &mut Console, inventory: &Inventory) -> DigOutcome {
    let missing = inventory.missing(&WINNING_ITEMS);
    if missing.is_empty() {
        info!("compass and key in hand; treasure found");
        for line in [
            "The compass points to one exact spot.",
            "You dig... and hit a wooden chest!",
            "The OLD KEY fits perfectly.",
        ] {
            console.view.push(ViewItem::Narration(line.to_string()));
        }
        console
            .view
            .push(ViewItem::Victory("YOU FOUND THE TREASURE!".to_string()));
        return DigOutcome::Win;
    }

    info!("tried the compass while missing {missing:?}");
    console.view.push(ViewItem::ActionFailure(
        "You can't guarantee the right spot yet.".to_string(),
    ));
    console.view.push(ViewItem::MissingItems(missing));
    DigOutcome::Continue
}

fn dig_randomly(console: &mut Console, rng: &mut dyn RandomSource, config: &HuntConfig) -> DigOutcome {
    console
        .view
        .push(ViewItem::Narration("You dig at random spots...".to_string()));
    if chance_check(rng, &mut console.view, "random digging", config.lucky_dig_chance) {
        console.view.push(ViewItem::ActionSuccess(
            "Lucky hit! You found the chest by chance!".to_string(),
        ));
        console.view.push(ViewItem::Victory("YOU WIN!".to_string()));
        DigOutcome::Win
    } else {
        let quip = console.spin(SpinnerType::EmptyDig, "Nothing here. Maybe you need better direction.");
        console.view.push(ViewItem::ActionFailure(quip));
        DigOutcome::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::input::ScriptedInput;
    use crate::rng::ScriptedRandom;
    use crate::view::View;

    fn visit(line: &str, draws: &[f64], inventory: &Inventory) -> (DigOutcome, Console, ScriptedRandom) {
        let mut console = Console::new(ScriptedInput::from_lines([line]), View::recording());
        let mut rng = ScriptedRandom::new(draws.iter().copied());
        let outcome = dig_site_handler(&mut console, inventory, &mut rng, &HuntConfig::default()).unwrap();
        (outcome, console, rng)
    }

    fn full_kit() -> Inventory {
        let mut inv = Inventory::new();
        inv.add(Item::OldKey);
        inv.add(Item::Compass);
        inv
    }

    #[test]
    fn compass_wins_with_both_items() {
        let (outcome, _, rng) = visit("use compass", &[0.99], &full_kit());
        assert_eq!(outcome, DigOutcome::Win);
        assert_eq!(rng.taken(), 0);
    }

    #[test]
    fn compass_reports_missing_in_order() {
        let (outcome, console, _) = visit("use compass", &[], &Inventory::new());
        assert_eq!(outcome, DigOutcome::Continue);
        assert!(
            console
                .view
                .transcript()
                .any(|i| *i == ViewItem::MissingItems(vec![Item::Compass, Item::OldKey]))
        );

        let mut only_compass = Inventory::new();
        only_compass.add(Item::Compass);
        let (outcome, console, _) = visit("use compass", &[], &only_compass);
        assert_eq!(outcome, DigOutcome::Continue);
        assert!(
            console
                .view
                .transcript()
                .any(|i| *i == ViewItem::MissingItems(vec![Item::OldKey]))
        );
    }

    #[test]
    fn random_dig_wins_below_threshold() {
        let inv = Inventory::new();
        let (outcome, _, _) = visit("dig randomly", &[0.149], &inv);
        assert_eq!(outcome, DigOutcome::Win);
        assert!(inv.is_empty());
    }

    #[test]
    fn random_dig_fails_at_threshold_regardless_of_items() {
        let inv = full_kit();
        let (outcome, _, rng) = visit("dig randomly", &[0.15], &inv);
        assert_eq!(outcome, DigOutcome::Continue);
        assert_eq!(rng.taken(), 1);
        assert_eq!(inv, full_kit());
    }

    #[test]
    fn leaving_continues() {
        let (outcome, _, rng) = visit("LEAVE", &[0.0], &full_kit());
        assert_eq!(outcome, DigOutcome::Continue);
        assert_eq!(rng.taken(), 0);
    }
}
