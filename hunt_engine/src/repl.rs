//! Session and replay loops.
//!
//! A session walks one expedition from the name prompt to a win or a quit.
//! The game loop runs sessions back to back until the player has had enough.
//! Location handlers live in the submodules.

pub mod dig_site;
pub mod dock;
pub mod input;
pub mod prompt;
pub mod ruins;

pub use dig_site::{DigAction, dig_site_handler};
pub use dock::{DockAction, NOTE_CLUE, dock_handler};
pub use input::{InputEvent, InputManager, LineInput, ScriptedInput};
pub use prompt::{Console, MenuChoice, YesNo};
pub use ruins::{RuinsAction, ruins_handler};

use log::info;

use crate::config::HuntConfig;
use crate::error::InputError;
use crate::inventory::show_status;
use crate::rng::RandomSource;
use crate::view::ViewItem;
use crate::world::{Destination, Expedition, SessionOutcome};

/// Tally of finished sessions for one run of the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameSummary {
    pub wins: usize,
    pub quits: usize,
}

impl GameSummary {
    fn record(&mut self, outcome: SessionOutcome) {
        match outcome {
            SessionOutcome::Win => self.wins += 1,
            SessionOutcome::Quit => self.quits += 1,
        }
    }

    pub fn sessions(&self) -> usize {
        self.wins + self.quits
    }
}

/// Play one expedition until the player wins or quits.
///
/// # Errors
/// - if player input ends or fails before the session finishes
pub fn run_session(
    console: &mut Console,
    rng: &mut dyn RandomSource,
    config: &HuntConfig,
) -> Result<SessionOutcome, InputError> {
    console.view.push(ViewItem::Title("SHORT TREASURE HUNT".to_string()));
    let name = console.read_text("Explorer name: > ")?;
    let player_name = if name.is_empty() {
        config.default_player_name.clone()
    } else {
        name
    };
    let mut expedition = Expedition::new(player_name);

    let outcome = loop {
        show_status(&mut console.view, &expedition.inventory, expedition.clue());
        let question = format!("\nWhere do you go next, {}?", expedition.player_name);
        let destination = console.ask_menu::<Destination>(&question)?;
        info!("{} heads to: {destination}", expedition.player_name);

        match destination {
            Destination::OldDock => {
                expedition.record_visit(destination);
                let found = dock_handler(console, &mut expedition.inventory, rng, config)?;
                expedition.record_clue(found);
            },
            Destination::Ruins => {
                expedition.record_visit(destination);
                let clue = expedition.clue();
                ruins_handler(console, &mut expedition.inventory, clue)?;
            },
            Destination::DigSite => {
                expedition.record_visit(destination);
                if dig_site_handler(console, &expedition.inventory, rng, config)?.is_win() {
                    break SessionOutcome::Win;
                }
            },
            Destination::Quit => break SessionOutcome::Quit,
        }
    };

    expedition.log_summary(outcome);
    Ok(outcome)
}

/// Run sessions back to back until the player declines another.
///
/// # Errors
/// - if player input ends or fails mid-game
pub fn run_game(
    console: &mut Console,
    rng: &mut dyn RandomSource,
    config: &HuntConfig,
) -> Result<GameSummary, InputError> {
    let mut summary = GameSummary::default();
    loop {
        let outcome = run_session(console, rng, config)?;
        summary.record(outcome);
        console.view.push(ViewItem::SessionOver(outcome));

        if console.ask_menu::<YesNo>("Play again?")? == YesNo::No {
            break;
        }
        info!("starting session #{}", summary.sessions() + 1);
    }

    console
        .view
        .push(ViewItem::Farewell("Thanks for playing!".to_string()));
    console.view.flush();
    info!(
        "game over after {} session(s): {} won, {} quit",
        summary.sessions(),
        summary.wins,
        summary.quits
    );
    Ok(summary)
}
