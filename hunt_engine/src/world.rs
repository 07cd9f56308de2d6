//! World module
//!
//! State of a single expedition: who is playing, what they carry, what they've learned.

use std::collections::HashMap;
use std::fmt;

use log::info;
use variantly::Variantly;

use crate::inventory::{Inventory, clue_summary};
use crate::repl::MenuChoice;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Variantly)]
pub enum SessionOutcome {
    Win,
    Quit,
}

/// Result of a visit to the dig site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Variantly)]
pub enum DigOutcome {
    Win,
    Continue,
}

/// Places the player can head to from the session menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    OldDock,
    Ruins,
    DigSite,
    Quit,
}

impl MenuChoice for Destination {
    const ALL: &'static [Self] = &[Self::OldDock, Self::Ruins, Self::DigSite, Self::Quit];

    fn label(self) -> &'static str {
        match self {
            Destination::OldDock => "old dock",
            Destination::Ruins => "ruins",
            Destination::DigSite => "dig site",
            Destination::Quit => "quit",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One playthrough's worth of state. Created fresh for every session.
#[derive(Debug, Clone, Default)]
pub struct Expedition {
    pub player_name: String,
    pub inventory: Inventory,
    clue: Option<&'static str>,
    visits: HashMap<Destination, usize>,
}

impl Expedition {
    pub fn new(player_name: impl Into<String>) -> Self {
        let expedition = Self {
            player_name: player_name.into(),
            ..Self::default()
        };
        info!("new expedition created for '{}'", expedition.player_name);
        expedition
    }

    pub fn clue(&self) -> Option<&'static str> {
        self.clue
    }

    /// Keep a newly found clue. `None` leaves any clue already known in place.
    pub fn record_clue(&mut self, found: Option<&'static str>) {
        if let Some(clue) = found {
            info!("clue recorded: \"{clue}\"");
            self.clue = Some(clue);
        }
    }

    pub fn record_visit(&mut self, destination: Destination) {
        *self.visits.entry(destination).or_default() += 1;
    }

    pub fn visits(&self, destination: Destination) -> usize {
        self.visits.get(&destination).copied().unwrap_or_default()
    }

    /// Write the end-of-session state to the log.
    pub fn log_summary(&self, outcome: SessionOutcome) {
        info!("{} ended the expedition: {outcome:?}", self.player_name);
        info!("ending inventory: {}", self.inventory.summary());
        info!("ending clue: {}", clue_summary(self.clue));
        for destination in Destination::ALL {
            info!("- visits to {destination}: {}", self.visits(*destination));
        }
    }
}
