//! Inventory module
//!
//! The player's satchel: an insertion-ordered set of [`Item`]s that only ever grows.

use log::info;

use crate::item::Item;
use crate::view::{View, ViewItem};

/// Result of trying to put an item in the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Obtained,
    AlreadyHave,
}

/// Items obtained during one expedition, in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `item` unless it is already held. Never creates duplicates.
    pub fn add(&mut self, item: Item) -> AddOutcome {
        if self.contains(item) {
            AddOutcome::AlreadyHave
        } else {
            self.items.push(item);
            AddOutcome::Obtained
        }
    }

    pub fn contains(&self, item: Item) -> bool {
        self.items.contains(&item)
    }

    /// Items held, in the order they were obtained.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns whichever of `wanted` are not held, keeping the order of `wanted`.
    pub fn missing(&self, wanted: &[Item]) -> Vec<Item> {
        wanted.iter().copied().filter(|item| !self.contains(*item)).collect()
    }

    /// Comma-joined item names, or "Empty".
    pub fn summary(&self) -> String {
        if self.items.is_empty() {
            "Empty".to_string()
        } else {
            self.items.iter().map(|item| item.name()).collect::<Vec<_>>().join(", ")
        }
    }
}

/// Add an item to the inventory and tell the player how it went.
pub fn add_item(view: &mut View, inventory: &mut Inventory, item: Item) -> AddOutcome {
    let outcome = inventory.add(item);
    match outcome {
        AddOutcome::Obtained => {
            info!("player obtained {item} ({} item(s) held)", inventory.len());
            view.push(ViewItem::ItemObtained(item));
        },
        AddOutcome::AlreadyHave => {
            info!("player already holds {item}; inventory unchanged");
            view.push(ViewItem::ItemAlreadyHeld(item));
        },
    }
    outcome
}

/// Show the current inventory and clue. Reads only.
pub fn show_status(view: &mut View, inventory: &Inventory, clue: Option<&str>) {
    view.push(ViewItem::Status {
        inventory: inventory.summary(),
        clue: clue_summary(clue),
    });
}

/// The clue text, or "None".
pub fn clue_summary(clue: Option<&str>) -> String {
    clue.unwrap_or("None").to_string()
}
