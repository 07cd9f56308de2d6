//! View module.
//! This contains the view to the game world / messages.
//! Rather than printing to the console from each handler, handlers push [`ViewItem`]s
//! and the prompter flushes them in order just before it waits on the player.
use colored::Colorize;
use log::debug;
use textwrap::{fill, termwidth};
use variantly::Variantly;

use crate::item::Item;
use crate::style::{GameStyle, indented_block, normal_block};
use crate::world::SessionOutcome;

const ICON_SUCCESS: &str = "\u{2611}"; // ✔
const ICON_FAILURE: &str = "\u{274C}"; // ✖
const ICON_ERROR: &str = "⚠︎"; // U+26A0 U+FE0E
const ICON_INFO: &str = "ℹ";
const ICON_CLUE: &str = "🧩";
const ICON_INVENTORY: &str = "📦";
const ICON_CELEBRATE: &str = "🎉"; // U+1F389
const ICON_TROPHY: &str = "🏆";
const ICON_ENGINE: &str = "⚙";
const ICON_FAREWELL: &str = "🧭";

/// View aggregates messages between prompts and then displays them.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    /// Items waiting for the next flush.
    pub items: Vec<ViewItem>,
    /// Items already flushed, when recording.
    pub history: Vec<ViewItem>,
    recording: bool,
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    /// Create a view that prints to stdout.
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            items: Vec::new(),
            history: Vec::new(),
            recording: false,
        }
    }

    /// Create a view that keeps flushed items in `history` instead of printing them.
    pub fn recording() -> Self {
        Self {
            recording: true,
            ..Self::new()
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    /// Everything pushed so far, flushed or not.
    pub fn transcript(&self) -> impl Iterator<Item = &ViewItem> {
        self.history.iter().chain(self.items.iter())
    }

    /// Display all pending items in the order they were pushed.
    pub fn flush(&mut self) {
        if self.recording {
            debug!("recording {} view item(s)", self.items.len());
            self.history.append(&mut self.items);
            return;
        }

        // re-check terminal width in case it's been resized
        self.width = termwidth();
        for item in self.items.drain(..) {
            println!("{}", render(&item));
        }
    }
}

/// Everything the game can show the player.
#[derive(Debug, Clone, PartialEq, Variantly)]
pub enum ViewItem {
    Title(String),
    Scene { title: String, description: String },
    Narration(String),
    Menu { question: String, options: Vec<String> },
    InvalidChoice(String),
    EngineMessage(String),
    ActionSuccess(String),
    ActionFailure(String),
    ItemObtained(Item),
    ItemAlreadyHeld(Item),
    ClueDiscovered(String),
    Hint(String),
    MissingItems(Vec<Item>),
    Status { inventory: String, clue: String },
    Victory(String),
    SessionOver(SessionOutcome),
    Farewell(String),
    DevNote(String),
}

fn render(item: &ViewItem) -> String {
    match item {
        ViewItem::Title(title) => {
            let rule = "=".repeat(30);
            format!("\n{rule}\n{}\n{rule}", title.title_style())
        },
        ViewItem::Scene { title, description } => {
            format!(
                "\n{}\n{}",
                title.scene_style(),
                fill(description, normal_block()).description_style()
            )
        },
        ViewItem::Narration(text) => fill(text, normal_block()),
        ViewItem::Menu { question, options } => {
            let listed = options
                .iter()
                .map(|opt| opt.option_style().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}\nOptions: {listed}", question.prompt_style())
        },
        ViewItem::InvalidChoice(msg) => format!("{} {}\n", ICON_FAILURE.bright_red(), msg.denied_style()),
        ViewItem::EngineMessage(msg) => format!("{ICON_ENGINE:<4}{msg}"),
        ViewItem::ActionSuccess(msg) => fill(
            format!("{} {}", ICON_SUCCESS.bright_green(), msg).as_str(),
            normal_block(),
        ),
        ViewItem::ActionFailure(msg) => fill(
            format!("{} {}", ICON_FAILURE.bright_red(), msg).as_str(),
            normal_block(),
        ),
        ViewItem::ItemObtained(item) => format!(
            "{} You obtained: {}",
            ICON_SUCCESS.bright_green(),
            item.name().item_style()
        ),
        ViewItem::ItemAlreadyHeld(item) => format!(
            "{} You already have: {}",
            ICON_INFO.bright_blue(),
            item.name().item_style()
        ),
        ViewItem::ClueDiscovered(clue) => format!("\nThe note says: \u{201c}{}.\u{201d}", clue.clue_style()),
        ViewItem::Hint(hint) => fill(hint, indented_block()).hint_style().to_string(),
        ViewItem::MissingItems(items) => {
            let names = items
                .iter()
                .map(|item| item.name().item_style().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} Missing: {names}", ICON_ERROR.yellow())
        },
        ViewItem::Status { inventory, clue } => format!(
            "\n{ICON_INVENTORY} {}: {}\n{ICON_CLUE} {}: {}",
            "Inventory".subheading_style(),
            inventory.item_style(),
            "Clue".subheading_style(),
            clue.clue_style()
        ),
        ViewItem::Victory(msg) => format!("{ICON_TROPHY} {} {ICON_TROPHY}", msg.victory_style()),
        ViewItem::SessionOver(SessionOutcome::Win) => format!(
            "\n{ICON_CELEBRATE} {}\n",
            "Congratulations! You completed the treasure hunt!".victory_style()
        ),
        ViewItem::SessionOver(SessionOutcome::Quit) => format!("\n{}\n", "You ended the hunt.".italic()),
        ViewItem::Farewell(msg) => format!("{msg} {ICON_FAREWELL}"),
        ViewItem::DevNote(note) => format!("[dev] {note}").dev_style().to_string(),
    }
}
