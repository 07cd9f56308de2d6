#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const HUNT_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DEV_MODE: bool = cfg!(feature = "dev-mode");

// Core modules
pub mod config;
pub mod error;
pub mod inventory;
pub mod item;
pub mod repl;
pub mod rng;
pub mod spinners;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use config::HuntConfig;
pub use error::InputError;
pub use inventory::{AddOutcome, Inventory, add_item, show_status};
pub use item::Item;
pub use repl::{Console, GameSummary, InputManager, ScriptedInput, run_game, run_session};
pub use rng::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use view::{View, ViewItem};
pub use world::{Destination, DigOutcome, Expedition, SessionOutcome};
