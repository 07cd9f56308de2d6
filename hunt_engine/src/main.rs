#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Treasure Hunt **
//! A short three-location treasure hunt for the terminal.

use hunt_engine::style::GameStyle;
use hunt_engine::{Console, HUNT_VERSION, HuntConfig, InputError, InputManager, ThreadRandom, View, ViewItem, run_game};

use anyhow::{Context, Result};
use log::info;

use std::io::Write;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: treasure hunt v{HUNT_VERSION}");

    let config = HuntConfig::default();
    let mut console = Console::new(InputManager::new(), View::new());
    let mut rng = ThreadRandom::new();

    // clear the screen
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush().context("while clearing the screen")?;
    println!(
        "{}",
        "Find the OLD KEY and the COMPASS, then head for the dig site.".description_style()
    );

    match run_game(&mut console, &mut rng, &config) {
        Ok(summary) => info!("player left after {} session(s)", summary.sessions()),
        Err(InputError::EndOfInput) => {
            info!("input closed; ending the hunt early");
            console
                .view
                .push(ViewItem::Farewell("\nThanks for playing!".to_string()));
            console.view.flush();
        },
        Err(err) => return Err(err).context("while running the treasure hunt"),
    }
    Ok(())
}
