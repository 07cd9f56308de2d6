//! Tunable game constants.
//!
//! The hunt reads no config files or flags; these defaults are the game as
//! shipped, and tests build variations of [`HuntConfig`] directly.

/// Chance that forcing the rusty box at the dock snaps the lock.
pub const KEY_CHANCE: f64 = 0.70;
/// Chance that digging at random turns up the chest.
pub const LUCKY_DIG_CHANCE: f64 = 0.15;
/// Name used when the player just presses enter at the name prompt.
pub const DEFAULT_PLAYER_NAME: &str = "Explorer";

#[derive(Debug, Clone, PartialEq)]
pub struct HuntConfig {
    pub key_chance: f64,
    pub lucky_dig_chance: f64,
    pub default_player_name: String,
}

impl Default for HuntConfig {
    fn default() -> Self {
        Self {
            key_chance: KEY_CHANCE,
            lucky_dig_chance: LUCKY_DIG_CHANCE,
            default_player_name: DEFAULT_PLAYER_NAME.to_string(),
        }
    }
}
