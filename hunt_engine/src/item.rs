//! Item module
//!
//! The hunt has exactly two things worth carrying.

use std::fmt;

/// An item the player can obtain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Item {
    /// Found by forcing the rusty box at the Old Dock.
    OldKey,
    /// Granted by the stone gate at the Ancient Ruins.
    Compass,
}

impl Item {
    /// Display name, which doubles as the item's identity.
    pub const fn name(self) -> &'static str {
        match self {
            Item::OldKey => "OLD KEY",
            Item::Compass => "COMPASS",
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_exact() {
        assert_eq!(Item::OldKey.name(), "OLD KEY");
        assert_eq!(Item::Compass.to_string(), "COMPASS");
    }
}
