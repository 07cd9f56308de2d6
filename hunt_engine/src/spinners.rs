//! Flavor-text spinners.
//!
//! A spinner picks one of several interchangeable lines so repeated failures
//! don't read identically. They never affect game mechanics.

use std::collections::HashMap;

use gametools::{Spinner, Wedge};
use log::info;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpinnerType {
    InvalidChoice,
    LockHolds,
    EmptyDig,
    GateShut,
}

impl SpinnerType {
    pub const ALL: [SpinnerType; 4] = [
        SpinnerType::InvalidChoice,
        SpinnerType::LockHolds,
        SpinnerType::EmptyDig,
        SpinnerType::GateShut,
    ];

    /// Built-in lines for this spinner.
    pub fn default_values(self) -> &'static [&'static str] {
        match self {
            SpinnerType::InvalidChoice => &[
                "Invalid choice. Try again.",
                "That isn't one of the options. Try again.",
                "Hmm? Pick one of the listed options.",
            ],
            SpinnerType::LockHolds => &[
                "It won't open. Maybe try again later.",
                "The lock groans but holds fast.",
                "Rust flakes off, but the lock doesn't budge.",
            ],
            SpinnerType::EmptyDig => &[
                "Nothing here. Maybe you need better direction.",
                "Just sand and broken shells.",
                "Your shovel strikes a rock. Only a rock.",
            ],
            SpinnerType::GateShut => &[
                "The gate does not move.",
                "The stone gate stays firmly shut.",
            ],
        }
    }
}

/// Build one spinner per [`SpinnerType`] from the built-in lines.
pub fn default_spinners() -> HashMap<SpinnerType, Spinner<String>> {
    let spinners: HashMap<_, _> = SpinnerType::ALL
        .iter()
        .map(|kind| {
            let wedges = kind
                .default_values()
                .iter()
                .map(|line| Wedge::new((*line).to_string()))
                .collect::<Vec<_>>();
            (*kind, Spinner::new(wedges))
        })
        .collect();
    info!("created {} flavor-text spinners", spinners.len());
    spinners
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_has_lines() {
        let spinners = default_spinners();
        for kind in SpinnerType::ALL {
            assert!(!kind.default_values().is_empty());
            let line = spinners.get(&kind).and_then(Spinner::spin).unwrap();
            assert!(kind.default_values().contains(&line.as_str()));
        }
    }
}
