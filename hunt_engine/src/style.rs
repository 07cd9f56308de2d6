//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};
use textwrap::{Options, termwidth};

/// Widest we let narrative text run, even on very wide terminals.
const MAX_TEXT_WIDTH: usize = 84;

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn title_style(&self) -> ColoredString;
    fn scene_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn item_style(&self) -> ColoredString;
    fn clue_style(&self) -> ColoredString;
    fn hint_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn option_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn denied_style(&self) -> ColoredString;
    fn victory_style(&self) -> ColoredString;
    fn subheading_style(&self) -> ColoredString;
    fn dev_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn title_style(&self) -> ColoredString {
        self.bright_yellow().bold().underline()
    }
    fn scene_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10).underline()
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn item_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn clue_style(&self) -> ColoredString {
        self.italic().truecolor(220, 40, 220)
    }
    fn hint_style(&self) -> ColoredString {
        self.italic().truecolor(230, 230, 30)
    }
    fn prompt_style(&self) -> ColoredString {
        self.bold().truecolor(110, 220, 110)
    }
    fn option_style(&self) -> ColoredString {
        self.truecolor(75, 180, 255)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn denied_style(&self) -> ColoredString {
        self.italic().truecolor(230, 30, 30)
    }
    fn victory_style(&self) -> ColoredString {
        self.bold().truecolor(150, 230, 30)
    }
    fn subheading_style(&self) -> ColoredString {
        self.underline()
    }
    fn dev_style(&self) -> ColoredString {
        self.dimmed().truecolor(75, 80, 75)
    }
}

impl GameStyle for String {
    fn title_style(&self) -> ColoredString {
        self.as_str().title_style()
    }
    fn scene_style(&self) -> ColoredString {
        self.as_str().scene_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn clue_style(&self) -> ColoredString {
        self.as_str().clue_style()
    }
    fn hint_style(&self) -> ColoredString {
        self.as_str().hint_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn option_style(&self) -> ColoredString {
        self.as_str().option_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn denied_style(&self) -> ColoredString {
        self.as_str().denied_style()
    }
    fn victory_style(&self) -> ColoredString {
        self.as_str().victory_style()
    }
    fn subheading_style(&self) -> ColoredString {
        self.as_str().subheading_style()
    }
    fn dev_style(&self) -> ColoredString {
        self.as_str().dev_style()
    }
}

/// Wrapping options for ordinary narrative text.
pub fn normal_block() -> Options<'static> {
    Options::new(termwidth().min(MAX_TEXT_WIDTH))
}

/// Wrapping options for text set off under a heading.
pub fn indented_block() -> Options<'static> {
    normal_block().initial_indent("    ").subsequent_indent("    ")
}
