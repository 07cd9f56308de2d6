//! `repl::prompt` module
//!
//! The [`Console`] pairs an input source with the [`View`] and asks the player
//! questions: closed menus that insist on a valid answer, and free-text lines.

use std::collections::HashMap;

use gametools::Spinner;
use log::{debug, info};

use crate::error::InputError;
use crate::spinners::{SpinnerType, default_spinners};
use crate::style::GameStyle;
use crate::view::{View, ViewItem};

use super::input::{InputEvent, LineInput};

/// Marker shown where the player types a menu answer.
pub const CHOICE_PROMPT: &str = "> ";

/// A closed set of menu answers.
///
/// `ALL` must be non-empty and every `label` lowercase.
pub trait MenuChoice: Copy + 'static {
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
}

/// Answer to a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

impl MenuChoice for YesNo {
    const ALL: &'static [Self] = &[Self::Yes, Self::No];

    fn label(self) -> &'static str {
        match self {
            YesNo::Yes => "yes",
            YesNo::No => "no",
        }
    }
}

/// Where the game talks to the player and listens back.
pub struct Console {
    input: Box<dyn LineInput>,
    pub view: View,
    spinners: HashMap<SpinnerType, Spinner<String>>,
}

impl Console {
    pub fn new(input: impl LineInput + 'static, view: View) -> Self {
        Self {
            input: Box::new(input),
            view,
            spinners: default_spinners(),
        }
    }

    /// Ask until the player types one of `options` (trimmed, case-insensitive).
    /// Returns the chosen option in lowercase.
    ///
    /// # Errors
    /// - if the input stream ends or fails before a valid answer arrives
    pub fn ask_choice(&mut self, prompt: &str, options: &[&str]) -> Result<String, InputError> {
        let canonical: Vec<String> = options.iter().map(|opt| opt.to_lowercase()).collect();
        let index = self.choose_index(prompt, &canonical)?;
        Ok(canonical[index].clone())
    }

    /// Typed version of [`Console::ask_choice`] over a [`MenuChoice`] set.
    ///
    /// # Errors
    /// - if the input stream ends or fails before a valid answer arrives
    pub fn ask_menu<C: MenuChoice>(&mut self, prompt: &str) -> Result<C, InputError> {
        let labels: Vec<String> = C::ALL.iter().map(|choice| choice.label().to_string()).collect();
        let index = self.choose_index(prompt, &labels)?;
        Ok(C::ALL[index])
    }

    /// Read one line of free text, trimmed. Any text (even empty) is accepted.
    ///
    /// # Errors
    /// - if the input stream ends or fails
    pub fn read_text(&mut self, prompt: &str) -> Result<String, InputError> {
        self.input.set_completions(&[]);
        loop {
            self.view.flush();
            if let Some(line) = self.next_line(prompt)? {
                return Ok(line.trim().to_string());
            }
        }
    }

    /// Returns a random line from the selected spinner type, or a supplied default.
    pub fn spin(&self, spin_type: SpinnerType, default: &'static str) -> String {
        self.spinners
            .get(&spin_type)
            .and_then(Spinner::spin)
            .unwrap_or_else(|| default.to_string())
    }

    fn choose_index(&mut self, prompt: &str, options: &[String]) -> Result<usize, InputError> {
        debug_assert!(!options.is_empty(), "menu offered with no options");
        self.input.set_completions(options);
        loop {
            self.view.push(ViewItem::Menu {
                question: prompt.to_string(),
                options: options.to_vec(),
            });
            self.view.flush();

            let marker = CHOICE_PROMPT.prompt_style().to_string();
            let Some(line) = self.next_line(&marker)? else {
                continue;
            };
            let answer = line.trim().to_lowercase();
            if let Some(index) = options.iter().position(|opt| *opt == answer) {
                debug!("menu \"{prompt}\" answered with \"{answer}\"");
                return Ok(index);
            }

            info!("rejected answer \"{answer}\" to menu \"{prompt}\"");
            let rejection = self.spin(SpinnerType::InvalidChoice, "Invalid choice. Try again.");
            self.view.push(ViewItem::InvalidChoice(rejection));
        }
    }

    /// `Ok(None)` means the read was interrupted and the caller should ask again.
    fn next_line(&mut self, prompt: &str) -> Result<Option<String>, InputError> {
        match self.input.read_line(prompt)? {
            InputEvent::Line(line) => Ok(Some(line)),
            InputEvent::Eof => Err(InputError::EndOfInput),
            InputEvent::Interrupted => {
                self.view.push(ViewItem::EngineMessage("Input canceled.".to_string()));
                Ok(None)
            },
        }
    }
}
