//! Terminal input handling for the treasure hunt.
//!
//! Wraps rustyline configuration and completion tailored to whichever menu
//! the player is currently looking at, with a plain stdin fallback and a
//! scripted source for tests and demos.

use std::collections::VecDeque;
use std::io::{self, IsTerminal, Write};

use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};

/// Outcome of reading a line from the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

/// Anything that can hand the game one line of player input at a time.
pub trait LineInput {
    /// Show `prompt` and block until a line (or EOF / interrupt) arrives.
    ///
    /// # Errors
    /// - on failure of the underlying reader
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent>;

    /// Offer `options` as tab completions for the next read. Ignored by default.
    fn set_completions(&mut self, options: &[String]) {
        let _ = options;
    }
}

type HuntEditor = rustyline::Editor<HuntHelper, DefaultHistory>;

#[derive(Default)]
struct HuntHelper {
    options: Vec<String>,
}

impl Helper for HuntHelper {}

impl Completer for HuntHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, prefix) = current_prefix(line, pos);
        Ok((start, option_completions(&self.options, &prefix)))
    }
}

impl Hinter for HuntHelper {
    type Hint = String;
}

impl Highlighter for HuntHelper {}

impl Validator for HuntHelper {
    fn validate(&self, ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        let _ = ctx;
        Ok(ValidationResult::Valid(None))
    }
}

// Menu options may contain spaces ("dig site"), so the whole line up to the cursor is the prefix.
fn current_prefix(line: &str, pos: usize) -> (usize, String) {
    let slice = &line[..pos];
    let trimmed = slice.trim_start_matches(char::is_whitespace);
    let start = pos - trimmed.len();
    (start, trimmed.to_string())
}

fn option_completions(options: &[String], prefix: &str) -> Vec<Pair> {
    let lower = prefix.to_lowercase();
    options
        .iter()
        .filter(|opt| opt.starts_with(&lower))
        .map(|opt| Pair {
            display: opt.clone(),
            replacement: opt.clone(),
        })
        .collect()
}

/// Helper responsible for managing the interactive input backend.
///
/// Prefers `rustyline` when an interactive terminal is available, falling back to
/// a basic stdin reader otherwise.
pub struct InputManager {
    backend: Backend,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        let backend = if io::stdin().is_terminal() {
            match RustylineInput::new() {
                Ok(editor) => {
                    info!("using rustyline-backed input");
                    Backend::Rustyline(editor)
                },
                Err(err) => {
                    warn!("failed to initialize rustyline ({err}), falling back to basic stdin");
                    Backend::plain()
                },
            }
        } else {
            info!("stdin is not a TTY; using basic input mode");
            Backend::plain()
        };

        Self { backend }
    }
}

impl LineInput for InputManager {
    /// Read a line from the current backend. If the interactive backend reports an
    /// unrecoverable error, switch to the plain stdin backend and retry once.
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.backend.read_line(prompt) {
            Ok(event) => Ok(event),
            Err(err) => {
                if self.backend.is_rustyline() {
                    warn!("rustyline input failed: {err} -- switching to basic stdin");
                    self.backend = Backend::plain();
                    self.backend.read_line(prompt)
                } else {
                    Err(err)
                }
            },
        }
    }

    fn set_completions(&mut self, options: &[String]) {
        if let Backend::Rustyline(input) = &mut self.backend
            && let Some(helper) = input.editor.helper_mut()
        {
            helper.options = options.to_vec();
        }
    }
}

enum Backend {
    Rustyline(RustylineInput),
    Plain(StdinInput),
}

impl Backend {
    fn plain() -> Self {
        Backend::Plain(StdinInput::default())
    }

    fn is_rustyline(&self) -> bool {
        matches!(self, Backend::Rustyline(_))
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self {
            Backend::Rustyline(editor) => editor.read_line(prompt),
            Backend::Plain(stdin) => stdin.read_line(prompt),
        }
    }
}

struct RustylineInput {
    editor: HuntEditor,
}

impl RustylineInput {
    fn new() -> io::Result<Self> {
        let mut editor = rustyline::Editor::<HuntHelper, _>::new().map_err(map_io_err)?;
        editor.set_helper(Some(HuntHelper::default()));
        Ok(Self { editor })
    }

    // History is kept in memory only; nothing is written to disk.
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty()
                    && let Err(err) = self.editor.add_history_entry(line.as_str())
                {
                    warn!("failed to append to history: {err}");
                }
                Ok(InputEvent::Line(line))
            },
            Err(err) => convert_readline_error(err),
        }
    }
}

#[derive(Default)]
struct StdinInput {
    buffer: String,
}

impl StdinInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        print!("{prompt}");
        io::stdout().flush()?;

        self.buffer.clear();
        let bytes = io::stdin().read_line(&mut self.buffer)?;
        if bytes == 0 {
            return Ok(InputEvent::Eof);
        }

        if self.buffer.ends_with('\n') {
            self.buffer.pop();
            if self.buffer.ends_with('\r') {
                self.buffer.pop();
            }
        }

        Ok(InputEvent::Line(self.buffer.clone()))
    }
}

/// Plays back a fixed list of input events, then reports EOF.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_events(lines.into_iter().map(|line| InputEvent::Line(line.into())))
    }

    pub fn from_events(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            prompts: Vec::new(),
        }
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.events.len()
    }

    /// Every prompt string shown so far.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl LineInput for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        self.prompts.push(prompt.to_string());
        Ok(self.events.pop_front().unwrap_or(InputEvent::Eof))
    }
}

fn convert_readline_error(err: ReadlineError) -> io::Result<InputEvent> {
    match err {
        ReadlineError::Interrupted => Ok(InputEvent::Interrupted),
        ReadlineError::Eof => Ok(InputEvent::Eof),
        ReadlineError::Io(io_err) => Err(io_err),
        other => Err(io::Error::other(other)),
    }
}

fn map_io_err(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(io_err) => io_err,
        other => io::Error::other(other),
    }
}
