//! Error types for the treasure hunt.
//!
//! Bad menu answers are not errors (the prompter simply asks again), so the
//! only failures left are the ones coming from the input stream itself.

use std::io;

use thiserror::Error;

/// Failures that can occur while waiting on the player.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input stream closed (Ctrl-D, or a script ran out of lines).
    #[error("input stream closed before the player answered")]
    EndOfInput,
    #[error("failed to read player input: {0}")]
    Io(#[from] io::Error),
}

impl InputError {
    /// True if the player simply walked away (EOF) rather than something breaking.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, InputError::EndOfInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_and_are_not_eof() {
        let err: InputError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe").into();
        assert!(!err.is_end_of_input());
        assert!(err.to_string().contains("pipe"));
    }

    #[test]
    fn end_of_input_is_flagged() {
        assert!(InputError::EndOfInput.is_end_of_input());
    }
}
