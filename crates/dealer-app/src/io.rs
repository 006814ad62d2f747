//! Collaborators the workflows use to talk to the user

use std::io;

/// Answer to a yes/no question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

/// Reads one line of text after showing a prompt
pub trait LineInput {
    /// Returns the line without its trailing newline
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

/// Asks a yes/no question, e.g. before deleting a vehicle
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> io::Result<Answer>;
}
