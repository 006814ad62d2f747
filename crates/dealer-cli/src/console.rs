//! Console collaborators over stdin/stdout

use std::io::{self, Write};

use dealer_app::io::{Answer, Confirm, LineInput};
use dealer_domain::service::is_affirmative;

fn read_stdin_line(prompt: &str) -> io::Result<String> {
    if !prompt.is_empty() {
        println!("{}", prompt);
    }
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "standard input closed",
        ));
    }
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

/// Line input from the keyboard
pub struct ConsoleInput;

impl LineInput for ConsoleInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        read_stdin_line(prompt)
    }
}

/// Yes/no confirmation typed on the keyboard
pub struct ConsoleConfirm;

impl Confirm for ConsoleConfirm {
    fn confirm(&mut self, question: &str) -> io::Result<Answer> {
        let answer = read_stdin_line(&format!("{} [y/N]", question))?;
        Ok(if is_affirmative(&answer) {
            Answer::Yes
        } else {
            Answer::No
        })
    }
}
