//! Reading the user's mood

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::CliError;
use crate::presentation::MOOD_PROMPT;

/// A source of input lines
///
/// `Ok(None)` means the user is done (end of input or Ctrl-C).
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError>;
}

impl LineReader for DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        match self.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Prompt until a non-blank mood is entered
///
/// The mood is returned exactly as typed.
pub fn read_mood<R: LineReader + ?Sized>(reader: &mut R) -> Result<Option<String>, CliError> {
    loop {
        match reader.read_line(MOOD_PROMPT)? {
            None => return Ok(None),
            Some(line) if line.trim().is_empty() => continue,
            Some(line) => return Ok(Some(line)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct Lines {
        lines: VecDeque<Option<String>>,
        prompts: Vec<String>,
    }

    impl Lines {
        fn new(lines: &[Option<&str>]) -> Self {
            Self {
                lines: lines.iter().map(|l| l.map(String::from)).collect(),
                prompts: Vec::new(),
            }
        }
    }

    impl LineReader for Lines {
        fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
            self.prompts.push(prompt.to_string());
            Ok(self.lines.pop_front().flatten())
        }
    }

    #[test]
    fn test_blank_input_reprompts() {
        let mut reader = Lines::new(&[Some(""), Some("   "), Some("relaxing")]);

        let mood = read_mood(&mut reader).unwrap();

        assert_eq!(mood.as_deref(), Some("relaxing"));
        assert_eq!(reader.prompts.len(), 3);
        assert!(reader.prompts.iter().all(|p| p == MOOD_PROMPT));
    }

    #[test]
    fn test_mood_is_not_trimmed() {
        let mut reader = Lines::new(&[Some(" beach vibes ")]);
        assert_eq!(
            read_mood(&mut reader).unwrap().as_deref(),
            Some(" beach vibes ")
        );
    }

    #[test]
    fn test_end_of_input() {
        let mut reader = Lines::new(&[Some(""), None]);
        assert_eq!(read_mood(&mut reader).unwrap(), None);
    }
}
