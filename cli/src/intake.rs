//! Whitespace-delimited answers read from a buffered source.
//!
//! Tokens may span lines; a line is only read once the previous one is used up.

use std::collections::VecDeque;
use std::io::BufRead;

use dealer_common::{config::Config, error::DealerError};
use dealer_core::showroom::{Intake, Prompt};

use crate::terminal::print;

pub struct TokenReader<R> {
    source: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` once the source is exhausted.
    pub fn next_token(&mut self) -> Result<Option<String>, DealerError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.source.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    /// Tokens already read from the source but not handed out.
    pub fn buffered(&self) -> usize {
        self.pending.len()
    }
}

pub struct StdinIntake<'a, R> {
    reader: TokenReader<R>,
    cfg: &'a Config,
}

impl<'a, R: BufRead> StdinIntake<'a, R> {
    pub fn new(source: R, cfg: &'a Config) -> Self {
        Self {
            reader: TokenReader::new(source),
            cfg,
        }
    }

    pub fn unread(&self) -> usize {
        self.reader.buffered()
    }
}

impl<R: BufRead> Intake for StdinIntake<'_, R> {
    fn text(&mut self, prompt: &Prompt) -> Result<String, DealerError> {
        print::prompt(prompt.text, self.cfg.quiet);
        self.reader
            .next_token()?
            .ok_or_else(|| DealerError::end_of_input(prompt.field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dealer_core::showroom::{CAR_TYPE, VEHICLE_MILEAGE, VEHICLE_PRICE};
    use std::io::Cursor;

    fn quiet() -> Config {
        Config {
            quiet: true,
            verbose: false,
            no_color: true,
        }
    }

    #[test]
    fn test_tokens_span_lines() {
        let mut reader = TokenReader::new(Cursor::new("Toyota 20000\n\n  5000\nHonda"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("Toyota"));
        assert_eq!(reader.buffered(), 1);
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("20000"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("5000"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("Honda"));
        assert_eq!(reader.next_token().unwrap(), None);
    }

    #[test]
    fn test_number_parses_negative() {
        let cfg = quiet();
        let mut intake = StdinIntake::new(Cursor::new("-250"), &cfg);
        assert_eq!(intake.number(&VEHICLE_PRICE).unwrap(), -250);
    }

    #[test]
    fn test_number_rejects_text() {
        let cfg = quiet();
        let mut intake = StdinIntake::new(Cursor::new("lots"), &cfg);
        match intake.number(&VEHICLE_MILEAGE) {
            Err(DealerError::InvalidInput { field, value }) => {
                assert_eq!(field, "vehicle mileage");
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_end_of_input_is_invalid() {
        let cfg = quiet();
        let mut intake = StdinIntake::new(Cursor::new(""), &cfg);
        assert!(matches!(
            intake.text(&CAR_TYPE),
            Err(DealerError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_unread_counts_leftovers_on_current_line() {
        let cfg = quiet();
        let mut intake = StdinIntake::new(Cursor::new("SUV extra tokens\n"), &cfg);
        assert_eq!(intake.text(&CAR_TYPE).unwrap(), "SUV");
        assert_eq!(intake.unread(), 2);
    }
}
