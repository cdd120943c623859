use std::collections::VecDeque;

use dealer_common::error::DealerError;
use dealer_core::showroom::{Console, Intake, Prompt};

/// Answers prompts from a fixed token list and remembers what was asked.
pub struct ScriptedIntake {
    tokens: VecDeque<String>,
    pub asked: Vec<Prompt>,
}

impl ScriptedIntake {
    pub fn new(input: &str) -> Self {
        Self {
            tokens: input.split_whitespace().map(str::to_owned).collect(),
            asked: Vec::new(),
        }
    }
}

impl Intake for ScriptedIntake {
    fn text(&mut self, prompt: &Prompt) -> Result<String, DealerError> {
        self.asked.push(*prompt);
        self.tokens
            .pop_front()
            .ok_or_else(|| DealerError::end_of_input(prompt.field))
    }
}

#[derive(Default)]
pub struct RecordingConsole {
    pub lines: Vec<String>,
    pub sections: Vec<String>,
}

impl Console for RecordingConsole {
    fn line(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
    }

    fn section(&mut self, title: &str) {
        self.sections.push(title.to_string());
    }
}

pub const SAMPLE_INPUT: &str = "Toyota 20000 5000
Honda 22000 3000 SUV
Tesla 45000 1500 82
Ford 38000 12000 5 Diesel
";
