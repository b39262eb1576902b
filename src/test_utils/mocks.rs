//! Scripted prompter for driving whole sessions in tests
//!
//! Answers are queued up front; every prompt asked is recorded so tests can check the
//! order of questions as well as the results.

use std::collections::VecDeque;

use anyhow::{anyhow, Result};

use crate::menu::MenuAction;
use crate::prompt::Prompter;

/// One queued answer
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Action(MenuAction),
    Text(String),
}

/// A [`Prompter`] that replays a fixed script
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn action(mut self, action: MenuAction) -> Self {
        self.answers.push_back(Answer::Action(action));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.answers.push_back(Answer::Text(text.into()));
        self
    }

    /// Queues an action followed by the text answers it will prompt for
    pub fn step(mut self, action: MenuAction, texts: &[&str]) -> Self {
        self = self.action(action);
        for text in texts {
            self = self.text(*text);
        }
        self
    }

    /// Prompts asked so far, in order
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn select_action(
        &mut self,
        prompt: &str,
        _actions: &[MenuAction],
    ) -> Result<Option<MenuAction>> {
        self.asked.push(prompt.to_string());
        match self.answers.pop_front() {
            None => Ok(None),
            Some(Answer::Action(action)) => Ok(Some(action)),
            Some(Answer::Text(text)) => Err(anyhow!(
                "script expected a menu action for '{prompt}', found text '{text}'"
            )),
        }
    }

    fn input(&mut self, prompt: &str) -> Result<String> {
        self.asked.push(prompt.to_string());
        match self.answers.pop_front() {
            Some(Answer::Text(text)) => Ok(text),
            Some(Answer::Action(action)) => Err(anyhow!(
                "script expected text for '{prompt}', found action '{action}'"
            )),
            None => Err(anyhow!("script exhausted at '{prompt}'")),
        }
    }
}
