//! The interactive menu: six labeled actions and the loop that dispatches them.

use std::fmt;
use std::io::Write;

use anyhow::{Context, Result};

use crate::error::RosterError;
use crate::logging::log_session_event;
use crate::prompt::Prompter;
use crate::report::{error_line, farewell_line, welcome_line, Outcome};
use crate::roster::Roster;

pub const MENU_PROMPT: &str = "Choose an action";
pub const PROMPT_STUDENT_NAME: &str = "Enter student name";
pub const PROMPT_STUDENT_ID: &str = "Enter student ID";
pub const PROMPT_COURSE_NAME: &str = "Enter course name";
pub const PROMPT_TUITION_AMOUNT: &str = "Enter tuition amount";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    AddStudent,
    EnrollStudent,
    ViewBalance,
    PayTuition,
    ShowStatus,
    Exit,
}

impl MenuAction {
    /// Every action, in the order the menu shows them
    pub const ALL: [MenuAction; 6] = [
        MenuAction::AddStudent,
        MenuAction::EnrollStudent,
        MenuAction::ViewBalance,
        MenuAction::PayTuition,
        MenuAction::ShowStatus,
        MenuAction::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::AddStudent => "Add Student",
            Self::EnrollStudent => "Enroll Student",
            Self::ViewBalance => "View Balance",
            Self::PayTuition => "Pay Tuition",
            Self::ShowStatus => "Show Status",
            Self::Exit => "Exit",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.label() == label)
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether the menu loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One operator session over a roster.
///
/// Prompts go through `P`; reports are written to `W`.
pub struct Session<P, W> {
    roster: Roster,
    prompter: P,
    out: W,
}

impl<P: Prompter, W: Write> Session<P, W> {
    pub fn new(roster: Roster, prompter: P, out: W) -> Self {
        Self {
            roster,
            prompter,
            out,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn into_parts(self) -> (Roster, P, W) {
        (self.roster, self.prompter, self.out)
    }

    /// Runs the menu until the operator exits or input runs out
    pub fn run(&mut self) -> Result<()> {
        log_session_event("start");
        writeln!(self.out, "{}", welcome_line())?;

        loop {
            let Some(action) = self.prompter.select_action(MENU_PROMPT, &MenuAction::ALL)? else {
                log_session_event("input exhausted");
                writeln!(self.out, "{}", farewell_line())?;
                return Ok(());
            };

            if self.dispatch(action)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Performs one menu action, prompting for whatever it needs
    pub fn dispatch(&mut self, action: MenuAction) -> Result<Flow> {
        tracing::debug!(action = action.label(), "Menu action selected");

        let result = match action {
            MenuAction::AddStudent => {
                let name = self.prompter.input(PROMPT_STUDENT_NAME)?;
                self.roster
                    .add_student(name.clone())
                    .map(|id| Outcome::StudentAdded { id, name })
            }
            MenuAction::EnrollStudent => {
                let student = self.prompter.input(PROMPT_STUDENT_ID)?;
                let course = self.prompter.input(PROMPT_COURSE_NAME)?;
                self.roster
                    .enroll_student(&student, &course)
                    .map(Outcome::Enrolled)
            }
            MenuAction::ViewBalance => {
                let student = self.prompter.input(PROMPT_STUDENT_ID)?;
                self.roster
                    .view_student_balance(&student)
                    .map(Outcome::Balance)
            }
            MenuAction::PayTuition => {
                let student = self.prompter.input(PROMPT_STUDENT_ID)?;
                let amount = self.prompter.input(PROMPT_TUITION_AMOUNT)?;
                self.roster
                    .pay_student_tuition(&student, &amount)
                    .map(Outcome::Paid)
            }
            MenuAction::ShowStatus => {
                let student = self.prompter.input(PROMPT_STUDENT_ID)?;
                self.roster
                    .show_student_status(&student)
                    .map(Outcome::Status)
            }
            MenuAction::Exit => {
                log_session_event("exit");
                writeln!(self.out, "{}", farewell_line())?;
                return Ok(Flow::Exit);
            }
        };

        self.report(result)?;
        Ok(Flow::Continue)
    }

    fn report(&mut self, result: std::result::Result<Outcome, RosterError>) -> Result<()> {
        let lines = match result {
            Ok(outcome) => outcome.lines(),
            Err(err) => vec![error_line(&err)],
        };
        for line in lines {
            writeln!(self.out, "{line}").context("Failed to write report")?;
        }
        self.out.flush().context("Failed to write report")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::MockPrompter;
    use crate::student::StudentId;

    fn output(session: Session<MockPrompter, Vec<u8>>) -> (Roster, String) {
        let (roster, _, out) = session.into_parts();
        (roster, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_labels_in_menu_order() {
        let labels: Vec<_> = MenuAction::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Add Student",
                "Enroll Student",
                "View Balance",
                "Pay Tuition",
                "Show Status",
                "Exit"
            ]
        );
    }

    #[test]
    fn test_from_label_roundtrip() {
        for action in MenuAction::ALL {
            assert_eq!(MenuAction::from_label(action.label()), Some(action));
            assert_eq!(action.to_string(), action.label());
        }
        assert_eq!(MenuAction::from_label("exit"), None);
    }

    #[test]
    fn test_dispatch_add_student() {
        colored::control::set_override(false);
        let mut prompter = MockPrompter::new();
        prompter
            .expect_input()
            .withf(|prompt| prompt == PROMPT_STUDENT_NAME)
            .times(1)
            .returning(|_| Ok("Ada".to_string()));

        let mut session = Session::new(Roster::default(), prompter, Vec::new());
        assert_eq!(
            session.dispatch(MenuAction::AddStudent).unwrap(),
            Flow::Continue
        );

        let (roster, out) = output(session);
        assert_eq!(out, "Student Ada added with ID 10001\n");
        assert_eq!(roster.find_student(StudentId::FIRST).unwrap().name(), "Ada");
    }

    #[test]
    fn test_dispatch_pay_tuition_prompts_id_then_amount() {
        colored::control::set_override(false);
        let mut roster = Roster::default();
        roster.add_student("Ada").unwrap();
        roster.enroll_student("10001", "Computer").unwrap();

        let mut prompter = MockPrompter::new();
        let mut seq = mockall::Sequence::new();
        prompter
            .expect_input()
            .withf(|prompt| prompt == PROMPT_STUDENT_ID)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("10001".to_string()));
        prompter
            .expect_input()
            .withf(|prompt| prompt == PROMPT_TUITION_AMOUNT)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("2000".to_string()));

        let mut session = Session::new(roster, prompter, Vec::new());
        session.dispatch(MenuAction::PayTuition).unwrap();

        let (roster, out) = output(session);
        assert_eq!(
            out,
            "Payment of $2000 received. Remaining balance: $2500\n"
        );
        assert_eq!(roster.view_student_balance("10001").unwrap().balance, 2500.0);
    }

    #[test]
    fn test_dispatch_enroll_not_found() {
        colored::control::set_override(false);
        let mut prompter = MockPrompter::new();
        prompter
            .expect_input()
            .withf(|prompt| prompt == PROMPT_STUDENT_ID)
            .returning(|_| Ok("10001".to_string()));
        prompter
            .expect_input()
            .withf(|prompt| prompt == PROMPT_COURSE_NAME)
            .returning(|_| Ok("Computer".to_string()));

        let mut session = Session::new(Roster::default(), prompter, Vec::new());
        session.dispatch(MenuAction::EnrollStudent).unwrap();

        let (_, out) = output(session);
        assert_eq!(out, "Student or course not found.\n");
    }

    #[test]
    fn test_dispatch_add_student_when_ids_run_out() {
        colored::control::set_override(false);
        let mut roster = Roster::default().with_next_id(StudentId::new(u32::MAX));
        roster.add_student("Ada").unwrap();

        let mut prompter = MockPrompter::new();
        prompter
            .expect_input()
            .times(1)
            .returning(|_| Ok("Grace".to_string()));

        let mut session = Session::new(roster, prompter, Vec::new());
        assert_eq!(
            session.dispatch(MenuAction::AddStudent).unwrap(),
            Flow::Continue
        );

        let (roster, out) = output(session);
        assert_eq!(out, "No student IDs left.\n");
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_dispatch_exit_asks_nothing() {
        colored::control::set_override(false);
        let mut prompter = MockPrompter::new();
        prompter.expect_input().never();

        let mut session = Session::new(Roster::default(), prompter, Vec::new());
        assert_eq!(session.dispatch(MenuAction::Exit).unwrap(), Flow::Exit);

        let (_, out) = output(session);
        assert_eq!(out, "Exiting from student management system\n");
    }

    #[test]
    fn test_prompt_failure_propagates() {
        let mut prompter = MockPrompter::new();
        prompter
            .expect_input()
            .returning(|_| Err(anyhow::anyhow!("terminal gone")));

        let mut session = Session::new(Roster::default(), prompter, Vec::new());
        assert!(session.dispatch(MenuAction::ViewBalance).is_err());
        assert!(session.roster().is_empty());
    }

    #[test]
    fn test_run_until_exit() {
        colored::control::set_override(false);
        let mut prompter = MockPrompter::new();
        let mut seq = mockall::Sequence::new();
        prompter
            .expect_select_action()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(Some(MenuAction::AddStudent)));
        prompter
            .expect_input()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("Grace".to_string()));
        prompter
            .expect_select_action()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(Some(MenuAction::Exit)));

        let mut session = Session::new(Roster::default(), prompter, Vec::new());
        session.run().unwrap();

        let (roster, out) = output(session);
        assert_eq!(
            out,
            "Welcome to the Student Management System\n\
             Student Grace added with ID 10001\n\
             Exiting from student management system\n"
        );
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_run_ends_when_input_exhausted() {
        colored::control::set_override(false);
        let mut prompter = MockPrompter::new();
        prompter.expect_select_action().returning(|_, _| Ok(None));

        let mut session = Session::new(Roster::default(), prompter, Vec::new());
        session.run().unwrap();

        let (_, out) = output(session);
        assert!(out.ends_with("Exiting from student management system\n"));
    }
}
