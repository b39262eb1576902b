use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Parser;

use student_manager::logging::init_logging;
use student_manager::prompt::{LinePrompter, TerminalPrompter};
use student_manager::{Roster, Session};

#[derive(Parser)]
#[command(name = "student-manager")]
#[command(version)]
#[command(about = "Student Management System - track enrollment and tuition balances", long_about = None)]
struct Cli {
    #[arg(short, long, help = "Enable verbose output")]
    verbose: bool,

    #[arg(long, help = "Read plain lines instead of using interactive menus")]
    plain: bool,

    #[arg(long, help = "Disable colored output")]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    init_logging(cli.verbose, !cli.no_color && io::stderr().is_terminal())?;

    let roster = Roster::default();
    let interactive = !cli.plain && io::stdin().is_terminal() && io::stderr().is_terminal();
    tracing::debug!(interactive, "Starting session");

    if interactive {
        Session::new(roster, TerminalPrompter::new(), io::stdout()).run()?;
    } else {
        let prompter = LinePrompter::new(io::stdin().lock(), io::stdout());
        Session::new(roster, prompter, io::stdout()).run()?;
    }

    Ok(())
}
