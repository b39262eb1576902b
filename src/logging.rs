use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::RosterError;
use crate::student::{Payment, StudentId};

/// Initialize structured logging based on verbosity level.
///
/// Log lines go to stderr so they never interleave with the menu on stdout.
pub fn init_logging(verbose: bool, ansi: bool) -> Result<()> {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("student_manager=debug,warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(ansi)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if verbose {
        tracing::info!("Verbose logging enabled");
    }

    Ok(())
}

/// Log a newly registered student
pub fn log_student_added(id: StudentId, name: &str) {
    tracing::info!(student_id = id.get(), name = name, "Student added");
}

/// Log a successful enrollment
pub fn log_enrollment(id: StudentId, course: &str, balance: f64) {
    tracing::info!(
        student_id = id.get(),
        course = course,
        balance = balance,
        "Student enrolled"
    );
}

/// Log the outcome of a tuition payment
pub fn log_payment(id: StudentId, amount: f64, result: &Result<Payment, RosterError>) {
    match result {
        Ok(payment) => tracing::info!(
            student_id = id.get(),
            amount = amount,
            remaining = payment.remaining,
            "Tuition payment accepted"
        ),
        Err(err) => tracing::info!(
            student_id = id.get(),
            amount = amount,
            error = %err,
            "Tuition payment rejected"
        ),
    }
}

/// Log a lookup that matched nothing
pub fn log_lookup_miss(kind: &str, input: &str) {
    tracing::debug!(kind = kind, input = input, "Lookup found no match");
}

/// Log session lifecycle events (start, menu selections, exit)
pub fn log_session_event(event: &str) {
    tracing::debug!(event = event, "Session event");
}
