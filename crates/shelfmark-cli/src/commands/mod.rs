pub mod book;
pub mod config;
pub mod genres;
pub mod register;

pub use book::run_create_book;
pub use genres::list_genres;
pub use register::run_register;

use shelfmark_core::{SubmissionOutcome, ValidationErrors};

/// Print validation errors, one line per field.
fn print_field_errors<F: Ord + Copy>(errors: &ValidationErrors<F>, wire_name: impl Fn(F) -> &'static str) {
    for (field, message) in errors.iter() {
        eprintln!("  ✗ {}: {}", wire_name(field), message);
    }
}

/// Turn an outcome into the process result: success prints its message,
/// anything else becomes an error carrying the user-facing message.
fn finish(outcome: &SubmissionOutcome) -> anyhow::Result<()> {
    let message = outcome.message().unwrap_or("");
    if outcome.is_success() {
        println!("✓ {}", message);
        return Ok(());
    }

    match outcome {
        SubmissionOutcome::ValidationFailed { .. } => {
            anyhow::bail!("Form is incomplete; nothing was sent")
        }
        SubmissionOutcome::ServerError { status, .. } => {
            anyhow::bail!("{} (HTTP {})", message, status)
        }
        _ => anyhow::bail!("{}", message),
    }
}
