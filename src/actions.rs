//! Output understood by the GitHub Actions runner.

/// Escapes a message for use as workflow command data.
fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// Marks the step as failed with `message` as the reason.
pub fn set_failed(message: &str) {
    println!("{}", error_command(message));
}

pub fn runner_debug() -> bool {
    std::env::var("RUNNER_DEBUG").is_ok_and(|value| value == "1")
}
