//! External formatting pass.
//!
//! The generated text is piped through a `prettier` subprocess when one is
//! available. Formatting failures are never fatal: the unformatted text is
//! used as-is and the cause is logged at debug level.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};
use tracing::debug;

/// Formats generated TypeScript with prettier, falling back to the input on
/// any failure.
pub fn prettify(code: &str, prettier_config: Option<&Path>) -> String {
    if tracing::enabled!(tracing::Level::DEBUG) {
        log_prettier_version();
    }

    match run_prettier(code, prettier_config) {
        Ok(formatted) => formatted,
        Err(error) => {
            debug!("prettier formatting failed: {error:#}");
            code.to_string()
        }
    }
}

fn run_prettier(code: &str, prettier_config: Option<&Path>) -> Result<String> {
    let mut command = Command::new("npx");
    command.args(["--no-install", "prettier", "--parser", "typescript"]);
    if let Some(config) = prettier_config {
        command.arg("--config").arg(config);
    }

    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .context("Failed to spawn prettier")?;

    child
        .stdin
        .take()
        .context("Failed to open prettier stdin")?
        .write_all(code.as_bytes())
        .context("Failed to write to prettier stdin")?;

    let output = child
        .wait_with_output()
        .context("Failed to wait for prettier")?;

    if !output.status.success() {
        bail!(
            "prettier exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    String::from_utf8(output.stdout).context("prettier produced non-UTF8 output")
}

fn log_prettier_version() {
    let probe = Command::new("npx")
        .args(["--no-install", "prettier", "--version"])
        .output();

    match probe {
        Ok(output) if output.status.success() => {
            debug!(
                "prettier version: {}",
                String::from_utf8_lossy(&output.stdout).trim()
            );
        }
        _ => debug!("prettier not found, output will not be formatted"),
    }
}
