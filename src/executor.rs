use std::process::{Command, Stdio};
use anyhow::Result;
use log::info;

/// Run a result's exec string as a detached shell command.
///
/// The string is handed to the shell as-is; no arguments are appended.
pub fn execute(exec: &str) -> Result<()> {
    if exec.trim().is_empty() {
        return Ok(());
    }

    info!("Launching: {}", exec);
    Command::new("sh")
        .arg("-c")
        .arg(exec)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    Ok(())
}
