use std::{
    ffi::OsStr,
    process::{Command, Stdio},
};

use color_eyre::eyre::WrapErr;
use tracing::info;

#[cfg(target_os = "macos")]
const OPENER: &str = "open";
#[cfg(target_os = "windows")]
const OPENER: &str = "explorer";
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const OPENER: &str = "xdg-open";

/// Hands a file path or URL to the platform opener without blocking the UI.
pub fn open_target(target: impl AsRef<OsStr>) -> color_eyre::Result<()> {
    let target = target.as_ref();
    let mut child = Command::new(OPENER)
        .arg(target)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .wrap_err_with(|| format!("Failed to launch {}", OPENER))?;

    info!("Opened {} with {}", target.to_string_lossy(), OPENER);

    std::thread::spawn(move || {
        let _ = child.wait();
    });
    Ok(())
}
