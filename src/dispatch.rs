//! OS print dispatch for exported images
//!
//! Printing is delegated entirely to the host platform: the Windows
//! shell print verb, `lp` on macOS, and the generic open handler
//! everywhere else. The file must still exist at dispatch time.

use std::path::Path;

use log::info;

use crate::pdf::{SnipError, SnipResult};

/// Hand a file to the platform-default print or open action
///
/// # Arguments
/// * `path` - Path to the file to print
///
/// # Returns
/// Result indicating success or a `PrintDispatch` error
pub fn print_file(path: &Path) -> SnipResult<()> {
    if !path.exists() {
        return Err(SnipError::PrintDispatch(format!(
            "{} does not exist",
            path.display()
        )));
    }

    // Dispatch wants an absolute path; the shell handlers resolve
    // relative paths against their own working directory.
    let absolute = path
        .canonicalize()
        .map_err(|e| SnipError::PrintDispatch(format!("{}: {}", path.display(), e)))?;

    info!("Dispatching {} to the system print handler", absolute.display());
    dispatch(&absolute)
}

#[cfg(target_os = "windows")]
fn dispatch(path: &Path) -> SnipResult<()> {
    use std::process::Command;

    let status = Command::new("powershell")
        .args(["-NoProfile", "-Command", "Start-Process", "-Verb", "Print", "-FilePath"])
        .arg(path)
        .status()
        .map_err(|e| SnipError::PrintDispatch(e.to_string()))?;

    if !status.success() {
        return Err(SnipError::PrintDispatch(format!(
            "print verb exited with {}",
            status
        )));
    }
    Ok(())
}

#[cfg(target_os = "macos")]
fn dispatch(path: &Path) -> SnipResult<()> {
    use std::process::Command;

    let status = Command::new("lp")
        .arg(path)
        .status()
        .map_err(|e| SnipError::PrintDispatch(e.to_string()))?;

    if !status.success() {
        return Err(SnipError::PrintDispatch(format!("lp exited with {}", status)));
    }
    Ok(())
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn dispatch(path: &Path) -> SnipResult<()> {
    open::that(path).map_err(|e| SnipError::PrintDispatch(e.to_string()))
}
