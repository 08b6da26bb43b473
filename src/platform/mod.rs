// BrowseLighter platform integration
// The only OS setting the shell touches is the per-user browser emulation key,
// which exists on Windows alone.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::env;

use crate::types::errors::FeatureControlError;

#[cfg(target_os = "windows")]
mod windows;

/// Registry path (under HKCU) holding per-executable emulation modes.
pub const FEATURE_BROWSER_EMULATION_KEY: &str =
    "Software\\Microsoft\\Internet Explorer\\Main\\FeatureControl\\FEATURE_BROWSER_EMULATION";

/// Returns the file name of the running executable, e.g. `browselighter.exe`.
pub fn executable_name() -> Result<String, FeatureControlError> {
    let exe = env::current_exe().map_err(|e| FeatureControlError::ExecutableName(e.to_string()))?;
    exe.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            FeatureControlError::ExecutableName(format!("{} has no file name", exe.display()))
        })
}

/// Asks the embedded browser engine to render in `mode` for this executable.
///
/// Best effort: callers are expected to ignore the result.
pub fn set_browser_emulation(mode: u32) -> Result<(), FeatureControlError> {
    #[cfg(target_os = "windows")]
    {
        let name = executable_name()?;
        windows::set_browser_emulation(&name, mode)
    }
    #[cfg(not(target_os = "windows"))]
    {
        let _ = mode;
        Err(FeatureControlError::Unsupported(env::consts::OS.to_string()))
    }
}
