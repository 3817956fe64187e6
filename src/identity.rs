//! Best-effort author identity lookup from the global git configuration.
//! A missing or unreadable configuration is never fatal; callers fall back
//! to empty author fields.

use log::debug;

/// Reads a single value from the default git configuration.
pub fn git_config_value(key: &str) -> Option<String> {
    let config = git2::Config::open_default().ok()?;
    match config.get_string(key) {
        Ok(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        Ok(_) => None,
        Err(e) => {
            debug!("git config lookup for '{}' failed: {}", key, e);
            None
        }
    }
}

/// Returns `(user.name, user.email)` from git configuration, either of
/// which may be absent.
pub fn default_identity() -> (Option<String>, Option<String>) {
    (git_config_value("user.name"), git_config_value("user.email"))
}
