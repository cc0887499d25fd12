//! Filesystem locations inside the Zellij sandbox.

use std::path::PathBuf;

/// Data directory for the trace file.
///
/// Zellij mounts the host under `/host` (normally the user's home), so this
/// resolves to `~/.local/share/zellij/savory` on the host.
///
/// ```
/// use savory::infrastructure::paths::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/savory"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("savory")
}
