//! Path handling for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, which points
//! at the working directory Zellij was started from (usually the user's home).
//! Catalog paths from the configuration are written from the host's point of
//! view and have to be mapped onto that mount.

use std::path::PathBuf;

/// Mount point of the host filesystem inside the sandbox.
const HOST_MOUNT: &str = "/host";

/// Returns the data directory used for trace files.
///
/// Resolves to `/host/.local/share/zellij/tierlist`, typically
/// `~/.local/share/zellij/tierlist` on the host.
///
/// # Examples
///
/// ```
/// use tierlist::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/tierlist");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_MOUNT)
        .join(".local/share/zellij")
        .join("tierlist")
}

/// Expands tilde paths to the `/host` mount.
///
/// # Examples
///
/// ```
/// use tierlist::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/sbc/data.json"), "/host/sbc/data.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/srv/data.json"), "/srv/data.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', HOST_MOUNT, 1)
    } else if path == "~" {
        HOST_MOUNT.to_string()
    } else {
        path.to_string()
    }
}

/// Resolves a configured catalog path to a sandbox path.
///
/// - `~/x` becomes `/host/x`
/// - relative paths are taken relative to the host working directory
/// - absolute paths are used as they are
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use tierlist::infrastructure::resolve_host_path;
///
/// assert_eq!(resolve_host_path("data.json"), PathBuf::from("/host/data.json"));
/// assert_eq!(resolve_host_path("~/tiers/data.json"), PathBuf::from("/host/tiers/data.json"));
/// assert_eq!(resolve_host_path("/host/data.json"), PathBuf::from("/host/data.json"));
/// ```
#[must_use]
pub fn resolve_host_path(path: &str) -> PathBuf {
    let expanded = expand_tilde(path.trim());
    if expanded.starts_with('/') {
        PathBuf::from(expanded)
    } else {
        PathBuf::from(HOST_MOUNT).join(expanded.trim_start_matches("./"))
    }
}

/// Removes the `/host` prefix for display.
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    path.strip_prefix(HOST_MOUNT).unwrap_or(path).to_string()
}
