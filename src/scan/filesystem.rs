use std::path::Path;

/// Probe reads are bounded; anything larger is treated as absent.
pub const MAX_PROBE_BYTES: u64 = 512 * 1024;

pub fn file_exists(path: &Path) -> bool {
    path.exists()
}

/// Bounded text read. Missing files, oversized files, and non-UTF-8 content
/// all degrade to `None` so a single bad file never aborts a scan.
pub fn read_to_string_if_exists(path: &Path) -> Option<String> {
    let len = std::fs::metadata(path).ok()?.len();
    if len > MAX_PROBE_BYTES {
        return None;
    }
    std::fs::read_to_string(path).ok()
}
