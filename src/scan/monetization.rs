use super::filesystem::read_to_string_if_exists;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Keywords whose presence in any file marks it as monetization-related.
pub const MONETIZATION_KEYWORDS: [&str; 10] = [
    "stripe",
    "paypal",
    "subscription",
    "payment",
    "billing",
    "pricing",
    "checkout",
    "commerce",
    "shop",
    "marketplace",
];

const SKIPPED_DIRS: [&str; 4] = [".git", "node_modules", "target", "vendor"];

/// Count files under `root` whose text mentions at least one monetization
/// keyword. Dependency and VCS directories are skipped; unreadable files
/// simply do not match.
pub fn count_keyword_files(root: &Path) -> usize {
    WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| !is_skipped_dir(entry))
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            read_to_string_if_exists(entry.path())
                .map(|content| {
                    let lowered = content.to_lowercase();
                    MONETIZATION_KEYWORDS
                        .iter()
                        .any(|keyword| lowered.contains(keyword))
                })
                .unwrap_or(false)
        })
        .count()
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| SKIPPED_DIRS.contains(&name))
            .unwrap_or(false)
}
