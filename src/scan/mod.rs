pub mod filesystem;
pub mod monetization;

use crate::error::{Result, RevscanError};
use filesystem::{file_exists, read_to_string_if_exists};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Payment configuration files probed at the tree root. Each one present is
/// worth a fixed increment.
pub const PAYMENT_CONFIG_FILES: [&str; 3] = ["stripe.config", "payment.config", ".env.example"];

/// Payment libraries matched against the raw manifest text.
pub const PAYMENT_LIBRARIES: [&str; 3] = ["stripe", "@stripe", "paypal"];

/// Marker files for a modern frontend toolchain.
pub const MODERN_FRAMEWORK_FILES: [&str; 3] = ["next.config.js", "vite.config.js", "tsconfig.json"];

/// CI/deployment configuration paths; only the first match counts.
pub const CI_CONFIG_PATHS: [&str; 4] = [
    ".github/workflows",
    ".gitlab-ci.yml",
    "vercel.json",
    "netlify.toml",
];

pub const DOCS_MARKER_PATHS: [&str; 3] = ["docs", "DEPLOY.md", "CONTRIBUTING.md"];

pub const TEST_DIRS: [&str; 4] = ["tests", "test", "__tests__", "spec"];

pub const LINT_CONFIG_FILES: [&str; 4] = [".eslintrc", ".prettierrc", "pyproject.toml", ".flake8"];

#[derive(Debug, Clone, Default)]
pub struct ManifestSignals {
    /// Raw package.json text, when present and readable.
    pub package_json: Option<String>,
    /// Raw requirements.txt text, when present and readable.
    pub requirements_txt: Option<String>,
    pub has_go_mod: bool,
    /// True when package.json parses as JSON and `scripts` has a `build` key.
    pub has_build_script: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MonetizationSignals {
    pub keyword_file_matches: usize,
    pub payment_config_count: usize,
    pub manifest_names_payment_lib: bool,
}

#[derive(Debug, Clone, Default)]
pub struct DeploymentSignals {
    pub has_dockerfile: bool,
    pub has_ci_config: bool,
    pub has_env_template: bool,
    pub docs_marker_count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct QualitySignals {
    pub has_test_dir: bool,
    pub has_lint_config: bool,
    pub has_type_config: bool,
}

#[derive(Debug, Clone, Default)]
pub struct StackSignals {
    pub modern_marker_count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct RepoModel {
    pub root: PathBuf,
    /// Character count of README.md; 0 when absent or unreadable.
    pub readme_chars: usize,
    pub manifest: ManifestSignals,
    pub monetization: MonetizationSignals,
    pub deployment: DeploymentSignals,
    pub quality: QualitySignals,
    pub stack: StackSignals,
}

/// Collect all filesystem signals the scorer consumes. The only failure is
/// a root that is missing or not a directory; every per-file probe degrades
/// to "signal absent".
pub fn discover(root: &Path) -> Result<RepoModel> {
    if !root.is_dir() {
        return Err(RevscanError::InvalidInput(format!(
            "repository tree root is not a directory: {}",
            root.display()
        )));
    }
    debug!(root = %root.display(), "scanning repository tree");

    let manifest = detect_manifests(root);
    let monetization = detect_monetization(root, &manifest);
    let deployment = detect_deployment(root);
    let quality = detect_quality(root);
    let stack = detect_stack(root);
    let readme_chars = read_to_string_if_exists(&root.join("README.md"))
        .map(|content| content.chars().count())
        .unwrap_or(0);

    Ok(RepoModel {
        root: root.to_path_buf(),
        readme_chars,
        manifest,
        monetization,
        deployment,
        quality,
        stack,
    })
}

fn detect_manifests(root: &Path) -> ManifestSignals {
    let package_json = read_to_string_if_exists(&root.join("package.json"));
    let has_build_script = package_json
        .as_deref()
        .and_then(|content| serde_json::from_str::<serde_json::Value>(content).ok())
        .and_then(|value| value.get("scripts").and_then(|scripts| scripts.get("build")).cloned())
        .is_some();

    ManifestSignals {
        package_json,
        requirements_txt: read_to_string_if_exists(&root.join("requirements.txt")),
        has_go_mod: file_exists(&root.join("go.mod")),
        has_build_script,
    }
}

fn detect_monetization(root: &Path, manifest: &ManifestSignals) -> MonetizationSignals {
    let payment_config_count = PAYMENT_CONFIG_FILES
        .iter()
        .filter(|file| file_exists(&root.join(file)))
        .count();

    let manifest_names_payment_lib = manifest
        .package_json
        .as_deref()
        .map(|content| PAYMENT_LIBRARIES.iter().any(|lib| content.contains(lib)))
        .unwrap_or(false);

    MonetizationSignals {
        keyword_file_matches: monetization::count_keyword_files(root),
        payment_config_count,
        manifest_names_payment_lib,
    }
}

fn detect_deployment(root: &Path) -> DeploymentSignals {
    DeploymentSignals {
        has_dockerfile: file_exists(&root.join("Dockerfile")),
        has_ci_config: CI_CONFIG_PATHS
            .iter()
            .any(|path| file_exists(&root.join(path))),
        has_env_template: file_exists(&root.join(".env.example")),
        docs_marker_count: DOCS_MARKER_PATHS
            .iter()
            .filter(|path| file_exists(&root.join(path)))
            .count(),
    }
}

fn detect_quality(root: &Path) -> QualitySignals {
    QualitySignals {
        has_test_dir: TEST_DIRS.iter().any(|dir| file_exists(&root.join(dir))),
        has_lint_config: LINT_CONFIG_FILES
            .iter()
            .any(|file| file_exists(&root.join(file))),
        has_type_config: file_exists(&root.join("tsconfig.json")),
    }
}

fn detect_stack(root: &Path) -> StackSignals {
    StackSignals {
        modern_marker_count: MODERN_FRAMEWORK_FILES
            .iter()
            .filter(|file| file_exists(&root.join(file)))
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn discover_rejects_missing_root() {
        let dir = TempDir::new().expect("temp dir should be created");
        let missing = dir.path().join("gone");
        let err = discover(&missing).expect_err("missing root should be rejected");
        assert!(matches!(err, RevscanError::InvalidInput(_)));
    }

    #[test]
    fn discover_rejects_file_root() {
        let dir = TempDir::new().expect("temp dir should be created");
        let file = dir.path().join("plain.txt");
        fs::write(&file, "not a tree").expect("file should write");
        let err = discover(&file).expect_err("file root should be rejected");
        assert!(matches!(err, RevscanError::InvalidInput(_)));
    }

    #[test]
    fn discover_on_empty_tree_yields_default_signals() {
        let dir = TempDir::new().expect("temp dir should be created");
        let model = discover(dir.path()).expect("empty tree should scan");
        assert_eq!(model.readme_chars, 0);
        assert!(model.manifest.package_json.is_none());
        assert_eq!(model.monetization.keyword_file_matches, 0);
        assert_eq!(model.monetization.payment_config_count, 0);
        assert!(!model.deployment.has_dockerfile);
        assert!(!model.quality.has_test_dir);
        assert_eq!(model.stack.modern_marker_count, 0);
    }

    #[test]
    fn discover_collects_manifest_and_deployment_signals() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(
            dir.path().join("package.json"),
            r#"{"dependencies": {"stripe": "^14.0.0"}, "scripts": {"build": "next build"}}"#,
        )
        .expect("manifest should write");
        fs::write(dir.path().join("Dockerfile"), "FROM alpine").expect("dockerfile should write");
        fs::create_dir_all(dir.path().join(".github/workflows"))
            .expect("workflow dir should create");
        fs::write(dir.path().join(".env.example"), "STRIPE_KEY=").expect("env should write");
        fs::create_dir_all(dir.path().join("docs")).expect("docs dir should create");

        let model = discover(dir.path()).expect("tree should scan");
        assert!(model.manifest.has_build_script);
        assert!(model.monetization.manifest_names_payment_lib);
        assert!(model.deployment.has_dockerfile);
        assert!(model.deployment.has_ci_config);
        assert!(model.deployment.has_env_template);
        assert_eq!(model.deployment.docs_marker_count, 1);
        // .env.example doubles as a payment config file
        assert_eq!(model.monetization.payment_config_count, 1);
    }

    #[test]
    fn build_script_detection_survives_malformed_manifest() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(dir.path().join("package.json"), "{not json").expect("manifest should write");

        let model = discover(dir.path()).expect("tree should scan");
        assert!(!model.manifest.has_build_script);
        assert!(model.manifest.package_json.is_some());
    }

    #[test]
    fn discover_collects_quality_signals() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::create_dir_all(dir.path().join("tests")).expect("tests dir should create");
        fs::write(dir.path().join(".eslintrc"), "{}").expect("lint config should write");
        fs::write(dir.path().join("tsconfig.json"), "{}").expect("ts config should write");

        let model = discover(dir.path()).expect("tree should scan");
        assert!(model.quality.has_test_dir);
        assert!(model.quality.has_lint_config);
        assert!(model.quality.has_type_config);
        // tsconfig.json is also a modern framework marker
        assert_eq!(model.stack.modern_marker_count, 1);
    }
}
