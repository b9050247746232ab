//! Template fetching via shallow git clone

use camino::Utf8Path;
use tokio::process::Command;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::templates::Template;

/// Clone a template repository into the target directory
///
/// Performs a depth-1 clone of the template's branch and removes the clone's
/// `.git` directory afterwards: the result is a project skeleton, not a
/// repository.
///
/// # Errors
/// Returns error if:
/// - `git` is not in PATH
/// - The template's repository URL is not cloneable
/// - The clone itself fails (network, missing branch, permissions)
pub async fn fetch_template(template: &Template, destination: &Utf8Path) -> Result<()> {
    which::which("git").map_err(|_| Error::command_not_found("git"))?;

    if !is_valid_repo_url(&template.repo) {
        return Err(Error::invalid_repo_url(&template.repo));
    }

    info!("Fetching template {}: {} -> {}", template.name, template.repo, destination);

    let mut cmd = Command::new("git");
    cmd.arg("clone").arg("--depth").arg("1");

    if let Some(branch) = &template.branch {
        cmd.arg("--branch").arg(branch);
    }

    cmd.arg(&template.repo).arg(destination.as_str());

    debug!("Running: git clone");
    let output = cmd.output().await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::fetch_failed(&template.name, stderr.trim()));
    }

    let git_dir = destination.join(".git");
    if git_dir.exists() {
        tokio::fs::remove_dir_all(&git_dir).await?;
    }

    info!("Template fetched successfully");
    Ok(())
}

/// Validate if a string is a cloneable repository URL
fn is_valid_repo_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("git@") || url.starts_with("http://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_repo_url() {
        assert!(is_valid_repo_url(
            "https://github.com/ragingDream/vite-admin-template.git"
        ));
        assert!(is_valid_repo_url("git@github.com:user/repo.git"));
        assert!(is_valid_repo_url("http://example.com/repo.git"));
        assert!(!is_valid_repo_url("ftp://example.com/repo.git"));
        assert!(!is_valid_repo_url("../local/path"));
        assert!(!is_valid_repo_url(""));
    }

    #[tokio::test]
    async fn test_fetch_rejects_invalid_url() {
        if which::which("git").is_err() {
            return;
        }

        let template = Template {
            name: "Broken".to_string(),
            repo: "not-a-url".to_string(),
            branch: None,
            node: ">=16.0.0".to_string(),
        };

        let dir = tempfile::tempdir().unwrap();
        let dest = Utf8Path::from_path(dir.path()).unwrap().join("app");
        let err = fetch_template(&template, &dest).await.unwrap_err();
        assert!(matches!(err, Error::InvalidRepoUrl { .. }));
        assert!(!dest.exists());
    }
}
