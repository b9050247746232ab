//! Dependency installation with filtered stderr streaming

use std::process::Stdio;

use camino::Utf8Path;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Run a dependency-installation command inside the target directory
///
/// Stdout is drained to the debug log. Stderr is streamed line-by-line as it
/// is produced: lines matching the warning pattern are suppressed, all others
/// are forwarded verbatim to this process's stderr.
///
/// # Errors
/// Returns error if:
/// - `command` is not in PATH
/// - The process exits with a non-zero status
pub async fn install_dependencies(command: &str, args: &[&str], dir: &Utf8Path) -> Result<()> {
    which::which(command).map_err(|_| Error::command_not_found(command))?;

    info!("Installing dependencies: {} {} in {}", command, args.join(" "), dir);

    let mut cmd = Command::new(command);
    cmd.args(args)
        .current_dir(dir)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = cmd.spawn()?;

    let stdout_drain = child.stdout.take().map(|stdout| {
        let program = command.to_string();
        let mut lines = BufReader::new(stdout).lines();

        tokio::spawn(async move {
            while let Ok(Some(line)) = lines.next_line().await {
                debug!("{}: {}", program, line);
            }
        })
    });

    if let Some(stderr) = child.stderr.take() {
        forward_stderr(stderr, |line| eprintln!("{line}")).await?;
    }

    let status = child.wait().await?;

    // Trailing stdout lines land before we report the outcome
    if let Some(drain) = stdout_drain {
        let _ = drain.await;
    }

    if !status.success() {
        return Err(Error::install_failed(command));
    }

    info!("Dependencies installed successfully");
    Ok(())
}

/// Stream stderr line-by-line, forwarding everything except warning lines
async fn forward_stderr<R>(stderr: R, mut forward: impl FnMut(&str)) -> Result<()>
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(stderr).lines();

    while let Some(line) = lines.next_line().await? {
        if is_warning_line(&line) {
            continue;
        }
        forward(&line);
    }

    Ok(())
}

/// Lines the package manager emits as warnings are hidden from the user
fn is_warning_line(line: &str) -> bool {
    line.contains("warning")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_warning_line() {
        assert!(is_warning_line("warning: deprecated package"));
        assert!(is_warning_line(" WARN  deprecated foo@1.0.0: warning text"));
        assert!(!is_warning_line("error: peer dependency missing"));
        assert!(!is_warning_line(""));
    }

    #[tokio::test]
    async fn test_forward_stderr_filters_warnings() {
        let stderr: &[u8] = b"warning: old lockfile\nerror: bad peer dep\nresolving...\n";

        let mut forwarded = Vec::new();
        forward_stderr(stderr, |line| forwarded.push(line.to_string()))
            .await
            .unwrap();

        assert_eq!(forwarded, vec!["error: bad peer dep", "resolving..."]);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_install_succeeds_on_zero_exit() {
        let dir = tempfile::tempdir().unwrap();
        let dir = Utf8Path::from_path(dir.path()).unwrap();

        install_dependencies("sh", &["-c", "exit 0"], dir)
            .await
            .unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_install_drains_stdout_before_returning() {
        let dir = tempfile::tempdir().unwrap();
        let dir = Utf8Path::from_path(dir.path()).unwrap();

        install_dependencies("sh", &["-c", "seq 1 200; exit 0"], dir)
            .await
            .unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_install_fails_on_nonzero_exit() {
        let dir = tempfile::tempdir().unwrap();
        let dir = Utf8Path::from_path(dir.path()).unwrap();

        let err = install_dependencies("sh", &["-c", "exit 1"], dir)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InstallFailed { .. }));
        assert_eq!(err.to_string(), "Command failed: sh");
    }

    #[tokio::test]
    async fn test_install_missing_command() {
        let dir = tempfile::tempdir().unwrap();
        let dir = Utf8Path::from_path(dir.path()).unwrap();

        let err = install_dependencies("definitely-not-a-real-tool", &[], dir)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::CommandNotFound { .. }));
    }
}
