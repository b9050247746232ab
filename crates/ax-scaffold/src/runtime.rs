//! Node.js runtime gate
//!
//! Reads the installed Node.js version and checks it against the selected
//! template's engine requirement before any destructive filesystem action.

use semver::{BuildMetadata, Comparator, Op, Version, VersionReq};
use tokio::process::Command;
use tracing::debug;

use crate::error::{Error, Result};
use crate::templates::Template;

/// Check the installed Node.js version against a template's requirement
///
/// # Errors
/// Returns error if:
/// - `node` is not in PATH
/// - The reported version cannot be parsed
/// - The version does not satisfy the template's requirement
pub async fn check_node(template: &Template) -> Result<()> {
    let requirement = template.node_requirement()?;
    let current = node_version().await?;

    debug!("Node {} found, template requires {}", current, template.node);

    if !satisfies(&current, &requirement) {
        return Err(Error::NodeUnsupported {
            current: current.to_string(),
            required: template.node.clone(),
        });
    }

    Ok(())
}

/// Query the installed Node.js version via `node --version`
pub async fn node_version() -> Result<Version> {
    which::which("node").map_err(|_| Error::command_not_found("node"))?;

    let output = Command::new("node").arg("--version").output().await?;

    if !output.status.success() {
        return Err(Error::command_not_found("node"));
    }

    parse_node_version(&String::from_utf8_lossy(&output.stdout))
}

/// Parse `node --version` output (e.g. "v16.1.0") into a `Version`
pub fn parse_node_version(raw: &str) -> Result<Version> {
    Ok(Version::parse(raw.trim().trim_start_matches('v'))?)
}

/// Requirement matching with pre-release versions treated as acceptable
///
/// The semver crate excludes pre-release versions from plain ranges, so a
/// version carrying a pre-release tag is re-checked against each
/// comparator's bound with full semver ordering: pre-releases above the
/// bound match ("18.2.0-nightly" satisfies ">=16.0.0"), pre-releases of the
/// bound version itself do not ("16.0.0-beta" orders below "16.0.0").
pub fn satisfies(version: &Version, requirement: &VersionReq) -> bool {
    if requirement.matches(version) {
        return true;
    }

    if version.pre.is_empty() {
        return false;
    }

    requirement
        .comparators
        .iter()
        .all(|comparator| comparator_matches_prerelease(comparator, version))
}

/// Evaluate a single comparator against a pre-release version by ordering
fn comparator_matches_prerelease(comparator: &Comparator, version: &Version) -> bool {
    let bound = Version {
        major: comparator.major,
        minor: comparator.minor.unwrap_or(0),
        patch: comparator.patch.unwrap_or(0),
        pre: comparator.pre.clone(),
        build: BuildMetadata::EMPTY,
    };

    match comparator.op {
        Op::Exact => *version == bound,
        Op::Greater => *version > bound,
        Op::GreaterEq => *version >= bound,
        Op::Less => *version < bound,
        Op::LessEq => *version <= bound,
        // Tilde, caret, and wildcard bounds keep the crate's verdict
        _ => false,
    }
}
