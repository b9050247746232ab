//! Error types for ax-scaffold

use thiserror::Error;

/// Result type alias using ax-scaffold's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// User cancelled at the overwrite prompt
    #[error("Operation cancelled")]
    Cancelled,

    /// Node.js version does not satisfy the template requirement
    #[error("You are using Node {current}, but this template requires Node {required}. Please upgrade your Node version")]
    NodeUnsupported { current: String, required: String },

    /// Required command not found in PATH
    #[error("Required command not found: {command}")]
    CommandNotFound { command: String },

    /// Invalid repository URL
    #[error("Invalid repository URL: {url}")]
    InvalidRepoUrl { url: String },

    /// Template download failed
    #[error("Failed fetching remote template '{template}': {message}")]
    FetchFailed { template: String, message: String },

    /// Dependency installation failed
    #[error("Command failed: {command}")]
    InstallFailed { command: String },

    /// Unknown template name
    #[error("Unknown template: {name}. Available templates: {available}")]
    UnknownTemplate { name: String, available: String },

    /// Invalid version or version requirement string
    #[error("Version error: {0}")]
    Version(#[from] semver::Error),

    /// TOML parsing error
    #[error("Template registry parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a command not found error
    pub fn command_not_found(command: impl Into<String>) -> Self {
        Self::CommandNotFound {
            command: command.into(),
        }
    }

    /// Create an invalid repo URL error
    pub fn invalid_repo_url(url: impl Into<String>) -> Self {
        Self::InvalidRepoUrl { url: url.into() }
    }

    /// Create a fetch failed error
    pub fn fetch_failed(template: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FetchFailed {
            template: template.into(),
            message: message.into(),
        }
    }

    /// Create an install failed error
    pub fn install_failed(command: impl Into<String>) -> Self {
        Self::InstallFailed {
            command: command.into(),
        }
    }

    /// Create an unknown template error
    pub fn unknown_template(name: impl Into<String>, available: impl Into<String>) -> Self {
        Self::UnknownTemplate {
            name: name.into(),
            available: available.into(),
        }
    }
}
