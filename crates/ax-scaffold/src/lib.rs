//! # ax-scaffold
//!
//! Scaffolding library for the AX CLI providing:
//! - The template registry (name, repository, branch, Node.js requirement)
//! - The Node.js runtime gate
//! - Template fetching via shallow git clone
//! - Dependency installation with filtered stderr streaming
//!
//! # Examples
//!
//! ## Fetch a template into a target directory
//!
//! ```no_run
//! use ax_scaffold::templates::TemplateRegistry;
//! use ax_scaffold::fetch::fetch_template;
//! use camino::Utf8Path;
//!
//! # async fn example() -> ax_scaffold::Result<()> {
//! let registry = TemplateRegistry::builtin();
//! let template = registry.get("Vue3")?;
//! fetch_template(template, Utf8Path::new("/tmp/my-app")).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod fetch;
pub mod install;
pub mod runtime;
pub mod templates;

pub use error::{Error, Result};
pub use templates::{Template, TemplateRegistry};
