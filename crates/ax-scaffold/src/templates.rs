//! Template registry: named project skeletons with a source repository,
//! branch, and Node.js engine requirement

use semver::VersionReq;
use serde::Deserialize;

use crate::error::{Error, Result};

/// A remote project template
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Template {
    /// Template name shown in the selection prompt (e.g. "Vue3")
    pub name: String,
    /// Clone URL of the template repository
    pub repo: String,
    /// Branch to check out (repository default when absent)
    #[serde(default)]
    pub branch: Option<String>,
    /// Node.js version requirement (semver range, e.g. ">=16.0.0")
    pub node: String,
}

impl Template {
    /// Parse the Node.js requirement string into a `VersionReq`
    pub fn node_requirement(&self) -> Result<VersionReq> {
        Ok(VersionReq::parse(&self.node)?)
    }
}

/// The set of templates offered by the `create` workflow
///
/// Ships with compiled-in defaults; an extended set can be deserialized from
/// a TOML document without touching the workflow logic.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateRegistry {
    #[serde(rename = "template")]
    templates: Vec<Template>,
}

impl TemplateRegistry {
    /// The compiled-in template set
    pub fn builtin() -> Self {
        Self {
            templates: vec![
                Template {
                    name: "Vue2".to_string(),
                    repo: "https://github.com/ragingDream/vite-admin-template.git".to_string(),
                    branch: Some("vue2".to_string()),
                    node: ">=14.18.0".to_string(),
                },
                Template {
                    name: "Vue3".to_string(),
                    repo: "https://github.com/ragingDream/vite-admin-template.git".to_string(),
                    branch: Some("main".to_string()),
                    node: ">=16.0.0".to_string(),
                },
            ],
        }
    }

    /// Load a registry from a TOML document with `[[template]]` entries
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let registry: Self = toml::from_str(content)?;
        Ok(registry)
    }

    /// All templates, in declaration order
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Template names, in declaration order
    pub fn names(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.name.as_str()).collect()
    }

    /// Look up a template by name
    pub fn get(&self, name: &str) -> Result<&Template> {
        self.templates
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| Error::unknown_template(name, self.names().join(", ")))
    }
}
