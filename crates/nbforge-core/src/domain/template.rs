//! The plugin template: the declarative file tree expanded at generation time.
//!
//! ## Design Decisions
//!
//! ### Why Two Content Types: `Literal` vs `Parameterized`?
//!
//! Literal content skips the rendering engine entirely - no string scanning,
//! no replacement overhead. A file without placeholders is obviously literal;
//! a `pyproject.toml` with `{{PLUGIN_PACKAGE}}` is obviously parameterized.
//!
//! ### Why `TemplateSource` with `Static` vs `Owned`?
//!
//! The built-in template references compile-time strings without allocation.
//! `Owned` keeps the door open for templates loaded from disk without
//! changing the node types.

use crate::domain::common::{Permissions, RelativePath};
use crate::domain::error::DomainError;

/// Source of template content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Compile-time string (built-in template).
    Static(&'static str),
    /// Heap-allocated string (loaded or computed).
    Owned(String),
}

impl TemplateSource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s,
        }
    }
}

/// File content, either fixed or subject to variable substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateContent {
    /// Copied verbatim.
    Literal(TemplateSource),
    /// Rendered through the `RenderContext` before writing.
    Parameterized(TemplateSource),
}

/// A single file in the template tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    pub path: RelativePath,
    pub content: TemplateContent,
    pub permissions: Permissions,
}

impl FileSpec {
    pub fn new(path: impl Into<RelativePath>, content: TemplateContent) -> Self {
        Self {
            path: path.into(),
            content,
            permissions: Permissions::read_write(),
        }
    }

    pub fn with_permissions(mut self, permissions: Permissions) -> Self {
        self.permissions = permissions;
        self
    }
}

/// A directory in the template tree.
///
/// Most directories are implied by file paths; explicit entries exist for
/// directories that must be present even when empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySpec {
    pub path: RelativePath,
    pub permissions: Permissions,
}

impl DirectorySpec {
    pub fn new(path: impl Into<RelativePath>) -> Self {
        Self {
            path: path.into(),
            permissions: Permissions::read_write(),
        }
    }
}

/// One node of the template tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateNode {
    File(FileSpec),
    Directory(DirectorySpec),
}

impl TemplateNode {
    pub fn path(&self) -> &RelativePath {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }
}

/// The complete template a generation run expands.
///
/// Paths whose placeholders (e.g. `{{PLUGIN_PACKAGE}}`) are still unresolved
/// are permitted here; resolution happens at render time.
#[derive(Debug, Clone)]
pub struct PluginTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub nodes: Vec<TemplateNode>,
}

impl PluginTemplate {
    pub fn builder(name: &'static str) -> PluginTemplateBuilder {
        PluginTemplateBuilder {
            name,
            description: "",
            nodes: Vec::new(),
        }
    }

    /// Structural validation: non-empty, no duplicate paths, no absolute
    /// paths (the `RelativePath` type already rules the latter out at
    /// construction, so this guards templates assembled by hand).
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.nodes.is_empty() {
            return Err(DomainError::EmptyTemplate);
        }

        let mut seen = std::collections::HashSet::new();
        for node in &self.nodes {
            let path = node.path().to_string();
            if !seen.insert(path.clone()) {
                return Err(DomainError::DuplicatePath { path });
            }
        }

        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Builder for [`PluginTemplate`].
pub struct PluginTemplateBuilder {
    name: &'static str,
    description: &'static str,
    nodes: Vec<TemplateNode>,
}

impl PluginTemplateBuilder {
    pub fn description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub fn add_node(mut self, node: TemplateNode) -> Self {
        self.nodes.push(node);
        self
    }

    /// Shorthand for a parameterized file backed by a static string.
    pub fn file(self, path: &'static str, content: &'static str) -> Self {
        self.add_node(TemplateNode::File(FileSpec::new(
            path,
            TemplateContent::Parameterized(TemplateSource::Static(content)),
        )))
    }

    /// Shorthand for a literal file backed by a static string.
    pub fn literal_file(self, path: &'static str, content: &'static str) -> Self {
        self.add_node(TemplateNode::File(FileSpec::new(
            path,
            TemplateContent::Literal(TemplateSource::Static(content)),
        )))
    }

    pub fn build(self) -> Result<PluginTemplate, DomainError> {
        let template = PluginTemplate {
            name: self.name,
            description: self.description,
            nodes: self.nodes,
        };
        template.validate()?;
        Ok(template)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_success() {
        let template = PluginTemplate::builder("netbox-plugin")
            .description("test")
            .file("README.md", "# {{PROJECT_NAME}}")
            .build()
            .unwrap();

        assert_eq!(template.name, "netbox-plugin");
        assert_eq!(template.node_count(), 1);
    }

    #[test]
    fn builder_rejects_empty_tree() {
        assert!(matches!(
            PluginTemplate::builder("empty").build(),
            Err(DomainError::EmptyTemplate)
        ));
    }

    #[test]
    fn builder_rejects_duplicate_paths() {
        let result = PluginTemplate::builder("dup")
            .file("LICENSE", "a")
            .file("LICENSE", "b")
            .build();

        assert!(matches!(result, Err(DomainError::DuplicatePath { .. })));
    }

    #[test]
    fn literal_and_parameterized_sources() {
        let template = PluginTemplate::builder("t")
            .literal_file("fixed.txt", "as-is {{NOT_EXPANDED}}")
            .file("param.txt", "{{PROJECT_NAME}}")
            .build()
            .unwrap();

        match &template.nodes[0] {
            TemplateNode::File(f) => {
                assert!(matches!(f.content, TemplateContent::Literal(_)));
            }
            _ => panic!("expected file node"),
        }
    }
}
