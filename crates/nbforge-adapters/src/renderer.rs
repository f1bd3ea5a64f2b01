//! Variable substitution renderer.

use std::path::Path;

use nbforge_core::{
    application::ports::TemplateRenderer,
    domain::{PluginTemplate, ProjectStructure, RenderContext, TemplateContent, TemplateNode},
    error::{ForgeError, ForgeResult},
};
use tracing::instrument;

/// Renderer using `{{VARIABLE}}` substitution.
///
/// Both file contents and **paths** are rendered: template paths like
/// `{{PLUGIN_PACKAGE}}/api/views.py` resolve to the concrete package
/// directory of the plugin being generated.
pub struct SubstitutionRenderer;

impl SubstitutionRenderer {
    /// Create a new substitution renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SubstitutionRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SubstitutionRenderer {
    #[instrument(skip_all)]
    fn render(
        &self,
        template: &PluginTemplate,
        context: &RenderContext,
        output_root: &Path,
    ) -> ForgeResult<ProjectStructure> {
        // Validate template first
        template.validate().map_err(ForgeError::Domain)?;

        let mut structure = ProjectStructure::new(output_root);

        // Render each node
        for node in &template.nodes {
            match node {
                TemplateNode::File(spec) => {
                    let path = context.render(spec.path.as_str());
                    let content = match &spec.content {
                        TemplateContent::Literal(source) => source.as_str().to_string(),
                        TemplateContent::Parameterized(source) => context.render(source.as_str()),
                    };
                    structure.add_file(path, content, spec.permissions);
                }
                TemplateNode::Directory(spec) => {
                    let path = context.render(spec.path.as_str());
                    structure.add_directory(path, spec.permissions);
                }
            }
        }

        // Validate final structure (duplicate detection runs on the
        // *resolved* paths: two template paths may collide only after
        // substitution).
        structure.validate().map_err(ForgeError::Domain)?;

        Ok(structure)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use nbforge_core::domain::{PluginOptions, RawAnswers};
    use std::path::PathBuf;

    fn options() -> PluginOptions {
        PluginOptions::from_answers(&RawAnswers {
            project_name: "dns sync".into(),
            full_name: "Jane Doe".into(),
            ..RawAnswers::default()
        })
        .unwrap()
    }

    #[test]
    fn renders_paths_and_contents() {
        let template = PluginTemplate::builder("t")
            .file("{{PLUGIN_PACKAGE}}/__init__.py", "__version__ = \"{{VERSION}}\"")
            .build()
            .unwrap();

        let ctx = RenderContext::from_options(&options());
        let structure = SubstitutionRenderer::new()
            .render(&template, &ctx, Path::new("/out/dns-sync"))
            .unwrap();

        let file = structure.files().next().unwrap();
        assert_eq!(file.path, PathBuf::from("dns_sync/__init__.py"));
        assert_eq!(file.content, "__version__ = \"0.1.0\"");
    }

    #[test]
    fn literal_content_skips_substitution() {
        let template = PluginTemplate::builder("t")
            .literal_file("raw.txt", "{{PROJECT_NAME}}")
            .build()
            .unwrap();

        let ctx = RenderContext::from_options(&options());
        let structure = SubstitutionRenderer::new()
            .render(&template, &ctx, Path::new("/out"))
            .unwrap();

        assert_eq!(structure.files().next().unwrap().content, "{{PROJECT_NAME}}");
    }

    #[test]
    fn post_substitution_collisions_are_rejected() {
        // Distinct template paths that resolve to the same concrete path.
        let template = PluginTemplate::builder("t")
            .file("{{PLUGIN_PACKAGE}}/x.py", "")
            .file("dns_sync/x.py", "")
            .build()
            .unwrap();

        let ctx = RenderContext::from_options(&options());
        assert!(
            SubstitutionRenderer::new()
                .render(&template, &ctx, Path::new("/out"))
                .is_err()
        );
    }
}
