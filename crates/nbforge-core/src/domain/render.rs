//! Variable substitution context for template rendering.

use std::collections::HashMap;

use chrono::{Datelike, Utc};

use crate::domain::options::PluginOptions;

/// Context for template rendering.
///
/// A **Value Object** containing all data needed to render a parameterized
/// template. Immutable after creation - transformations create new instances
/// (see `with_variable`).
///
/// ## Variable Naming Convention
///
/// All built-in variables are `SCREAMING_SNAKE_CASE` to avoid collision with
/// user-defined variables.
///
/// ## Built-in Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `PROJECT_NAME` | "ACME DNS Sync" | User input |
/// | `PLUGIN_SLUG` | "acme-dns-sync" | Computed (hyphenated) |
/// | `PLUGIN_PACKAGE` | "acme_dns_sync" | Computed (underscored) |
/// | `MODEL_NAME` | "AcmeDnsSync" | Computed (PascalCase) |
/// | `MODEL_URL_NAME` | "acme_dns_sync" | Computed |
/// | `AUTHOR` / `EMAIL` | "Jane Doe" | User input |
/// | `VERSION` / `DESCRIPTION` | "0.1.0" | User input |
/// | `LICENSE_ID` | "MIT" | License choice |
/// | `LICENSE_TEXT` | (license body) | License choice |
/// | `YEAR` | "2026" | System clock |
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Original project name as provided by user.
    /// Kept separate from variables for debugging and display purposes.
    project_name: String,

    /// Variable map for substitution. `HashMap` because order doesn't matter
    /// for simple replacement and lookup is O(1).
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Build the substitution map from validated generation options.
    ///
    /// All derivations happen once, here. The license body is pre-rendered
    /// with year and author so that `render` stays a single substitution pass
    /// with no ordering dependency between variables.
    pub fn from_options(options: &PluginOptions) -> Self {
        let year = Utc::now().year().to_string();
        let mut vars = HashMap::new();

        vars.insert("PROJECT_NAME".to_string(), options.name.original().into());
        vars.insert("PLUGIN_SLUG".to_string(), options.name.hyphenated().into());
        vars.insert(
            "PLUGIN_PACKAGE".to_string(),
            options.name.underscored().into(),
        );
        vars.insert("MODEL_NAME".to_string(), options.name.model_name().into());
        vars.insert(
            "MODEL_URL_NAME".to_string(),
            options.name.underscored().into(),
        );
        vars.insert("AUTHOR".to_string(), options.author.clone());
        vars.insert("EMAIL".to_string(), options.email.clone());
        vars.insert("VERSION".to_string(), options.version.clone());
        vars.insert("DESCRIPTION".to_string(), options.description.clone());
        vars.insert("LICENSE_ID".to_string(), options.license.as_str().into());
        vars.insert(
            "LICENSE_TEXT".to_string(),
            options.license.license_text(&year, &options.author),
        );
        vars.insert("YEAR".to_string(), year);

        Self {
            project_name: options.name.original().to_string(),
            variables: vars,
        }
    }

    /// Add a custom variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// The project name the context was built for.
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// Simple linear scan and replace; adequate for the stub-sized files the
    /// plugin template carries. `{{UNKNOWN}}` placeholders remain as literal
    /// text rather than erroring.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();

        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }

        result
    }
}

// ============================================================================
// String Case Conversion Helpers
// ============================================================================

/// Convert a string to snake_case.
///
/// | Input | Output |
/// |-------|--------|
/// | "MyPlugin" | "my_plugin" |
/// | "my-plugin" | "my_plugin" |
/// | "HTTPRequest" | "http_request" |
pub(crate) fn to_snake_case(s: &str) -> String {
    split_words(s).join("_")
}

/// Convert a string to kebab-case.
///
/// Same as `to_snake_case` but joins with `-`. Used for the project
/// directory name.
pub(crate) fn to_kebab_case(s: &str) -> String {
    split_words(s).join("-")
}

/// Convert a string to PascalCase.
pub(crate) fn to_pascal_case(s: &str) -> String {
    split_words(s)
        .into_iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::new();
                    // to_uppercase handles Unicode correctly (e.g., "ß" -> "SS")
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                    out
                }
                None => String::new(),
            }
        })
        .collect()
}

/// Split a string into words based on casing and separators.
///
/// Boundaries: explicit separators (`_`, `-`, whitespace), camelCase
/// transitions (`aB`), and acronym edges (`HTTPRequest` splits between
/// `P` and `R`).
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(next) = chars.peek() {
            // camelCase transition: "myApp" → "my" + "App"
            if c.is_lowercase() && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

            // Acronym boundary: "HTTPRequest" → "HTTP" + "Request"
            if c.is_uppercase() && next.is_lowercase() && !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::options::{PluginOptions, RawAnswers};

    fn options() -> PluginOptions {
        PluginOptions::from_answers(&RawAnswers {
            project_name: "ACME DNS Sync".into(),
            full_name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            project_short_description: "DNS sync for NetBox".into(),
            ..RawAnswers::default()
        })
        .unwrap()
    }

    #[test]
    fn context_standard_variables() {
        let ctx = RenderContext::from_options(&options());

        assert_eq!(ctx.get("PROJECT_NAME"), Some("ACME DNS Sync"));
        assert_eq!(ctx.get("PLUGIN_SLUG"), Some("acme-dns-sync"));
        assert_eq!(ctx.get("PLUGIN_PACKAGE"), Some("acme_dns_sync"));
        assert_eq!(ctx.get("MODEL_NAME"), Some("AcmeDnsSync"));
        assert_eq!(ctx.get("AUTHOR"), Some("Jane Doe"));
        assert_eq!(ctx.get("LICENSE_ID"), Some("Apache-2.0"));
    }

    #[test]
    fn context_custom_variables() {
        let ctx = RenderContext::from_options(&options()).with_variable("EXTRA", "x");
        assert_eq!(ctx.get("EXTRA"), Some("x"));
    }

    #[test]
    fn render_replaces_placeholders() {
        let ctx = RenderContext::from_options(&options());
        let rendered = ctx.render("name = \"{{PLUGIN_PACKAGE}}\" # {{PROJECT_NAME}}");
        assert_eq!(rendered, "name = \"acme_dns_sync\" # ACME DNS Sync");
    }

    #[test]
    fn render_leaves_unknown_placeholders() {
        let ctx = RenderContext::from_options(&options());
        assert_eq!(ctx.render("{{NOT_A_VAR}}"), "{{NOT_A_VAR}}");
    }

    #[test]
    fn license_text_is_prerendered() {
        let ctx = RenderContext::from_options(&options());
        let text = ctx.get("LICENSE_TEXT").unwrap();
        assert!(text.contains("Jane Doe"));
        assert!(!text.contains("{{"));
    }

    #[test]
    fn snake_case_conversions() {
        assert_eq!(to_snake_case("MyPlugin"), "my_plugin");
        assert_eq!(to_snake_case("my-plugin"), "my_plugin");
        assert_eq!(to_snake_case("XMLHttpRequest"), "xml_http_request");
    }

    #[test]
    fn kebab_case_conversions() {
        assert_eq!(to_kebab_case("My Plugin"), "my-plugin");
        assert_eq!(to_kebab_case("my_plugin"), "my-plugin");
    }

    #[test]
    fn pascal_case_conversions() {
        assert_eq!(to_pascal_case("my-plugin"), "MyPlugin");
        assert_eq!(to_pascal_case("HTTPRequest"), "HttpRequest");
    }
}
