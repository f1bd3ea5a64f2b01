//! The built-in NetBox plugin template.
//!
//! One template, expanded in full on every run: files conditional on a
//! generation option (LICENSE, the REST API views/urls, the GraphQL schema,
//! the dev container) are always generated and removed afterwards by the
//! cleanup hook. That ordering is load-bearing — the hook fails fast on any
//! path it expects but cannot find, so the template must never pre-filter.
//!
//! The generated Python files are deliberately thin: declarative NetBox
//! plugin glue with no behavior of its own.

use nbforge_core::domain::PluginTemplate;

/// Build the built-in plugin template.
///
/// Paths use `{{PLUGIN_PACKAGE}}` placeholders that the renderer resolves
/// to the plugin's underscored package name.
pub fn netbox_plugin_template() -> PluginTemplate {
    PluginTemplate::builder("netbox-plugin")
        .description("NetBox plugin project skeleton")
        .file("LICENSE", LICENSE)
        .file("README.md", README)
        .file("pyproject.toml", PYPROJECT)
        .file("{{PLUGIN_PACKAGE}}/__init__.py", PLUGIN_INIT)
        .file("{{PLUGIN_PACKAGE}}/models.py", MODELS)
        .file("{{PLUGIN_PACKAGE}}/views.py", VIEWS)
        .file("{{PLUGIN_PACKAGE}}/forms.py", FORMS)
        .file("{{PLUGIN_PACKAGE}}/tables.py", TABLES)
        .file("{{PLUGIN_PACKAGE}}/filtersets.py", FILTERSETS)
        .file("{{PLUGIN_PACKAGE}}/navigation.py", NAVIGATION)
        .file("{{PLUGIN_PACKAGE}}/search.py", SEARCH)
        .file("{{PLUGIN_PACKAGE}}/graphql.py", GRAPHQL)
        .file("{{PLUGIN_PACKAGE}}/api/__init__.py", "")
        .file("{{PLUGIN_PACKAGE}}/api/serializers.py", API_SERIALIZERS)
        .file("{{PLUGIN_PACKAGE}}/api/views.py", API_VIEWS)
        .file("{{PLUGIN_PACKAGE}}/api/urls.py", API_URLS)
        .file("{{PLUGIN_PACKAGE}}/tests/__init__.py", "")
        .file("{{PLUGIN_PACKAGE}}/tests/test_models.py", TEST_MODELS)
        .file("{{PLUGIN_PACKAGE}}/tests/test_views.py", TEST_VIEWS)
        .file("{{PLUGIN_PACKAGE}}/tests/test_api.py", TEST_API)
        .file("{{PLUGIN_PACKAGE}}/tests/test_graphql.py", TEST_GRAPHQL)
        .literal_file(".devcontainer/devcontainer.json", DEVCONTAINER_JSON)
        .file(".devcontainer/configuration/plugins.py", DEVCONTAINER_PLUGINS)
        .build()
        .expect("built-in template is statically valid")
}

// ── file contents ─────────────────────────────────────────────────────────────

const LICENSE: &str = "{{LICENSE_TEXT}}";

const README: &str = r#"# {{PROJECT_NAME}}

{{DESCRIPTION}}

{{PROJECT_NAME}} is a [NetBox](https://netbox.dev) plugin.

## Installation

```bash
pip install {{PLUGIN_PACKAGE}}
```

Then add it to `PLUGINS` in your NetBox configuration:

```python
PLUGINS = ["{{PLUGIN_PACKAGE}}"]
```
"#;

const PYPROJECT: &str = r#"[project]
name = "{{PLUGIN_PACKAGE}}"
version = "{{VERSION}}"
description = "{{DESCRIPTION}}"
authors = [{ name = "{{AUTHOR}}", email = "{{EMAIL}}" }]
license = "{{LICENSE_ID}}"
readme = "README.md"
requires-python = ">=3.10"

[build-system]
requires = ["setuptools"]
build-backend = "setuptools.build_meta"
"#;

const PLUGIN_INIT: &str = r#""""
{{PROJECT_NAME}}

Plugin configuration for {{PROJECT_NAME}}.
"""

__author__ = """{{AUTHOR}}"""
__email__ = "{{EMAIL}}"
__version__ = "{{VERSION}}"


from netbox.plugins import PluginConfig


class {{MODEL_NAME}}Config(PluginConfig):
    name = "{{PLUGIN_PACKAGE}}"
    verbose_name = "{{PROJECT_NAME}}"
    description = "{{DESCRIPTION}}"
    author = "{{AUTHOR}}"
    author_email = "{{EMAIL}}"
    version = __version__
    base_url = "{{PLUGIN_PACKAGE}}"


config = {{MODEL_NAME}}Config
"#;

const MODELS: &str = r#"from django.db import models
from netbox.models import NetBoxModel


class {{MODEL_NAME}}(NetBoxModel):
    name = models.CharField(max_length=100, unique=True)

    class Meta:
        ordering = ("name",)

    def __str__(self):
        return self.name
"#;

const VIEWS: &str = r#"from netbox.views import generic

from . import filtersets, forms, models, tables


class {{MODEL_NAME}}View(generic.ObjectView):
    queryset = models.{{MODEL_NAME}}.objects.all()


class {{MODEL_NAME}}ListView(generic.ObjectListView):
    queryset = models.{{MODEL_NAME}}.objects.all()
    table = tables.{{MODEL_NAME}}Table
    filterset = filtersets.{{MODEL_NAME}}FilterSet


class {{MODEL_NAME}}EditView(generic.ObjectEditView):
    queryset = models.{{MODEL_NAME}}.objects.all()
    form = forms.{{MODEL_NAME}}Form


class {{MODEL_NAME}}DeleteView(generic.ObjectDeleteView):
    queryset = models.{{MODEL_NAME}}.objects.all()
"#;

const FORMS: &str = r#"from netbox.forms import NetBoxModelForm

from .models import {{MODEL_NAME}}


class {{MODEL_NAME}}Form(NetBoxModelForm):
    class Meta:
        model = {{MODEL_NAME}}
        fields = ("name", "tags")
"#;

const TABLES: &str = r#"import django_tables2 as tables
from netbox.tables import NetBoxTable

from .models import {{MODEL_NAME}}


class {{MODEL_NAME}}Table(NetBoxTable):
    name = tables.Column(linkify=True)

    class Meta(NetBoxTable.Meta):
        model = {{MODEL_NAME}}
        fields = ("pk", "id", "name")
        default_columns = ("name",)
"#;

const FILTERSETS: &str = r#"from netbox.filtersets import NetBoxModelFilterSet

from .models import {{MODEL_NAME}}


class {{MODEL_NAME}}FilterSet(NetBoxModelFilterSet):
    class Meta:
        model = {{MODEL_NAME}}
        fields = ("id", "name")

    def search(self, queryset, name, value):
        return queryset.filter(name__icontains=value)
"#;

const NAVIGATION: &str = r#"from netbox.plugins import PluginMenuItem

menu_items = (
    PluginMenuItem(
        link="plugins:{{PLUGIN_PACKAGE}}:{{MODEL_URL_NAME}}_list",
        link_text="{{PROJECT_NAME}}",
    ),
)
"#;

const SEARCH: &str = r#"from netbox.search import SearchIndex, register_search

from .models import {{MODEL_NAME}}


@register_search
class {{MODEL_NAME}}Index(SearchIndex):
    model = {{MODEL_NAME}}
    fields = (("name", 100),)
"#;

const GRAPHQL: &str = r#""""
GraphQL schema for {{PROJECT_NAME}}.
"""

import graphene
from netbox.graphql.types import NetBoxObjectType

from .models import {{MODEL_NAME}}


class {{MODEL_NAME}}Type(NetBoxObjectType):
    class Meta:
        model = {{MODEL_NAME}}
        fields = "__all__"


class Query(graphene.ObjectType):
    {{MODEL_URL_NAME}} = graphene.Field({{MODEL_NAME}}Type, id=graphene.Int())
    {{MODEL_URL_NAME}}_list = graphene.List({{MODEL_NAME}}Type)


schema = graphene.Schema(query=Query)
"#;

const API_SERIALIZERS: &str = r#"from netbox.api.serializers import NetBoxModelSerializer

from ..models import {{MODEL_NAME}}


class {{MODEL_NAME}}Serializer(NetBoxModelSerializer):
    class Meta:
        model = {{MODEL_NAME}}
        fields = ("id", "url", "display", "name", "tags")
"#;

const API_VIEWS: &str = r#"from netbox.api.viewsets import NetBoxModelViewSet

from .. import filtersets, models
from .serializers import {{MODEL_NAME}}Serializer


class {{MODEL_NAME}}ViewSet(NetBoxModelViewSet):
    queryset = models.{{MODEL_NAME}}.objects.all()
    serializer_class = {{MODEL_NAME}}Serializer
    filterset_class = filtersets.{{MODEL_NAME}}FilterSet
"#;

const API_URLS: &str = r#"from netbox.api.routers import NetBoxRouter

from . import views

router = NetBoxRouter()
router.register("{{MODEL_URL_NAME}}", views.{{MODEL_NAME}}ViewSet)

urlpatterns = router.urls
"#;

const TEST_MODELS: &str = r#"from django.test import TestCase

from ..models import {{MODEL_NAME}}


class {{MODEL_NAME}}TestCase(TestCase):
    def test_str(self):
        obj = {{MODEL_NAME}}(name="example")
        self.assertEqual(str(obj), "example")
"#;

const TEST_VIEWS: &str = r#"from django.test import TestCase


class {{MODEL_NAME}}ViewTestCase(TestCase):
    def test_placeholder(self):
        self.assertTrue(True)
"#;

const TEST_API: &str = r#"from django.test import TestCase


class {{MODEL_NAME}}ApiTestCase(TestCase):
    def test_placeholder(self):
        self.assertTrue(True)
"#;

const TEST_GRAPHQL: &str = r#"from django.test import TestCase


class {{MODEL_NAME}}GraphQLTestCase(TestCase):
    def test_placeholder(self):
        self.assertTrue(True)
"#;

const DEVCONTAINER_JSON: &str = r#"{
  "name": "NetBox plugin development",
  "dockerComposeFile": "docker-compose.yml",
  "service": "netbox",
  "workspaceFolder": "/workspace"
}
"#;

const DEVCONTAINER_PLUGINS: &str = r#"# Plugins loaded into the development NetBox instance.

PLUGINS = [
    "netbox_initializers",  # Loads demo data
    "{{PLUGIN_PACKAGE}}",
]

PLUGINS_CONFIG = {
    "netbox_initializers": {},
    "{{PLUGIN_PACKAGE}}": {},
}
"#;

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use nbforge_core::application::ports::TemplateRenderer;
    use nbforge_core::domain::{PluginOptions, RawAnswers, RenderContext};
    use std::path::{Path, PathBuf};

    #[test]
    fn template_is_valid() {
        let template = netbox_plugin_template();
        assert!(template.validate().is_ok());
    }

    #[test]
    fn template_always_contains_conditional_files() {
        let template = netbox_plugin_template();
        let paths: Vec<_> = template.nodes.iter().map(|n| n.path().to_string()).collect();

        for required in [
            "LICENSE",
            "{{PLUGIN_PACKAGE}}/api/views.py",
            "{{PLUGIN_PACKAGE}}/api/urls.py",
            "{{PLUGIN_PACKAGE}}/api/serializers.py",
            "{{PLUGIN_PACKAGE}}/graphql.py",
            "{{PLUGIN_PACKAGE}}/tests/test_api.py",
            "{{PLUGIN_PACKAGE}}/tests/test_graphql.py",
            ".devcontainer/configuration/plugins.py",
        ] {
            assert!(paths.contains(&required.to_string()), "missing {required}");
        }
    }

    #[test]
    fn rendered_tree_uses_package_directory() {
        let options = PluginOptions::from_answers(&RawAnswers {
            project_name: "ACME DNS Sync".into(),
            full_name: "Jane Doe".into(),
            ..RawAnswers::default()
        })
        .unwrap();

        let ctx = RenderContext::from_options(&options);
        let structure = crate::SubstitutionRenderer::new()
            .render(&netbox_plugin_template(), &ctx, Path::new("/out/p"))
            .unwrap();

        let files: Vec<_> = structure.files().map(|f| f.path.clone()).collect();
        assert!(files.contains(&PathBuf::from("acme_dns_sync/__init__.py")));
        assert!(files.contains(&PathBuf::from("acme_dns_sync/api/views.py")));

        // No placeholder survives rendering in any path.
        assert!(files.iter().all(|p| !p.to_string_lossy().contains("{{")));
    }

    #[test]
    fn plugin_init_references_model_config() {
        let options = PluginOptions::from_answers(&RawAnswers {
            project_name: "dns sync".into(),
            ..RawAnswers::default()
        })
        .unwrap();

        let ctx = RenderContext::from_options(&options);
        let structure = crate::SubstitutionRenderer::new()
            .render(&netbox_plugin_template(), &ctx, Path::new("/out"))
            .unwrap();

        let init = structure
            .files()
            .find(|f| f.path == Path::new("dns_sync/__init__.py"))
            .unwrap();
        assert!(init.content.contains("class DnsSyncConfig(PluginConfig)"));
        assert!(init.content.contains("name = \"dns_sync\""));
    }
}
