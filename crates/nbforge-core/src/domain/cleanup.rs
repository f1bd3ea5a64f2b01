//! Post-generation cleanup plan.
//!
//! After the template has been expanded, files conditional on a declined
//! option must be removed again. The plan is derived purely from
//! [`PluginOptions`]; applying it is the job of
//! `application::services::hook`.
//!
//! Rules touch disjoint paths, so the order of actions never changes the
//! outcome. The plan never includes a path the template does not generate —
//! a missing path at apply time therefore indicates a packaging defect and
//! is treated as fatal, not skipped.

use crate::domain::common::RelativePath;
use crate::domain::options::PluginOptions;

/// A single removal, relative to the generated project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupAction {
    /// Remove a regular file.
    RemoveFile(RelativePath),
    /// Remove a directory and everything beneath it.
    RemoveDir(RelativePath),
    /// Remove a path whose on-disk kind is not known in advance.
    ///
    /// The runner probes the filesystem and picks the file or directory
    /// removal strategy. Anything that is neither (symlink, fifo) is an
    /// explicit error rather than a guess.
    RemovePath(RelativePath),
}

impl CleanupAction {
    /// The path this action targets.
    pub fn path(&self) -> &RelativePath {
        match self {
            Self::RemoveFile(p) | Self::RemoveDir(p) | Self::RemovePath(p) => p,
        }
    }
}

/// How declined REST API support is cleaned up.
///
/// The current template keeps `api/` and `serializers.py` (NetBox event
/// rules need the serializer) and removes the three view/url/test files.
/// Older template layouts shipped the API as a single module or a whole
/// package, so the legacy variant removes the entire `api` path, probing
/// its kind at run time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApiRemoval {
    #[default]
    IndividualFiles,
    EntireTree,
}

/// The ordered set of removals for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupPlan {
    actions: Vec<CleanupAction>,
}

impl CleanupPlan {
    /// Derive the plan for the standard template layout.
    pub fn for_options(options: &PluginOptions) -> Self {
        Self::for_options_with(options, ApiRemoval::default())
    }

    /// Derive the plan with an explicit API removal strategy.
    pub fn for_options_with(options: &PluginOptions, api_removal: ApiRemoval) -> Self {
        let pkg = options.name.underscored();
        let mut actions = Vec::new();

        if !options.license.is_open_source() {
            actions.push(CleanupAction::RemoveFile("LICENSE".into()));
        }

        if !options.include_rest_api {
            match api_removal {
                ApiRemoval::IndividualFiles => {
                    // api/ and serializers.py survive; NetBox event rules
                    // import the serializer even without the REST endpoints.
                    actions.push(CleanupAction::RemoveFile(
                        format!("{pkg}/api/views.py").into(),
                    ));
                    actions.push(CleanupAction::RemoveFile(
                        format!("{pkg}/api/urls.py").into(),
                    ));
                    actions.push(CleanupAction::RemoveFile(
                        format!("{pkg}/tests/test_api.py").into(),
                    ));
                }
                ApiRemoval::EntireTree => {
                    actions.push(CleanupAction::RemovePath(format!("{pkg}/api").into()));
                    actions.push(CleanupAction::RemoveFile(
                        format!("{pkg}/tests/test_api.py").into(),
                    ));
                }
            }
        }

        if !options.include_graphql {
            actions.push(CleanupAction::RemoveFile(
                format!("{pkg}/graphql.py").into(),
            ));
            actions.push(CleanupAction::RemoveFile(
                format!("{pkg}/tests/test_graphql.py").into(),
            ));
        }

        if !options.devcontainer {
            actions.push(CleanupAction::RemoveDir(".devcontainer".into()));
        }

        Self { actions }
    }

    pub fn actions(&self) -> &[CleanupAction] {
        &self.actions
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::options::{LicenseChoice, PluginOptions, RawAnswers};

    fn options(license: &str, rest_api: &str, graphql: &str, devcontainer: &str) -> PluginOptions {
        PluginOptions::from_answers(&RawAnswers {
            project_name: "dns sync".into(),
            open_source_license: license.into(),
            include_rest_api: rest_api.into(),
            include_graphql: graphql.into(),
            devcontainer: devcontainer.into(),
            ..RawAnswers::default()
        })
        .unwrap()
    }

    fn paths(plan: &CleanupPlan) -> Vec<String> {
        plan.actions().iter().map(|a| a.path().to_string()).collect()
    }

    #[test]
    fn everything_selected_means_empty_plan() {
        let plan = CleanupPlan::for_options(&options("MIT", "yes", "yes", "True"));
        assert!(plan.is_empty());
    }

    #[test]
    fn not_open_source_removes_license() {
        let plan = CleanupPlan::for_options(&options("Not open source", "yes", "yes", "True"));
        assert_eq!(
            plan.actions(),
            &[CleanupAction::RemoveFile("LICENSE".into())]
        );
    }

    #[test]
    fn open_source_license_is_kept() {
        let opts = options("GPL-3.0", "yes", "yes", "True");
        assert_eq!(opts.license, LicenseChoice::Gpl3);
        assert!(CleanupPlan::for_options(&opts).is_empty());
    }

    #[test]
    fn declined_rest_api_removes_three_files() {
        let plan = CleanupPlan::for_options(&options("MIT", "no", "yes", "True"));
        assert_eq!(
            paths(&plan),
            vec![
                "dns_sync/api/views.py",
                "dns_sync/api/urls.py",
                "dns_sync/tests/test_api.py",
            ]
        );
        // The serializer module is never part of the plan.
        assert!(!paths(&plan).iter().any(|p| p.contains("serializers")));
    }

    #[test]
    fn legacy_variant_probes_whole_api_path() {
        let plan = CleanupPlan::for_options_with(
            &options("MIT", "no", "yes", "True"),
            ApiRemoval::EntireTree,
        );
        assert_eq!(
            plan.actions()[0],
            CleanupAction::RemovePath("dns_sync/api".into())
        );
    }

    #[test]
    fn declined_graphql_removes_schema_and_test() {
        let plan = CleanupPlan::for_options(&options("MIT", "yes", "no", "True"));
        assert_eq!(
            paths(&plan),
            vec!["dns_sync/graphql.py", "dns_sync/tests/test_graphql.py"]
        );
    }

    #[test]
    fn declined_devcontainer_removes_directory() {
        let plan = CleanupPlan::for_options(&options("MIT", "yes", "yes", "False"));
        assert_eq!(
            plan.actions(),
            &[CleanupAction::RemoveDir(".devcontainer".into())]
        );
    }

    #[test]
    fn scenario_all_declined() {
        // {Not open source, no, no, False} → four rules fire.
        let plan = CleanupPlan::for_options(&options("Not open source", "no", "no", "False"));
        assert_eq!(plan.len(), 7);
        assert!(paths(&plan).contains(&"LICENSE".to_string()));
        assert!(paths(&plan).contains(&".devcontainer".to_string()));
    }

    #[test]
    fn plan_paths_are_disjoint() {
        let plan = CleanupPlan::for_options(&options("Not open source", "no", "no", "False"));
        let mut seen = std::collections::HashSet::new();
        for action in plan.actions() {
            assert!(seen.insert(action.path().clone()), "overlapping rule paths");
        }
    }
}
