//! Answers file loading.
//!
//! An answers file is the TOML form of [`RawAnswers`]: every value is a
//! string, exactly as the generation conventions expect ("yes"/"no",
//! "True"/"False"). Parsing here only deserialises; semantic validation
//! happens once, in `PluginOptions::from_answers`.

use std::path::Path;

use nbforge_core::domain::RawAnswers;

use crate::error::{CliError, CliResult};

/// Read and deserialise an answers file.
pub fn load_answers(path: &Path) -> CliResult<RawAnswers> {
    let text = std::fs::read_to_string(path).map_err(|e| CliError::AnswersError {
        path: path.to_path_buf(),
        message: format!("cannot read file: {e}"),
        source: Some(Box::new(e)),
    })?;

    toml::from_str(&text).map_err(|e| CliError::AnswersError {
        path: path.to_path_buf(),
        message: format!("invalid TOML: {e}"),
        source: Some(Box::new(e)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_partial_answers_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.toml");
        std::fs::write(
            &path,
            "project_name = \"acme dns\"\ninclude_graphql = \"no\"\n",
        )
        .unwrap();

        let answers = load_answers(&path).unwrap();
        assert_eq!(answers.project_name, "acme dns");
        assert_eq!(answers.include_graphql, "no");
        // Unlisted keys take the documented defaults.
        assert_eq!(answers.include_rest_api, "yes");
        assert_eq!(answers.devcontainer, "False");
    }

    #[test]
    fn missing_file_is_an_answers_error() {
        let err = load_answers(Path::new("/no/such/answers.toml")).unwrap_err();
        assert!(matches!(err, CliError::AnswersError { .. }));
    }

    #[test]
    fn broken_toml_is_an_answers_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.toml");
        std::fs::write(&path, "project_name = [unclosed").unwrap();

        assert!(matches!(
            load_answers(&path).unwrap_err(),
            CliError::AnswersError { .. }
        ));
    }
}
