//! Generation options: raw string answers and their typed form.
//!
//! # Design
//!
//! The generation tool historically compared raw answer strings at every
//! decision point (`"no" == include_rest_api`). Here the string answers are
//! parsed **once**, at this boundary, into [`PluginOptions`]; everything
//! downstream (plan derivation, rendering) works with enums and booleans and
//! can match exhaustively.
//!
//! A malformed answer ("nope", "TRUE") is a configuration error and fails
//! parsing — it is never silently treated as "flag not set".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::render::{to_kebab_case, to_pascal_case, to_snake_case};

// ── PluginName ────────────────────────────────────────────────────────────────

/// The plugin's name plus the casing variants the template needs.
///
/// Mirrors the derived answers of the original template: the project
/// directory uses the hyphenated form, the Python package the underscored
/// form, and the starter model class the PascalCase form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginName {
    original: String,
    hyphenated: String,
    underscored: String,
    model_name: String,
}

impl PluginName {
    /// Parse and validate a user-supplied plugin name.
    pub fn parse(name: &str) -> Result<Self, DomainError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(DomainError::InvalidPluginName {
                name: name.into(),
                reason: "name cannot be empty".into(),
            });
        }
        if name.contains('/') || name.contains('\\') {
            return Err(DomainError::InvalidPluginName {
                name: name.into(),
                reason: "name cannot contain path separators".into(),
            });
        }
        if name.starts_with('.') {
            return Err(DomainError::InvalidPluginName {
                name: name.into(),
                reason: "name cannot start with '.'".into(),
            });
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ' '))
        {
            return Err(DomainError::InvalidPluginName {
                name: name.into(),
                reason: "only letters, digits, hyphens, underscores and spaces allowed".into(),
            });
        }
        if !name.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::InvalidPluginName {
                name: name.into(),
                reason: "name must start with a letter".into(),
            });
        }

        Ok(Self {
            original: name.to_string(),
            hyphenated: to_kebab_case(name),
            underscored: to_snake_case(name),
            model_name: to_pascal_case(name),
        })
    }

    /// The name exactly as the user typed it.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// kebab-case form; used for the project directory.
    pub fn hyphenated(&self) -> &str {
        &self.hyphenated
    }

    /// snake_case form; used for the Python package directory.
    pub fn underscored(&self) -> &str {
        &self.underscored
    }

    /// PascalCase form; used for the starter model class.
    pub fn model_name(&self) -> &str {
        &self.model_name
    }
}

impl fmt::Display for PluginName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

// ── LicenseChoice ─────────────────────────────────────────────────────────────

/// License selected at generation time.
///
/// `"Not open source"` is the sentinel that makes the cleanup hook remove the
/// generated `LICENSE` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LicenseChoice {
    Apache2,
    Mit,
    Bsd3Clause,
    Gpl3,
    NotOpenSource,
}

impl LicenseChoice {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Apache2 => "Apache-2.0",
            Self::Mit => "MIT",
            Self::Bsd3Clause => "BSD-3-Clause",
            Self::Gpl3 => "GPL-3.0",
            Self::NotOpenSource => "Not open source",
        }
    }

    pub const fn is_open_source(&self) -> bool {
        !matches!(self, Self::NotOpenSource)
    }

    /// Body text for the generated `LICENSE` file.
    ///
    /// Short notice forms; the full texts live at the canonical URLs the
    /// notices point to. For `NotOpenSource` the file is generated with a
    /// placeholder and removed again by the cleanup hook.
    pub fn license_text(&self, year: &str, author: &str) -> String {
        match self {
            Self::Apache2 => format!(
                "Copyright {year} {author}\n\n\
                 Licensed under the Apache License, Version 2.0 (the \"License\");\n\
                 you may not use this file except in compliance with the License.\n\
                 You may obtain a copy of the License at\n\n\
                 \x20   http://www.apache.org/licenses/LICENSE-2.0\n\n\
                 Unless required by applicable law or agreed to in writing, software\n\
                 distributed under the License is distributed on an \"AS IS\" BASIS,\n\
                 WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.\n\
                 See the License for the specific language governing permissions and\n\
                 limitations under the License.\n"
            ),
            Self::Mit => format!(
                "MIT License\n\n\
                 Copyright (c) {year} {author}\n\n\
                 Permission is hereby granted, free of charge, to any person obtaining a copy\n\
                 of this software and associated documentation files (the \"Software\"), to deal\n\
                 in the Software without restriction, subject to the conditions of the MIT\n\
                 License: https://opensource.org/licenses/MIT\n\n\
                 THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND.\n"
            ),
            Self::Bsd3Clause => format!(
                "BSD 3-Clause License\n\n\
                 Copyright (c) {year}, {author}\n\n\
                 Redistribution and use in source and binary forms, with or without\n\
                 modification, are permitted provided that the conditions of the BSD\n\
                 3-Clause License are met: https://opensource.org/licenses/BSD-3-Clause\n"
            ),
            Self::Gpl3 => format!(
                "Copyright (C) {year} {author}\n\n\
                 This program is free software: you can redistribute it and/or modify\n\
                 it under the terms of the GNU General Public License as published by\n\
                 the Free Software Foundation, either version 3 of the License, or\n\
                 (at your option) any later version.\n\n\
                 See https://www.gnu.org/licenses/gpl-3.0.html for the full text.\n"
            ),
            Self::NotOpenSource => format!("Copyright {year} {author}. All rights reserved.\n"),
        }
    }
}

impl fmt::Display for LicenseChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LicenseChoice {
    type Err = DomainError;

    /// Accepts the exact answer strings plus kebab-case CLI spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Apache-2.0" | "apache-2.0" => Ok(Self::Apache2),
            "MIT" | "mit" => Ok(Self::Mit),
            "BSD-3-Clause" | "bsd-3-clause" => Ok(Self::Bsd3Clause),
            "GPL-3.0" | "gpl-3.0" => Ok(Self::Gpl3),
            "Not open source" | "not-open-source" => Ok(Self::NotOpenSource),
            other => Err(DomainError::InvalidAnswer {
                field: "open_source_license",
                value: other.into(),
                expected: "\"Apache-2.0\", \"MIT\", \"BSD-3-Clause\", \"GPL-3.0\" or \"Not open source\"",
            }),
        }
    }
}

// ── RawAnswers ────────────────────────────────────────────────────────────────

/// The answer set as the generation tool receives it: all strings.
///
/// This is the wire form of an answers file. Nothing validates here —
/// validation happens in [`PluginOptions::from_answers`], once.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RawAnswers {
    pub project_name: String,
    pub full_name: String,
    pub email: String,
    pub version: String,
    pub project_short_description: String,
    pub open_source_license: String,
    pub include_rest_api: String,
    pub include_graphql: String,
    pub devcontainer: String,
}

impl Default for RawAnswers {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            full_name: String::new(),
            email: String::new(),
            version: "0.1.0".into(),
            project_short_description: String::new(),
            open_source_license: "Apache-2.0".into(),
            include_rest_api: "yes".into(),
            include_graphql: "yes".into(),
            devcontainer: "False".into(),
        }
    }
}

// ── PluginOptions ─────────────────────────────────────────────────────────────

/// Validated generation options — the typed record every later stage consumes.
///
/// Immutable after construction; produced once per generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginOptions {
    pub name: PluginName,
    pub author: String,
    pub email: String,
    pub version: String,
    pub description: String,
    pub license: LicenseChoice,
    pub include_rest_api: bool,
    pub include_graphql: bool,
    pub devcontainer: bool,
}

impl PluginOptions {
    /// Validate a raw answer set into typed options.
    ///
    /// This is the single string boundary: every flag is parsed here and
    /// nowhere else.
    pub fn from_answers(answers: &RawAnswers) -> Result<Self, DomainError> {
        Ok(Self {
            name: PluginName::parse(&answers.project_name)?,
            author: answers.full_name.clone(),
            email: answers.email.clone(),
            version: if answers.version.is_empty() {
                "0.1.0".into()
            } else {
                answers.version.clone()
            },
            description: answers.project_short_description.clone(),
            license: answers.open_source_license.parse()?,
            include_rest_api: parse_yes_no("include_rest_api", &answers.include_rest_api)?,
            include_graphql: parse_yes_no("include_graphql", &answers.include_graphql)?,
            devcontainer: parse_python_bool("devcontainer", &answers.devcontainer)?,
        })
    }
}

/// Parse the "yes"/"no" answer convention.
fn parse_yes_no(field: &'static str, value: &str) -> Result<bool, DomainError> {
    match value {
        "yes" => Ok(true),
        "no" => Ok(false),
        other => Err(DomainError::InvalidAnswer {
            field,
            value: other.into(),
            expected: "\"yes\" or \"no\"",
        }),
    }
}

/// Parse the "True"/"False" answer convention.
fn parse_python_bool(field: &'static str, value: &str) -> Result<bool, DomainError> {
    match value {
        "True" => Ok(true),
        "False" => Ok(false),
        other => Err(DomainError::InvalidAnswer {
            field,
            value: other.into(),
            expected: "\"True\" or \"False\"",
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
