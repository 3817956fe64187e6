//! Per-run substitution variables and project-name validation.
//! A [`VariableContext`] is built once per generation run and never mutated
//! while the run is in flight.

use crate::error::{Error, Result};
use chrono::Local;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Maximum accepted project name length.
pub const MAX_PROJECT_NAME_LEN: usize = 50;

/// Description used when the caller does not supply one.
pub const DEFAULT_DESCRIPTION: &str = "A Go web application built with clean architecture";

static NAME_RE: OnceLock<Regex> = OnceLock::new();

/// Database backend wired into the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseType {
    Mysql,
    Postgres,
    Sqlite,
}

/// The resolved set of substitution values for one generation run.
///
/// Serializes to a flat map keyed by the Go-style field names the bundled
/// templates use (`ProjectName`, `ModulePath`, ...); that map is the
/// complete set of recognized placeholders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VariableContext {
    pub project_name: String,
    pub module_path: String,
    pub description: String,
    pub author_name: String,
    pub author_email: String,
    pub database_type: DatabaseType,
    pub redis_enabled: bool,
    pub metrics_enabled: bool,
    pub pprof_enabled: bool,
    pub generated_at: String,
}

impl VariableContext {
    /// Creates a context with the documented defaults: module path under
    /// `github.com/user/`, all feature flags enabled, empty author fields,
    /// today's date as the generation timestamp.
    pub fn new(project_name: impl Into<String>) -> Self {
        let project_name = project_name.into();
        Self {
            module_path: format!("github.com/user/{}", project_name),
            description: DEFAULT_DESCRIPTION.to_string(),
            author_name: String::new(),
            author_email: String::new(),
            database_type: DatabaseType::Mysql,
            redis_enabled: true,
            metrics_enabled: true,
            pprof_enabled: true,
            generated_at: Local::now().format("%Y-%m-%d").to_string(),
            project_name,
        }
    }

    /// Flat map of all recognized placeholder fields.
    pub fn fields(&self) -> serde_json::Map<String, serde_json::Value> {
        // A flat struct of strings and booleans always serializes to an object.
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => serde_json::Map::new(),
        }
    }
}

/// Validates a project name against the documented pattern:
/// starts with a letter, then letters, digits, hyphens or underscores,
/// at most [`MAX_PROJECT_NAME_LEN`] characters.
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidName("project name cannot be empty".to_string()));
    }

    if name.len() > MAX_PROJECT_NAME_LEN {
        return Err(Error::InvalidName(format!(
            "project name too long (max {} characters)",
            MAX_PROJECT_NAME_LEN
        )));
    }

    let re = NAME_RE.get_or_init(|| {
        Regex::new("^[A-Za-z][A-Za-z0-9_-]*$").expect("valid pattern")
    });
    if !re.is_match(name) {
        return Err(Error::InvalidName(
            "project name must start with a letter and contain only letters, digits, hyphens and underscores"
                .to_string(),
        ));
    }

    Ok(())
}
