//! Project shape: the ordered mapping from bundled templates to output paths.
//!
//! A manifest is an explicit sequence, never an unordered map, so the
//! processing order of a run is a declared invariant: entries are rendered
//! and written in declaration order, identically on every run.

use crate::context::VariableContext;
use std::collections::HashSet;
use std::path::{Component, Path};

/// One (template identifier, destination relative path) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestEntry {
    pub template_id: &'static str,
    /// Destination relative to the project root. Must stay inside the root.
    pub dest: &'static str,
}

/// Ordered set of manifest entries defining one generated project's shape.
#[derive(Debug, Clone)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// Builds a manifest from an ordered entry list.
    ///
    /// # Panics
    /// A duplicate, absolute or root-escaping destination is a defect in
    /// the built-in tables, not a runtime condition, and fails construction
    /// outright.
    pub fn new(entries: Vec<ManifestEntry>) -> Self {
        let mut seen = HashSet::new();
        for entry in &entries {
            assert!(
                is_safe_relative(entry.dest),
                "manifest destination '{}' escapes the project root",
                entry.dest
            );
            assert!(seen.insert(entry.dest), "duplicate manifest destination '{}'", entry.dest);
        }
        Self { entries }
    }

    /// Entries in processing order.
    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The built-in Go web project manifest, reduced to the variant the
    /// context selects.
    ///
    /// Metrics wiring ships as its own file and is dropped from the
    /// manifest entirely when metrics are disabled; Redis and pprof wiring
    /// live inside shared files and are gated by the templates themselves.
    /// The dependency manifest is the one renamed destination: its source
    /// lives dot-prefixed and `.tmpl`-suffixed in the store and lands as
    /// the conventional `go.mod`.
    pub fn builtin(context: &VariableContext) -> Self {
        let mut entries = vec![
            ManifestEntry { template_id: "go-tpl/.go.mod.tmpl", dest: "go.mod" },
            ManifestEntry { template_id: "go-tpl/Dockerfile.tmpl", dest: "Dockerfile" },
            ManifestEntry { template_id: "go-tpl/main.go.tmpl", dest: "main.go" },
            ManifestEntry {
                template_id: "go-tpl/config/config.yml.tmpl",
                dest: "config/config.yml",
            },
            ManifestEntry { template_id: "go-tpl/infra/init.go.tmpl", dest: "infra/init.go" },
            ManifestEntry {
                template_id: "go-tpl/infra/config.go.tmpl",
                dest: "infra/config.go",
            },
            ManifestEntry { template_id: "go-tpl/infra/db.go.tmpl", dest: "infra/db.go" },
            ManifestEntry {
                template_id: "go-tpl/infra/logger.go.tmpl",
                dest: "infra/logger.go",
            },
            ManifestEntry {
                template_id: "go-tpl/infra/monitor.go.tmpl",
                dest: "infra/monitor.go",
            },
            ManifestEntry { template_id: "go-tpl/logic/init.go.tmpl", dest: "logic/init.go" },
            ManifestEntry {
                template_id: "go-tpl/logic/shared/errors.go.tmpl",
                dest: "logic/shared/errors.go",
            },
            ManifestEntry {
                template_id: "go-tpl/logic/user/service.go.tmpl",
                dest: "logic/user/service.go",
            },
            ManifestEntry {
                template_id: "go-tpl/logic/auth/service.go.tmpl",
                dest: "logic/auth/service.go",
            },
            ManifestEntry { template_id: "go-tpl/web/router.go.tmpl", dest: "web/router.go" },
            ManifestEntry {
                template_id: "go-tpl/web/middleware/auth.go.tmpl",
                dest: "web/middleware/auth.go",
            },
            ManifestEntry {
                template_id: "go-tpl/web/rest/user/handler.go.tmpl",
                dest: "web/rest/user/handler.go",
            },
            ManifestEntry {
                template_id: "go-tpl/web/rest/auth/handler.go.tmpl",
                dest: "web/rest/auth/handler.go",
            },
            ManifestEntry {
                template_id: "go-tpl/web/types/types.go.tmpl",
                dest: "web/types/types.go",
            },
        ];

        if !context.metrics_enabled {
            entries.retain(|entry| entry.dest != "infra/monitor.go");
        }

        Self::new(entries)
    }
}

/// A destination is safe when it is non-empty, relative and contains only
/// normal components (no `..`, no `.`, no root).
fn is_safe_relative(dest: &str) -> bool {
    let path = Path::new(dest);
    !dest.is_empty() && path.components().all(|c| matches!(c, Component::Normal(_)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_safe_relative() {
        assert!(is_safe_relative("go.mod"));
        assert!(is_safe_relative("web/router.go"));

        assert!(!is_safe_relative(""));
        assert!(!is_safe_relative("/etc/passwd"));
        assert!(!is_safe_relative("../outside.go"));
        assert!(!is_safe_relative("web/../../outside.go"));
    }

    #[test]
    #[should_panic(expected = "duplicate manifest destination")]
    fn test_duplicate_destination_is_a_defect() {
        Manifest::new(vec![
            ManifestEntry { template_id: "a.tmpl", dest: "main.go" },
            ManifestEntry { template_id: "b.tmpl", dest: "main.go" },
        ]);
    }

    #[test]
    #[should_panic(expected = "escapes the project root")]
    fn test_escaping_destination_is_a_defect() {
        Manifest::new(vec![ManifestEntry { template_id: "a.tmpl", dest: "../main.go" }]);
    }
}
