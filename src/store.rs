//! Bundled template resources.
//! Templates are compiled into the binary and addressed by stable path
//! identifiers. The bundled set is immutable for the lifetime of the
//! process; there is no reload or invalidation.

use crate::error::{Error, Result};
use indexmap::IndexMap;

/// Read-only access to named template resources.
///
/// The trait seam exists so the generator can be driven from an in-memory
/// fixture in tests instead of the bundled set.
pub trait TemplateStore {
    /// Returns the raw content of the template with the given identifier.
    fn resolve(&self, id: &str) -> Result<&str>;
}

/// Every template bundled at build time, in declaration order.
///
/// The dependency manifest is stored dot-prefixed and `.tmpl`-suffixed so
/// that nothing treats it as a real `go.mod` before rendering.
const BUNDLED: &[(&str, &str)] = &[
    ("go-tpl/.go.mod.tmpl", include_str!("../templates/go-tpl/.go.mod.tmpl")),
    ("go-tpl/Dockerfile.tmpl", include_str!("../templates/go-tpl/Dockerfile.tmpl")),
    ("go-tpl/main.go.tmpl", include_str!("../templates/go-tpl/main.go.tmpl")),
    (
        "go-tpl/config/config.yml.tmpl",
        include_str!("../templates/go-tpl/config/config.yml.tmpl"),
    ),
    ("go-tpl/infra/init.go.tmpl", include_str!("../templates/go-tpl/infra/init.go.tmpl")),
    (
        "go-tpl/infra/config.go.tmpl",
        include_str!("../templates/go-tpl/infra/config.go.tmpl"),
    ),
    ("go-tpl/infra/db.go.tmpl", include_str!("../templates/go-tpl/infra/db.go.tmpl")),
    (
        "go-tpl/infra/logger.go.tmpl",
        include_str!("../templates/go-tpl/infra/logger.go.tmpl"),
    ),
    (
        "go-tpl/infra/monitor.go.tmpl",
        include_str!("../templates/go-tpl/infra/monitor.go.tmpl"),
    ),
    ("go-tpl/logic/init.go.tmpl", include_str!("../templates/go-tpl/logic/init.go.tmpl")),
    (
        "go-tpl/logic/shared/errors.go.tmpl",
        include_str!("../templates/go-tpl/logic/shared/errors.go.tmpl"),
    ),
    (
        "go-tpl/logic/user/service.go.tmpl",
        include_str!("../templates/go-tpl/logic/user/service.go.tmpl"),
    ),
    (
        "go-tpl/logic/auth/service.go.tmpl",
        include_str!("../templates/go-tpl/logic/auth/service.go.tmpl"),
    ),
    ("go-tpl/web/router.go.tmpl", include_str!("../templates/go-tpl/web/router.go.tmpl")),
    (
        "go-tpl/web/middleware/auth.go.tmpl",
        include_str!("../templates/go-tpl/web/middleware/auth.go.tmpl"),
    ),
    (
        "go-tpl/web/rest/user/handler.go.tmpl",
        include_str!("../templates/go-tpl/web/rest/user/handler.go.tmpl"),
    ),
    (
        "go-tpl/web/rest/auth/handler.go.tmpl",
        include_str!("../templates/go-tpl/web/rest/auth/handler.go.tmpl"),
    ),
    (
        "go-tpl/web/types/types.go.tmpl",
        include_str!("../templates/go-tpl/web/types/types.go.tmpl"),
    ),
];

/// The process-wide bundled template set.
pub struct EmbeddedStore {
    templates: IndexMap<&'static str, &'static str>,
}

impl EmbeddedStore {
    pub fn new() -> Self {
        Self { templates: BUNDLED.iter().copied().collect() }
    }

    /// Identifiers of every bundled template, in declaration order.
    pub fn identifiers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.templates.keys().copied()
    }
}

impl Default for EmbeddedStore {
    fn default() -> Self {
        EmbeddedStore::new()
    }
}

impl TemplateStore for EmbeddedStore {
    fn resolve(&self, id: &str) -> Result<&str> {
        self.templates
            .get(id)
            .copied()
            .ok_or_else(|| Error::TemplateNotFound { id: id.to_string() })
    }
}
