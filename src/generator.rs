//! Generation orchestration.
//! Drives one run end to end: precondition checks, directory creation,
//! then render-and-write per manifest entry with progress reporting.

use crate::context::{validate_project_name, VariableContext};
use crate::error::Result;
use crate::manifest::Manifest;
use crate::planner;
use crate::renderer::Renderer;
use crate::store::TemplateStore;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Progress after one completed manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    /// Entries written so far, including this one.
    pub completed: usize,
    /// Total entries in the manifest.
    pub total: usize,
    /// Destination of the entry just written.
    pub dest: PathBuf,
}

/// Observational sink for per-file progress.
///
/// Reporting happens after each entry is written; it never affects
/// generation order or outcome.
pub trait ProgressReporter {
    fn written(&mut self, progress: &Progress);
}

/// Reporter that discards all events.
pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn written(&mut self, _progress: &Progress) {}
}

/// Summary of a completed run.
#[derive(Debug)]
pub struct Report {
    /// The created project root.
    pub root: PathBuf,
    /// Absolute destination of every written file, in processing order.
    pub files_written: Vec<PathBuf>,
}

/// Orchestrates one generation run over a template store and a renderer.
pub struct Generator<'a> {
    store: &'a dyn TemplateStore,
    renderer: &'a dyn Renderer,
}

impl<'a> Generator<'a> {
    pub fn new(store: &'a dyn TemplateStore, renderer: &'a dyn Renderer) -> Self {
        Self { store, renderer }
    }

    /// Materializes one project under `<target_dir>/<project_name>/`.
    ///
    /// `InvalidName` and `AlreadyExists` are pure precondition failures
    /// detected before any filesystem mutation. Entries are processed in
    /// manifest declaration order; the first `TemplateNotFound`,
    /// `Substitution` or `Io` failure halts the run. Files already written
    /// stay on disk — the root is freshly created, so nothing pre-existing
    /// is endangered, but there is no all-or-nothing guarantee.
    pub fn generate(
        &self,
        context: &VariableContext,
        manifest: &Manifest,
        target_dir: &Path,
        reporter: &mut dyn ProgressReporter,
    ) -> Result<Report> {
        validate_project_name(&context.project_name)?;

        let root = target_dir.join(&context.project_name);
        planner::create_root(&root)?;

        let dirs = planner::plan(manifest, &root);
        planner::create_dirs(&dirs)?;

        let total = manifest.len();
        let mut files_written = Vec::with_capacity(total);

        for (index, entry) in manifest.entries().iter().enumerate() {
            let raw = self.store.resolve(entry.template_id)?;
            let rendered = self.renderer.render(raw, context)?;

            let dest = root.join(entry.dest);
            debug!("Writing {}", dest.display());
            fs::write(&dest, rendered)?;

            files_written.push(dest.clone());
            reporter.written(&Progress { completed: index + 1, total, dest });
        }

        Ok(Report { root, files_written })
    }
}
