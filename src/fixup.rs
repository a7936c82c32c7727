//! Orchestrates one fixup run.
//!
//! scan sources → load reference catalog → diff → disambiguate → rewrite
//! every locale catalog, reference first.

use std::io::{
    BufRead,
    Write,
};
use std::path::{
    Path,
    PathBuf,
};

use crate::config::{
    ConfigManager,
    FileMatcher,
    I18nSettings,
};
use crate::error::FixupError;
use crate::indexer::workspace::scan_source_usage;
use crate::input::catalog::Catalog;
use crate::input::locale::discover_locale_files;
use crate::reconcile::{
    CatalogChanges,
    DisambiguationOutcome,
    DisambiguationSession,
    Reconciliation,
    apply_reconciliation,
    compute_additions,
    compute_removals,
};

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixupOutcome {
    Completed(FixupSummary),
    /// The operator exited during disambiguation. Nothing was written.
    Aborted,
}

/// Everything a completed run changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixupSummary {
    /// Final additions, removals and renames shared by every locale.
    pub reconciliation: Reconciliation,
    /// Per catalog changes, in the order the files were written.
    pub files: Vec<FileReport>,
}

/// Changes written to one catalog file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub locale: String,
    pub path: PathBuf,
    pub changes: CatalogChanges,
}

/// Reconciles one workspace.
#[derive(Debug, Clone)]
pub struct Fixup {
    settings: I18nSettings,
    workspace_root: PathBuf,
}

impl Fixup {
    #[must_use]
    pub const fn new(settings: I18nSettings, workspace_root: PathBuf) -> Self {
        Self { settings, workspace_root }
    }

    /// Uses the manager's current settings and workspace root.
    #[must_use]
    pub fn from_config(config_manager: &ConfigManager) -> Self {
        Self::new(config_manager.get_settings().clone(), config_manager.workspace_root().to_path_buf())
    }

    /// Runs the whole fixup, prompting on `output` and reading answers from `input`.
    ///
    /// A failure while writing one catalog stops the run; catalogs written
    /// before it stay written.
    pub fn run<R: BufRead, W: Write>(
        &self,
        input: R,
        output: W,
    ) -> Result<FixupOutcome, FixupError> {
        let matcher = FileMatcher::new(self.workspace_root.clone(), &self.settings)?;

        let usage = scan_source_usage(&matcher, &self.settings.trans_fn_names)?;
        tracing::debug!(keys = usage.len(), "Collected source usage");

        let locale_files = discover_locale_files(&matcher);
        let reference_path = locale_files.reference_file(&self.settings.reference_locale)?;
        let mut reference = load_catalog(reference_path)?;

        let mut state = Reconciliation::new(
            compute_additions(&usage, &reference),
            compute_removals(&usage, &reference),
        );
        tracing::debug!(
            additions = state.additions().len(),
            removals = state.removals().len(),
            "Computed differences"
        );

        if state.needs_disambiguation() {
            let outcome = DisambiguationSession::new(&mut state, input, output).run()?;
            if outcome == DisambiguationOutcome::Aborted {
                tracing::info!("Fixup canceled, no catalog was modified");
                return Ok(FixupOutcome::Aborted);
            }
        }

        let mut files = Vec::with_capacity(locale_files.len());

        let changes = apply_reconciliation(&mut reference, &state, None);
        store_catalog(&reference, reference_path)?;
        files.push(report(&self.settings.reference_locale, reference_path, changes));

        for (locale, path) in locale_files.iter() {
            if path == reference_path {
                continue;
            }

            let mut catalog = load_catalog(path)?;
            let changes = apply_reconciliation(&mut catalog, &state, Some(&reference));
            store_catalog(&catalog, path)?;
            files.push(report(locale, path, changes));
        }

        Ok(FixupOutcome::Completed(FixupSummary { reconciliation: state, files }))
    }
}

fn load_catalog(path: &Path) -> Result<Catalog, FixupError> {
    Catalog::load(path).map_err(|source| FixupError::CatalogLoad { path: path.to_path_buf(), source })
}

fn store_catalog(catalog: &Catalog, path: &Path) -> Result<(), FixupError> {
    catalog
        .store(path)
        .map_err(|source| FixupError::CatalogWrite { path: path.to_path_buf(), source })
}

/// Logs the changes written to `path` and wraps them in a report.
fn report(locale: &str, path: &Path, changes: CatalogChanges) -> FileReport {
    let file = path.display();
    for (old_id, new_id) in &changes.updated {
        tracing::info!(%file, %old_id, %new_id, "Updated");
    }
    for id in &changes.added {
        tracing::info!(%file, %id, "Added");
    }
    for id in &changes.removed {
        tracing::info!(%file, %id, "Removed");
    }
    for id in &changes.pruned {
        tracing::info!(%file, %id, "Removed orphan");
    }
    if changes.is_empty() {
        tracing::debug!(%file, "No changes");
    }

    FileReport { locale: locale.to_string(), path: path.to_path_buf(), changes }
}
