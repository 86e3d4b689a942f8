//! Check Service - usecase layer for single-file and batch checks.
//!
//! Runs the per-file pipeline: parse → extract model classes → multiple-model
//! guard → classify members → validate order. Files are independent, so
//! batch runs fan out with Rayon and collect in input order, keeping output
//! deterministic.

use crate::errors::Result;
use crate::features::classification::{classify_members, DefaultClassifier, MemberClassifier};
use crate::features::extraction::extract_model_classes;
use crate::features::parsing::parse_classes;
use crate::features::validation::{check_single_model, validate_order};
use crate::shared::models::Diagnostic;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Per-file check pipeline. Holds the classifier so alternative rule sets
/// can be plugged in; the default covers the canonical Odoo categories.
pub struct CheckService<C = DefaultClassifier> {
    classifier: C,
}

impl CheckService<DefaultClassifier> {
    pub fn new() -> Self {
        Self {
            classifier: DefaultClassifier,
        }
    }
}

impl Default for CheckService<DefaultClassifier> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: MemberClassifier + Sync> CheckService<C> {
    pub fn with_classifier(classifier: C) -> Self {
        Self { classifier }
    }

    /// Check one already-read source. Diagnostics are computed purely from
    /// this file's tree; no state is carried between files or runs.
    pub fn check_source(&self, path: &str, source: &str) -> Result<Vec<Diagnostic>> {
        let classes = extract_model_classes(parse_classes(path, source)?);
        debug!(path, classes = classes.len(), "model classes extracted");

        let mut diagnostics = Vec::new();
        diagnostics.extend(check_single_model(path, &classes));
        // every class is still validated even when multiple were found
        for class in &classes {
            let classified = classify_members(&self.classifier, &class.members);
            diagnostics.extend(validate_order(path, &classified));
        }
        Ok(diagnostics)
    }

    pub fn check_file(&self, path: &Path) -> Result<Vec<Diagnostic>> {
        let source = fs::read_to_string(path)?;
        self.check_source(&path.display().to_string(), &source)
    }

    /// Check a batch of files in parallel, returning all diagnostics in
    /// input-file order. The first read or parse failure aborts the run.
    pub fn check_files(&self, paths: &[PathBuf]) -> Result<Vec<Diagnostic>> {
        let per_file: Result<Vec<Vec<Diagnostic>>> =
            paths.par_iter().map(|path| self.check_file(path)).collect();
        Ok(per_file?.into_iter().flatten().collect())
    }
}
