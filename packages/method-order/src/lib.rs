/*
 * method-order - Odoo model member-order checker
 *
 * Feature-first layout:
 * - shared/   : data model (members, categories, diagnostics) + lookup tables
 * - features/ : parsing → extraction → classification → validation → reporting
 * - usecases/ : per-file and batch check orchestration
 *
 * Each file is analyzed independently; nothing mutates process-wide state
 * during analysis, so batch runs fan out with Rayon without synchronization.
 */

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and lookup tables
pub mod shared;

/// Feature modules (parsing, extraction, classification, validation, reporting)
pub mod features;

/// Usecase layer (CheckService)
pub mod usecases;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use errors::{CheckError, Result};
pub use features::classification::{DefaultClassifier, MemberClassifier};
pub use features::reporting::Reporter;
pub use shared::models::{Category, ClassifiedMember, Diagnostic, MemberDecl};
pub use usecases::CheckService;
