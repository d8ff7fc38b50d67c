//! beatlint Verification Engine
//!
//! Inspects the timed objects and resources of a beatmap set and emits
//! structured diagnostics about timing and resource inconsistencies. The
//! engine consumes already-parsed [`beatlint_map`] data; it does not parse
//! files, render UI, or fix anything.
//!
//! # Overview
//!
//! - [`Check`]: a self-contained verification unit. Each check declares its
//!   metadata (category, scope) and the issue templates it can fire, and
//!   produces issues from a [`VerifierContext`].
//! - [`VerifierContext`]: the immutable per-run bundle - the difficulty under
//!   test plus all sibling difficulties of the set, positionally aligned with
//!   their resource handles.
//! - [`Issue`] / [`IssueTemplate`]: the diagnostic data model. Severity is
//!   two-level: [`Severity::Problem`] (must-fix) and [`Severity::Warning`]
//!   (advisory).
//! - [`CheckRegistry`]: registers checks, applies enable/disable
//!   configuration, and runs them into a [`VerifyReport`].
//!
//! Check runs are pure and isolated: a run is a function of its context,
//! degenerate input degrades to "no findings", and no check's output affects
//! another's.
//!
//! # Example
//!
//! ```
//! use beatlint_map::{Beatmap, DifficultyRating, HitObject, MapResources};
//! use beatlint_verify::{CheckRegistry, VerifierContext};
//!
//! let beatmaps = vec![Beatmap::builder("Insane")
//!     .hit_object(HitObject::Circle { start_time: 1000.0 })
//!     .hit_object(HitObject::Circle { start_time: 1000.0 })
//!     .build()];
//! let resources = vec![MapResources::new()];
//!
//! let context = VerifierContext::new(0, &beatmaps, &resources, DifficultyRating::Insane)?;
//! let report = CheckRegistry::default_checks().run(&context);
//!
//! assert!(report.has_problems());
//! for issue in report.issues() {
//!     println!("[{:?}] {}", issue.severity, issue.message);
//! }
//! # Ok::<(), beatlint_verify::ContextError>(())
//! ```
//!
//! # Modules
//!
//! - [`checks`]: Check trait, metadata, and the concrete checks
//! - [`context`]: Per-run verifier context
//! - [`issue`]: Issue and issue template types
//! - [`registry`]: Check registry and runner
//! - [`report`]: Severity-bucketed verification report

pub mod checks;
pub mod context;
pub mod issue;
pub mod registry;
pub mod report;

// Re-export commonly used types at the crate root
pub use checks::{all_checks, Check, CheckCategory, CheckMetadata, CheckScope};
pub use context::{ContextError, VerifierContext};
pub use issue::{Issue, IssueTemplate, Severity};
pub use registry::{CheckInfo, CheckRegistry, TemplateInfo};
pub use report::{VerifyReport, VerifySummary};
