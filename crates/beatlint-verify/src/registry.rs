//! Check registry: registration, configuration, and the verifier runner.

use crate::checks::{self, Check, CheckCategory, CheckScope};
use crate::context::{ContextError, VerifierContext};
use crate::issue::Severity;
use crate::report::VerifyReport;
use beatlint_map::{Beatmap, DifficultyRating, MapResources};
use std::collections::HashSet;

/// Registry of all available verification checks.
///
/// New checks are added by registering them, not by modifying the runner.
pub struct CheckRegistry {
    checks: Vec<Box<dyn Check>>,
    disabled_checks: HashSet<String>,
    enabled_only: Option<HashSet<String>>,
}

impl CheckRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            checks: Vec::new(),
            disabled_checks: HashSet::new(),
            enabled_only: None,
        }
    }

    /// Creates a registry with all default checks registered.
    pub fn default_checks() -> Self {
        let mut registry = Self::new();
        for check in checks::all_checks() {
            registry.register(check);
        }
        registry
    }

    /// Registers a new check.
    pub fn register(&mut self, check: Box<dyn Check>) {
        self.checks.push(check);
    }

    /// Disables a check by ID.
    pub fn disable_check(&mut self, check_id: &str) {
        self.disabled_checks.insert(check_id.to_string());
    }

    /// Enables only the specified checks (disables all others).
    pub fn enable_only(&mut self, check_ids: &[&str]) {
        self.enabled_only = Some(check_ids.iter().map(|s| s.to_string()).collect());
    }

    /// Returns all registered checks.
    pub fn checks(&self) -> &[Box<dyn Check>] {
        &self.checks
    }

    /// Returns check metadata for documentation/introspection, including
    /// every template each check can fire.
    pub fn check_metadata(&self) -> Vec<CheckInfo> {
        self.checks
            .iter()
            .map(|check| {
                let metadata = check.metadata();
                CheckInfo {
                    id: metadata.id.to_string(),
                    description: metadata.description.to_string(),
                    category: metadata.category,
                    scope: metadata.scope,
                    templates: check
                        .possible_templates()
                        .iter()
                        .map(|template| TemplateInfo {
                            id: template.id.to_string(),
                            severity: template.severity,
                            message_format: template.message_format.to_string(),
                        })
                        .collect(),
                }
            })
            .collect()
    }

    /// Returns the number of registered checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Returns true if no checks are registered.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Checks if a check is enabled.
    fn is_check_enabled(&self, check_id: &str) -> bool {
        if self.disabled_checks.contains(check_id) {
            return false;
        }
        if let Some(ref enabled) = self.enabled_only {
            return enabled.contains(check_id);
        }
        true
    }

    /// Assembles a context for the difficulty at `current_index` and runs
    /// every enabled check against it.
    pub fn verify(
        &self,
        current_index: usize,
        all_beatmaps: &[Beatmap],
        all_resources: &[MapResources],
        rating: DifficultyRating,
    ) -> Result<VerifyReport, ContextError> {
        let context = VerifierContext::new(current_index, all_beatmaps, all_resources, rating)?;
        Ok(self.run(&context))
    }

    /// Runs every enabled check against the context, concatenating results
    /// in registration order.
    ///
    /// Checks are isolated: each one reads the context independently, and
    /// no check's output affects another's.
    pub fn run(&self, context: &VerifierContext<'_>) -> VerifyReport {
        self.run_filtered(context, None)
    }

    /// Runs only the enabled checks of the given scope.
    ///
    /// Lets a caller run `Set` checks once per set while running
    /// `Difficulty` checks once per difficulty.
    pub fn run_scope(&self, context: &VerifierContext<'_>, scope: CheckScope) -> VerifyReport {
        self.run_filtered(context, Some(scope))
    }

    fn run_filtered(&self, context: &VerifierContext<'_>, scope: Option<CheckScope>) -> VerifyReport {
        let mut report = VerifyReport::new();

        for check in &self.checks {
            let metadata = check.metadata();
            if !self.is_check_enabled(metadata.id) {
                continue;
            }
            if scope.is_some_and(|scope| metadata.scope != scope) {
                continue;
            }
            for issue in check.run(context) {
                report.add_issue(issue);
            }
        }

        report
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::default_checks()
    }
}

/// Metadata about a registered check, for documentation/introspection.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CheckInfo {
    /// Check identifier.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// Category grouping.
    pub category: CheckCategory,
    /// Single-difficulty or whole-set.
    pub scope: CheckScope,
    /// Every template the check can fire.
    pub templates: Vec<TemplateInfo>,
}

/// Metadata about one issue template of a registered check.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TemplateInfo {
    /// Template identifier within its check.
    pub id: String,
    /// Severity of issues created from this template.
    pub severity: Severity,
    /// Positional message format string.
    pub message_format: String,
}
