//! Rule compilation and indexing.
//!
//! This holds the *static* side of the engine: the structures derived from
//! the full rule list at construction time so that per-attempt dispatch
//! stays cheap and predictable.
//!
//! Dispatch is intentionally split into two phases:
//!
//! 1. **Compile/index rules** (this module): resolve each rule's metadata
//!    (owning job, normalized base class, trigger set) from its preset and
//!    index rule ids by job.
//! 2. **Run** (see `dispatcher.rs`): look up the active player's job, then
//!    walk the eligible rules in registration order applying guards.
//!
//! ## Invariants
//!
//! - `RuleId` is an index into `CompiledCombos::rules` and
//!   `CompiledCombos::metas`. Those vectors must stay aligned.
//! - The per-job lists in `by_job` preserve registration order; first-match
//!   -wins semantics depend on it.
//! - `by_job` is a fixed 256-slot table keyed by the raw job id to avoid
//!   `HashMap` overhead in the hot path.

use crate::{ActionId, ComboRule, JobId, Preset, base_class};

/// Rule identifier (index into the rules vector).
pub type RuleId = usize;

/// Metadata resolved from a rule's preset when the registry is built.
#[derive(Clone, Copy, Debug)]
pub struct RuleMeta {
    pub preset: Preset,
    /// Job that owns the rule.
    pub job: JobId,
    /// `base_class(job)`, precomputed so the dispatcher never re-derives it.
    pub class: JobId,
    /// Trigger action set; empty means "any action of this job".
    pub triggers: &'static [ActionId],
}

impl RuleMeta {
    /// Whether a player on `job` is covered by this rule.
    pub fn matches_job(&self, job: JobId) -> bool {
        self.job == job || self.class == job
    }
}

/// Pre-compiled rule set with metadata and a per-job index.
#[derive(Debug)]
pub struct CompiledCombos<'a> {
    pub rules: Vec<&'a ComboRule>,
    pub metas: Vec<RuleMeta>,
    by_job: Box<[Vec<RuleId>; 256]>,
}

impl<'a> CompiledCombos<'a> {
    /// Compile a registry from a slice of rules.
    ///
    /// Each rule is indexed under both its owning job and that job's base
    /// class, so a Warrior rule is found whether the player shows up as
    /// Warrior or as Marauder.
    pub fn new(rules: &'a [ComboRule]) -> Self {
        let rule_refs: Vec<&ComboRule> = rules.iter().collect();

        let metas: Vec<RuleMeta> = rule_refs
            .iter()
            .map(|r| RuleMeta {
                preset: r.preset,
                job: r.preset.job(),
                class: base_class(r.preset.job()),
                triggers: r.triggers,
            })
            .collect();

        let mut by_job: Box<[Vec<RuleId>; 256]> =
            Box::new(std::array::from_fn(|_| Vec::new()));
        for (id, meta) in metas.iter().enumerate() {
            by_job[meta.job.0 as usize].push(id);
            if meta.class != meta.job {
                by_job[meta.class.0 as usize].push(id);
            }
        }

        CompiledCombos { rules: rule_refs, metas, by_job }
    }

    /// Rule ids eligible for a player on `job`, in registration order.
    pub fn eligible(&self, job: JobId) -> &[RuleId] {
        &self.by_job[job.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }
}
