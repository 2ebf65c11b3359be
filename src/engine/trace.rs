//! Per-attempt dispatch trace.
//!
//! [`Dispatcher::attempt_with_trace`] records what happened to every
//! registered rule during one attempt: which guards excluded it, what its
//! decision was, or whether an earlier substitution short-circuited past it.
//!
//! Traces are intentionally *opt-in*: the normal `attempt` path allocates
//! nothing here. Callers that want visibility (a settings UI, a bug report)
//! pay for it explicitly.
//!
//! [`Dispatcher::attempt_with_trace`]: super::Dispatcher::attempt_with_trace

use crate::{ActionId, Preset};

bitflags::bitflags! {
    /// Guards that excluded a rule from evaluation.
    ///
    /// The dispatcher short-circuits on the first failing guard; the trace
    /// path keeps checking so a trace shows *every* guard a rule failed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct GuardMask: u8 {
        /// Neither the rule's job nor its base class matches the player.
        const JOB_MISMATCH     = 1 << 0;
        /// The rule declares triggers and the attempted action is not one.
        const TRIGGER_MISMATCH = 1 << 1;
        /// The user has the preset toggled off (and it is not below the
        /// always-on threshold).
        const DISABLED         = 1 << 2;
    }
}

/// What one rule did (or why it did nothing) during an attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleOutcome {
    /// Excluded by one or more guards; never evaluated.
    Skipped(GuardMask),
    /// Evaluated; returned zero or the attempted action.
    NoChange,
    /// Evaluated; produced this substitution. At most one rule per attempt.
    Substituted(ActionId),
    /// Evaluation faulted; contained by the failure boundary.
    Failed(String),
    /// An earlier rule already substituted, so this one was never reached.
    NotReached,
}

/// One rule's entry in an [`AttemptTrace`].
#[derive(Debug, Clone, PartialEq)]
pub struct RuleTrace {
    pub name: &'static str,
    pub preset: Preset,
    pub outcome: RuleOutcome,
}

/// Full record of one dispatched attempt.
#[derive(Debug, Clone, Default)]
pub struct AttemptTrace {
    /// True when the attempt was rejected before rule evaluation because no
    /// local player was present.
    pub missing_player: bool,
    /// One entry per registered rule, in registration order.
    pub rules: Vec<RuleTrace>,
}

impl AttemptTrace {
    /// The rule that produced the substitution, if any.
    pub fn winner(&self) -> Option<&RuleTrace> {
        self.rules.iter().find(|r| matches!(r.outcome, RuleOutcome::Substituted(_)))
    }
}
