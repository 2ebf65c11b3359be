//! Guard checks, rule evaluation, and the failure boundary.
//!
//! `Dispatcher::attempt` is the one operation this crate exposes to its
//! host. Per call it:
//!
//! 1. Rejects immediately (no substitution) when no local player exists.
//! 2. Walks the rules eligible for the player's job in registration order,
//!    skipping any whose trigger set excludes the attempted action or whose
//!    preset is toggled off.
//! 3. Runs each surviving rule's decision function inside a failure
//!    boundary: an `Err` is logged and counts as "no substitution" for that
//!    rule only. Evaluation of later rules is unaffected.
//! 4. Returns the first result that differs from both `ActionId::NONE` and
//!    the attempted action.
//!
//! For a fixed registration order, enablement state, and state snapshot the
//! outcome is fully determined. Nothing here is fatal: the worst outcome of
//! any fault is that the attempted action proceeds unmodified this once.

use tracing::{debug, error};

use super::registry::CompiledCombos;
use super::trace::{AttemptTrace, GuardMask, RuleOutcome, RuleTrace};
use crate::api::DispatchConfig;
use crate::state::{Enablement, Snapshot, StateQuery};
use crate::{ActionId, Attempt, ComboRule, Preset};

/// Evaluates registered combo rules against action attempts.
///
/// Construction compiles the rule registry once; the dispatcher is
/// read-only afterwards. Both capabilities are injected, so the engine has
/// no hidden global state and can be driven entirely by fakes in tests.
pub struct Dispatcher<'a, S, E> {
    combos: CompiledCombos<'a>,
    config: DispatchConfig,
    state: S,
    enablement: E,
}

impl<'a, S: StateQuery, E: Enablement> Dispatcher<'a, S, E> {
    pub fn new(rules: &'a [ComboRule], config: DispatchConfig, state: S, enablement: E) -> Self {
        Dispatcher { combos: CompiledCombos::new(rules), config, state, enablement }
    }

    /// Decide whether the attempted action should be replaced.
    ///
    /// Returns `Some(new_action)` for a substitution, `None` to let the
    /// attempt proceed unchanged.
    pub fn attempt(&self, attempt: &Attempt) -> Option<ActionId> {
        let player = self.state.local_player()?;
        let snapshot = Snapshot::new(&self.state, player);

        for &id in self.combos.eligible(player.job) {
            let meta = &self.combos.metas[id];
            if !meta.triggers.is_empty() && !meta.triggers.contains(&attempt.action) {
                continue;
            }
            if !self.rule_enabled(meta.preset) {
                continue;
            }

            let rule = self.combos.rules[id];
            if let Some(chosen) = self.evaluate(rule, attempt, &snapshot) {
                return Some(chosen);
            }
        }

        None
    }

    /// Like [`attempt`](Self::attempt), but also records what happened to
    /// every registered rule, including ones the per-job index would never
    /// have visited.
    pub fn attempt_with_trace(&self, attempt: &Attempt) -> (Option<ActionId>, AttemptTrace) {
        let Some(player) = self.state.local_player() else {
            return (None, AttemptTrace { missing_player: true, rules: Vec::new() });
        };
        let snapshot = Snapshot::new(&self.state, player);

        let mut result = None;
        let mut traces = Vec::with_capacity(self.combos.len());

        for (id, meta) in self.combos.metas.iter().enumerate() {
            let rule = self.combos.rules[id];

            if result.is_some() {
                traces.push(RuleTrace {
                    name: rule.name,
                    preset: meta.preset,
                    outcome: RuleOutcome::NotReached,
                });
                continue;
            }

            // Unlike the hot path, collect every failing guard.
            let mut guards = GuardMask::empty();
            if !meta.matches_job(player.job) {
                guards |= GuardMask::JOB_MISMATCH;
            }
            if !meta.triggers.is_empty() && !meta.triggers.contains(&attempt.action) {
                guards |= GuardMask::TRIGGER_MISMATCH;
            }
            if !self.rule_enabled(meta.preset) {
                guards |= GuardMask::DISABLED;
            }
            if !guards.is_empty() {
                traces.push(RuleTrace {
                    name: rule.name,
                    preset: meta.preset,
                    outcome: RuleOutcome::Skipped(guards),
                });
                continue;
            }

            let outcome = match (rule.decide)(attempt, &snapshot) {
                Ok(chosen) if chosen != ActionId::NONE && chosen != attempt.action => {
                    result = Some(chosen);
                    RuleOutcome::Substituted(chosen)
                }
                Ok(_) => RuleOutcome::NoChange,
                Err(err) => {
                    error!(rule = rule.name, error = %err, "rule evaluation failed");
                    RuleOutcome::Failed(err.to_string())
                }
            };
            traces.push(RuleTrace { name: rule.name, preset: meta.preset, outcome });
        }

        (result, AttemptTrace { missing_player: false, rules: traces })
    }

    /// Run one rule's decision function inside the failure boundary.
    fn evaluate(
        &self,
        rule: &ComboRule,
        attempt: &Attempt,
        snapshot: &Snapshot<'_>,
    ) -> Option<ActionId> {
        debug!(
            rule = rule.name,
            action = %attempt.action,
            last = %attempt.last_action,
            combo_time = attempt.combo_time,
            level = attempt.level,
            "invoking"
        );

        match (rule.decide)(attempt, snapshot) {
            Ok(chosen) if chosen != ActionId::NONE && chosen != attempt.action => {
                debug!(rule = rule.name, from = %attempt.action, to = %chosen, "substituted");
                Some(chosen)
            }
            Ok(_) => {
                debug!(rule = rule.name, "no replacement");
                None
            }
            Err(err) => {
                // Contained: this rule yields nothing, later rules still run.
                error!(rule = rule.name, error = %err, "rule evaluation failed");
                None
            }
        }
    }

    fn rule_enabled(&self, preset: Preset) -> bool {
        if preset.id() < self.config.always_on_below {
            debug!(preset = ?preset, "enablement bypass for built-in preset");
            return true;
        }
        self.enablement.is_enabled(preset)
    }
}
