//! Rule dispatch engine.
//!
//! This module is the entry point invoked once per action attempt. It is
//! split into focused submodules under `src/engine/` while keeping public
//! paths stable (for example `crate::engine::Dispatcher`).
//!
//! ## How the parts work together
//!
//! Handling one attempt is a short, synchronous pipeline:
//!
//! ```text
//! rules (all) ──┐
//!               │  CompiledCombos::new          (registry.rs)
//!               └──────────────┬───────────────
//!                              │  per-job index + per-rule metadata
//!                              v
//! attempt ──── Dispatcher::attempt (dispatcher.rs)
//!                - resolve local player (guard)
//!                - per rule, in registration order:
//!                    job/class guard -> trigger guard -> enablement guard
//!                    -> decide() inside the failure boundary
//!                - first rule returning a different action wins
//!                              │
//!                              v
//!                     Option<ActionId>
//! ```
//!
//! Evaluation is sequential and single-threaded by design: first-match-wins
//! semantics depend on registration order. The registry is read-only after
//! construction, so concurrent `attempt` calls are safe as long as the
//! injected capabilities are.
//!
//! ## Responsibilities by module
//!
//! - `registry.rs`: derives [`CompiledCombos`] from the rule list and builds
//!   the per-job index plus per-rule metadata (owning job, base class,
//!   trigger set) resolved once at construction.
//! - `dispatcher.rs`: applies the guard checks and runs decision functions
//!   inside the failure boundary; a fault in one rule is logged and treated
//!   as "no substitution" for that rule only.
//! - `trace.rs`: the opt-in per-attempt trace used by
//!   [`Dispatcher::attempt_with_trace`]; the hot path allocates none of it.

#[path = "engine/dispatcher.rs"]
mod dispatcher;
#[path = "engine/registry.rs"]
mod registry;
#[path = "engine/trace.rs"]
mod trace;

pub use dispatcher::Dispatcher;
#[allow(unused_imports)]
pub use registry::{CompiledCombos, RuleId, RuleMeta};
pub use trace::{AttemptTrace, GuardMask, RuleOutcome, RuleTrace};
