use crate::engine::Dispatcher;
use crate::state::{Enablement, StateQuery};
use crate::{ComboRule, rules};
use once_cell::sync::Lazy;

static DEFAULT_RULES: Lazy<Vec<ComboRule>> = Lazy::new(rules::get);

/// Dispatch policy knobs.
///
/// This is intentionally minimal; it exists so that policy values are
/// configuration rather than constants buried in the guard logic.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Presets whose numeric identity is below this value are treated as
    /// built-in and bypass the enablement check entirely.
    pub always_on_below: u16,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        DispatchConfig { always_on_below: 100 }
    }
}

/// Build a [`Dispatcher`] over the shipped ruleset with default config.
///
/// # Example
/// ```no_run
/// use recast::{Attempt, ActionId, dispatcher};
/// # struct HostState; struct HostConfig;
/// # impl recast::StateQuery for HostState {
/// #     fn cooldown(&self, _: ActionId) -> recast::Cooldown { recast::Cooldown::READY }
/// #     fn status(&self, _: recast::EffectId, _: recast::EntityId, _: Option<recast::EntityId>) -> Option<recast::StatusEffect> { None }
/// #     fn job_gauge(&self) -> recast::JobGauge { recast::JobGauge::None }
/// #     fn local_player(&self) -> Option<recast::PlayerSnapshot> { None }
/// #     fn current_target(&self) -> Option<recast::EntityId> { None }
/// # }
/// # impl recast::Enablement for HostConfig {
/// #     fn is_enabled(&self, _: recast::Preset) -> bool { true }
/// # }
///
/// let engine = dispatcher(HostState, HostConfig);
/// let attempt = Attempt {
///     action: ActionId(3610),
///     last_action: ActionId::NONE,
///     combo_time: 0.0,
///     level: 20,
/// };
/// let replaced = engine.attempt(&attempt);
/// ```
pub fn dispatcher<S: StateQuery, E: Enablement>(
    state: S,
    enablement: E,
) -> Dispatcher<'static, S, E> {
    dispatcher_with(state, enablement, DispatchConfig::default())
}

/// Build a [`Dispatcher`] over the shipped ruleset with explicit config.
pub fn dispatcher_with<S: StateQuery, E: Enablement>(
    state: S,
    enablement: E,
    config: DispatchConfig,
) -> Dispatcher<'static, S, E> {
    Dispatcher::new(&DEFAULT_RULES, config, state, enablement)
}
