//! Host capabilities consumed by the dispatcher.
//!
//! The engine never reads game memory itself. Everything it knows about the
//! world arrives through two traits injected at [`Dispatcher`] construction:
//!
//! - [`StateQuery`]: point-in-time facts (cooldowns, status effects, job
//!   gauge, local player, current target). Every call is treated as
//!   reflecting "now"; the engine adds no caching or staleness handling.
//! - [`Enablement`]: whether a user has toggled a given preset on.
//!
//! Rules do not touch `StateQuery` directly. The dispatcher resolves the
//! local player once per attempt and hands rules a [`Snapshot`], which adds
//! the self/target convenience accessors rules actually want.
//!
//! [`Dispatcher`]: crate::Dispatcher

use crate::{ActionId, EffectId, EntityId, JobId, Preset};

/// Cooldown state of one action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cooldown {
    /// Whether the cooldown timer is currently running.
    pub active: bool,
    /// Seconds until the action is usable again; zero when ready.
    pub remaining: f32,
}

impl Cooldown {
    pub const READY: Cooldown = Cooldown { active: false, remaining: 0.0 };
}

/// A status effect present on some entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusEffect {
    /// Seconds until the effect expires.
    pub remaining: f32,
    /// Stack count; zero for unstacked effects.
    pub stacks: u16,
}

/// The active local player, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerSnapshot {
    pub entity: EntityId,
    pub job: JobId,
    pub level: u8,
}

/// An Astrologian arcana card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Card {
    Balance,
    Bole,
    Arrow,
    Spear,
    Ewer,
    Spire,
}

/// Job-specific resource gauge contents.
///
/// Only the gauges the shipped rules consume are modeled; jobs without a
/// modeled gauge report `JobGauge::None`. A rule that receives a gauge
/// belonging to a different job must fail with
/// [`RuleError::GaugeMismatch`](crate::RuleError::GaugeMismatch) rather than
/// guess.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JobGauge {
    #[default]
    None,
    Astrologian {
        /// The card currently held, if any.
        drawn: Option<Card>,
    },
}

/// Point-in-time queries over observable game state.
///
/// Implementations must be side-effect-free from the engine's perspective
/// and safe for concurrent reads; the dispatcher may be invoked from
/// whatever thread the host delivers attempts on.
pub trait StateQuery {
    /// Cooldown state of `action`.
    fn cooldown(&self, action: ActionId) -> Cooldown;

    /// Look up `effect` on `holder`. When `source` is given, only an effect
    /// applied by that entity counts; `None` matches any source.
    fn status(
        &self,
        effect: EffectId,
        holder: EntityId,
        source: Option<EntityId>,
    ) -> Option<StatusEffect>;

    /// Resource gauge of the local player's current job.
    fn job_gauge(&self) -> JobGauge;

    /// The active local player, or `None` between zones/logins.
    fn local_player(&self) -> Option<PlayerSnapshot>;

    /// The player's current target, if any.
    fn current_target(&self) -> Option<EntityId>;
}

/// Whether a user has enabled a given preset.
pub trait Enablement {
    fn is_enabled(&self, preset: Preset) -> bool;
}

/// State view handed to rule decision functions for one attempt.
///
/// Wraps the injected [`StateQuery`] together with the already-resolved
/// local player, so rules get self/target effect lookups without re-fetching
/// the player on every query.
pub struct Snapshot<'a> {
    state: &'a dyn StateQuery,
    player: PlayerSnapshot,
}

impl<'a> Snapshot<'a> {
    pub fn new(state: &'a dyn StateQuery, player: PlayerSnapshot) -> Self {
        Snapshot { state, player }
    }

    pub fn player(&self) -> PlayerSnapshot {
        self.player
    }

    pub fn cooldown(&self, action: ActionId) -> Cooldown {
        self.state.cooldown(action)
    }

    pub fn is_on_cooldown(&self, action: ActionId) -> bool {
        self.state.cooldown(action).active
    }

    pub fn is_off_cooldown(&self, action: ActionId) -> bool {
        !self.state.cooldown(action).active
    }

    pub fn gauge(&self) -> JobGauge {
        self.state.job_gauge()
    }

    pub fn current_target(&self) -> Option<EntityId> {
        self.state.current_target()
    }

    // Effects on the local player.

    pub fn self_effect(&self, effect: EffectId) -> Option<StatusEffect> {
        self.state.status(effect, self.player.entity, None)
    }

    pub fn self_has_effect(&self, effect: EffectId) -> bool {
        self.self_effect(effect).is_some()
    }

    pub fn self_effect_duration(&self, effect: EffectId) -> f32 {
        self.self_effect(effect).map_or(0.0, |s| s.remaining)
    }

    pub fn self_effect_stacks(&self, effect: EffectId) -> u16 {
        self.self_effect(effect).map_or(0, |s| s.stacks)
    }

    // Effects on the current target, from any source.

    pub fn target_any_effect(&self, effect: EffectId) -> Option<StatusEffect> {
        let target = self.state.current_target()?;
        self.state.status(effect, target, None)
    }

    pub fn target_has_any_effect(&self, effect: EffectId) -> bool {
        self.target_any_effect(effect).is_some()
    }

    // Effects on the current target, applied by the local player.

    pub fn target_own_effect(&self, effect: EffectId) -> Option<StatusEffect> {
        let target = self.state.current_target()?;
        self.state.status(effect, target, Some(self.player.entity))
    }

    pub fn target_has_own_effect(&self, effect: EffectId) -> bool {
        self.target_own_effect(effect).is_some()
    }

    pub fn target_own_effect_duration(&self, effect: EffectId) -> f32 {
        self.target_own_effect(effect).map_or(0.0, |s| s.remaining)
    }
}


#[cfg(test)]
pub(crate) mod fakes {
    //! Fake capabilities shared by the test modules.

    use super::*;
    use std::collections::{HashMap, HashSet};

    pub(crate) const PLAYER: EntityId = EntityId(0x1000);
    pub(crate) const TARGET: EntityId = EntityId(0x2000);

    #[derive(Default)]
    pub(crate) struct FakeState {
        pub player: Option<PlayerSnapshot>,
        pub cooldowns: HashMap<ActionId, Cooldown>,
        pub statuses: Vec<(EffectId, EntityId, Option<EntityId>, StatusEffect)>,
        pub gauge: JobGauge,
        pub target: Option<EntityId>,
    }

    impl FakeState {
        pub fn with_player(job: JobId, level: u8) -> Self {
            FakeState {
                player: Some(PlayerSnapshot { entity: PLAYER, job, level }),
                ..FakeState::default()
            }
        }

        pub fn set_cooldown(&mut self, action: ActionId, remaining: f32) {
            self.cooldowns.insert(action, Cooldown { active: remaining > 0.0, remaining });
        }

        pub fn add_self_status(&mut self, effect: EffectId) {
            self.statuses.push((effect, PLAYER, None, StatusEffect { remaining: 10.0, stacks: 0 }));
        }
    }

    impl StateQuery for FakeState {
        fn cooldown(&self, action: ActionId) -> Cooldown {
            self.cooldowns.get(&action).copied().unwrap_or(Cooldown::READY)
        }

        fn status(
            &self,
            effect: EffectId,
            holder: EntityId,
            source: Option<EntityId>,
        ) -> Option<StatusEffect> {
            self.statuses
                .iter()
                .find(|(e, h, s, _)| {
                    *e == effect && *h == holder && (source.is_none() || *s == source)
                })
                .map(|(_, _, _, status)| *status)
        }

        fn job_gauge(&self) -> JobGauge {
            self.gauge
        }

        fn local_player(&self) -> Option<PlayerSnapshot> {
            self.player
        }

        fn current_target(&self) -> Option<EntityId> {
            self.target
        }
    }

    pub(crate) struct FakeEnablement {
        pub enabled: HashSet<Preset>,
        pub all: bool,
    }

    impl FakeEnablement {
        pub fn all() -> Self {
            FakeEnablement { enabled: HashSet::new(), all: true }
        }

        pub fn only(presets: &[Preset]) -> Self {
            FakeEnablement { enabled: presets.iter().copied().collect(), all: false }
        }

        pub fn none() -> Self {
            FakeEnablement { enabled: HashSet::new(), all: false }
        }
    }

    impl Enablement for FakeEnablement {
        fn is_enabled(&self, preset: Preset) -> bool {
            self.all || self.enabled.contains(&preset)
        }
    }
}
