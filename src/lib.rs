extern crate self as recast;

#[macro_use]
mod macros;
mod api;
mod engine;
pub mod rules;
mod state;

pub use api::{DispatchConfig, dispatcher, dispatcher_with};
pub use engine::{AttemptTrace, Dispatcher, GuardMask, RuleOutcome, RuleTrace};
pub use state::{
    Card, Cooldown, Enablement, JobGauge, PlayerSnapshot, Snapshot, StateQuery, StatusEffect,
};

use std::fmt;

// --- Identifiers --------------------------------------------------------------

/// Opaque identifier of a player-invokable skill/ability.
///
/// Values are issued by the host game's data tables; the engine never
/// interprets them beyond equality. `ActionId::NONE` (zero) means
/// "no replacement" when returned from a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionId(pub u32);

impl ActionId {
    pub const NONE: ActionId = ActionId(0);
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Opaque identifier of a player class/job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JobId(pub u8);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "job:{}", self.0)
    }
}

/// Opaque identifier of a status effect (buff/debuff).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectId(pub u16);

/// Opaque reference to a game entity (player, target, pet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u64);

/// Normalize an advanced job to its base class identifier.
///
/// The mapping is total: identifiers outside the known advanced-job ranges
/// pass through unchanged. A rule owned by an advanced job also matches a
/// player still on the base class.
pub const fn base_class(job: JobId) -> JobId {
    match job.0 {
        19..=25 => JobId(job.0 - 18),
        27 | 28 => JobId(26),
        30 => JobId(29),
        _ => job,
    }
}

// --- Rule identity --------------------------------------------------------------

/// Identity of a combo rule, as presented to users for enable/disable.
///
/// The discriminant doubles as the persisted toggle key. Identities below
/// the configured always-on threshold (see [`DispatchConfig`]) bypass the
/// enablement check entirely. Ordering exists only for user-facing
/// enumeration and has no effect on evaluation.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Preset {
    WarriorStormsPathCombo = 2101,
    WarriorStormsEyeCombo = 2102,

    AstrologianBeneficDowngrade = 3301,
    AstrologianCardsOnDraw = 3302,
    AstrologianSwiftcastRaiser = 3303,
    AstrologianDrawTiebreak = 3304,
    AstrologianSleeveDraw = 3305,
}

impl Preset {
    /// The job that owns rules declared under this preset.
    ///
    /// Resolved once when the registry is compiled, never per call. This is
    /// the explicit construction-time table that stands in for attribute
    /// metadata lookup.
    pub const fn job(self) -> JobId {
        match self {
            Preset::WarriorStormsPathCombo | Preset::WarriorStormsEyeCombo => rules::warrior::JOB,

            Preset::AstrologianBeneficDowngrade
            | Preset::AstrologianCardsOnDraw
            | Preset::AstrologianSwiftcastRaiser
            | Preset::AstrologianDrawTiebreak
            | Preset::AstrologianSleeveDraw => rules::astrologian::JOB,
        }
    }

    /// Numeric identity used for the always-on threshold comparison.
    pub const fn id(self) -> u16 {
        self as u16
    }
}

// --- Attempts and rules -----------------------------------------------------------

/// One action attempt as delivered by the host, once per input.
#[derive(Debug, Clone, Copy)]
pub struct Attempt {
    /// The action the player is trying to execute.
    pub action: ActionId,
    /// The last action executed in the ongoing combo chain.
    pub last_action: ActionId,
    /// Seconds elapsed in the chain; zero or negative means no chain is in
    /// progress.
    pub combo_time: f32,
    /// Current character level.
    pub level: u8,
}

/// Fault raised inside a single rule's decision function.
///
/// These never escape the dispatcher: the failure boundary logs them and
/// treats the rule as having produced no substitution for this attempt.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// The state query returned a job gauge that does not belong to the
    /// rule's job.
    #[error("job gauge does not belong to {0}")]
    GaugeMismatch(JobId),

    /// The rule observed state it cannot interpret.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
}

/// Decision function of a rule: maps an attempt plus a state snapshot to a
/// possibly-different action. Returning `ActionId::NONE` or the attempted
/// action means "no change". Must be pure over its inputs.
pub type Decide = Box<dyn Fn(&Attempt, &Snapshot<'_>) -> Result<ActionId, RuleError> + Send + Sync>;

/// A combo rule: a name, a preset identity (which carries the owning job),
/// an optional trigger set, and a decision function.
///
/// Rules are built once at process start (usually via the [`combo!`] macro)
/// and registered in a flat, ordered collection; the first rule to yield a
/// change wins. An empty trigger set means "applies to any action attempted
/// by this rule's job".
pub struct ComboRule {
    pub name: &'static str,
    pub preset: Preset,
    pub triggers: &'static [ActionId],
    pub decide: Decide,
}

impl fmt::Debug for ComboRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComboRule")
            .field("name", &self.name)
            .field("preset", &self.preset)
            .field("triggers", &self.triggers)
            .field("decide", &"<function>")
            .finish()
    }
}
