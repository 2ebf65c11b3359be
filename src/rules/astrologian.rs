//! Astrologian rules.

use super::{common, helpers::pick_by_cooldown};
use crate::state::{Card, JobGauge, Snapshot};
use crate::{ActionId, ComboRule, JobId, Preset, RuleError};

pub const JOB: JobId = JobId(33);

pub const ASCEND: ActionId = ActionId(3603);
pub const BENEFIC: ActionId = ActionId(3594);
pub const BENEFIC_2: ActionId = ActionId(3610);
pub const DRAW: ActionId = ActionId(3590);
pub const MINOR_ARCANA: ActionId = ActionId(7443);
pub const SLEEVE_DRAW: ActionId = ActionId(7448);
pub const PLAY: ActionId = ActionId(17055);

pub mod levels {
    pub const BENEFIC_2: u8 = 26;
    pub const MINOR_ARCANA: u8 = 50;
    pub const SLEEVE_DRAW: u8 = 70;
}

pub fn get() -> Vec<ComboRule> {
    vec![
        swiftcast_raiser(),
        cards_on_draw(),
        sleeve_draw(),
        draw_tiebreak(),
        benefic_downgrade(),
    ]
}

/// The card currently held, or a gauge-mismatch fault if the state query
/// handed us some other job's gauge.
fn drawn_card(snapshot: &Snapshot<'_>) -> Result<Option<Card>, RuleError> {
    match snapshot.gauge() {
        JobGauge::Astrologian { drawn } => Ok(drawn),
        _ => Err(RuleError::GaugeMismatch(JOB)),
    }
}

/// Raising without a ready Swiftcast wastes the long cast. Replace Ascend
/// with Swiftcast when it is ready, so the follow-up Ascend is instant.
fn swiftcast_raiser() -> ComboRule {
    combo! {
        name: "astrologian swiftcast raiser",
        preset: Preset::AstrologianSwiftcastRaiser,
        triggers: [ASCEND],
        decide: |attempt, snapshot| {
            if common::should_swiftcast(snapshot) {
                return Ok(common::SWIFTCAST);
            }
            Ok(attempt.action)
        },
    }
}

/// Play becomes Draw while no card is held.
fn cards_on_draw() -> ComboRule {
    combo! {
        name: "astrologian cards on draw",
        preset: Preset::AstrologianCardsOnDraw,
        triggers: [PLAY],
        decide: |attempt, snapshot| {
            if drawn_card(snapshot)?.is_none() {
                return Ok(DRAW);
            }
            Ok(attempt.action)
        },
    }
}

/// Minor Arcana becomes Sleeve Draw while no card is held.
fn sleeve_draw() -> ComboRule {
    combo! {
        name: "astrologian sleeve draw",
        preset: Preset::AstrologianSleeveDraw,
        triggers: [MINOR_ARCANA],
        decide: |attempt, snapshot| {
            if drawn_card(snapshot)?.is_none() && attempt.level >= levels::SLEEVE_DRAW {
                return Ok(SLEEVE_DRAW);
            }
            Ok(attempt.action)
        },
    }
}

/// Draw becomes whichever of Draw/Sleeve Draw is back sooner.
fn draw_tiebreak() -> ComboRule {
    combo! {
        name: "astrologian draw tie-break",
        preset: Preset::AstrologianDrawTiebreak,
        triggers: [DRAW],
        decide: |attempt, snapshot| {
            if attempt.level >= levels::SLEEVE_DRAW {
                return Ok(pick_by_cooldown(snapshot, DRAW, &[DRAW, SLEEVE_DRAW]));
            }
            Ok(attempt.action)
        },
    }
}

/// Benefic II downgrades to Benefic below its unlock level.
fn benefic_downgrade() -> ComboRule {
    combo! {
        name: "astrologian benefic downgrade",
        preset: Preset::AstrologianBeneficDowngrade,
        triggers: [BENEFIC_2],
        decide: |attempt, _snapshot| {
            if attempt.level < levels::BENEFIC_2 {
                return Ok(BENEFIC);
            }
            Ok(attempt.action)
        },
    }
}
