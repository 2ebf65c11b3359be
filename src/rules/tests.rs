//! Behavior tests for the shipped rules, driven through the dispatcher.

use crate::engine::Dispatcher;
use crate::rules::{self, astrologian, common, warrior};
use crate::state::fakes::{FakeEnablement, FakeState};
use crate::state::{Card, JobGauge};
use crate::{ActionId, Attempt, DispatchConfig, JobId, base_class};

fn engine(state: FakeState) -> Dispatcher<'static, FakeState, FakeEnablement> {
    crate::dispatcher(state, FakeEnablement::all())
}

fn attempt_for(action: ActionId, level: u8) -> Attempt {
    Attempt { action, last_action: ActionId::NONE, combo_time: 0.0, level }
}

fn chained(action: ActionId, last_action: ActionId, combo_time: f32, level: u8) -> Attempt {
    Attempt { action, last_action, combo_time, level }
}

fn ast_state(level: u8) -> FakeState {
    let mut state = FakeState::with_player(astrologian::JOB, level);
    state.gauge = JobGauge::Astrologian { drawn: None };
    state
}

// --- Astrologian ---------------------------------------------------------------

#[test]
fn swiftcast_raiser_fires_when_ready() {
    let result = engine(ast_state(80)).attempt(&attempt_for(astrologian::ASCEND, 80));
    assert_eq!(result, Some(common::SWIFTCAST));
}

#[test]
fn swiftcast_raiser_waits_for_cooldown() {
    let mut state = ast_state(80);
    state.set_cooldown(common::SWIFTCAST, 30.0);
    assert_eq!(engine(state).attempt(&attempt_for(astrologian::ASCEND, 80)), None);
}

#[test]
fn swiftcast_raiser_respects_lost_chainspell() {
    let mut state = ast_state(80);
    state.add_self_status(common::buffs::LOST_CHAINSPELL);
    assert_eq!(engine(state).attempt(&attempt_for(astrologian::ASCEND, 80)), None);
}

#[test]
fn play_becomes_draw_without_a_card() {
    let result = engine(ast_state(80)).attempt(&attempt_for(astrologian::PLAY, 80));
    assert_eq!(result, Some(astrologian::DRAW));
}

#[test]
fn play_stays_play_with_a_card_held() {
    let mut state = ast_state(80);
    state.gauge = JobGauge::Astrologian { drawn: Some(Card::Balance) };
    assert_eq!(engine(state).attempt(&attempt_for(astrologian::PLAY, 80)), None);
}

#[test]
fn minor_arcana_becomes_sleeve_draw_at_level() {
    let result = engine(ast_state(70)).attempt(&attempt_for(astrologian::MINOR_ARCANA, 70));
    assert_eq!(result, Some(astrologian::SLEEVE_DRAW));
}

#[test]
fn minor_arcana_unchanged_below_sleeve_draw_level() {
    let result = engine(ast_state(60)).attempt(&attempt_for(astrologian::MINOR_ARCANA, 60));
    assert_eq!(result, None);
}

#[test]
fn gauge_mismatch_is_contained_as_no_substitution() {
    // A misbehaving host reports the wrong gauge; the rule faults, the
    // boundary swallows it, and the attempt passes through.
    let mut state = FakeState::with_player(astrologian::JOB, 80);
    state.gauge = JobGauge::None;
    assert_eq!(engine(state).attempt(&attempt_for(astrologian::PLAY, 80)), None);
}

#[test]
fn draw_tiebreak_picks_sooner_recharge() {
    let mut state = ast_state(80);
    state.set_cooldown(astrologian::DRAW, 20.0);
    state.set_cooldown(astrologian::SLEEVE_DRAW, 5.0);
    let result = engine(state).attempt(&attempt_for(astrologian::DRAW, 80));
    assert_eq!(result, Some(astrologian::SLEEVE_DRAW));
}

#[test]
fn draw_tiebreak_keeps_ready_draw() {
    let mut state = ast_state(80);
    state.set_cooldown(astrologian::SLEEVE_DRAW, 5.0);
    assert_eq!(engine(state).attempt(&attempt_for(astrologian::DRAW, 80)), None);
}

#[test]
fn benefic_downgrade_applies_below_unlock_level() {
    let cases: &[(u8, Option<ActionId>)] = &[
        (1, Some(astrologian::BENEFIC)),
        (20, Some(astrologian::BENEFIC)),
        (25, Some(astrologian::BENEFIC)),
        (26, None),
        (80, None),
    ];
    for &(level, expected) in cases {
        let result = engine(ast_state(level)).attempt(&attempt_for(astrologian::BENEFIC_2, level));
        assert_eq!(result, expected, "level {level}");
    }
}

// --- Warrior ------------------------------------------------------------------

#[test]
fn storms_path_finisher_is_reported_as_no_change() {
    // The inferred step equals the attempted action, so the dispatcher
    // reports no substitution rather than echoing it back.
    let state = FakeState::with_player(warrior::JOB, 60);
    let result = engine(state).attempt(&chained(warrior::STORMS_PATH, warrior::MAUL, 2.0, 60));
    assert_eq!(result, None);
}

#[test]
fn storms_path_chain_steps_through_the_sequence() {
    let state = FakeState::with_player(warrior::JOB, 60);
    let engine = engine(state);

    // Chain start.
    assert_eq!(
        engine.attempt(&chained(warrior::STORMS_PATH, ActionId::NONE, 0.0, 60)),
        Some(warrior::HEAVY_SWING)
    );
    // After Heavy Swing.
    assert_eq!(
        engine.attempt(&chained(warrior::STORMS_PATH, warrior::HEAVY_SWING, 4.0, 60)),
        Some(warrior::MAUL)
    );
}

#[test]
fn storms_path_chain_resets_after_timeout() {
    let state = FakeState::with_player(warrior::JOB, 60);
    let result = engine(state).attempt(&chained(warrior::STORMS_PATH, warrior::MAUL, 0.0, 60));
    assert_eq!(result, Some(warrior::HEAVY_SWING));
}

#[test]
fn storms_path_level_gate_falls_back_to_base() {
    // Level 10 knows Maul but not Storm's Path.
    let state = FakeState::with_player(warrior::JOB, 10);
    let result = engine(state).attempt(&chained(warrior::STORMS_PATH, warrior::MAUL, 2.0, 10));
    assert_eq!(result, Some(warrior::HEAVY_SWING));
}

#[test]
fn storms_eye_chain_advances() {
    let state = FakeState::with_player(warrior::JOB, 60);
    let result = engine(state).attempt(&chained(warrior::STORMS_EYE, warrior::HEAVY_SWING, 3.0, 60));
    assert_eq!(result, Some(warrior::MAUL));
}

#[test]
fn marauder_reaches_warrior_rules_via_base_class() {
    let marauder = base_class(warrior::JOB);
    assert_eq!(marauder, JobId(3));

    let state = FakeState::with_player(marauder, 30);
    let result = engine(state).attempt(&chained(warrior::STORMS_PATH, warrior::HEAVY_SWING, 2.0, 30));
    assert_eq!(result, Some(warrior::MAUL));
}

// --- Cross-cutting ---------------------------------------------------------------

#[test]
fn wrong_job_gets_no_astrologian_substitutions() {
    let state = FakeState::with_player(warrior::JOB, 80);
    assert_eq!(engine(state).attempt(&attempt_for(astrologian::BENEFIC_2, 20)), None);
}

#[test]
fn disabled_rules_do_not_fire() {
    let state = ast_state(20);
    let engine = crate::dispatcher(state, FakeEnablement::none());
    assert_eq!(engine.attempt(&attempt_for(astrologian::BENEFIC_2, 20)), None);
}

#[test]
fn enablement_is_checked_per_preset() {
    use crate::Preset;

    let engine = crate::dispatcher(
        ast_state(20),
        FakeEnablement::only(&[Preset::AstrologianBeneficDowngrade]),
    );
    // The enabled rule fires...
    assert_eq!(
        engine.attempt(&attempt_for(astrologian::BENEFIC_2, 20)),
        Some(astrologian::BENEFIC)
    );
    // ...while its disabled neighbors stay inert.
    assert_eq!(engine.attempt(&attempt_for(astrologian::PLAY, 20)), None);
}

#[test]
fn threshold_turns_every_preset_into_a_built_in() {
    let state = ast_state(20);
    let engine = crate::dispatcher_with(
        state,
        FakeEnablement::none(),
        DispatchConfig { always_on_below: u16::MAX },
    );
    assert_eq!(engine.attempt(&attempt_for(astrologian::BENEFIC_2, 20)), Some(astrologian::BENEFIC));
}

#[test]
fn registration_order_is_stable() {
    let all = rules::get();
    let names: Vec<&str> = all.iter().map(|r| r.name).collect();
    assert_eq!(names.first().copied(), Some("astrologian swiftcast raiser"));
    assert_eq!(names.last().copied(), Some("warrior storm's eye combo"));
}
