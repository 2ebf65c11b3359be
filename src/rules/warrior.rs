//! Warrior rules.
//!
//! Warrior (21) is an advanced job of Marauder (3); both job ids reach these
//! rules through the registry's class normalization.

use super::helpers::simple_chain;
use crate::{ActionId, ComboRule, JobId, Preset};

pub const JOB: JobId = JobId(21);

pub const HEAVY_SWING: ActionId = ActionId(31);
pub const MAUL: ActionId = ActionId(37);
pub const STORMS_PATH: ActionId = ActionId(42);
pub const STORMS_EYE: ActionId = ActionId(45);

pub mod levels {
    pub const MAUL: u8 = 4;
    pub const STORMS_PATH: u8 = 26;
    pub const STORMS_EYE: u8 = 50;
}

pub fn get() -> Vec<ComboRule> {
    vec![storms_path_combo(), storms_eye_combo()]
}

/// Storm's Path replaces itself with the next step of its chain.
fn storms_path_combo() -> ComboRule {
    combo! {
        name: "warrior storm's path combo",
        preset: Preset::WarriorStormsPathCombo,
        triggers: [STORMS_PATH],
        decide: |attempt, _snapshot| {
            Ok(simple_chain(
                attempt.level,
                attempt.last_action,
                attempt.combo_time,
                &[(1, HEAVY_SWING), (levels::MAUL, MAUL), (levels::STORMS_PATH, STORMS_PATH)],
            ))
        },
    }
}

/// Storm's Eye replaces itself with the next step of its chain.
fn storms_eye_combo() -> ComboRule {
    combo! {
        name: "warrior storm's eye combo",
        preset: Preset::WarriorStormsEyeCombo,
        triggers: [STORMS_EYE],
        decide: |attempt, _snapshot| {
            Ok(simple_chain(
                attempt.level,
                attempt.last_action,
                attempt.combo_time,
                &[(1, HEAVY_SWING), (levels::MAUL, MAUL), (levels::STORMS_EYE, STORMS_EYE)],
            ))
        },
    }
}
