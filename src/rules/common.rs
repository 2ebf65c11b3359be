//! Skills and status effects shared across jobs.

use crate::state::Snapshot;
use crate::{ActionId, EffectId};

pub const SWIFTCAST: ActionId = ActionId(7561);

pub mod buffs {
    use crate::EffectId;

    pub const SWIFTCAST: EffectId = EffectId(167);
    pub const DUALCAST: EffectId = EffectId(1249);
    pub const LOST_CHAINSPELL: EffectId = EffectId(2560);
}

/// Whether using Swiftcast now would actually shorten the next cast:
/// the enabler is ready and no equivalent fast-cast effect is already up.
pub fn should_swiftcast(snapshot: &Snapshot<'_>) -> bool {
    snapshot.is_off_cooldown(SWIFTCAST)
        && !snapshot.self_has_effect(buffs::LOST_CHAINSPELL)
        && !snapshot.self_has_effect(buffs::DUALCAST)
}

/// Whether the next cast is already instant.
pub fn is_fastcasting(snapshot: &Snapshot<'_>) -> bool {
    const FAST_CAST_EFFECTS: [EffectId; 3] =
        [buffs::SWIFTCAST, buffs::DUALCAST, buffs::LOST_CHAINSPELL];
    FAST_CAST_EFFECTS.iter().any(|&effect| snapshot.self_has_effect(effect))
}
