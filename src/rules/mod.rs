//! The rule library: job-scoped combo rules plus the shared decision
//! algorithms they compose.
//!
//! Each job module declares its skill/level constants at the top (mirroring
//! the host game's data tables) and exposes `get() -> Vec<ComboRule>`. New
//! rules are added here and wired into [`get`]; registration order matters
//! because the dispatcher is first-match-wins.

pub mod astrologian;
pub mod common;
pub mod helpers;
pub mod warrior;

#[cfg(test)]
mod tests;

use crate::ComboRule;

/// All shipped rules, in registration order.
pub fn get() -> Vec<ComboRule> {
    let mut all = Vec::new();
    all.extend(astrologian::get());
    all.extend(warrior::get());
    all
}
