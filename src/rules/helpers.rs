//! Shared decision algorithms.
//!
//! Stateless pure functions used by several job modules. No rule calls
//! another rule; anything two rules both need lives here.

use tracing::trace;

use crate::state::{Cooldown, Snapshot};
use crate::ActionId;

/// Pick among `candidates` by cooldown, biased toward keeping `original`.
///
/// Reduces the sequence left to right with a binary comparison:
///
/// - neither on cooldown: keep `original` if that is one of the pair,
///   otherwise prefer the later candidate;
/// - both on cooldown: prefer the smaller remaining time;
/// - exactly one on cooldown: prefer the ready one.
///
/// This models "use the skill on the shortest timer, but don't flip-flop
/// away from a ready original choice". An empty candidate list yields
/// `original` unchanged.
pub fn pick_by_cooldown(
    snapshot: &Snapshot<'_>,
    original: ActionId,
    candidates: &[ActionId],
) -> ActionId {
    let mut iter = candidates.iter().copied();
    let Some(first) = iter.next() else {
        return original;
    };

    let mut best = (first, snapshot.cooldown(first));
    for action in iter {
        best = compare(original, best, (action, snapshot.cooldown(action)));
    }

    trace!(selected = %best.0, "cooldown tie-break");
    best.0
}

fn compare(
    original: ActionId,
    a: (ActionId, Cooldown),
    b: (ActionId, Cooldown),
) -> (ActionId, Cooldown) {
    let choice = if !a.1.active && !b.1.active {
        // Both ready: the original wins if present, else the later entry.
        if a.0 == original { a } else { b }
    } else if a.1.active && b.1.active {
        if a.1.remaining < b.1.remaining { a } else { b }
    } else if a.1.active {
        b
    } else {
        a
    };

    trace!(a = %a.0, b = %b.0, chosen = %choice.0, "cooldown compare");
    choice
}

/// Infer the next step of a linear combo chain.
///
/// `sequence` lists `(min_level, action)` pairs from base move to finisher.
/// With no chain in progress (`combo_time <= 0`) the base move is returned.
/// Otherwise the sequence is scanned from the finisher backwards: the first
/// step whose predecessor was just executed and whose level gate is met
/// wins. If nothing matches, fall back to the base move.
pub fn simple_chain(
    level: u8,
    last_action: ActionId,
    combo_time: f32,
    sequence: &[(u8, ActionId)],
) -> ActionId {
    if combo_time > 0.0 {
        for i in (1..sequence.len()).rev() {
            let (gate, action) = sequence[i];
            if level >= gate && sequence[i - 1].1 == last_action {
                return action;
            }
        }
    }

    sequence.first().map_or(ActionId::NONE, |step| step.1)
}
