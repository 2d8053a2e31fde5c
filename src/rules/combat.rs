//! Simultaneous lane combat.
//!
//! Every slot pair is resolved independently from a pre-combat health
//! snapshot, so the order in which slots or sides are processed never
//! changes the result.
//!
//! Per slot `i`:
//!
//! - both occupied: each card loses the other's attack
//! - only the attacker's side occupied: the scale moves by that card's attack
//!   (negative for the player, positive for the enemy)
//! - only the defender's side occupied, or both empty: nothing
//!
//! Cards at `<= 0` health are removed from their slot. Arithmetic saturates
//! at the `i32` bounds.

use log::trace;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;
use crate::core::{SideId, SideMap};
use crate::zones::Board;

/// One card's part in a clash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub card: CardId,
    pub attack: i32,
    pub health_before: i32,
    /// May be `<= 0`, in which case the card was removed.
    pub health_after: i32,
}

impl Combatant {
    #[must_use]
    pub fn died(&self) -> bool {
        self.health_after <= 0
    }
}

/// What happened in one slot pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotOutcome {
    /// Neither side had a card.
    Empty,
    /// Both sides had a card and traded damage.
    Clash { player: Combatant, enemy: Combatant },
    /// The attacker's card faced an empty slot and hit the scale.
    Unopposed { side: SideId, card: CardId, damage: i32 },
    /// A lone card on the defending side; it does not attack off-turn.
    Idle { side: SideId, card: CardId },
}

/// Result of one combat resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatReport {
    /// The side whose unopposed cards scored.
    pub attacker: SideId,
    /// One entry per slot, ascending.
    pub slots: Vec<SlotOutcome>,
    /// Net change applied to the scale.
    pub scale_delta: i32,
    /// Scale value after this resolution.
    pub scale_after: i32,
    /// Slots emptied by death, per side, ascending.
    pub deaths: SideMap<SmallVec<[usize; 4]>>,
}

impl CombatReport {
    /// Total cards that died on both sides.
    #[must_use]
    pub fn death_count(&self) -> usize {
        self.deaths.iter().map(|(_, d)| d.len()).sum()
    }
}

/// Resolve combat between two boards.
///
/// Mutates both boards (damage and removals) and returns the report. The
/// caller owns the scale and applies `scale_delta`; `scale_after` is left
/// at `scale_delta` for the caller to overwrite.
pub fn resolve_combat(player: &mut Board, enemy: &mut Board, attacker: SideId) -> CombatReport {
    let slot_count = player.slot_count().min(enemy.slot_count());

    let mut slots = Vec::with_capacity(slot_count);
    let mut scale_delta: i32 = 0;

    for slot in 0..slot_count {
        let outcome = match (player.get(slot), enemy.get(slot)) {
            (Some(p), Some(e)) => {
                let player_side = Combatant {
                    card: p.id(),
                    attack: p.attack(),
                    health_before: p.current_health(),
                    health_after: p.current_health().saturating_sub(e.attack()),
                };
                let enemy_side = Combatant {
                    card: e.id(),
                    attack: e.attack(),
                    health_before: e.current_health(),
                    health_after: e.current_health().saturating_sub(p.attack()),
                };
                trace!(
                    "slot {}: {} (atk {}) vs {} (atk {})",
                    slot,
                    p.name(),
                    p.attack(),
                    e.name(),
                    e.attack()
                );
                SlotOutcome::Clash {
                    player: player_side,
                    enemy: enemy_side,
                }
            }
            (Some(card), None) | (None, Some(card)) => {
                let side = if player.is_occupied(slot) {
                    SideId::Player
                } else {
                    SideId::Enemy
                };
                if side == attacker {
                    let damage = card.attack();
                    scale_delta = scale_delta.saturating_add(side.scale_sign().saturating_mul(damage));
                    trace!("slot {}: {} hits the scale for {}", slot, card.name(), damage);
                    SlotOutcome::Unopposed {
                        side,
                        card: card.id(),
                        damage,
                    }
                } else {
                    SlotOutcome::Idle {
                        side,
                        card: card.id(),
                    }
                }
            }
            (None, None) => SlotOutcome::Empty,
        };
        slots.push(outcome);
    }

    let mut deaths: SideMap<SmallVec<[usize; 4]>> = SideMap::default();
    for (slot, outcome) in slots.iter().enumerate() {
        if let SlotOutcome::Clash { player: p, enemy: e } = outcome {
            apply_health(player, slot, p, &mut deaths[SideId::Player]);
            apply_health(enemy, slot, e, &mut deaths[SideId::Enemy]);
        }
    }

    CombatReport {
        attacker,
        slots,
        scale_delta,
        scale_after: scale_delta,
        deaths,
    }
}

fn apply_health(board: &mut Board, slot: usize, combatant: &Combatant, deaths: &mut SmallVec<[usize; 4]>) {
    if combatant.died() {
        board.remove(slot);
        deaths.push(slot);
    } else if let Some(card) = board.get_mut(slot) {
        card.set_health(combatant.health_after);
    }
}
