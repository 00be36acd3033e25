//! Draw pile and discard pile.
//!
//! Both piles live in the [`ZoneManager`]; this module adds the deck rules
//! on top: drawing pops from the top of the draw pile, and an empty draw
//! pile is refilled by shuffling the discard pile into it.

pub mod presets;

use tracing::debug;

use crate::cards::{CardId, CardRegistry};
use crate::core::{DeckPreset, GameError, GameRng, Result};
use crate::zones::{Zone, ZoneManager, ZonePosition};

/// A successful draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Drawn {
    pub card: CardId,
    /// Cards shuffled back from the discard pile to make this draw possible.
    pub reshuffled: Option<usize>,
}

/// Register the preset's cards and place them in the draw pile.
///
/// Stacked presets keep their order (first element on top); the others
/// are shuffled with `rng`.
pub fn build_draw_pile(
    preset: &DeckPreset,
    registry: &mut CardRegistry,
    zones: &mut ZoneManager,
    rng: &mut GameRng,
) -> Vec<CardId> {
    let ids = registry.register_all(&presets::specs_for(preset));
    for &id in &ids {
        zones.add_to_zone(id, Zone::DrawPile, ZonePosition::Bottom);
    }
    if !matches!(preset, DeckPreset::Stacked(_)) {
        zones.shuffle_zone(Zone::DrawPile, rng);
    }
    ids
}

/// Shuffle the discard pile into the draw pile. Returns the number of cards moved.
///
/// `held` is a card still resolving; it stays on the discard pile.
pub fn reshuffle(zones: &mut ZoneManager, rng: &mut GameRng, held: Option<CardId>) -> usize {
    let mut moved = zones.move_all(Zone::DiscardPile, Zone::DrawPile);
    if let Some(card) = held.filter(|&card| zones.is_in_zone(card, Zone::DrawPile)) {
        zones.move_to_zone(card, Zone::DiscardPile, ZonePosition::Top);
        moved -= 1;
    }
    zones.shuffle_zone(Zone::DrawPile, rng);
    debug!(cards = moved, "discard pile reshuffled into draw pile");
    moved
}

/// Draw the top card into `dest`, reshuffling first if the draw pile is empty.
///
/// Fails with [`GameError::ResourceExhausted`] (and changes nothing) when
/// both piles are empty, counting `held` as absent from the discard pile.
pub fn draw_into(
    zones: &mut ZoneManager,
    rng: &mut GameRng,
    dest: Zone,
    held: Option<CardId>,
) -> Result<Drawn> {
    let mut reshuffled = None;
    if zones.zone_size(Zone::DrawPile) == 0 {
        let held_back = held.is_some_and(|card| zones.is_in_zone(card, Zone::DiscardPile));
        if zones.zone_size(Zone::DiscardPile) == usize::from(held_back) {
            return Err(GameError::ResourceExhausted);
        }
        reshuffled = Some(reshuffle(zones, rng, held));
    }
    let card = zones.pop_top(Zone::DrawPile).ok_or(GameError::ResourceExhausted)?;
    zones.add_to_zone(card, dest, ZonePosition::Top);
    Ok(Drawn { card, reshuffled })
}

/// Move a card onto the discard pile.
pub fn discard(zones: &mut ZoneManager, card: CardId) -> Option<Zone> {
    zones.move_to_zone(card, Zone::DiscardPile, ZonePosition::Top)
}
