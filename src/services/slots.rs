use serde::{Deserialize, Serialize};

use crate::domain::Card;

/// An insertion point inside a column. Every card has one directly above
/// it; each column also ends with a trailing slot whose `before` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotDescriptor {
    /// Vertical position of the slot's top edge, in the same coordinate
    /// space as the pointer.
    pub top: f64,
    /// Card the slot sits above.
    #[serde(default)]
    pub before: Option<String>,
}

impl SlotDescriptor {
    pub fn before(top: f64, card_id: impl Into<String>) -> Self {
        Self {
            top,
            before: Some(card_id.into()),
        }
    }

    pub fn trailing(top: f64) -> Self {
        Self { top, before: None }
    }

    pub fn is_trailing(&self) -> bool {
        self.before.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotState {
    Highlighted,
    Idle,
}

/// Picks the slot a pointer at `y` resolves to.
///
/// Each slot's anchor sits `bias` below its top. The winner is the slot with
/// the greatest negative `y - anchor`, scanning top to bottom so the first of
/// equal candidates wins. When the pointer has crossed every anchor the last
/// slot is used. Returns `None` only for an empty slot list.
pub fn nearest_slot(slots: &[SlotDescriptor], y: f64, bias: f64) -> Option<usize> {
    let last = slots.len().checked_sub(1)?;

    let (_, index) = slots.iter().enumerate().fold(
        (f64::NEG_INFINITY, last),
        |(closest, index), (i, slot)| {
            let offset = y - (slot.top + bias);
            if offset < 0.0 && offset > closest {
                (offset, i)
            } else {
                (closest, index)
            }
        },
    );

    Some(index)
}

/// Render state for `len` slots with at most one highlighted.
pub fn slot_states(len: usize, highlighted: Option<usize>) -> Vec<SlotState> {
    (0..len)
        .map(|i| {
            if Some(i) == highlighted {
                SlotState::Highlighted
            } else {
                SlotState::Idle
            }
        })
        .collect()
}

/// Slots for a column whose cards are stacked from `origin` at a fixed
/// `pitch`, followed by the trailing slot.
pub fn stacked_slots(cards: &[&Card], origin: f64, pitch: f64) -> Vec<SlotDescriptor> {
    let mut slots: Vec<SlotDescriptor> = cards
        .iter()
        .enumerate()
        .map(|(i, card)| SlotDescriptor::before(origin + pitch * i as f64, card.id.clone()))
        .collect();
    slots.push(SlotDescriptor::trailing(
        origin + pitch * cards.len() as f64,
    ));
    slots
}
