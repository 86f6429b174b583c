use serde::{Deserialize, Serialize};

use crate::api::dto::{AddCardView, DropOutcome};
use crate::api::handlers;
use crate::api::state::BoardState;
use crate::domain::{Card, ColumnId, TransferPayload};
use crate::services::{stacked_slots, SlotDescriptor, SlotState};

/// Input events a render surface forwards to the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardEvent {
    DragStart {
        card_id: String,
    },
    DragOver {
        column: ColumnId,
        y: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        slots: Option<Vec<SlotDescriptor>>,
    },
    Drop {
        column: ColumnId,
        y: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        slots: Option<Vec<SlotDescriptor>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload: Option<TransferPayload>,
    },
    DragLeave {
        column: ColumnId,
    },
    OpenAddCard {
        column: ColumnId,
    },
    CloseAddCard {
        column: ColumnId,
    },
    SetAddCardText {
        column: ColumnId,
        text: String,
    },
    SubmitAddCard {
        column: ColumnId,
    },
    DiscardDragOver,
    DiscardDragLeave,
    DiscardDrop {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload: Option<TransferPayload>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventOutcome {
    DragStarted { payload: Option<TransferPayload> },
    Highlighted { slots: Vec<SlotState> },
    Dropped { outcome: DropOutcome },
    AddCard { column: ColumnId, form: AddCardView },
    CardAdded { card: Option<Card> },
    Discarded { card: Option<Card> },
    Cleared,
}

pub fn dispatch(state: &mut BoardState, event: BoardEvent) -> EventOutcome {
    match event {
        BoardEvent::DragStart { card_id } => EventOutcome::DragStarted {
            payload: handlers::columns::drag_start(state, &card_id),
        },
        BoardEvent::DragOver { column, y, slots } => {
            let slots = slots.unwrap_or_else(|| derived_slots(state, column));
            EventOutcome::Highlighted {
                slots: handlers::columns::drag_over(state, column, y, &slots),
            }
        }
        BoardEvent::Drop {
            column,
            y,
            slots,
            payload,
        } => {
            let slots = slots.unwrap_or_else(|| derived_slots(state, column));
            let payload = payload.unwrap_or_default();
            EventOutcome::Dropped {
                outcome: handlers::columns::drop(state, column, y, &slots, &payload),
            }
        }
        BoardEvent::DragLeave { column } => {
            handlers::columns::drag_leave(state, column);
            EventOutcome::Cleared
        }
        BoardEvent::OpenAddCard { column } => {
            handlers::cards::open_add_card(state, column);
            add_card_outcome(state, column)
        }
        BoardEvent::CloseAddCard { column } => {
            handlers::cards::close_add_card(state, column);
            add_card_outcome(state, column)
        }
        BoardEvent::SetAddCardText { column, text } => {
            handlers::cards::set_add_card_text(state, column, &text);
            add_card_outcome(state, column)
        }
        BoardEvent::SubmitAddCard { column } => EventOutcome::CardAdded {
            card: handlers::cards::submit_add_card(state, column),
        },
        BoardEvent::DiscardDragOver => {
            handlers::discard::drag_over(state);
            EventOutcome::Cleared
        }
        BoardEvent::DiscardDragLeave => {
            handlers::discard::drag_leave(state);
            EventOutcome::Cleared
        }
        BoardEvent::DiscardDrop { payload } => EventOutcome::Discarded {
            card: handlers::discard::drop(state, &payload.unwrap_or_default()),
        },
    }
}

/// Slots for a column laid out at the configured pitch, used when the
/// render surface sends no geometry of its own.
fn derived_slots(state: &BoardState, column: ColumnId) -> Vec<SlotDescriptor> {
    stacked_slots(&state.board.cards_in(column), 0.0, state.config.slot_pitch)
}

fn add_card_outcome(state: &BoardState, column: ColumnId) -> EventOutcome {
    EventOutcome::AddCard {
        column,
        form: AddCardView::from(&state.column(column).add_card),
    }
}
