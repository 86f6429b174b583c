use serde::{Deserialize, Serialize};

use crate::api::state::{AddCardForm, ColumnState};
use crate::domain::{Board, Card, ColumnId};
use crate::services::{slot_states, SlotState};

#[derive(Debug, Clone, Serialize)]
pub struct BoardResponse {
    pub columns: Vec<ColumnView>,
    pub discard: DiscardView,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnView {
    pub id: ColumnId,
    pub title: String,
    pub heading_color: String,
    pub count: usize,
    pub active: bool,
    pub cards: Vec<Card>,
    /// One entry per card plus the trailing slot.
    pub slots: Vec<SlotState>,
    pub add_card: AddCardView,
}

impl ColumnView {
    pub fn from_state(board: &Board, state: &ColumnState) -> Self {
        let cards: Vec<Card> = board.cards_in(state.column).into_iter().cloned().collect();
        let slot_count = cards.len() + 1;
        Self {
            id: state.column,
            title: state.column.title().to_string(),
            heading_color: state.column.heading_color().to_string(),
            count: cards.len(),
            active: state.active,
            slots: slot_states(slot_count, state.highlighted.filter(|i| *i < slot_count)),
            cards,
            add_card: AddCardView::from(&state.add_card),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddCardView {
    pub adding: bool,
    pub text: String,
}

impl From<&AddCardForm> for AddCardView {
    fn from(form: &AddCardForm) -> Self {
        Self {
            adding: form.is_adding(),
            text: form.text().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardView {
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum DropOutcome {
    Moved { card: Card },
    /// Dropped directly above itself.
    Unchanged,
    /// Missing payload or unknown card; nothing changed.
    Ignored { reason: String },
}
