use crate::api::BoardState;
use crate::domain::{Card, ColumnId, KanbanError};
use crate::services::CardService;

pub fn open_add_card(state: &mut BoardState, column: ColumnId) {
    state.column_mut(column).add_card.open();
}

pub fn close_add_card(state: &mut BoardState, column: ColumnId) {
    state.column_mut(column).add_card.close();
}

pub fn set_add_card_text(state: &mut BoardState, column: ColumnId, text: &str) {
    state.column_mut(column).add_card.set_text(text);
}

/// Creates a card from the column's open form. Blank text leaves the form
/// open and the board unchanged.
pub fn submit_add_card(state: &mut BoardState, column: ColumnId) -> Option<Card> {
    let form = &state.columns[column.index()].add_card;
    if !form.is_adding() {
        tracing::debug!(column = column.as_str(), "Submit on closed add-card form");
        return None;
    }
    let text = form.text().to_string();

    match CardService::create_card(&mut state.board, state.ids.as_mut(), column, &text) {
        Ok(card) => {
            state.column_mut(column).add_card.reset();
            Some(card)
        }
        Err(KanbanError::BadRequest(_)) => None,
        Err(err) => {
            tracing::warn!(column = column.as_str(), error = %err, "Failed to add card");
            None
        }
    }
}
