use crate::api::dto::{BoardResponse, ColumnView, DiscardView};
use crate::api::BoardState;

pub fn get_board(state: &BoardState) -> BoardResponse {
    BoardResponse {
        columns: state
            .columns
            .iter()
            .map(|column| ColumnView::from_state(&state.board, column))
            .collect(),
        discard: DiscardView {
            active: state.discard_active,
        },
    }
}
