use crate::api::BoardState;
use crate::domain::{Card, TransferPayload};
use crate::services::CardService;

pub fn drag_over(state: &mut BoardState) {
    state.discard_active = true;
}

pub fn drag_leave(state: &mut BoardState) {
    state.discard_active = false;
}

/// Removes the dragged card from the board, without confirmation.
pub fn drop(state: &mut BoardState, payload: &TransferPayload) -> Option<Card> {
    state.discard_active = false;

    let Some(card_id) = payload.card_id() else {
        tracing::debug!("Discard drop without card id in payload");
        return None;
    };

    match CardService::delete_card(&mut state.board, card_id) {
        Ok(card) => Some(card),
        Err(err) => {
            tracing::debug!(card_id, error = %err, "Discard drop ignored");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::Config;
    use crate::domain::CARD_ID_KEY;

    #[test]
    fn test_drop_removes_dragged_card() {
        let mut state = BoardState::new(Arc::new(Config::default()));
        drag_over(&mut state);
        assert!(state.discard_active);

        let mut payload = TransferPayload::new();
        payload.set_data(CARD_ID_KEY, "3");
        let removed = drop(&mut state, &payload).unwrap();

        assert_eq!(removed.id, "3");
        assert_eq!(state.board.len(), 9);
        assert!(!state.discard_active);
    }

    #[test]
    fn test_drop_unknown_card_is_noop() {
        let mut state = BoardState::new(Arc::new(Config::default()));
        let mut payload = TransferPayload::new();
        payload.set_data(CARD_ID_KEY, "404");
        assert!(drop(&mut state, &payload).is_none());
        assert_eq!(state.board.len(), 10);
    }
}
