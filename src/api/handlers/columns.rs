use crate::api::dto::DropOutcome;
use crate::api::BoardState;
use crate::domain::{ColumnId, TransferPayload, CARD_ID_KEY, COLUMN_KEY};
use crate::services::{nearest_slot, slot_states, CardService, MoveOutcome, SlotDescriptor, SlotState};

/// Payload to attach to a drag that starts on `card_id`. The board is not
/// touched.
pub fn drag_start(state: &BoardState, card_id: &str) -> Option<TransferPayload> {
    let Some(card) = state.board.find(card_id) else {
        tracing::debug!(card_id, "Drag started on unknown card");
        return None;
    };

    let mut payload = TransferPayload::new();
    payload.set_data(CARD_ID_KEY, card.id.as_str());
    payload.set_data(COLUMN_KEY, card.column.as_str());
    Some(payload)
}

pub fn drag_over(
    state: &mut BoardState,
    column: ColumnId,
    y: f64,
    slots: &[SlotDescriptor],
) -> Vec<SlotState> {
    let target = nearest_slot(slots, y, state.config.slot_bias);

    let column_state = state.column_mut(column);
    column_state.active = true;
    column_state.highlighted = target;

    slot_states(slots.len(), target)
}

pub fn drop(
    state: &mut BoardState,
    column: ColumnId,
    y: f64,
    slots: &[SlotDescriptor],
    payload: &TransferPayload,
) -> DropOutcome {
    let outcome = resolve_drop(state, column, y, slots, payload);
    state.column_mut(column).clear_drop_target();
    outcome
}

pub fn drag_leave(state: &mut BoardState, column: ColumnId) {
    state.column_mut(column).clear_drop_target();
}

fn resolve_drop(
    state: &mut BoardState,
    column: ColumnId,
    y: f64,
    slots: &[SlotDescriptor],
    payload: &TransferPayload,
) -> DropOutcome {
    let Some(card_id) = payload.card_id() else {
        tracing::debug!(column = column.as_str(), "Drop without card id in payload");
        return DropOutcome::Ignored {
            reason: "missing card id".into(),
        };
    };

    let before = nearest_slot(slots, y, state.config.slot_bias)
        .and_then(|i| slots[i].before.as_deref());

    match CardService::move_card(&mut state.board, card_id, column, before) {
        Ok(MoveOutcome::Moved(card)) => DropOutcome::Moved { card },
        Ok(MoveOutcome::Unchanged) => DropOutcome::Unchanged,
        Err(err) => {
            tracing::debug!(card_id, kind = err.kind(), error = %err, "Drop ignored");
            DropOutcome::Ignored {
                reason: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::Config;
    use crate::domain::{Board, Card};
    use crate::services::SequentialIdGenerator;

    fn state() -> BoardState {
        let board = Board::try_from_cards(vec![
            Card::new("a", "A", ColumnId::Todo),
            Card::new("b", "B", ColumnId::Todo),
            Card::new("x", "X", ColumnId::Done),
        ])
        .unwrap();
        BoardState::with_board(
            board,
            Box::new(SequentialIdGenerator::default()),
            Arc::new(Config::default()),
        )
    }

    fn todo_slots() -> Vec<SlotDescriptor> {
        vec![
            SlotDescriptor::before(0.0, "a"),
            SlotDescriptor::before(100.0, "b"),
            SlotDescriptor::trailing(200.0),
        ]
    }

    #[test]
    fn test_drag_start_carries_id_and_column() {
        let state = state();
        let payload = drag_start(&state, "b").unwrap();
        assert_eq!(payload.card_id(), Some("b"));
        assert_eq!(payload.origin_column(), Some("todo"));
    }

    #[test]
    fn test_drag_over_highlights_single_slot() {
        let mut state = state();
        let slots = drag_over(&mut state, ColumnId::Todo, 120.0, &todo_slots());
        assert_eq!(slots, vec![SlotState::Idle, SlotState::Highlighted, SlotState::Idle]);
        assert!(state.column(ColumnId::Todo).active);
        assert_eq!(state.column(ColumnId::Todo).highlighted, Some(1));
    }

    #[test]
    fn test_drop_clears_visual_state() {
        let mut state = state();
        drag_over(&mut state, ColumnId::Todo, 10.0, &todo_slots());
        let payload = drag_start(&state, "x").unwrap();
        let outcome = drop(&mut state, ColumnId::Todo, 10.0, &todo_slots(), &payload);

        assert!(matches!(outcome, DropOutcome::Moved { .. }));
        let ids: Vec<&str> = state.board.ids().collect();
        assert_eq!(ids, vec!["x", "a", "b"]);
        assert!(!state.column(ColumnId::Todo).active);
        assert_eq!(state.column(ColumnId::Todo).highlighted, None);
    }

    #[test]
    fn test_drop_without_payload_is_ignored() {
        let mut state = state();
        let before = state.board.clone();
        let outcome = drop(&mut state, ColumnId::Todo, 10.0, &todo_slots(), &TransferPayload::new());
        assert!(matches!(outcome, DropOutcome::Ignored { .. }));
        assert_eq!(state.board, before);
    }

    #[test]
    fn test_drag_leave_only_clears_visual_state() {
        let mut state = state();
        let before = state.board.clone();
        drag_over(&mut state, ColumnId::Todo, 10.0, &todo_slots());
        drag_leave(&mut state, ColumnId::Todo);
        assert!(!state.column(ColumnId::Todo).active);
        assert_eq!(state.board, before);
    }
}
