use crate::domain::{Board, Card, ColumnId, KanbanError};
use crate::services::ids::IdGenerator;

const MAX_ID_ATTEMPTS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved(Card),
    /// Dropped directly above itself; the board is untouched.
    Unchanged,
}

pub struct CardService;

impl CardService {
    // ── Card lifecycle ─────────────────────────────────────────

    pub fn create_card(
        board: &mut Board,
        ids: &mut dyn IdGenerator,
        column: ColumnId,
        title: &str,
    ) -> Result<Card, KanbanError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(KanbanError::BadRequest("Card title is empty".into()));
        }

        let id = Self::fresh_id(board, ids)?;
        let card = Card::new(id, title, column);

        let mut updated = board.cards().to_vec();
        updated.push(card.clone());
        board.replace_cards(updated);

        tracing::info!(card_id = card.id.as_str(), column = column.as_str(), "Card created");
        Ok(card)
    }

    /// Moves `card_id` into `column`, directly above `before` or at the end
    /// of the board when `before` is `None` or no longer on the board.
    pub fn move_card(
        board: &mut Board,
        card_id: &str,
        column: ColumnId,
        before: Option<&str>,
    ) -> Result<MoveOutcome, KanbanError> {
        if before == Some(card_id) {
            return Ok(MoveOutcome::Unchanged);
        }

        let existing = board
            .find(card_id)
            .cloned()
            .ok_or_else(|| KanbanError::NotFound(format!("Card not found: {}", card_id)))?;
        let from_column = existing.column;
        let moved = Card { column, ..existing };

        let mut updated: Vec<Card> = board
            .cards()
            .iter()
            .filter(|c| c.id != card_id)
            .cloned()
            .collect();

        match before.and_then(|id| updated.iter().position(|c| c.id == id)) {
            Some(index) => updated.insert(index, moved.clone()),
            None => updated.push(moved.clone()),
        }

        board.replace_cards(updated);

        if from_column != column {
            tracing::info!(
                card_id,
                from_column = from_column.as_str(),
                to_column = column.as_str(),
                "Card moved between columns"
            );
        } else {
            tracing::debug!(card_id, column = column.as_str(), "Card reordered");
        }

        Ok(MoveOutcome::Moved(moved))
    }

    pub fn delete_card(board: &mut Board, card_id: &str) -> Result<Card, KanbanError> {
        let index = board
            .cards()
            .iter()
            .position(|c| c.id == card_id)
            .ok_or_else(|| KanbanError::NotFound(format!("Card not found: {}", card_id)))?;

        let mut updated = board.cards().to_vec();
        let removed = updated.remove(index);
        board.replace_cards(updated);

        tracing::info!(card_id, column = removed.column.as_str(), "Card discarded");
        Ok(removed)
    }

    fn fresh_id(board: &Board, ids: &mut dyn IdGenerator) -> Result<String, KanbanError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = ids.next_id();
            if !board.contains(&id) {
                return Ok(id);
            }
            tracing::warn!(card_id = id.as_str(), "Generated card id already in use, retrying");
        }
        Err(KanbanError::Conflict(format!(
            "No unused card id after {} attempts",
            MAX_ID_ATTEMPTS
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ids::SequentialIdGenerator;

    fn board() -> Board {
        Board::try_from_cards(vec![
            Card::new("a", "A", ColumnId::Todo),
            Card::new("b", "B", ColumnId::Doing),
            Card::new("c", "C", ColumnId::Todo),
            Card::new("d", "D", ColumnId::Todo),
        ])
        .unwrap()
    }

    fn ids(board: &Board) -> Vec<&str> {
        board.ids().collect()
    }

    #[test]
    fn test_move_within_column_before_reference() {
        let mut board = board();
        let outcome = CardService::move_card(&mut board, "d", ColumnId::Todo, Some("a")).unwrap();
        assert!(matches!(outcome, MoveOutcome::Moved(_)));
        assert_eq!(ids(&board), vec!["d", "a", "b", "c"]);
    }

    #[test]
    fn test_move_across_columns_updates_column() {
        let mut board = board();
        CardService::move_card(&mut board, "a", ColumnId::Doing, Some("b")).unwrap();
        assert_eq!(ids(&board), vec!["a", "b", "c", "d"]);
        assert_eq!(board.find("a").unwrap().column, ColumnId::Doing);
    }

    #[test]
    fn test_trailing_slot_appends_to_end() {
        let mut board = board();
        CardService::move_card(&mut board, "a", ColumnId::Doing, None).unwrap();
        assert_eq!(ids(&board), vec!["b", "c", "d", "a"]);
        let doing: Vec<&str> = board
            .cards_in(ColumnId::Doing)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(doing, vec!["b", "a"]);
    }

    #[test]
    fn test_drop_before_itself_is_unchanged() {
        let mut board = board();
        let before = board.clone();
        let outcome = CardService::move_card(&mut board, "c", ColumnId::Done, Some("c")).unwrap();
        assert_eq!(outcome, MoveOutcome::Unchanged);
        assert_eq!(board, before);
    }

    #[test]
    fn test_missing_reference_falls_back_to_append() {
        let mut board = board();
        CardService::move_card(&mut board, "b", ColumnId::Todo, Some("gone")).unwrap();
        assert_eq!(ids(&board), vec!["a", "c", "d", "b"]);
    }

    #[test]
    fn test_move_unknown_card_is_not_found() {
        let mut board = board();
        let before = board.clone();
        let err = CardService::move_card(&mut board, "zzz", ColumnId::Todo, None).unwrap_err();
        assert!(matches!(err, KanbanError::NotFound(_)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_create_card_appends_trimmed_title() {
        let mut board = board();
        let mut id_gen = SequentialIdGenerator::default();
        let card =
            CardService::create_card(&mut board, &mut id_gen, ColumnId::Todo, "  Buy milk ").unwrap();
        assert_eq!(card.title, "Buy milk");
        assert_eq!(board.cards().last(), Some(&card));
    }

    #[test]
    fn test_create_card_rejects_blank_title() {
        let mut board = board();
        let mut id_gen = SequentialIdGenerator::default();
        let err = CardService::create_card(&mut board, &mut id_gen, ColumnId::Todo, "   ").unwrap_err();
        assert!(matches!(err, KanbanError::BadRequest(_)));
        assert_eq!(board.len(), 4);
    }

    #[test]
    fn test_create_card_skips_taken_ids() {
        let mut board = Board::with_defaults();
        let mut id_gen = SequentialIdGenerator::new("", 9);
        let card = CardService::create_card(&mut board, &mut id_gen, ColumnId::Done, "New").unwrap();
        assert_eq!(card.id, "11");
    }

    #[test]
    fn test_create_card_conflicts_when_ids_exhausted() {
        #[derive(Debug)]
        struct Stuck;
        impl IdGenerator for Stuck {
            fn next_id(&mut self) -> String {
                "a".into()
            }
        }

        let mut board = board();
        let err = CardService::create_card(&mut board, &mut Stuck, ColumnId::Todo, "X").unwrap_err();
        assert!(matches!(err, KanbanError::Conflict(_)));
    }

    #[test]
    fn test_delete_card_keeps_others_in_order() {
        let mut board = board();
        let removed = CardService::delete_card(&mut board, "b").unwrap();
        assert_eq!(removed.id, "b");
        assert_eq!(ids(&board), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_delete_unknown_card_is_not_found() {
        let mut board = board();
        assert!(matches!(
            CardService::delete_card(&mut board, "nope"),
            Err(KanbanError::NotFound(_))
        ));
    }
}
