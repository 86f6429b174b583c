use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use super::card::DEFAULT_CARDS;
use super::{Card, ColumnId, KanbanError};

/// Ordered sequence of cards. Sequence order is the display order inside
/// every column; ids are unique across the whole board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        Self {
            cards: DEFAULT_CARDS
                .iter()
                .map(|(id, title, column)| Card::new(*id, *title, *column))
                .collect(),
        }
    }

    pub fn try_from_cards(cards: Vec<Card>) -> Result<Self, KanbanError> {
        let mut seen = HashSet::with_capacity(cards.len());
        for card in &cards {
            if !seen.insert(card.id.as_str()) {
                return Err(KanbanError::BadRequest(format!(
                    "Duplicate card id: {}",
                    card.id
                )));
            }
        }
        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.cards.iter().map(|c| c.id.as_str())
    }

    /// Cards of one column, in board order.
    pub fn cards_in(&self, column: ColumnId) -> Vec<&Card> {
        self.cards.iter().filter(|c| c.column == column).collect()
    }

    pub fn count_in(&self, column: ColumnId) -> usize {
        self.cards.iter().filter(|c| c.column == column).count()
    }

    /// Column tag of every card, in board order.
    pub fn column_order(&self) -> Vec<ColumnId> {
        self.cards.iter().map(|c| c.column).collect()
    }

    pub fn group_by_column(&self) -> BTreeMap<ColumnId, Vec<Card>> {
        let mut groups: BTreeMap<ColumnId, Vec<Card>> = ColumnId::all()
            .iter()
            .map(|column| (*column, Vec::new()))
            .collect();
        for card in &self.cards {
            groups.entry(card.column).or_default().push(card.clone());
        }
        groups
    }

    /// Rebuilds a board from per-column groups, interleaving them along
    /// `order` (the column tag of each position in the original sequence).
    pub fn merge_groups(
        groups: BTreeMap<ColumnId, Vec<Card>>,
        order: &[ColumnId],
    ) -> Result<Self, KanbanError> {
        let mut queues: BTreeMap<ColumnId, std::vec::IntoIter<Card>> = groups
            .into_iter()
            .map(|(column, cards)| (column, cards.into_iter()))
            .collect();

        let mut cards = Vec::with_capacity(order.len());
        for column in order {
            let card = queues
                .get_mut(column)
                .and_then(Iterator::next)
                .ok_or_else(|| {
                    KanbanError::BadRequest(format!("Column {} ran out of cards", column))
                })?;
            if card.column != *column {
                return Err(KanbanError::BadRequest(format!(
                    "Card {} is tagged {} but grouped under {}",
                    card.id, card.column, column
                )));
            }
            cards.push(card);
        }

        if let Some((column, _)) = queues.iter().find(|(_, rest)| rest.len() > 0) {
            return Err(KanbanError::BadRequest(format!(
                "Column {} has cards not covered by the order",
                column
            )));
        }

        Self::try_from_cards(cards)
    }

    pub(crate) fn replace_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }
}

impl TryFrom<Vec<Card>> for Board {
    type Error = KanbanError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::try_from_cards(cards)
    }
}

impl From<Board> for Vec<Card> {
    fn from(board: Board) -> Self {
        board.cards
    }
}
