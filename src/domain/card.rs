use serde::{Deserialize, Serialize};

use super::ColumnId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub column: ColumnId,
}

impl Card {
    pub fn new(id: impl Into<String>, title: impl Into<String>, column: ColumnId) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            column,
        }
    }
}

/// Cards a fresh board starts with when seeding is enabled.
pub(crate) const DEFAULT_CARDS: &[(&str, &str, ColumnId)] = &[
    ("1", "Research OAuth vs JWT for user auth", ColumnId::Backlog),
    ("2", "Decide on mobile-first or desktop-first layout", ColumnId::Backlog),
    ("3", "Plan component folder structure", ColumnId::Backlog),
    ("4", "Choose between Zustand and Redux Toolkit", ColumnId::Backlog),
    ("5", "Set up CI/CD with GitHub Actions", ColumnId::Todo),
    ("6", "Build reusable Modal component", ColumnId::Todo),
    ("7", "Implement user login API", ColumnId::Todo),
    ("8", "Develop responsive Navbar with dropdowns", ColumnId::Doing),
    ("9", "Add logging to daily CRON", ColumnId::Doing),
    ("10", "Set up Tailwind CSS and ESLint", ColumnId::Done),
];
