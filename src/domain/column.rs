use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnId {
    Backlog,
    Todo,
    Doing,
    Done,
}

impl ColumnId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnId::Backlog => "backlog",
            ColumnId::Todo => "todo",
            ColumnId::Doing => "doing",
            ColumnId::Done => "done",
        }
    }

    /// Columns in board display order.
    pub fn all() -> &'static [ColumnId] {
        &[
            ColumnId::Backlog,
            ColumnId::Todo,
            ColumnId::Doing,
            ColumnId::Done,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            ColumnId::Backlog => "Backlog",
            ColumnId::Todo => "TODO",
            ColumnId::Doing => "In Progress",
            ColumnId::Done => "Complete",
        }
    }

    pub fn heading_color(&self) -> &'static str {
        match self {
            ColumnId::Backlog => "neutral-500",
            ColumnId::Todo => "yellow-200",
            ColumnId::Doing => "blue-200",
            ColumnId::Done => "emerald-200",
        }
    }

    /// Position of this column in [`ColumnId::all`].
    pub fn index(&self) -> usize {
        match self {
            ColumnId::Backlog => 0,
            ColumnId::Todo => 1,
            ColumnId::Doing => 2,
            ColumnId::Done => 3,
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ColumnId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "backlog" => Ok(ColumnId::Backlog),
            "todo" => Ok(ColumnId::Todo),
            "doing" => Ok(ColumnId::Doing),
            "done" => Ok(ColumnId::Done),
            _ => Err(format!("Invalid column: {}", s)),
        }
    }
}
