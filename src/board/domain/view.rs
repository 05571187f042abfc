//! Read-only projection of the board for rendering.

use super::{Board, Priority, TaskId, TaskRecord, TaskStatus};
use chrono::NaiveDate;
use serde::Serialize;

const DATE_LABEL_FORMAT: &str = "%b %-d";

/// Visible fields of one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskCard {
    /// Task identifier.
    pub id: TaskId,
    /// Card title.
    pub title: String,
    /// Card body text.
    pub description: String,
    /// Task priority.
    pub priority: Priority,
    /// Creation date, if recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl TaskCard {
    /// Short date label such as `Nov 8`.
    #[must_use]
    pub fn date_label(&self) -> Option<String> {
        self.date
            .map(|date| date.format(DATE_LABEL_FORMAT).to_string())
    }
}

impl From<&TaskRecord> for TaskCard {
    fn from(task: &TaskRecord) -> Self {
        Self {
            id: task.id(),
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            priority: task.priority(),
            date: task.date(),
        }
    }
}

/// One rendered column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnView {
    /// Partition shown in the column.
    pub status: TaskStatus,
    /// Column heading.
    pub title: &'static str,
    /// Number of cards in the column.
    pub count: usize,
    /// Cards in display order.
    pub cards: Vec<TaskCard>,
}

/// Per-status ordered projection of the whole board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    /// Columns in display order.
    pub columns: Vec<ColumnView>,
}

impl BoardView {
    /// Projects the board without modifying it.
    #[must_use]
    pub fn project(board: &Board) -> Self {
        let columns = TaskStatus::ALL
            .into_iter()
            .map(|status| {
                let cards: Vec<TaskCard> = board.list_of(status).iter().map(TaskCard::from).collect();
                ColumnView {
                    status,
                    title: status.title(),
                    count: cards.len(),
                    cards,
                }
            })
            .collect();
        Self { columns }
    }

    /// Returns the column for a status.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> Option<&ColumnView> {
        self.columns.iter().find(|column| column.status == status)
    }

    /// Returns the card identifiers of a column in display order.
    #[must_use]
    pub fn ids_in(&self, status: TaskStatus) -> Vec<TaskId> {
        self.column(status)
            .map(|column| column.cards.iter().map(|card| card.id).collect())
            .unwrap_or_default()
    }
}
