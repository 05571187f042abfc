//! Ordered partitioning of task records by status.

use super::{BoardError, BoardSlot, TaskId, TaskRecord, TaskStatus};
use serde::Serialize;

/// Authoritative board state: one ordered sequence per status.
///
/// Every record sits in the partition named by its own status, and task
/// identifiers are unique across all partitions. Both properties are kept by
/// the structural primitives below; nothing else can reach the partitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Board {
    new: Vec<TaskRecord>,
    ongoing: Vec<TaskRecord>,
    completed: Vec<TaskRecord>,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board by appending each record to the partition named by its
    /// status, preserving the iteration order within each partition.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DuplicateTaskId`] when two records share an id.
    pub fn from_records(records: impl IntoIterator<Item = TaskRecord>) -> Result<Self, BoardError> {
        let mut board = Self::new();
        for record in records {
            board.push(record.status(), record)?;
        }
        Ok(board)
    }

    /// Returns the ordered records of one partition.
    #[must_use]
    pub fn list_of(&self, status: TaskStatus) -> &[TaskRecord] {
        self.partition(status)
    }

    /// Removes and returns the record at `index` in the `status` partition.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IndexOutOfBounds`] when `index` does not address
    /// an existing record. The board is left untouched.
    pub fn remove_at(&mut self, status: TaskStatus, index: usize) -> Result<TaskRecord, BoardError> {
        let partition = self.partition_mut(status);
        let len = partition.len();
        if index >= len {
            return Err(BoardError::IndexOutOfBounds { status, index, len });
        }
        Ok(partition.remove(index))
    }

    /// Inserts `task` at `index` in the `status` partition, shifting later
    /// records back, and rewrites the task's status to `status`.
    ///
    /// `index` may equal the partition length to append.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IndexOutOfBounds`] when `index` exceeds the
    /// partition length, or [`BoardError::DuplicateTaskId`] when a record with
    /// the same id is already on the board. The board is left untouched.
    pub fn insert_at(
        &mut self,
        status: TaskStatus,
        index: usize,
        mut task: TaskRecord,
    ) -> Result<(), BoardError> {
        if self.contains_id(task.id()) {
            return Err(BoardError::DuplicateTaskId(task.id()));
        }
        let partition = self.partition_mut(status);
        let len = partition.len();
        if index > len {
            return Err(BoardError::IndexOutOfBounds { status, index, len });
        }
        task.set_status(status);
        partition.insert(index, task);
        Ok(())
    }

    /// Appends `task` to the end of the `status` partition.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DuplicateTaskId`] when the id is already taken.
    pub fn push(&mut self, status: TaskStatus, task: TaskRecord) -> Result<(), BoardError> {
        let end = self.partition(status).len();
        self.insert_at(status, end, task)
    }

    /// Returns the slot currently holding the task.
    #[must_use]
    pub fn locate(&self, id: TaskId) -> Option<BoardSlot> {
        TaskStatus::ALL.into_iter().find_map(|status| {
            self.partition(status)
                .iter()
                .position(|task| task.id() == id)
                .map(|index| BoardSlot::new(status, index))
        })
    }

    /// Returns the task with the given identifier.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&TaskRecord> {
        self.iter().find(|task| task.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: TaskId) -> Option<&mut TaskRecord> {
        self.new
            .iter_mut()
            .chain(self.ongoing.iter_mut())
            .chain(self.completed.iter_mut())
            .find(|task| task.id() == id)
    }

    /// Returns `true` when a task with the identifier is on the board.
    #[must_use]
    pub fn contains_id(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Iterates over all records, partition by partition in display order.
    pub fn iter(&self) -> impl Iterator<Item = &TaskRecord> {
        TaskStatus::ALL
            .into_iter()
            .flat_map(move |status| self.partition(status).iter())
    }

    /// Total number of records across all partitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.new.len() + self.ongoing.len() + self.completed.len()
    }

    /// Returns `true` when no partition holds a record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    const fn partition(&self, status: TaskStatus) -> &Vec<TaskRecord> {
        match status {
            TaskStatus::New => &self.new,
            TaskStatus::Ongoing => &self.ongoing,
            TaskStatus::Completed => &self.completed,
        }
    }

    const fn partition_mut(&mut self, status: TaskStatus) -> &mut Vec<TaskRecord> {
        match status {
            TaskStatus::New => &mut self.new,
            TaskStatus::Ongoing => &mut self.ongoing,
            TaskStatus::Completed => &mut self.completed,
        }
    }
}
