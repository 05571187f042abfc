//! Sample board shown on first load.

use super::{Board, Priority, TaskId, TaskRecord, TaskStatus};
use chrono::NaiveDate;

struct SampleTask {
    suffix: u16,
    title: &'static str,
    description: &'static str,
    status: TaskStatus,
    priority: Priority,
    date: Option<(i32, u32, u32)>,
}

const SAMPLE_TASKS: [SampleTask; 7] = [
    SampleTask {
        suffix: 2993,
        title: "Setup user authentication flow",
        description: "Implement user registration, login, and password reset functionality",
        status: TaskStatus::New,
        priority: Priority::High,
        date: None,
    },
    SampleTask {
        suffix: 2981,
        title: "Implement error handling for API requests",
        description: "Create a global error handling mechanism for all API requests",
        status: TaskStatus::New,
        priority: Priority::Medium,
        date: None,
    },
    SampleTask {
        suffix: 3022,
        title: "Design system implementation",
        description: "Create and implement a consistent design system across the application",
        status: TaskStatus::Ongoing,
        priority: Priority::High,
        date: None,
    },
    SampleTask {
        suffix: 3011,
        title: "Mobile responsive layouts",
        description: "Ensure all pages are fully responsive on mobile devices",
        status: TaskStatus::Ongoing,
        priority: Priority::Medium,
        date: None,
    },
    SampleTask {
        suffix: 2957,
        title: "Performance optimization",
        description: "Identify and resolve performance bottlenecks in the application",
        status: TaskStatus::Ongoing,
        priority: Priority::Low,
        date: Some((2024, 11, 8)),
    },
    SampleTask {
        suffix: 3030,
        title: "User settings page",
        description: "Create a page for users to manage their account settings",
        status: TaskStatus::Completed,
        priority: Priority::Medium,
        date: None,
    },
    SampleTask {
        suffix: 2879,
        title: "Email notification system",
        description: "Implement a system for sending automated email notifications",
        status: TaskStatus::Completed,
        priority: Priority::Low,
        date: None,
    },
];

impl SampleTask {
    fn to_record(&self) -> TaskRecord {
        let mut record = TaskRecord::new(
            TaskId::sample(self.suffix),
            self.title,
            self.description,
            self.status,
            self.priority,
        );
        if let Some(date) = self
            .date
            .and_then(|(year, month, day)| NaiveDate::from_ymd_opt(year, month, day))
        {
            record = record.with_date(date);
        }
        record
    }
}

impl Board {
    /// Returns the seven-task sample board.
    #[must_use]
    pub fn demo() -> Self {
        let mut board = Self::new();
        for sample in &SAMPLE_TASKS {
            let record = sample.to_record();
            // Sample identifiers are distinct, so appending cannot collide.
            if let Err(err) = board.push(record.status(), record) {
                tracing::warn!(error = %err, "skipping sample task");
            }
        }
        board
    }
}
