use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for tasks
pub type TaskId = Uuid;

/// Errors raised by task construction and scheduler input handling
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    #[error("Invalid {field}: {reason}")]
    InvalidArgument { field: &'static str, reason: String },
}

impl SchedulerError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }
}

/// Point in time a task should be done by
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Deadline(NaiveDateTime);

/// Schedulable unit: a description, an integer priority and an optional deadline
///
/// Identity is the [`TaskId`] minted at construction. Two tasks with the same
/// fields are still different tasks. `Task` is intentionally not `Clone`, so an
/// entity can only ever live in one queue slot.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    description: String,
    priority: i64,
    deadline: Option<Deadline>,
}

/// Untyped task specification, as read from task lists or user input
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TaskSpec {
    pub description: String,
    pub priority: i64,
    #[serde(default)]
    pub deadline: Option<String>,
}

impl Deadline {
    pub fn new(at: NaiveDateTime) -> Self {
        Self(at)
    }

    /// Midnight of the given calendar day
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, SchedulerError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(Self)
            .ok_or_else(|| {
                SchedulerError::invalid(
                    "deadline",
                    format!("{year}-{month}-{day} is not a calendar date"),
                )
            })
    }

    pub fn at(&self) -> NaiveDateTime {
        self.0
    }
}

impl From<NaiveDateTime> for Deadline {
    fn from(at: NaiveDateTime) -> Self {
        Self(at)
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}

impl FromStr for Deadline {
    type Err = SchedulerError;

    /// Accepts `YYYY,M,D`, `YYYY-MM-DD`, `YYYY-MM-DD HH:MM[:SS]`,
    /// `YYYY-MM-DDTHH:MM:SS` and RFC 3339.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.contains(',') {
            let parts: Vec<&str> = s.split(',').map(str::trim).collect();
            if parts.len() != 3 {
                return Err(SchedulerError::invalid(
                    "deadline",
                    format!("expected year,month,day but got '{s}'"),
                ));
            }
            let year = parts[0].parse::<i32>();
            let month = parts[1].parse::<u32>();
            let day = parts[2].parse::<u32>();
            return match (year, month, day) {
                (Ok(year), Ok(month), Ok(day)) => Self::from_ymd(year, month, day),
                _ => Err(SchedulerError::invalid(
                    "deadline",
                    format!("'{s}' is not made of integers"),
                )),
            };
        }

        for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"] {
            if let Ok(at) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(Self(at));
            }
        }

        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            if let Some(at) = date.and_hms_opt(0, 0, 0) {
                return Ok(Self(at));
            }
        }

        DateTime::parse_from_rfc3339(s)
            .map(|at| Self(at.naive_utc()))
            .map_err(|_| SchedulerError::invalid("deadline", format!("'{s}' is not a date")))
    }
}

/// Parse an optional deadline; `none`, `-` and blank input mean no deadline
pub fn parse_deadline(input: &str) -> Result<Option<Deadline>, SchedulerError> {
    let input = input.trim();
    if input.is_empty() || input == "-" || input.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    input.parse().map(Some)
}

pub fn parse_priority(input: &str) -> Result<i64, SchedulerError> {
    input.trim().parse::<i64>().map_err(|_| {
        SchedulerError::invalid("priority", format!("'{}' is not an integer", input.trim()))
    })
}

/// Ordering used by the queue: priority descending, then deadline ascending,
/// with a missing deadline after any present one.
pub fn schedule_order(a: &Task, b: &Task) -> Ordering {
    b.priority
        .cmp(&a.priority)
        .then_with(|| match (&a.deadline, &b.deadline) {
            (Some(x), Some(y)) => x.cmp(y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}

impl Task {
    /// Create a new task with a fresh identity
    pub fn new(description: impl Into<String>, priority: i64, deadline: Option<Deadline>) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            priority,
            deadline,
        }
    }

    /// Validate an untyped specification and build a task from it
    pub fn from_spec(spec: TaskSpec) -> Result<Self, SchedulerError> {
        let deadline = match spec.deadline.as_deref() {
            Some(text) => parse_deadline(text)?,
            None => None,
        };
        Ok(Self::new(spec.description, spec.priority, deadline))
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn priority(&self) -> i64 {
        self.priority
    }

    pub fn deadline(&self) -> Option<Deadline> {
        self.deadline
    }

    // Mutation goes through the scheduler so the queue can reposition the task.

    pub(crate) fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub(crate) fn set_priority(&mut self, priority: i64) {
        self.priority = priority;
    }

    /// Clearing back to no deadline is allowed
    pub(crate) fn set_deadline(&mut self, deadline: Option<Deadline>) {
        self.deadline = deadline;
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Description: {}, Priority: {}, Deadline: ",
            self.description, self.priority
        )?;
        match &self.deadline {
            Some(deadline) => write!(f, "{deadline}"),
            None => write!(f, "None"),
        }
    }
}

impl TryFrom<TaskSpec> for Task {
    type Error = SchedulerError;

    fn try_from(spec: TaskSpec) -> Result<Self, Self::Error> {
        Self::from_spec(spec)
    }
}
