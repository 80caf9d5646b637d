use crate::models::{DayRecord, TASK_COUNT, TaskDefinition, ViewMode, WeeklyGoal};
use chrono::{Duration, NaiveDate};
use std::fmt;

/// Length of the plan window in days.
pub const PLAN_DAYS: usize = 30;

/// The three tracked tasks. `DayRecord::completed[i]` refers to `TASKS[i]`.
pub const TASKS: [TaskDefinition; TASK_COUNT] = [
    TaskDefinition {
        label: "Study (30 mins)",
    },
    TaskDefinition {
        label: "Workout (15–30 mins)",
    },
    TaskDefinition {
        label: "Reflection",
    },
];

pub const WEEKLY_GOALS: [WeeklyGoal; 3] = [
    WeeklyGoal {
        title: "Complete 1 full SAT test",
        description: "Take a full timed SAT practice test using Bluebook or paper. Review all mistakes.",
    },
    WeeklyGoal {
        title: "Run 5km under 25 minutes",
        description: "Attempt one 5K test run this week. Focus on pacing and breathing.",
    },
    WeeklyGoal {
        title: "Complete daily tasks 6 out of 7 days",
        description: "Stay consistent with study, workout, and reflection for at least 6 days.",
    },
];

/// First day of the plan window.
pub fn plan_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 1).expect("plan start date is valid")
}

/// Short "Jul 1" style label shown in all views.
pub fn day_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanError {
    DayOutOfRange(usize),
    TaskOutOfRange(usize),
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::DayOutOfRange(day) => {
                write!(f, "day index {day} is outside the {PLAN_DAYS}-day plan")
            }
            PlanError::TaskOutOfRange(task) => {
                write!(f, "task index {task} is outside the {TASK_COUNT}-task list")
            }
        }
    }
}

impl std::error::Error for PlanError {}

/// Single source of truth for the plan: the 30 day records plus the active
/// view selector. All views read and mutate through this store, so every
/// mutation is immediately visible everywhere.
#[derive(Debug, Clone)]
pub struct PlanStore {
    start_date: NaiveDate,
    days: Vec<DayRecord>,
    view: ViewMode,
}

impl PlanStore {
    pub fn new() -> Self {
        Self::with_start(plan_start())
    }

    pub fn with_start(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            days: vec![DayRecord::default(); PLAN_DAYS],
            view: ViewMode::default(),
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub fn days(&self) -> &[DayRecord] {
        &self.days
    }

    pub fn day(&self, index: usize) -> Option<&DayRecord> {
        self.days.get(index)
    }

    /// Calendar date covered by day `index`.
    pub fn date_for(&self, index: usize) -> NaiveDate {
        self.start_date + Duration::days(index as i64)
    }

    /// Whole days between the plan start and `reference`. A value outside
    /// `0..PLAN_DAYS` means the plan is not active on `reference`; that is
    /// an expected outcome, not an error.
    pub fn current_day_index(&self, reference: NaiveDate) -> i64 {
        (reference - self.start_date).num_days()
    }

    /// Flip one completion flag and return its new value. Out-of-range
    /// indices leave the store untouched.
    pub fn toggle_task(&mut self, day: usize, task: usize) -> Result<bool, PlanError> {
        if task >= TASK_COUNT {
            return Err(PlanError::TaskOutOfRange(task));
        }
        let record = self.days.get_mut(day).ok_or(PlanError::DayOutOfRange(day))?;
        record.completed[task] = !record.completed[task];
        Ok(record.completed[task])
    }

    /// Replace the notes for one day. Same bounds contract as
    /// [`PlanStore::toggle_task`].
    pub fn set_notes(&mut self, day: usize, notes: impl Into<String>) -> Result<(), PlanError> {
        let record = self.days.get_mut(day).ok_or(PlanError::DayOutOfRange(day))?;
        record.notes = notes.into();
        Ok(())
    }
}

impl Default for PlanStore {
    fn default() -> Self {
        Self::new()
    }
}
