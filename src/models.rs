use serde::{Deserialize, Serialize};

/// Number of tracked tasks per day. `DayRecord::completed` is index-aligned
/// with [`crate::plan::TASKS`].
pub const TASK_COUNT: usize = 3;

/// Per-day completion flags and free-text notes.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DayRecord {
    pub completed: [bool; TASK_COUNT],
    pub notes: String,
}

/// One entry of the fixed daily task list.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TaskDefinition {
    pub label: &'static str,
}

/// One entry of the fixed weekly goal list. Read-only, independent of the
/// per-day records.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WeeklyGoal {
    pub title: &'static str,
    pub description: &'static str,
}

/// Which of the three screens is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Today,
    Weekly,
    Adjust,
}

impl ViewMode {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "today" => Some(Self::Today),
            "weekly" => Some(Self::Weekly),
            "adjust" => Some(Self::Adjust),
            _ => None,
        }
    }

    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Weekly => "weekly",
            Self::Adjust => "adjust",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub day: usize,
    pub task: usize,
}

#[derive(Debug, Deserialize)]
pub struct NotesRequest {
    pub day: usize,
    pub notes: String,
}

#[derive(Debug, Deserialize)]
pub struct ViewRequest {
    pub view: ViewMode,
}

#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub view: ViewMode,
}

#[derive(Debug, Serialize)]
pub struct DayResponse {
    pub index: usize,
    pub date: String,
    pub label: String,
    pub completed: [bool; TASK_COUNT],
    pub notes: String,
}

#[derive(Debug, Serialize)]
pub struct TodayResponse {
    pub date: String,
    pub day_index: i64,
    pub active: bool,
    pub day: Option<DayResponse>,
}

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub start_date: String,
    pub view: ViewMode,
    pub today_index: i64,
    pub tasks: Vec<TaskDefinition>,
    pub goals: Vec<WeeklyGoal>,
    pub days: Vec<DayResponse>,
}
