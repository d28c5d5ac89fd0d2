use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Done,
}

impl TaskStatus {
    pub fn toggled(self) -> Self {
        match self {
            TaskStatus::Pending => TaskStatus::Done,
            TaskStatus::Done => TaskStatus::Pending,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Done => "done",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub date: NaiveDateTime,
    pub all_day: bool,
    pub status: TaskStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub date: NaiveDateTime,
    pub all_day: bool,
    pub status: TaskStatus,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub date: Option<NaiveDateTime>,
    pub all_day: Option<bool>,
    pub status: Option<TaskStatus>,
}

impl Task {
    pub fn from_draft(id: String, draft: TaskDraft) -> Self {
        Self {
            id,
            title: draft.title,
            date: draft.date,
            all_day: draft.all_day,
            status: draft.status,
        }
    }

    pub fn to_draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.clone(),
            date: self.date,
            all_day: self.all_day,
            status: self.status,
        }
    }

    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }
}

impl TaskPatch {
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn apply(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(date) = self.date {
            task.date = date;
        }
        if let Some(all_day) = self.all_day {
            task.all_day = all_day;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
    }
}

impl From<TaskDraft> for TaskPatch {
    fn from(draft: TaskDraft) -> Self {
        Self {
            title: Some(draft.title),
            date: Some(draft.date),
            all_day: Some(draft.all_day),
            status: Some(draft.status),
        }
    }
}
