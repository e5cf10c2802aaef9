use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::{FromSqliteRow, WorkoutExerciseWithDetails};
use crate::grouping::Progress;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: i64,
    pub name: String,
    pub muscle_group_id: i64,
    pub date: NaiveDate,
    pub notes: Option<String>,
    pub is_completed: bool,
    pub created_at: NaiveDateTime,
}

impl FromSqliteRow for Workout {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            muscle_group_id: row.get("muscle_group_id")?,
            date: row.get("date")?,
            notes: row.get("notes")?,
            is_completed: row.get("is_completed")?,
            created_at: row.get("created_at")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateWorkout {
    pub name: String,
    pub muscle_group_id: i64,
    pub date: NaiveDate,
    pub notes: Option<String>,
}

/// A workout joined with its target muscle group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutWithGroup {
    pub id: i64,
    pub name: String,
    pub muscle_group_id: i64,
    pub date: NaiveDate,
    pub notes: Option<String>,
    pub is_completed: bool,
    pub created_at: NaiveDateTime,
    pub group_name: String,
    pub group_description: Option<String>,
}

impl WorkoutWithGroup {
    pub fn status_text(&self) -> &'static str {
        if self.is_completed {
            "Completed"
        } else {
            "Pending"
        }
    }

    pub fn short_date(&self) -> String {
        crate::format::short_date(self.date)
    }
}

impl FromSqliteRow for WorkoutWithGroup {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            muscle_group_id: row.get("muscle_group_id")?,
            date: row.get("date")?,
            notes: row.get("notes")?,
            is_completed: row.get("is_completed")?,
            created_at: row.get("created_at")?,
            group_name: row.get("group_name")?,
            group_description: row.get("group_description")?,
        })
    }
}

/// A workout together with every exercise assigned to it.
#[derive(Debug, Clone, Serialize)]
pub struct WorkoutComplete {
    #[serde(flatten)]
    pub workout: WorkoutWithGroup,
    pub exercises: Vec<WorkoutExerciseWithDetails>,
    pub total_exercises: usize,
    pub completed_exercises: usize,
}

impl WorkoutComplete {
    pub fn new(workout: WorkoutWithGroup, exercises: Vec<WorkoutExerciseWithDetails>) -> Self {
        let completed_exercises = exercises.iter().filter(|e| e.is_completed).count();
        Self {
            workout,
            total_exercises: exercises.len(),
            completed_exercises,
            exercises,
        }
    }

    pub fn progress(&self) -> Progress {
        Progress::new(self.completed_exercises, self.total_exercises)
    }
}
