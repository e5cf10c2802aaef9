use chrono::NaiveDateTime;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::FromSqliteRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    pub id: i64,
    pub workout_id: i64,
    pub exercise_id: i64,
    pub is_completed: bool,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    /// Kilograms.
    pub weight: Option<f64>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

impl FromSqliteRow for WorkoutExercise {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            workout_id: row.get("workout_id")?,
            exercise_id: row.get("exercise_id")?,
            is_completed: row.get("is_completed")?,
            sets: row.get("sets")?,
            reps: row.get("reps")?,
            weight: row.get("weight")?,
            notes: row.get("notes")?,
            created_at: row.get("created_at")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateWorkoutExercise {
    pub workout_id: i64,
    pub exercise_id: i64,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight: Option<f64>,
    pub notes: Option<String>,
}

/// A workout exercise with the catalog details of the exercise and the
/// muscle group that exercise belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutExerciseWithDetails {
    pub id: i64,
    pub workout_id: i64,
    pub exercise_id: i64,
    pub is_completed: bool,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight: Option<f64>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub exercise_name: String,
    pub exercise_description: Option<String>,
    pub exercise_instructions: Option<String>,
    pub muscle_group_id: i64,
    pub group_name: String,
}

impl WorkoutExerciseWithDetails {
    /// Summary such as "4 sets • 8 reps • 80kg". Missing and zero values are
    /// left out.
    pub fn details(&self) -> String {
        let mut parts = Vec::new();
        if let Some(sets) = self.sets.filter(|&s| s != 0) {
            parts.push(format!("{} sets", sets));
        }
        if let Some(reps) = self.reps.filter(|&r| r != 0) {
            parts.push(format!("{} reps", reps));
        }
        if let Some(weight) = self.weight.filter(|&w| w != 0.0) {
            parts.push(format!("{}kg", format_weight(weight)));
        }
        parts.join(" • ")
    }
}

impl FromSqliteRow for WorkoutExerciseWithDetails {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            workout_id: row.get("workout_id")?,
            exercise_id: row.get("exercise_id")?,
            is_completed: row.get("is_completed")?,
            sets: row.get("sets")?,
            reps: row.get("reps")?,
            weight: row.get("weight")?,
            notes: row.get("notes")?,
            created_at: row.get("created_at")?,
            exercise_name: row.get("exercise_name")?,
            exercise_description: row.get("exercise_description")?,
            exercise_instructions: row.get("exercise_instructions")?,
            muscle_group_id: row.get("muscle_group_id")?,
            group_name: row.get("group_name")?,
        })
    }
}

fn format_weight(weight: f64) -> String {
    if weight.fract() == 0.0 {
        format!("{:.0}", weight)
    } else {
        weight.to_string()
    }
}
