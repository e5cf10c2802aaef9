use chrono::NaiveDateTime;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::{FromSqliteRow, MuscleGroup};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: i64,
    pub name: String,
    pub muscle_group_id: i64,
    pub description: Option<String>,
    pub instructions: Option<String>,
    pub created_at: NaiveDateTime,
}

impl FromSqliteRow for Exercise {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            muscle_group_id: row.get("muscle_group_id")?,
            description: row.get("description")?,
            instructions: row.get("instructions")?,
            created_at: row.get("created_at")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateExercise {
    pub name: String,
    pub muscle_group_id: i64,
    pub description: Option<String>,
    pub instructions: Option<String>,
}

/// An exercise joined with the muscle group it trains.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseWithGroup {
    pub id: i64,
    pub name: String,
    pub muscle_group_id: i64,
    pub description: Option<String>,
    pub instructions: Option<String>,
    pub created_at: NaiveDateTime,
    pub group_name: String,
    pub group_description: Option<String>,
}

impl ExerciseWithGroup {
    pub fn new(exercise: Exercise, group: &MuscleGroup) -> Self {
        Self {
            id: exercise.id,
            name: exercise.name,
            muscle_group_id: exercise.muscle_group_id,
            description: exercise.description,
            instructions: exercise.instructions,
            created_at: exercise.created_at,
            group_name: group.name.clone(),
            group_description: group.description.clone(),
        }
    }
}

impl FromSqliteRow for ExerciseWithGroup {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            muscle_group_id: row.get("muscle_group_id")?,
            description: row.get("description")?,
            instructions: row.get("instructions")?,
            created_at: row.get("created_at")?,
            group_name: row.get("group_name")?,
            group_description: row.get("group_description")?,
        })
    }
}
