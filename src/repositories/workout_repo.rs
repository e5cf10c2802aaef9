use rusqlite::Connection;

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{
    query_all, query_one, CreateWorkout, CreateWorkoutExercise, Workout, WorkoutComplete,
    WorkoutExercise, WorkoutExerciseWithDetails, WorkoutWithGroup,
};

const SELECT_WITH_GROUP: &str = "SELECT w.*, mg.name AS group_name, mg.description AS group_description
     FROM workouts w
     INNER JOIN muscle_groups mg ON w.muscle_group_id = mg.id";

const NEWEST_FIRST: &str = "ORDER BY w.date DESC, w.created_at DESC, w.id DESC";

const SELECT_EXERCISE_DETAILS: &str = "SELECT we.*,
            e.name AS exercise_name,
            e.description AS exercise_description,
            e.instructions AS exercise_instructions,
            e.muscle_group_id AS muscle_group_id,
            mg.name AS group_name
     FROM workout_exercises we
     INNER JOIN exercises e ON we.exercise_id = e.id
     INNER JOIN muscle_groups mg ON e.muscle_group_id = mg.id";

#[derive(Clone)]
pub struct WorkoutRepository {
    pool: DbPool,
}

fn workout_with_group(conn: &Connection, id: i64) -> rusqlite::Result<Option<WorkoutWithGroup>> {
    query_one(conn, &format!("{} WHERE w.id = ?", SELECT_WITH_GROUP), [id])
}

fn exercises_of(
    conn: &Connection,
    workout_id: i64,
) -> rusqlite::Result<Vec<WorkoutExerciseWithDetails>> {
    query_all(
        conn,
        &format!(
            "{} WHERE we.workout_id = ? ORDER BY we.created_at ASC, we.id ASC",
            SELECT_EXERCISE_DETAILS
        ),
        [workout_id],
    )
}

impl WorkoutRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    // Workouts
    pub async fn create(&self, input: CreateWorkout) -> Result<Workout> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<Workout> {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO workouts (name, muscle_group_id, date, notes) VALUES (?, ?, ?, ?)",
                rusqlite::params![
                    input.name.trim(),
                    input.muscle_group_id,
                    input.date,
                    input.notes
                ],
            )
            .map_err(|e| AppError::from_constraint(e, "Unknown muscle group"))?;
            let id = conn.last_insert_rowid();
            tracing::debug!("Created workout {} ({}) on {}", id, input.name.trim(), input.date);

            query_one(&conn, "SELECT * FROM workouts WHERE id = ?", [id])?
                .ok_or_else(|| AppError::Internal("Inserted workout vanished".to_string()))
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// All workouts, newest first.
    pub async fn find_all_with_groups(&self) -> Result<Vec<WorkoutWithGroup>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<Vec<WorkoutWithGroup>> {
            let conn = pool.get()?;
            let sql = format!("{} {}", SELECT_WITH_GROUP, NEWEST_FIRST);
            Ok(query_all(&conn, &sql, [])?)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn find_by_muscle_group(
        &self,
        muscle_group_id: i64,
    ) -> Result<Vec<WorkoutWithGroup>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<Vec<WorkoutWithGroup>> {
            let conn = pool.get()?;
            let sql = format!(
                "{} WHERE w.muscle_group_id = ? {}",
                SELECT_WITH_GROUP, NEWEST_FIRST
            );
            Ok(query_all(&conn, &sql, [muscle_group_id])?)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn find_with_group_by_id(&self, id: i64) -> Result<Option<WorkoutWithGroup>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<Option<WorkoutWithGroup>> {
            let conn = pool.get()?;
            Ok(workout_with_group(&conn, id)?)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// The workout with all of its exercises and completion counts.
    pub async fn find_complete(&self, id: i64) -> Result<Option<WorkoutComplete>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<Option<WorkoutComplete>> {
            let conn = pool.get()?;
            let Some(workout) = workout_with_group(&conn, id)? else {
                return Ok(None);
            };
            let exercises = exercises_of(&conn, id)?;
            Ok(Some(WorkoutComplete::new(workout, exercises)))
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn set_completed(&self, id: i64, completed: bool) -> Result<bool> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let rows = conn.execute(
                "UPDATE workouts SET is_completed = ? WHERE id = ?",
                rusqlite::params![completed, id],
            )?;
            tracing::debug!("Workout {} completed={} (rows: {})", id, completed, rows);
            Ok(rows > 0)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Delete a workout. Its exercise entries go with it.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let rows = conn.execute("DELETE FROM workouts WHERE id = ?", [id])?;
            tracing::debug!("Deleted workout {} (rows: {})", id, rows);
            Ok(rows > 0)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    // Workout exercises
    pub async fn add_exercise(&self, input: CreateWorkoutExercise) -> Result<WorkoutExercise> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<WorkoutExercise> {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO workout_exercises (workout_id, exercise_id, sets, reps, weight, notes)
                 VALUES (?, ?, ?, ?, ?, ?)",
                rusqlite::params![
                    input.workout_id,
                    input.exercise_id,
                    input.sets,
                    input.reps,
                    input.weight,
                    input.notes
                ],
            )
            .map_err(|e| AppError::from_constraint(e, "Unknown workout or exercise"))?;
            let id = conn.last_insert_rowid();
            tracing::debug!(
                "Added exercise {} to workout {} as entry {}",
                input.exercise_id,
                input.workout_id,
                id
            );

            query_one(&conn, "SELECT * FROM workout_exercises WHERE id = ?", [id])?
                .ok_or_else(|| AppError::Internal("Inserted workout exercise vanished".to_string()))
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn find_exercises(&self, workout_id: i64) -> Result<Vec<WorkoutExerciseWithDetails>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<Vec<WorkoutExerciseWithDetails>> {
            let conn = pool.get()?;
            Ok(exercises_of(&conn, workout_id)?)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn find_exercise_by_id(&self, id: i64) -> Result<Option<WorkoutExercise>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<Option<WorkoutExercise>> {
            let conn = pool.get()?;
            Ok(query_one(
                &conn,
                "SELECT * FROM workout_exercises WHERE id = ?",
                [id],
            )?)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn set_exercise_completed(&self, id: i64, completed: bool) -> Result<bool> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let rows = conn.execute(
                "UPDATE workout_exercises SET is_completed = ? WHERE id = ?",
                rusqlite::params![completed, id],
            )?;
            tracing::debug!("Workout exercise {} completed={} (rows: {})", id, completed, rows);
            Ok(rows > 0)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
