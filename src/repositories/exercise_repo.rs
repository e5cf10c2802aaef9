use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{query_all, query_one, CreateExercise, Exercise, ExerciseWithGroup};

const SELECT_WITH_GROUP: &str = "SELECT e.*, mg.name AS group_name, mg.description AS group_description
     FROM exercises e
     INNER JOIN muscle_groups mg ON e.muscle_group_id = mg.id";

#[derive(Clone)]
pub struct ExerciseRepository {
    pool: DbPool,
}

impl ExerciseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Exercise>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<Option<Exercise>> {
            let conn = pool.get()?;
            let exercise = query_one(&conn, "SELECT * FROM exercises WHERE id = ?", [id])?;
            Ok(exercise)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn find_all(&self) -> Result<Vec<Exercise>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<Vec<Exercise>> {
            let conn = pool.get()?;
            let exercises = query_all(&conn, "SELECT * FROM exercises ORDER BY name ASC", [])?;
            Ok(exercises)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn find_by_muscle_group(&self, muscle_group_id: i64) -> Result<Vec<Exercise>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<Vec<Exercise>> {
            let conn = pool.get()?;
            let exercises = query_all(
                &conn,
                "SELECT * FROM exercises WHERE muscle_group_id = ? ORDER BY name ASC",
                [muscle_group_id],
            )?;
            Ok(exercises)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Every exercise with its muscle group, ordered by group name and then
    /// exercise name.
    pub async fn find_all_with_groups(&self) -> Result<Vec<ExerciseWithGroup>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<Vec<ExerciseWithGroup>> {
            let conn = pool.get()?;
            let sql = format!("{} ORDER BY mg.name ASC, e.name ASC", SELECT_WITH_GROUP);
            let exercises = query_all(&conn, &sql, [])?;
            Ok(exercises)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn create(&self, input: CreateExercise) -> Result<Exercise> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<Exercise> {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO exercises (name, muscle_group_id, description, instructions)
                 VALUES (?, ?, ?, ?)",
                rusqlite::params![
                    input.name.trim(),
                    input.muscle_group_id,
                    input.description,
                    input.instructions
                ],
            )
            .map_err(|e| AppError::from_constraint(e, "Unknown muscle group"))?;
            let id = conn.last_insert_rowid();
            tracing::debug!("Created exercise {} ({})", id, input.name.trim());

            query_one(&conn, "SELECT * FROM exercises WHERE id = ?", [id])?
                .ok_or_else(|| AppError::Internal("Inserted exercise vanished".to_string()))
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
