use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{query_all, query_one, CreateMuscleGroup, MuscleGroup};

#[derive(Clone)]
pub struct MuscleGroupRepository {
    pool: DbPool,
}

impl MuscleGroupRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<MuscleGroup>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<Vec<MuscleGroup>> {
            let conn = pool.get()?;
            let groups = query_all(&conn, "SELECT * FROM muscle_groups ORDER BY name ASC", [])?;
            Ok(groups)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<MuscleGroup>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<Option<MuscleGroup>> {
            let conn = pool.get()?;
            let group = query_one(&conn, "SELECT * FROM muscle_groups WHERE id = ?", [id])?;
            Ok(group)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn create(&self, input: CreateMuscleGroup) -> Result<MuscleGroup> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<MuscleGroup> {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO muscle_groups (name, description) VALUES (?, ?)",
                rusqlite::params![input.name.trim(), input.description],
            )
            .map_err(|e| {
                AppError::from_constraint(
                    e,
                    &format!("Muscle group \"{}\" already exists", input.name.trim()),
                )
            })?;
            let id = conn.last_insert_rowid();
            tracing::debug!("Created muscle group {} ({})", id, input.name.trim());

            query_one(&conn, "SELECT * FROM muscle_groups WHERE id = ?", [id])?
                .ok_or_else(|| AppError::Internal("Inserted muscle group vanished".to_string()))
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
