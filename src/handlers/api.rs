//! Read-only JSON views of the workout log.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::{WorkoutComplete, WorkoutWithGroup};
use crate::repositories::WorkoutRepository;

#[derive(Clone)]
pub struct ApiState {
    pub workout_repo: WorkoutRepository,
}

#[derive(Serialize)]
pub struct WorkoutDetailResponse {
    #[serde(flatten)]
    workout: WorkoutComplete,
    completion_percentage: u32,
}

pub async fn list_workouts(State(state): State<ApiState>) -> Result<Json<Vec<WorkoutWithGroup>>> {
    let workouts = state.workout_repo.find_all_with_groups().await?;
    Ok(Json(workouts))
}

pub async fn show_workout(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<Json<WorkoutDetailResponse>> {
    let workout = state
        .workout_repo
        .find_complete(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Workout not found".to_string()))?;

    let completion_percentage = workout.progress().percentage();

    Ok(Json(WorkoutDetailResponse {
        workout,
        completion_percentage,
    }))
}
