use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};

use crate::error::{AppError, Result};
use crate::grouping::{group_by_muscle_group, progress_of, Group, Progress};
use crate::models::WorkoutWithGroup;
use crate::repositories::WorkoutRepository;

#[derive(Clone)]
pub struct DashboardState {
    pub workout_repo: WorkoutRepository,
}

#[derive(Template)]
#[template(path = "dashboard/index.html")]
struct DashboardTemplate {
    groups: Vec<Group<WorkoutWithGroup>>,
    overall: Progress,
}

/// Workouts bucketed by muscle group, with completed/total per group.
pub async fn index(State(state): State<DashboardState>) -> Result<Response> {
    let workouts = state.workout_repo.find_all_with_groups().await?;
    let overall = progress_of(&workouts);
    let groups = group_by_muscle_group(workouts);

    let template = DashboardTemplate { groups, overall };

    Ok(Html(template.render().map_err(|e| AppError::Internal(e.to_string()))?).into_response())
}
