use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

use crate::error::{AppError, Result};
use crate::models::{CreateMuscleGroup, MuscleGroup};
use crate::repositories::MuscleGroupRepository;

#[derive(Clone)]
pub struct MuscleGroupsState {
    pub muscle_group_repo: MuscleGroupRepository,
}

#[derive(Template)]
#[template(path = "muscle_groups/list.html")]
struct MuscleGroupsTemplate {
    muscle_groups: Vec<MuscleGroup>,
    error: Option<String>,
}

pub async fn list(State(state): State<MuscleGroupsState>) -> Result<Response> {
    let template = MuscleGroupsTemplate {
        muscle_groups: state.muscle_group_repo.find_all().await?,
        error: None,
    };

    Ok(Html(
        template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    )
    .into_response())
}

pub async fn create(
    State(state): State<MuscleGroupsState>,
    Form(form): Form<CreateMuscleGroup>,
) -> Result<Response> {
    let error = if form.name.trim().is_empty() {
        "Muscle group name is required".to_string()
    } else {
        match state.muscle_group_repo.create(form).await {
            Ok(_) => return Ok(Redirect::to("/muscle-groups").into_response()),
            Err(AppError::Validation(msg)) => msg,
            Err(e) => return Err(e),
        }
    };

    let template = MuscleGroupsTemplate {
        muscle_groups: state.muscle_group_repo.find_all().await?,
        error: Some(error),
    };

    Ok(Html(
        template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    )
    .into_response())
}
