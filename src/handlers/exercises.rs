use askama::Template;
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::grouping::{group_by_muscle_group, Group};
use crate::models::form::{optional_parsed, optional_text};
use crate::models::{CreateExercise, ExerciseWithGroup, MuscleGroup};
use crate::repositories::{ExerciseRepository, MuscleGroupRepository};

#[derive(Clone)]
pub struct ExercisesState {
    pub exercise_repo: ExerciseRepository,
    pub muscle_group_repo: MuscleGroupRepository,
}

#[derive(Template)]
#[template(path = "exercises/list.html")]
struct ExercisesListTemplate {
    groups: Vec<Group<ExerciseWithGroup>>,
    muscle_groups: Vec<MuscleGroup>,
    selected_group: i64,
}

#[derive(Template)]
#[template(path = "exercises/new.html")]
struct NewExerciseTemplate {
    muscle_groups: Vec<MuscleGroup>,
    name: String,
    selected_group: i64,
    description: String,
    instructions: String,
    error: Option<String>,
}

#[derive(Deserialize)]
pub struct ListQuery {
    #[serde(default, deserialize_with = "optional_parsed")]
    group: Option<i64>,
}

#[derive(Deserialize)]
pub struct ExerciseForm {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "optional_parsed")]
    pub muscle_group_id: Option<i64>,
    #[serde(default, deserialize_with = "optional_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub instructions: Option<String>,
}

pub async fn list(
    State(state): State<ExercisesState>,
    Query(query): Query<ListQuery>,
) -> Result<Response> {
    let exercises = match query.group {
        Some(group_id) => {
            let group = state
                .muscle_group_repo
                .find_by_id(group_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Muscle group not found".to_string()))?;
            state
                .exercise_repo
                .find_by_muscle_group(group_id)
                .await?
                .into_iter()
                .map(|exercise| ExerciseWithGroup::new(exercise, &group))
                .collect()
        }
        None => state.exercise_repo.find_all_with_groups().await?,
    };

    let template = ExercisesListTemplate {
        groups: group_by_muscle_group(exercises),
        muscle_groups: state.muscle_group_repo.find_all().await?,
        selected_group: query.group.unwrap_or_default(),
    };

    Ok(Html(
        template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    )
    .into_response())
}

pub async fn new_page(State(state): State<ExercisesState>) -> Result<Response> {
    let template = NewExerciseTemplate {
        muscle_groups: state.muscle_group_repo.find_all().await?,
        name: String::new(),
        selected_group: 0,
        description: String::new(),
        instructions: String::new(),
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
    State(state): State<ExercisesState>,
    Form(form): Form<ExerciseForm>,
) -> Result<Response> {
    let name = form.name.trim().to_string();

    let error = match (name.is_empty(), form.muscle_group_id) {
        (false, Some(muscle_group_id)) => {
            let input = CreateExercise {
                name: name.clone(),
                muscle_group_id,
                description: form.description.clone(),
                instructions: form.instructions.clone(),
            };
            match state.exercise_repo.create(input).await {
                Ok(_) => return Ok(Redirect::to("/exercises").into_response()),
                Err(AppError::Validation(msg)) => msg,
                Err(e) => return Err(e),
            }
        }
        _ => "Exercise name and muscle group are required".to_string(),
    };

    let template = NewExerciseTemplate {
        muscle_groups: state.muscle_group_repo.find_all().await?,
        name,
        selected_group: form.muscle_group_id.unwrap_or_default(),
        description: form.description.unwrap_or_default(),
        instructions: form.instructions.unwrap_or_default(),
        error: Some(error),
    };

    Ok(Html(
        template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    )
    .into_response())
}
