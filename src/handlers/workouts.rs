use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::format::{date_label, long_date};
use crate::grouping::{group_by_muscle_group, Group, Progress};
use crate::models::form::{optional_parsed, optional_text};
use crate::models::{
    CreateWorkout, CreateWorkoutExercise, ExerciseWithGroup, MuscleGroup, WorkoutComplete,
    WorkoutExerciseWithDetails, WorkoutWithGroup,
};
use crate::repositories::{ExerciseRepository, MuscleGroupRepository, WorkoutRepository};

#[derive(Clone)]
pub struct WorkoutsState {
    pub workout_repo: WorkoutRepository,
    pub exercise_repo: ExerciseRepository,
    pub muscle_group_repo: MuscleGroupRepository,
}

// Templates
struct WorkoutRow {
    workout: WorkoutWithGroup,
    date_label: String,
}

#[derive(Template)]
#[template(path = "workouts/list.html")]
struct WorkoutsListTemplate {
    workouts: Vec<WorkoutRow>,
    muscle_groups: Vec<MuscleGroup>,
    selected_group: i64,
}

#[derive(Template)]
#[template(path = "workouts/new.html")]
struct NewWorkoutTemplate {
    muscle_groups: Vec<MuscleGroup>,
    name: String,
    selected_group: i64,
    date: NaiveDate,
    notes: String,
    error: Option<String>,
}

#[derive(Template)]
#[template(path = "workouts/show.html")]
struct ShowWorkoutTemplate {
    workout: WorkoutWithGroup,
    long_date: String,
    progress: Progress,
    groups: Vec<Group<WorkoutExerciseWithDetails>>,
    catalog: Vec<Group<ExerciseWithGroup>>,
}

// Forms and query params
#[derive(Deserialize)]
pub struct ListQuery {
    #[serde(default, deserialize_with = "optional_parsed")]
    group: Option<i64>,
}

#[derive(Deserialize)]
pub struct WorkoutForm {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "optional_parsed")]
    pub muscle_group_id: Option<i64>,
    #[serde(default, deserialize_with = "optional_parsed")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "optional_text")]
    pub notes: Option<String>,
}

/// Where to send the user after toggling a workout.
#[derive(Deserialize, Default, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ReturnTo {
    List,
    Dashboard,
    #[default]
    Detail,
}

#[derive(Deserialize)]
pub struct CompletionForm {
    pub completed: bool,
    #[serde(default)]
    pub redirect: ReturnTo,
}

#[derive(Deserialize)]
pub struct AddExerciseForm {
    #[serde(default, deserialize_with = "optional_parsed")]
    pub exercise_id: Option<i64>,
    #[serde(default, deserialize_with = "optional_parsed")]
    pub sets: Option<i32>,
    #[serde(default, deserialize_with = "optional_parsed")]
    pub reps: Option<i32>,
    #[serde(default, deserialize_with = "optional_parsed")]
    pub weight: Option<f64>,
    #[serde(default, deserialize_with = "optional_text")]
    pub notes: Option<String>,
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

async fn find_workout(state: &WorkoutsState, id: i64) -> Result<WorkoutComplete> {
    state
        .workout_repo
        .find_complete(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Workout not found".to_string()))
}

// Handlers
pub async fn list(
    State(state): State<WorkoutsState>,
    Query(query): Query<ListQuery>,
) -> Result<Response> {
    let workouts = match query.group {
        Some(group_id) => state.workout_repo.find_by_muscle_group(group_id).await?,
        None => state.workout_repo.find_all_with_groups().await?,
    };
    let muscle_groups = state.muscle_group_repo.find_all().await?;

    let today = today();
    let workouts = workouts
        .into_iter()
        .map(|workout| WorkoutRow {
            date_label: date_label(workout.date, today),
            workout,
        })
        .collect();

    let template = WorkoutsListTemplate {
        workouts,
        muscle_groups,
        selected_group: query.group.unwrap_or_default(),
    };

    Ok(Html(
        template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    )
    .into_response())
}

pub async fn new_page(State(state): State<WorkoutsState>) -> Result<Response> {
    let muscle_groups = state.muscle_group_repo.find_all().await?;

    let template = NewWorkoutTemplate {
        muscle_groups,
        name: String::new(),
        selected_group: 0,
        date: today(),
        notes: String::new(),
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
    State(state): State<WorkoutsState>,
    Form(form): Form<WorkoutForm>,
) -> Result<Response> {
    let date = form.date.unwrap_or_else(today);
    let name = form.name.trim().to_string();

    let error = match (name.is_empty(), form.muscle_group_id) {
        (false, Some(muscle_group_id)) => {
            let input = CreateWorkout {
                name: name.clone(),
                muscle_group_id,
                date,
                notes: form.notes.clone(),
            };
            match state.workout_repo.create(input).await {
                Ok(workout) => {
                    return Ok(Redirect::to(&format!("/workouts/{}", workout.id)).into_response())
                }
                Err(AppError::Validation(msg)) => Some(msg),
                Err(e) => return Err(e),
            }
        }
        _ => Some("Fill in at least a name and a muscle group".to_string()),
    };

    let template = NewWorkoutTemplate {
        muscle_groups: state.muscle_group_repo.find_all().await?,
        name,
        selected_group: form.muscle_group_id.unwrap_or_default(),
        date,
        notes: form.notes.unwrap_or_default(),
        error,
    };

    Ok(Html(
        template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    )
    .into_response())
}

pub async fn show(State(state): State<WorkoutsState>, Path(id): Path<i64>) -> Result<Response> {
    let complete = find_workout(&state, id).await?;
    let catalog = group_by_muscle_group(state.exercise_repo.find_all_with_groups().await?);

    let progress = complete.progress();
    let WorkoutComplete {
        workout, exercises, ..
    } = complete;

    let template = ShowWorkoutTemplate {
        long_date: long_date(workout.date),
        workout,
        progress,
        groups: group_by_muscle_group(exercises),
        catalog,
    };

    Ok(Html(
        template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    )
    .into_response())
}

pub async fn set_completed(
    State(state): State<WorkoutsState>,
    Path(id): Path<i64>,
    Form(form): Form<CompletionForm>,
) -> Result<Response> {
    let updated = state.workout_repo.set_completed(id, form.completed).await?;
    if !updated {
        return Err(AppError::NotFound("Workout not found".to_string()));
    }

    let target = match form.redirect {
        ReturnTo::List => "/workouts".to_string(),
        ReturnTo::Dashboard => "/".to_string(),
        ReturnTo::Detail => format!("/workouts/{}", id),
    };

    Ok(Redirect::to(&target).into_response())
}

pub async fn delete(State(state): State<WorkoutsState>, Path(id): Path<i64>) -> Result<Response> {
    let deleted = state.workout_repo.delete(id).await?;
    if !deleted {
        return Err(AppError::NotFound("Workout not found".to_string()));
    }
    Ok(Redirect::to("/workouts").into_response())
}

// Workout exercises
pub async fn add_exercise(
    State(state): State<WorkoutsState>,
    Path(workout_id): Path<i64>,
    Form(form): Form<AddExerciseForm>,
) -> Result<Response> {
    state
        .workout_repo
        .find_with_group_by_id(workout_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Workout not found".to_string()))?;

    let exercise_id = form
        .exercise_id
        .ok_or_else(|| AppError::BadRequest("Choose an exercise to add".to_string()))?;

    state
        .workout_repo
        .add_exercise(CreateWorkoutExercise {
            workout_id,
            exercise_id,
            sets: form.sets,
            reps: form.reps,
            weight: form.weight,
            notes: form.notes,
        })
        .await?;

    Ok(Redirect::to(&format!("/workouts/{}", workout_id)).into_response())
}

pub async fn set_exercise_completed(
    State(state): State<WorkoutsState>,
    Path((workout_id, entry_id)): Path<(i64, i64)>,
    Form(form): Form<CompletionForm>,
) -> Result<Response> {
    let entry = state
        .workout_repo
        .find_exercise_by_id(entry_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Exercise not found".to_string()))?;

    // Entry ids are global; make sure this one is part of the workout in the URL.
    if entry.workout_id != workout_id {
        return Err(AppError::NotFound("Exercise not found".to_string()));
    }

    state
        .workout_repo
        .set_exercise_completed(entry_id, form.completed)
        .await?;

    Ok(Redirect::to(&format!("/workouts/{}", workout_id)).into_response())
}
