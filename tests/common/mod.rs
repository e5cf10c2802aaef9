#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use chrono::NaiveDate;
use http_body_util::BodyExt;

use gymtrack::db::{create_memory_pool, DbPool};
use gymtrack::migrations::run_migrations_for_tests;
use gymtrack::models::{
    CreateExercise, CreateMuscleGroup, CreateWorkout, CreateWorkoutExercise, Exercise,
    MuscleGroup, Workout, WorkoutExercise,
};
use gymtrack::repositories::{ExerciseRepository, MuscleGroupRepository, WorkoutRepository};

pub fn setup_test_db() -> DbPool {
    let pool = create_memory_pool().expect("Failed to create test database");
    run_migrations_for_tests(&pool).expect("Failed to run migrations");
    pool
}

pub fn create_test_app(pool: DbPool) -> Router {
    gymtrack::build_app(pool)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_string(response: axum::response::Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&body).to_string()
}

// Test data creation helpers
pub async fn create_test_group(pool: &DbPool, name: &str) -> MuscleGroup {
    MuscleGroupRepository::new(pool.clone())
        .create(CreateMuscleGroup {
            name: name.to_string(),
            description: Some(format!("{} muscles", name)),
        })
        .await
        .unwrap()
}

pub async fn create_test_exercise(pool: &DbPool, name: &str, group_id: i64) -> Exercise {
    ExerciseRepository::new(pool.clone())
        .create(CreateExercise {
            name: name.to_string(),
            muscle_group_id: group_id,
            description: None,
            instructions: None,
        })
        .await
        .unwrap()
}

pub async fn create_test_workout(
    pool: &DbPool,
    name: &str,
    group_id: i64,
    date: NaiveDate,
    notes: Option<&str>,
) -> Workout {
    WorkoutRepository::new(pool.clone())
        .create(CreateWorkout {
            name: name.to_string(),
            muscle_group_id: group_id,
            date,
            notes: notes.map(str::to_string),
        })
        .await
        .unwrap()
}

pub async fn add_test_exercise(
    pool: &DbPool,
    workout_id: i64,
    exercise_id: i64,
    sets: Option<i32>,
    reps: Option<i32>,
    weight: Option<f64>,
) -> WorkoutExercise {
    WorkoutRepository::new(pool.clone())
        .add_exercise(CreateWorkoutExercise {
            workout_id,
            exercise_id,
            sets,
            reps,
            weight,
            notes: None,
        })
        .await
        .unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
