use axum::{
    routing::{get, post},
    Router,
};

use crate::db::DbPool;
use crate::handlers::{api, dashboard, exercises, health, muscle_groups, workouts};

pub fn create_router(
    dashboard_state: dashboard::DashboardState,
    workouts_state: workouts::WorkoutsState,
    exercises_state: exercises::ExercisesState,
    muscle_groups_state: muscle_groups::MuscleGroupsState,
    api_state: api::ApiState,
    pool: DbPool,
) -> Router {
    Router::new()
        // Dashboard
        .route("/", get(dashboard::index))
        .with_state(dashboard_state)
        // Workout routes
        .route("/workouts", get(workouts::list).post(workouts::create))
        .route("/workouts/new", get(workouts::new_page))
        .route("/workouts/{id}", get(workouts::show))
        .route("/workouts/{id}/complete", post(workouts::set_completed))
        .route("/workouts/{id}/delete", post(workouts::delete))
        .route("/workouts/{id}/exercises", post(workouts::add_exercise))
        .route(
            "/workouts/{id}/exercises/{entry_id}/complete",
            post(workouts::set_exercise_completed),
        )
        .with_state(workouts_state)
        // Exercise catalog
        .route("/exercises", get(exercises::list).post(exercises::create))
        .route("/exercises/new", get(exercises::new_page))
        .with_state(exercises_state)
        // Muscle groups
        .route(
            "/muscle-groups",
            get(muscle_groups::list).post(muscle_groups::create),
        )
        .with_state(muscle_groups_state)
        // JSON
        .route("/api/workouts", get(api::list_workouts))
        .route("/api/workouts/{id}", get(api::show_workout))
        .with_state(api_state)
        .route("/health", get(health::health_check))
        .with_state(pool)
}
