pub mod config;
pub mod db;
pub mod error;
pub mod format;
pub mod grouping;
pub mod handlers;
pub mod migrations;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod seed;
pub mod version;

use axum::Router;

use db::DbPool;
use handlers::{api, dashboard, exercises, muscle_groups, workouts};
use repositories::{ExerciseRepository, MuscleGroupRepository, WorkoutRepository};

/// Wire repositories into handler states and build the router.
pub fn build_app(pool: DbPool) -> Router {
    let muscle_group_repo = MuscleGroupRepository::new(pool.clone());
    let exercise_repo = ExerciseRepository::new(pool.clone());
    let workout_repo = WorkoutRepository::new(pool.clone());

    let dashboard_state = dashboard::DashboardState {
        workout_repo: workout_repo.clone(),
    };
    let workouts_state = workouts::WorkoutsState {
        workout_repo: workout_repo.clone(),
        exercise_repo: exercise_repo.clone(),
        muscle_group_repo: muscle_group_repo.clone(),
    };
    let exercises_state = exercises::ExercisesState {
        exercise_repo,
        muscle_group_repo: muscle_group_repo.clone(),
    };
    let muscle_groups_state = muscle_groups::MuscleGroupsState { muscle_group_repo };
    let api_state = api::ApiState { workout_repo };

    routes::create_router(
        dashboard_state,
        workouts_state,
        exercises_state,
        muscle_groups_state,
        api_state,
        pool,
    )
}
