pub mod api;
pub mod dashboard;
pub mod exercises;
pub mod health;
pub mod muscle_groups;
pub mod workouts;
