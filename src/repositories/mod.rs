pub mod exercise_repo;
pub mod muscle_group_repo;
pub mod workout_repo;

pub use exercise_repo::ExerciseRepository;
pub use muscle_group_repo::MuscleGroupRepository;
pub use workout_repo::WorkoutRepository;
