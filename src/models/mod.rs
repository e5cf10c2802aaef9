pub(crate) mod form;
pub mod exercise;
pub mod from_row;
pub mod muscle_group;
pub mod workout;
pub mod workout_exercise;

pub use exercise::{CreateExercise, Exercise, ExerciseWithGroup};
pub use from_row::{query_all, query_one, FromSqliteRow};
pub use muscle_group::{CreateMuscleGroup, MuscleGroup};
pub use workout::{CreateWorkout, Workout, WorkoutComplete, WorkoutWithGroup};
pub use workout_exercise::{CreateWorkoutExercise, WorkoutExercise, WorkoutExerciseWithDetails};
