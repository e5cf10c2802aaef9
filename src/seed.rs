//! Starter data for a fresh database.
//!
//! Every step is safe to repeat: muscle groups are keyed on their unique
//! name, and sample exercises and workouts are only added to empty tables.

use rusqlite::Connection;

use crate::db::DbPool;

const MUSCLE_GROUPS: &[(&str, &str)] = &[
    ("Chest", "Pectoral muscles"),
    ("Back", "Lats, rhomboids, trapezius"),
    ("Biceps", "Biceps brachii"),
    ("Triceps", "Triceps brachii"),
    ("Shoulders", "Deltoids"),
    ("Legs", "Quadriceps, hamstrings, glutes"),
    ("Calves", "Gastrocnemius and soleus"),
    ("Abs", "Abdominal muscles"),
];

/// (name, muscle group, description)
const EXERCISES: &[(&str, &str, &str)] = &[
    ("Barbell bench press", "Chest", "Flat horizontal press"),
    ("Incline dumbbell press", "Chest", "Incline press for the upper chest"),
    ("Pull-ups", "Back", "Vertical pull for back width"),
    ("Barbell row", "Back", "Horizontal pulling movement"),
    ("Barbell curl", "Biceps", "Elbow flexion with a straight bar"),
    ("Hammer curl", "Biceps", "Curl with a neutral grip"),
    ("Skull crushers", "Triceps", "Lying triceps extension"),
    ("Parallel bar dips", "Triceps", "Dips for triceps and lower chest"),
];

/// (name, muscle group, date, notes)
const WORKOUTS: &[(&str, &str, &str, &str)] = &[
    ("Heavy chest", "Chest", "2025-08-23", "Strength focus"),
    ("Back and biceps", "Back", "2025-08-22", "High volume"),
    ("Triceps focus", "Triceps", "2025-08-21", "Definition"),
];

/// (workout, exercise, sets, reps, weight, completed)
const WORKOUT_EXERCISES: &[(&str, &str, i32, i32, f64, bool)] = &[
    ("Heavy chest", "Barbell bench press", 4, 8, 80.0, true),
    ("Heavy chest", "Incline dumbbell press", 3, 10, 25.0, true),
    ("Back and biceps", "Pull-ups", 4, 6, 0.0, false),
    ("Back and biceps", "Barbell row", 3, 8, 60.0, true),
    ("Back and biceps", "Barbell curl", 3, 12, 20.0, false),
    ("Triceps focus", "Skull crushers", 4, 10, 40.0, true),
    ("Triceps focus", "Parallel bar dips", 3, 12, 0.0, false),
];

fn is_empty(conn: &Connection, table: &str) -> rusqlite::Result<bool> {
    conn.query_row(&format!("SELECT COUNT(*) = 0 FROM {}", table), [], |row| {
        row.get(0)
    })
}

fn seed(conn: &mut Connection) -> rusqlite::Result<()> {
    let tx = conn.transaction()?;

    for (name, description) in MUSCLE_GROUPS {
        tx.execute(
            "INSERT OR IGNORE INTO muscle_groups (name, description) VALUES (?, ?)",
            [name, description],
        )?;
    }

    if is_empty(&tx, "exercises")? {
        tracing::info!("Seeding {} sample exercises", EXERCISES.len());
        for (name, group, description) in EXERCISES {
            tx.execute(
                "INSERT INTO exercises (name, muscle_group_id, description)
                 SELECT ?, id, ? FROM muscle_groups WHERE name = ?",
                [name, description, group],
            )?;
        }
    }

    if is_empty(&tx, "workouts")? {
        tracing::info!("Seeding {} sample workouts", WORKOUTS.len());
        for (name, group, date, notes) in WORKOUTS {
            tx.execute(
                "INSERT INTO workouts (name, muscle_group_id, date, notes)
                 SELECT ?, id, ?, ? FROM muscle_groups WHERE name = ?",
                [name, date, notes, group],
            )?;
        }
        for (workout, exercise, sets, reps, weight, completed) in WORKOUT_EXERCISES {
            tx.execute(
                "INSERT INTO workout_exercises (workout_id, exercise_id, sets, reps, weight, is_completed)
                 SELECT w.id, e.id, ?, ?, ?, ?
                 FROM workouts w, exercises e
                 WHERE w.name = ? AND e.name = ?
                 LIMIT 1",
                rusqlite::params![sets, reps, weight, completed, workout, exercise],
            )?;
        }
    }

    tx.commit()
}

/// Insert the default muscle groups plus sample exercises and workouts.
pub fn insert_initial_data(pool: &DbPool) -> anyhow::Result<()> {
    let mut conn = pool.get()?;
    seed(&mut conn)?;
    tracing::info!("Initial data in place");
    Ok(())
}
