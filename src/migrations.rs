//! Embedded database migrations
//!
//! All schema changes are compiled into the binary. Applied migrations are
//! recorded in a `_migrations` table so each one runs at most once.

use rusqlite::Connection;

use crate::db::DbPool;

pub struct Migration {
    pub name: &'static str,
    pub sql: &'static str,
    /// When set, the migration only runs if the guard returns true.
    /// A skipped migration is still recorded as applied.
    pub guard: Option<fn(&Connection) -> rusqlite::Result<bool>>,
    /// Table rebuilds must not trigger cascades on dependent rows.
    pub foreign_keys_off: bool,
}

impl Migration {
    const fn sql(name: &'static str, sql: &'static str) -> Self {
        Self {
            name,
            sql,
            guard: None,
            foreign_keys_off: false,
        }
    }
}

/// All migrations in order.
pub const MIGRATIONS: &[Migration] = &[
    Migration::sql(
        "001_create_muscle_groups.sql",
        include_str!("../migrations/001_create_muscle_groups.sql"),
    ),
    Migration::sql(
        "002_create_exercises.sql",
        include_str!("../migrations/002_create_exercises.sql"),
    ),
    Migration::sql(
        "003_create_workouts.sql",
        include_str!("../migrations/003_create_workouts.sql"),
    ),
    Migration {
        name: "004_rebuild_legacy_workouts.sql",
        sql: include_str!("../migrations/004_rebuild_legacy_workouts.sql"),
        guard: Some(workouts_missing_muscle_group),
        foreign_keys_off: true,
    },
    Migration::sql(
        "005_create_workout_exercises.sql",
        include_str!("../migrations/005_create_workout_exercises.sql"),
    ),
];

/// Databases from before muscle groups were introduced have a `workouts`
/// table without a `muscle_group_id` column.
fn workouts_missing_muscle_group(conn: &Connection) -> rusqlite::Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('workouts')")?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(!columns.is_empty() && !columns.iter().any(|c| c == "muscle_group_id"))
}

fn apply(conn: &mut Connection, migration: &Migration, track: bool) -> rusqlite::Result<()> {
    let should_run = match migration.guard {
        Some(guard) => guard(conn)?,
        None => true,
    };

    if !should_run {
        tracing::debug!("Migration not needed: {}", migration.name);
    }

    // PRAGMA foreign_keys is a no-op inside a transaction.
    if should_run && migration.foreign_keys_off {
        conn.execute_batch("PRAGMA foreign_keys = OFF;")?;
    }

    let result = (|| -> rusqlite::Result<()> {
        let tx = conn.transaction()?;
        if should_run {
            tx.execute_batch(migration.sql)?;
        }
        if track {
            tx.execute("INSERT INTO _migrations (name) VALUES (?)", [migration.name])?;
        }
        tx.commit()
    })();

    if should_run && migration.foreign_keys_off {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    }

    result
}

/// Run all pending migrations on the database pool.
pub fn run_migrations(pool: &DbPool) -> anyhow::Result<()> {
    tracing::info!("Running migrations...");

    let mut conn = pool.get()?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS _migrations (
            name TEXT PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;

    for migration in MIGRATIONS {
        let already_applied: bool = conn
            .query_row(
                "SELECT COUNT(*) > 0 FROM _migrations WHERE name = ?",
                [migration.name],
                |row| row.get(0),
            )
            .unwrap_or(false);

        if already_applied {
            tracing::debug!("Skipping already applied migration: {}", migration.name);
            continue;
        }

        tracing::info!("Running migration: {}", migration.name);
        apply(&mut conn, migration, true)?;
    }

    tracing::info!("Migrations completed");
    Ok(())
}

/// Run all migrations without tracking, for fresh in-memory test databases.
pub fn run_migrations_for_tests(pool: &DbPool) -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = pool.get()?;

    for migration in MIGRATIONS {
        apply(&mut conn, migration, false)?;
    }

    Ok(())
}
